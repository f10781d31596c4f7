use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use sqlx::PgPool;

use super::errors::ApiError;
use crate::models::{CreateMember, Member, UpdateMember, WorkoutSession};
use crate::services::{MemberService, WorkoutSessionService};

#[derive(Clone)]
pub struct MembersAppState {
    pub db: PgPool,
}

pub fn member_routes(db: PgPool) -> Router {
    let shared_state = MembersAppState { db };

    Router::new()
        .route("/", get(get_members).post(create_member))
        .route(
            "/:member_id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/:member_id/workouts", get(get_member_workouts))
        .with_state(shared_state)
}

/// Register a new member
pub async fn create_member(
    State(state): State<MembersAppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateMember>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let service = MemberService::new(state.db.clone());
    let member = service.create_member(request).await?;

    Ok(Json(member))
}

/// List all members
pub async fn get_members(
    State(state): State<MembersAppState>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let service = MemberService::new(state.db.clone());
    let members = service.get_all_members().await?;

    Ok(Json(members))
}

/// Get a specific member
pub async fn get_member(
    State(state): State<MembersAppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let service = MemberService::new(state.db.clone());
    let member = service
        .get_member_by_id(member_id)
        .await?
        .ok_or_else(|| ApiError::not_found("member", member_id))?;

    Ok(Json(member))
}

/// Overwrite a member's name and age
pub async fn update_member(
    State(state): State<MembersAppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateMember>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let service = MemberService::new(state.db.clone());
    let member = service
        .update_member(member_id, request)
        .await?
        .ok_or_else(|| ApiError::not_found("member", member_id))?;

    Ok(Json(member))
}

/// Delete a member, returning the removed record
pub async fn delete_member(
    State(state): State<MembersAppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Member>, ApiError> {
    let service = MemberService::new(state.db.clone());
    let member = service
        .delete_member(member_id)
        .await?
        .ok_or_else(|| ApiError::not_found("member", member_id))?;

    Ok(Json(member))
}

/// List the workout sessions logged by one member
pub async fn get_member_workouts(
    State(state): State<MembersAppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workouts = service.get_workouts_by_member_id(member_id).await?;

    Ok(Json(workouts))
}
