use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use sqlx::PgPool;

use super::errors::ApiError;
use crate::models::{CreateWorkoutSession, UpdateWorkoutSession, WorkoutSession};
use crate::services::WorkoutSessionService;

#[derive(Clone)]
pub struct WorkoutsAppState {
    pub db: PgPool,
}

pub fn workout_routes(db: PgPool) -> Router {
    let shared_state = WorkoutsAppState { db };

    Router::new()
        .route("/", get(get_workouts).post(create_workout))
        .route(
            "/:workout_id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .with_state(shared_state)
}

/// Log a new workout session
pub async fn create_workout(
    State(state): State<WorkoutsAppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutSession>, ApiError>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workout = service.create_workout(request).await?;

    Ok(Json(workout))
}

/// List all workout sessions
pub async fn get_workouts(
    State(state): State<WorkoutsAppState>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workouts = service.get_all_workouts().await?;

    Ok(Json(workouts))
}

/// Get a specific workout session
pub async fn get_workout(
    State(state): State<WorkoutsAppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workout = service
        .get_workout_by_id(workout_id)
        .await?
        .ok_or_else(|| ApiError::not_found("workout session", workout_id))?;

    Ok(Json(workout))
}

/// Overwrite a workout session's fields
pub async fn update_workout(
    State(state): State<WorkoutsAppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateWorkoutSession>, ApiError>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workout = service
        .update_workout(workout_id, request)
        .await?
        .ok_or_else(|| ApiError::not_found("workout session", workout_id))?;

    Ok(Json(workout))
}

/// Delete a workout session, returning the removed record
pub async fn delete_workout(
    State(state): State<WorkoutsAppState>,
    WithRejection(Path(workout_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let service = WorkoutSessionService::new(state.db.clone());
    let workout = service
        .delete_workout(workout_id)
        .await?
        .ok_or_else(|| ApiError::not_found("workout session", workout_id))?;

    Ok(Json(workout))
}
