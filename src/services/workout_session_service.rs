use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateWorkoutSession, UpdateWorkoutSession, WorkoutSession};

pub struct WorkoutSessionService {
    db: PgPool,
}

impl WorkoutSessionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_workout(
        &self,
        workout_data: CreateWorkoutSession,
    ) -> Result<WorkoutSession> {
        let workout = sqlx::query_as::<_, WorkoutSession>(
            r#"
            INSERT INTO workout_session (member_id, date, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, date, duration_minutes, calories_burned
            "#,
        )
        .bind(workout_data.member_id)
        .bind(&workout_data.date)
        .bind(workout_data.duration_minutes)
        .bind(workout_data.calories_burned)
        .fetch_one(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn get_all_workouts(&self) -> Result<Vec<WorkoutSession>> {
        let workouts = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, member_id, date, duration_minutes, calories_burned FROM workout_session",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }

    pub async fn get_workout_by_id(&self, workout_id: i32) -> Result<Option<WorkoutSession>> {
        let workout = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, member_id, date, duration_minutes, calories_burned FROM workout_session WHERE id = $1",
        )
        .bind(workout_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn get_workouts_by_member_id(&self, member_id: i32) -> Result<Vec<WorkoutSession>> {
        let workouts = sqlx::query_as::<_, WorkoutSession>(
            "SELECT id, member_id, date, duration_minutes, calories_burned FROM workout_session WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }

    pub async fn update_workout(
        &self,
        workout_id: i32,
        workout_data: UpdateWorkoutSession,
    ) -> Result<Option<WorkoutSession>> {
        let workout = sqlx::query_as::<_, WorkoutSession>(
            r#"
            UPDATE workout_session
            SET member_id = $2, date = $3, duration_minutes = $4, calories_burned = $5
            WHERE id = $1
            RETURNING id, member_id, date, duration_minutes, calories_burned
            "#,
        )
        .bind(workout_id)
        .bind(workout_data.member_id)
        .bind(&workout_data.date)
        .bind(workout_data.duration_minutes)
        .bind(workout_data.calories_burned)
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn delete_workout(&self, workout_id: i32) -> Result<Option<WorkoutSession>> {
        let workout = sqlx::query_as::<_, WorkoutSession>(
            "DELETE FROM workout_session WHERE id = $1 RETURNING id, member_id, date, duration_minutes, calories_burned",
        )
        .bind(workout_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(workout)
    }
}
