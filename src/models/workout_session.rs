use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: i32,
    pub member_id: i32,
    // Stored as entered; not parsed as a calendar date.
    pub date: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutSession {
    pub member_id: i32,
    pub date: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWorkoutSession {
    pub member_id: i32,
    pub date: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_workout_requires_every_field() {
        let missing_calories: Result<CreateWorkoutSession, _> = serde_json::from_str(
            r#"{"member_id": 1, "date": "2024-01-15", "duration_minutes": 45}"#,
        );
        assert!(missing_calories.is_err());

        let workout: CreateWorkoutSession = serde_json::from_str(
            r#"{"member_id": 1, "date": "2024-01-15", "duration_minutes": 45, "calories_burned": 320}"#,
        )
        .unwrap();
        assert_eq!(workout.member_id, 1);
        assert_eq!(workout.duration_minutes, 45);
    }

    #[test]
    fn workout_date_is_free_form_text() {
        let workout: CreateWorkoutSession = serde_json::from_str(
            r#"{"member_id": 1, "date": "last tuesday", "duration_minutes": 30, "calories_burned": 200}"#,
        )
        .unwrap();
        assert_eq!(workout.date, "last tuesday");
    }
}
