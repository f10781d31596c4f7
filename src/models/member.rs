use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub age: i32,
}

// PUT replaces both fields unconditionally, so neither is optional.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMember {
    pub name: String,
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_member_requires_name_and_age() {
        let missing_age: Result<CreateMember, _> = serde_json::from_str(r#"{"name": "Ana"}"#);
        assert!(missing_age.is_err());

        let missing_name: Result<CreateMember, _> = serde_json::from_str(r#"{"age": 30}"#);
        assert!(missing_name.is_err());

        let member: CreateMember = serde_json::from_str(r#"{"name": "Ana", "age": 30}"#).unwrap();
        assert_eq!(member.name, "Ana");
        assert_eq!(member.age, 30);
    }

    #[test]
    fn member_serializes_its_columns_only() {
        let member = Member {
            id: 1,
            name: "Ana".to_string(),
            age: 30,
        };

        let value = serde_json::to_value(&member).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["age"], 30);
    }
}
