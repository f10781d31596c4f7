use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateMember, Member, UpdateMember};

pub struct MemberService {
    db: PgPool,
}

impl MemberService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_member(&self, member_data: CreateMember) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO member (name, age) VALUES ($1, $2) RETURNING id, name, age",
        )
        .bind(&member_data.name)
        .bind(member_data.age)
        .fetch_one(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn get_all_members(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT id, name, age FROM member")
            .fetch_all(&self.db)
            .await?;

        Ok(members)
    }

    pub async fn get_member_by_id(&self, member_id: i32) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>("SELECT id, name, age FROM member WHERE id = $1")
            .bind(member_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(member)
    }

    pub async fn update_member(
        &self,
        member_id: i32,
        member_data: UpdateMember,
    ) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "UPDATE member SET name = $2, age = $3 WHERE id = $1 RETURNING id, name, age",
        )
        .bind(member_id)
        .bind(&member_data.name)
        .bind(member_data.age)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    /// Removes the member and returns the deleted row, if it existed.
    /// Workout sessions referencing the member are removed by the cascade.
    pub async fn delete_member(&self, member_id: i32) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "DELETE FROM member WHERE id = $1 RETURNING id, name, age",
        )
        .bind(member_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }
}
