use async_trait::async_trait;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::models::usermodel::{User, UserRole};

#[async_trait]
pub trait UserExt {
    /// Look a user up by exactly one of id, email or aadhaar,
    /// checked in that order.
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
        aadhaar: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn save_user<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        phone: T,
        aadhaar: T,
        role: UserRole,
        password: T,
    ) -> Result<User, sqlx::Error>;

    async fn get_users_by_role(
        &self,
        role: UserRole,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<User>, sqlx::Error>;

    async fn get_user_count_by_role(
        &self,
        role: UserRole,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error>;

    async fn update_user_profile<T: Into<String> + Send>(
        &self,
        user_id: Uuid,
        name: T,
        phone: T,
    ) -> Result<User, sqlx::Error>;

    async fn update_user_password(
        &self,
        user_id: Uuid,
        password: String,
    ) -> Result<User, sqlx::Error>;

    /// Delete a user only if they hold the given role. Returns the number
    /// of rows removed, so callers can 404 on a role mismatch.
    async fn delete_user_with_role(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
        aadhaar: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        if let Some(user_id) = user_id {
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
        } else if let Some(email) = email {
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
        } else if let Some(aadhaar) = aadhaar {
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE aadhaar = $1")
                .bind(aadhaar)
                .fetch_optional(&self.pool)
                .await
        } else {
            Ok(None)
        }
    }

    async fn save_user<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        phone: T,
        aadhaar: T,
        role: UserRole,
        password: T,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, phone, aadhaar, role, password)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#,
        )
        .bind(name.into())
        .bind(email.into())
        .bind(phone.into())
        .bind(aadhaar.into())
        .bind(role)
        .bind(password.into())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_users_by_role(
        &self,
        role: UserRole,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<User>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_as::<_, User>(
            r#"SELECT * FROM users
               WHERE role = $1
                 AND (name ILIKE $2 OR email ILIKE $2 OR aadhaar ILIKE $2)
               ORDER BY created_at DESC
               LIMIT $3 OFFSET $4"#,
        )
        .bind(role)
        .bind(pattern)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_user_count_by_role(
        &self,
        role: UserRole,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint FROM users
               WHERE role = $1
                 AND (name ILIKE $2 OR email ILIKE $2 OR aadhaar ILIKE $2)"#,
        )
        .bind(role)
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_user_profile<T: Into<String> + Send>(
        &self,
        user_id: Uuid,
        name: T,
        phone: T,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET name = $2, phone = $3, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(user_id)
        .bind(name.into())
        .bind(phone.into())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_user_password(
        &self,
        user_id: Uuid,
        password: String,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET password = $2, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(user_id)
        .bind(password)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_user_with_role(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = $2")
            .bind(user_id)
            .bind(role)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
