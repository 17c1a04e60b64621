use async_trait::async_trait;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::models::feedbackmodels::{Contact, Testimonial, TestimonialWithUser};

#[async_trait]
pub trait FeedbackExt {
    async fn save_testimonial<T: Into<String> + Send>(
        &self,
        user_id: Uuid,
        content: T,
        rating: i32,
    ) -> Result<Testimonial, sqlx::Error>;

    async fn get_testimonial(
        &self,
        testimonial_id: Uuid,
    ) -> Result<Option<Testimonial>, sqlx::Error>;

    /// Admin list, optionally filtered by the submitting user's name.
    async fn get_testimonials(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<TestimonialWithUser>, sqlx::Error>;

    async fn get_testimonial_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error>;

    async fn get_approved_testimonials(
        &self,
        limit: usize,
    ) -> Result<Vec<TestimonialWithUser>, sqlx::Error>;

    async fn toggle_testimonial_approval(
        &self,
        testimonial_id: Uuid,
    ) -> Result<Testimonial, sqlx::Error>;

    async fn delete_testimonial(&self, testimonial_id: Uuid) -> Result<u64, sqlx::Error>;

    async fn save_contact<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        message: T,
    ) -> Result<Contact, sqlx::Error>;

    async fn get_contacts(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Contact>, sqlx::Error>;

    async fn get_contact_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error>;

    async fn delete_contact(&self, contact_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl FeedbackExt for DBClient {
    async fn save_testimonial<T: Into<String> + Send>(
        &self,
        user_id: Uuid,
        content: T,
        rating: i32,
    ) -> Result<Testimonial, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            r#"INSERT INTO testimonials (user_id, content, rating)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(user_id)
        .bind(content.into())
        .bind(rating)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_testimonial(
        &self,
        testimonial_id: Uuid,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(testimonial_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_testimonials(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<TestimonialWithUser>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_as::<_, TestimonialWithUser>(
            r#"SELECT t.id, t.user_id, u.name AS user_name,
                      t.content, t.rating, t.is_approved, t.created_at
               FROM testimonials t
               JOIN users u ON u.id = t.user_id
               WHERE u.name ILIKE $1
               ORDER BY t.created_at DESC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(pattern)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_testimonial_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint
               FROM testimonials t
               JOIN users u ON u.id = t.user_id
               WHERE u.name ILIKE $1"#,
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_approved_testimonials(
        &self,
        limit: usize,
    ) -> Result<Vec<TestimonialWithUser>, sqlx::Error> {
        sqlx::query_as::<_, TestimonialWithUser>(
            r#"SELECT t.id, t.user_id, u.name AS user_name,
                      t.content, t.rating, t.is_approved, t.created_at
               FROM testimonials t
               JOIN users u ON u.id = t.user_id
               WHERE t.is_approved = TRUE
               ORDER BY t.created_at DESC
               LIMIT $1"#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
    }

    async fn toggle_testimonial_approval(
        &self,
        testimonial_id: Uuid,
    ) -> Result<Testimonial, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            r#"UPDATE testimonials
               SET is_approved = NOT is_approved
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(testimonial_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_testimonial(&self, testimonial_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(testimonial_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn save_contact<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        message: T,
    ) -> Result<Contact, sqlx::Error> {
        sqlx::query_as::<_, Contact>(
            r#"INSERT INTO contacts (name, email, message)
               VALUES ($1, $2, $3)
               RETURNING *"#,
        )
        .bind(name.into())
        .bind(email.into())
        .bind(message.into())
        .fetch_one(&self.pool)
        .await
    }

    async fn get_contacts(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_as::<_, Contact>(
            r#"SELECT * FROM contacts
               WHERE name ILIKE $1 OR email ILIKE $1 OR message ILIKE $1
               ORDER BY submitted_at DESC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(pattern)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_contact_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint FROM contacts
               WHERE name ILIKE $1 OR email ILIKE $1 OR message ILIKE $1"#,
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_contact(&self, contact_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
