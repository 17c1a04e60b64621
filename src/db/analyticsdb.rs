use async_trait::async_trait;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::dtos::analyticsdtos::{MonthlyCount, StatusCount, ZoneCount};

/// Aggregations are computed per request; nothing here is cached.
#[async_trait]
pub trait AnalyticsExt {
    async fn complaint_status_counts(&self) -> Result<Vec<StatusCount>, sqlx::Error>;

    async fn complaint_zone_counts(&self) -> Result<Vec<ZoneCount>, sqlx::Error>;

    async fn monthly_complaint_counts(&self) -> Result<Vec<MonthlyCount>, sqlx::Error>;

    async fn total_complaints(&self) -> Result<i64, sqlx::Error>;

    async fn total_assignments(&self) -> Result<i64, sqlx::Error>;

    async fn average_testimonial_rating(&self) -> Result<Option<f64>, sqlx::Error>;

    /// Complaints lodged in the current calendar month, any year.
    async fn current_month_complaints(&self) -> Result<i64, sqlx::Error>;

    async fn citizen_status_counts(
        &self,
        citizen_id: Uuid,
    ) -> Result<Vec<StatusCount>, sqlx::Error>;

    async fn officer_status_counts(
        &self,
        officer_id: Uuid,
    ) -> Result<Vec<StatusCount>, sqlx::Error>;
}

#[async_trait]
impl AnalyticsExt for DBClient {
    async fn complaint_status_counts(&self) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            r#"SELECT status, COUNT(*)::bigint AS count
               FROM complaints
               GROUP BY status
               ORDER BY status"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn complaint_zone_counts(&self) -> Result<Vec<ZoneCount>, sqlx::Error> {
        sqlx::query_as::<_, ZoneCount>(
            r#"SELECT z.name AS zone_name, COUNT(*)::bigint AS count
               FROM complaints c
               LEFT JOIN zones z ON z.id = c.zone_id
               GROUP BY z.name
               ORDER BY count DESC"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn monthly_complaint_counts(&self) -> Result<Vec<MonthlyCount>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyCount>(
            r#"SELECT date_trunc('month', created_at) AS month, COUNT(*)::bigint AS count
               FROM complaints
               GROUP BY month
               ORDER BY month"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn total_complaints(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::bigint FROM complaints")
            .fetch_one(&self.pool)
            .await
    }

    async fn total_assignments(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::bigint FROM complaint_assignments")
            .fetch_one(&self.pool)
            .await
    }

    async fn average_testimonial_rating(&self) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating)::float8 FROM testimonials")
            .fetch_one(&self.pool)
            .await
    }

    async fn current_month_complaints(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint FROM complaints
               WHERE EXTRACT(MONTH FROM created_at) = EXTRACT(MONTH FROM NOW())"#,
        )
        .fetch_one(&self.pool)
        .await
    }

    async fn citizen_status_counts(
        &self,
        citizen_id: Uuid,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            r#"SELECT status, COUNT(*)::bigint AS count
               FROM complaints
               WHERE citizen_id = $1
               GROUP BY status
               ORDER BY status"#,
        )
        .bind(citizen_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn officer_status_counts(
        &self,
        officer_id: Uuid,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            r#"SELECT c.status, COUNT(*)::bigint AS count
               FROM complaints c
               JOIN complaint_assignments a ON a.complaint_id = c.id
               WHERE a.officer_id = $1
               GROUP BY c.status
               ORDER BY c.status"#,
        )
        .bind(officer_id)
        .fetch_all(&self.pool)
        .await
    }
}
