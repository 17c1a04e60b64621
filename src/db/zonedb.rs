use async_trait::async_trait;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::models::zonemodel::Zone;

#[async_trait]
pub trait ZoneExt {
    async fn save_zone<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
    ) -> Result<Zone, sqlx::Error>;

    async fn get_zone(&self, zone_id: Uuid) -> Result<Option<Zone>, sqlx::Error>;

    async fn get_zone_by_name(&self, name: &str) -> Result<Option<Zone>, sqlx::Error>;

    /// Paged list with an optional substring match on name or description.
    async fn get_zones(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Zone>, sqlx::Error>;

    async fn get_zone_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error>;

    async fn get_all_zones(&self) -> Result<Vec<Zone>, sqlx::Error>;

    async fn update_zone<T: Into<String> + Send>(
        &self,
        zone_id: Uuid,
        name: T,
        description: Option<String>,
    ) -> Result<Zone, sqlx::Error>;

    async fn delete_zone(&self, zone_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl ZoneExt for DBClient {
    async fn save_zone<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
    ) -> Result<Zone, sqlx::Error> {
        sqlx::query_as::<_, Zone>(
            r#"INSERT INTO zones (name, description)
               VALUES ($1, $2)
               RETURNING *"#,
        )
        .bind(name.into())
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_zone(&self, zone_id: Uuid) -> Result<Option<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE id = $1")
            .bind(zone_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_zone_by_name(&self, name: &str) -> Result<Option<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_zones(
        &self,
        search: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Zone>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_as::<_, Zone>(
            r#"SELECT * FROM zones
               WHERE name ILIKE $1 OR description ILIKE $1
               ORDER BY name
               LIMIT $2 OFFSET $3"#,
        )
        .bind(pattern)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_zone_count(&self, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", search.unwrap_or(""));

        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint FROM zones
               WHERE name ILIKE $1 OR description ILIKE $1"#,
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_all_zones(&self) -> Result<Vec<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones ORDER BY name")
            .fetch_all(&self.pool)
            .await
    }

    async fn update_zone<T: Into<String> + Send>(
        &self,
        zone_id: Uuid,
        name: T,
        description: Option<String>,
    ) -> Result<Zone, sqlx::Error> {
        sqlx::query_as::<_, Zone>(
            r#"UPDATE zones
               SET name = $2, description = $3, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(zone_id)
        .bind(name.into())
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_zone(&self, zone_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM zones WHERE id = $1")
            .bind(zone_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
