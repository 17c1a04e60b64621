use async_trait::async_trait;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::models::complaintmodel::{
    Complaint, ComplaintAssignment, ComplaintStatus, ComplaintWithOfficer,
};

#[async_trait]
pub trait ComplaintExt {
    async fn save_complaint<T: Into<String> + Send>(
        &self,
        citizen_id: Uuid,
        zone_id: Option<Uuid>,
        title: T,
        description: T,
        photo: Option<String>,
        location: T,
        latitude: f64,
        longitude: f64,
    ) -> Result<Complaint, sqlx::Error>;

    async fn get_complaint(&self, complaint_id: Uuid) -> Result<Option<Complaint>, sqlx::Error>;

    async fn get_citizen_complaints(
        &self,
        citizen_id: Uuid,
    ) -> Result<Vec<Complaint>, sqlx::Error>;

    /// Admin view: complaints joined with citizen, zone and assigned officer,
    /// filtered by a substring match on title, description or citizen name.
    async fn search_complaints(
        &self,
        query: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ComplaintWithOfficer>, sqlx::Error>;

    async fn get_complaint_count(&self, query: Option<&str>) -> Result<i64, sqlx::Error>;

    async fn get_assignment(
        &self,
        complaint_id: Uuid,
    ) -> Result<Option<ComplaintAssignment>, sqlx::Error>;

    /// Upsert the complaint's single assignment row and move the complaint
    /// to in_progress, atomically. Re-assigning replaces the officer in place.
    async fn assign_officer(
        &self,
        complaint_id: Uuid,
        officer_id: Uuid,
    ) -> Result<(ComplaintAssignment, Complaint), sqlx::Error>;

    async fn get_assigned_complaints(
        &self,
        officer_id: Uuid,
        query: Option<&str>,
        status: Option<ComplaintStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Complaint>, sqlx::Error>;

    async fn get_assigned_complaint_count(
        &self,
        officer_id: Uuid,
        query: Option<&str>,
        status: Option<ComplaintStatus>,
    ) -> Result<i64, sqlx::Error>;

    async fn update_complaint_status(
        &self,
        complaint_id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Complaint, sqlx::Error>;
}

#[async_trait]
impl ComplaintExt for DBClient {
    async fn save_complaint<T: Into<String> + Send>(
        &self,
        citizen_id: Uuid,
        zone_id: Option<Uuid>,
        title: T,
        description: T,
        photo: Option<String>,
        location: T,
        latitude: f64,
        longitude: f64,
    ) -> Result<Complaint, sqlx::Error> {
        sqlx::query_as::<_, Complaint>(
            r#"INSERT INTO complaints
                   (citizen_id, zone_id, title, description, photo, location, latitude, longitude)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#,
        )
        .bind(citizen_id)
        .bind(zone_id)
        .bind(title.into())
        .bind(description.into())
        .bind(photo)
        .bind(location.into())
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_complaint(&self, complaint_id: Uuid) -> Result<Option<Complaint>, sqlx::Error> {
        sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE id = $1")
            .bind(complaint_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_citizen_complaints(
        &self,
        citizen_id: Uuid,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        sqlx::query_as::<_, Complaint>(
            r#"SELECT * FROM complaints
               WHERE citizen_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(citizen_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_complaints(
        &self,
        query: Option<&str>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ComplaintWithOfficer>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", query.unwrap_or(""));

        sqlx::query_as::<_, ComplaintWithOfficer>(
            r#"SELECT c.id, c.citizen_id, u.name AS citizen_name,
                      c.zone_id, z.name AS zone_name,
                      c.title, c.description, c.photo, c.location,
                      c.latitude, c.longitude, c.status,
                      a.officer_id AS officer_id, o.name AS officer_name,
                      c.created_at
               FROM complaints c
               JOIN users u ON u.id = c.citizen_id
               LEFT JOIN zones z ON z.id = c.zone_id
               LEFT JOIN complaint_assignments a ON a.complaint_id = c.id
               LEFT JOIN users o ON o.id = a.officer_id
               WHERE c.title ILIKE $1 OR c.description ILIKE $1 OR u.name ILIKE $1
               ORDER BY c.created_at DESC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(pattern)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_complaint_count(&self, query: Option<&str>) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", query.unwrap_or(""));

        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)::bigint
               FROM complaints c
               JOIN users u ON u.id = c.citizen_id
               WHERE c.title ILIKE $1 OR c.description ILIKE $1 OR u.name ILIKE $1"#,
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_assignment(
        &self,
        complaint_id: Uuid,
    ) -> Result<Option<ComplaintAssignment>, sqlx::Error> {
        sqlx::query_as::<_, ComplaintAssignment>(
            "SELECT * FROM complaint_assignments WHERE complaint_id = $1",
        )
        .bind(complaint_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn assign_officer(
        &self,
        complaint_id: Uuid,
        officer_id: Uuid,
    ) -> Result<(ComplaintAssignment, Complaint), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let assignment = sqlx::query_as::<_, ComplaintAssignment>(
            r#"INSERT INTO complaint_assignments (complaint_id, officer_id)
               VALUES ($1, $2)
               ON CONFLICT (complaint_id)
               DO UPDATE SET officer_id = EXCLUDED.officer_id, assigned_at = NOW()
               RETURNING *"#,
        )
        .bind(complaint_id)
        .bind(officer_id)
        .fetch_one(&mut *tx)
        .await?;

        let complaint = sqlx::query_as::<_, Complaint>(
            r#"UPDATE complaints
               SET status = 'in_progress'
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(complaint_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((assignment, complaint))
    }

    async fn get_assigned_complaints(
        &self,
        officer_id: Uuid,
        query: Option<&str>,
        status: Option<ComplaintStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let offset = (page - 1) as i64 * limit as i64;
        let pattern = format!("%{}%", query.unwrap_or(""));

        match status {
            Some(status) => {
                sqlx::query_as::<_, Complaint>(
                    r#"SELECT c.* FROM complaints c
                       JOIN complaint_assignments a ON a.complaint_id = c.id
                       WHERE a.officer_id = $1
                         AND (c.title ILIKE $2 OR c.description ILIKE $2)
                         AND c.status = $3
                       ORDER BY c.created_at DESC
                       LIMIT $4 OFFSET $5"#,
                )
                .bind(officer_id)
                .bind(pattern)
                .bind(status)
                .bind(limit as i64)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Complaint>(
                    r#"SELECT c.* FROM complaints c
                       JOIN complaint_assignments a ON a.complaint_id = c.id
                       WHERE a.officer_id = $1
                         AND (c.title ILIKE $2 OR c.description ILIKE $2)
                       ORDER BY c.created_at DESC
                       LIMIT $3 OFFSET $4"#,
                )
                .bind(officer_id)
                .bind(pattern)
                .bind(limit as i64)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn get_assigned_complaint_count(
        &self,
        officer_id: Uuid,
        query: Option<&str>,
        status: Option<ComplaintStatus>,
    ) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{}%", query.unwrap_or(""));

        match status {
            Some(status) => {
                sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*)::bigint FROM complaints c
                       JOIN complaint_assignments a ON a.complaint_id = c.id
                       WHERE a.officer_id = $1
                         AND (c.title ILIKE $2 OR c.description ILIKE $2)
                         AND c.status = $3"#,
                )
                .bind(officer_id)
                .bind(pattern)
                .bind(status)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*)::bigint FROM complaints c
                       JOIN complaint_assignments a ON a.complaint_id = c.id
                       WHERE a.officer_id = $1
                         AND (c.title ILIKE $2 OR c.description ILIKE $2)"#,
                )
                .bind(officer_id)
                .bind(pattern)
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    async fn update_complaint_status(
        &self,
        complaint_id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Complaint, sqlx::Error> {
        sqlx::query_as::<_, Complaint>(
            r#"UPDATE complaints
               SET status = $2
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(complaint_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }
}
