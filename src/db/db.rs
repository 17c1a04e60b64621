use sqlx::{Pool, Postgres};

#[derive(Debug, Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPool;

    #[tokio::test]
    async fn db_client_constructs_from_lazy_pool() {
        let pool = PgPool::connect_lazy("postgres://localhost/civicdesk").unwrap();
        let client = DBClient::new(pool);
        let _ = client.clone();
    }
}
