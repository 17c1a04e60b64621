pub mod analytics;
pub mod auth;
pub mod complaints;
pub mod feedback;
pub mod users;
pub mod zones;
