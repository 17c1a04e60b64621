pub mod analyticsdb;
pub mod complaintdb;
pub mod db;
pub mod feedbackdb;
pub mod userdb;
pub mod zonedb;

pub use db::DBClient;
