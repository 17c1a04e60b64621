pub mod complaintmodel;
pub mod feedbackmodels;
pub mod usermodel;
pub mod zonemodel;
