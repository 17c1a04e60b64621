pub mod analyticsdtos;
pub mod complaintdtos;
pub mod feedbackdtos;
pub mod userdtos;
pub mod zonedtos;
