pub mod actor;
pub mod requests;
pub mod response;
