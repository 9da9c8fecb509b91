pub mod api;
pub mod auth;
pub mod checkout;
pub mod order;
pub mod product;
