pub mod auth;
pub mod checkout;
pub mod customer;
pub mod employee;
pub mod order;
pub mod product;
