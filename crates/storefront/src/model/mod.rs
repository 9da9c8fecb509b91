pub mod customer;
pub mod employee;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod product;
