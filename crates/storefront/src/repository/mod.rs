mod checkout;
mod customer;
mod employee;
mod order;
mod product;

pub use checkout::CheckoutCommandRepository;
pub use customer::{CustomerCommandRepository, CustomerQueryRepository};
pub use employee::EmployeeQueryRepository;
pub use order::OrderQueryRepository;
pub use product::{ProductCommandRepository, ProductQueryRepository, VariantQueryRepository};
