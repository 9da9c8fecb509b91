mod auth;
mod checkout;
mod order;
mod product;

pub use auth::{AuthService, AuthServiceDeps};
pub use checkout::{CheckoutService, CheckoutServiceDeps};
pub use order::{OrderQueryService, OrderQueryServiceDeps};
pub use product::{
    ProductCommandService, ProductCommandServiceDeps, ProductQueryService, ProductQueryServiceDeps,
};
