mod command;
mod query;

pub use command::{ProductCommandService, ProductCommandServiceDeps};
pub use query::{ProductQueryService, ProductQueryServiceDeps};
