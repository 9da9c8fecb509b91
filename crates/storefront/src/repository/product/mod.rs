mod command;
mod query;

pub use command::ProductCommandRepository;
pub use query::{ProductQueryRepository, VariantQueryRepository};
