mod jwt;
mod validate;

pub use jwt::{admin_middleware, auth_middleware};
pub use validate::SimpleValidatedJson;
