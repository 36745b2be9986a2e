pub mod middleware;

pub use middleware::{admin_middleware, auth_middleware, AdminUser, AuthUser};
