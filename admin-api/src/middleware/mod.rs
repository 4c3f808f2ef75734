mod auth;

pub use auth::{require_admin, SESSION_COOKIE, SESSION_VALUE};
