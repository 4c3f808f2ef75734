//! Cookie guard for the admin surface.
//!
//! There is no user identity: the session is a single flag cookie set by the
//! login handler. Requests without it are bounced to the obfuscated login
//! path.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;

pub const SESSION_COOKIE: &str = "admin-auth";
pub const SESSION_VALUE: &str = "authenticated";

pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value() == SESSION_VALUE)
        .unwrap_or(false);

    if !authenticated {
        let login_path = format!("/{}", state.config.admin.secret_path);
        return Redirect::temporary(&login_path).into_response();
    }

    next.run(request).await
}
