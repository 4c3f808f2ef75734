use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::{SESSION_COOKIE, SESSION_VALUE};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if payload.password != state.config.admin.password {
        tracing::warn!("failed admin login attempt");
        return Err(AppError::Unauthorized);
    }

    let cookie = Cookie::build((SESSION_COOKIE, SESSION_VALUE))
        .http_only(true)
        .secure(state.config.is_production())
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::days(state.config.admin.session_days))
        .build();

    Ok((jar.add(cookie), Json(json!({ "success": true }))))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), Json(json!({ "success": true })))
}

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="robots" content="noindex, nofollow">
  <title>Admin Access</title>
</head>
<body style="margin:0;background:#111827;color:#fff;font-family:sans-serif">
  <form method="post" action="/api/auth/login" data-login-form
        style="max-width:24rem;margin:30vh auto 0;padding:2rem">
    <h1>Admin Access</h1>
    <label for="password">Password</label>
    <input id="password" name="password" type="password" autofocus required
           style="display:block;width:100%;margin:.5rem 0 1rem;padding:.75rem">
    <button type="submit" style="width:100%;padding:.75rem">Sign in</button>
    <p data-login-error hidden>Invalid password</p>
  </form>
</body>
</html>
"#;

/// The obfuscated login path. Any other slug goes back to the feed.
pub async fn login_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    if slug != state.config.admin.secret_path {
        return Redirect::temporary("/").into_response();
    }
    Html(LOGIN_PAGE).into_response()
}
