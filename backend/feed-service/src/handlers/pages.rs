//! Public route surface: the feed shell, deep links, legacy redirects, and
//! the offline fallback.

use actix_web::{get, http::header, web, HttpResponse};

const FEED_SHELL: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover">
  <meta name="theme-color" content="#000000">
  <title>Reelfeed</title>
</head>
<body style="margin:0;background:#000;color:#fff">
  <div id="app" data-feed-shell>
    <p style="text-align:center;margin-top:45vh;font-family:sans-serif">Loading Reelfeed&hellip;</p>
  </div>
</body>
</html>
"##;

const OFFLINE_PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Offline - Reelfeed</title>
</head>
<body style="margin:0;background:#000;color:#fff">
  <div style="text-align:center;margin-top:40vh;font-family:sans-serif">
    <h1>You're offline</h1>
    <p>Reconnect to keep watching.</p>
  </div>
</body>
</html>
"##;

/// Home feed route.
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(FEED_SHELL)
}

/// Offline fallback page.
#[get("/offline")]
pub async fn offline() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(OFFLINE_PAGE)
}

/// Permanent-id video route: malformed ids go home, valid ids hand the start
/// position to the feed shell.
#[get("/p/{id}")]
pub async fn permanent_video(path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    if !video_id::is_valid_video_id(&id) {
        return HttpResponse::Found()
            .insert_header((header::LOCATION, "/"))
            .finish();
    }

    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/?start={id}")))
        .finish()
}

/// Legacy numeric-id route, kept so old links resolve: maps through the
/// legacy table and redirects to the permanent-id route.
#[get("/video/{id}")]
pub async fn legacy_video(path: web::Path<String>) -> HttpResponse {
    let permanent_id = video_id::migrate_legacy_id(&path.into_inner());
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/p/{permanent_id}")))
        .finish()
}
