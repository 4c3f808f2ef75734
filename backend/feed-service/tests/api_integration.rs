use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, Error};
use video_catalog::{Video, VideoCatalog, PAGE_SIZE};

use feed_service::handlers::{pages, videos};
use feed_service::middleware::ProbeFilter;

fn instant_catalog() -> web::Data<VideoCatalog> {
    web::Data::new(VideoCatalog::with_latency(Duration::ZERO, Duration::ZERO))
}

async fn spawn_app(
    catalog: web::Data<VideoCatalog>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>
{
    test::init_service(
        App::new()
            .app_data(catalog)
            .wrap(ProbeFilter)
            .service(pages::home)
            .service(pages::offline)
            .service(pages::permanent_video)
            .service(pages::legacy_video)
            .service(
                web::scope("/api/videos")
                    .service(videos::more_videos)
                    .service(videos::all_videos)
                    .service(videos::initial_videos)
                    .service(videos::get_video),
            ),
    )
    .await
}

fn location(resp: &ServiceResponse<impl MessageBody>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

#[actix_web::test]
async fn initial_page_returns_page_size_records() {
    let app = spawn_app(instant_catalog()).await;

    let req = test::TestRequest::get().uri("/api/videos").to_request();
    let videos: Vec<Video> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(videos.len(), PAGE_SIZE);
    assert_eq!(videos[0].permanent_id, "a8b92cDdX01p1");
}

#[actix_web::test]
async fn pagination_exhausts_without_repeating() {
    let app = spawn_app(instant_catalog()).await;

    let first: Vec<Video> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/videos").to_request(),
    )
    .await;
    let second: Vec<Video> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/videos/more").to_request(),
    )
    .await;
    let third: Vec<Video> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/videos/more").to_request(),
    )
    .await;

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);
    assert!(third.is_empty());

    let first_ids: Vec<&str> = first.iter().map(|v| v.id.as_str()).collect();
    assert!(second.iter().all(|v| !first_ids.contains(&v.id.as_str())));
}

#[actix_web::test]
async fn lookup_by_permanent_id() {
    let app = spawn_app(instant_catalog()).await;

    let req = test::TestRequest::get()
        .uri("/api/videos/h4L6wE8vY2uI3")
        .to_request();
    let video: Video = test::call_and_read_body_json(&app, req).await;
    assert_eq!(video.id, "3");
}

#[actix_web::test]
async fn lookup_rejects_malformed_and_unknown_ids() {
    let app = spawn_app(instant_catalog()).await;

    let malformed = test::TestRequest::get()
        .uri("/api/videos/not-an-id!")
        .to_request();
    let resp = test::call_service(&app, malformed).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let unknown = test::TestRequest::get()
        .uri("/api/videos/zzzzzzzzzzzzz")
        .to_request();
    let resp = test::call_service(&app, unknown).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn permanent_route_redirects_malformed_ids_home() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/p/short").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn permanent_route_hands_start_position_to_the_shell() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/p/a8b92cDdX01p1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/?start=a8b92cDdX01p1");
}

#[actix_web::test]
async fn legacy_route_redirects_through_the_mapping() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/video/2").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/p/k7M3nP9qR5sT2");
}

#[actix_web::test]
async fn unmapped_legacy_route_still_redirects_to_a_valid_id() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/video/999").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let target = location(&resp);
    let id = target.strip_prefix("/p/").expect("must target the permanent route");
    assert!(video_id::is_valid_video_id(id));
}

#[actix_web::test]
async fn probe_prefixes_get_a_redirect_loop() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/wp-admin/setup.html").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/wp-admin/setup.html/redirect");
}

#[actix_web::test]
async fn scanner_extensions_get_a_bare_404() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/index.php").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn shell_pages_render() {
    let app = spawn_app(instant_catalog()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/offline").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}
