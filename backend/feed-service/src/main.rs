use actix_web::{web, App, HttpResponse, HttpServer};
use std::io;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_catalog::VideoCatalog;

use feed_service::config::Config;
use feed_service::handlers::{pages, videos};
use feed_service::middleware::ProbeFilter;

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting feed-service v{}", env!("CARGO_PKG_VERSION"));

    let catalog = web::Data::new(VideoCatalog::new());
    let addr = (config.server.host.clone(), config.server.port);
    tracing::info!("Listening on {}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .wrap(TracingLogger::default())
            .wrap(ProbeFilter)
            .route("/health", web::get().to(health_check))
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
            )
    })
    .bind(addr)?
    .run()
    .await
}
