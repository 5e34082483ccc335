use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<TorrentTracker>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/").route(web::get().to(http_service_status)));
        cfg.service(web::resource("/tracker").route(web::post().to(http_service_tracker)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one listener. The returned future runs the server until its handle is stopped.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: &HttpTrackersConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>), std::io::Error>
{
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(http_server_object.keep_alive))
        .client_request_timeout(Duration::from_secs(http_server_object.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_server_object.disconnect_timeout))
        .max_connections(http_server_object.max_connections as usize)
        .workers(http_server_object.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_tracker(request: HttpRequest, body: web::Bytes, data: Data<Arc<TorrentTracker>>) -> HttpResponse
{
    let peer = request.peer_addr();
    match data.handle_message(&body) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => {
            debug!("[HTTP] Request from {peer:?} rejected: {error}");
            HttpResponse::BadRequest().json(json!({"error": error.to_string()}))
        }
    }
}

pub async fn http_service_status() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("Tracker is running!")
}

pub async fn http_service_stats(data: Data<Arc<TorrentTracker>>) -> HttpResponse
{
    HttpResponse::Ok().json(data.get_stats())
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request from {:?}: 404 Not Found {}", request.peer_addr(), request.path());
    HttpResponse::NotFound().json(json!({"error": "unknown request"}))
}
