//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::TileError;
use crate::overlay_service::OverlayService;
use crate::runtime_config::{config_from_args, service_from_args};
use actix_web::http::{header, StatusCode};
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use clap::ArgMatches;

/// Application state
pub struct AppState {
    pub service: OverlayService,
    pub cache_max_age: u32,
}

#[derive(Deserialize)]
pub struct TileParams {
    z: i64,
    x: i64,
    y: i64,
}

fn error_status(err: &TileError) -> StatusCode {
    match err {
        TileError::InvalidTileIndex(_) => StatusCode::BAD_REQUEST,
        // Static catalogs reject such corners at load time, other catalogs may not
        TileError::ProjectionDomain { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        TileError::CatalogUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        TileError::RenderFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: &TileError) -> HttpResponse {
    let status = error_status(err);
    if status.is_server_error() {
        error!("{}", err);
    } else {
        debug!("{}", err);
    }
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(err.to_string())
}

/// Overlay tile in XYZ scheme, e.g. `/auto/?z=19&x=327938&y=167876`
async fn tile_png(state: web::Data<AppState>, params: web::Query<TileParams>) -> HttpResponse {
    let TileParams { z, x, y } = params.into_inner();
    let svc = state.clone();
    match web::block(move || svc.service.tile_png(z, x, y)).await {
        Ok(Ok(png)) => HttpResponse::Ok()
            .content_type("application/octet-stream")
            .insert_header((
                header::CACHE_CONTROL,
                format!("max-age={}", state.cache_max_age),
            ))
            .body(png),
        Ok(Err(err)) => error_response(&err),
        Err(err) => error_response(&TileError::RenderFailure(err.to_string())),
    }
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    if state.service.is_ready() {
        HttpResponse::Ok().body("Catalog is loaded")
    } else {
        HttpResponse::InternalServerError().body("Catalog is not loaded")
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auto/").route(web::get().to(tile_png)))
        .service(web::resource("/health").route(web::get().to(health)));
}

pub fn webserver(args: &ArgMatches) -> Result<(), String> {
    let config = config_from_args(args)?;
    let service = service_from_args(&config, args)?;
    let host = config
        .webserver
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config.webserver.port.unwrap_or(6767);
    let bind_addr = format!("{}:{}", host, port);
    let workers = config
        .webserver
        .threads
        .map(|n| n as usize)
        .unwrap_or_else(num_cpus::get);
    let cache_max_age = config.webserver.cache_control_max_age.unwrap_or(300);

    if !service.is_ready() {
        warn!("Object catalog not loaded - serving tiles below zoom level 19 only");
    }
    let state = web::Data::new(AppState {
        service,
        cache_max_age,
    });

    info!("Starting {} workers on http://{}/", workers, bind_addr);
    actix_web::rt::System::new()
        .block_on(async {
            HttpServer::new(move || {
                App::new()
                    .app_data(state.clone())
                    .wrap(middleware::Logger::default())
                    .configure(routes)
            })
            .workers(workers)
            .shutdown_timeout(3) // default: 30s
            .bind(bind_addr.as_str())?
            .run()
            .await
        })
        .map_err(|e| format!("Can not start server on {} - {}", bind_addr, e))
}
