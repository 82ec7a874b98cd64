//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use crate::core::{parse_config, Config, TileError};
use crate::overlay_service::OverlayService;
use crate::server::{error_response, routes, AppState};
use actix_web::body::to_bytes;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};

fn app_state(toml: &str) -> web::Data<AppState> {
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    web::Data::new(AppState {
        service: OverlayService::from_config(&config).unwrap(),
        cache_max_age: 43200,
    })
}

const NO_CATALOG: &str = r#"
[webserver]
port = 6767
"#;

#[actix_web::test]
async fn test_tile() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(DEFAULT_CONFIG))
            .configure(routes),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/auto/?z=19&x=327938&y=167876")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "max-age=43200"
    );
    let body = test::read_body(resp).await;
    let image = image::load_from_memory(&body).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (256, 256));
    assert!(image.pixels().any(|p| p[3] == 255));
    assert_eq!(image.get_pixel(0, 0)[3], 0);
}

#[actix_web::test]
async fn test_empty_tile() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(DEFAULT_CONFIG))
            .configure(routes),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/auto/?z=12&x=2562&y=1311")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let image = image::load_from_memory(&body).unwrap().to_rgba8();
    assert!(image.pixels().all(|p| p[3] == 0));
}

#[actix_web::test]
async fn test_invalid_requests() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(DEFAULT_CONFIG))
            .configure(routes),
    )
    .await;
    for uri in &[
        "/auto/?z=-1&x=0&y=0",
        "/auto/?z=19&x=524288&y=0",
        "/auto/?z=19&x=1",
        "/auto/?z=19&x=a&y=0",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[actix_web::test]
async fn test_unavailable_catalog() {
    let app = test::init_service(App::new().app_data(app_state(NO_CATALOG)).configure(routes)).await;
    let req = test::TestRequest::get()
        .uri("/auto/?z=19&x=327938&y=167876")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).starts_with("Object catalog unavailable"));
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(DEFAULT_CONFIG))
            .configure(routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Catalog is loaded");

    let app = test::init_service(App::new().app_data(app_state(NO_CATALOG)).configure(routes)).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test::read_body(resp).await, "Catalog is not loaded");
}

#[actix_web::test]
async fn test_error_status() {
    let errors = vec![
        (
            TileError::InvalidTileIndex("Invalid zoom level 31".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            TileError::ProjectionDomain {
                lat: 91.0,
                lon: 0.0,
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            TileError::CatalogUnavailable("no catalog configured".to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            TileError::RenderFailure("encoder failed".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, status) in errors {
        let resp = error_response(&err);
        assert_eq!(resp.status(), status, "{}", err);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, err.to_string());
    }
}
