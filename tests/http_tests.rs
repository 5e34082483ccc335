mod common;

use actix_web::{test, App};
use actix_web::http::StatusCode;
use serde_json::{json, Value};
use p2p_tracker::http::http::{http_service, http_service_cors, http_service_routes};

macro_rules! test_app {
    ($tracker:expr) => {
        test::init_service(
            App::new()
                .wrap(http_service_cors())
                .configure(http_service_routes($tracker.clone())),
        )
        .await
    };
}

#[actix_web::test]
async fn test_http_status_endpoint() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Tracker is running!");
}

#[actix_web::test]
async fn test_http_own_and_need() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::post()
        .uri("/tracker")
        .set_json(common::own_request(1, 7001, "a.txt"))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp, json!({"status": "File owner added"}));

    let req = test::TestRequest::post()
        .uri("/tracker")
        .set_json(common::need_request(2, "a.txt"))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["dest_node_id"], json!(2));
    assert_eq!(resp["search_result"][0][0]["node_id"], json!(1));
}

#[actix_web::test]
async fn test_http_accepts_addr_alias() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::post()
        .uri("/tracker")
        .set_json(json!({"mode": "REGISTER", "node_id": 7, "addr": ["10.0.0.7", 7007]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(tracker.get_nodes().len(), 1);
}

#[actix_web::test]
async fn test_http_invalid_mode() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::post()
        .uri("/tracker")
        .set_json(json!({"mode": "SEED", "node_id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Invalid mode: SEED"}));
}

#[actix_web::test]
async fn test_http_malformed_body() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::post()
        .uri("/tracker")
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
}

#[actix_web::test]
async fn test_http_stats_endpoint() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    common::send(&tracker, common::register_request(1, 7001));

    let req = test::TestRequest::get().uri("/stats").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["register_handled"], json!(1));
    assert_eq!(resp["nodes"], json!(1));
}

#[actix_web::test]
async fn test_http_not_found() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::get().uri("/announce").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "unknown request"}));
}

#[actix_web::test]
async fn test_http_get_on_tracker_route_is_not_found() {
    let (tracker, _dir) = common::create_test_tracker();
    let app = test_app!(tracker);

    let req = test::TestRequest::get().uri("/tracker").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_http_service_future_outlives_config() {
    let (tracker, dir) = common::create_test_tracker();
    let (handle, server) = {
        let config = common::create_test_config(&dir);
        let http_server_object = config.http_server[0].clone();
        let address = http_server_object.bind_address.parse().unwrap();
        http_service(address, tracker.clone(), &http_server_object).unwrap()
    };

    let running = actix_web::rt::spawn(server);
    handle.stop(true).await;
    assert!(running.await.unwrap().is_ok());
}
