use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;
use tower::ServiceExt;

use cabin_booking_web::{
    app,
    booking::{today, BookingSettings},
    cache::AppCache,
    catalog::Catalog,
    models::{BookingRecord, Cabin},
    AppState,
};

fn in_days(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

fn test_app() -> Router {
    let cabins = vec![
        Cabin {
            id: 1,
            name: "001".to_string(),
            max_capacity: 2,
            regular_price: dec!(100),
            discount: dec!(20),
            image: "/static/cabins/cabin-001.svg".to_string(),
            description: "Cozy".to_string(),
        },
        Cabin {
            id: 2,
            name: "002".to_string(),
            max_capacity: 6,
            regular_price: dec!(150),
            discount: dec!(0),
            image: "/static/cabins/cabin-002.svg".to_string(),
            description: String::new(),
        },
    ];
    let bookings = vec![BookingRecord {
        cabin_id: 1,
        start_date: in_days(10),
        end_date: in_days(10),
    }];
    let settings = BookingSettings {
        min_booking_length: 1,
        max_booking_length: 30,
    };

    let catalog = Catalog::new(settings, cabins, bookings).unwrap();
    app(AppState::new(catalog, AppCache::default()), Path::new("static"))
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, form: String, cookie: Option<&str>) -> Response {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::from(form)).unwrap())
        .await
        .unwrap()
}

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .expect("session cookie")
}

fn range_form(from: NaiveDate, to: NaiveDate) -> String {
    format!("from={}&to={}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
}

#[tokio::test]
async fn test_home_redirects_to_cabins() {
    let app = test_app();
    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/cabins");
}

#[tokio::test]
async fn test_cabin_list_renders_cards() {
    let app = test_app();
    let response = get(&app, "/cabins", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Cabin 001"));
    assert!(body.contains("Cabin 002"));
    // discounted card shows both prices, full-price card only one
    assert!(body.contains("$80"));
    assert!(body.contains("$100"));
    assert!(body.contains("$150"));
    assert_eq!(body.matches("price-original").count(), 1);
}

#[tokio::test]
async fn test_unknown_cabin_is_not_found() {
    let app = test_app();
    let response = get(&app, "/cabins/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_starts_session() {
    let app = test_app();
    let response = get(&app, "/cabins/1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).starts_with("reservation_session="));

    let body = body_string(response).await;
    assert!(!body.contains("Total"));
    assert!(!body.contains("class=\"clear\""));
}

#[tokio::test]
async fn test_select_then_clear_range() {
    let app = test_app();

    let response = post_form(
        &app,
        "/cabins/1/reservation",
        range_form(in_days(1), in_days(4)),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let body = body_string(get(&app, "/cabins/1", Some(&cookie)).await).await;
    assert!(body.contains("Total"));
    assert!(body.contains("$240"));
    assert!(body.contains("class=\"clear\""));

    let response = post_form(
        &app,
        "/cabins/1/reservation/clear",
        String::new(),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(&app, "/cabins/1", Some(&cookie)).await).await;
    assert!(!body.contains("Total"));
    assert!(!body.contains("class=\"clear\""));
}

#[tokio::test]
async fn test_range_over_booked_day_is_reset() {
    let app = test_app();

    let response = post_form(
        &app,
        "/cabins/1/reservation",
        range_form(in_days(8), in_days(12)),
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    let body = body_string(get(&app, "/cabins/1", Some(&cookie)).await).await;
    assert!(!body.contains("Total"));
    assert!(!body.contains("class=\"clear\""));
}

#[tokio::test]
async fn test_past_selection_is_ignored() {
    let app = test_app();

    let response = post_form(
        &app,
        "/cabins/2/reservation",
        range_form(in_days(1), in_days(3)),
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    post_form(
        &app,
        "/cabins/2/reservation",
        range_form(in_days(-5), in_days(-2)),
        Some(&cookie),
    )
    .await;

    let body = body_string(get(&app, "/cabins/2", Some(&cookie)).await).await;
    assert!(body.contains("$300"));
}

#[tokio::test]
async fn test_switching_cabin_clears_range() {
    let app = test_app();

    let response = post_form(
        &app,
        "/cabins/2/reservation",
        range_form(in_days(1), in_days(3)),
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    let body = body_string(get(&app, "/cabins/1", Some(&cookie)).await).await;
    assert!(!body.contains("Total"));

    let body = body_string(get(&app, "/cabins/2", Some(&cookie)).await).await;
    assert!(!body.contains("Total"));
}

#[tokio::test]
async fn test_quote_api() {
    let app = test_app();
    let uri = format!(
        "/api/cabins/1/quote?from={}&to={}",
        in_days(1).format("%Y-%m-%d"),
        in_days(4).format("%Y-%m-%d")
    );

    let response = get(&app, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["booked"], false);
    assert_eq!(json["nights"], 3);
    assert_eq!(json["total"], "240");
    assert_eq!(json["price"]["kind"], "discounted");
    assert_eq!(json["price"]["original"], "100");
    assert_eq!(json["price"]["discounted"], "80");
    assert!(json.get("selection_error").is_none());
}

#[tokio::test]
async fn test_quote_api_resets_booked_range() {
    let app = test_app();
    let uri = format!(
        "/api/cabins/1/quote?from={}&to={}",
        in_days(8).format("%Y-%m-%d"),
        in_days(12).format("%Y-%m-%d")
    );

    let json: serde_json::Value =
        serde_json::from_str(&body_string(get(&app, &uri, None).await).await).unwrap();
    assert_eq!(json["booked"], true);
    assert!(json["nights"].is_null());
    assert!(json["total"].is_null());
    assert!(json["from"].is_null());
}

#[tokio::test]
async fn test_quote_api_partial_range() {
    let app = test_app();
    let uri = format!("/api/cabins/2/quote?from={}", in_days(1).format("%Y-%m-%d"));

    let json: serde_json::Value =
        serde_json::from_str(&body_string(get(&app, &uri, None).await).await).unwrap();
    assert_eq!(json["booked"], false);
    assert!(json["nights"].is_null());
    assert!(json["total"].is_null());
    assert_eq!(json["price"]["kind"], "full");
    assert_eq!(json["price"]["price"], "150");
}

#[tokio::test]
async fn test_quote_api_reports_selection_error() {
    let app = test_app();
    let uri = format!(
        "/api/cabins/2/quote?from={}&to={}",
        in_days(-3).format("%Y-%m-%d"),
        in_days(-1).format("%Y-%m-%d")
    );

    let json: serde_json::Value =
        serde_json::from_str(&body_string(get(&app, &uri, None).await).await).unwrap();
    assert!(json["selection_error"]
        .as_str()
        .unwrap()
        .contains("in the past"));
}

#[tokio::test]
async fn test_range_check_api() {
    let app = test_app();
    let request = |body: serde_json::Value| {
        Request::builder()
            .method("POST")
            .uri("/api/range/check")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(request(serde_json::json!({
            "from": "2024-06-01",
            "to": "2024-06-04",
            "booked_dates": ["2024-06-03"]
        })))
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["booked"], true);

    let response = app
        .clone()
        .oneshot(request(serde_json::json!({
            "from": "2024-06-01",
            "booked_dates": ["2024-06-03"]
        })))
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["booked"], false);
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let response = get(&app, "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["cabins"], 2);
    assert_eq!(json["sessions"], 0);
}

#[tokio::test]
async fn test_shipped_catalog_images_are_served() {
    let catalog = Catalog::from_json(include_str!("../data/catalog.json")).unwrap();
    let images: Vec<String> = catalog.cabins().iter().map(|c| c.image.clone()).collect();
    assert!(!images.is_empty());

    let app = app(AppState::new(catalog, AppCache::default()), Path::new("static"));
    for image in images {
        let response = get(&app, &image, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{image}");
    }
}
