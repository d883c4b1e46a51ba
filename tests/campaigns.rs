use actix_web::test::{self, TestRequest};
use actix_web::web::Data;
use actix_web::App;
use serde_json::{json, Value};

use brandconnect_server::{routes, Config, FixtureStore, Store};

async fn get_campaign(id: &str) -> Value {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(Config::default()))
            .app_data(Data::new(Box::new(FixtureStore) as Box<dyn Store>))
            .configure(routes),
    )
    .await;

    let request = TestRequest::get()
        .uri(&format!("/campaigns/{}", id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200, "campaign endpoint never errors");

    test::read_body_json(response).await
}

#[actix_rt::test]
async fn campaign_echoes_requested_id() {
    let campaign = get_campaign("42").await;

    assert_eq!(campaign["id"], json!(42));
    assert_eq!(campaign["title"], json!("Campaign 42"));
    assert_eq!(campaign["startDate"], json!("2023-11-01"));
    assert_eq!(campaign["endDate"], json!("2023-12-31"));
    assert_eq!(campaign["budget"], json!("$500-1000"));
    assert_eq!(campaign["views"], json!(150));
    assert_eq!(campaign["applicants"], json!(12));
    assert_eq!(
        campaign["brand"],
        json!({
            "id": 1,
            "name": "Test Brand",
            "logo": "https://placehold.co/100x100",
        })
    );
}

#[actix_rt::test]
async fn campaign_category_follows_modulo_rule() {
    assert_eq!(get_campaign("9").await["category"], json!("Fashion"));
    assert_eq!(get_campaign("6").await["category"], json!("Fashion"));
    assert_eq!(get_campaign("4").await["category"], json!("Technology"));
    assert_eq!(get_campaign("7").await["category"], json!("Beauty"));
    assert_eq!(get_campaign("-3").await["category"], json!("Fashion"));
}

#[actix_rt::test]
async fn non_numeric_id_still_answers_200() {
    let campaign = get_campaign("abc").await;

    assert_eq!(campaign["id"], Value::Null);
    assert_eq!(campaign["title"], json!("Campaign abc"));
    assert_eq!(campaign["category"], json!("Beauty"));
}

#[actix_rt::test]
async fn partially_numeric_id_keeps_numeric_prefix() {
    let campaign = get_campaign("42abc").await;

    assert_eq!(campaign["id"], json!(42));
    assert_eq!(campaign["title"], json!("Campaign 42abc"));
    // the category bucket coerces the whole identifier, which is not numeric
    assert_eq!(campaign["category"], json!("Beauty"));
}
