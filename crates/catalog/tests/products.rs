mod common;

use axum::http::{Method, StatusCode};
use catalog::abstract_trait::product::repository::ProductQueryRepositoryTrait;
use common::{EUR, TestApp, USD, widget};
use serde_json::json;

#[tokio::test]
async fn create_then_get_returns_the_same_product() {
    let app = TestApp::new();

    let created = app.create_product(widget()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .request(Method::GET, &format!("/api/v1/products/{id}"), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let product = &body["data"];
    assert_eq!(product["name"], "Widget");
    assert_eq!(product["description"], "A plain widget");
    assert_eq!(product["price"], 100.0);
    assert_eq!(product["tax_cost"], 10.0);
    assert_eq!(product["manufacturing_cost"], 5.0);
    assert_eq!(product["total_cost"], 115.0);
    assert_eq!(product["currency"]["symbol"], "USD");
    assert_eq!(product["currency"]["formatted_name"], "US Dollar (USD)");
    assert_eq!(product["prices"], json!([]));
}

#[tokio::test]
async fn create_without_name_is_unprocessable() {
    let app = TestApp::new();
    let mut body = widget();
    body.as_object_mut().unwrap().remove("name");

    let (status, json) = app
        .request(Method::POST, "/api/v1/products", Some(body))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"]["name"][0], "The name field is required.");
}

#[tokio::test]
async fn create_rejects_negative_cost_and_extra_decimals() {
    let app = TestApp::new();
    let mut body = widget();
    body["tax_cost"] = json!(-1);
    body["price"] = json!(10.999);

    let (status, json) = app
        .request(Method::POST, "/api/v1/products", Some(body))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"]["tax_cost"][0], "The tax_cost must not be negative.");
    assert_eq!(
        json["errors"]["price"][0],
        "The price must have at most 2 decimal places."
    );
}

#[tokio::test]
async fn create_with_unknown_currency_is_unprocessable() {
    let app = TestApp::new();
    let mut body = widget();
    body["currency_id"] = json!(999);

    let (status, json) = app
        .request(Method::POST, "/api/v1/products", Some(body))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json["errors"]["currency_id"][0],
        "The selected currency_id is invalid."
    );
}

#[tokio::test]
async fn partial_update_only_touches_given_fields() {
    let app = TestApp::new();
    let created = app.create_product(widget()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/products/{id}"),
            Some(json!({"price": 120.50})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let product = &body["data"];
    assert_eq!(product["price"], 120.5);
    assert_eq!(product["name"], "Widget");
    assert_eq!(product["description"], "A plain widget");
    assert_eq!(product["tax_cost"], 10.0);
    assert_eq!(product["currency"]["id"], USD);
    assert_eq!(product["total_cost"], 135.5);
}

#[tokio::test]
async fn update_can_clear_description_and_switch_currency() {
    let app = TestApp::new();
    let created = app.create_product(widget()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/v1/products/{id}"),
            Some(json!({"description": null, "currency_id": EUR})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], serde_json::Value::Null);
    assert_eq!(body["data"]["currency"]["symbol"], "EUR");
}

#[tokio::test]
async fn update_with_null_name_is_unprocessable() {
    let app = TestApp::new();
    let created = app.create_product(widget()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/api/v1/products/{id}"),
            Some(json!({"name": null, "price": null})),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"][0], "The name field is required.");
    assert_eq!(body["errors"]["price"][0], "The price field is required.");

    let (_, unchanged) = app
        .request(Method::GET, &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(unchanged["data"]["name"], "Widget");
    assert_eq!(unchanged["data"]["price"], 100.0);
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/v1/products/4242",
            Some(json!({"name": "Ghost"})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Product not found with ID: 4242");
}

#[tokio::test]
async fn delete_hides_product_but_keeps_the_row() {
    let app = TestApp::new();
    let created = app.create_product(widget()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .request(
            Method::POST,
            &format!("/api/v1/products/{id}/prices"),
            Some(json!({"currency_id": EUR, "price": 90.00})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .request(Method::DELETE, &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("data").is_none());

    let (status, _) = app
        .request(Method::GET, &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listing) = app.request(Method::GET, "/api/v1/products", None).await;
    assert_eq!(listing["meta"]["total"], 0);

    let trashed = app
        .store
        .find_by_id_with_trashed(id)
        .await
        .unwrap()
        .expect("row still present");
    assert!(trashed.is_trashed());
    assert!(app.store.price_rows(id).is_empty());

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/v1/products/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.request(Method::GET, "/api/v1/products/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app
        .request_without_token(Method::GET, "/api/v1/products")
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn price_range_filter_is_inclusive() {
    let app = TestApp::new();
    for (name, price) in [("Cheap", 50), ("Low", 100), ("Mid", 150), ("High", 200), ("Luxury", 250)] {
        let mut body = widget();
        body["name"] = json!(name);
        body["price"] = json!(price);
        app.create_product(body).await;
    }

    let (status, body) = app
        .request(
            Method::GET,
            "/api/v1/products?min_price=100&max_price=200&sort_by=price&sort_order=asc",
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Low", "Mid", "High"]);
    assert_eq!(body["meta"]["total"], 3);
}

#[tokio::test]
async fn listing_paginates_and_filters_by_name() {
    let app = TestApp::new();
    for i in 1..=5 {
        let mut body = widget();
        body["name"] = json!(format!("Laptop {i}"));
        app.create_product(body).await;
    }
    let mut other = widget();
    other["name"] = json!("Phone");
    app.create_product(other).await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/v1/products?name=LAPTOP&per_page=2&page=3&sort_by=id&sort_order=asc",
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["meta"],
        json!({"total": 5, "per_page": 2, "current_page": 3, "last_page": 3})
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Laptop 5");
}

#[tokio::test]
async fn unknown_sort_column_is_unprocessable() {
    let app = TestApp::new();

    let (status, body) = app
        .request(Method::GET, "/api/v1/products?sort_by=password", None)
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["sort_by"][0], "The selected sort_by is invalid.");
}

#[tokio::test]
async fn page_beyond_the_limit_is_unprocessable() {
    let app = TestApp::new();
    app.create_product(widget()).await;

    let (status, body) = app
        .request(Method::GET, "/api/v1/products?page=9223372036854775807", None)
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["page"][0], "The page must be between 1 and 1000000.");
}
