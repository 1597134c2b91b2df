mod common;

use common::client_for;
use common::mock_catalog::{MockCatalog, MockResponse};
use shopdesk::api::{ApiError, NewProduct, ProductEdit};

#[tokio::test]
async fn list_products_parses_the_full_set() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(
            r#"[
                {"id": 1, "title": "Mug", "price": 12.5,
                 "category": {"id": 3, "name": "Kitchen"},
                 "images": ["https://img.example/mug.png"]},
                {"id": 2, "title": "Pen", "price": 2}
            ]"#,
        ))
        .await;
    let client = client_for(&server.base_url());

    let products = client.list_products().await.expect("list succeeds");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category.as_ref().unwrap().name, "Kitchen");
    assert!(products[1].category.is_none());

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/products");
}

#[tokio::test]
async fn list_products_surfaces_service_errors() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(503, "maintenance"))
        .await;
    let client = client_for(&server.base_url());

    match client.list_products().await {
        Err(ApiError::Service { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected service error, got {:?}", other.map(|p| p.len())),
    }
}

#[tokio::test]
async fn list_products_surfaces_unreachable_hosts_as_network_errors() {
    // Nothing listens on this port.
    let client = client_for("http://127.0.0.1:1");
    match client.list_products().await {
        Err(ApiError::Network(_)) => {}
        other => panic!("expected network error, got {:?}", other.map(|p| p.len())),
    }
}

#[tokio::test]
async fn list_categories_failure_degrades_to_empty() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;
    let client = client_for(&server.base_url());

    let categories = client.list_categories().await;
    assert!(categories.is_empty());
}

#[tokio::test]
async fn list_categories_success_parses() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(
            r#"[{"id": 1, "name": "Kitchen"}, {"id": 2, "name": "Office"}]"#,
        ))
        .await;
    let client = client_for(&server.base_url());

    let categories = client.list_categories().await;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].name, "Office");
}

#[tokio::test]
async fn update_sends_put_with_json_body() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(r#"{"id": 7, "title": "Big Mug"}"#))
        .await;
    let client = client_for(&server.base_url());

    let patch = client
        .update_product(
            7,
            &ProductEdit {
                title: "Big Mug".to_string(),
                price: 15.0,
                description: "Larger".to_string(),
            },
        )
        .await
        .expect("update succeeds");

    assert_eq!(patch.title.as_deref(), Some("Big Mug"));
    assert!(patch.price.is_none(), "absent fields stay absent in the patch");

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/products/7");
    assert_eq!(requests[0].body_json()["title"], "Big Mug");
}

#[tokio::test]
async fn create_sends_post_and_parses_the_new_product() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(
            r#"{"id": 51, "title": "Lamp", "price": 30, "images": []}"#,
        ))
        .await;
    let client = client_for(&server.base_url());

    let created = client
        .create_product(&NewProduct {
            title: "Lamp".to_string(),
            price: 30.0,
            description: "Desk lamp".to_string(),
            category_id: 2,
            images: vec!["https://img.example/lamp.png".to_string()],
        })
        .await
        .expect("create succeeds");

    assert_eq!(created.id, 51);
    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/products/");
}
