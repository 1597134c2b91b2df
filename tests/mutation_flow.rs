mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use common::{client_for, product};
use shopdesk::mutation::{submit_create, submit_edit, CreateForm, EditForm};
use shopdesk::view::mvi::Reducer;
use shopdesk::view::{TableReducer, TableState};

fn edit_form(id: u64) -> EditForm {
    EditForm {
        id,
        title: "Renamed".to_string(),
        price: "42.5".to_string(),
        description: "Updated".to_string(),
    }
}

fn create_form() -> CreateForm {
    CreateForm {
        title: "Lamp".to_string(),
        price: "30".to_string(),
        description: "Desk lamp".to_string(),
        category_id: Some(2),
        images_text: "https://img.example/lamp.png\n".to_string(),
    }
}

#[tokio::test]
async fn invalid_edit_never_reaches_the_network() {
    let server = MockCatalog::start().await;
    let client = client_for(&server.base_url());

    let mut form = edit_form(1);
    form.title = "   ".to_string();
    let err = submit_edit(&client, form).await.unwrap_err();

    assert!(err.is_validation());
    assert!(server.captured_requests().await.is_empty());
}

#[tokio::test]
async fn invalid_create_never_reaches_the_network() {
    let server = MockCatalog::start().await;
    let client = client_for(&server.base_url());

    let mut form = create_form();
    form.images_text = "\n  \n".to_string();
    let err = submit_create(&client, form).await.unwrap_err();

    assert!(err.is_validation());
    assert!(server.captured_requests().await.is_empty());
}

#[tokio::test]
async fn successful_edit_yields_a_merge_intent() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(
            r#"{"id": 1, "title": "Renamed", "price": 42.5}"#,
        ))
        .await;
    let client = client_for(&server.base_url());

    let intent = submit_edit(&client, edit_form(1)).await.expect("success");

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/products/1");
    assert_eq!(requests[0].body_json()["price"], 42.5);

    // Applying the intent merges without clobbering unreturned fields.
    let state = TableState {
        products: vec![common::full_product(1, "Old", 10.0)],
        ..TableState::default()
    };
    let state = TableReducer::reduce(state, intent);
    let merged = state.product(1).unwrap();
    assert_eq!(merged.title, "Renamed");
    assert_eq!(merged.price, 42.5);
    assert!(merged.description.is_some(), "shallow merge keeps old fields");
    assert_eq!(merged.images.len(), 2);
}

#[tokio::test]
async fn failed_edit_is_remote_error_and_leaves_state_for_caller_untouched() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(400, "price must be positive"))
        .await;
    let client = client_for(&server.base_url());

    let err = submit_edit(&client, edit_form(1)).await.unwrap_err();
    assert!(!err.is_validation());
    assert!(err.user_message().contains("price must be positive"));
}

#[tokio::test]
async fn successful_create_prepends_via_intent() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(
            r#"{"id": 50, "title": "Lamp", "price": 30, "images": ["https://img.example/lamp.png"]}"#,
        ))
        .await;
    let client = client_for(&server.base_url());

    let intent = submit_create(&client, create_form()).await.expect("success");

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/products/");
    let body = requests[0].body_json();
    assert_eq!(body["categoryId"], 2);
    assert_eq!(body["images"][0], "https://img.example/lamp.png");

    let state = TableState {
        products: vec![product(1, "Existing", 1.0)],
        ..TableState::default()
    };
    let state = TableReducer::reduce(state, intent);
    assert_eq!(state.products[0].id, 50);
    assert_eq!(state.page, 1);
}

#[tokio::test]
async fn failed_create_makes_no_local_intent() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(500, "category missing"))
        .await;
    let client = client_for(&server.base_url());

    let err = submit_create(&client, create_form()).await.unwrap_err();
    assert!(!err.is_validation());
}
