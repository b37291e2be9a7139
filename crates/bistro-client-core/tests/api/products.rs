use crate::helpers::{no_cb, spawn_app};
use bistro_client_core::navigation::can_perform_on;
use bistro_shared::{req_args::products::ProductReqArgs, uac::Permission};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn list_products() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Tacos al pastor", "price": "8.50", "created_at": "2024-05-01T12:00:00.000Z"},
            {"id": 2, "name": "Agua de jamaica", "price": 2}
        ])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let products = app.core_client.list_products(no_cb).await.unwrap().unwrap();

    // Assert
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, 8.5);
    assert_eq!(products[1].name, "Agua de jamaica");
}

#[tokio::test]
async fn create_product_sends_draft() {
    // Arrange
    let app = spawn_app().await;
    let session = app.login_as_admin().await;
    assert!(can_perform_on(Some(&session), "products", Permission::Create));
    let draft = ProductReqArgs {
        name: "  Quesadilla ".into(),
        price: 4.25,
    }
    .validated()
    .unwrap();
    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({"name": "Quesadilla", "price": 4.25})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "name": "Quesadilla", "price": "4.25"
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app.core_client.create_product(&draft, no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn update_product_uses_id_in_path() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("PATCH"))
        .and(path("/products/7"))
        .and(body_json(json!({"name": "Tacos", "price": 9.0})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    let draft = ProductReqArgs {
        name: "Tacos".into(),
        price: 9.0,
    };

    // Act
    let outcome = app
        .core_client
        .update_product(7.into(), &draft, no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn delete_product() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("DELETE"))
        .and(path("/products/4"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app.core_client.delete_product(4.into(), no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn validation_messages_are_joined() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "message": ["name should not be empty", "price must be a positive number"],
            "error": "Bad Request"
        })))
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .create_product(&ProductReqArgs::default(), no_cb)
        .await
        .unwrap();

    // Assert
    assert_eq!(
        outcome.unwrap_err().to_string(),
        "name should not be empty; price must be a positive number"
    );
}

#[tokio::test]
async fn plain_text_error_is_kept() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("DELETE"))
        .and(path("/products/9"))
        .respond_with(ResponseTemplate::new(409).set_body_string("product is used by an order"))
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app.core_client.delete_product(9.into(), no_cb).await.unwrap();

    // Assert
    assert_eq!(
        outcome.unwrap_err().to_string(),
        "product is used by an order"
    );
}
