use crate::helpers::{no_cb, spawn_app};
use bistro_shared::{
    catalog::Product,
    orders::{OrderDraft, SalesSummary},
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn list_orders_feeds_summary() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "total": "17.00",
                "created_at": "2024-05-01T12:00:00.000Z",
                "orderItems": [
                    {"id": 1, "product": {"id": 1, "name": "Tacos", "price": "8.50"}, "quantity": 2, "price": "8.50"}
                ]
            },
            {
                "id": 2,
                "total": 3,
                "orderItems": [
                    {"id": 2, "product": {"id": 2, "name": "Agua", "price": 1.5}, "quantity": 2, "price": 1.5}
                ]
            }
        ])))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let orders = app.core_client.list_orders(no_cb).await.unwrap().unwrap();

    // Assert
    let summary = SalesSummary::from_orders(&orders);
    assert_eq!(summary.order_count, 2);
    assert_eq!(summary.revenue, 20.0);
    assert_eq!(summary.units, 4);
    assert_eq!(summary.average_order_value, 10.0);
}

#[tokio::test]
async fn create_order_from_draft() {
    // Arrange
    let app = spawn_app().await;
    let tacos = Product {
        id: 1.into(),
        name: "Tacos".into(),
        price: 8.5,
        created_at: None,
    };
    let mut draft = OrderDraft::default();
    draft.add(&tacos);
    draft.add(&tacos);
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({"items": [{"productId": 1, "quantity": 2}]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5, "total": "17.00"})))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .create_order(&draft.to_req_args().unwrap(), no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok());
}
