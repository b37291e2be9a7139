use crate::helpers::{no_cb, spawn_app};
use bistro_shared::{
    req_args::auth::RegisterUserReqArgs,
    uac::{Role, StatusFilter, UserFilter, UserStats},
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn list_users_unwraps_data() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/auth/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"id": 1, "fullName": "Ana Torres", "email": "ana@bistro.test", "role": "ADMIN", "isActive": true},
            {"id": 2, "fullName": "Luis Pérez", "email": "luis@bistro.test", "role": "WAITER", "isActive": true},
            {"id": 3, "fullName": "Eva Gil", "email": "eva@bistro.test", "role": "WAITER", "isActive": false}
        ]})))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let users = app.core_client.list_users(no_cb).await.unwrap().unwrap();

    // Assert
    let stats = UserStats::from_users(&users);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.admins, 1);
    assert_eq!(stats.waiters, 2);
    let filter = UserFilter {
        search: String::new(),
        role: Some(Role::Waiter),
        status: StatusFilter::Inactive,
    };
    let inactive_waiters = filter.apply(&users);
    assert_eq!(inactive_waiters.len(), 1);
    assert_eq!(inactive_waiters[0].display_name, "Eva Gil");
}

#[tokio::test]
async fn register_user_sends_wire_names() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "fullName": "Eva Gil",
            "email": "eva@bistro.test",
            "password": "s3cret!",
            "role": "WAITER",
            "isActive": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    let args = RegisterUserReqArgs {
        full_name: "Eva Gil".into(),
        email: "eva@bistro.test".into(),
        password: "s3cret!".to_string().into(),
        ..Default::default()
    };

    // Act
    let outcome = app.core_client.register_user(&args, no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn set_user_status_returns_updated_user() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("PATCH"))
        .and(path("/auth/users/3/status"))
        .and(body_json(json!({"isActive": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "fullName": "Eva Gil", "email": "eva@bistro.test", "role": "WAITER", "isActive": false
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let user = app
        .core_client
        .set_user_status(&"3".into(), false, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert!(!user.active);
    assert_eq!(user.id.as_ref(), "3");
}
