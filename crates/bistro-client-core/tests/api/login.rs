use crate::helpers::{admin_login_body, login_args, no_cb, spawn_app, waiter_login_body};
use bistro_client_core::{
    navigation::{evaluate, GuardAction, GuardState},
    Client, LoginOutcome, SessionStore,
};
use bistro_shared::{
    const_config::route::{ROUTE_PRODUCTS, ROUTE_USERS},
    uac::{Permission, Role},
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn admin_login_stores_session() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let session = app.login_as_admin().await;

    // Assert
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(app.core_client.session(), Some(session.clone()));
    assert!(evaluate(Some(&session), ROUTE_USERS, Some(Role::Admin)).is_allowed());
}

#[tokio::test]
async fn session_survives_new_client() {
    // Arrange
    let app = spawn_app().await;
    let session = app.login_as_admin().await;

    // Act
    let restarted = Client::new(
        app.mock_server.uri(),
        SessionStore::load(app.backend.clone()),
    );

    // Assert
    assert_eq!(restarted.session(), Some(session));
}

#[tokio::test]
async fn unknown_permission_does_not_block_login() {
    // Arrange
    let app = spawn_app().await;
    let mut body = admin_login_body();
    body["menu"][1]["permissions"] = json!(["READ", "EXPORT"]);

    // Act
    let session = app.login_with(body).await;

    // Assert
    assert_eq!(app.core_client.session(), Some(session.clone()));
    let products = session.entry_for("products").unwrap();
    assert!(products.allows(Permission::Read));
    assert!(!products.allows(Permission::Write));
    assert!(evaluate(Some(&session), ROUTE_PRODUCTS, None).is_allowed());
}

#[tokio::test]
async fn waiter_is_sent_to_products() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let session = app.login_with(waiter_login_body()).await;

    // Assert
    let decision = evaluate(Some(&session), ROUTE_USERS, Some(Role::Admin));
    assert_eq!(decision.state, GuardState::Denied);
    assert_eq!(decision.action, GuardAction::Redirect(ROUTE_PRODUCTS));
}

#[tokio::test]
async fn credentials_are_sent_as_json() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ana@bistro.test",
            "password": "correct horse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_login_body()))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .login(login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert!(outcome.is_success());
}

#[tokio::test]
async fn null_user_is_invalid_credentials() {
    // Arrange
    let app = spawn_app().await;
    app.mock_login(ResponseTemplate::new(201).set_body_json(json!({"user": null, "menu": []})))
        .await;

    // Act
    let outcome = app
        .core_client
        .login(login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    assert!(!app.core_client.is_logged_in());
}

#[tokio::test]
async fn rejected_status_is_invalid_credentials() {
    for status in [400u16, 401, 403, 404] {
        // Arrange
        let app = spawn_app().await;
        app.mock_login(
            ResponseTemplate::new(status)
                .set_body_json(json!({"statusCode": status, "message": "Invalid credentials"})),
        )
        .await;

        // Act
        let outcome = app
            .core_client
            .login(login_args(), no_cb)
            .await
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(outcome, LoginOutcome::InvalidCredentials, "status {status}");
        assert!(!app.core_client.is_logged_in());
    }
}

#[tokio::test]
async fn server_error_is_reported() {
    // Arrange
    let app = spawn_app().await;
    app.mock_login(
        ResponseTemplate::new(500)
            .set_body_json(json!({"statusCode": 500, "message": "Internal server error"})),
    )
    .await;

    // Act
    let outcome = app.core_client.login(login_args(), no_cb).await.unwrap();

    // Assert
    assert_eq!(outcome.unwrap_err().to_string(), "Internal server error");
    assert!(!app.core_client.is_logged_in());
}

#[tokio::test]
async fn malformed_body_is_reported() {
    // Arrange
    let app = spawn_app().await;
    app.mock_login(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .await;

    // Act
    let outcome = app.core_client.login(login_args(), no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_err());
    assert!(!app.core_client.is_logged_in());
}

#[tokio::test]
async fn unreachable_server_is_reported() {
    // Arrange
    let app = spawn_app().await;
    let client = Client::new("http://127.0.0.1:1".to_string(), SessionStore::in_memory());
    drop(app);

    // Act
    let outcome = client.login(login_args(), no_cb).await.unwrap();

    // Assert
    let err = outcome.unwrap_err();
    assert_eq!(err.to_string(), "failed to send request");
}

#[tokio::test]
async fn logout_clears_session() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;

    // Act
    app.core_client.logout();

    // Assert
    assert!(!app.core_client.is_logged_in());
    assert!(SessionStore::load(app.backend.clone()).current().is_none());
}

#[tokio::test]
async fn login_finishing_after_logout_is_discarded() {
    // Arrange
    let app = spawn_app().await;
    app.mock_login(
        ResponseTemplate::new(201)
            .set_body_json(admin_login_body())
            .set_delay(Duration::from_millis(200)),
    )
    .await;

    // Act
    let rx = app.core_client.login(login_args(), no_cb);
    app.core_client.logout();
    let outcome = rx.await.unwrap().unwrap();

    // Assert
    assert_eq!(outcome, LoginOutcome::Discarded);
    assert!(!app.core_client.is_logged_in());
    assert!(SessionStore::load(app.backend.clone()).current().is_none());
}

#[tokio::test]
async fn second_login_replaces_first() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;
    app.core_client.logout();
    app.mock_server.reset().await;

    // Act
    let session = app.login_with(waiter_login_body()).await;

    // Assert
    assert_eq!(session.role(), Role::Waiter);
    assert_eq!(
        SessionStore::load(app.backend.clone()).current(),
        Some(session)
    );
}
