//! Login / register form integration tests

mod common;

use common::{MockApi, TOKEN, user};
use trustmebro::auth::{
    FormError, LOGIN_FAILED, LoginForm, PASSWORD_MISMATCH, PASSWORD_TOO_SHORT, RegisterForm,
};
use trustmebro::client::{ApiError, CONNECT_FAILED};
use trustmebro::session::Session;

// =============================================================================
// Register
// =============================================================================

#[tokio::test]
async fn test_local_failures_never_reach_the_network() {
    let api = MockApi::new();

    let mut mismatch = RegisterForm::with_input("bro", "password1", "password2");
    let err = mismatch.submit(&api).await.unwrap_err();
    assert_eq!(err, FormError::Invalid(PASSWORD_MISMATCH.to_string()));
    assert!(!err.reached_network());
    assert_eq!(mismatch.error.as_deref(), Some(PASSWORD_MISMATCH));

    let mut short = RegisterForm::with_input("bro", "1234567", "1234567");
    let err = short.submit(&api).await.unwrap_err();
    assert_eq!(err, FormError::Invalid(PASSWORD_TOO_SHORT.to_string()));

    assert_eq!(api.total_calls(), 0);
    assert!(!mismatch.is_loading);
    assert!(!short.success);
}

#[tokio::test]
async fn test_register_success_creates_inactive_account() {
    let api = MockApi::new();
    let mut form = RegisterForm::with_input("newbie", "12345678", "12345678");

    form.submit(&api).await.unwrap();

    assert!(form.success);
    assert!(form.error.is_none());
    assert!(!form.is_loading);
    let created = api.users().into_iter().find(|u| u.username == "newbie").unwrap();
    assert!(!created.is_active);
    assert!(!created.is_admin);
}

#[tokio::test]
async fn test_register_shows_server_detail() {
    let api = MockApi::new().with_users(vec![user(1, "taken", true, false)]);
    let mut form = RegisterForm::with_input("taken", "12345678", "12345678");

    let err = form.submit(&api).await.unwrap_err();

    assert!(err.reached_network());
    assert_eq!(form.error.as_deref(), Some("Username already registered"));
    assert!(!form.success);
}

#[tokio::test]
async fn test_register_network_failure() {
    let api = MockApi::new();
    api.fail_next("register", ApiError::Network("connection refused".into()));
    let mut form = RegisterForm::with_input("bro", "12345678", "12345678");

    form.submit(&api).await.unwrap_err();

    assert_eq!(form.error.as_deref(), Some(CONNECT_FAILED));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_stores_token() {
    let api = MockApi::new();
    let session = Session::ephemeral();
    let mut form = LoginForm::with_credentials("root", "hunter22");

    let token = form.submit(&api, &session).await.unwrap();

    assert_eq!(token, TOKEN);
    assert_eq!(session.token().as_deref(), Some(TOKEN));
    assert!(form.error.is_none());
    assert!(!form.is_loading);
}

#[tokio::test]
async fn test_login_failure_keeps_session_empty() {
    let api = MockApi::new();
    let session = Session::ephemeral();
    let mut form = LoginForm::with_credentials("root", "wrong");

    form.submit(&api, &session).await.unwrap_err();

    assert!(!session.is_authenticated());
    assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED));
}

#[tokio::test]
async fn test_login_server_detail_is_shown() {
    let api = MockApi::new();
    api.fail_next(
        "login",
        ApiError::Rejected {
            status: 400,
            detail: Some("Account is not active".to_string()),
        },
    );
    let session = Session::ephemeral();
    let mut form = LoginForm::with_credentials("eve", "hunter22");

    form.submit(&api, &session).await.unwrap_err();

    assert_eq!(form.error.as_deref(), Some("Account is not active"));
}
