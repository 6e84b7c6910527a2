//! Dashboard controller integration tests
//!
//! Session lifecycle, 401 handling, polling, admin actions and the copy
//! acknowledgment, all against the scripted `MockApi`.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockApi, TOKEN, admin_me, link, logged_in_session, plain_me, user};
use trustmebro::client::ApiError;
use trustmebro::config::StaticConfig;
use trustmebro::dashboard::{
    Dashboard, DashboardSettings, MemoryClipboard, SELF_ACTION_REJECTED, Tab,
};
use trustmebro::session::Session;
use trustmebro::utils::url_validator::INVALID_URL_MESSAGE;

const POLL: Duration = Duration::from_secs(30);

fn settings() -> DashboardSettings {
    DashboardSettings {
        frontend_url: "http://localhost:3061".to_string(),
        poll_interval: POLL,
        copy_ack: Duration::from_millis(2000),
    }
}

fn dashboard(api: &Arc<MockApi>, session: Session) -> Dashboard {
    Dashboard::new(api.clone(), session, settings())
}

fn admin_api() -> Arc<MockApi> {
    MockApi::new()
        .with_me(admin_me())
        .with_links(vec![
            link("abc", "https://example.com/a", 3),
            link("def", "https://example.com/b", 0),
        ])
        .with_users(vec![
            user(1, "root", true, true),
            user(2, "bob", true, false),
            user(3, "eve", false, false),
        ])
        .arc()
}

// =============================================================================
// Mount / session
// =============================================================================

#[tokio::test]
async fn test_mount_without_token_makes_no_requests() {
    let api = admin_api();
    let dash = dashboard(&api, Session::ephemeral());

    assert!(!dash.mount().await);
    assert_eq!(api.total_calls(), 0);
    assert!(!dash.is_polling());
}

#[tokio::test]
async fn test_mount_loads_identity_links_and_users() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());

    assert!(dash.mount().await);

    let snap = dash.snapshot();
    assert_eq!(snap.current_user.as_ref().map(|u| u.id), Some(1));
    assert_eq!(snap.links.len(), 2);
    assert_eq!(snap.users.len(), 3);
    assert!(dash.is_polling());
    assert_eq!(api.calls("me"), 1);
    assert_eq!(api.calls("list_links"), 1);
    assert_eq!(api.calls("list_users"), 1);
}

#[tokio::test]
async fn test_non_admin_never_fetches_users() {
    let api = MockApi::new()
        .with_me(plain_me())
        .with_users(vec![user(1, "root", true, true)])
        .arc();
    let dash = dashboard(&api, logged_in_session());

    assert!(dash.mount().await);
    assert_eq!(api.calls("list_users"), 0);
    assert!(dash.snapshot().users.is_empty());

    // Users tab is admin-only
    assert_eq!(dash.select_tab(Tab::Users), Tab::Links);
    dash.refresh_users().await.unwrap();
    assert_eq!(api.calls("list_users"), 0);
}

#[tokio::test]
async fn test_login_success_enters_console() {
    let api = admin_api();
    let session = Session::ephemeral();
    let dash = dashboard(&api, session.clone());

    assert!(dash.on_login_success(TOKEN).await.unwrap());
    assert_eq!(session.token().as_deref(), Some(TOKEN));
    assert_eq!(dash.snapshot().links.len(), 2);
}

// =============================================================================
// 401 handling
// =============================================================================

#[tokio::test]
async fn test_unauthorized_logs_out_and_clears_state() {
    let api = admin_api();
    let session = logged_in_session();
    let dash = dashboard(&api, session.clone());
    assert!(dash.mount().await);

    api.revoke_token();
    let err = dash.refresh_links().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!dash.is_authenticated());
    assert!(session.token().is_none());
    let snap = dash.snapshot();
    assert!(snap.links.is_empty());
    assert!(snap.users.is_empty());
    assert!(snap.current_user.is_none());
    // 401 is never an inline error
    assert!(snap.error.is_none());
    assert!(!dash.is_polling());
}

#[tokio::test]
async fn test_unauthorized_on_create_is_not_shown_inline() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    api.fail_next("create_link", ApiError::Unauthorized);
    assert!(dash.create_link("https://rust-lang.org").await.is_err());

    assert!(!dash.is_authenticated());
    assert!(dash.snapshot().error.is_none());
}

#[tokio::test]
async fn test_mount_with_revoked_token_fails() {
    let api = admin_api();
    api.revoke_token();
    let dash = dashboard(&api, logged_in_session());

    assert!(!dash.mount().await);
    assert!(!dash.is_authenticated());
    assert!(!dash.is_polling());
}

// =============================================================================
// Polling
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_poller_refreshes_links_every_interval() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);
    assert_eq!(api.calls("list_links"), 1);

    api.set_links(vec![link("new", "https://example.com/new", 0)]);
    tokio::time::sleep(POLL + Duration::from_secs(1)).await;

    assert_eq!(api.calls("list_links"), 2);
    assert_eq!(dash.snapshot().links[0].short_code, "new");

    tokio::time::sleep(POLL).await;
    assert_eq!(api.calls("list_links"), 3);
}

#[tokio::test(start_paused = true)]
async fn test_logout_stops_polling() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    dash.logout();
    tokio::time::sleep(POLL * 3).await;

    assert_eq!(api.calls("list_links"), 1);
    assert!(!dash.is_polling());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_dashboard_stops_polling() {
    let api = admin_api();
    {
        let dash = dashboard(&api, logged_in_session());
        assert!(dash.mount().await);
    }
    tokio::time::sleep(POLL * 3).await;

    assert_eq!(api.calls("list_links"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_start_polling_twice_keeps_one_poller() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);
    dash.start_polling();

    tokio::time::sleep(POLL + Duration::from_secs(1)).await;
    assert_eq!(api.calls("list_links"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_unauthorized_poll_logs_out() {
    let api = admin_api();
    let session = logged_in_session();
    let dash = dashboard(&api, session.clone());
    assert!(dash.mount().await);

    api.revoke_token();
    tokio::time::sleep(POLL + Duration::from_secs(1)).await;

    assert_eq!(api.calls("list_links"), 2);
    assert!(!dash.is_authenticated());
    assert!(session.token().is_none());
    let snap = dash.snapshot();
    assert!(snap.links.is_empty());
    assert!(snap.users.is_empty());
    assert!(snap.current_user.is_none());
    assert!(snap.error.is_none());
    assert!(!dash.is_polling());

    // 登出后不再轮询
    tokio::time::sleep(POLL * 3).await;
    assert_eq!(api.calls("list_links"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_zero_poll_interval_from_config_still_polls() {
    let mut config = StaticConfig::default();
    config.ui.poll_interval_secs = 0;
    let api = admin_api();
    let dash = Dashboard::new(
        api.clone(),
        logged_in_session(),
        DashboardSettings::from_config(&config),
    );
    assert!(dash.mount().await);

    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert!(dash.is_polling());
    assert_eq!(api.calls("list_links"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_zero_poll_interval_setting_is_clamped() {
    let api = admin_api();
    let dash = Dashboard::new(
        api.clone(),
        logged_in_session(),
        DashboardSettings {
            poll_interval: Duration::ZERO,
            ..settings()
        },
    );
    assert!(dash.mount().await);

    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert!(dash.is_polling());
    assert_eq!(api.calls("list_links"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_late_response_does_not_overwrite_newer() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());

    api.script_links(
        Duration::from_millis(500),
        vec![link("old", "https://example.com/old", 0)],
    );
    api.script_links(
        Duration::from_millis(10),
        vec![link("fresh", "https://example.com/fresh", 0)],
    );

    let (first, second) = tokio::join!(dash.refresh_links(), dash.refresh_links());
    first.unwrap();
    second.unwrap();

    let links = dash.snapshot().links;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].short_code, "fresh");
}

// =============================================================================
// Links
// =============================================================================

#[tokio::test]
async fn test_create_link_rejects_invalid_url_locally() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    assert!(dash.create_link("not a url").await.is_err());

    assert_eq!(api.calls("create_link"), 0);
    assert_eq!(dash.snapshot().error.as_deref(), Some(INVALID_URL_MESSAGE));
}

#[tokio::test]
async fn test_create_link_publishes_generated_link() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);
    dash.set_url_input("https://rust-lang.org");

    let generated = dash.create_link("https://rust-lang.org").await.unwrap();

    assert_eq!(generated, "http://localhost:3061/gen1");
    let snap = dash.snapshot();
    assert_eq!(snap.generated_link.as_deref(), Some("http://localhost:3061/gen1"));
    assert_eq!(snap.links.len(), 3);
    assert!(snap.url_input.is_empty());
    assert!(!snap.is_loading);
}

#[tokio::test]
async fn test_create_link_shows_server_detail() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    api.fail_next(
        "create_link",
        ApiError::Rejected {
            status: 400,
            detail: Some("URL is blacklisted".to_string()),
        },
    );
    assert!(dash.create_link("https://bad.example").await.is_err());

    let snap = dash.snapshot();
    assert_eq!(snap.error.as_deref(), Some("URL is blacklisted"));
    assert!(!snap.is_loading);
    assert!(dash.is_authenticated());
}

#[tokio::test]
async fn test_delete_link_respects_confirmation() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    let declined = dash.delete_link("abc", &|_: &str| false).await.unwrap();
    assert!(!declined);
    assert_eq!(api.calls("delete_link"), 0);

    let deleted = dash.delete_link("abc", &|_: &str| true).await.unwrap();
    assert!(deleted);
    let codes: Vec<_> = dash
        .snapshot()
        .links
        .into_iter()
        .map(|l| l.short_code)
        .collect();
    assert_eq!(codes, vec!["def"]);
}

#[tokio::test]
async fn test_delete_link_succeeds_when_refetch_fails() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    api.fail_next("list_links", ApiError::Network("connection reset".into()));
    let deleted = dash.delete_link("abc", &|_: &str| true).await.unwrap();

    assert!(deleted);
    assert_eq!(api.calls("delete_link"), 1);
    assert!(dash.is_authenticated());
}

#[tokio::test]
async fn test_delete_link_server_failure_is_reported() {
    let api = admin_api();
    let session = logged_in_session();
    let dash = dashboard(&api, session.clone());
    assert!(dash.mount().await);

    api.fail_next(
        "delete_link",
        ApiError::Rejected {
            status: 500,
            detail: Some("Database is on fire".to_string()),
        },
    );
    let err = dash.delete_link("abc", &|_: &str| true).await.unwrap_err();

    assert!(!err.is_unauthorized());
    assert!(err.message().contains("Database is on fire"));
    // 非 401 失败保留会话和列表
    assert_eq!(session.token().as_deref(), Some(TOKEN));
    assert_eq!(dash.snapshot().links.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_copy_acknowledgment_expires() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);
    let clipboard = MemoryClipboard::new();

    let url = dash.copy_link("abc", &clipboard).unwrap();
    assert_eq!(url, "http://localhost:3061/abc");
    assert_eq!(clipboard.text().as_deref(), Some("http://localhost:3061/abc"));
    assert!(dash.is_copied("abc"));
    assert!(!dash.is_copied("def"));

    // A newer copy moves the mark
    dash.copy_link("def", &clipboard).unwrap();
    assert!(!dash.is_copied("abc"));
    assert_eq!(dash.copied_code().as_deref(), Some("def"));

    tokio::time::advance(Duration::from_millis(2001)).await;
    assert!(dash.copied_code().is_none());
}

// =============================================================================
// Users (admin)
// =============================================================================

#[tokio::test]
async fn test_toggle_sends_negated_flag() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    let updated = dash.toggle_user_active(3, false).await.unwrap();
    assert!(updated.is_active);

    let patches = api.patches();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].0, 3);
    assert_eq!(patches[0].1.is_active, Some(true));
    assert_eq!(patches[0].1.is_admin, None);
}

#[tokio::test]
async fn test_toggle_twice_restores_flag() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    let original = api.users().into_iter().find(|u| u.id == 2).unwrap();
    let once = dash.toggle_user_admin(2, original.is_admin).await.unwrap();
    let twice = dash.toggle_user_admin(2, once.is_admin).await.unwrap();

    assert_eq!(twice.is_admin, original.is_admin);
    let refreshed = dash
        .snapshot()
        .users
        .into_iter()
        .find(|u| u.id == 2)
        .unwrap();
    assert_eq!(refreshed.is_admin, original.is_admin);
}

#[tokio::test]
async fn test_self_targeting_actions_are_rejected() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    let err = dash.toggle_user_admin(1, true).await.unwrap_err();
    assert_eq!(err.message(), SELF_ACTION_REJECTED);
    let err = dash.toggle_user_active(1, true).await.unwrap_err();
    assert_eq!(err.message(), SELF_ACTION_REJECTED);
    let err = dash.delete_user(1, &|_: &str| true).await.unwrap_err();
    assert_eq!(err.message(), SELF_ACTION_REJECTED);

    assert_eq!(api.calls("update_user"), 0);
    assert_eq!(api.calls("delete_user"), 0);
}

#[tokio::test]
async fn test_delete_user_refreshes_list() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    assert!(dash.delete_user(3, &|_: &str| true).await.unwrap());

    let ids: Vec<_> = dash.snapshot().users.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(api.calls("list_users"), 2);
}

#[tokio::test]
async fn test_toggle_succeeds_when_refetch_fails() {
    let api = admin_api();
    let dash = dashboard(&api, logged_in_session());
    assert!(dash.mount().await);

    api.fail_next(
        "list_users",
        ApiError::Rejected {
            status: 502,
            detail: None,
        },
    );
    let updated = dash.toggle_user_active(3, false).await.unwrap();

    assert!(updated.is_active);
    assert_eq!(api.patches().len(), 1);
    assert!(api.users().into_iter().any(|u| u.id == 3 && u.is_active));
}
