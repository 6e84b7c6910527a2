//! File-backed session tests

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockApi, TOKEN, admin_me};
use tempfile::TempDir;
use trustmebro::dashboard::{Dashboard, DashboardSettings};
use trustmebro::session::{FileSessionStore, Session};

fn file_session(dir: &TempDir) -> Session {
    let store = FileSessionStore::new(dir.path().join("nested"), "token");
    Session::init(Arc::new(store)).unwrap()
}

#[test]
fn test_token_survives_restart() {
    let dir = TempDir::new().unwrap();

    let session = file_session(&dir);
    assert!(!session.is_authenticated());
    session.update(TOKEN).unwrap();

    let restarted = file_session(&dir);
    assert_eq!(restarted.token().as_deref(), Some(TOKEN));
}

#[test]
fn test_teardown_removes_file() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);
    session.update(TOKEN).unwrap();

    session.teardown().unwrap();

    assert!(!dir.path().join("nested").join("token").exists());
    assert!(file_session(&dir).token().is_none());
    // 重复登出无害
    session.teardown().unwrap();
}

#[tokio::test]
async fn test_forced_logout_clears_persisted_token() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);
    session.update(TOKEN).unwrap();

    let api = MockApi::new().with_me(admin_me()).arc();
    let dash = Dashboard::new(
        api.clone(),
        session.clone(),
        DashboardSettings {
            poll_interval: Duration::from_secs(3600),
            ..Default::default()
        },
    );
    assert!(dash.mount().await);

    api.revoke_token();
    assert!(dash.refresh_links().await.is_err());

    assert!(file_session(&dir).token().is_none());
}
