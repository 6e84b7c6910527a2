//! Background link refresh

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use super::{Dashboard, DashboardInner};

/// Re-fetch links every `period` until the dashboard is gone or logged out.
///
/// The task only holds a weak reference, so it never keeps the dashboard
/// alive on its own.
pub(super) fn spawn(inner: Weak<DashboardInner>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval 的第一次 tick 立即完成
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let Some(inner) = inner.upgrade() else {
                trace!("Dashboard dropped, poller exiting");
                break;
            };
            let dashboard = Dashboard { inner };
            if !dashboard.is_authenticated() {
                break;
            }

            trace!("Polling links");
            if let Err(e) = dashboard.refresh_links().await {
                debug!("Link poll failed: {}", e);
            }
        }
    })
}
