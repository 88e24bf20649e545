//! Channel-backed router.
//!
//! Navigation requests travel over an `mpsc` channel into the dispatch
//! loop in `main.rs`, which activates the matching view.  The resolved
//! boolean reports whether the request was accepted; it is `false` once
//! the dispatch loop is gone, which is the "navigation resolved
//! unsuccessfully" case the coordinators surface to the user.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::{NavState, Router};
use crate::domain::routes::Route;

/// A navigation request handed to the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub route: Route,
    /// Transient state, visible only to the activation this request
    /// triggers.
    pub state: NavState,
}

/// [`Router`] implementation that forwards requests to the dispatch loop.
pub struct ChannelRouter {
    tx: mpsc::UnboundedSender<NavRequest>,
}

impl ChannelRouter {
    pub fn new(tx: mpsc::UnboundedSender<NavRequest>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Router for ChannelRouter {
    async fn navigate_with_state(&self, target: Route, state: NavState) -> bool {
        debug!(path = %target.path(), ?state, "navigation requested");
        self.tx.send(NavRequest { route: target, state }).is_ok()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigation_enqueues_a_request_and_resolves_true() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let router = ChannelRouter::new(tx);

        assert!(router.navigate(Route::HorseDetail(7)).await);

        let request = rx.recv().await.unwrap();
        assert_eq!(request.route, Route::HorseDetail(7));
        assert_eq!(request.state, NavState::default());
    }

    #[tokio::test]
    async fn test_transient_state_travels_with_the_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let router = ChannelRouter::new(tx);

        router
            .navigate_with_state(Route::HorseList, NavState { deleted: true })
            .await;

        assert!(rx.recv().await.unwrap().state.deleted);
    }

    #[tokio::test]
    async fn test_navigation_resolves_false_once_the_loop_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        let router = ChannelRouter::new(tx);
        drop(rx);

        assert!(!router.navigate(Route::HorseList).await);
    }
}
