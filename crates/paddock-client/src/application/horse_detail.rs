//! Horse detail view coordinator.
//!
//! Activation reads the raw `:id` route parameter.  An absent or invalid
//! parameter redirects to the fallback route without issuing any fetch;
//! a valid one issues exactly one `get_by_id` per activation.

use std::sync::Arc;

use tracing::{debug, error, warn};

use paddock_core::{Horse, Owner};

use crate::application::{HorseGateway, NavState, Notifier, Router, ServiceError};
use crate::domain::routes::{parse_route_id, Route};

/// View state of the detail coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Activation has not completed yet (or redirected away).
    Loading,
    /// The horse was fetched and is on display.
    Loaded(Horse),
    /// The fetch failed; the failure has been surfaced to the user.
    Failed,
}

/// Coordinator for the horse detail view.
pub struct HorseDetailCoordinator {
    horses: Arc<dyn HorseGateway>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
    state: DetailState,
}

impl HorseDetailCoordinator {
    pub fn new(
        horses: Arc<dyn HorseGateway>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            horses,
            router,
            notifier,
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Activates the view for the bound `:id` route parameter.
    ///
    /// An absent or non-positive-integer parameter navigates to the
    /// fallback route without fetching -- the sole client-side input
    /// validation.  Otherwise the horse is fetched once; a failure is
    /// surfaced to the user and leaves the view in [`DetailState::Failed`].
    pub async fn activate(&mut self, raw_id: Option<&str>) {
        self.state = DetailState::Loading;

        let Some(id) = parse_route_id(raw_id) else {
            warn!(raw_id, "detail view activated without a valid horse id");
            if !self.router.navigate(Route::HorseList).await {
                self.notifier.error("Navigation failed");
            }
            return;
        };

        match self.horses.get_by_id(id).await {
            Ok(horse) => {
                debug!(id, name = %horse.name, "horse loaded");
                self.state = DetailState::Loaded(horse);
            }
            Err(err) => {
                error!(id, %err, "failed to load horse");
                self.notifier
                    .error(&format!("Failed to load horse {id}: {err}"));
                self.state = DetailState::Failed;
            }
        }
    }

    /// Navigates to the detail route of a related horse (mother or
    /// father).  A parent without an identifier, or a navigation resolving
    /// unsuccessfully, is surfaced as an error.
    pub async fn go_to_horse(&self, parent: &Horse) {
        let Some(id) = parent.id else {
            self.notifier
                .error(&format!("Horse {} has no identifier", parent.name));
            return;
        };
        if !self.router.navigate(Route::HorseDetail(id)).await {
            self.notifier.error("Navigation failed");
        }
    }

    /// Deletes the horse with the given id.
    ///
    /// On success: one success notification naming the deleted horse, then
    /// navigation to the list route with the transient `deleted` flag set
    /// so the list can show its banner.  On failure: no navigation, and an
    /// error notification carrying the server message.
    pub async fn delete(&mut self, id: i64) {
        match self.horses.delete(id).await {
            Ok(deleted) => {
                self.notifier
                    .success(&format!("Horse {} successfully deleted", deleted.name));
                let state = NavState { deleted: true };
                if !self.router.navigate_with_state(Route::HorseList, state).await {
                    self.notifier.error("Navigation failed");
                }
            }
            Err(err) => {
                error!(id, %err, "failed to delete horse");
                self.notifier
                    .error(&format!("Failed to delete horse: {}", delete_detail(&err)));
            }
        }
    }

    /// Formats an owner for display: empty for no owner, otherwise
    /// `"{first} {last}"`.
    pub fn format_owner_name(owner: Option<&Owner>) -> String {
        match owner {
            None => String::new(),
            Some(owner) => format!("{} {}", owner.first_name, owner.last_name),
        }
    }
}

/// The part of a delete failure worth showing: the server's own message
/// when there is one, the whole error otherwise.
fn delete_detail(err: &ServiceError) -> String {
    match err {
        ServiceError::Rejected { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
