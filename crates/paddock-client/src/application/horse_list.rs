//! Horse list view coordinator.

use std::sync::Arc;

use tracing::{debug, error};

use paddock_core::{Horse, HorseSearchParams};

use crate::application::{HorseGateway, NavState, Notifier};

/// Coordinator for the horse list view.
///
/// Holds the currently listed horses and the post-delete banner flag set
/// from the transient navigation state of a completed delete flow.
pub struct HorseListCoordinator {
    horses: Arc<dyn HorseGateway>,
    notifier: Arc<dyn Notifier>,
    listed: Vec<Horse>,
    deleted_banner: bool,
}

impl HorseListCoordinator {
    pub fn new(horses: Arc<dyn HorseGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            horses,
            notifier,
            listed: Vec::new(),
            deleted_banner: false,
        }
    }

    /// The horses currently on display.
    pub fn listed(&self) -> &[Horse] {
        &self.listed
    }

    /// Whether the "horse deleted" banner should show.  Set only by the
    /// activation immediately following a delete; any other activation
    /// clears it.
    pub fn deleted_banner(&self) -> bool {
        self.deleted_banner
    }

    /// Activates the view: fetches all horses and picks up the transient
    /// navigation state.
    pub async fn activate(&mut self, nav_state: NavState) {
        self.deleted_banner = nav_state.deleted;
        match self.horses.get_all().await {
            Ok(horses) => {
                debug!(count = horses.len(), "horse list loaded");
                self.listed = horses;
            }
            Err(err) => {
                error!(%err, "failed to load horse list");
                self.notifier
                    .error(&format!("Failed to load horses: {err}"));
            }
        }
    }

    /// Replaces the listed horses with the result of a parameterised
    /// search.
    pub async fn search(&mut self, params: &HorseSearchParams) {
        self.deleted_banner = false;
        match self.horses.search(params).await {
            Ok(horses) => {
                debug!(count = horses.len(), "horse search completed");
                self.listed = horses;
            }
            Err(err) => {
                error!(%err, "horse search failed");
                self.notifier
                    .error(&format!("Failed to search horses: {err}"));
            }
        }
    }

    /// Deletes a horse directly from the list and refreshes it in place;
    /// no navigation is involved.
    pub async fn delete(&mut self, id: i64) {
        match self.horses.delete(id).await {
            Ok(deleted) => {
                self.notifier
                    .success(&format!("Horse {} successfully deleted", deleted.name));
                self.listed.retain(|horse| horse.id != Some(id));
            }
            Err(err) => {
                error!(id, %err, "failed to delete horse");
                self.notifier
                    .error(&format!("Failed to delete horse: {err}"));
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
