//! Owner list view coordinator.

use std::sync::Arc;

use tracing::{debug, error};

use paddock_core::Owner;

use crate::application::{Notifier, OwnerGateway};

/// Coordinator for the owner list view.
pub struct OwnerListCoordinator {
    owners: Arc<dyn OwnerGateway>,
    notifier: Arc<dyn Notifier>,
    listed: Vec<Owner>,
}

impl OwnerListCoordinator {
    pub fn new(owners: Arc<dyn OwnerGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            owners,
            notifier,
            listed: Vec::new(),
        }
    }

    pub fn listed(&self) -> &[Owner] {
        &self.listed
    }

    /// Activates the view: fetches all owners.
    pub async fn activate(&mut self) {
        match self.owners.get_all().await {
            Ok(owners) => {
                debug!(count = owners.len(), "owner list loaded");
                self.listed = owners;
            }
            Err(err) => {
                error!(%err, "failed to load owner list");
                self.notifier
                    .error(&format!("Failed to load owners: {err}"));
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::doubles::RecordingNotifier;
    use crate::application::{MockOwnerGateway, ServiceError};

    #[tokio::test]
    async fn test_activate_lists_all_owners() {
        let mut gateway = MockOwnerGateway::new();
        gateway.expect_get_all().times(1).returning(|| {
            Ok(vec![Owner {
                id: Some(1),
                first_name: "Wendy".to_string(),
                last_name: "Smith".to_string(),
                email: None,
            }])
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let mut coordinator =
            OwnerListCoordinator::new(Arc::new(gateway), Arc::clone(&notifier) as Arc<dyn Notifier>);

        coordinator.activate().await;

        assert_eq!(coordinator.listed().len(), 1);
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_activation_surfaces_the_error() {
        let mut gateway = MockOwnerGateway::new();
        gateway
            .expect_get_all()
            .returning(|| Err(ServiceError::Transport("connection refused".to_string())));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut coordinator =
            OwnerListCoordinator::new(Arc::new(gateway), Arc::clone(&notifier) as Arc<dyn Notifier>);

        coordinator.activate().await;

        assert!(coordinator.listed().is_empty());
        assert_eq!(notifier.errors.lock().unwrap().len(), 1);
    }
}
