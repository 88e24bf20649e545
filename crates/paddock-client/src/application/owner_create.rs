//! Owner create view coordinator.

use std::sync::Arc;

use tracing::{debug, error};

use paddock_core::Owner;

use crate::application::{Notifier, OwnerGateway, Router};
use crate::domain::form::OwnerForm;
use crate::domain::routes::Route;

/// Coordinator for the owner create view.
///
/// Holds a single in-progress draft initialised to empty strings.  The
/// form collaborator owns validation; this layer only reads the reported
/// form state and normalises the email before submission.
pub struct OwnerCreateCoordinator {
    owners: Arc<dyn OwnerGateway>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
    draft: Owner,
}

impl OwnerCreateCoordinator {
    pub fn new(
        owners: Arc<dyn OwnerGateway>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            owners,
            router,
            notifier,
            draft: Owner::draft(),
        }
    }

    pub fn draft(&self) -> &Owner {
        &self.draft
    }

    /// The form collaborator binds its inputs to this draft.
    pub fn draft_mut(&mut self) -> &mut Owner {
        &mut self.draft
    }

    /// Submits the draft.
    ///
    /// Proceeds only when the bound form reports itself valid.  The draft
    /// is normalised first so a blank email never reaches the server as an
    /// empty string -- the payload omits the field entirely.  On success:
    /// a success notification and navigation to the owners list; on
    /// failure: an error notification, no navigation.
    pub async fn submit(&mut self, form: &OwnerForm) {
        if !form.valid() {
            debug!("submit ignored: form is not valid");
            return;
        }

        let payload = self.draft.clone().normalised();
        match self.owners.create(&payload).await {
            Ok(created) => {
                self.notifier
                    .success(&format!("Owner {} successfully added", created.first_name));
                if !self.router.navigate(Route::OwnerList).await {
                    self.notifier.error("Navigation failed");
                }
            }
            Err(err) => {
                error!(%err, "failed to add owner");
                self.notifier.error(&format!("Failed to add owner: {err}"));
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
