//! Horse create/edit view coordinator.
//!
//! One coordinator serves both modes; which one is active comes from the
//! route match as static data, never from parsing the path.  In Edit mode
//! the raw `:id` parameter is validated exactly like the detail view's.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use paddock_core::{Horse, Sex};

use crate::application::{HorseGateway, Notifier, Router};
use crate::domain::form::HorseForm;
use crate::domain::routes::{parse_route_id, CreateEditMode, Route};

/// Coordinator for the horse create/edit view.
pub struct HorseCreateEditCoordinator {
    horses: Arc<dyn HorseGateway>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
    mode: CreateEditMode,
    draft: Horse,
    /// Identifier of the horse being edited; `None` in Create mode.
    edit_id: Option<i64>,
    suggestion_limit: u32,
}

impl HorseCreateEditCoordinator {
    pub fn new(
        horses: Arc<dyn HorseGateway>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
        suggestion_limit: u32,
    ) -> Self {
        Self {
            horses,
            router,
            notifier,
            mode: CreateEditMode::Create,
            draft: Horse::draft(default_birth_date(), Sex::Female),
            edit_id: None,
            suggestion_limit,
        }
    }

    pub fn mode(&self) -> CreateEditMode {
        self.mode
    }

    pub fn draft(&self) -> &Horse {
        &self.draft
    }

    /// The form collaborator binds its inputs to this draft.
    pub fn draft_mut(&mut self) -> &mut Horse {
        &mut self.draft
    }

    /// Activates the view in the mode the route match carries.
    ///
    /// Create mode starts from a blank draft.  Edit mode validates the raw
    /// `:id` like the detail view -- an invalid parameter redirects to the
    /// fallback route without fetching -- and otherwise populates the
    /// draft from the fetched horse.
    pub async fn activate(&mut self, mode: CreateEditMode, raw_id: Option<&str>) {
        self.mode = mode;
        self.draft = Horse::draft(default_birth_date(), Sex::Female);
        self.edit_id = None;

        if mode == CreateEditMode::Create {
            return;
        }

        let Some(id) = parse_route_id(raw_id) else {
            warn!(raw_id, "edit view activated without a valid horse id");
            if !self.router.navigate(Route::HorseList).await {
                self.notifier.error("Navigation failed");
            }
            return;
        };

        match self.horses.get_by_id(id).await {
            Ok(horse) => {
                debug!(id, name = %horse.name, "horse loaded for editing");
                self.edit_id = Some(id);
                self.draft = horse;
            }
            Err(err) => {
                error!(id, %err, "failed to load horse for editing");
                self.notifier
                    .error(&format!("Failed to load horse {id}: {err}"));
            }
        }
    }

    /// Mother candidates for the parent autocomplete.  A failed search is
    /// surfaced and yields no suggestions.
    pub async fn suggest_mothers(&self, fragment: &str) -> Vec<Horse> {
        match self
            .horses
            .search_by_mother_name(fragment, self.suggestion_limit)
            .await
        {
            Ok(horses) => horses,
            Err(err) => {
                error!(%err, "mother suggestion search failed");
                self.notifier
                    .error(&format!("Failed to search mothers: {err}"));
                Vec::new()
            }
        }
    }

    /// Father candidates for the parent autocomplete.
    pub async fn suggest_fathers(&self, fragment: &str) -> Vec<Horse> {
        match self
            .horses
            .search_by_father_name(fragment, self.suggestion_limit)
            .await
        {
            Ok(horses) => horses,
            Err(err) => {
                error!(%err, "father suggestion search failed");
                self.notifier
                    .error(&format!("Failed to search fathers: {err}"));
                Vec::new()
            }
        }
    }

    /// Submits the draft.
    ///
    /// Proceeds only when the bound form reports itself valid.  Create
    /// issues `create`, Edit issues `edit` with the activated id; success
    /// notifies and navigates to the list, failure notifies and stays.
    pub async fn submit(&mut self, form: &HorseForm) {
        if !form.valid() {
            debug!("submit ignored: form is not valid");
            return;
        }

        let outcome = match self.mode {
            CreateEditMode::Create => self.horses.create(&self.draft).await,
            CreateEditMode::Edit => match self.edit_id {
                Some(id) => self.horses.edit(id, &self.draft).await,
                None => {
                    // Activation redirected away; there is nothing to update.
                    warn!("edit submitted without an activated horse");
                    return;
                }
            },
        };

        match outcome {
            Ok(saved) => {
                let verb = match self.mode {
                    CreateEditMode::Create => "created",
                    CreateEditMode::Edit => "updated",
                };
                self.notifier
                    .success(&format!("Horse {} successfully {verb}", saved.name));
                if !self.router.navigate(Route::HorseList).await {
                    self.notifier.error("Navigation failed");
                }
                // Navigation leaves the form; the draft is discarded.
                self.mode = CreateEditMode::Create;
                self.edit_id = None;
                self.draft = Horse::draft(default_birth_date(), Sex::Female);
            }
            Err(err) => {
                error!(%err, "failed to save horse");
                self.notifier.error(&format!("Failed to save horse: {err}"));
            }
        }
    }
}

/// Birth date a blank create form starts from, matching the form's own
/// "today" default.
fn default_birth_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
