//! Application layer: view coordinators and the ports they depend on.
//!
//! A coordinator mediates between user input, a record gateway, and
//! navigation.  The concrete collaborators -- HTTP services, the console
//! notifier, the channel-backed router -- live in the infrastructure layer
//! and are injected as `Arc<dyn ..>` at construction time, which is also
//! what makes the coordinators testable against recording doubles.
//!
//! # Error surfacing
//!
//! Every user-triggered operation that fails is surfaced through
//! [`Notifier::error`] with the failure's message, in addition to a
//! `tracing` log line.  There are no silent, log-only failure paths.
//!
//! # Use cases
//!
//! - **`horse_list`** – list all horses, run parameterised searches,
//!   delete in place, show the post-delete banner.
//! - **`horse_detail`** – load one horse by its route parameter, jump to
//!   parent horses, delete with list navigation.
//! - **`horse_create_edit`** – one view for both create and edit; the mode
//!   is static route data.  Parent autocomplete via the fixed-sex searches.
//! - **`owner_create`** – owner draft plus submit with email
//!   normalisation.
//! - **`owner_list`** – list all owners.

pub mod horse_create_edit;
pub mod horse_detail;
pub mod horse_list;
pub mod owner_create;
pub mod owner_list;

use async_trait::async_trait;
use thiserror::Error;

use paddock_core::{Horse, HorseSearchParams, Owner};

use crate::domain::routes::Route;

/// Errors surfaced by the record gateways.
///
/// Gateways translate the transport outcome into this taxonomy and nothing
/// more; deciding what to tell the user is the coordinator's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The server answered 404 -- the record does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server answered with a non-2xx status other than 404.  The
    /// message is the server-provided error text.
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a usable response (connect failure,
    /// timeout, undecodable body).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Access service for horse records.
///
/// Stateless: each call translates one domain operation into one HTTP
/// request.  No retry, no caching, no interpretation of failures beyond
/// the [`ServiceError`] taxonomy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HorseGateway: Send + Sync {
    /// All horses stored in the system.
    async fn get_all(&self) -> Result<Vec<Horse>, ServiceError>;

    /// Creates a horse from a draft (`id` must be `None`) and returns the
    /// persisted record with its server-assigned identifier.  Required
    /// fields are the caller's responsibility; the gateway validates
    /// nothing.
    async fn create(&self, horse: &Horse) -> Result<Horse, ServiceError>;

    /// Updates the horse with the given id from a full payload and returns
    /// the updated record.
    async fn edit(&self, id: i64, horse: &Horse) -> Result<Horse, ServiceError>;

    /// The horse with the given id, or [`ServiceError::NotFound`].
    async fn get_by_id(&self, id: i64) -> Result<Horse, ServiceError>;

    /// Deletes the horse with the given id and returns its last
    /// representation for confirmation display.
    async fn delete(&self, id: i64) -> Result<Horse, ServiceError>;

    /// All horses matching the given parameter set -- the generic search
    /// primitive the convenience wrappers build on.
    async fn search(&self, params: &HorseSearchParams) -> Result<Vec<Horse>, ServiceError>;

    /// Mother candidates: name substring, female only, at most `limit`.
    async fn search_by_mother_name(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<Horse>, ServiceError> {
        self.search(&HorseSearchParams::mother_candidates(name, limit))
            .await
    }

    /// Father candidates: name substring, male only, at most `limit`.
    async fn search_by_father_name(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<Horse>, ServiceError> {
        self.search(&HorseSearchParams::father_candidates(name, limit))
            .await
    }
}

/// Access service for owner records.
///
/// Only the operations the views exercise; same shape as the horse
/// gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerGateway: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Owner>, ServiceError>;

    /// The owner with the given id, or [`ServiceError::NotFound`].
    async fn get_by_id(&self, id: i64) -> Result<Owner, ServiceError>;

    /// Creates an owner and returns the persisted record.  The caller must
    /// have normalised the draft first (see [`Owner::normalised`]).
    async fn create(&self, owner: &Owner) -> Result<Owner, ServiceError>;
}

/// User-visible notification collaborator (the "toast" surface).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Transient navigation state, visible only to the immediately following
/// view activation.  Not persisted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    /// Set by the delete flow so the list view can show its "horse
    /// deleted" banner.
    pub deleted: bool,
}

/// Routing collaborator.
///
/// Navigation is asynchronous; the resolved boolean reports whether it
/// succeeded, and coordinators await it before deciding whether to notify
/// a navigation failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Router: Send + Sync {
    async fn navigate_with_state(&self, target: Route, state: NavState) -> bool;

    async fn navigate(&self, target: Route) -> bool {
        self.navigate_with_state(target, NavState::default()).await
    }
}

// ── Test doubles ──────────────────────────────────────────────────────────────
