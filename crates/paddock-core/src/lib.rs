//! # paddock-core
//!
//! Shared library for the Paddock registry client containing the record
//! DTOs and the search parameter types.
//!
//! This crate mirrors the JSON shapes of the remote registry API.  It has
//! zero dependencies on HTTP libraries, async runtimes, or terminal I/O, so
//! the client application and its tests can construct and inspect records
//! without touching the network.
//!
//! The crate defines:
//!
//! - **`domain::horse`** – The [`Horse`] record and its [`Sex`] enumeration.
//!   A horse optionally references an [`Owner`] and two other horses as
//!   mother and father; the server enforces that the parents have the
//!   matching sex.
//!
//! - **`domain::owner`** – The [`Owner`] record.  An owner's email is
//!   either absent or non-empty; [`Owner::normalised`] folds the empty
//!   string produced by a blank form field into "absent".
//!
//! - **`domain::search`** – [`HorseSearchParams`], the parameter set for
//!   the horse list endpoint, plus the fixed-sex constructors used by the
//!   mother/father autocomplete searches.

pub mod domain;

// Re-export the record types at the crate root so callers can write
// `paddock_core::Horse` instead of `paddock_core::domain::horse::Horse`.
pub use domain::horse::{Horse, Sex};
pub use domain::owner::Owner;
pub use domain::search::HorseSearchParams;
