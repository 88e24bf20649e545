//! paddock-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same module tree.
//!
//! The client renders lists, detail views, and create forms for the horse
//! and owner records kept by a remote registry API.  Every user action
//! triggers exactly one HTTP request and awaits exactly one response; there
//! is no caching, no retry, and no offline state.
//!
//! # Layers
//!
//! - **`domain`** – Pure client-side types: the route table, the runtime
//!   configuration, and the typed form state.  No I/O.
//!
//! - **`application`** – View coordinators, one per view, plus the ports
//!   they depend on (record gateways, notifier, router).  A coordinator
//!   mediates between user input, an access service, and navigation; the
//!   concrete collaborators are injected at construction time.
//!
//! - **`infrastructure`** – HTTP access services backed by `reqwest`, the
//!   console notifier, and the channel-backed router feeding the dispatch
//!   loop in `main.rs`.
//!
//! **Dependency rule**: `infrastructure` may depend on `application` and
//! `domain`; `application` may depend on `domain`; neither `application`
//! nor `domain` imports `infrastructure`.

pub mod application;
pub mod domain;
pub mod infrastructure;
