//! Infrastructure layer for the client application.
//!
//! Contains the outward-facing adapters: HTTP access services, the console
//! notification surface, and the channel-backed router feeding the
//! dispatch loop in `main.rs`.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`,
//! and `paddock_core`, but MUST NOT be imported by them.

pub mod api;
pub mod nav;
pub mod notify;
