//! Console notification surface.
//!
//! The terminal stands in for the toast notifications of a graphical
//! client: success and error lines go to stdout/stderr for the user, and
//! to `tracing` for the log.

use tracing::{error, info};

use crate::application::Notifier;

/// [`Notifier`] implementation printing to the terminal.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        info!(message, "notification");
        println!("[ok] {message}");
    }

    fn error(&self, message: &str) {
        error!(message, "notification");
        eprintln!("[error] {message}");
    }
}
