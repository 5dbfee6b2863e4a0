//! Reporting failures at the command boundary

use std::error::Error as _;

use tracing::error;

use super::traits::EditorHost;
use crate::core::ScaffoldError;

/// Log `err` with its full cause chain and tell the user.
///
/// Precondition failures are shown as they are; everything else gets the
/// summary `message` and a pointer to the log.
pub fn report_error(host: &dyn EditorHost, message: &str, err: &ScaffoldError) {
    let chain = cause_chain(err);
    error!(error = %err, causes = ?chain, "{}", message);

    if err.is_precondition() {
        host.show_error(&err.to_string());
    } else {
        host.show_error(&format!("{message} - See log for more info"));
    }
}

/// Messages of `err`'s sources, outermost first, excluding `err` itself
pub fn cause_chain(err: &ScaffoldError) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}
