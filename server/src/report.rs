use std::error::Error;

use log::{log, Level};

/// Failure sink. Writes `context` and the full cause chain to the log and
/// returns immediately.
pub fn report(level: Level, context: &str, cause: &dyn Error) {
    let mut message = format!("{}: {}", context, cause);
    let mut source = cause.source();
    while let Some(inner) = source {
        message.push_str(&format!(" (caused by: {})", inner));
        source = inner.source();
    }
    log!(level, "{}", message);
}
