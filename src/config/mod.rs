pub mod sdk;
pub mod uboot;

use std::fs;
use std::path::Path;

use tracing::debug;

// Missing config files are expected: absence means "no data", not an error.
fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(err) => {
            debug!(path = %path.display(), %err, "config file not readable, using defaults");
            None
        }
    }
}
