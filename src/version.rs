use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Version signature stamped into U-Boot images, e.g.
/// `U-Boot 2019.10-rc4 (Oct 01 2023 - 12:00:00 +0000)`.
static UBOOT_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"U-Boot\s+\d{4}\.\d{2}(?:-[\w\-]+)?\s+\([A-Za-z]{3}\s+\d{1,2}\s+\d{4}\s+-\s+\d{2}:\d{2}:\d{2}\s+\+\d{4}\)",
    )
    .expect("invalid U-Boot version regex")
});

/// Extract the U-Boot version string from a compiled bootloader binary.
///
/// Runs the external `strings` utility over the binary and scans its output
/// for the version signature. Version extraction is best-effort enrichment:
/// a missing binary, a missing tool, or a failing invocation all yield
/// `None`, never an error.
pub fn extract_uboot_version(binary: impl AsRef<Path>) -> Option<String> {
    let binary = binary.as_ref();

    let output = match Command::new("strings").arg(binary).output() {
        Ok(output) => output,
        Err(err) => {
            debug!(binary = %binary.display(), %err, "failed to run strings");
            return None;
        }
    };
    if !output.status.success() {
        debug!(binary = %binary.display(), status = %output.status, "strings failed");
        return None;
    }

    find_version_line(&String::from_utf8_lossy(&output.stdout))
}

/// Scan extracted text line by line for the first version signature match,
/// trimmed of surrounding whitespace.
pub fn find_version_line(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        UBOOT_VERSION_REGEX
            .find(line)
            .map(|found| found.as_str().trim().to_string())
    })
}
