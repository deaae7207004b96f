use std::path::Path;

use tracing::debug;

const USB_CONSOLE_MARKER: &str = "CONFIG_USBCONSOLE=y";
const PREBOOT_KEY: &str = "CONFIG_PREBOOT";
const UENV_LOAD_COMMAND: &str = "usbload uEnv.txt";

/// Settings scraped from the U-Boot config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UbootConfig {
    pub console: String,
    pub uenv_support: String,
}

impl Default for UbootConfig {
    fn default() -> Self {
        Self {
            console: "uart".to_string(),
            uenv_support: "false".to_string(),
        }
    }
}

impl UbootConfig {
    /// Scrape the U-Boot config. A missing or unreadable file yields the
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut config = Self::default();

        let Some(contents) = super::read_optional(path) else {
            return config;
        };
        for line in contents.lines() {
            // Independent checks: one line can set both values.
            if line.contains(USB_CONSOLE_MARKER) {
                config.console = "usb".to_string();
            }
            if line.contains(PREBOOT_KEY) && line.contains(UENV_LOAD_COMMAND) {
                config.uenv_support = "true".to_string();
            }
        }

        debug!(?config, path = %path.display(), "parsed U-Boot config");
        config
    }
}
