use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

const GENX_MARKER: &str = "CONFIG_GENX_ENABLE=y";
const BOARD_NAME_KEY: &str = "CONFIG_BOARD_NAME";
const RDK_BOARD_TAG: &str = "RDK";
const SUBOOT_MARKER: &str = "CONFIG_UBOOT_SUBOOT=y";

/// Chip-enable marker to chip type.
const CHIP_MARKERS: [(&str, &str); 3] = [
    ("CONFIG_BERLIN_DOLPHIN_A0=y", "sl1680"),
    ("CONFIG_BERLIN_PLATYPUS_A0=y", "sl1640"),
    ("CONFIG_BERLIN_MYNA2_A0=y", "sl1620"),
];

static MEMORY_SIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"CONFIG_PREBOOT_MEMORY_SIZE="(\d+GB)""#).expect("invalid memory size regex")
});

/// Settings scraped from the SDK build config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub secure_boot: String,
    pub memory_layout: Option<String>,
    pub uboot: String,
    pub chip: Option<String>,
    pub board: Option<String>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            secure_boot: "gen2".to_string(),
            memory_layout: None,
            uboot: "uboot".to_string(),
            chip: None,
            board: None,
        }
    }
}

impl SdkConfig {
    /// Scrape the SDK build config. A missing or unreadable file yields the
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut config = Self::default();

        let Some(contents) = super::read_optional(path) else {
            return config;
        };
        for line in contents.lines() {
            config.apply_line(line);
        }

        debug!(?config, path = %path.display(), "parsed SDK config");
        config
    }

    // Markers are alternatives within a line; matching is substring
    // containment, not key/value parsing. The memory-size pattern is only
    // tried on lines that matched no boolean marker.
    fn apply_line(&mut self, line: &str) {
        if line.contains(GENX_MARKER) {
            self.secure_boot = "genx".to_string();
        } else if let Some((_, chip)) = CHIP_MARKERS
            .iter()
            .find(|(marker, _)| line.contains(marker))
        {
            // First chip marker in the file wins.
            if self.chip.is_none() {
                self.chip = Some((*chip).to_string());
            }
        } else if line.contains(BOARD_NAME_KEY) && line.contains(RDK_BOARD_TAG) {
            self.board = Some("rdk".to_string());
        } else if line.contains(SUBOOT_MARKER) {
            self.uboot = "suboot".to_string();
        } else if let Some(captures) = MEMORY_SIZE_REGEX.captures(line) {
            self.memory_layout = Some(captures[1].to_lowercase());
        }
    }
}
