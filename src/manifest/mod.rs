pub mod args;
pub mod errors;

use uuid::Uuid;

use crate::args::InputArgs;
use crate::config::sdk::SdkConfig;
use crate::config::uboot::UbootConfig;
use crate::version;
use args::FieldArgs;
use errors::ManifestError;

/// Chip type to USB product id.
const PRODUCT_IDS: [(&str, &str); 3] = [
    ("sl1680", "00B1"),
    ("sl1640", "00B0"),
    ("sl1620", "00B2"),
];

/// The assembled manifest record. Required fields are plain strings;
/// everything the tool tolerates leaving unresolved stays optional.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub id: Uuid,
    pub chip: String,
    pub board: Option<String>,
    pub secure_boot: String,
    pub vendor_id: String,
    pub product_id: String,
    pub console: String,
    pub uenv_support: Option<String>,
    pub memory_layout: Option<String>,
    pub uboot: Option<String>,
    pub uboot_version: String,
}

impl Manifest {
    /// Merge explicit field values, config scrapes, and derived defaults
    /// into a manifest, under a fixed precedence: an explicit non-empty
    /// value always wins; a config scrape fills the gaps only when its
    /// path was supplied; the product id falls back to the chip lookup.
    pub fn assemble(fields: &FieldArgs, inputs: &InputArgs) -> Result<Self, ManifestError> {
        let mut uboot_version = fields.uboot_version.clone();
        if uboot_version.is_empty() {
            if let Some(binary) = &inputs.uboot_binary {
                uboot_version = version::extract_uboot_version(binary).unwrap_or_default();
            }
        }

        let mut secure_boot = non_empty(&fields.secure_boot);
        let mut memory_layout = non_empty(&fields.memory_layout);
        let mut uboot = non_empty(&fields.uboot);
        let mut chip = non_empty(&fields.chip);
        let mut board = non_empty(&fields.board);
        if let Some(path) = &inputs.sdk_config {
            let sdk = SdkConfig::from_file(path);
            secure_boot = secure_boot.or(Some(sdk.secure_boot));
            memory_layout = memory_layout.or(sdk.memory_layout);
            uboot = uboot.or(Some(sdk.uboot));
            chip = chip.or(sdk.chip);
            board = board.or(sdk.board);
        }

        let mut console = non_empty(&fields.console);
        let mut uenv_support = non_empty(&fields.uenv_support);
        if let Some(path) = &inputs.uboot_config {
            let uboot_config = UbootConfig::from_file(path);
            console = console.or(Some(uboot_config.console));
            uenv_support = uenv_support.or(Some(uboot_config.uenv_support));
        }

        let product_id =
            non_empty(&fields.product_id).or_else(|| derive_product_id(chip.as_deref()));

        let chip = chip.ok_or(ManifestError::MissingField("chip"))?;
        let secure_boot = secure_boot.ok_or(ManifestError::MissingField("secure_boot"))?;
        let product_id = product_id.ok_or(ManifestError::MissingField("product_id"))?;
        let console = console.ok_or(ManifestError::MissingField("console"))?;

        Ok(Self {
            id: Uuid::now_v7(),
            chip,
            board,
            secure_boot,
            vendor_id: fields.vendor_id.clone(),
            product_id,
            console,
            uenv_support,
            memory_layout,
            uboot,
            uboot_version,
        })
    }

    /// Render the fixed-order document. Absent optional fields serialize as
    /// the literal `None`, and `uboot_version` is always double-quoted, to
    /// stay byte-compatible with what downstream flashing tooling consumes.
    pub fn render(&self) -> String {
        format!(
            "id: {}\n\
             chip: {}\n\
             board: {}\n\
             secure_boot: {}\n\
             vendor_id: {}\n\
             product_id: {}\n\
             console: {}\n\
             uenv_support: {}\n\
             memory_layout: {}\n\
             uboot: {}\n\
             uboot_version: \"{}\"\n",
            self.id,
            self.chip,
            display_opt(&self.board),
            self.secure_boot,
            self.vendor_id,
            self.product_id,
            self.console,
            display_opt(&self.uenv_support),
            display_opt(&self.memory_layout),
            display_opt(&self.uboot),
            self.uboot_version,
        )
    }
}

fn derive_product_id(chip: Option<&str>) -> Option<String> {
    let chip = chip?;
    PRODUCT_IDS
        .iter()
        .find(|(name, _)| *name == chip)
        .map(|(_, product_id)| (*product_id).to_string())
}

// Absent optional fields serialize as the literal `None`.
fn display_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

// Empty strings behave as absent so that precedence skips them.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
