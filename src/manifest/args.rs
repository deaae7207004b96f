use clap::Args;

/// Explicit overrides for the manifest fields. Anything left unset falls
/// back to the config scrapes and derived defaults.
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    #[arg(long, value_name = "NAME", help = "Chip type (e.g. sl1680)")]
    pub chip: Option<String>,

    #[arg(long, value_name = "NAME", help = "Board identity (e.g. rdk)")]
    pub board: Option<String>,

    #[arg(
        long = "secure_boot",
        value_name = "MODE",
        help = "Secure boot mode (gen2/genx)"
    )]
    pub secure_boot: Option<String>,

    #[arg(
        long = "vendor_id",
        value_name = "HEX",
        default_value = "06CB",
        help = "USB vendor id"
    )]
    pub vendor_id: String,

    #[arg(
        long = "product_id",
        value_name = "HEX",
        help = "USB product id; derived from the chip when omitted"
    )]
    pub product_id: Option<String>,

    #[arg(long, value_name = "TYPE", help = "Console type (uart/usb)")]
    pub console: Option<String>,

    #[arg(
        long = "uenv_support",
        value_name = "BOOL",
        help = "Whether the bootloader loads uEnv.txt over USB"
    )]
    pub uenv_support: Option<String>,

    #[arg(
        long = "memory_layout",
        value_name = "SIZE",
        help = "Memory layout (e.g. 4gb)"
    )]
    pub memory_layout: Option<String>,

    #[arg(long, value_name = "VARIANT", help = "Bootloader variant (uboot/suboot)")]
    pub uboot: Option<String>,

    #[arg(
        long = "uboot_version",
        value_name = "STR",
        default_value = "",
        help = "Full U-Boot version string (quoted if it has spaces)"
    )]
    pub uboot_version: String,
}
