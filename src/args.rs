use crate::manifest::args::FieldArgs;
use crate::output::args::OutputArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
// Long option names keep the underscore spelling used by existing build
// recipes (--secure_boot, --sdk_config, ...).
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a manifest file for a boot image")]
pub struct Args {
    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Artifacts the manifest fields can be scraped from; all optional.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(
        long = "uboot_binary",
        value_name = "FILE",
        help = "Path to U-Boot binary to extract version from"
    )]
    pub uboot_binary: Option<String>,

    #[arg(
        long = "sdk_config",
        value_name = "FILE",
        help = "Path to SDK build config file"
    )]
    pub sdk_config: Option<String>,

    #[arg(
        long = "uboot_config",
        value_name = "FILE",
        help = "Path to U-Boot config file"
    )]
    pub uboot_config: Option<String>,
}
