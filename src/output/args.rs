use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = "manifest.yaml",
        help = "Path to output manifest file"
    )]
    pub output: String,
}
