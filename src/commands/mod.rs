use std::path::PathBuf;

use tracing::debug;

use crate::args::Args;
use crate::error::BootManifestError;
use crate::manifest::Manifest;
use crate::output;

/// Assemble the manifest from explicit values, config scrapes, and derived
/// defaults, then write it out. Returns the path of the written file so
/// callers can branch on the result instead of parsing printed text.
pub fn generate_manifest(args: &Args) -> Result<PathBuf, BootManifestError> {
    let manifest = Manifest::assemble(&args.fields, &args.inputs)?;
    output::write_manifest(&args.output, &manifest)?;
    debug!(id = %manifest.id, path = %args.output.output, "manifest written");
    Ok(PathBuf::from(&args.output.output))
}
