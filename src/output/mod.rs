pub mod args;
pub mod errors;

use crate::manifest::Manifest;
use args::OutputArgs;
use errors::OutputError;

pub fn write_manifest(args: &OutputArgs, manifest: &Manifest) -> Result<(), OutputError> {
    std::fs::write(&args.output, manifest.render()).map_err(|e| {
        OutputError::FileError(format!("failed to write manifest {}: {}", args.output, e))
    })?;
    Ok(())
}
