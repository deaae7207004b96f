use thiserror::Error;

use crate::manifest::errors::ManifestError;
use crate::output::errors::OutputError;

#[derive(Debug, Error)]
pub enum BootManifestError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
