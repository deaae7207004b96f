use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Required value is missing: {0}.")]
    MissingField(&'static str),
}
