//! Error types for fixture-harness

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Fixture loading error: {0}")]
    Fs(#[from] fixture_fs::Error),
}
