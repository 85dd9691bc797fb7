/// Errors raised while turning puzzle text into typed tokens.
///
/// Text that doesn't look like a token at all is skipped rather than
/// reported; only tokens that match but can't be represented end up here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
