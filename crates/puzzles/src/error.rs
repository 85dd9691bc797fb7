#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{puzzle} example check failed: expected {expected:?}, got {actual:?}")]
    ExampleMismatch {
        puzzle: &'static str,
        expected: (u64, u64),
        actual: (u64, u64),
    },

    #[error(transparent)]
    Solve(#[from] puzzles_core::Error),
}
