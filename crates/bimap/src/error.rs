use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BimapError {
    /// `at_left` / `at_right` was asked for a key that has no pair.
    #[error("key not found")]
    KeyNotFound,
}
