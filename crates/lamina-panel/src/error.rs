//! Panel error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Tab index {index} out of range for panel of {len} tabs")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid tab id: {0}")]
    InvalidId(String),
}
