//! Document error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Container `{0}` not found in document")]
    MissingContainer(String),
}
