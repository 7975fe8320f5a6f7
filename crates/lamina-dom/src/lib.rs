//! LAMINA element tree
//!
//! A minimal DOM stand-in: elements, a document to hold them, and the
//! mutation ops the renderer emits. Append targets are hard requirements
//! (the host page must supply the containers); class toggles on elements
//! that have gone missing are silent no-ops, matching click semantics.

mod document;
mod element;
mod error;
mod op;

pub use document::Document;
pub use element::Element;
pub use error::DomError;
pub use op::{DomOp, Target};

pub type Result<T> = std::result::Result<T, DomError>;
