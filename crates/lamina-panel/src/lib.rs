//! LAMINA panel model
//!
//! An ordered collection of tab records with a single-valued selection:
//! after initialization exactly one tab and its content panel carry the
//! active marker, and every click moves that marker in one transition.

mod error;
mod state;
mod tab;

pub use error::PanelError;
pub use state::{PanelState, SelectionChange};
pub use tab::{Tab, TabDefinition, TabId, TabSet};

pub type Result<T> = std::result::Result<T, PanelError>;
