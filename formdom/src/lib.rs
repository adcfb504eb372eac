pub mod control;
pub mod document;
pub mod element;
pub mod error;
pub mod validity;

pub use control::{ControlKind, InputType};
pub use document::{Document, NodeId};
pub use element::{Content, Element};
pub use error::DomError;
pub use validity::ValidityState;
