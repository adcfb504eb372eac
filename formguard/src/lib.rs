//! Form validation with custom error messages and honeypot bot filtering.
//!
//! The controller intercepts form submissions, checks a honeypot field,
//! asks the document for native constraint validity, and then either renders
//! error messages next to the invalid fields (or into an external container)
//! or runs the form's success callback.
//!
//! Forms are configured declaratively through attributes:
//!
//! | Attribute              | On    | Meaning                                    |
//! |------------------------|-------|--------------------------------------------|
//! | `id`                   | form  | Required identifier                        |
//! | `data-form-callback`   | form  | Name of the success callback               |
//! | `data-error-output-id` | form  | Id of an element collecting all messages   |
//! | `data-near-input`      | form  | `before` to put messages before fields     |
//! | `novalidate`           | form  | Skip the form during [`FormValidation::init`] |
//! | `data-error-message`   | field | Message to use instead of the native one   |
//!
//! The attribute and class names can be changed through [`Settings`].

mod clean;
mod config;
mod controller;
mod dom;
mod error;
mod event;
mod honeypot;
mod registry;
mod render;
mod settings;

pub use clean::remove_message;
pub use config::{Destination, FormConfig, Placement};
pub use controller::{FormRegistration, FormValidation};
pub use dom::Dom;
pub use error::RegistrationError;
pub use event::{SubmitEvent, SubmitOutcome};
pub use honeypot::{find_honeypot, is_bot_submission};
pub use registry::{Callback, CallbackHandle, CallbackRegistry};
pub use render::{format_field_label, post_message, ValidationMessage};
pub use settings::Settings;

pub mod prelude {
    pub use crate::{
        Dom, FormValidation, Placement, RegistrationError, Settings, SubmitEvent, SubmitOutcome,
    };
    pub use formdom::{Document, Element, NodeId};
}
