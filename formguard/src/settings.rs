//! Class names and attribute names the validator works with.

use serde::Deserialize;

/// Markup conventions shared by every form a controller manages.
///
/// The defaults match the stock stylesheet and markup; override them when a
/// page uses its own naming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Class put on every rendered message element.
    pub message_class: String,

    /// Class put on a field while it has a message.
    pub error_class: String,

    /// Class of the element wrapping the honeypot text input.
    pub honeypot_class: String,

    /// Form attribute naming the success callback.
    pub callback_attribute: String,

    /// Form attribute holding the id of an external message container.
    pub error_container_attribute: String,

    /// Form attribute selecting adjacent placement (`before` or after).
    pub placement_attribute: String,

    /// Form attribute that opts a form out of page initialization.
    pub opt_out_attribute: String,

    /// Field attribute overriding the native validation message.
    pub message_override_attribute: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            message_class: "validation-message".to_string(),
            error_class: "input-error".to_string(),
            honeypot_class: "jar".to_string(),
            callback_attribute: "data-form-callback".to_string(),
            error_container_attribute: "data-error-output-id".to_string(),
            placement_attribute: "data-near-input".to_string(),
            opt_out_attribute: "novalidate".to_string(),
            message_override_attribute: "data-error-message".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message element class.
    pub fn message_class(mut self, class: impl Into<String>) -> Self {
        self.message_class = class.into();
        self
    }

    /// Set the field error class.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the honeypot container class.
    pub fn honeypot_class(mut self, class: impl Into<String>) -> Self {
        self.honeypot_class = class.into();
        self
    }

    pub fn callback_attribute(mut self, name: impl Into<String>) -> Self {
        self.callback_attribute = name.into();
        self
    }

    pub fn error_container_attribute(mut self, name: impl Into<String>) -> Self {
        self.error_container_attribute = name.into();
        self
    }

    pub fn placement_attribute(mut self, name: impl Into<String>) -> Self {
        self.placement_attribute = name.into();
        self
    }

    pub fn opt_out_attribute(mut self, name: impl Into<String>) -> Self {
        self.opt_out_attribute = name.into();
        self
    }

    pub fn message_override_attribute(mut self, name: impl Into<String>) -> Self {
        self.message_override_attribute = name.into();
        self
    }
}
