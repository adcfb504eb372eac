//! Form control classification.

use crate::{Document, NodeId};

/// Input types, parsed from the `type` attribute. Unknown or missing types
/// behave as `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Number,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
    Hidden,
    Submit,
    Image,
    Reset,
    Button,
}

impl InputType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "email" => Self::Email,
            "password" => Self::Password,
            "date" => Self::Date,
            "month" => Self::Month,
            "week" => Self::Week,
            "time" => Self::Time,
            "datetime-local" => Self::DatetimeLocal,
            "number" => Self::Number,
            "range" => Self::Range,
            "color" => Self::Color,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "submit" => Self::Submit,
            "image" => Self::Image,
            "reset" => Self::Reset,
            "button" => Self::Button,
            _ => Self::Text,
        }
    }

    /// Types where `pattern`, `minlength` and `maxlength` apply.
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Search | Self::Tel | Self::Url | Self::Email | Self::Password
        )
    }

    /// Types where `required` applies.
    pub fn accepts_required(self) -> bool {
        !matches!(
            self,
            Self::Hidden
                | Self::Range
                | Self::Color
                | Self::Submit
                | Self::Image
                | Self::Reset
                | Self::Button
        )
    }
}

/// The kind of form-associated element a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Input(InputType),
    Select,
    Textarea,
    /// A `button`; `true` when it submits the form.
    Button { submits: bool },
    /// `fieldset`, `output` and `object`: listed in a form's elements but
    /// never validated.
    Listed,
}

impl Document {
    /// Classify a node as a form control, or `None` for anything else.
    pub fn control_kind(&self, id: NodeId) -> Option<ControlKind> {
        match self.tag_name(id)? {
            "input" => Some(ControlKind::Input(InputType::parse(
                self.attribute(id, "type").unwrap_or("text"),
            ))),
            "select" => Some(ControlKind::Select),
            "textarea" => Some(ControlKind::Textarea),
            "button" => Some(ControlKind::Button {
                submits: self
                    .attribute(id, "type")
                    .is_none_or(|t| !matches!(t.to_ascii_lowercase().as_str(), "button" | "reset")),
            }),
            "fieldset" | "output" | "object" => Some(ControlKind::Listed),
            _ => None,
        }
    }

    /// The form's listed controls in document order, like `form.elements`.
    pub fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        self.descendants(form)
            .into_iter()
            .filter(|&node| self.control_kind(node).is_some())
            .collect()
    }
}
