//! Constraint validation.
//!
//! Mirrors the browser's `willValidate`, `validity`, `validationMessage` and
//! `checkValidity()` for the controls [`ControlKind`] knows about.

use log::warn;
use regex::Regex;

use crate::control::{ControlKind, InputType};
use crate::error::DomError;
use crate::{Document, NodeId};

/// Which constraints a control currently fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    pub bad_input: bool,
    pub custom_error: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        *self == Self::default()
    }
}

impl Document {
    /// Whether the control is a candidate for constraint validation.
    pub fn will_validate(&self, id: NodeId) -> bool {
        let Some(kind) = self.control_kind(id) else {
            return false;
        };
        let barred_by_type = match kind {
            ControlKind::Input(t) => matches!(
                t,
                InputType::Hidden | InputType::Reset | InputType::Button
            ),
            ControlKind::Button { submits } => !submits,
            ControlKind::Listed => true,
            ControlKind::Select => false,
            ControlKind::Textarea => false,
        };
        if barred_by_type {
            return false;
        }
        let readonly = matches!(kind, ControlKind::Input(_) | ControlKind::Textarea)
            && self.has_attribute(id, "readonly");
        !readonly && !self.is_disabled(id) && !self.in_datalist(id)
    }

    fn is_disabled(&self, id: NodeId) -> bool {
        self.has_attribute(id, "disabled")
            || self
                .ancestors(id)
                .any(|a| self.tag_name(a) == Some("fieldset") && self.has_attribute(a, "disabled"))
    }

    fn in_datalist(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|a| self.tag_name(a) == Some("datalist"))
    }

    /// Evaluate every constraint declared on the control.
    pub fn validity(&self, id: NodeId) -> ValidityState {
        let mut state = ValidityState::default();
        let (Some(kind), Some(data)) = (self.control_kind(id), self.element(id)) else {
            return state;
        };
        state.custom_error = !data.custom_validity.is_empty();

        let value = self.value(id);
        let required = data.has_attribute("required");

        match kind {
            ControlKind::Input(InputType::Checkbox) => {
                state.value_missing = required && !data.checked;
            }
            ControlKind::Input(InputType::Radio) => {
                let group = self.radio_group(id);
                let group_required = group.iter().any(|&r| self.has_attribute(r, "required"));
                state.value_missing = group_required && !group.iter().any(|&r| self.checked(r));
            }
            ControlKind::Input(input_type) => {
                state.value_missing = required && input_type.accepts_required() && value.is_empty();
                if !value.is_empty() {
                    self.check_input_value(id, input_type, &value, &mut state);
                }
            }
            ControlKind::Textarea => {
                state.value_missing = required && value.is_empty();
                if !value.is_empty() {
                    self.check_length(id, &value, &mut state);
                }
            }
            ControlKind::Select => {
                state.value_missing = required && value.is_empty();
            }
            ControlKind::Button { .. } | ControlKind::Listed => {}
        }
        state
    }

    fn check_input_value(&self, id: NodeId, input_type: InputType, value: &str, state: &mut ValidityState) {
        match input_type {
            InputType::Email => {
                let valid = if self.has_attribute(id, "multiple") {
                    value
                        .split(',')
                        .all(|v| email_address::EmailAddress::is_valid(v.trim()))
                } else {
                    email_address::EmailAddress::is_valid(value)
                };
                state.type_mismatch = !valid;
            }
            InputType::Url => {
                state.type_mismatch = url::Url::parse(value).is_err();
            }
            InputType::Number => match value.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => self.check_range(id, number, state),
                _ => state.bad_input = true,
            },
            _ => {}
        }

        if input_type.is_text_like() {
            self.check_length(id, value, state);
            if let Some(pattern) = self.attribute(id, "pattern") {
                if let Some(matches) = self.pattern_matches(pattern, value) {
                    state.pattern_mismatch = !matches;
                }
            }
        }
    }

    /// Match `value` against an anchored `pattern`, compiling each distinct
    /// pattern once. `None` when the pattern does not compile.
    fn pattern_matches(&self, pattern: &str, value: &str) -> Option<bool> {
        let mut patterns = self.patterns.borrow_mut();
        let compiled = patterns.entry(pattern.to_string()).or_insert_with(|| {
            Regex::new(&format!("^(?:{pattern})$"))
                .inspect_err(|e| warn!("Ignoring invalid pattern {pattern:?}: {e}"))
                .ok()
        });
        compiled.as_ref().map(|re| re.is_match(value))
    }

    /// Number of distinct `pattern` attributes compiled so far.
    pub fn compiled_patterns(&self) -> usize {
        self.patterns.borrow().len()
    }

    fn check_length(&self, id: NodeId, value: &str, state: &mut ValidityState) {
        let length = value.chars().count();
        if let Some(max) = self.usize_attr(id, "maxlength") {
            state.too_long = length > max;
        }
        if let Some(min) = self.usize_attr(id, "minlength") {
            state.too_short = length < min;
        }
    }

    fn check_range(&self, id: NodeId, number: f64, state: &mut ValidityState) {
        let min = self.f64_attr(id, "min");
        if let Some(min) = min {
            state.range_underflow = number < min;
        }
        if let Some(max) = self.f64_attr(id, "max") {
            state.range_overflow = number > max;
        }
        if let Some(step) = self.f64_attr(id, "step").filter(|s| *s > 0.0) {
            let steps = (number - min.unwrap_or(0.0)) / step;
            state.step_mismatch = (steps - steps.round()).abs() > 1e-9;
        }
    }

    fn usize_attr(&self, id: NodeId, name: &str) -> Option<usize> {
        self.attribute(id, name)?.trim().parse().ok()
    }

    fn f64_attr(&self, id: NodeId, name: &str) -> Option<f64> {
        self.attribute(id, name)?
            .trim()
            .parse()
            .ok()
            .filter(|n: &f64| n.is_finite())
    }

    /// The message a browser would show for the first failing constraint.
    /// Empty when the control is valid or not validated at all.
    pub fn validation_message(&self, id: NodeId) -> String {
        if !self.will_validate(id) {
            return String::new();
        }
        let state = self.validity(id);
        if state.custom_error {
            return self
                .element(id)
                .map(|data| data.custom_validity.clone())
                .unwrap_or_default();
        }

        let kind = self.control_kind(id);
        let length = self.value(id).chars().count();
        let attr = |name: &str| self.attribute(id, name).unwrap_or_default().to_string();

        if state.value_missing {
            return match kind {
                Some(ControlKind::Input(InputType::Checkbox)) => {
                    "Please check this box if you want to proceed.".into()
                }
                Some(ControlKind::Input(InputType::Radio)) => {
                    "Please select one of these options.".into()
                }
                Some(ControlKind::Input(InputType::File)) => "Please select a file.".into(),
                Some(ControlKind::Select) => "Please select an item in the list.".into(),
                _ => "Please fill out this field.".into(),
            };
        }
        if state.type_mismatch {
            return match kind {
                Some(ControlKind::Input(InputType::Url)) => "Please enter a URL.".into(),
                _ => "Please enter an email address.".into(),
            };
        }
        if state.bad_input {
            return "Please enter a number.".into();
        }
        if state.pattern_mismatch {
            return "Please match the requested format.".into();
        }
        if state.too_long {
            return format!(
                "Please shorten this text to {} characters or less (you are currently using {length} characters).",
                attr("maxlength")
            );
        }
        if state.too_short {
            return format!(
                "Please lengthen this text to {} characters or more (you are currently using {length} characters).",
                attr("minlength")
            );
        }
        if state.range_underflow {
            return format!("Value must be greater than or equal to {}.", attr("min"));
        }
        if state.range_overflow {
            return format!("Value must be less than or equal to {}.", attr("max"));
        }
        if state.step_mismatch {
            return "Please enter a valid value.".into();
        }
        String::new()
    }

    /// True when the control is barred from validation or satisfies all its
    /// constraints.
    pub fn is_valid(&self, id: NodeId) -> bool {
        !self.will_validate(id) || self.validity(id).valid()
    }

    /// `form.checkValidity()`: every validated control in the form is valid.
    pub fn check_validity(&self, form: NodeId) -> bool {
        self.form_controls(form)
            .into_iter()
            .all(|control| self.is_valid(control))
    }

    /// Set or clear (with an empty message) a custom validation error.
    pub fn set_custom_validity(&mut self, id: NodeId, message: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?.custom_validity = message.into();
        Ok(())
    }
}
