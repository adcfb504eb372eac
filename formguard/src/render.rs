//! Message rendering.

use log::{debug, trace};

use crate::config::{Destination, FormConfig, Placement};
use crate::dom::Dom;
use crate::settings::Settings;

/// A message element rendered for one invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage<N> {
    /// The field the message belongs to.
    pub owner: N,
    /// The rendered message element.
    pub node: N,
    pub text: String,
    pub placement: Placement,
}

/// Turn a field name into a display label: the first `-` and the first `_`
/// become spaces, and every word starts upper-case.
///
/// `first-name` becomes `First Name`.
pub fn format_field_label(name: &str) -> String {
    let spaced = name.replacen('-', " ", 1).replacen('_', " ", 1);
    let mut label = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start && (c.is_ascii_alphanumeric() || c == '_') {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        word_start = c.is_whitespace();
    }
    label
}

/// Render a message for every invalid field of `form`, in declaration order.
///
/// Purely additive: run [`remove_message`](crate::remove_message) first to
/// avoid duplicates.
pub fn post_message<D: Dom>(
    dom: &mut D,
    form: D::Node,
    config: &FormConfig,
    settings: &Settings,
) -> Result<Vec<ValidationMessage<D::Node>>, D::Error> {
    let destination = config.destination(&*dom);

    let mut messages = Vec::new();
    for field in dom.form_controls(form) {
        if !dom.will_validate(field) || dom.is_valid(field) {
            continue;
        }

        let mut text = dom
            .attribute(field, &settings.message_override_attribute)
            .unwrap_or_else(|| dom.validation_message(field));
        if matches!(destination, Destination::Container(_)) {
            let name = dom.attribute(field, "name").unwrap_or_default();
            text = format!("{} - {text}", format_field_label(&name));
        }
        trace!("Field {field:?} invalid: {text}");

        dom.add_class(field, &settings.error_class)?;
        let node = dom.create_element("div");
        dom.add_class(node, &settings.message_class)?;
        dom.set_text_content(node, &text)?;

        let placement = match destination {
            Destination::Container(container) => {
                dom.append_child(container, node)?;
                Placement::ExternalContainer
            }
            Destination::Adjacent(Placement::Before) => {
                dom.insert_before(node, field)?;
                Placement::Before
            }
            Destination::Adjacent(_) => {
                dom.insert_after(node, field)?;
                Placement::After
            }
        };

        messages.push(ValidationMessage {
            owner: field,
            node,
            text,
            placement,
        });
    }

    debug!("Rendered {} validation message(s)", messages.len());
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hyphenated_name() {
        assert_eq!(format_field_label("first-name"), "First Name");
    }

    #[test]
    fn test_format_underscored_name() {
        assert_eq!(format_field_label("last_name"), "Last Name");
    }

    #[test]
    fn test_format_replaces_only_first_of_each() {
        assert_eq!(format_field_label("a-b-c_d_e"), "A B-c D_e");
    }

    #[test]
    fn test_format_plain_and_empty() {
        assert_eq!(format_field_label("email"), "Email");
        assert_eq!(format_field_label(""), "");
    }
}
