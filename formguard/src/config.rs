//! Per-form configuration read from the form's attributes.

use log::warn;

use crate::dom::Dom;
use crate::error::RegistrationError;
use crate::settings::Settings;

/// Where a form's messages go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the field.
    Before,
    /// Immediately after the field (default).
    #[default]
    After,
    /// Appended to the form's external container.
    ExternalContainer,
}

impl Placement {
    /// Adjacent placement from the placement attribute value.
    pub fn adjacent(value: Option<&str>) -> Self {
        match value {
            Some("before") => Self::Before,
            _ => Self::After,
        }
    }
}

/// Where a form's messages end up, resolved against the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<N> {
    /// Append to this container.
    Container(N),
    /// Place next to each field.
    Adjacent(Placement),
}

/// Typed view of a form's declarative configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub identifier: String,
    pub callback_name: String,
    pub error_container_id: Option<String>,
    /// [`Placement::Before`] or [`Placement::After`]; used whenever messages
    /// do not go to a container.
    pub adjacent: Placement,
}

impl FormConfig {
    /// Read the configuration of a form being registered.
    ///
    /// Fails when the node is not a form, has no id, or names no callback.
    pub fn from_form<D: Dom>(
        dom: &D,
        form: D::Node,
        settings: &Settings,
    ) -> Result<Self, RegistrationError> {
        if dom.tag_name(form).as_deref() != Some("form") {
            return Err(RegistrationError::NotAForm);
        }

        let config = Self::read(dom, form, settings);
        if config.identifier.is_empty() {
            return Err(RegistrationError::MissingIdentifier);
        }
        if dom.attribute(form, &settings.callback_attribute).is_none() {
            return Err(RegistrationError::MissingCallbackBinding {
                form_id: config.identifier,
            });
        }
        Ok(config)
    }

    /// Read whatever configuration `form` carries, without requiring the
    /// attributes registration needs. Missing strings are empty.
    pub fn read<D: Dom>(dom: &D, form: D::Node, settings: &Settings) -> Self {
        Self {
            identifier: dom.attribute(form, "id").unwrap_or_default(),
            callback_name: dom
                .attribute(form, &settings.callback_attribute)
                .unwrap_or_default(),
            error_container_id: dom.attribute(form, &settings.error_container_attribute),
            adjacent: Placement::adjacent(dom.attribute(form, &settings.placement_attribute).as_deref()),
        }
    }

    /// The declared container, if it exists in the document.
    pub fn container<D: Dom>(&self, dom: &D) -> Option<D::Node> {
        dom.element_by_id(self.error_container_id.as_deref()?)
    }

    /// Where messages go right now. A declared container that does not
    /// resolve falls back to adjacent placement with a warning.
    pub fn destination<D: Dom>(&self, dom: &D) -> Destination<D::Node> {
        match (&self.error_container_id, self.container(dom)) {
            (_, Some(container)) => Destination::Container(container),
            (Some(id), None) => {
                warn!(
                    "Error container '{id}' for form '{}' not found, placing messages next to fields",
                    self.identifier
                );
                Destination::Adjacent(self.adjacent)
            }
            (None, None) => Destination::Adjacent(self.adjacent),
        }
    }
}

#[cfg(test)]
mod tests {
    use formdom::{Document, Element};

    use super::*;

    fn read(form: Element) -> Result<FormConfig, RegistrationError> {
        let doc = Document::new(Element::new("body").child(form));
        let form = doc.elements_by_tag(doc.root(), "form")[0];
        FormConfig::from_form(&doc, form, &Settings::default())
    }

    #[test]
    fn test_full_config() {
        let config = read(
            Element::form()
                .id("contact")
                .data("form-callback", "sendContact")
                .data("error-output-id", "errors"),
        )
        .unwrap();
        assert_eq!(
            config,
            FormConfig {
                identifier: "contact".into(),
                callback_name: "sendContact".into(),
                error_container_id: Some("errors".into()),
                adjacent: Placement::After,
            }
        );
    }

    #[test]
    fn test_before_placement() {
        let config = read(
            Element::form()
                .id("f")
                .data("form-callback", "cb")
                .data("near-input", "before"),
        )
        .unwrap();
        assert_eq!(config.adjacent, Placement::Before);
    }

    #[test]
    fn test_unknown_placement_defaults_to_after() {
        let config = read(
            Element::form()
                .id("f")
                .data("form-callback", "cb")
                .data("near-input", "beside"),
        )
        .unwrap();
        assert_eq!(config.adjacent, Placement::After);
    }

    #[test]
    fn test_empty_id_is_missing() {
        let err = read(Element::form().id("").data("form-callback", "cb")).unwrap_err();
        assert_eq!(err, RegistrationError::MissingIdentifier);
    }

    #[test]
    fn test_missing_callback() {
        let err = read(Element::form().id("f")).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::MissingCallbackBinding {
                form_id: "f".into()
            }
        );
    }

    #[test]
    fn test_destination_resolves_container() {
        let doc = Document::new(
            Element::new("body").child(Element::div().id("errors")).child(
                Element::form()
                    .id("f")
                    .data("form-callback", "cb")
                    .data("error-output-id", "errors"),
            ),
        );
        let form = doc.get_element_by_id("f").unwrap();
        let config = FormConfig::from_form(&doc, form, &Settings::default()).unwrap();
        assert_eq!(
            config.destination(&doc),
            Destination::Container(doc.get_element_by_id("errors").unwrap())
        );
    }

    #[test]
    fn test_destination_falls_back_when_container_missing() {
        let doc = Document::new(
            Element::form()
                .id("f")
                .data("form-callback", "cb")
                .data("error-output-id", "nowhere")
                .data("near-input", "before"),
        );
        let config = FormConfig::from_form(&doc, doc.root(), &Settings::default()).unwrap();
        assert_eq!(config.destination(&doc), Destination::Adjacent(Placement::Before));
    }

    #[test]
    fn test_read_is_lenient() {
        let doc = Document::new(Element::form());
        let config = FormConfig::read(&doc, doc.root(), &Settings::default());
        assert_eq!(config.identifier, "");
        assert_eq!(config.callback_name, "");
        assert_eq!(config.destination(&doc), Destination::Adjacent(Placement::After));
    }
}
