//! Message removal.

use std::collections::HashSet;

use log::trace;

use crate::config::FormConfig;
use crate::dom::Dom;
use crate::settings::Settings;

/// Remove every rendered message of `form` and clear the error class from
/// its fields. Messages in an external container outside the form are
/// removed too. Running it on an already clean form changes nothing.
pub fn remove_message<D: Dom>(
    dom: &mut D,
    form: D::Node,
    config: &FormConfig,
    settings: &Settings,
) -> Result<(), D::Error> {
    let mut messages = dom.elements_by_class(form, &settings.message_class);
    if let Some(container) = config.container(&*dom) {
        messages.extend(dom.elements_by_class(container, &settings.message_class));
    }

    let mut seen = HashSet::new();
    for message in messages {
        if seen.insert(message) {
            dom.remove(message)?;
        }
    }

    for field in dom.elements_by_class(form, &settings.error_class) {
        dom.remove_class(field, &settings.error_class)?;
    }

    trace!("Cleared {} validation message(s)", seen.len());
    Ok(())
}
