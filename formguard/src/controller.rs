//! The validation controller.

use std::collections::HashMap;

use log::{debug, error, trace, warn};

use crate::clean::remove_message;
use crate::config::FormConfig;
use crate::dom::Dom;
use crate::error::RegistrationError;
use crate::event::{SubmitEvent, SubmitOutcome};
use crate::honeypot::is_bot_submission;
use crate::registry::{CallbackHandle, CallbackRegistry};
use crate::render::{post_message, ValidationMessage};
use crate::settings::Settings;

/// A form whose submissions the controller intercepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRegistration<N> {
    pub form: N,
    pub config: FormConfig,
    pub callback: CallbackHandle,
}

/// Owns a document and validates the forms registered with it.
///
/// # Example
///
/// ```ignore
/// let mut validation = FormValidation::new(document);
/// validation.register_callback("sendContact", |event, document| {
///     let email = document.element_by_id("email").map(|field| document.value(field));
///     println!("{} is valid, replying to {email:?}", event.form_id());
/// });
/// validation.init();
///
/// match validation.submit(form) {
///     SubmitOutcome::Invalid(messages) => { /* messages are in the document */ }
///     _ => {}
/// }
/// ```
pub struct FormValidation<D: Dom> {
    dom: D,
    settings: Settings,
    callbacks: CallbackRegistry<D::Node, D>,
    forms: HashMap<D::Node, FormRegistration<D::Node>>,
}

impl<D: Dom> FormValidation<D> {
    /// Create a controller with the default settings.
    pub fn new(dom: D) -> Self {
        Self::with_settings(dom, Settings::default())
    }

    pub fn with_settings(dom: D, settings: Settings) -> Self {
        Self {
            dom,
            settings,
            callbacks: CallbackRegistry::new(),
            forms: HashMap::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.dom
    }

    /// Mutable access to the document, e.g. to simulate user input.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_document(self) -> D {
        self.dom
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn callbacks(&self) -> &CallbackRegistry<D::Node, D> {
        &self.callbacks
    }

    /// Store a success callback under `name`. The last registration for a
    /// name wins, including for forms registered before the overwrite.
    ///
    /// The callback gets the submission event and the document, so it can
    /// read the submitted values.
    pub fn register_callback<F>(&mut self, name: impl Into<String>, callback: F) -> CallbackHandle
    where
        F: FnMut(&SubmitEvent<D::Node>, &mut D) + 'static,
    {
        let name = name.into();
        debug!("Registering callback '{name}'");
        self.callbacks.register(name, callback)
    }

    /// Start intercepting submissions of `form`.
    ///
    /// Reads the form's configuration, resolves its callback and turns off the
    /// document's own validation UI for it. On error the form is left
    /// untouched and a warning is logged.
    pub fn register_form(&mut self, form: D::Node) -> Result<CallbackHandle, RegistrationError> {
        self.try_register(form)
            .inspect_err(|e| warn!("Form validation: {e}"))
    }

    fn try_register(&mut self, form: D::Node) -> Result<CallbackHandle, RegistrationError> {
        let config = FormConfig::from_form(&self.dom, form, &self.settings)?;
        let callback = self.callbacks.resolve(&config.callback_name).ok_or_else(|| {
            RegistrationError::UnknownCallback {
                form_id: config.identifier.clone(),
                callback: config.callback_name.clone(),
            }
        })?;

        self.dom
            .set_attribute(form, "novalidate", "")
            .map_err(|e| RegistrationError::Document {
                form_id: config.identifier.clone(),
                message: e.to_string(),
            })?;

        debug!(
            "Registered form '{}' with callback '{}'",
            config.identifier, config.callback_name
        );
        self.forms.insert(
            form,
            FormRegistration {
                form,
                config,
                callback,
            },
        );
        Ok(callback)
    }

    pub fn is_registered(&self, form: D::Node) -> bool {
        self.forms.contains_key(&form)
    }

    pub fn registration(&self, form: D::Node) -> Option<&FormRegistration<D::Node>> {
        self.forms.get(&form)
    }

    /// Register every form in the document that has not opted out.
    ///
    /// Forms that fail registration are skipped with a warning. Returns how
    /// many forms were newly registered.
    pub fn init(&mut self) -> usize {
        let forms = self.dom.elements_by_tag(self.dom.root(), "form");
        let mut registered = 0;
        for form in forms {
            if self.forms.contains_key(&form) {
                continue;
            }
            if self.dom.attribute(form, &self.settings.opt_out_attribute).is_some() {
                trace!("Skipping opted-out form {form:?}");
                continue;
            }
            if self.register_form(form).is_ok() {
                registered += 1;
            }
        }
        debug!("Form validation initialized for {registered} form(s)");
        registered
    }

    /// Submit `form` as if the user pressed its submit button.
    pub fn submit(&mut self, form: D::Node) -> SubmitOutcome<D::Node> {
        let form_id = self.dom.attribute(form, "id").unwrap_or_default();
        let mut event = SubmitEvent::new(form, form_id);
        self.dispatch_submit(&mut event)
    }

    /// Run the interceptor for a submission event.
    ///
    /// Registered forms always have the event's default prevented and its
    /// propagation stopped. Then the honeypot is checked, then native
    /// validity, and either messages are rendered or the callback runs.
    pub fn dispatch_submit(&mut self, event: &mut SubmitEvent<D::Node>) -> SubmitOutcome<D::Node> {
        let form = event.form();
        let Some(registration) = self.forms.get(&form) else {
            trace!("Submission of unregistered form {form:?} left to the document");
            return SubmitOutcome::NotIntercepted;
        };

        event.prevent_default();
        event.stop_immediate_propagation();

        if is_bot_submission(&self.dom, form, &self.settings.honeypot_class) {
            return SubmitOutcome::BotRejected;
        }

        if !self.dom.check_validity(form) {
            clear(&mut self.dom, form, &registration.config, &self.settings);
            let rendered = post_message(&mut self.dom, form, &registration.config, &self.settings);
            let messages = match rendered {
                Ok(messages) => messages,
                Err(e) => {
                    error!("Failed to render validation messages for {}: {e}", event.form_id());
                    Vec::new()
                }
            };
            return SubmitOutcome::Invalid(messages);
        }

        clear(&mut self.dom, form, &registration.config, &self.settings);
        debug!("Form {} is valid, running callback", event.form_id());
        if !self.callbacks.invoke(registration.callback, event, &mut self.dom) {
            error!("Callback for form {} is no longer registered", event.form_id());
        }
        SubmitOutcome::Valid
    }

    /// The stored configuration of a registered form, or what the form
    /// declares right now.
    fn config_for(&self, form: D::Node) -> FormConfig {
        match self.forms.get(&form) {
            Some(registration) => registration.config.clone(),
            None => FormConfig::read(&self.dom, form, &self.settings),
        }
    }

    /// Render messages for the invalid fields of `form`.
    pub fn post_message(&mut self, form: D::Node) -> Result<Vec<ValidationMessage<D::Node>>, D::Error> {
        let config = self.config_for(form);
        post_message(&mut self.dom, form, &config, &self.settings)
    }

    /// Remove the messages and error markers of `form`.
    pub fn remove_message(&mut self, form: D::Node) -> Result<(), D::Error> {
        let config = self.config_for(form);
        remove_message(&mut self.dom, form, &config, &self.settings)
    }
}

fn clear<D: Dom>(dom: &mut D, form: D::Node, config: &FormConfig, settings: &Settings) {
    if let Err(e) = remove_message(dom, form, config, settings) {
        error!("Failed to clear validation messages for form '{}': {e}", config.identifier);
    }
}
