use thiserror::Error;

/// Reasons a form could not be registered.
///
/// None of these are fatal: the form is left alone and the browser's own
/// validation and submission stay in effect for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The node handed in is not a `form` element.
    #[error("Element is not a form")]
    NotAForm,

    /// The form has no usable `id`.
    #[error("Form ID missing")]
    MissingIdentifier,

    /// The form declares no callback name.
    #[error("Name of callback not supplied. Form ID: {form_id}")]
    MissingCallbackBinding { form_id: String },

    /// The declared callback name was never registered.
    #[error("Callback '{callback}' is not registered. Form ID: {form_id}")]
    UnknownCallback { form_id: String, callback: String },

    /// The document refused to mark the form as intercepted.
    #[error("Document error while registering form {form_id}: {message}")]
    Document { form_id: String, message: String },
}
