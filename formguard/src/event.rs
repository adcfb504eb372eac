//! Submission events and their outcomes.

use crate::render::ValidationMessage;

/// A form submission, as handed to the interceptor and then to the success
/// callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent<N> {
    form: N,
    form_id: String,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
}

impl<N: Copy> SubmitEvent<N> {
    pub fn new(form: N, form_id: impl Into<String>) -> Self {
        Self {
            form,
            form_id: form_id.into(),
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    /// The form being submitted.
    pub fn form(&self) -> N {
        self.form
    }

    /// The form's `id` attribute at submission time.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Cancel the native submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop other listeners on the same target too. Implies
    /// [`stop_propagation`](Self::stop_propagation).
    pub fn stop_immediate_propagation(&mut self) {
        self.immediate_propagation_stopped = true;
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }
}

/// What the interceptor did with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<N> {
    /// The form is not registered; the native submission proceeds.
    NotIntercepted,
    /// The honeypot was filled. Dropped without feedback.
    BotRejected,
    /// Fields failed their constraints; these messages were rendered.
    Invalid(Vec<ValidationMessage<N>>),
    /// The form was valid and its callback ran.
    Valid,
}

impl<N> SubmitOutcome<N> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Messages rendered by this attempt (empty unless `Invalid`).
    pub fn messages(&self) -> &[ValidationMessage<N>] {
        match self {
            Self::Invalid(messages) => messages,
            _ => &[],
        }
    }
}
