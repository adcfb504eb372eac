//! Success callbacks, keyed by the name forms refer to them by.

use std::collections::HashMap;

use crate::event::SubmitEvent;

/// A success handler. Receives the intercepted submission event and the
/// document, so it can read the submitted values.
pub type Callback<N, D> = Box<dyn FnMut(&SubmitEvent<N>, &mut D)>;

/// Typed reference to a registered callback.
///
/// A handle stays bound to its name's slot, so re-registering the name
/// swaps the handler every holder of the handle will call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(usize);

/// Registry of named success callbacks over node handles `N` and document `D`.
pub struct CallbackRegistry<N, D> {
    /// Name to slot index.
    names: HashMap<String, CallbackHandle>,
    slots: Vec<Callback<N, D>>,
}

impl<N, D> CallbackRegistry<N, D> {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            slots: Vec::new(),
        }
    }

    /// Store a callback under `name`. The last registration for a name wins.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> CallbackHandle
    where
        F: FnMut(&SubmitEvent<N>, &mut D) + 'static,
    {
        let name = name.into();
        if let Some(&handle) = self.names.get(&name) {
            self.slots[handle.0] = Box::new(callback);
            return handle;
        }
        let handle = CallbackHandle(self.slots.len());
        self.slots.push(Box::new(callback));
        self.names.insert(name, handle);
        handle
    }

    /// Resolve a name to its handle.
    pub fn resolve(&self, name: &str) -> Option<CallbackHandle> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Call the handler behind `handle`. Returns false for a handle from
    /// another registry.
    pub fn invoke(&mut self, handle: CallbackHandle, event: &SubmitEvent<N>, document: &mut D) -> bool {
        match self.slots.get_mut(handle.0) {
            Some(callback) => {
                callback(event, document);
                true
            }
            None => false,
        }
    }
}

impl<N, D> Default for CallbackRegistry<N, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Stand-in document: a log the callbacks write to.
    type Log = Vec<String>;

    fn event() -> SubmitEvent<u32> {
        SubmitEvent::new(7, "form")
    }

    #[test]
    fn test_resolve_registered_name() {
        let mut registry = CallbackRegistry::<u32, Log>::new();
        let handle = registry.register("save", |_, _| {});
        assert_eq!(registry.resolve("save"), Some(handle));
        assert_eq!(registry.resolve("Save"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = CallbackRegistry::<u32, Log>::new();
        let handle = registry.register("save", |_, log: &mut Log| log.push("first".into()));
        let again = registry.register("save", |_, log: &mut Log| log.push("second".into()));

        let mut log = Log::new();
        assert_eq!(handle, again);
        assert!(registry.invoke(handle, &event(), &mut log));
        assert_eq!(log, vec!["second"]);
    }

    #[test]
    fn test_invoke_passes_event_and_document() {
        let seen = Rc::new(RefCell::new(None));
        let mut registry = CallbackRegistry::<u32, Log>::new();
        let sink = Rc::clone(&seen);
        let handle = registry.register("save", move |e: &SubmitEvent<u32>, log: &mut Log| {
            *sink.borrow_mut() = Some(e.form());
            log.push(e.form_id().to_string());
        });

        let mut log = Log::new();
        registry.invoke(handle, &event(), &mut log);
        assert_eq!(*seen.borrow(), Some(7));
        assert_eq!(log, vec!["form"]);
    }

    #[test]
    fn test_foreign_handle_is_not_invoked() {
        let mut other = CallbackRegistry::<u32, Log>::new();
        other.register("a", |_, _| {});
        let foreign = other.register("b", |_, _| {});

        let mut registry = CallbackRegistry::<u32, Log>::new();
        assert!(!registry.invoke(foreign, &event(), &mut Log::new()));
    }
}
