use super::Content;

/// Builder for a detached element tree.
///
/// Elements are plain values until handed to [`Document::new`](crate::Document::new),
/// which flattens them into the document arena.
#[derive(Debug, Clone, Default)]
pub struct Element {
    // Identity
    pub tag: String,

    // Markup
    pub attributes: Vec<(String, String)>,

    // Content
    pub content: Content,

    // Form control state (the "dirty" value, separate from the value attribute)
    pub value: Option<String>,
    pub checked: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn fieldset() -> Self {
        Self::new("fieldset")
    }

    /// Create an `input` of the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// Create an `option` with a value attribute and a text label.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(label)
    }

    /// Create a `button`; the type defaults to `submit` like in HTML.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    // Attributes

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    /// Set a `data-*` attribute. The key is given without the prefix.
    pub fn data(self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.attr(format!("data-{}", key.as_ref()), value)
    }

    // Boolean attributes
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "")
    }

    pub fn readonly(self) -> Self {
        self.attr("readonly", "")
    }

    pub fn novalidate(self) -> Self {
        self.attr("novalidate", "")
    }

    pub fn selected(self) -> Self {
        self.attr("selected", "")
    }

    /// Add a class to the `class` attribute.
    pub fn class(self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        let current = self.get_attr("class").unwrap_or_default();
        if current.split_ascii_whitespace().any(|c| c == class) {
            return self;
        }
        let joined = if current.trim().is_empty() {
            class.to_string()
        } else {
            format!("{} {class}", current.trim_end())
        };
        self.attr("class", joined)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    // Control state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    // Children
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
