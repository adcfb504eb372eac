/// What an element holds before it is attached to a document.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    /// A single text child.
    Text(String),
    Children(Vec<super::Element>),
}
