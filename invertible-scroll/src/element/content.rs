/// A child slot. `None` is an empty slot: it takes no space and is kept in
/// place so sparse child lists survive transformation.
pub type Child = Option<super::Element>;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Child>),
}

impl Content {
    /// The child slots, or an empty slice for leaf content.
    pub fn children(&self) -> &[Child] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
