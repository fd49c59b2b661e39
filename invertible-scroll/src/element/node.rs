use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Child, Content};
use crate::types::{resolve_styles, Direction, Overflow, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub direction: Direction,

    pub overflow: Overflow,
    pub scroll_offset: (u16, u16),

    /// Style list, applied left to right.
    pub style: Vec<Style>,

    // Custom data storage (native props, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            direction: Direction::Column,
            overflow: Overflow::Visible,
            scroll_offset: (0, 0),
            style: Vec::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    /// A plain container with no content.
    pub fn view() -> Self {
        Self {
            id: generate_id("view"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // Overflow
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn scroll_offset(mut self, x: u16, y: u16) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    // Visual
    /// Append a style to the style list.
    pub fn style(mut self, style: Style) -> Self {
        self.style.push(style);
        self
    }

    /// Append several styles to the style list.
    pub fn styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.style.extend(styles);
        self
    }

    /// The style list flattened into a single style.
    pub fn resolved_style(&self) -> Style {
        resolve_styles(&self.style)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_slots(std::iter::once(Some(child)));
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.push_slots(new_children.into_iter().map(Some));
        self
    }

    /// Append child slots as-is, keeping empty ones.
    pub fn slots(mut self, slots: impl IntoIterator<Item = Child>) -> Self {
        self.push_slots(slots);
        self
    }

    fn push_slots(&mut self, slots: impl IntoIterator<Item = Child>) {
        match &mut self.content {
            Content::Children(children) => children.extend(slots),
            _ => {
                // Replace leaf content with children
                self.content = Content::Children(slots.into_iter().collect());
            }
        }
    }
}
