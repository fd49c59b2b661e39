//! Intrinsic measurement and the per-frame layout record.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::{Direction, Size};

/// Content and viewport sizes of a scroll element, as `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub content: (u16, u16),
    pub viewport: (u16, u16),
}

impl ScrollMetrics {
    /// Largest valid offset on each axis.
    pub fn max_offset(&self) -> (u16, u16) {
        (
            self.content.0.saturating_sub(self.viewport.0),
            self.content.1.saturating_sub(self.viewport.1),
        )
    }
}

/// What a render pass learned about scroll elements, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    scroll: HashMap<String, ScrollMetrics>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, metrics: ScrollMetrics) {
        self.scroll.insert(id.into(), metrics);
    }

    pub fn get(&self, id: &str) -> Option<&ScrollMetrics> {
        self.scroll.get(id)
    }

    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.scroll.get(id).map(|m| m.content)
    }

    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.scroll.get(id).map(|m| m.viewport)
    }
}

/// Natural `(width, height)` of an element, before any stretching.
pub fn measure(element: &Element) -> (u16, u16) {
    let (width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => measure_text(text),
        Content::Children(_) => children_extent(element),
    };

    (fixed_or(element.width, width), fixed_or(element.height, height))
}

/// Size of an element's children stacked along its direction.
pub fn children_extent(element: &Element) -> (u16, u16) {
    let sizes = element.content.children().iter().flatten().map(measure);
    match element.direction {
        Direction::Column => sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| (w.max(cw), h.saturating_add(ch))),
        Direction::Row => sizes.fold((0u16, 0u16), |(w, h), (cw, ch)| (w.saturating_add(cw), h.max(ch))),
    }
}

fn measure_text(text: &str) -> (u16, u16) {
    let width = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let height = text.lines().count();
    (clamp_u16(width), clamp_u16(height))
}

fn fixed_or(size: Size, natural: u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Auto => natural,
    }
}

fn clamp_u16(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
