//! Draws an element tree into a cell buffer.
//!
//! Every element is drawn into its own off-screen buffer sized to its box,
//! then mirrored if its resolved style flips an axis, then copied into its
//! parent. A mirror therefore affects the element's whole box, children
//! included, and two nested mirrors on the same axis cancel.

use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell};
use crate::element::{Child, Content, Element};
use crate::layout::{children_extent, measure, LayoutResult, ScrollMetrics};
use crate::types::{Direction, Overflow, Size};

/// Render `root` so it fills `buf`, returning the scroll metrics measured
/// along the way.
pub fn render_to_buffer(root: &Element, buf: &mut Buffer) -> LayoutResult {
    let mut layout = LayoutResult::new();
    let size = (buf.width(), buf.height());
    let canvas = draw(root, size, &mut layout);
    buf.clear();
    buf.blit(&canvas, (0, 0), (0, 0), size);
    layout
}

fn draw(element: &Element, (width, height): (u16, u16), layout: &mut LayoutResult) -> Buffer {
    let mut canvas = Buffer::new(width, height);

    match &element.content {
        Content::None => {}
        Content::Text(text) => draw_text(text, &mut canvas),
        Content::Children(children) if element.overflow == Overflow::Scroll => {
            let (extent_w, extent_h) = children_extent(element);
            let content = match element.direction {
                Direction::Column => (width, extent_h),
                Direction::Row => (extent_w, height),
            };
            let metrics = ScrollMetrics {
                content,
                viewport: (width, height),
            };
            let (max_x, max_y) = metrics.max_offset();
            let offset = (
                element.scroll_offset.0.min(max_x),
                element.scroll_offset.1.min(max_y),
            );
            log::trace!(
                "[render] scroll {} content={:?} viewport={:?} offset={:?}",
                element.id,
                content,
                metrics.viewport,
                offset
            );
            layout.insert(element.id.clone(), metrics);

            let surface = draw_children(element.direction, children, content, layout);
            canvas.blit(&surface, offset, (0, 0), (width, height));
        }
        Content::Children(children) => {
            canvas = draw_children(element.direction, children, (width, height), layout);
        }
    }

    let style = element.resolved_style();
    if style.mirrors_y() {
        canvas.flip_vertical();
    }
    if style.mirrors_x() {
        canvas.flip_horizontal();
    }
    canvas
}

fn draw_children(
    direction: Direction,
    children: &[Child],
    (width, height): (u16, u16),
    layout: &mut LayoutResult,
) -> Buffer {
    let mut canvas = Buffer::new(width, height);
    let mut cursor: u16 = 0;

    // Empty slots take no space.
    for child in children.iter().flatten() {
        let (natural_w, natural_h) = measure(child);
        let size = match direction {
            Direction::Column => (
                cross_size(child.width, width),
                main_size(child.height, natural_h, height.saturating_sub(cursor)),
            ),
            Direction::Row => (
                main_size(child.width, natural_w, width.saturating_sub(cursor)),
                cross_size(child.height, height),
            ),
        };
        let child_canvas = draw(child, size, layout);
        let (origin, advance) = match direction {
            Direction::Column => ((0, cursor), size.1),
            Direction::Row => ((cursor, 0), size.0),
        };
        canvas.blit(&child_canvas, (0, 0), origin, size);
        cursor = cursor.saturating_add(advance);
    }

    canvas
}

/// Cross axis stretches unless the child has a fixed size.
fn cross_size(size: Size, available: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Auto => available,
    }
}

fn main_size(size: Size, natural: u16, remaining: u16) -> u16 {
    match size {
        Size::Fill => remaining,
        Size::Fixed(_) | Size::Auto => natural.min(remaining),
    }
}

fn draw_text(text: &str, canvas: &mut Buffer) {
    for (row, line) in text.lines().enumerate() {
        let Ok(y) = u16::try_from(row) else {
            break;
        };
        if y >= canvas.height() {
            break;
        }

        let mut x: u16 = 0;
        for ch in line.chars() {
            let ch_w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if ch_w == 0 {
                continue;
            }
            if x.saturating_add(ch_w) > canvas.width() {
                break;
            }
            canvas.set(x, y, Cell::new(ch));
            if ch_w == 2 {
                canvas.set(x + 1, y, Cell::continuation());
            }
            x += ch_w;
        }
    }
}
