//! Renders a chat-style inverted list, then feeds it a few wheel events the
//! way a terminal would report them.
//!
//! Logs go to `inverted_list.log`.

use std::path::Path;

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use invertible_scroll::logging;
use invertible_scroll::{
    render_to_buffer, Buffer, Element, InvertibleProps, InvertibleScroller, PlatformCapabilities,
    WheelEvent,
};
use simplelog::LevelFilter;

const WIDTH: u16 = 32;
const HEIGHT: u16 = 6;

fn messages() -> Vec<Element> {
    (1..=12)
        .rev()
        .map(|n| Element::text(format!("message #{n}")))
        .collect()
}

fn draw(scroller: &InvertibleScroller, label: &str) {
    let rendered = scroller.render(InvertibleProps::new().children(messages()));
    rendered.commit();

    let mut buf = Buffer::new(WIDTH, HEIGHT);
    let layout = render_to_buffer(&rendered.element, &mut buf);
    scroller.default_view().apply_layout(&layout);

    println!("-- {label} --");
    for line in buf.lines() {
        println!("|{line}|");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_file(Path::new("inverted_list.log"), LevelFilter::Debug)?;

    let mut scroller = InvertibleScroller::new(PlatformCapabilities::default());
    draw(&scroller, "newest at the bottom");
    scroller.on_mount()?;

    let node = scroller.get_scrollable_node()?;
    for _ in 0..3 {
        let wheel_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        if let Some(mut event) = WheelEvent::from_crossterm(&wheel_up) {
            node.dispatch_wheel(&mut event);
        }
    }
    draw(&scroller, "after three wheel-up notches");

    scroller.scroll_to_end(false)?;
    draw(&scroller, "scrolled to the oldest message");

    scroller.on_unmount();
    Ok(())
}
