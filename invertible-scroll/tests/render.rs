use invertible_scroll::{
    render_to_buffer, Buffer, Element, InvertibleProps, InvertibleScroller, PlatformCapabilities,
    Size, WheelEvent,
};

/// Render one frame of `scroller` and feed the layout back to its view.
fn frame(scroller: &InvertibleScroller, props: InvertibleProps, width: u16, height: u16) -> Vec<String> {
    let rendered = scroller.render(props);
    rendered.commit();
    let mut buf = Buffer::new(width, height);
    let layout = render_to_buffer(&rendered.element, &mut buf);
    scroller.default_view().apply_layout(&layout);
    buf.lines().into_iter().map(|l| l.trim_end().to_string()).collect()
}

fn items(n: usize) -> Vec<Element> {
    (0..n).map(|i| Element::text(format!("item{i}"))).collect()
}

// ============================================================================
// Vertical
// ============================================================================

#[test]
fn test_inverted_list_grows_from_bottom() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new().children([
        Element::text("one"),
        Element::text("two"),
        Element::text("three"),
    ]);

    let lines = frame(&scroller, props, 10, 5);

    assert_eq!(lines, vec!["", "", "three", "two", "one"]);
}

#[test]
fn test_not_inverted_list_grows_from_top() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new()
        .inverted(false)
        .children([Element::text("one"), Element::text("two")]);

    let lines = frame(&scroller, props, 10, 3);

    assert_eq!(lines, vec!["one", "two", ""]);
}

#[test]
fn test_multiline_child_reads_top_to_bottom() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new().children([Element::text("a1\na2"), Element::text("b")]);

    let lines = frame(&scroller, props, 4, 3);

    assert_eq!(lines, vec!["b", "a1", "a2"]);
}

#[test]
fn test_empty_slots_take_no_space() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new().slots([Some(Element::text("x")), None, Some(Element::text("y"))]);

    let lines = frame(&scroller, props, 3, 2);

    assert_eq!(lines, vec!["y", "x"]);
}

#[test]
fn test_offset_reveals_later_items_at_top() {
    let scroller = InvertibleScroller::default();
    let props = || InvertibleProps::new().children(items(6));

    let lines = frame(&scroller, props(), 8, 3);
    assert_eq!(lines, vec!["item2", "item1", "item0"]);

    scroller.scroll_to(0, 2).unwrap();
    let lines = frame(&scroller, props(), 8, 3);
    assert_eq!(lines, vec!["item4", "item3", "item2"]);

    scroller.scroll_to_end(false).unwrap();
    let lines = frame(&scroller, props(), 8, 3);
    assert_eq!(lines, vec!["item5", "item4", "item3"]);
}

#[test]
fn test_wheel_up_shows_content_above() {
    let mut scroller = InvertibleScroller::new(PlatformCapabilities::default());
    let props = || InvertibleProps::new().children(items(6));
    frame(&scroller, props(), 8, 3);
    scroller.on_mount().unwrap();

    let node = scroller.get_scrollable_node().unwrap();
    let mut event = WheelEvent::vertical(-1);
    node.dispatch_wheel(&mut event);

    let lines = frame(&scroller, props(), 8, 3);
    assert_eq!(lines, vec!["item3", "item2", "item1"]);
}

// ============================================================================
// Horizontal
// ============================================================================

#[test]
fn test_horizontal_inverted_grows_from_right() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new()
        .horizontal(true)
        .children([Element::text("ab"), Element::text("cd")]);

    let lines = frame(&scroller, props, 6, 1);

    assert_eq!(lines, vec!["  cdab"]);
    assert!(scroller.default_view().node().is_horizontal());
}

#[test]
fn test_horizontal_not_inverted() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new()
        .inverted(false)
        .horizontal(true)
        .children([Element::text("ab"), Element::text("cd")]);

    let lines = frame(&scroller, props, 6, 1);

    assert_eq!(lines, vec!["abcd"]);
}

#[test]
fn test_layout_reports_scroll_metrics() {
    let scroller = InvertibleScroller::default();
    let rendered = scroller.render(InvertibleProps::new().children(items(7)));
    let mut buf = Buffer::new(9, 4);

    let layout = render_to_buffer(&rendered.element, &mut buf);

    let id = scroller.default_view().node().id_string();
    assert_eq!(layout.content_size(&id), Some((9, 7)));
    assert_eq!(layout.viewport_size(&id), Some((9, 4)));

    scroller.default_view().apply_layout(&layout);
    let metrics = scroller.default_view().node().metrics().unwrap();
    assert_eq!(metrics.max_offset(), (0, 3));
}

#[test]
fn test_fixed_height_child_keeps_its_box() {
    let scroller = InvertibleScroller::default();
    let props = InvertibleProps::new().children([
        Element::text("a").height(Size::Fixed(2)),
        Element::text("b"),
    ]);

    let lines = frame(&scroller, props, 3, 3);

    assert_eq!(lines, vec!["b", "a", ""]);
}
