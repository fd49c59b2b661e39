use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use invertible_scroll::{
    InvertibleProps, InvertibleScroller, Platform, PlatformCapabilities, ScrollMetrics, ScrollNode,
    ScrollView, WheelEvent,
};

const FIREFOX_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";
const CHROME_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// Mount a scroller on its default view with room to scroll both ways.
fn mounted(platform: PlatformCapabilities) -> (InvertibleScroller, ScrollNode) {
    let mut scroller = InvertibleScroller::new(platform);
    scroller.render(InvertibleProps::new()).commit();
    scroller.on_mount().unwrap();

    let node = scroller.get_scrollable_node().unwrap();
    node.set_metrics(ScrollMetrics {
        content: (10, 500),
        viewport: (10, 10),
    });
    node.scroll_to(0, 200);
    (scroller, node)
}

fn mouse(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 4,
        row: 2,
        modifiers: KeyModifiers::NONE,
    }
}

// ============================================================================
// Inverted Wheel Handling
// ============================================================================

#[test]
fn test_wheel_delta_is_subtracted() {
    let (scroller, node) = mounted(PlatformCapabilities::resolve(Platform::Web, Some(CHROME_UA)));
    assert!(scroller.is_wheel_attached());

    let mut event = WheelEvent::vertical(3);
    assert!(node.dispatch_wheel(&mut event));

    assert!(event.default_prevented());
    assert_eq!(node.offset_y(), 197);

    let mut event = WheelEvent::vertical(-5);
    node.dispatch_wheel(&mut event);
    assert_eq!(node.offset_y(), 202);
}

#[test]
fn test_firefox_delta_is_scaled() {
    let (_scroller, node) = mounted(PlatformCapabilities::resolve(Platform::Web, Some(FIREFOX_UA)));

    let mut event = WheelEvent::vertical(2);
    node.dispatch_wheel(&mut event);

    assert!(event.default_prevented());
    assert_eq!(node.offset_y(), 200 - 60);
}

#[test]
fn test_terminal_uses_raw_delta() {
    let (_scroller, node) = mounted(PlatformCapabilities::default());

    let mut event = WheelEvent::vertical(1);
    node.dispatch_wheel(&mut event);

    assert_eq!(node.offset_y(), 199);
}

#[test]
fn test_horizontal_delta_is_ignored_by_handler() {
    let (_scroller, node) = mounted(PlatformCapabilities::default());
    node.set_metrics(ScrollMetrics {
        content: (100, 500),
        viewport: (10, 10),
    });

    let mut event = WheelEvent::new(4, 0);
    node.dispatch_wheel(&mut event);

    assert!(event.default_prevented());
    assert_eq!(node.offset(), (0, 200));
}

// ============================================================================
// No Handler
// ============================================================================

#[test]
fn test_native_platform_keeps_default_scroll() {
    let (scroller, node) = mounted(PlatformCapabilities::without_wheel());
    assert!(!scroller.is_wheel_attached());
    assert!(!node.has_wheel_listener());

    let mut event = WheelEvent::vertical(3);
    node.dispatch_wheel(&mut event);

    assert!(!event.default_prevented());
    assert_eq!(node.offset_y(), 203);
}

#[test]
fn test_unmount_detaches_handler() {
    let (mut scroller, node) = mounted(PlatformCapabilities::default());
    assert!(node.has_wheel_listener());

    scroller.on_unmount();

    assert!(!scroller.is_wheel_attached());
    assert!(!node.has_wheel_listener());
    let mut event = WheelEvent::vertical(3);
    node.dispatch_wheel(&mut event);
    assert!(!event.default_prevented());
    assert_eq!(node.offset_y(), 203);
}

#[test]
fn test_mounting_twice_keeps_one_handler() {
    let (mut scroller, node) = mounted(PlatformCapabilities::default());

    scroller.on_mount().unwrap();

    let mut event = WheelEvent::vertical(2);
    node.dispatch_wheel(&mut event);
    assert_eq!(node.offset_y(), 198);
}

#[test]
fn test_handler_follows_remounted_instance() {
    let (scroller, old_node) = mounted(PlatformCapabilities::default());
    let replacement = ScrollView::new();
    let new_node = replacement.node().clone();

    let rendered = scroller.render(
        InvertibleProps::new().render_scroll_component(replacement.factory()),
    );
    rendered.commit();

    assert!(scroller.is_wheel_attached());
    assert!(new_node.has_wheel_listener());
    assert!(!old_node.has_wheel_listener());

    new_node.set_metrics(ScrollMetrics {
        content: (10, 50),
        viewport: (10, 10),
    });
    new_node.scroll_to(0, 20);
    let mut event = WheelEvent::vertical(4);
    new_node.dispatch_wheel(&mut event);
    assert!(event.default_prevented());
    assert_eq!(new_node.offset_y(), 16);

    rendered.release();
    assert!(!scroller.is_wheel_attached());
    assert!(!new_node.has_wheel_listener());
}

#[test]
fn test_commit_before_mount_installs_nothing() {
    let scroller = InvertibleScroller::default();
    scroller.render(InvertibleProps::new()).commit();

    assert!(scroller.is_mounted());
    assert!(!scroller.is_wheel_attached());
    assert!(!scroller.default_view().node().has_wheel_listener());
}

#[test]
fn test_handler_ignores_inverted_flag() {
    let mut scroller = InvertibleScroller::default();
    scroller
        .render(InvertibleProps::new().inverted(false))
        .commit();
    scroller.on_mount().unwrap();

    let node = scroller.get_scrollable_node().unwrap();
    node.set_metrics(ScrollMetrics {
        content: (10, 500),
        viewport: (10, 10),
    });
    node.scroll_to(0, 200);
    let mut event = WheelEvent::vertical(3);
    node.dispatch_wheel(&mut event);

    assert!(event.default_prevented());
    assert_eq!(node.offset_y(), 197);
}

// ============================================================================
// Crossterm Conversion
// ============================================================================

#[test]
fn test_crossterm_wheel_conversion() {
    let up = WheelEvent::from_crossterm(&mouse(MouseEventKind::ScrollUp)).unwrap();
    assert_eq!((up.delta_x, up.delta_y), (0, -1));
    assert_eq!((up.x, up.y), (4, 2));

    let down = WheelEvent::from_crossterm(&mouse(MouseEventKind::ScrollDown)).unwrap();
    assert_eq!(down.delta_y, 1);

    let right = WheelEvent::from_crossterm(&mouse(MouseEventKind::ScrollRight)).unwrap();
    assert_eq!((right.delta_x, right.delta_y), (1, 0));

    assert!(WheelEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left))).is_none());
}
