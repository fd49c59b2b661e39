//! The host scroll surface behind a scrollable primitive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::event::WheelEvent;
use crate::layout::ScrollMetrics;

/// A wheel handler installed on a node. It receives the event and the node
/// it was dispatched to.
pub type WheelListener = Arc<dyn Fn(&mut WheelEvent, &ScrollNode) + Send + Sync>;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a scroll node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__scroll_{}", self.0)
    }
}

#[derive(Default)]
struct NodeInner {
    offset_x: u16,
    offset_y: u16,
    /// Content and viewport sizes - updated after each render.
    metrics: Option<ScrollMetrics>,
    horizontal: bool,
    wheel: Option<(u64, WheelListener)>,
}

impl std::fmt::Debug for NodeInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeInner")
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("metrics", &self.metrics)
            .field("horizontal", &self.horizontal)
            .field("wheel", &self.wheel.as_ref().map(|(token, _)| token))
            .finish()
    }
}

impl NodeInner {
    fn max_offset(&self) -> (u16, u16) {
        self.metrics
            .map(|m| m.max_offset())
            .unwrap_or((u16::MAX, u16::MAX))
    }

    fn clamp(&mut self) {
        let (max_x, max_y) = self.max_offset();
        self.offset_x = self.offset_x.min(max_x);
        self.offset_y = self.offset_y.min(max_y);
    }
}

/// Shared handle to a scroll surface.
///
/// Clones refer to the same surface. Offsets are clamped to
/// `[0, content - viewport]` once the node has been measured; before that
/// only the lower bound applies.
#[derive(Debug, Clone)]
pub struct ScrollNode {
    id: NodeId,
    inner: Arc<RwLock<NodeInner>>,
}

impl PartialEq for ScrollNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ScrollNode {}

impl Default for ScrollNode {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollNode {
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            inner: Arc::new(RwLock::new(NodeInner::default())),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the ID as a string (the element id of the rendered surface).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read state
    // -------------------------------------------------------------------------

    /// Get the current scroll offset (x, y).
    pub fn offset(&self) -> (u16, u16) {
        self.inner
            .read()
            .map(|guard| (guard.offset_x, guard.offset_y))
            .unwrap_or((0, 0))
    }

    pub fn offset_y(&self) -> u16 {
        self.offset().1
    }

    pub fn metrics(&self) -> Option<ScrollMetrics> {
        self.inner.read().ok().and_then(|guard| guard.metrics)
    }

    pub fn is_horizontal(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.horizontal)
            .unwrap_or(false)
    }

    pub fn has_wheel_listener(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.wheel.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Update state
    // -------------------------------------------------------------------------

    pub fn set_horizontal(&self, horizontal: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.horizontal = horizontal;
        }
    }

    /// Record measured sizes and pull the offset back into range.
    pub fn set_metrics(&self, metrics: ScrollMetrics) {
        if let Ok(mut guard) = self.inner.write() {
            guard.metrics = Some(metrics);
            guard.clamp();
        }
    }

    /// Jump to an absolute offset. Returns true if the offset changed.
    pub fn scroll_to(&self, x: u16, y: u16) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let before = (guard.offset_x, guard.offset_y);
        guard.offset_x = x;
        guard.offset_y = y;
        guard.clamp();
        (guard.offset_x, guard.offset_y) != before
    }

    /// Move by a relative amount. Returns true if the offset changed.
    pub fn scroll_by(&self, dx: i32, dy: i32) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let (max_x, max_y) = guard.max_offset();
        let before = (guard.offset_x, guard.offset_y);
        guard.offset_x = (i32::from(guard.offset_x) + dx).clamp(0, i32::from(max_x)) as u16;
        guard.offset_y = (i32::from(guard.offset_y) + dy).clamp(0, i32::from(max_y)) as u16;
        (guard.offset_x, guard.offset_y) != before
    }

    /// Scroll to the end of the content along the node's axis.
    ///
    /// Before the first measurement the end is unknown; the offset is parked
    /// at the maximum and clamped when metrics arrive.
    pub fn scroll_to_end(&self) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let before = (guard.offset_x, guard.offset_y);
        let (max_x, max_y) = guard.max_offset();
        if guard.horizontal {
            guard.offset_x = max_x;
        } else {
            guard.offset_y = max_y;
        }
        (guard.offset_x, guard.offset_y) != before
    }

    // -------------------------------------------------------------------------
    // Wheel input
    // -------------------------------------------------------------------------

    /// Install a wheel listener, replacing any previous one.
    ///
    /// The listener stays installed until the returned subscription is
    /// dropped.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn on_wheel(&self, listener: WheelListener) -> WheelSubscription {
        let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut guard) = self.inner.write() {
            guard.wheel = Some((token, listener));
        }
        log::debug!("[scroll] {} wheel listener {} installed", self.id, token);
        WheelSubscription {
            node: self.clone(),
            token,
        }
    }

    fn remove_wheel_listener(&self, token: u64) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.wheel.as_ref().is_some_and(|(current, _)| *current == token) {
                guard.wheel = None;
                log::debug!("[scroll] {} wheel listener {} removed", self.id, token);
            }
        }
    }

    /// Deliver a wheel event: run the listener, then apply the native
    /// default (`offset += delta`) unless the listener prevented it.
    /// Returns true if the offset changed.
    pub fn dispatch_wheel(&self, event: &mut WheelEvent) -> bool {
        // Clone out of the lock so the listener can scroll this node.
        let listener = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.wheel.as_ref().map(|(_, l)| Arc::clone(l)));

        let before = self.offset();
        if let Some(listener) = listener {
            listener(&mut *event, self);
        }
        if !event.default_prevented() {
            self.scroll_by(i32::from(event.delta_x), i32::from(event.delta_y));
        }
        self.offset() != before
    }
}

/// Keeps a wheel listener installed on a node. Dropping it detaches the
/// listener, unless another one has replaced it in the meantime.
#[derive(Debug)]
pub struct WheelSubscription {
    node: ScrollNode,
    token: u64,
}

impl WheelSubscription {
    /// The node the listener was installed on.
    pub fn node(&self) -> &ScrollNode {
        &self.node
    }
}

impl Drop for WheelSubscription {
    fn drop(&mut self) {
        self.node.remove_wheel_listener(self.token);
    }
}
