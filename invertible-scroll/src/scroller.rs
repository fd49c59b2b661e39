//! A scroll container whose visual direction can be flipped.
//!
//! The surface is mirrored along its scroll axis and every child is wrapped
//! in a view carrying the same mirror, so children read normally while the
//! list grows from the bottom (or from the right). Scroll offsets keep
//! their meaning: offset zero still shows the first children, which now sit
//! at the far edge.

use std::sync::{Arc, RwLock};

use crate::element::{Child, Element};
use crate::error::ScrollError;
use crate::event::WheelEvent;
use crate::node::{ScrollNode, WheelListener, WheelSubscription};
use crate::platform::PlatformCapabilities;
use crate::scroll::{
    NativeProps, ScrollComponentFactory, ScrollControl, ScrollElement, ScrollResponder,
    ScrollView, ScrollViewProps,
};
use crate::types::{Inversion, Style};

/// Configuration for one render of an [`InvertibleScroller`].
#[derive(Clone)]
pub struct InvertibleProps {
    /// Flip the visual direction. Defaults to `true`.
    pub inverted: bool,
    /// Builds the underlying scrollable. `None` renders the scroller's own
    /// [`ScrollView`].
    pub render_scroll_component: Option<ScrollComponentFactory>,
    /// Everything else is passed through to the scrollable.
    pub scroll: ScrollViewProps,
}

impl Default for InvertibleProps {
    fn default() -> Self {
        Self {
            inverted: true,
            render_scroll_component: None,
            scroll: ScrollViewProps::default(),
        }
    }
}

impl std::fmt::Debug for InvertibleProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertibleProps")
            .field("inverted", &self.inverted)
            .field(
                "render_scroll_component",
                &self.render_scroll_component.as_ref().map(|_| "Fn(..)"),
            )
            .field("scroll", &self.scroll)
            .finish()
    }
}

impl InvertibleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn render_scroll_component(mut self, factory: ScrollComponentFactory) -> Self {
        self.render_scroll_component = Some(factory);
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.scroll.horizontal = horizontal;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.scroll.style.push(style);
        self
    }

    pub fn content_container_style(mut self, style: Style) -> Self {
        self.scroll.content_container_style.push(style);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.scroll.children.push(Some(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.scroll.children.extend(children.into_iter().map(Some));
        self
    }

    /// Append child slots as-is, keeping empty ones.
    pub fn slots(mut self, slots: impl IntoIterator<Item = Child>) -> Self {
        self.scroll.children.extend(slots);
        self
    }

    pub fn native(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scroll.native.insert(key.into(), value.into());
        self
    }
}

/// Wrap each present child in a view carrying `inversion`. Empty slots stay
/// empty and keep their position.
pub fn invert_children(children: Vec<Child>, inversion: Inversion) -> Vec<Child> {
    children
        .into_iter()
        .map(|child| child.map(|child| Element::view().style(inversion.style()).child(child)))
        .collect()
}

/// The invertible scroll component.
///
/// Holds the handle of the currently mounted scrollable and forwards
/// imperative calls to it. Calls made before the rendered element is
/// committed, or after [`InvertibleScroller::on_unmount`], fail with
/// [`ScrollError::NotMounted`].
pub struct InvertibleScroller {
    platform: PlatformCapabilities,
    default_view: ScrollView,
    state: Arc<RwLock<MountState>>,
}

/// Shared between the scroller and the refs of the elements it rendered.
#[derive(Default)]
struct MountState {
    instance: Option<Arc<dyn ScrollControl>>,
    wheel: Option<WheelSubscription>,
    /// Set between `on_mount` and `on_unmount`.
    mounted: bool,
}

impl MountState {
    /// Keep the wheel handler on the current instance's node. A commit that
    /// swaps the instance moves the handler along with it.
    fn sync_wheel(&mut self, platform: PlatformCapabilities) {
        let node = match &self.instance {
            Some(instance) if self.mounted && platform.supports_wheel_events => {
                instance.get_scrollable_node()
            }
            _ => {
                self.wheel = None;
                return;
            }
        };
        if self.wheel.as_ref().is_some_and(|wheel| *wheel.node() == node) {
            return;
        }
        self.wheel = Some(node.on_wheel(inverted_wheel_listener(platform)));
    }
}

/// Suppresses the native scroll and applies the scaled delta with its sign
/// flipped.
fn inverted_wheel_listener(platform: PlatformCapabilities) -> WheelListener {
    Arc::new(move |event: &mut WheelEvent, node: &ScrollNode| {
        event.prevent_default();
        let delta = platform.scale_delta(event.delta_y);
        log::trace!("[scroller] wheel delta_y={} applied={}", event.delta_y, -delta);
        node.scroll_by(0, -delta);
    })
}

fn same_instance(a: &Arc<dyn ScrollControl>, b: &Arc<dyn ScrollControl>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl std::fmt::Debug for InvertibleScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertibleScroller")
            .field("platform", &self.platform)
            .field("mounted", &self.is_mounted())
            .field("wheel_attached", &self.is_wheel_attached())
            .finish()
    }
}

impl Default for InvertibleScroller {
    fn default() -> Self {
        Self::new(PlatformCapabilities::default())
    }
}

impl InvertibleScroller {
    pub fn new(platform: PlatformCapabilities) -> Self {
        Self {
            platform,
            default_view: ScrollView::new(),
            state: Arc::new(RwLock::new(MountState::default())),
        }
    }

    pub fn platform(&self) -> PlatformCapabilities {
        self.platform
    }

    /// The scrollable rendered when props carry no factory.
    pub fn default_view(&self) -> &ScrollView {
        &self.default_view
    }

    /// True while a committed instance is recorded.
    pub fn is_mounted(&self) -> bool {
        self.state
            .read()
            .map(|guard| guard.instance.is_some())
            .unwrap_or(false)
    }

    pub fn is_wheel_attached(&self) -> bool {
        self.state
            .read()
            .map(|guard| guard.wheel.is_some())
            .unwrap_or(false)
    }

    /// Produce the scrollable element for `props`.
    ///
    /// When inverted, the mirror style goes first in the surface's style
    /// list so caller styles compose on top, and every child is wrapped in
    /// a mirrored view. The returned element carries a ref that records
    /// the instance once the host commits it.
    pub fn render(&self, props: InvertibleProps) -> ScrollElement {
        let InvertibleProps {
            inverted,
            render_scroll_component,
            mut scroll,
        } = props;

        log::debug!(
            "[scroller] render inverted={} horizontal={} children={}",
            inverted,
            scroll.horizontal,
            scroll.children.len()
        );

        if inverted {
            let inversion = Inversion::for_axis(scroll.horizontal);
            scroll.style.insert(0, inversion.style());
            scroll.children = invert_children(std::mem::take(&mut scroll.children), inversion);
        }

        let element = match render_scroll_component {
            Some(factory) => factory(scroll),
            None => self.default_view.render(scroll),
        };

        // Release only clears the instance this element mounted.
        let own = Arc::clone(element.instance());
        let state = Arc::clone(&self.state);
        let platform = self.platform;
        element.with_ref(Arc::new(move |instance: Option<Arc<dyn ScrollControl>>| {
            let Ok(mut guard) = state.write() else {
                return;
            };
            match instance {
                Some(instance) => guard.instance = Some(instance),
                None => {
                    if !guard
                        .instance
                        .as_ref()
                        .is_some_and(|current| same_instance(current, &own))
                    {
                        return;
                    }
                    guard.instance = None;
                }
            }
            guard.sync_wheel(platform);
        }))
    }

    /// Lifecycle hook run after the rendered element is committed.
    ///
    /// On wheel-driven platforms this installs a handler on the scrollable
    /// node that suppresses the native scroll and applies the wheel delta
    /// with its sign flipped, so scrolling up still reveals what is above.
    /// While mounted, the handler follows the instance: a later commit of a
    /// different scrollable moves it to that scrollable's node.
    ///
    /// The handler is installed whether or not the last render was
    /// inverted, so a non-inverted list on a wheel-driven platform scrolls
    /// against the wheel. Use [`PlatformCapabilities::without_wheel`] for
    /// lists that are never inverted.
    pub fn on_mount(&mut self) -> Result<(), ScrollError> {
        let mut guard = self.state.write().map_err(|_| ScrollError::NotMounted)?;
        if guard.instance.is_none() {
            return Err(ScrollError::NotMounted);
        }
        guard.mounted = true;
        guard.sync_wheel(self.platform);
        log::debug!("[scroller] mounted wheel={}", guard.wheel.is_some());
        Ok(())
    }

    /// Lifecycle hook run before the element is torn down: detaches the
    /// wheel handler and forgets the instance.
    pub fn on_unmount(&mut self) {
        if let Ok(mut guard) = self.state.write() {
            guard.mounted = false;
            guard.wheel = None;
            guard.instance = None;
        }
        log::debug!("[scroller] unmounted");
    }

    fn instance(&self) -> Result<Arc<dyn ScrollControl>, ScrollError> {
        self.state
            .read()
            .ok()
            .and_then(|guard| guard.instance.clone())
            .ok_or(ScrollError::NotMounted)
    }

    // -------------------------------------------------------------------------
    // Delegation
    // -------------------------------------------------------------------------

    pub fn get_scroll_responder(&self) -> Result<ScrollResponder, ScrollError> {
        Ok(self.instance()?.get_scroll_responder())
    }

    pub fn set_native_props(&self, props: NativeProps) -> Result<(), ScrollError> {
        self.instance()?.set_native_props(props);
        Ok(())
    }

    pub fn get_scrollable_node(&self) -> Result<ScrollNode, ScrollError> {
        Ok(self.instance()?.get_scrollable_node())
    }

    pub fn get_inner_view_node(&self) -> Result<String, ScrollError> {
        Ok(self.instance()?.get_inner_view_node())
    }

    pub fn scroll_to(&self, x: u16, y: u16) -> Result<(), ScrollError> {
        self.instance()?.scroll_to(x, y);
        Ok(())
    }

    pub fn scroll_without_animation_to(&self, x: u16, y: u16) -> Result<(), ScrollError> {
        self.instance()?.scroll_without_animation_to(x, y);
        Ok(())
    }

    pub fn scroll_to_end(&self, animated: bool) -> Result<(), ScrollError> {
        self.instance()?.scroll_to_end(animated);
        Ok(())
    }
}
