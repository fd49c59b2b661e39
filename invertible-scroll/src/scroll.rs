//! The scrollable primitive and the capability interface the scroller
//! forwards to.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::element::{Child, Element};
use crate::layout::LayoutResult;
use crate::node::ScrollNode;
use crate::types::{Direction, Overflow, Size, Style};

/// Free-form properties pushed straight onto the rendered surface,
/// bypassing a re-render of the owning component.
pub type NativeProps = HashMap<String, String>;

/// Called when a scrollable instance is attached (`Some`) or detached (`None`).
pub type RefCallback = Arc<dyn Fn(Option<Arc<dyn ScrollControl>>) + Send + Sync>;

/// Builds the underlying scrollable element from its props.
pub type ScrollComponentFactory = Arc<dyn Fn(ScrollViewProps) -> ScrollElement + Send + Sync>;

/// Low-level scroll handle obtained from a scrollable instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollResponder {
    node: ScrollNode,
    inner_view: String,
}

impl ScrollResponder {
    pub fn new(node: ScrollNode, inner_view: impl Into<String>) -> Self {
        Self {
            node,
            inner_view: inner_view.into(),
        }
    }

    pub fn scroll_to(&self, x: u16, y: u16) {
        log::debug!("[scroll] {} scroll_to ({x}, {y})", self.node.id());
        self.node.scroll_to(x, y);
    }

    /// Cells have no intermediate positions, so this is the same jump as
    /// [`ScrollResponder::scroll_to`].
    pub fn scroll_without_animation_to(&self, x: u16, y: u16) {
        self.node.scroll_to(x, y);
    }

    pub fn scroll_to_end(&self, animated: bool) {
        log::debug!("[scroll] {} scroll_to_end animated={animated}", self.node.id());
        self.node.scroll_to_end();
    }

    pub fn scrollable_node(&self) -> ScrollNode {
        self.node.clone()
    }

    /// ID of the content container inside the scroll surface.
    pub fn inner_view_node(&self) -> String {
        self.inner_view.clone()
    }
}

/// Imperative control over a mounted scrollable.
///
/// Implementors provide the responder and native-prop plumbing; the scroll
/// methods route through the responder.
pub trait ScrollControl: Send + Sync {
    fn get_scroll_responder(&self) -> ScrollResponder;

    fn set_native_props(&self, props: NativeProps);

    fn get_scrollable_node(&self) -> ScrollNode {
        self.get_scroll_responder().scrollable_node()
    }

    fn get_inner_view_node(&self) -> String {
        self.get_scroll_responder().inner_view_node()
    }

    fn scroll_to(&self, x: u16, y: u16) {
        self.get_scroll_responder().scroll_to(x, y);
    }

    fn scroll_without_animation_to(&self, x: u16, y: u16) {
        self.get_scroll_responder().scroll_without_animation_to(x, y);
    }

    fn scroll_to_end(&self, animated: bool) {
        self.get_scroll_responder().scroll_to_end(animated);
    }
}

/// A rendered scrollable: the element description, the instance it mounts
/// and the ref callbacks to notify when it is committed.
pub struct ScrollElement {
    pub element: Element,
    instance: Arc<dyn ScrollControl>,
    refs: Vec<RefCallback>,
}

impl std::fmt::Debug for ScrollElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollElement")
            .field("element", &self.element)
            .field("refs", &self.refs.len())
            .finish()
    }
}

impl ScrollElement {
    pub fn new(element: Element, instance: Arc<dyn ScrollControl>) -> Self {
        Self {
            element,
            instance,
            refs: Vec::new(),
        }
    }

    /// Add a ref callback. Refs already on the element are kept and fire too.
    pub fn with_ref(mut self, callback: RefCallback) -> Self {
        self.refs.push(callback);
        self
    }

    pub fn instance(&self) -> &Arc<dyn ScrollControl> {
        &self.instance
    }

    /// Host commit: hand the instance to every ref.
    pub fn commit(&self) {
        for callback in &self.refs {
            callback(Some(Arc::clone(&self.instance)));
        }
    }

    /// Host teardown: clear every ref.
    pub fn release(&self) {
        for callback in &self.refs {
            callback(None);
        }
    }
}

/// Options of the scrollable primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollViewProps {
    pub horizontal: bool,
    /// Style list of the scroll surface.
    pub style: Vec<Style>,
    /// Style list of the content container inside the surface.
    pub content_container_style: Vec<Style>,
    pub children: Vec<Child>,
    pub native: NativeProps,
}

impl ScrollViewProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style.push(style);
        self
    }

    pub fn content_container_style(mut self, style: Style) -> Self {
        self.content_container_style.push(style);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Some(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Some));
        self
    }

    /// Append child slots as-is, keeping empty ones.
    pub fn slots(mut self, slots: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(slots);
        self
    }

    pub fn native(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.native.insert(key.into(), value.into());
        self
    }
}

/// The default scrollable primitive.
///
/// Clones share the same surface and native props, so a `ScrollView` can be
/// kept across renders while each render produces a fresh description.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    node: ScrollNode,
    native_props: Arc<RwLock<NativeProps>>,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self) -> &ScrollNode {
        &self.node
    }

    /// ID of the content container element.
    pub fn inner_view_id(&self) -> String {
        format!("{}_content", self.node.id())
    }

    pub fn native_props(&self) -> NativeProps {
        self.native_props
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Describe the surface for the current offset.
    ///
    /// Native props set imperatively override same-named props passed here.
    pub fn render(&self, props: ScrollViewProps) -> ScrollElement {
        let ScrollViewProps {
            horizontal,
            style,
            content_container_style,
            children,
            mut native,
        } = props;

        self.node.set_horizontal(horizontal);
        native.extend(self.native_props());

        let direction = if horizontal {
            Direction::Row
        } else {
            Direction::Column
        };
        let (offset_x, offset_y) = self.node.offset();

        let content = Element::view()
            .id(self.inner_view_id())
            .direction(direction)
            .styles(content_container_style)
            .slots(children);

        let mut element = Element::view()
            .id(self.node.id_string())
            .direction(direction)
            .width(Size::Fill)
            .height(Size::Fill)
            .overflow(Overflow::Scroll)
            .scroll_offset(offset_x, offset_y)
            .styles(style)
            .child(content);
        element.data.extend(native);

        ScrollElement::new(element, Arc::new(self.clone()))
    }

    /// Feed measured sizes from a render pass back to the surface.
    pub fn apply_layout(&self, layout: &LayoutResult) {
        if let Some(metrics) = layout.get(&self.node.id_string()) {
            self.node.set_metrics(*metrics);
        }
    }

    /// A factory that renders through this view.
    pub fn factory(&self) -> ScrollComponentFactory {
        let view = self.clone();
        Arc::new(move |props: ScrollViewProps| view.render(props))
    }
}

impl ScrollControl for ScrollView {
    fn get_scroll_responder(&self) -> ScrollResponder {
        ScrollResponder::new(self.node.clone(), self.inner_view_id())
    }

    fn set_native_props(&self, props: NativeProps) {
        if let Ok(mut guard) = self.native_props.write() {
            guard.extend(props);
        }
    }
}
