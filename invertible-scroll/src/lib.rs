pub mod buffer;
pub mod element;
pub mod error;
pub mod event;
pub mod layout;
pub mod logging;
pub mod node;
pub mod platform;
pub mod render;
pub mod scroll;
pub mod scroller;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{Child, Content, Element};
pub use error::ScrollError;
pub use event::WheelEvent;
pub use layout::{LayoutResult, ScrollMetrics};
pub use node::{ScrollNode, WheelListener, WheelSubscription};
pub use platform::{Platform, PlatformCapabilities};
pub use render::render_to_buffer;
pub use scroll::{
    NativeProps, RefCallback, ScrollComponentFactory, ScrollControl, ScrollElement,
    ScrollResponder, ScrollView, ScrollViewProps,
};
pub use scroller::{invert_children, InvertibleProps, InvertibleScroller};
pub use types::*;
