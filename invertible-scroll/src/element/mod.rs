mod content;
mod node;

pub use content::{Child, Content};
pub use node::Element;
