use super::{Style, Transform};

/// The mirror applied to an inverted scroll surface and to each of its
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inversion {
    /// Flip the Y axis: content grows from the bottom up.
    Vertical,
    /// Flip the X axis: content grows from the right.
    Horizontal,
}

impl Inversion {
    pub fn for_axis(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// A flex-fill style carrying a single axis mirror.
    pub fn style(self) -> Style {
        let mirror = match self {
            Self::Vertical => Transform::ScaleY(-1.0),
            Self::Horizontal => Transform::ScaleX(-1.0),
        };
        Style::new().flex(1).transform(mirror)
    }
}
