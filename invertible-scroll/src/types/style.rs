/// A rendering-time transform. On a cell grid only the sign of the factor
/// matters: a negative factor mirrors that axis, the magnitude is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    ScaleX(f32),
    ScaleY(f32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub flex: Option<u16>,
    pub transform: Vec<Transform>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flex(mut self, flex: u16) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }

    /// Whether the composed transforms mirror the horizontal axis.
    pub fn mirrors_x(&self) -> bool {
        self.transform
            .iter()
            .filter(|t| matches!(t, Transform::ScaleX(f) if *f < 0.0))
            .count()
            % 2
            == 1
    }

    /// Whether the composed transforms mirror the vertical axis.
    pub fn mirrors_y(&self) -> bool {
        self.transform
            .iter()
            .filter(|t| matches!(t, Transform::ScaleY(f) if *f < 0.0))
            .count()
            % 2
            == 1
    }
}

/// Flatten a style list into a single style.
///
/// Entries apply left to right: a later `flex` replaces an earlier one and
/// transforms accumulate in order.
pub fn resolve_styles(styles: &[Style]) -> Style {
    styles.iter().fold(Style::default(), |mut acc, style| {
        if style.flex.is_some() {
            acc.flex = style.flex;
        }
        acc.transform.extend(style.transform.iter().copied());
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_flex_wins() {
        let resolved = resolve_styles(&[Style::new().flex(1), Style::new().flex(3)]);
        assert_eq!(resolved.flex, Some(3));
    }

    #[test]
    fn two_mirrors_cancel() {
        let resolved = resolve_styles(&[
            Style::new().transform(Transform::ScaleY(-1.0)),
            Style::new().transform(Transform::ScaleY(-1.0)),
        ]);
        assert!(!resolved.mirrors_y());
        assert!(!resolved.mirrors_x());
    }

    #[test]
    fn positive_scale_does_not_mirror() {
        let style = Style::new()
            .transform(Transform::ScaleX(2.0))
            .transform(Transform::ScaleY(-1.0));
        assert!(!style.mirrors_x());
        assert!(style.mirrors_y());
    }
}
