//! Platform capabilities, resolved once by the embedding application.

/// Wheel deltas reported by Firefox are on a line scale rather than a pixel
/// scale.
pub const FIREFOX_WHEEL_DELTA_SCALE: f32 = 30.0;

/// Where the scroller is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// A terminal with mouse capture: scrolling arrives as wheel events.
    #[default]
    Terminal,
    /// A browser: scrolling arrives as wheel events.
    Web,
    /// A touch platform whose native scroller handles input itself.
    Native,
}

impl Platform {
    pub fn drives_scroll_with_wheel(self) -> bool {
        matches!(self, Self::Terminal | Self::Web)
    }
}

/// What the scroller needs to know about its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformCapabilities {
    /// Install the inverted wheel handler on mount.
    pub supports_wheel_events: bool,
    /// Factor applied to `delta_y` before it is subtracted from the offset.
    pub wheel_delta_scale: f32,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::resolve(Platform::default(), None)
    }
}

impl PlatformCapabilities {
    /// Resolve capabilities from the platform and, when there is one, the
    /// user-agent string.
    pub fn resolve(platform: Platform, user_agent: Option<&str>) -> Self {
        let wheel_delta_scale = match user_agent {
            Some(agent) if agent.to_lowercase().contains("firefox") => FIREFOX_WHEEL_DELTA_SCALE,
            _ => 1.0,
        };
        Self {
            supports_wheel_events: platform.drives_scroll_with_wheel(),
            wheel_delta_scale,
        }
    }

    /// Capabilities for a platform that never sees wheel events.
    pub fn without_wheel() -> Self {
        Self::resolve(Platform::Native, None)
    }

    /// Scale a raw wheel delta into offset units.
    pub fn scale_delta(&self, delta: i16) -> i32 {
        (f32::from(delta) * self.wheel_delta_scale).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firefox_agent_scales_deltas() {
        let caps = PlatformCapabilities::resolve(
            Platform::Web,
            Some("Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"),
        );
        assert!(caps.supports_wheel_events);
        assert_eq!(caps.scale_delta(-3), -90);
    }

    #[test]
    fn other_agents_use_raw_deltas() {
        let caps = PlatformCapabilities::resolve(Platform::Web, Some("Mozilla/5.0 Chrome/126.0"));
        assert_eq!(caps.scale_delta(7), 7);
    }

    #[test]
    fn native_platform_has_no_wheel_handler() {
        assert!(!PlatformCapabilities::without_wheel().supports_wheel_events);
        assert!(PlatformCapabilities::default().supports_wheel_events);
    }
}
