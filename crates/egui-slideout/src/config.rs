use crate::errors::SidebarError;
use serde::{Deserialize, Serialize};

/// Edge of the screen the menu is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuLocation {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    menu_width: f32,
    menu_location: MenuLocation,
    fling_velocity: f32,
    fling_fraction: f32,
    gesture_active_area: f32,
    has_shadow: bool,
    has_dark_overlay: bool,
    dark_overlay_alpha: f32,
    reopen_on_rotate: bool,
    disabled: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            menu_width: Self::DEFAULT_MENU_WIDTH,
            menu_location: MenuLocation::Right,
            fling_velocity: Self::DEFAULT_FLING_VELOCITY,
            fling_fraction: Self::DEFAULT_FLING_FRACTION,
            gesture_active_area: Self::DEFAULT_GESTURE_ACTIVE_AREA,
            has_shadow: true,
            has_dark_overlay: false,
            dark_overlay_alpha: Self::DEFAULT_OVERLAY_ALPHA,
            reopen_on_rotate: true,
            disabled: false,
        }
    }
}

impl SidebarConfig {
    pub const DEFAULT_MENU_WIDTH: f32 = 260.0;
    pub const DEFAULT_FLING_VELOCITY: f32 = 800.0;
    pub const DEFAULT_FLING_FRACTION: f32 = 0.5;
    pub const DEFAULT_GESTURE_ACTIVE_AREA: f32 = 50.0;
    pub const DEFAULT_OVERLAY_ALPHA: f32 = 0.5;

    pub fn menu_width(&self) -> f32 {
        self.menu_width
    }

    /// Width of the menu when fully open, in points.
    pub fn set_menu_width(&mut self, width: f32) -> Result<(), SidebarError> {
        if width <= 0.0 || !width.is_finite() {
            return Err(SidebarError::InvalidMenuWidth(width));
        }
        self.menu_width = width;
        Ok(())
    }

    pub fn menu_location(&self) -> MenuLocation {
        self.menu_location
    }

    pub fn set_menu_location(&mut self, location: MenuLocation) {
        self.menu_location = location;
    }

    pub fn fling_velocity(&self) -> f32 {
        self.fling_velocity
    }

    /// Minimum release velocity, in points per second, considered a fling.
    pub fn set_fling_velocity(&mut self, velocity: f32) {
        self.fling_velocity = velocity;
    }

    pub fn fling_fraction(&self) -> f32 {
        self.fling_fraction
    }

    /// Fraction of the menu width a drag must pass to settle open.
    pub fn set_fling_fraction(&mut self, fraction: f32) -> Result<(), SidebarError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(SidebarError::InvalidFlingFraction(fraction));
        }
        self.fling_fraction = fraction;
        Ok(())
    }

    pub fn gesture_active_area(&self) -> f32 {
        self.gesture_active_area
    }

    /// Width of the edge strip where a drag is recognized as intent to open.
    pub fn set_gesture_active_area(&mut self, width: f32) -> Result<(), SidebarError> {
        if width < 0.0 || !width.is_finite() {
            return Err(SidebarError::InvalidActiveArea(width));
        }
        self.gesture_active_area = width;
        Ok(())
    }

    pub fn has_shadow(&self) -> bool {
        self.has_shadow
    }

    pub fn set_has_shadow(&mut self, has_shadow: bool) {
        self.has_shadow = has_shadow;
    }

    pub fn has_dark_overlay(&self) -> bool {
        self.has_dark_overlay
    }

    pub fn set_has_dark_overlay(&mut self, has_dark_overlay: bool) {
        self.has_dark_overlay = has_dark_overlay;
    }

    pub fn dark_overlay_alpha(&self) -> f32 {
        self.dark_overlay_alpha
    }

    /// Opacity of the dark overlay when the menu is fully open.
    pub fn set_dark_overlay_alpha(&mut self, alpha: f32) -> Result<(), SidebarError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SidebarError::InvalidOverlayAlpha(alpha));
        }
        self.dark_overlay_alpha = alpha;
        Ok(())
    }

    pub fn reopen_on_rotate(&self) -> bool {
        self.reopen_on_rotate
    }

    pub fn set_reopen_on_rotate(&mut self, reopen: bool) {
        self.reopen_on_rotate = reopen;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SidebarConfig::default();
        assert_eq!(config.menu_width(), 260.0);
        assert_eq!(config.menu_location(), MenuLocation::Right);
        assert_eq!(config.fling_velocity(), 800.0);
        assert_eq!(config.fling_fraction(), 0.5);
        assert_eq!(config.gesture_active_area(), 50.0);
        assert!(config.has_shadow());
        assert!(!config.has_dark_overlay());
        assert!(config.reopen_on_rotate());
        assert!(!config.disabled());
    }

    #[test]
    fn rejects_non_positive_menu_width() {
        let mut config = SidebarConfig::default();
        assert!(config.set_menu_width(0.0).is_err());
        assert!(config.set_menu_width(-10.0).is_err());
        assert_eq!(config.menu_width(), 260.0);
        assert!(config.set_menu_width(320.0).is_ok());
        assert_eq!(config.menu_width(), 320.0);
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let mut config = SidebarConfig::default();
        assert!(config.set_fling_fraction(1.5).is_err());
        assert!(config.set_fling_fraction(-0.1).is_err());
        assert!(config.set_fling_fraction(0.3).is_ok());
        assert!(config.set_dark_overlay_alpha(2.0).is_err());
        assert!(config.set_dark_overlay_alpha(0.8).is_ok());
        assert!(config.set_gesture_active_area(-1.0).is_err());
    }
}
