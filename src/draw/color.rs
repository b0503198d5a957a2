//! RGBA color type and the ink palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum), which is
/// what Cairo expects in `set_source_rgba`.
///
/// # Examples
///
/// ```
/// use screenpen::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let highlighter = Color::from_rgba8(0, 0, 0, 0x40);
/// assert_eq!(highlighter.a, 64.0 / 255.0);
/// assert_eq!(red, screenpen::draw::RED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0-1.0 range.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Builds a color from a `[r, g, b, a]` array, clamping each channel to 0.0-1.0.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        Self {
            r: rgba[0].clamp(0.0, 1.0),
            g: rgba[1].clamp(0.0, 1.0),
            b: rgba[2].clamp(0.0, 1.0),
            a: rgba[3].clamp(0.0, 1.0),
        }
    }
}

// ============================================================================
// Ink palette
// ============================================================================

/// Red ink (255, 0, 0)
pub const RED: Color = Color::from_rgba8(255, 0, 0, 255);

/// Green ink (0, 255, 0)
pub const GREEN: Color = Color::from_rgba8(0, 255, 0, 255);

/// Blue ink (0, 0, 255)
pub const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);

/// Yellow ink (255, 255, 0)
pub const YELLOW: Color = Color::from_rgba8(255, 255, 0, 255);

/// Orange ink (255, 165, 0)
pub const ORANGE: Color = Color::from_rgba8(255, 165, 0, 255);

/// Pink ink (255, 105, 180)
pub const PINK: Color = Color::from_rgba8(255, 105, 180, 255);

/// Opaque white
pub const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);

/// Opaque black
pub const BLACK: Color = Color::from_rgba8(0, 0, 0, 255);

/// Translucent black used by the highlighter tool
pub const HIGHLIGHTER: Color = Color::from_rgba8(0, 0, 0, 0x40);

/// Light gray canvas background (245, 245, 245)
pub const BACKGROUND: Color = Color::from_rgba8(245, 245, 245, 255);

/// Translucent black laid over the background when dimming is on
pub const DIM_OVERLAY: Color = Color::from_rgba8(0, 0, 0, 120);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_channels_scale_to_unit_range() {
        let c = Color::from_rgba8(255, 0, 51, 0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 0.0));
    }

    #[test]
    fn from_array_clamps_out_of_range_channels() {
        let c = Color::from_array([1.5, -0.2, 0.5, 2.0]);
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn highlighter_is_translucent_black() {
        assert_eq!((HIGHLIGHTER.r, HIGHLIGHTER.g, HIGHLIGHTER.b), (0.0, 0.0, 0.0));
        assert!((HIGHLIGHTER.a - 0x40 as f64 / 255.0).abs() < f64::EPSILON);
    }
}
