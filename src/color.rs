// Fixed-hue translucent color, shared by the particles and their link lines.
// The hue is constant; only the alpha channel varies per instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    // Accent hue of the backdrop, as 0xRRGGBB.
    pub const ACCENT_HUE: u32 = 0x6C63FF;

    pub fn from_rgb_u32(num: u32, alpha: f64) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b, a: alpha }
    }

    pub fn accent(alpha: f64) -> Color {
        Color::from_rgb_u32(Color::ACCENT_HUE, alpha)
    }

    // String form the canvas 2d context accepts as a fill or stroke style.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_hue_unpacks_to_rgb_channels() {
        let color = Color::accent(0.25);
        assert_eq!((color.r, color.g, color.b), (108, 99, 255));
        assert_eq!(color.a, 0.25);
    }

    #[test]
    fn css_string_is_an_rgba_style() {
        let color = Color::from_rgb_u32(0x6C63FF, 0.5);
        assert_eq!(color.to_css(), "rgba(108, 99, 255, 0.5)");
    }
}
