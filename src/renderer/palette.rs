//! Colours for the board, pieces and overlay

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_egui(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    /// Linear-space clear colour for a wgpu render pass
    pub fn to_wgpu(&self) -> wgpu::Color {
        let linear = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        wgpu::Color {
            r: linear(self.r),
            g: linear(self.g),
            b: linear(self.b),
            a: self.a as f64 / 255.0,
        }
    }
}

pub const BACKGROUND: Color = Color::rgb(0x11, 0x11, 0x11);
pub const GRID_LINE: Color = Color::rgb(0x22, 0x22, 0x22);
pub const FOOD: Color = Color::rgb(0xe7, 0x4c, 0x3c);
pub const SNAKE_BODY: Color = Color::rgb(0x2e, 0xcc, 0x71);
pub const SNAKE_HEAD: Color = Color::rgb(0x27, 0xae, 0x60);
/// Half-transparent black laid over the board at game over
pub const OVERLAY: Color = Color::rgba(0x00, 0x00, 0x00, 0x80);
pub const TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
pub const TEXT_DIM: Color = Color::rgb(0xdd, 0xdd, 0xdd);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_is_translucent() {
        let overlay = OVERLAY.to_egui();
        assert_eq!(overlay.a(), 0x80);
        assert_eq!(FOOD.to_egui(), egui::Color32::from_rgb(0xe7, 0x4c, 0x3c));
    }

    #[test]
    fn test_head_and_body_differ() {
        assert_ne!(SNAKE_HEAD, SNAKE_BODY);
    }

    #[test]
    fn test_wgpu_clear_is_linear() {
        let white = Color::rgb(255, 255, 255).to_wgpu();
        assert!((white.r - 1.0).abs() < 1e-9);
        let bg = BACKGROUND.to_wgpu();
        // sRGB 0x11 is much darker in linear space
        assert!(bg.r < 0x11 as f64 / 255.0);
    }
}
