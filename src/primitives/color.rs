/// Linear RGB color with channels nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Quantizes to 8 bits per channel. Scales by 255 and truncates; values
    /// outside `[0, 1]` saturate.
    pub fn to_pixel(&self) -> Pixel {
        Pixel {
            r: (255.0 * self.r) as u8,
            g: (255.0 * self.g) as u8,
            b: (255.0 * self.b) as u8,
        }
    }
}

/// One framebuffer texel, laid out as three consecutive bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }
}
