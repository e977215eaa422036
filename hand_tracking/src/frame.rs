/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// A single camera capture: row-major RGBA, top row first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            rgba,
            width,
            height,
        }
    }

    /// Build a frame where every pixel has the same colour.
    ///
    /// Dimensions too large to address give an empty (malformed) buffer.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = Self::byte_len(width, height).map_or(0, |len| len / CHANNELS);
        Self::new(rgba.repeat(pixels), width, height)
    }

    /// RGBA byte count for the given dimensions, None on overflow
    pub fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)
    }

    /// Buffer length matches the dimensions and neither dimension is zero
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && Self::byte_len(self.width, self.height) == Some(self.rgba.len())
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(CHANNELS)
    }

    /// RGB of the pixel at (x, y), or None outside the buffer
    pub fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let i = self.offset(x, y)?;
        let px = self.rgba.get(i..i + 3)?;
        Some((px[0], px[1], px[2]))
    }

    /// Overwrite a pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.rgba.get_mut(i..i + CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Paint an axis-aligned rectangle, clipped to the frame
    pub fn fill_rect(&mut self, x0: u32, y0: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x1 = x0.saturating_add(width).min(self.width);
        let y1 = y0.saturating_add(height).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, rgba);
            }
        }
    }
}
