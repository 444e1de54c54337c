//! Captured pixel data handed to the image exporter.

/// Tightly packed, straight-alpha RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps RGBA8 data. Returns `None` when the length does not match the size.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Copies a `width`×`height` window starting at (`x`, `y`) out of cairo `ARgb32`
    /// memory, converting premultiplied native-endian ARGB into straight RGBA.
    ///
    /// The caller guarantees the window lies inside the source surface.
    pub(crate) fn from_cairo_argb32(
        source: &[u8],
        stride: usize,
        x: usize,
        y: usize,
        width: u32,
        height: u32,
    ) -> Self {
        let row_bytes = width as usize * 4;
        let mut data = Vec::with_capacity(row_bytes * height as usize);

        for row in source.chunks(stride).skip(y).take(height as usize) {
            let window = &row[x * 4..x * 4 + row_bytes];
            for px in window.chunks_exact(4) {
                let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                let a = (argb >> 24) as u8;
                let r = unpremultiply((argb >> 16) as u8, a);
                let g = unpremultiply((argb >> 8) as u8, a);
                let b = unpremultiply(argb as u8, a);
                data.extend_from_slice(&[r, g, b, a]);
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major, no padding.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value at (`x`, `y`), if in range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Drops the alpha channel (for encoders without transparency).
    pub fn to_rgb(&self) -> Vec<u8> {
        self.data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    match alpha {
        0 => 0,
        255 => channel,
        a => ((channel as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb(a: u8, r: u8, g: u8, b: u8) -> [u8; 4] {
        let value = (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32;
        value.to_ne_bytes()
    }

    #[test]
    fn from_rgba_validates_length() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn converts_opaque_argb_window() {
        // 3x2 surface, stride padded to 16 bytes per row.
        let mut source = Vec::new();
        for row in 0..2u8 {
            for col in 0..3u8 {
                source.extend_from_slice(&argb(255, row, col, 7));
            }
            source.extend_from_slice(&[0; 4]);
        }

        let buffer = PixelBuffer::from_cairo_argb32(&source, 16, 1, 0, 2, 2);

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixel(0, 0), Some([0, 1, 7, 255]));
        assert_eq!(buffer.pixel(1, 1), Some([1, 2, 7, 255]));
        assert_eq!(buffer.pixel(2, 0), None);
    }

    #[test]
    fn unpremultiplies_translucent_pixels() {
        let source = argb(128, 64, 0, 128);
        let buffer = PixelBuffer::from_cairo_argb32(&source, 4, 0, 0, 1, 1);
        assert_eq!(buffer.pixel(0, 0), Some([128, 0, 255, 128]));
    }

    #[test]
    fn to_rgb_strips_alpha() {
        let buffer = PixelBuffer::from_rgba(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buffer.to_rgb(), vec![1, 2, 3, 5, 6, 7]);
    }
}
