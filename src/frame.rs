use crate::error::{InkweedError, InkweedResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> InkweedResult<Self> {
        if width == 0 || height == 0 {
            return Err(InkweedError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Scale reference used by the curve generator: the shorter canvas edge.
    pub fn min_extent(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    fn byte_len(self) -> InkweedResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| InkweedError::validation("canvas byte size overflow"))
    }
}

/// Interleaved RGBA8 pixel storage, row-major, origin top-left.
///
/// The render path only ever darkens RGB multiplicatively and fades it back
/// toward white; alpha stays whatever it was at creation. All pixel access is
/// bounds-checked, and off-buffer writes are silently dropped (the sample
/// pipeline routinely produces off-canvas coordinates).
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// A fresh buffer filled opaque black. The per-frame white fade bleaches
    /// it toward paper over the first cycles.
    pub fn new(canvas: Canvas) -> InkweedResult<Self> {
        let len = canvas.byte_len()?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self { canvas, data })
    }

    /// Wrap externally allocated pixel bytes. Length must be width*height*4.
    pub fn from_raw(canvas: Canvas, data: Vec<u8>) -> InkweedResult<Self> {
        if data.len() != canvas.byte_len()? {
            return Err(InkweedError::validation(
                "pixel buffer length must be width*height*4",
            ));
        }
        Ok(Self { canvas, data })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// True when the (possibly fractional) coordinate lies on the buffer.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0
            && x < f64::from(self.canvas.width)
            && y >= 0.0
            && y < f64::from(self.canvas.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let ofs = ((y as usize) * (self.canvas.width as usize) + x as usize) * 4;
        Some([
            self.data[ofs],
            self.data[ofs + 1],
            self.data[ofs + 2],
            self.data[ofs + 3],
        ])
    }

    /// Multiply the RGB channels at an integer coordinate, leaving alpha
    /// untouched. Out-of-bounds coordinates (including negative) are a no-op.
    /// Channel products round to nearest and clamp to 255, so a multiplier
    /// slightly above 1 can never overflow a byte.
    pub fn darken_px(&mut self, x: i64, y: i64, mul: [f64; 3]) {
        if x < 0 || y < 0 || x >= i64::from(self.canvas.width) || y >= i64::from(self.canvas.height)
        {
            return;
        }
        let ofs = ((y as usize) * (self.canvas.width as usize) + x as usize) * 4;
        for (c, &m) in mul.iter().enumerate() {
            let v = f64::from(self.data[ofs + c]) * m;
            self.data[ofs + c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Composite a uniform translucent white over the whole buffer:
    /// `c' = c + (255 - c) * alpha / 255` per RGB channel. Alpha untouched.
    pub fn fade_to_white(&mut self, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let op = u16::from(alpha);
        for px in self.data.chunks_exact_mut(4) {
            for c in px.iter_mut().take(3) {
                let v = u16::from(*c);
                *c = (v + mul_div255(255 - v, op)) as u8;
            }
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}
