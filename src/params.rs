use crate::{
    error::{InkweedError, InkweedResult},
    math::lerp,
    rng::RandomSource,
};

/// Ink darkening bounds mapped from the bokeh weight: sharp samples multiply
/// channels by `min` (darkest), fully defocused samples by `max`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DarknessRange {
    pub min: f64,
    pub max: f64,
}

impl DarknessRange {
    pub fn validate(&self) -> InkweedResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(InkweedError::validation("darkness bounds must be finite"));
        }
        if self.min <= 0.0 {
            return Err(InkweedError::validation("darkness.min must be > 0"));
        }
        if self.min > self.max {
            return Err(InkweedError::validation("darkness.min must be <= max"));
        }
        if self.max > 1.0 {
            return Err(InkweedError::validation("darkness.max must be <= 1"));
        }
        Ok(())
    }
}

/// Per-cycle curve shape. `amp_sub`/`freq_main`/`freq_sub` are redrawn at
/// every cycle boundary; the rest only changes through external tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeParams {
    /// Secondary-wave amplitude as a fraction of the main wave.
    pub amp_sub: f64,
    /// Main-wave harmonic count. Always even, which keeps the lobe pattern
    /// symmetric around the camera position.
    pub freq_main: u32,
    /// Secondary-wave harmonic count; values in the thousands put a fine
    /// ripple on top of the low-frequency lobes.
    pub freq_sub: u32,
    /// Curve samples stippled per frame. Zero renders a fade-only frame.
    pub sample_count: usize,
    pub darkness: DarknessRange,
    /// Animation cycle duration in milliseconds.
    pub cycle_ms: u64,
    /// Vertical compression of the projected filament (< 1 flattens).
    pub tilt: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            amp_sub: 0.17,
            freq_main: 2,
            freq_sub: 2230,
            sample_count: 36_000,
            darkness: DarknessRange { min: 0.97, max: 1.0 },
            cycle_ms: 8000,
            tilt: 0.7,
        }
    }
}

impl ShapeParams {
    pub fn validate(&self) -> InkweedResult<()> {
        if !self.amp_sub.is_finite() || self.amp_sub < 0.0 {
            return Err(InkweedError::validation("amp_sub must be >= 0 and finite"));
        }
        if self.freq_main == 0 || self.freq_main % 2 != 0 {
            return Err(InkweedError::validation("freq_main must be a positive even integer"));
        }
        self.darkness.validate()?;
        if self.cycle_ms == 0 {
            return Err(InkweedError::validation("cycle_ms must be > 0"));
        }
        if !self.tilt.is_finite() || self.tilt < 0.0 {
            return Err(InkweedError::validation("tilt must be >= 0 and finite"));
        }
        Ok(())
    }

    /// Redraw the per-cycle wave parameters. A single draw `fmp` couples the
    /// main harmonic count to the sub-wave amplitude ceiling inversely: busier
    /// lobe patterns get proportionally quieter ripple.
    pub fn randomize(&mut self, rng: &mut dyn RandomSource) {
        let fmp = rng.range_f64(0.0, 1.0);
        self.freq_main = (lerp(1.0, 4.0, fmp).floor() as u32) * 2;
        self.freq_sub = rng.range_u32(1000, 5000);
        self.amp_sub = rng.range_f64(0.05, lerp(0.4, 0.08, fmp));
    }
}

/// Simulated depth-of-field controls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BokehParams {
    pub enabled: bool,
    /// Dot scatter radius at full defocus, in pixels.
    pub max_dot_radius: f64,
    /// Band focus (distance measured along y only) versus point focus.
    /// Outside debug mode the controller toggles this with pointer state.
    pub linear: bool,
    /// Gaussian falloff width of the focus region.
    pub sigma: f64,
}

impl Default for BokehParams {
    fn default() -> Self {
        Self {
            enabled: true,
            max_dot_radius: 80.0,
            linear: true,
            sigma: 1.8,
        }
    }
}

impl BokehParams {
    pub fn validate(&self) -> InkweedResult<()> {
        if !self.max_dot_radius.is_finite() || self.max_dot_radius <= 0.0 {
            return Err(InkweedError::validation("bokeh max_dot_radius must be > 0"));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(InkweedError::validation("bokeh sigma must be > 0"));
        }
        Ok(())
    }
}
