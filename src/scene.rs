use std::f64::consts::PI;

use crate::{
    camera::CameraState,
    error::{InkweedError, InkweedResult},
    frame::{Canvas, FrameBuffer},
    math::lerp,
    params::{BokehParams, ShapeParams},
    render::render_pass,
    rng::RandomSource,
};

/// Alpha of the per-frame translucent white fill that bleaches old ink.
const FADE_ALPHA: u8 = 30;

/// Fraction of the cycle the phase is pinned to while the pointer is held.
const HELD_PHASE: f64 = 0.2;

/// Host pointer snapshot, position in pixel coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pressed: bool,
    pub x: f64,
    pub y: f64,
}

/// Everything the host feeds into one frame: a monotonic millisecond clock
/// and the current pointer state.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub now_ms: u64,
    pub pointer: PointerState,
}

/// The full tunable parameter set, as exposed to an external debug panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tuning {
    pub shape: ShapeParams,
    pub bokeh: BokehParams,
    pub camera: CameraState,
}

impl Tuning {
    pub fn validate(&self) -> InkweedResult<()> {
        self.shape.validate()?;
        self.bokeh.validate()?;
        self.camera.validate()
    }
}

enum Mode {
    Running,
    Interacting,
}

/// Owned simulation state: shape/bokeh/camera parameters, the cycle clock and
/// the random source. One [`Scene::render_frame`] call per presentation tick.
pub struct Scene {
    shape: ShapeParams,
    bokeh: BokehParams,
    camera: CameraState,
    canvas: Canvas,
    rng: Box<dyn RandomSource>,
    cycle_start_ms: Option<u64>,
    cycle_count: u64,
    /// Alternates the upper/lower canvas half for the next cycle's placement.
    upper: bool,
    debug: bool,
}

impl Scene {
    /// A scene with a freshly randomized first cycle.
    pub fn new(canvas: Canvas, mut rng: Box<dyn RandomSource>) -> InkweedResult<Self> {
        let mut shape = ShapeParams::default();
        let mut camera = CameraState::default();
        shape.randomize(rng.as_mut());
        camera.randomize(rng.as_mut(), true);

        let scene = Self {
            shape,
            bokeh: BokehParams::default(),
            camera,
            canvas,
            rng,
            cycle_start_ms: None,
            cycle_count: 0,
            upper: false,
            debug: false,
        };
        scene.tuning().validate()?;
        Ok(scene)
    }

    /// Debug/inspection mode: the phase is frozen at 0.5, the pointer never
    /// overrides focus or the bokeh mode, and parameters keep their defaults
    /// (or whatever external tuning sets) verbatim.
    pub fn new_debug(canvas: Canvas, rng: Box<dyn RandomSource>) -> InkweedResult<Self> {
        let scene = Self {
            shape: ShapeParams::default(),
            bokeh: BokehParams::default(),
            camera: CameraState::default(),
            canvas,
            rng,
            cycle_start_ms: None,
            cycle_count: 0,
            upper: true,
            debug: true,
        };
        scene.tuning().validate()?;
        Ok(scene)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn shape(&self) -> &ShapeParams {
        &self.shape
    }

    pub fn bokeh(&self) -> &BokehParams {
        &self.bokeh
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Completed randomization cycles since creation.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            shape: self.shape,
            bokeh: self.bokeh,
            camera: self.camera,
        }
    }

    /// Replace the tunable parameter set, failing fast on invalid values.
    pub fn apply_tuning(&mut self, tuning: Tuning) -> InkweedResult<()> {
        tuning.validate()?;
        self.shape = tuning.shape;
        self.bokeh = tuning.bokeh;
        self.camera = tuning.camera;
        Ok(())
    }

    pub fn tuning_json(&self) -> InkweedResult<String> {
        serde_json::to_string_pretty(&self.tuning()).map_err(|e| InkweedError::serde(e.to_string()))
    }

    pub fn apply_tuning_json(&mut self, json: &str) -> InkweedResult<()> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| InkweedError::serde(e.to_string()))?;
        self.apply_tuning(tuning)
    }

    /// Only affects subsequent frames; the host supplies a matching buffer.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> InkweedResult<()> {
        self.canvas = Canvas::new(width, height)?;
        Ok(())
    }

    /// Render one frame: advance the animation state, fade the buffer toward
    /// white, then stipple the full sample set.
    #[tracing::instrument(skip(self, input, frame), fields(now_ms = input.now_ms))]
    pub fn render_frame(&mut self, input: &FrameInput, frame: &mut FrameBuffer) -> InkweedResult<()> {
        if frame.canvas() != self.canvas {
            return Err(InkweedError::render(
                "frame buffer dimensions do not match the current canvas",
            ));
        }

        let now = input.now_ms;
        if self.cycle_start_ms.is_none() {
            self.cycle_start_ms = Some(now);
        }

        let mode = if input.pointer.pressed && !self.debug {
            Mode::Interacting
        } else {
            Mode::Running
        };

        // Holding the pointer rewinds the cycle clock so the phase reads a
        // fixed low value, shortening the time to the next randomization.
        if let Mode::Interacting = mode {
            let rewind = (self.shape.cycle_ms as f64 * HELD_PHASE).round() as u64;
            self.cycle_start_ms = Some(now.saturating_sub(rewind));
        }

        let t = if self.debug {
            0.5
        } else {
            let start = self.cycle_start_ms.unwrap_or(now);
            now.saturating_sub(start) as f64 / self.shape.cycle_ms as f64
        };

        self.update_focus(t, input.pointer);

        // Focus was updated with the outgoing phase on purpose: the first
        // frame of a new cycle still renders with the old cycle's fully
        // extended focus sweep.
        if t >= 1.0 {
            self.cycle_start_ms = Some(now);
            self.next_cycle();
        }

        if !self.debug {
            self.bokeh.linear = !input.pointer.pressed;
        }

        frame.fade_to_white(FADE_ALPHA);
        render_pass(
            frame,
            &self.shape,
            &self.camera,
            &self.bokeh,
            t,
            self.rng.as_mut(),
        );
        Ok(())
    }

    fn update_focus(&mut self, t: f64, pointer: PointerState) {
        if self.debug {
            return;
        }
        if pointer.pressed {
            self.camera.focus.x = pointer.x / f64::from(self.canvas.width);
            self.camera.focus.y = pointer.y / f64::from(self.canvas.height);
            return;
        }

        let eased = (1.0 - (t * PI).cos()) / 2.0;
        let fl = lerp(0.0, self.camera.focus.length, eased);
        self.camera.focus.x = self.camera.position.x + self.camera.focus.angle.cos() * fl;
        self.camera.focus.y = self.camera.position.y + self.camera.focus.angle.sin() * fl;
    }

    fn next_cycle(&mut self) {
        self.shape.randomize(self.rng.as_mut());
        self.camera.randomize(self.rng.as_mut(), self.upper);
        self.upper = !self.upper;
        self.cycle_count += 1;
        tracing::debug!(
            freq_main = self.shape.freq_main,
            freq_sub = self.shape.freq_sub,
            amp_sub = self.shape.amp_sub,
            pos_x = self.camera.position.x,
            pos_y = self.camera.position.y,
            zoom = self.camera.position.zoom,
            cycle = self.cycle_count,
            "cycle randomized"
        );
    }
}
