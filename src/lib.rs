#![forbid(unsafe_code)]

pub mod bokeh;
pub mod camera;
pub mod curve;
pub mod error;
pub mod frame;
pub mod math;
pub mod params;
pub mod render;
pub mod rng;
pub mod scene;
pub mod stipple;

pub use camera::{CameraPosition, CameraState, FocusTarget, project};
pub use curve::{CurveOffset, curve_offset};
pub use error::{InkweedError, InkweedResult};
pub use frame::{Canvas, FrameBuffer};
pub use params::{BokehParams, DarknessRange, ShapeParams};
pub use render::render_pass;
pub use rng::{EntropyRandom, RandomSource};
pub use scene::{FrameInput, PointerState, Scene, Tuning};
