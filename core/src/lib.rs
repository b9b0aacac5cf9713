// core holds the surface catalog, the noise kernel and the transition engine
pub mod config;
pub mod domain;
pub mod error;
pub mod functions;
pub mod graph;
pub mod noise;
pub mod stats;
pub mod surface;
pub mod transition;

pub use config::GraphConfig;
pub use domain::{GridSpec, ResolutionBounds, cell_to_uv, uv_to_cell};
pub use error::{GraphError, Result};
pub use functions::{FunctionId, ShapeParameters, SurfaceFn, lookup};
pub use graph::{Frame, Graph};
pub use noise::{GradientNoise3, NoiseGenerator, noise3};
pub use stats::{DisplayMetric, FrameReport, FrameStats};
pub use surface::{evaluate_grid, evaluate_grid_into};
pub use transition::{TransitionState, smoothstep};

// glam's vector type is part of the public API
pub use glam::{Vec2, Vec3};
