//! Per-frame driver tying the pieces together.
//!
//! A [`Graph`] owns the grid, the transition state, the shape parameters and a
//! position buffer. Each [`update`](Graph::update) advances the transition once,
//! snapshots it and sweeps the grid against that snapshot, which is the only
//! ordering a parallel sweep is safe under.

use glam::Vec3;
use log::{debug, info};

use crate::config::GraphConfig;
use crate::domain::{GridSpec, ResolutionBounds, bounds_extent};
use crate::error::Result;
use crate::functions::{FunctionId, ShapeParameters};
use crate::surface::evaluate_grid_into;
use crate::transition::TransitionState;

/// What a renderer needs to draw one frame.
#[derive(Debug)]
pub struct Frame<'a> {
    pub positions: &'a [Vec3],
    pub resolution: u32,
    /// Per-instance scale, `2 / resolution`.
    pub step: f32,
    /// Edge of the bounding cube around all positions.
    pub extent: f32,
    pub function: FunctionId,
    pub transitioning: bool,
    pub progress: f32,
}

pub struct Graph {
    bounds: ResolutionBounds,
    grid: GridSpec,
    transition: TransitionState,
    transition_duration: f32,
    shapes: ShapeParameters,
    positions: Vec<Vec3>,
}

impl Graph {
    pub fn new(mut config: GraphConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "graph {}x{} showing {}",
            config.resolution, config.resolution, config.function
        );
        Ok(Self {
            bounds: config.bounds,
            grid: GridSpec {
                resolution: config.resolution,
            },
            transition: TransitionState::new(config.function),
            transition_duration: config.transition_duration,
            shapes: config.shapes,
            positions: Vec::new(),
        })
    }

    pub fn resolution(&self) -> u32 {
        self.grid.resolution
    }

    /// Change the grid size. Out-of-bounds values are rejected, not clamped.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<()> {
        let grid = GridSpec { resolution };
        grid.validate(&self.bounds)?;
        if grid != self.grid {
            debug!("resolution {} -> {}", self.grid.resolution, resolution);
            self.grid = grid;
        }
        Ok(())
    }

    pub fn current_function(&self) -> FunctionId {
        self.transition.current()
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }

    /// Morph to `to` over the configured duration.
    pub fn transition_to(&mut self, to: FunctionId) {
        self.transition.begin(to, self.transition_duration);
    }

    pub fn transition_to_with(&mut self, to: FunctionId, duration: f32) {
        self.transition.begin(to, duration);
    }

    /// Morph to the next (or previous) catalog entry.
    pub fn cycle(&mut self, forward: bool) -> FunctionId {
        let current = self.transition.current();
        let to = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.transition_to(to);
        to
    }

    pub fn shape_params(&self) -> &ShapeParameters {
        &self.shapes
    }

    pub fn shape_params_mut(&mut self) -> &mut ShapeParameters {
        &mut self.shapes
    }

    /// Advance by `dt` and evaluate the whole grid at time `t`.
    pub fn update(&mut self, dt: f32, t: f32) -> Result<Frame<'_>> {
        self.transition.advance(dt);
        let snapshot = self.transition;
        evaluate_grid_into(
            self.grid,
            &self.bounds,
            &snapshot,
            &self.shapes,
            t,
            &mut self.positions,
        )?;
        let resolution = self.grid.resolution;
        Ok(Frame {
            positions: &self.positions,
            resolution,
            step: self.grid.step(),
            extent: bounds_extent(resolution),
            function: snapshot.current(),
            transitioning: snapshot.is_active(),
            progress: snapshot.progress(),
        })
    }
}
