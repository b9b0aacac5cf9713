use glam::Vec3;
use log::trace;
use rayon::prelude::*;

use crate::domain::{GridSpec, ResolutionBounds, cell_to_uv};
use crate::error::Result;
use crate::functions::ShapeParameters;
use crate::transition::TransitionState;

/// Evaluate every cell of `spec` at time `t`, row-major.
///
/// Checks the resolution against the default bounds. Cells are independent, so
/// the sweep runs in parallel over a snapshot of `state`.
pub fn evaluate_grid(
    spec: GridSpec,
    state: &TransitionState,
    params: &ShapeParameters,
    t: f32,
) -> Result<Vec<Vec3>> {
    let mut positions = Vec::new();
    evaluate_grid_into(
        spec,
        &ResolutionBounds::default(),
        state,
        params,
        t,
        &mut positions,
    )?;
    Ok(positions)
}

/// Like [`evaluate_grid`] but writes into `out`, reusing its allocation.
///
/// `out` is resized to exactly `resolution²` entries. On error it is left
/// untouched.
pub fn evaluate_grid_into(
    spec: GridSpec,
    bounds: &ResolutionBounds,
    state: &TransitionState,
    params: &ShapeParameters,
    t: f32,
    out: &mut Vec<Vec3>,
) -> Result<()> {
    spec.validate(bounds)?;

    // Take copies so no cell can observe a mutation mid-sweep
    let state = *state;
    let params = *params;
    let resolution = spec.resolution;

    trace!(
        "sweep {}x{} {} progress {:.3} t={:.3}",
        resolution,
        resolution,
        state.current(),
        state.progress(),
        t
    );

    out.resize(spec.cell_count(), Vec3::ZERO);
    out.par_iter_mut().enumerate().for_each(|(i, p)| {
        let uv = cell_to_uv(i, resolution);
        *p = state.evaluate(uv.x, uv.y, t, &params);
    });
    Ok(())
}
