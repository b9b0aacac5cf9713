//! The catalog of surface functions.
//!
//! Every function maps a domain coordinate `(u, v)` in `[-1, 1]²` and a time
//! `t` in seconds to a point in space. Functions hold no state; their tunables
//! live in [`ShapeParameters`] and are passed in on every call.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::noise::noise3;

/// Identifies one entry of the catalog. Declaration order is catalog order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionId {
    #[default]
    SineWave,
    MultiSineWave,
    SimplexNoise,
    Ripple,
    Sphere,
    BandedSphere,
    BandedStarTorus,
}

impl FunctionId {
    pub const ALL: [FunctionId; 7] = [
        FunctionId::SineWave,
        FunctionId::MultiSineWave,
        FunctionId::SimplexNoise,
        FunctionId::Ripple,
        FunctionId::Sphere,
        FunctionId::BandedSphere,
        FunctionId::BandedStarTorus,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<FunctionId> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            FunctionId::SineWave => "SineWave",
            FunctionId::MultiSineWave => "MultiSineWave",
            FunctionId::SimplexNoise => "SimplexNoise",
            FunctionId::Ripple => "Ripple",
            FunctionId::Sphere => "Sphere",
            FunctionId::BandedSphere => "BandedSphere",
            FunctionId::BandedStarTorus => "BandedStarTorus",
        }
    }

    /// Height-field functions keep `x = u` and `z = v` and only shape `y`.
    pub fn is_graph(self) -> bool {
        matches!(
            self,
            FunctionId::SineWave
                | FunctionId::MultiSineWave
                | FunctionId::SimplexNoise
                | FunctionId::Ripple
        )
    }

    /// The following catalog entry, wrapping around at the end.
    pub fn next(self) -> FunctionId {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The preceding catalog entry, wrapping around at the start.
    pub fn previous(self) -> FunctionId {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Evaluate this function at `(u, v, t)`.
    #[inline]
    pub fn evaluate(self, u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
        lookup(self)(u, v, t, params)
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Accepts "SineWave", "sine-wave", "sine_wave" and "sine wave"
impl FromStr for FunctionId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|id| id.name().to_lowercase() == wanted)
            .ok_or_else(|| GraphError::UnknownFunction(s.to_string()))
    }
}

pub type SurfaceFn = fn(f32, f32, f32, &ShapeParameters) -> Vec3;

/// The evaluator for `id`. The match is exhaustive, so every id has one.
pub fn lookup(id: FunctionId) -> SurfaceFn {
    match id {
        FunctionId::SineWave => sine_wave,
        FunctionId::MultiSineWave => multi_sine_wave,
        FunctionId::SimplexNoise => simplex_noise,
        FunctionId::Ripple => ripple,
        FunctionId::Sphere => sphere,
        FunctionId::BandedSphere => banded_sphere,
        FunctionId::BandedStarTorus => banded_star_torus,
    }
}

// ---------------------------------------------------------------------------
// Shape parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wave {
    pub amplitude: f32,
    pub period_factor: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            period_factor: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MultiSineWaveParams {
    pub wave1: Wave,
    pub wave2: Wave,
    pub wave3: Wave,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplexNoiseParams {
    /// Time scale applied before the noise lookup.
    pub speed: f32,
}

impl Default for SimplexNoiseParams {
    fn default() -> Self {
        Self { speed: 0.75 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleParams {
    pub amplitude: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self { amplitude: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            min_radius: 0.0,
            max_radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandedSphereParams {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Default for BandedSphereParams {
    fn default() -> Self {
        Self {
            vertical: 6.0,
            horizontal: 4.0,
        }
    }
}

/// Per-function tunables. The defaults reproduce the bare formulas exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShapeParameters {
    pub sine_wave: Wave,
    pub multi_sine_wave: MultiSineWaveParams,
    pub simplex_noise: SimplexNoiseParams,
    pub ripple: RippleParams,
    pub sphere: SphereParams,
    pub banded_sphere: BandedSphereParams,
}

impl ShapeParameters {
    /// Parameter names for `id`, in panel order.
    pub fn keys(id: FunctionId) -> &'static [&'static str] {
        match id {
            FunctionId::SineWave => &["amplitude", "period_factor"],
            FunctionId::MultiSineWave => &[
                "wave1_amplitude",
                "wave1_period_factor",
                "wave2_amplitude",
                "wave2_period_factor",
                "wave3_amplitude",
                "wave3_period_factor",
            ],
            FunctionId::SimplexNoise => &["speed"],
            FunctionId::Ripple => &["amplitude"],
            FunctionId::Sphere => &["speed", "min_radius", "max_radius"],
            FunctionId::BandedSphere => &["vertical", "horizontal"],
            FunctionId::BandedStarTorus => &[],
        }
    }

    pub fn get(&self, id: FunctionId, key: &str) -> Result<f32> {
        let mut scratch = *self;
        scratch.field_mut(id, key).map(|value| *value)
    }

    pub fn set(&mut self, id: FunctionId, key: &str, value: f32) -> Result<()> {
        *self.field_mut(id, key)? = value;
        Ok(())
    }

    fn field_mut(&mut self, id: FunctionId, key: &str) -> Result<&mut f32> {
        let slot = match (id, key) {
            (FunctionId::SineWave, "amplitude") => &mut self.sine_wave.amplitude,
            (FunctionId::SineWave, "period_factor") => &mut self.sine_wave.period_factor,
            (FunctionId::MultiSineWave, "wave1_amplitude") => {
                &mut self.multi_sine_wave.wave1.amplitude
            }
            (FunctionId::MultiSineWave, "wave1_period_factor") => {
                &mut self.multi_sine_wave.wave1.period_factor
            }
            (FunctionId::MultiSineWave, "wave2_amplitude") => {
                &mut self.multi_sine_wave.wave2.amplitude
            }
            (FunctionId::MultiSineWave, "wave2_period_factor") => {
                &mut self.multi_sine_wave.wave2.period_factor
            }
            (FunctionId::MultiSineWave, "wave3_amplitude") => {
                &mut self.multi_sine_wave.wave3.amplitude
            }
            (FunctionId::MultiSineWave, "wave3_period_factor") => {
                &mut self.multi_sine_wave.wave3.period_factor
            }
            (FunctionId::SimplexNoise, "speed") => &mut self.simplex_noise.speed,
            (FunctionId::Ripple, "amplitude") => &mut self.ripple.amplitude,
            (FunctionId::Sphere, "speed") => &mut self.sphere.speed,
            (FunctionId::Sphere, "min_radius") => &mut self.sphere.min_radius,
            (FunctionId::Sphere, "max_radius") => &mut self.sphere.max_radius,
            (FunctionId::BandedSphere, "vertical") => &mut self.banded_sphere.vertical,
            (FunctionId::BandedSphere, "horizontal") => &mut self.banded_sphere.horizontal,
            _ => {
                return Err(GraphError::UnknownParameter {
                    function: id,
                    key: key.to_string(),
                });
            }
        };
        Ok(slot)
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

// Scale of the domain before the noise lookup
const NOISE_SPATIAL_SCALE: f32 = 1.7;
// Height of the noise surface
const NOISE_HEIGHT: f32 = 0.75;

pub fn sine_wave(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let p = params.sine_wave;
    let y = p.amplitude * (PI * (p.period_factor * (u + v + t))).sin();
    Vec3::new(u, y, v)
}

pub fn multi_sine_wave(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let MultiSineWaveParams {
        wave1,
        wave2,
        wave3,
    } = params.multi_sine_wave;
    let mut y = wave1.amplitude * (PI * (wave1.period_factor * (u + 0.5 * t))).sin();
    y += wave2.amplitude * 0.5 * (2.0 * PI * (wave2.period_factor * (v + t))).sin();
    y += wave3.amplitude * (PI * (wave3.period_factor * (u + v + 0.25 * t))).sin();
    Vec3::new(u, y / 2.5, v)
}

pub fn simplex_noise(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let n = noise3(
        NOISE_SPATIAL_SCALE * u,
        NOISE_SPATIAL_SCALE * v,
        params.simplex_noise.speed * t,
    );
    Vec3::new(u, NOISE_HEIGHT * n, v)
}

pub fn ripple(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let d = (u * u + v * v).sqrt();
    let y = params.ripple.amplitude * (PI * (4.0 * d - t)).sin() / (2.0 + 10.0 * d);
    Vec3::new(u, y, v)
}

// Point on a sphere of radius `r`; u sweeps longitude, v latitude
#[inline]
fn spherical(u: f32, v: f32, r: f32) -> Vec3 {
    let s = r * (0.5 * PI * v).cos();
    Vec3::new(
        s * (PI * u).sin(),
        r * (0.5 * PI * v).sin(),
        s * (PI * u).cos(),
    )
}

pub fn sphere(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let p = params.sphere;
    let pulse = 0.5 + 0.5 * (PI * (p.speed * t)).sin();
    let r = p.min_radius + (p.max_radius - p.min_radius) * pulse;
    spherical(u, v, r)
}

pub fn banded_sphere(u: f32, v: f32, t: f32, params: &ShapeParameters) -> Vec3 {
    let p = params.banded_sphere;
    let r = 0.9 + 0.1 * (PI * (p.vertical * u + p.horizontal * v + t)).sin();
    spherical(u, v, r)
}

pub fn banded_star_torus(u: f32, v: f32, t: f32, _params: &ShapeParameters) -> Vec3 {
    let r1 = 0.7 + 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let r2 = 0.15 + 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    let s = r1 + r2 * (PI * v).cos();
    Vec3::new(
        s * (PI * u).sin(),
        r2 * (PI * v).sin(),
        s * (PI * u).cos(),
    )
}
