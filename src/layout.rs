//! Reproducible placement of decorative elements.
//!
//! Every recipe starts a fresh generator from its seed and draws values in a fixed order,
//! so the same (seed, count) pair always yields the same layout, whether it is computed
//! on the server or in the browser. Reordering the draws changes every element after the
//! first one, so the order below is part of the contract.

use cgmath::Vector2;
use slice_of_array::prelude::*;

use crate::{
    modutil::{js_round, snap},
    mulberry32::Mulberry32,
};

/// Brand-aligned gradient stops for orbs: purple, blue, teal-blue and a purple-blue blend.
pub const ORB_PALETTES: [(&str, &str); 4] = [
    ("rgba(124, 58, 237, 0.6)", "rgba(99, 40, 210, 0.2)"),
    ("rgba(59, 130, 246, 0.6)", "rgba(37, 99, 235, 0.2)"),
    ("rgba(16, 185, 129, 0.4)", "rgba(59, 130, 246, 0.2)"),
    ("rgba(124, 58, 237, 0.5)", "rgba(59, 130, 246, 0.3)"),
];

/// Number of distinct drift keyframes orbs cycle through.
pub const ORB_DRIFT_VARIANTS: usize = 4;

/// Anything placed at a percentage offset inside its container.
pub trait Placement {
    /// `x` is the CSS `left` percentage, `y` is `top`.
    fn position(&self) -> Vector2<f64>;
}

/// Large blurred gradient circle drifting behind content.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub position: Vector2<f64>,
    /// Diameter in pixels
    pub size: u32,
    /// Blur radius in pixels
    pub blur: u32,
    pub opacity: f64,
    /// Animation duration in seconds
    pub duration: u32,
    /// Animation delay in seconds
    pub delay: u32,
    /// Which drift keyframe to use, 1-based
    pub drift_index: usize,
    pub colors: (&'static str, &'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridDot {
    /// Snapped to 5% steps so dots sit on grid intersections
    pub position: Vector2<f64>,
    pub delay: f64,
    pub duration: f64,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleTint {
    White,
    Brand,
    Accent,
}

impl ParticleTint {
    fn from_draw(r: f64) -> Self {
        if r > 0.66 {
            Self::Accent
        } else if r > 0.33 {
            Self::Brand
        } else {
            Self::White
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Brand => "brand",
            Self::Accent => "accent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector2<f64>,
    pub size: u32,
    pub delay: f64,
    pub duration: f64,
    pub tint: ParticleTint,
}

impl Placement for Orb {
    fn position(&self) -> Vector2<f64> {
        self.position
    }
}

impl Placement for GridDot {
    fn position(&self) -> Vector2<f64> {
        self.position
    }
}

impl Placement for Particle {
    fn position(&self) -> Vector2<f64> {
        self.position
    }
}

pub fn generate_orbs(seed: i32, count: usize) -> Vec<Orb> {
    let mut rng = Mulberry32::new(seed);
    (0..count)
        .map(|i| {
            let left = 10. + rng.next_f64() * 70.;
            let top = 5. + rng.next_f64() * 70.;
            Orb {
                position: Vector2::new(left, top),
                size: 300 + js_round(rng.next_f64() * 200.) as u32,
                blur: 80 + js_round(rng.next_f64() * 40.) as u32,
                opacity: 0.07 + rng.next_f64() * 0.05,
                duration: 35 + js_round(rng.next_f64() * 25.) as u32,
                delay: js_round(rng.next_f64() * 10.) as u32,
                drift_index: i % ORB_DRIFT_VARIANTS + 1,
                colors: ORB_PALETTES[i % ORB_PALETTES.len()],
            }
        })
        .collect()
}

pub fn generate_grid_dots(seed: i32, count: usize) -> Vec<GridDot> {
    let mut rng = Mulberry32::new(seed);
    (0..count)
        .map(|_| {
            let left = snap(rng.next_f64(), 20.) * 100.;
            let top = snap(rng.next_f64(), 20.) * 100.;
            GridDot {
                position: Vector2::new(left, top),
                delay: rng.next_f64() * 8.,
                duration: 3. + rng.next_f64() * 4.,
                size: 2. + rng.next_f64() * 2.,
            }
        })
        .collect()
}

pub fn generate_particles(seed: i32, count: usize) -> Vec<Particle> {
    let mut rng = Mulberry32::new(seed);
    (0..count)
        .map(|_| {
            // The tint draw comes first even though it is applied last.
            let tint = ParticleTint::from_draw(rng.next_f64());
            let left = js_round(rng.next_f64() * 100.);
            let top = js_round(rng.next_f64() * 100.);
            Particle {
                position: Vector2::new(left, top),
                size: 1 + js_round(rng.next_f64() * 2.) as u32,
                delay: rng.next_f64() * 10.,
                duration: 6. + rng.next_f64() * 8.,
                tint,
            }
        })
        .collect()
}

/// Flattens positions into `[x0, y0, x1, y1, ...]` for bulk transfer to JS.
pub fn positions_array<P: Placement>(items: &[P]) -> Vec<f64> {
    let pairs: Vec<[f64; 2]> = items.iter().map(|p| p.position().into()).collect();
    pairs.flat().to_vec()
}
