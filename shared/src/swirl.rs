//! Geometry for the swirl decoration painted on top of the wheel angle.
//!
//! Nothing here affects which choice wins; the renderer only needs the
//! current velocity to decide how smeared the stripes look.

use std::f64::consts::TAU;

pub const SPIRAL_TURNS: f64 = 11.0;
pub const BAND_WIDTH: f64 = 0.62;
pub const SPIRAL_INNER_RADIUS: f64 = 6.0;
pub const SPIRAL_STEP: f64 = 0.016;
pub const TRAIL_FADE_ALPHA: f64 = 0.18;

const MAX_SMEAR: f64 = 0.65;

/// Per-frame look of the swirl, derived from the angular velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwirlStyle {
    pub smear: f64,
    pub alpha: f64,
    pub drift: f64,
}

impl SwirlStyle {
    pub fn for_velocity(velocity: f64) -> Self {
        let velocity = velocity.abs();
        let smear = (velocity * 65.0).clamp(0.0, MAX_SMEAR);
        Self {
            smear,
            alpha: 0.92 - smear * 0.35,
            drift: smear * 10.0 + velocity * 40.0,
        }
    }
}

/// One filled quad of the spiral, in wheel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwirlQuad {
    pub color_index: usize,
    pub corners: [(f64, f64); 4],
}

/// Archimedean spiral `r = a + b*theta` filling a disk of `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swirl {
    inner: f64,
    growth: f64,
    theta_max: f64,
}

impl Swirl {
    pub fn new(radius: f64) -> Self {
        let theta_max = TAU * SPIRAL_TURNS;
        Self {
            inner: SPIRAL_INNER_RADIUS,
            growth: (radius - 10.0).max(0.0) / theta_max,
            theta_max,
        }
    }

    pub fn radius_at(&self, theta: f64) -> f64 {
        self.inner + self.growth * theta
    }

    pub fn step_count(&self) -> usize {
        (self.theta_max / SPIRAL_STEP).ceil() as usize
    }

    pub fn quads(&self, style: SwirlStyle, color_count: usize) -> impl Iterator<Item = SwirlQuad> + '_ {
        let color_count = color_count.max(1);
        (0..self.step_count()).map(move |i| {
            let theta = i as f64 * SPIRAL_STEP;
            let next = theta + SPIRAL_STEP;
            let (r1, r2) = (self.radius_at(theta), self.radius_at(next));
            SwirlQuad {
                color_index: band_index(theta, style.drift, color_count),
                corners: [
                    polar(r1, theta),
                    polar(r1, next),
                    polar(r2, next),
                    polar(r2, theta),
                ],
            }
        })
    }
}

pub fn band_index(theta: f64, drift: f64, color_count: usize) -> usize {
    let band = ((theta + drift) / BAND_WIDTH).floor() as i64;
    band.rem_euclid(color_count.max(1) as i64) as usize
}

fn polar(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_at_rest() {
        let style = SwirlStyle::for_velocity(0.0);
        assert_eq!(style.smear, 0.0);
        assert!((style.alpha - 0.92).abs() < 1e-12);
        assert_eq!(style.drift, 0.0);
    }

    #[test]
    fn test_smear_saturates() {
        let style = SwirlStyle::for_velocity(5.0);
        assert_eq!(style.smear, MAX_SMEAR);
        assert!((style.alpha - (0.92 - MAX_SMEAR * 0.35)).abs() < 1e-12);
        assert!((style.drift - (6.5 + 200.0)).abs() < 1e-9);
    }

    #[test]
    fn test_band_index_wraps_colors() {
        assert_eq!(band_index(0.0, 0.0, 2), 0);
        assert_eq!(band_index(0.7, 0.0, 2), 1);
        assert_eq!(band_index(1.3, 0.0, 2), 0);
        assert_eq!(band_index(0.0, 0.7, 3), 1);
        assert_eq!(band_index(-0.1, 0.0, 2), 1);
        assert_eq!(band_index(5.0, 0.0, 0), 0);
    }

    #[test]
    fn test_spiral_reaches_rim() {
        let swirl = Swirl::new(300.0);
        assert_eq!(swirl.radius_at(0.0), SPIRAL_INNER_RADIUS);
        assert!((swirl.radius_at(TAU * SPIRAL_TURNS) - 296.0).abs() < 1e-9);

        let quads: Vec<SwirlQuad> = swirl.quads(SwirlStyle::for_velocity(0.0), 2).collect();
        assert_eq!(quads.len(), swirl.step_count());
        assert!(quads.iter().all(|q| q.color_index < 2));
    }
}
