use crate::constants::{DAMPING, MASS, STIFFNESS};
use crate::error::FlickError;

/// Damped harmonic oscillator parameters shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            damping: DAMPING,
            mass: MASS,
        }
    }
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, FlickError> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(FlickError::InvalidStiffness(stiffness));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(FlickError::InvalidDamping(damping));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(FlickError::InvalidMass(mass));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// ζ = c / (2·√(k·m)); below 1 the spring overshoots and rings.
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    #[inline]
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Undamped natural frequency ω₀ = √(k/m) in rad/s.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_underdamped() {
        let p = SpringParams::default();
        let zeta = p.damping_ratio();
        assert!((zeta - 27.0 / (2.0 * 700.0_f64.sqrt())).abs() < 1e-12);
        assert!(p.is_underdamped());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            SpringParams::new(0.0, 1.0, 1.0),
            Err(FlickError::InvalidStiffness(0.0))
        );
        assert_eq!(
            SpringParams::new(1.0, -1.0, 1.0),
            Err(FlickError::InvalidDamping(-1.0))
        );
        assert!(matches!(
            SpringParams::new(1.0, 1.0, f64::NAN),
            Err(FlickError::InvalidMass(_))
        ));
    }
}
