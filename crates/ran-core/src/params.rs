//! Tunable antenna parameters and their legal ranges.
//!
//! # Design
//!
//! The three parameters the optimizer may change (transmit power, mechanical
//! tilt, azimuth) each have a `[min, max]` range and a quantization step.
//! All sampling and perturbation goes through [`Bounds`], so an out-of-range
//! value cannot be produced in the first place — bounds are enforced
//! constructively, not validated after the fact.

use crate::rng::SimRng;

// ── Bounds ───────────────────────────────────────────────────────────────────

/// A closed parameter range with a quantization step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min:  f64,
    pub max:  f64,
    pub step: f64,
}

/// Transmit power range: −20..30 dBm in 2 dBm steps.
pub const POWER: Bounds = Bounds { min: -20.0, max: 30.0, step: 2.0 };

/// Mechanical tilt range: −10..10° in 1° steps.
pub const TILT: Bounds = Bounds { min: -10.0, max: 10.0, step: 1.0 };

/// Azimuth range: 0..359° in 5° steps.
pub const AZIMUTH: Bounds = Bounds { min: 0.0, max: 359.0, step: 5.0 };

impl Bounds {
    /// Clamp `value` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Snap `value` onto the step grid anchored at `min`, then clamp.
    #[inline]
    pub fn quantize(&self, value: f64) -> f64 {
        let snapped = self.min + ((value - self.min) / self.step).floor() * self.step;
        self.clamp(snapped)
    }

    /// Draw a uniform sample from the range, quantized to the step.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        self.quantize(rng.gen_range(self.min..=self.max))
    }

    /// Perturb `value` by a uniform delta within ±half a step, then clamp.
    ///
    /// This is the mutation kernel: small enough that one mutation moves a
    /// gene at most one grid cell.
    #[inline]
    pub fn perturb(&self, value: f64, rng: &mut SimRng) -> f64 {
        self.clamp(value + rng.gen_range(-0.5..0.5) * self.step)
    }
}

// ── TunableParams ────────────────────────────────────────────────────────────

/// The gene triple for one antenna: the parameters the optimizer may vary.
///
/// `Copy` on purpose: crossover and mutation copy genes by value, so sibling
/// candidates can never alias each other's state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TunableParams {
    pub power_dbm:   f64,
    pub tilt_deg:    f64,
    pub azimuth_deg: f64,
}

impl TunableParams {
    /// Construct with each field clamped to its legal range.
    pub fn new(power_dbm: f64, tilt_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            power_dbm:   POWER.clamp(power_dbm),
            tilt_deg:    TILT.clamp(tilt_deg),
            azimuth_deg: AZIMUTH.clamp(azimuth_deg),
        }
    }

    /// Draw a uniformly random, step-quantized gene triple.
    pub fn sample(rng: &mut SimRng) -> Self {
        Self {
            power_dbm:   POWER.sample(rng),
            tilt_deg:    TILT.sample(rng),
            azimuth_deg: AZIMUTH.sample(rng),
        }
    }

    /// Return a perturbed copy: every field moved by a uniform delta within
    /// ±half its step, clamped to bounds.
    #[must_use]
    pub fn perturbed(self, rng: &mut SimRng) -> Self {
        Self {
            power_dbm:   POWER.perturb(self.power_dbm, rng),
            tilt_deg:    TILT.perturb(self.tilt_deg, rng),
            azimuth_deg: AZIMUTH.perturb(self.azimuth_deg, rng),
        }
    }

    /// `true` if every field lies within its legal range.
    pub fn in_bounds(&self) -> bool {
        self.power_dbm >= POWER.min
            && self.power_dbm <= POWER.max
            && self.tilt_deg >= TILT.min
            && self.tilt_deg <= TILT.max
            && self.azimuth_deg >= AZIMUTH.min
            && self.azimuth_deg <= AZIMUTH.max
    }
}
