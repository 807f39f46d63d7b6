//! Inter-state difference reporting.

use crate::error::InvalidInput;
use crate::property::{PropertyKind, UnitSystem};
use crate::state::SteamState;

/// Signed per-property differences between two resolved states
/// (state 2 − state 1), expressed in the shared working unit system.
///
/// A pure numeric report: it carries no region information, and region
/// mismatches between the two states are not special-cased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaReport {
    pub units: UnitSystem,
    pub pressure: f64,
    pub temperature: f64,
    pub quality: f64,
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub specific_volume: f64,
    pub entropy: f64,
}

impl DeltaReport {
    /// Keyed access to the differences.
    pub fn difference(&self, kind: PropertyKind) -> f64 {
        match kind {
            PropertyKind::Pressure => self.pressure,
            PropertyKind::Temperature => self.temperature,
            PropertyKind::Quality => self.quality,
            PropertyKind::SpecificInternalEnergy => self.internal_energy,
            PropertyKind::SpecificEnthalpy => self.enthalpy,
            PropertyKind::SpecificVolume => self.specific_volume,
            PropertyKind::SpecificEntropy => self.entropy,
        }
    }
}

/// Compute the property-by-property difference `s2 − s1`.
///
/// Both states must have been resolved under the same unit system; this
/// step never converts across systems on the caller's behalf.
pub fn delta(s1: &SteamState, s2: &SteamState) -> Result<DeltaReport, InvalidInput> {
    if s1.units != s2.units {
        return Err(InvalidInput::UnitSystemMismatch {
            first: s1.units,
            second: s2.units,
        });
    }

    Ok(DeltaReport {
        units: s1.units,
        pressure: s2.pressure - s1.pressure,
        temperature: s2.temperature - s1.temperature,
        quality: s2.quality - s1.quality,
        internal_energy: s2.internal_energy - s1.internal_energy,
        enthalpy: s2.enthalpy - s1.enthalpy,
        specific_volume: s2.specific_volume - s1.specific_volume,
        entropy: s2.entropy - s1.entropy,
    })
}
