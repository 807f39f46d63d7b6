//! Resolved-state and input records.

use crate::property::{PropertyKind, Region, UnitSystem};

/// One user-specified (property, value) selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValue {
    pub kind: PropertyKind,
    pub value: f64,
}

impl PropertyValue {
    pub fn new(kind: PropertyKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// The sole input to state resolution: two property selections plus the
/// working unit system they are expressed in.
///
/// The two kinds must differ; `resolve` rejects duplicates before touching
/// the oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyPairInput {
    pub first: PropertyValue,
    pub second: PropertyValue,
    pub units: UnitSystem,
}

impl PropertyPairInput {
    pub fn new(first: PropertyValue, second: PropertyValue, units: UnitSystem) -> Self {
        Self {
            first,
            second,
            units,
        }
    }
}

/// A fully resolved thermodynamic state.
///
/// All seven property fields are populated together by a single `resolve`
/// call; there is no partially-populated form. Values are in the working
/// units of `units`. A new state is produced per resolution; the resolver
/// never mutates a previously returned one.
///
/// Invariants: `pressure > 0`; `quality` in [0, 1], exactly 0.0 for
/// sub-cooled liquid and exactly 1.0 for super-heated vapor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamState {
    pub units: UnitSystem,
    pub region: Region,
    pub pressure: f64,
    pub temperature: f64,
    pub quality: f64,
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub specific_volume: f64,
    pub entropy: f64,
}

impl SteamState {
    /// Keyed access to the property fields.
    pub fn property(&self, kind: PropertyKind) -> f64 {
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
