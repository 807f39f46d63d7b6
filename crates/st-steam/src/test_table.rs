//! Deterministic in-memory steam table for unit tests.
//!
//! Not a physical model: the saturation curve and property lines are simple
//! monotone formulas chosen so tests can predict exact interpolation
//! results. Values are generated in SI working units and converted to the
//! requested system, so unit-scaled behavior is exercised too.

use crate::oracle::{OracleResult, PropertySet, SteamTable};
use crate::property::{PropertyKind, UnitSystem};
use crate::units::convert;

/// Fixture atmospheric pressure; Tsat(FAKE_ATM_BAR) is exactly 100 °C.
pub const FAKE_ATM_BAR: f64 = 1.01325;

pub struct FakeSteamTable;

impl FakeSteamTable {
    fn pressure_bar(units: UnitSystem, pressure: f64) -> f64 {
        convert(pressure, PropertyKind::Pressure, units, UnitSystem::Si)
    }

    fn tsat_c(p_bar: f64) -> f64 {
        100.0 * (p_bar / FAKE_ATM_BAR).powf(0.25)
    }

    fn to_units(set: PropertySet, units: UnitSystem) -> PropertySet {
        let si = UnitSystem::Si;
        PropertySet {
            internal_energy: convert(
                set.internal_energy,
                PropertyKind::SpecificInternalEnergy,
                si,
                units,
            ),
            enthalpy: convert(set.enthalpy, PropertyKind::SpecificEnthalpy, si, units),
            entropy: convert(set.entropy, PropertyKind::SpecificEntropy, si, units),
            specific_volume: convert(set.specific_volume, PropertyKind::SpecificVolume, si, units),
        }
    }
}

impl SteamTable for FakeSteamTable {
    fn name(&self) -> &str {
        "fake-steam-table"
    }

    fn saturation_temperature(&self, units: UnitSystem, pressure: f64) -> OracleResult<f64> {
        let p_bar = Self::pressure_bar(units, pressure);
        let t_c = Self::tsat_c(p_bar);
        Ok(convert(t_c, PropertyKind::Temperature, UnitSystem::Si, units))
    }

    fn saturated_liquid(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet> {
        let p_bar = Self::pressure_bar(units, pressure);
        Ok(Self::to_units(
            PropertySet {
                internal_energy: 400.0 + p_bar,
                enthalpy: 420.0 + p_bar,
                entropy: 1.3,
                specific_volume: 0.001,
            },
            units,
        ))
    }

    fn saturated_vapor(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet> {
        let p_bar = Self::pressure_bar(units, pressure);
        Ok(Self::to_units(
            PropertySet {
                internal_energy: 2500.0 + p_bar,
                enthalpy: 2670.0 + p_bar,
                entropy: 7.3,
                specific_volume: 1.6 / p_bar,
            },
            units,
        ))
    }

    fn at_pressure_temperature(
        &self,
        units: UnitSystem,
        pressure: f64,
        temperature: f64,
    ) -> OracleResult<PropertySet> {
        let p_bar = Self::pressure_bar(units, pressure);
        let t_c = convert(temperature, PropertyKind::Temperature, units, UnitSystem::Si);
        Ok(Self::to_units(
            PropertySet {
                internal_energy: 4.0 * t_c + p_bar,
                enthalpy: 4.2 * t_c + p_bar,
                entropy: 0.01 * t_c,
                specific_volume: 0.001 + 1e-5 * t_c / p_bar,
            },
            units,
        ))
    }
}
