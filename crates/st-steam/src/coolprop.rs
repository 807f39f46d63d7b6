//! CoolProp-backed steam table.
//!
//! Adapter over the `rfluids` Water model. The calculator's working units
//! (bar/°C/kJ family, or their English counterparts) are translated to
//! CoolProp's SI base units at this boundary and back again, so the resolver
//! never sees pascals or kelvins. Saturation lines are queried as
//! quality-0 / quality-1 states at the given pressure.
//!
//! Thread-safe: rfluids Fluid instances are stateless and created per query.

use crate::error::OracleError;
use crate::oracle::{OracleResult, PropertySet, SteamTable};
use crate::property::{PropertyKind, UnitSystem};
use crate::units::convert;
use rfluids::prelude::*;

const KELVIN_OFFSET: f64 = 273.15;

pub struct CoolPropSteamTable {
    // Future: backend configuration (e.g., IF97 vs HEOS) could live here
}

impl CoolPropSteamTable {
    pub fn new() -> Self {
        Self {}
    }

    fn pressure_pa(units: UnitSystem, pressure: f64) -> f64 {
        let bar = convert(pressure, PropertyKind::Pressure, units, UnitSystem::Si);
        bar * 1e5
    }

    fn temperature_k(units: UnitSystem, temperature: f64) -> f64 {
        let celsius = convert(temperature, PropertyKind::Temperature, units, UnitSystem::Si);
        celsius + KELVIN_OFFSET
    }

    fn water_state(
        &self,
        input1: FluidInput,
        input2: FluidInput,
        context: &str,
    ) -> OracleResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(input1, input2)
            .map_err(|e| OracleError::Backend {
                message: format!("rfluids error for water at {context}: {e}"),
            })
    }

    /// Pull the four derived properties out of one backend state and express
    /// them in the caller's working units.
    fn property_set(mut fluid: Fluid, units: UnitSystem) -> OracleResult<PropertySet> {
        let u = fluid.internal_energy().map_err(|e| OracleError::Backend {
            message: format!("rfluids error getting internal energy: {e}"),
        })?;
        let h = fluid.enthalpy().map_err(|e| OracleError::Backend {
            message: format!("rfluids error getting enthalpy: {e}"),
        })?;
        let s = fluid.entropy().map_err(|e| OracleError::Backend {
            message: format!("rfluids error getting entropy: {e}"),
        })?;
        let rho = fluid.density().map_err(|e| OracleError::Backend {
            message: format!("rfluids error getting density: {e}"),
        })?;

        let si = UnitSystem::Si;
        // J/kg -> kJ/kg, J/(kg K) -> kJ/(kg C), density -> specific volume
        Ok(PropertySet {
            internal_energy: convert(
                u / 1e3,
                PropertyKind::SpecificInternalEnergy,
                si,
                units,
            ),
            enthalpy: convert(h / 1e3, PropertyKind::SpecificEnthalpy, si, units),
            entropy: convert(s / 1e3, PropertyKind::SpecificEntropy, si, units),
            specific_volume: convert(1.0 / rho, PropertyKind::SpecificVolume, si, units),
        })
    }

    fn saturation_set(
        &self,
        units: UnitSystem,
        pressure: f64,
        quality: f64,
    ) -> OracleResult<PropertySet> {
        let p_pa = Self::pressure_pa(units, pressure);
        let fluid = self.water_state(
            FluidInput::pressure(p_pa),
            FluidInput::quality(quality),
            &format!("P={p_pa} Pa, Q={quality}"),
        )?;
        Self::property_set(fluid, units)
    }
}

impl Default for CoolPropSteamTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamTable for CoolPropSteamTable {
    fn name(&self) -> &str {
        "coolprop-water"
    }

    fn saturation_temperature(&self, units: UnitSystem, pressure: f64) -> OracleResult<f64> {
        let p_pa = Self::pressure_pa(units, pressure);
        let mut fluid = self.water_state(
            FluidInput::pressure(p_pa),
            FluidInput::quality(0.0),
            &format!("P={p_pa} Pa, saturation"),
        )?;
        let t_k = fluid.temperature().map_err(|e| OracleError::Backend {
            message: format!("rfluids error getting temperature: {e}"),
        })?;
        Ok(convert(
            t_k - KELVIN_OFFSET,
            PropertyKind::Temperature,
            UnitSystem::Si,
            units,
        ))
    }

    fn saturated_liquid(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet> {
        self.saturation_set(units, pressure, 0.0)
    }

    fn saturated_vapor(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet> {
        self.saturation_set(units, pressure, 1.0)
    }

    fn at_pressure_temperature(
        &self,
        units: UnitSystem,
        pressure: f64,
        temperature: f64,
    ) -> OracleResult<PropertySet> {
        let p_pa = Self::pressure_pa(units, pressure);
        let t_k = Self::temperature_k(units, temperature);
        let fluid = self.water_state(
            FluidInput::pressure(p_pa),
            FluidInput::temperature(t_k),
            &format!("P={p_pa} Pa, T={t_k} K"),
        )?;
        Self::property_set(fluid, units)
    }
}
