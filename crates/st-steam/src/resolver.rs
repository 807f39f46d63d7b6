//! State resolution: input-pair dispatch, region classification, and
//! two-phase interpolation.

use crate::error::{InvalidInput, SteamResult};
use crate::oracle::{PropertySet, SteamTable};
use crate::property::{PropertyKind, Region, UnitSystem};
use crate::state::{PropertyPairInput, PropertyValue, SteamState};
use crate::units::{convert, unit_label};
use tracing::debug;

/// Upper pressure bound in bar (SI working units). The lower bound is
/// strictly exclusive: pressure must be > 0.
pub const PRESSURE_MAX_BAR: f64 = 300.0;

/// Temperature bounds in °C (SI working units), inclusive at both ends.
pub const TEMPERATURE_MIN_C: f64 = 0.0;
pub const TEMPERATURE_MAX_C: f64 = 600.0;

/// Absolute tolerance, in working-unit degrees Celsius, for deciding that a
/// supplied temperature sits on the saturation line.
const SATURATION_EPS_C: f64 = 1e-4;

/// Upper pressure bound expressed in the caller's unit system.
pub fn pressure_limit(units: UnitSystem) -> f64 {
    convert(
        PRESSURE_MAX_BAR,
        PropertyKind::Pressure,
        UnitSystem::Si,
        units,
    )
}

/// Temperature bounds expressed in the caller's unit system.
pub fn temperature_limits(units: UnitSystem) -> (f64, f64) {
    (
        convert(
            TEMPERATURE_MIN_C,
            PropertyKind::Temperature,
            UnitSystem::Si,
            units,
        ),
        convert(
            TEMPERATURE_MAX_C,
            PropertyKind::Temperature,
            UnitSystem::Si,
            units,
        ),
    )
}

/// Saturation-line tolerance in the caller's unit system.
///
/// The tolerance is a temperature interval, so the English value scales by
/// 9/5 without the 32 °F offset. Classification is therefore invariant
/// under a unit-system toggle.
fn saturation_epsilon(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Si => SATURATION_EPS_C,
        UnitSystem::English => SATURATION_EPS_C * 9.0 / 5.0,
    }
}

/// The fixed table of implemented input-pair templates.
///
/// Every unordered pair of kinds not listed here resolves to
/// `InvalidInput::UnsupportedPair`; the limitation is deliberate, not a
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairTemplate {
    PressureTemperature,
    PressureQuality,
}

fn template_for(a: PropertyKind, b: PropertyKind) -> Option<PairTemplate> {
    use PropertyKind::{Pressure, Quality, Temperature};
    match (a, b) {
        (Pressure, Temperature) | (Temperature, Pressure) => {
            Some(PairTemplate::PressureTemperature)
        }
        (Pressure, Quality) | (Quality, Pressure) => Some(PairTemplate::PressureQuality),
        _ => None,
    }
}

fn check_pressure(value: f64, units: UnitSystem) -> Result<(), InvalidInput> {
    let unit = unit_label(PropertyKind::Pressure, units);
    if value <= 0.0 {
        return Err(InvalidInput::PressureNotPositive { value, unit });
    }
    let limit = pressure_limit(units);
    if value > limit {
        return Err(InvalidInput::PressureAboveLimit { value, limit, unit });
    }
    Ok(())
}

fn check_temperature(value: f64, units: UnitSystem) -> Result<(), InvalidInput> {
    let unit = unit_label(PropertyKind::Temperature, units);
    let (min, max) = temperature_limits(units);
    if value < min {
        return Err(InvalidInput::TemperatureBelowLimit {
            value,
            limit: min,
            unit,
        });
    }
    if value > max {
        return Err(InvalidInput::TemperatureAboveLimit {
            value,
            limit: max,
            unit,
        });
    }
    Ok(())
}

/// Interpolate between saturated-liquid and saturated-vapor values with
/// quality as the weight: `prop = prop_f + x * (prop_g - prop_f)`.
fn interpolate(liquid: PropertySet, vapor: PropertySet, x: f64) -> PropertySet {
    let lerp = |f: f64, g: f64| f + x * (g - f);
    PropertySet {
        internal_energy: lerp(liquid.internal_energy, vapor.internal_energy),
        enthalpy: lerp(liquid.enthalpy, vapor.enthalpy),
        entropy: lerp(liquid.entropy, vapor.entropy),
        specific_volume: lerp(liquid.specific_volume, vapor.specific_volume),
    }
}

fn two_phase_properties(
    table: &dyn SteamTable,
    units: UnitSystem,
    pressure: f64,
    quality: f64,
) -> SteamResult<PropertySet> {
    let liquid = table.saturated_liquid(units, pressure)?;
    let vapor = table.saturated_vapor(units, pressure)?;
    Ok(interpolate(liquid, vapor, quality))
}

fn value_of(kind: PropertyKind, first: PropertyValue, second: PropertyValue) -> f64 {
    if first.kind == kind {
        first.value
    } else {
        second.value
    }
}

fn build_state(
    units: UnitSystem,
    region: Region,
    pressure: f64,
    temperature: f64,
    quality: f64,
    props: PropertySet,
) -> SteamState {
    SteamState {
        units,
        region,
        pressure,
        temperature,
        quality,
        internal_energy: props.internal_energy,
        enthalpy: props.enthalpy,
        specific_volume: props.specific_volume,
        entropy: props.entropy,
    }
}

/// Resolve a fully populated state from two independent properties.
///
/// Fails with [`InvalidInput`] when the pair duplicates a property, is not
/// one of the implemented templates, or violates the pressure/temperature
/// bounds; fails with [`crate::OracleError`] when the steam-table backend
/// cannot service a query. On success every field of the returned state is
/// populated; no partial state is ever returned.
pub fn resolve(table: &dyn SteamTable, input: &PropertyPairInput) -> SteamResult<SteamState> {
    let PropertyPairInput {
        first,
        second,
        units,
    } = *input;

    if first.kind == second.kind {
        return Err(InvalidInput::DuplicateProperty { kind: first.kind }.into());
    }
    for pv in [first, second] {
        if !pv.value.is_finite() {
            return Err(InvalidInput::NonFinite {
                kind: pv.kind,
                value: pv.value,
            }
            .into());
        }
    }

    let template =
        template_for(first.kind, second.kind).ok_or(InvalidInput::UnsupportedPair {
            first: first.kind,
            second: second.kind,
        })?;

    debug!(
        backend = table.name(),
        %units,
        first = first.kind.symbol(),
        v1 = first.value,
        second = second.kind.symbol(),
        v2 = second.value,
        "resolving state"
    );

    match template {
        PairTemplate::PressureTemperature => {
            let p = value_of(PropertyKind::Pressure, first, second);
            let t = value_of(PropertyKind::Temperature, first, second);
            resolve_pt(table, units, p, t)
        }
        PairTemplate::PressureQuality => {
            let p = value_of(PropertyKind::Pressure, first, second);
            let x = value_of(PropertyKind::Quality, first, second);
            resolve_px(table, units, p, x)
        }
    }
}

fn resolve_pt(
    table: &dyn SteamTable,
    units: UnitSystem,
    pressure: f64,
    temperature: f64,
) -> SteamResult<SteamState> {
    check_pressure(pressure, units)?;
    check_temperature(temperature, units)?;

    let tsat = table.saturation_temperature(units, pressure)?;

    let (region, quality) = if (temperature - tsat).abs() < saturation_epsilon(units) {
        // Quality is indeterminate from (p, T) on the saturation line;
        // 0.5 is the representative interior point.
        (Region::SaturatedTwoPhase, 0.5)
    } else if temperature > tsat {
        (Region::SuperHeatedVapor, 1.0)
    } else {
        (Region::SubCooledLiquid, 0.0)
    };
    debug!(tsat, %region, quality, "classified region");

    let props = match region {
        Region::SaturatedTwoPhase => two_phase_properties(table, units, pressure, quality)?,
        Region::SubCooledLiquid | Region::SuperHeatedVapor => {
            table.at_pressure_temperature(units, pressure, temperature)?
        }
    };

    Ok(build_state(units, region, pressure, temperature, quality, props))
}

fn resolve_px(
    table: &dyn SteamTable,
    units: UnitSystem,
    pressure: f64,
    quality: f64,
) -> SteamResult<SteamState> {
    check_pressure(pressure, units)?;

    // Documented asymmetry with the (p, T) path: out-of-range quality is
    // clamped, not rejected.
    let quality = quality.clamp(0.0, 1.0);

    let temperature = table.saturation_temperature(units, pressure)?;
    check_temperature(temperature, units)?;

    let props = two_phase_properties(table, units, pressure, quality)?;

    Ok(build_state(
        units,
        Region::SaturatedTwoPhase,
        pressure,
        temperature,
        quality,
        props,
    ))
}
