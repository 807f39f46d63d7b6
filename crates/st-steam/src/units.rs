//! SI ↔ English working-unit conversion.
//!
//! The calculator works in steam-table working units: bar / °C / kJ/kg /
//! kJ/(kg·°C) / m³/kg under SI, and psi / °F / btu/lb / btu/(lb·°F) /
//! ft³/lb under English units. Each law stores a single constant and divides
//! for the reverse direction, so `convert(convert(v, k, a, b), k, b, a)`
//! recovers `v` within floating-point tolerance.

use crate::property::{PropertyKind, UnitSystem};

/// bar -> psi
pub const BAR_TO_PSI: f64 = 14.503_773_773;

/// 1 btu/lb in kJ/kg (exact by definition of the IT btu).
pub const KJ_PER_KG_PER_BTU_PER_LB: f64 = 2.326;

/// 1 btu/(lb·°F) in kJ/(kg·°C).
pub const KJ_PER_KG_C_PER_BTU_PER_LB_F: f64 = 4.186_8;

/// m³/kg -> ft³/lb
pub const M3_PER_KG_TO_FT3_PER_LB: f64 = 16.018_463_37;

/// Convert a property value between unit systems.
///
/// Pure and total: identity when `from == to`, and quality is dimensionless
/// so it is never converted. Temperature is affine (°C ↔ °F); everything
/// else is a fixed linear factor.
pub fn convert(value: f64, kind: PropertyKind, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    let to_english = to == UnitSystem::English;

    match kind {
        PropertyKind::Quality => value,
        PropertyKind::Pressure => {
            if to_english {
                value * BAR_TO_PSI
            } else {
                value / BAR_TO_PSI
            }
        }
        PropertyKind::Temperature => {
            if to_english {
                value * 9.0 / 5.0 + 32.0
            } else {
                (value - 32.0) * 5.0 / 9.0
            }
        }
        // Internal energy and enthalpy share the energy-per-mass law.
        PropertyKind::SpecificInternalEnergy | PropertyKind::SpecificEnthalpy => {
            if to_english {
                value / KJ_PER_KG_PER_BTU_PER_LB
            } else {
                value * KJ_PER_KG_PER_BTU_PER_LB
            }
        }
        PropertyKind::SpecificEntropy => {
            if to_english {
                value / KJ_PER_KG_C_PER_BTU_PER_LB_F
            } else {
                value * KJ_PER_KG_C_PER_BTU_PER_LB_F
            }
        }
        PropertyKind::SpecificVolume => {
            if to_english {
                value * M3_PER_KG_TO_FT3_PER_LB
            } else {
                value / M3_PER_KG_TO_FT3_PER_LB
            }
        }
    }
}

/// Display label for a property in the given unit system.
///
/// Quality is dimensionless and labels as the empty string.
pub fn unit_label(kind: PropertyKind, units: UnitSystem) -> &'static str {
    let si = units == UnitSystem::Si;
    match kind {
        PropertyKind::Pressure => {
            if si {
                "bar"
            } else {
                "psi"
            }
        }
        PropertyKind::Temperature => {
            if si {
                "C"
            } else {
                "F"
            }
        }
        PropertyKind::Quality => "",
        PropertyKind::SpecificInternalEnergy | PropertyKind::SpecificEnthalpy => {
            if si {
                "kJ/kg"
            } else {
                "btu/lb"
            }
        }
        PropertyKind::SpecificVolume => {
            if si {
                "m^3/kg"
            } else {
                "ft^3/lb"
            }
        }
        PropertyKind::SpecificEntropy => {
            if si {
                "kJ/(kg C)"
            } else {
                "btu/(lb F)"
            }
        }
    }
}
