//! Property, unit-system, and region enumerations.

use std::fmt;

/// The seven thermodynamic properties the calculator works with.
///
/// Used both to select which two inputs a caller supplies and to key the
/// fields of a resolved state or delta report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Pressure,
    Temperature,
    Quality,
    SpecificInternalEnergy,
    SpecificEnthalpy,
    SpecificVolume,
    SpecificEntropy,
}

impl PropertyKind {
    /// All kinds, in the fixed order reports are rendered in.
    pub const ALL: [PropertyKind; 7] = [
        Self::Pressure,
        Self::Temperature,
        Self::Quality,
        Self::SpecificInternalEnergy,
        Self::SpecificEnthalpy,
        Self::SpecificVolume,
        Self::SpecificEntropy,
    ];

    /// Conventional one-letter symbol (p, T, x, u, h, v, s).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pressure => "p",
            Self::Temperature => "T",
            Self::Quality => "x",
            Self::SpecificInternalEnergy => "u",
            Self::SpecificEnthalpy => "h",
            Self::SpecificVolume => "v",
            Self::SpecificEntropy => "s",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "Pressure"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Quality => write!(f, "Quality"),
            Self::SpecificInternalEnergy => write!(f, "Specific Internal Energy"),
            Self::SpecificEnthalpy => write!(f, "Specific Enthalpy"),
            Self::SpecificVolume => write!(f, "Specific Volume"),
            Self::SpecificEntropy => write!(f, "Specific Entropy"),
        }
    }
}

/// Working unit convention for inputs, oracle queries, and outputs.
///
/// SI here means the steam-table working set (bar, °C, kJ/kg, m³/kg), not
/// canonical base SI; English is the psi / °F / btu/lb family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    Si,
    English,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => write!(f, "SI"),
            Self::English => write!(f, "English"),
        }
    }
}

/// Physical region of a resolved state. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SubCooledLiquid,
    SaturatedTwoPhase,
    SuperHeatedVapor,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubCooledLiquid => write!(f, "sub-cooled liquid"),
            Self::SaturatedTwoPhase => write!(f, "saturated two-phase"),
            Self::SuperHeatedVapor => write!(f, "super-heated vapor"),
        }
    }
}
