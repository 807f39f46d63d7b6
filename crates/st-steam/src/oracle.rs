//! Steam-table oracle interface.
//!
//! The resolver never implements steam correlations itself; it queries a
//! [`SteamTable`] backend for saturation lookups and single-phase property
//! values. All queries take the working unit system explicitly; there is no
//! process-wide unit mode to toggle.

use crate::error::OracleError;
use crate::property::UnitSystem;

/// Result type for oracle queries.
pub type OracleResult<T> = Result<T, OracleError>;

/// The four derived properties a single oracle lookup produces, batched so
/// one query serves the whole property set.
///
/// Values are in the working units of the system the query was made under:
/// kJ/kg, kJ/(kg·°C), m³/kg for SI; btu/lb, btu/(lb·°F), ft³/lb for English.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySet {
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub entropy: f64,
    pub specific_volume: f64,
}

/// Steam-table property backend.
///
/// Implementations must be thread-safe (`Send + Sync`); the two state
/// resolutions of a comparison are independent and may run in parallel.
/// All methods are total within the backend's documented validity range and
/// fail with [`OracleError`] outside it.
pub trait SteamTable: Send + Sync {
    /// Backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation temperature at the given pressure.
    fn saturation_temperature(&self, units: UnitSystem, pressure: f64) -> OracleResult<f64>;

    /// Saturated-liquid properties (quality 0) at the given pressure.
    fn saturated_liquid(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet>;

    /// Saturated-vapor properties (quality 1) at the given pressure.
    fn saturated_vapor(&self, units: UnitSystem, pressure: f64) -> OracleResult<PropertySet>;

    /// Single-phase properties at the given pressure and temperature.
    fn at_pressure_temperature(
        &self,
        units: UnitSystem,
        pressure: f64,
        temperature: f64,
    ) -> OracleResult<PropertySet>;
}
