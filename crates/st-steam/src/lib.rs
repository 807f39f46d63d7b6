//! st-steam: two-state steam property resolution for steamstate.
//!
//! Provides:
//! - The seven-property data model (kinds, unit systems, regions, states)
//! - The state resolver: input-pair dispatch, region classification, and
//!   two-phase interpolation
//! - SI ↔ English working-unit conversion
//! - Inter-state delta reporting
//! - The `SteamTable` oracle trait and a CoolProp-backed water table
//!
//! # Architecture
//!
//! The resolver is pure logic over the `SteamTable` trait; steam-table
//! correlations live entirely behind that seam. `CoolPropSteamTable` (via
//! `rfluids`) is the shipped backend, but any table implementation works,
//! which is also how the unit tests run without a native backend.
//!
//! # Example
//!
//! ```no_run
//! use st_steam::{
//!     CoolPropSteamTable, PropertyKind, PropertyPairInput, PropertyValue, UnitSystem, delta,
//!     resolve,
//! };
//!
//! let table = CoolPropSteamTable::new();
//! let s1 = resolve(
//!     &table,
//!     &PropertyPairInput::new(
//!         PropertyValue::new(PropertyKind::Pressure, 1.0),
//!         PropertyValue::new(PropertyKind::Temperature, 100.0),
//!         UnitSystem::Si,
//!     ),
//! )
//! .unwrap();
//! let s2 = resolve(
//!     &table,
//!     &PropertyPairInput::new(
//!         PropertyValue::new(PropertyKind::Pressure, 1.0),
//!         PropertyValue::new(PropertyKind::Temperature, 200.0),
//!         UnitSystem::Si,
//!     ),
//! )
//! .unwrap();
//! let report = delta(&s1, &s2).unwrap();
//! println!("ΔT = {:.3}", report.temperature);
//! ```

pub mod coolprop;
pub mod delta;
pub mod error;
pub mod oracle;
pub mod property;
pub mod resolver;
pub mod state;
pub mod units;

#[cfg(test)]
mod test_table;

// Re-exports for ergonomics
pub use coolprop::CoolPropSteamTable;
pub use delta::{DeltaReport, delta};
pub use error::{InvalidInput, OracleError, SteamError, SteamResult};
pub use oracle::{OracleResult, PropertySet, SteamTable};
pub use property::{PropertyKind, Region, UnitSystem};
pub use resolver::{
    PRESSURE_MAX_BAR, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C, pressure_limit, resolve,
    temperature_limits,
};
pub use state::{PropertyPairInput, PropertyValue, SteamState};
pub use units::{convert, unit_label};
