//! Plain-text state and delta reports.

use st_steam::{DeltaReport, PropertyKind, SteamState, UnitSystem, unit_label};

fn property_line(prefix: &str, kind: PropertyKind, value: f64, units: UnitSystem) -> String {
    // Specific volume gets extra places; it is orders of magnitude smaller
    let decimals: usize = if kind == PropertyKind::SpecificVolume {
        5
    } else {
        3
    };
    let label = unit_label(kind, units);
    if label.is_empty() {
        format!("{prefix}{kind} = {value:.decimals$}")
    } else {
        format!("{prefix}{kind} = {value:.decimals$} ({label})")
    }
}

/// Multi-line description of a resolved state: region first, then one line
/// per property with its unit label.
pub fn format_state(state: &SteamState) -> String {
    let mut lines = vec![format!("Region: {}", state.region)];
    for kind in PropertyKind::ALL {
        lines.push(property_line("", kind, state.property(kind), state.units));
    }
    lines.join("\n")
}

/// Multi-line description of the property differences between two states.
pub fn format_delta(report: &DeltaReport) -> String {
    PropertyKind::ALL
        .iter()
        .map(|&kind| property_line("Δ", kind, report.difference(kind), report.units))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_steam::Region;

    fn sample_state() -> SteamState {
        SteamState {
            units: UnitSystem::Si,
            region: Region::SuperHeatedVapor,
            pressure: 1.0,
            temperature: 150.0,
            quality: 1.0,
            internal_energy: 2582.9,
            enthalpy: 2776.6,
            specific_volume: 1.93673,
            entropy: 7.614,
        }
    }

    #[test]
    fn state_report_has_region_and_all_properties() {
        let text = format_state(&sample_state());
        assert!(text.starts_with("Region: super-heated vapor"));
        assert!(text.contains("Pressure = 1.000 (bar)"));
        assert!(text.contains("Specific Volume = 1.93673 (m^3/kg)"));
        // Quality is dimensionless: no label
        assert!(text.contains("Quality = 1.000\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn delta_report_prefixes_every_line() {
        let s1 = sample_state();
        let mut s2 = sample_state();
        s2.temperature = 250.0;
        s2.enthalpy = 2974.5;

        let report = st_steam::delta(&s1, &s2).unwrap();
        let text = format_delta(&report);
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().all(|line| line.starts_with('Δ')));
        assert!(text.contains("ΔTemperature = 100.000 (C)"));
    }
}
