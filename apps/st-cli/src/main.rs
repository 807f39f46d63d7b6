use clap::{Parser, Subcommand, ValueEnum};
use st_core::{StResult, ensure_finite};
use st_steam::{
    CoolPropSteamTable, PropertyKind, PropertyPairInput, PropertyValue, UnitSystem, convert, delta,
    resolve, unit_label,
};

mod report;

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "steamstate CLI - two-state steam property calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitsArg {
    Si,
    English,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Si => UnitSystem::Si,
            UnitsArg::English => UnitSystem::English,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single state from two properties
    Resolve {
        /// Unit system for inputs and outputs
        #[arg(long, value_enum, default_value = "si")]
        units: UnitsArg,
        /// Two property assignments, e.g. p=1.0 t=100.0
        #[arg(required = true, num_args = 2, value_parser = parse_assignment)]
        state: Vec<PropertyValue>,
    },
    /// Resolve two states and report their differences
    Compare {
        /// Unit system for inputs and outputs
        #[arg(long, value_enum, default_value = "si")]
        units: UnitsArg,
        /// State 1 property assignments, e.g. p=1.0 t=100.0
        #[arg(long, required = true, num_args = 2, value_parser = parse_assignment)]
        state1: Vec<PropertyValue>,
        /// State 2 property assignments, e.g. p=1.0 t=200.0
        #[arg(long, required = true, num_args = 2, value_parser = parse_assignment)]
        state2: Vec<PropertyValue>,
    },
    /// Re-express a property value in another unit system
    Convert {
        /// Unit system the value is given in
        #[arg(long, value_enum)]
        from: UnitsArg,
        /// Unit system to convert to
        #[arg(long, value_enum)]
        to: UnitsArg,
        /// Property assignment, e.g. h=2675.0
        #[arg(value_parser = parse_assignment)]
        value: PropertyValue,
    },
}

/// Parse a `prop=value` token into a typed property selection.
///
/// Short codes and full names are both accepted; text codes exist only at
/// this presentation boundary.
fn parse_assignment(token: &str) -> Result<PropertyValue, String> {
    let (name, raw) = token
        .split_once('=')
        .ok_or_else(|| format!("expected prop=value, got '{token}'"))?;

    let kind = match name.trim().to_lowercase().as_str() {
        "p" | "pressure" => PropertyKind::Pressure,
        "t" | "temperature" => PropertyKind::Temperature,
        "x" | "quality" => PropertyKind::Quality,
        "u" | "internal-energy" => PropertyKind::SpecificInternalEnergy,
        "h" | "enthalpy" => PropertyKind::SpecificEnthalpy,
        "v" | "volume" => PropertyKind::SpecificVolume,
        "s" | "entropy" => PropertyKind::SpecificEntropy,
        other => return Err(format!("unknown property '{other}'")),
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("could not parse numeric value from '{raw}'"))?;

    Ok(PropertyValue::new(kind, value))
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Single warning line; nothing partial was printed before this
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> StResult<()> {
    match cli.command {
        Commands::Resolve { units, state } => cmd_resolve(units.into(), &state),
        Commands::Compare {
            units,
            state1,
            state2,
        } => cmd_compare(units.into(), &state1, &state2),
        Commands::Convert { from, to, value } => cmd_convert(from.into(), to.into(), value),
    }
}

fn cmd_resolve(units: UnitSystem, state: &[PropertyValue]) -> StResult<()> {
    let table = CoolPropSteamTable::new();
    let input = PropertyPairInput::new(state[0], state[1], units);
    let resolved = resolve(&table, &input)?;

    println!("{}", report::format_state(&resolved));
    Ok(())
}

fn cmd_compare(
    units: UnitSystem,
    state1: &[PropertyValue],
    state2: &[PropertyValue],
) -> StResult<()> {
    let table = CoolPropSteamTable::new();

    // Resolve both states and the delta before printing anything, so a
    // failure never leaves a half-rendered report
    let s1 = resolve(&table, &PropertyPairInput::new(state1[0], state1[1], units))?;
    let s2 = resolve(&table, &PropertyPairInput::new(state2[0], state2[1], units))?;
    let report = delta(&s1, &s2).map_err(st_steam::SteamError::from)?;

    println!("State 1");
    println!("{}", report::format_state(&s1));
    println!();
    println!("State 2");
    println!("{}", report::format_state(&s2));
    println!();
    println!("State Change");
    println!("{}", report::format_delta(&report));
    Ok(())
}

fn cmd_convert(from: UnitSystem, to: UnitSystem, value: PropertyValue) -> StResult<()> {
    let v = ensure_finite(value.value, "property value")?;
    let converted = convert(v, value.kind, from, to);

    println!(
        "{} = {:.5} {} = {:.5} {}",
        value.kind,
        v,
        unit_label(value.kind, from),
        converted,
        unit_label(value.kind, to),
    );
    Ok(())
}
