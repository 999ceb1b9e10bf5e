use serde_json::json;
use thrust_estimator::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: thrust_estimator [--sweep] [--json] [ISP FUEL_MASS DRY_MASS MASS_FLOW]";

struct Options {
    input: ScenarioInput,
    sweep: bool,
    json: bool,
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut input = ScenarioInput::default();
    let mut sweep = false;
    let mut json = false;
    let mut positional = 0;

    for arg in args {
        match arg.as_str() {
            "--sweep" => sweep = true,
            "--json" => json = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => {
                let slot = match positional {
                    0 => &mut input.specific_impulse,
                    1 => &mut input.fuel_mass,
                    2 => &mut input.dry_mass,
                    3 => &mut input.mass_flow_rate,
                    _ => return Err(format!("unexpected argument '{}'\n{}", arg, USAGE)),
                };
                *slot = arg;
                positional += 1;
            }
        }
    }

    Ok(Options { input, sweep, json })
}

/// What one invocation produced. The sweep reads only ISP, Dry Mass and Fuel Mass,
/// so it can succeed while the burn calculation fails.
struct Outcome {
    calculation: Result<(BurnScenario, CalculationResult), EstimatorError>,
    sweep: Option<Result<SweepReport, EstimatorError>>,
}

fn evaluate(options: &Options, config: &PhysicsConfig) -> Outcome {
    let calculation = BurnScenario::parse(&options.input)
        .and_then(|scenario| Ok((scenario, scenario.evaluate(config)?)));
    let sweep = options
        .sweep
        .then(|| parse_sweep(&options.input, config).map(SweepReport::new));

    Outcome { calculation, sweep }
}

fn print_json(outcome: &Outcome) {
    let (result, burn_time, mass_ratio, error) = match &outcome.calculation {
        Ok((scenario, result)) => (
            Some(*result),
            Some(scenario.burn_time()),
            Some(scenario.mass_ratio()),
            None,
        ),
        Err(e) => (None, None, None, Some(e.to_string())),
    };
    let (sweep, sweep_error) = match &outcome.sweep {
        Some(Ok(report)) => (Some(report), None),
        Some(Err(e)) => (None, Some(e.to_string())),
        None => (None, None),
    };

    let output = json!({
        "result": result,
        "burn_time": burn_time,
        "mass_ratio": mass_ratio,
        "error": error,
        "sweep": sweep,
        "sweep_error": sweep_error,
    });
    println!("{}", output);
}

fn print_text(outcome: &Outcome) {
    if let Ok((scenario, result)) = &outcome.calculation {
        println!("{}", result);
        println!("Burn Time: {:.2} s", scenario.burn_time());
        println!("Mass Ratio: {:.3}", scenario.mass_ratio());
    }
    if let Some(Ok(report)) = &outcome.sweep {
        println!();
        print!("{}", report.render());
    }
}

/// Prints whatever succeeded, then returns the first failure.
fn run(options: &Options) -> Result<(), EstimatorError> {
    let outcome = evaluate(options, &PhysicsConfig::default());

    if options.json {
        print_json(&outcome);
    } else {
        print_text(&outcome);
    }

    let Outcome { calculation, sweep } = outcome;
    calculation?;
    if let Some(report) = sweep {
        report?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Input Error: {}", e);
        std::process::exit(1);
    }
}
