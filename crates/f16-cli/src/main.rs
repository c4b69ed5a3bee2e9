use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use f16_core::{Control, Error, State};
use f16_dynamics::FlightModel;

/// Installs the HIFI aero data set and runs one `step`, printing the
/// resulting state derivative and auxiliary outputs as JSON.
#[derive(Parser, Debug)]
#[command(name = "f16-cli", version, about)]
struct Args {
    /// Directory containing the five axis files and 44 coefficient tables.
    data_dir: PathBuf,

    /// Path to a JSON-encoded `State`. Defaults to a level-flight trim
    /// point at 15000 ft / 500 ft/s if omitted.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Path to a JSON-encoded `Control`. Defaults to zero deflections and
    /// 1000 lbf of thrust if omitted.
    #[arg(long)]
    control: Option<PathBuf>,

    /// Leading-edge-flap deflection, degrees.
    #[arg(long, default_value_t = 0.0)]
    d_lef: f64,
}

fn default_state() -> State {
    State {
        north: 0.0,
        east: 0.0,
        alt: 15000.0,
        phi: 0.0,
        theta: 0.0,
        psi: 0.0,
        vt: 500.0,
        alpha: 0.05,
        beta: 0.0,
        p: 0.0,
        q: 0.0,
        r: 0.0,
    }
}

fn default_control() -> Control {
    Control {
        thrust: 1000.0,
        elevator_deg: 0.0,
        aileron_deg: 0.0,
        rudder_deg: 0.0,
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Maps each core error kind to a distinct exit code so a calling script
/// can tell install failures apart from a bad query without scraping
/// stderr text.
fn exit_code_for(err: &Error) -> u8 {
    match err {
        Error::NotFound { .. } => 2,
        Error::Malformed { .. } => 3,
        Error::InvalidAxis { .. } => 4,
        Error::OutOfGrid { .. } => 5,
        Error::NotInitialized => 6,
    }
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(model_err) = err.downcast_ref::<Error>() {
                eprintln!("error: {model_err}");
                ExitCode::from(exit_code_for(model_err))
            } else {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut model = FlightModel::new(Box::new(f16_core::FacadeLogSink));

    info!("installing aero data from {}", args.data_dir.display());
    model.install(&args.data_dir)?;

    let state = match &args.state {
        Some(path) => load_json(path)?,
        None => default_state(),
    };
    let control = match &args.control {
        Some(path) => load_json(path)?,
        None => default_control(),
    };

    info!("stepping");
    let (state_dot, extras) = model.step(&state, &control, args.d_lef)?;

    let report = serde_json::json!({
        "state_dot": state_dot,
        "extras": extras,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    model.uninstall();
    Ok(())
}
