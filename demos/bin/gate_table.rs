//! Gate Table: inspect the QSCOUT native gates and their noise model
//!
//! Without a gate name, lists every gate in the emulator gate set. With one,
//! evaluates its duration, ideal unitary and noisy superoperator:
//!
//! ```text
//! gate-table                      # list all gates
//! gate-table --json               # registry as JSON
//! gate-table Sx q0                # noisy Sx on qubit 0
//! gate-table -s 2 MS 0 1 0 pi/2   # MS with a doubled duration
//! gate-table --idle 1.5           # idle channel for 1.5 gate times
//! ```

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qscout_demos::{
    format_superoperator, parse_gate_args, print_header, print_info, print_result, print_section,
    print_success,
};
use qscout_gates::GateAction;
use qscout_noise::{CallOptions, NoiseConfig, NoisyGateSet, qscout_gate_set};

#[derive(Parser, Debug)]
#[command(name = "gate-table")]
#[command(about = "Inspect the QSCOUT native gate set and its noise model")]
struct Args {
    /// Gate to evaluate; omit to list all gates
    gate: Option<String>,

    /// Gate arguments in declared order (qubits as `q0` or `0`, angles as
    /// numbers or `pi/2`). Options must come before the gate name.
    #[arg(allow_hyphen_values = true)]
    values: Vec<String>,

    /// Noise configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, env = "QSCOUT_CONFIG")]
    config: Option<String>,

    /// Duration multiplier
    #[arg(short, long)]
    stretch: Option<f64>,

    /// Print the idle channel for this duration instead
    #[arg(long)]
    idle: Option<f64>,

    /// Print the registry as JSON
    #[arg(long)]
    json: bool,

    /// Digits shown in matrices
    #[arg(long, default_value = "4")]
    precision: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = NoiseConfig::load(args.config.as_deref()).context("loading noise configuration")?;
    let gates = qscout_gate_set(config)?;
    debug!("Gate set ready: {} gates", gates.registry().len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(gates.registry())?);
        return Ok(());
    }

    print_header("QSCOUT Native Gates");
    print_result("Depolarization", config.depolarization);
    print_result("Rotation error", config.rotation_error);
    print_result("Phase error", config.phase_error);
    print_result("Multi-qubit depolarization", config.two_qubit_depolarization);

    if let Some(duration) = args.idle {
        print_section(&format!("Idle channel, duration {duration}"));
        let channel = gates.idle(duration)?;
        println!("{}", format_superoperator(&channel, args.precision));
        return Ok(());
    }

    match args.gate.as_deref() {
        Some(name) => show_gate(&gates, name, &args),
        None => {
            list_gates(&gates);
            Ok(())
        }
    }
}

fn list_gates(gates: &NoisyGateSet) {
    let registry = gates.registry();

    print_section("Boundary gates");
    for gate in registry.boundary() {
        println!("  {}", style(gate.name()).yellow());
    }

    print_section("Active gates");
    for gate in registry.active() {
        let family = gate
            .binding()
            .map(|b| b.family().to_string())
            .unwrap_or_default();
        println!("  {:<42} {}", gate.to_string(), style(family).dim());
    }

    println!();
    print_info(&format!(
        "{} idle twins (I_<name>) mirror the active gates",
        registry.idle().count()
    ));
    print_success(&format!("{} gates in total", registry.len()));
}

fn show_gate(gates: &NoisyGateSet, name: &str, args: &Args) -> anyhow::Result<()> {
    let signature = gates.registry().get(name)?;
    let gate_args = parse_gate_args(signature, &args.values)?;
    let options = CallOptions {
        stretch: args.stretch,
        locations: None,
    };

    print_section(&signature.to_string());

    let kind = match signature.action() {
        GateAction::Active(_) => "active",
        GateAction::Idle(_) => "idle",
        GateAction::Boundary => "boundary",
    };
    print_result("Kind", kind);

    let duration = gates.duration_with(name, &gate_args, &options)?;
    print_result("Duration", format!("{duration:.6}"));

    if signature.is_unitary() {
        let unitary = signature.ideal_unitary(&gate_args)?;
        print_section("Ideal unitary");
        for row in unitary.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|c| format!("{:>+.*}{:+.*}i", args.precision, c.re, args.precision, c.im))
                .collect();
            println!("  {}", cells.join("  "));
        }
    }

    let superoperator = gates.superoperator_with(name, &gate_args, &options)?;
    print_section("Noisy superoperator (Pauli basis)");
    println!("{}", format_superoperator(&superoperator, args.precision));

    Ok(())
}
