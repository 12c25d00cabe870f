//! Command-line host for the virt-foo device model.
//!
//! This binary plays the part of the platform around the device. It performs:
//! 1. **Probe:** The canonical driver handshake against a freshly built platform.
//! 2. **Script run:** Replays an access script (see [`script`]) and prints every result.
//!
//! After each access the level of the Foo interrupt line is printed alongside the value.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use virtfoo_core::common::{AccessType, AccessWidth, BusError, ConfigError};
use virtfoo_core::soc::devices::virt_foo::regs::{REG_CMD, REG_ID, REG_INIT, REG_INT_STATUS};
use virtfoo_core::{Config, System};

mod script;

use script::{Op, ScriptError};

#[derive(Parser, Debug)]
#[command(
    name = "foo-sim",
    author,
    version,
    about = "Drive the virt-foo MMIO device model",
    long_about = "Build a platform with a virt-foo device on its bus and exercise it.\n\nExamples:\n  foo-sim probe\n  foo-sim probe --config board.json\n  foo-sim run --script accesses.txt"
)]
struct Cli {
    /// Platform configuration (JSON). Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the driver handshake: enable, read identity, issue a command, acknowledge.
    Probe,

    /// Replay an access script.
    Run {
        /// Script path; one access per line.
        #[arg(short, long)]
        script: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("line {line}: {source}")]
    Access {
        line: usize,
        #[source]
        source: BusError,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let mut system = System::new(&config)?;
    info!(base = config.foo.base_addr, chip_id = config.foo.chip_id, "platform ready");

    match &cli.command {
        Commands::Probe => cmd_probe(&mut system, config.foo.base_addr, out),
        Commands::Run { script } => {
            let text = fs::read_to_string(script).map_err(|source| CliError::ReadScript {
                path: script.clone(),
                source,
            })?;
            cmd_run(&mut system, &text, out)
        }
    }
}

fn line_level(system: &System) -> &'static str {
    if system.irq_line().is_asserted() {
        "high"
    } else {
        "low"
    }
}

fn report(
    out: &mut impl Write,
    system: &System,
    kind: AccessType,
    addr: u64,
    width: AccessWidth,
    val: u64,
) -> io::Result<()> {
    let dir = match kind {
        AccessType::Read => "r",
        AccessType::Write => "w",
    };
    writeln!(
        out,
        "{dir} {addr:#010x} ({width}) {val:#010x}  irq={}",
        line_level(system)
    )
}

fn probe_read(system: &mut System, addr: u64, out: &mut impl Write) -> io::Result<u64> {
    let val = system.read(addr, AccessWidth::Word);
    report(out, system, AccessType::Read, addr, AccessWidth::Word, val)?;
    Ok(val)
}

fn probe_write(system: &mut System, addr: u64, val: u64, out: &mut impl Write) -> io::Result<()> {
    system.write(addr, AccessWidth::Word, val);
    report(out, system, AccessType::Write, addr, AccessWidth::Word, val)
}

/// Runs the driver handshake against the Foo device at `base`.
fn cmd_probe(system: &mut System, base: u64, out: &mut impl Write) -> Result<(), CliError> {
    let gated = probe_read(system, base + REG_ID, out)?;
    probe_write(system, base + REG_INIT, 1, out)?;
    let enable_cause = probe_read(system, base + REG_INT_STATUS, out)?;
    let id = probe_read(system, base + REG_ID, out)?;
    probe_write(system, base + REG_CMD, 0xa5, out)?;
    let _ = probe_read(system, base + REG_CMD, out)?;
    let cmd_cause = probe_read(system, base + REG_INT_STATUS, out)?;

    writeln!(out)?;
    writeln!(out, "id before enable: {gated:#x}")?;
    writeln!(out, "chip id:          {id:#x}")?;
    writeln!(out, "enable cause:     {enable_cause:#x}")?;
    writeln!(out, "command cause:    {cmd_cause:#x}")?;
    writeln!(out, "irq edges:        {}", system.irq_line().assertions())?;
    Ok(())
}

/// Replays an access script.
fn cmd_run(system: &mut System, text: &str, out: &mut impl Write) -> Result<(), CliError> {
    for (line, op) in script::parse(text)? {
        match op {
            Op::Read { addr, width } => {
                let val = system
                    .bus
                    .try_read(addr, width)
                    .map_err(|source| CliError::Access { line, source })?;
                report(out, system, AccessType::Read, addr, width, val)?;
            }
            Op::Write { addr, val, width } => {
                system
                    .bus
                    .try_write(addr, width, val)
                    .map_err(|source| CliError::Access { line, source })?;
                report(out, system, AccessType::Write, addr, width, val)?;
            }
            Op::Reset => {
                system.reset();
                writeln!(out, "reset  irq={}", line_level(system))?;
            }
        }
    }
    Ok(())
}
