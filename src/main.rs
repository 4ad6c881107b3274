use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{Calculator, CalculatorState, copy_to_clipboard};
use zcalc::config::Config;
use zcalc::input::{dispatch_all, parse_keys};
use zcalc::ui::{DisplaySnapshot, render_screen};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "A keyboard-driven calculator")]
struct Cli {
    /// Key script to replay, e.g. "12+3<Enter>". Reads scripts from stdin when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print a JSON snapshot instead of the text panel
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let mut calculator = Calculator::new(config.significant_digits);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.keys {
        Some(script) => {
            run_script(&mut calculator, script);
            print_state(&mut out, calculator.state(), &config, cli.json)?;
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                run_script(&mut calculator, &line);
                print_state(&mut out, calculator.state(), &config, cli.json)?;
            }
        }
    }

    if cli.copy {
        copy_result(calculator.state());
    }

    Ok(())
}

fn run_script(calculator: &mut Calculator, script: &str) {
    let keys = parse_keys(script);
    let inputs = dispatch_all(&keys);
    tracing::debug!("dispatching {} inputs from {} keys", inputs.len(), keys.len());
    calculator.handle_all(inputs);
}

fn print_state(
    out: &mut impl Write,
    state: &CalculatorState,
    config: &Config,
    json: bool,
) -> Result<()> {
    if json {
        let snapshot = DisplaySnapshot::from_state(state, &config.group_separator);
        writeln!(out, "{}", snapshot.to_json()?)?;
    } else {
        writeln!(
            out,
            "{}",
            render_screen(state, &config.group_separator, config.width)
        )?;
    }
    out.flush()?;
    Ok(())
}

fn copy_result(state: &CalculatorState) {
    let snapshot = DisplaySnapshot::from_state(state, "");
    match snapshot.clipboard {
        Some(text) => {
            if let Err(err) = copy_to_clipboard(&text) {
                tracing::warn!("{}", err);
            }
        }
        None => tracing::warn!("Not copying an error result"),
    }
}
