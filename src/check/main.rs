//! Command-line delivery zone check.
//!
//! With an address argument, checks it once. Without one, reads addresses
//! from stdin; `:map`, `:steps` and `:zones` show views of the last result.

mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zonecheck::config::Config;
use zonecheck::geocoder::NominatimGeocoder;
use zonecheck::ZoneSession;

use crate::repl::{handle_line, log_level, Outcome};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Check whether an address is inside a delivery zone")]
struct Args {
    /// Address to check; omit for interactive mode
    address: Option<String>,

    /// Zone/geocoder config file (TOML); built-in zones when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the map view (GeoJSON)
    #[arg(long)]
    map: bool,

    /// Also print the step-by-step calculation
    #[arg(long)]
    steps: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for results
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(log_level(args.verbose).into()),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load_or_default(args.config.as_deref())?;
    let geocoder = NominatimGeocoder::new(&config.geocoder)?;
    let mut session = ZoneSession::new(config.zones()?, geocoder)?;

    match args.address {
        Some(address) => {
            let mut commands = vec![address];
            if args.map {
                commands.push(":map".to_string());
            }
            if args.steps {
                commands.push(":steps".to_string());
            }
            for command in commands {
                let outcome = handle_line(&mut session, &command).await;
                print_outcome(&outcome);
                if outcome.is_failure() {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        None => {
            info!("Interactive mode, {} zones loaded", session.zones().len());
            run_interactive(&mut session).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_interactive(session: &mut ZoneSession<NominatimGeocoder>) -> Result<()> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    println!("Enter an address (:map, :steps, :zones, :quit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let outcome = handle_line(session, &line).await;
        if matches!(outcome, Outcome::Quit) {
            break;
        }
        print_outcome(&outcome);
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Output(text) => println!("{}", text),
        Outcome::NotFound => println!("{}", zonecheck::presentation::not_found_message()),
        Outcome::Failed(message) => eprintln!("error: {}", message),
        Outcome::Nothing | Outcome::Quit => {}
    }
}
