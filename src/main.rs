//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `campus_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use campus_tracker::config::{
    Cli, Command, DashboardArgs, DashboardCommand, ServeArgs, UNLABELLED_POINT,
};
use campus_tracker::dashboard::{self, ApiClient, ShowOptions};
use campus_tracker::initialization::{init_client, init_logger_with};
use campus_tracker::server::LocationIn;
use campus_tracker::{render_static_map, run_server, Config, ServeOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting TRACKER_API_URL in .env without exporting it manually
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.global.log_level.clone();
    let log_format = cli.global.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let config = cli.global.to_config();

    match cli.command {
        Command::StaticMap(args) => match render_static_map(&config, &args.output).await {
            Ok(report) => {
                println!(
                    "✅ Map of {} with {} point{} written to {}",
                    report.location_name,
                    report.points,
                    if report.points == 1 { "" } else { "s" },
                    report.output.display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("campus_tracker error: {:#}", e);
                process::exit(1);
            }
        },
        Command::Serve(args) => {
            if let Err(e) = serve(&config, args).await {
                eprintln!("campus_tracker error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        Command::Dashboard(args) => {
            let api_url = args.api_url.clone();
            if let Err(e) = run_dashboard(&config, args).await {
                eprintln!("{}", dashboard::describe_error(&api_url, &e));
                process::exit(1);
            }
            Ok(())
        }
    }
}

async fn serve(config: &Config, args: ServeArgs) -> Result<()> {
    let options = ServeOptions {
        host: args.host,
        port: args.port,
        seed: !args.no_seed,
    };
    run_server(config, &options).await
}

async fn run_dashboard(config: &Config, args: DashboardArgs) -> Result<()> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let api = ApiClient::new(client, &args.api_url)?;

    match args.action {
        DashboardCommand::Show(show) => {
            let options = ShowOptions {
                preset: show.effective_preset(),
                start: show.start,
                end: show.end,
                map_output: show.map_output.clone(),
            };
            match show.refresh_secs {
                Some(secs) => dashboard::watch(&api, &options, secs).await,
                None => {
                    println!("{}", dashboard::show_once(&api, &options).await?);
                    Ok(())
                }
            }
        }
        DashboardCommand::Add(add) => {
            let point = LocationIn {
                latitude: add.latitude,
                longitude: add.longitude,
                label: add.label,
                source: add.source,
            };
            let stored = api.submit_point(&point).await?;
            println!(
                "✅ Point recorded: {} ({:.5}, {:.5}) at {}",
                if stored.label.is_empty() { UNLABELLED_POINT } else { &stored.label },
                stored.latitude,
                stored.longitude,
                dashboard::to_display_time(stored.created_at).format("%Y-%m-%d %H:%M:%S %:z")
            );
            Ok(())
        }
        DashboardCommand::Reset => {
            api.reset().await?;
            println!("✅ All points removed from {}", api.base_url());
            Ok(())
        }
    }
}
