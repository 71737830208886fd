//! GadgetBuddy CLI and HTTP server entry point.
//!
//! Binary name: `gbuddy`
//!
//! Parses CLI arguments, loads configuration and credentials, then dispatches
//! to the appropriate command handler or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use console::style;

use gadgetbuddy_observe::tracing_setup::{
    TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        default_filter: filter_for_verbosity(cli.verbose, cli.quiet).to_string(),
        enable_otel: cli.otel,
        ..TracingOptions::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Commands that need neither config nor credentials.
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "gbuddy", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Budget { text } => return cli::scoring::budget(&text.join(" "), cli.json),
        Commands::Tier { file } => return cli::scoring::tier(file, cli.json).await,
        _ => {}
    }

    let mut state = AppState::init().await?;

    match cli.command {
        Commands::Ask { command, query } => {
            cli::ask::ask(&state, command, &query.join(" "), cli.json).await?;
        }

        Commands::Tool { name, input } => {
            cli::tool::run_tool(&state, &name, &input, cli.json).await?;
        }

        Commands::RegisterCommands => {
            cli::discord::register_commands(&state, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let mut config = (*state.config).clone();
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            let addr = format!("{}:{}", config.server.host, config.server.port);
            state.config = std::sync::Arc::new(config);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, configured = ?state.configured, "server listening");

            if !cli.quiet {
                println!(
                    "  {} GadgetBuddy listening on {}",
                    style("⚡").bold(),
                    style(format!("http://{addr}")).cyan()
                );
                if state.api_key_hash.is_none() {
                    println!(
                        "  {}",
                        style("GADGETBUDDY_API_KEY is not set: the API is open").yellow()
                    );
                }
                println!("  {}", style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } | Commands::Budget { .. } | Commands::Tier { .. } => {
            unreachable!("handled above")
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
