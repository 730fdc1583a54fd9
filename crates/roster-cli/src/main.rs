//! `roster`: resolve the membership roster from the member directory.
//!
//! Reads `roster.toml` (or the path given with `--config`) and fetches a
//! snapshot from the backend API or a snapshot file.
//!
//! # Usage
//!
//! ```text
//! roster resolve date --as-of 2024-01-01
//! roster resolve periods
//! roster resolve featured --year 2081
//! roster serve
//! ```

mod settings;
mod source;

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use roster_api::ApiState;
use roster_core::{date, directory::MemberDirectory, resolve};
use serde::Serialize;
use settings::Settings;
use source::Source;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Membership roster resolver")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml", env = "ROSTER_CONFIG")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Resolve one view and print it as JSON.
  Resolve {
    #[command(subcommand)]
    view: View,
  },
  /// Serve the read-only roster API.
  Serve,
}

#[derive(Subcommand)]
enum View {
  /// Board and committees split into current and previous by leaving date.
  Date {
    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,
  },
  /// Board and committees grouped by transition period.
  Periods,
  /// Staff split into current and previous by leaving date.
  Staff {
    #[arg(long)]
    as_of: Option<NaiveDate>,
  },
  /// Top officers of the period running in `year`.
  Featured {
    /// Period year; defaults to this year plus `period_year_offset`.
    #[arg(long)]
    year: Option<i32>,
  },
  /// Board members for the homepage strip, newest record first.
  Board,
  /// Raw member listing, optionally restricted to one role type.
  Members {
    #[arg(long = "type")]
    kind: Option<String>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `resolve` output stays pipeable.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;
  let source = Source::from_settings(&settings).context("failed to build directory client")?;

  match cli.command {
    Command::Resolve { view } => resolve_view(view, &source, &settings).await,
    Command::Serve => serve(source, settings).await,
  }
}

// ─── Resolve ──────────────────────────────────────────────────────────────────

async fn resolve_view(view: View, source: &Source, settings: &Settings) -> anyhow::Result<()> {
  let config = &settings.roster;
  let members = source
    .fetch_members()
    .await
    .context("failed to fetch members")?;

  match view {
    View::Date { as_of } => {
      let as_of = as_of.unwrap_or_else(date::today);
      print_json(&resolve::resolve_date_scoped(&members, as_of, config))
    }
    View::Periods => {
      let periods = fetch_periods(source).await?;
      print_json(&resolve::resolve_period_scoped(&members, &periods, config))
    }
    View::Staff { as_of } => {
      let as_of = as_of.unwrap_or_else(date::today);
      print_json(&resolve::resolve_staff(&members, as_of))
    }
    View::Featured { year } => {
      let year = year.unwrap_or_else(|| date::today().year() + settings.period_year_offset);
      let periods = fetch_periods(source).await?;
      print_json(&resolve::featured_officers(&members, &periods, year, config))
    }
    View::Board => print_json(&resolve::recent_board(&members)),
    View::Members { kind } => {
      let role = resolve::role_filter(kind.as_deref());
      print_json(&resolve::filter_by_role(&members, role.as_ref()))
    }
  }
}

async fn fetch_periods(
  source: &Source,
) -> anyhow::Result<Vec<roster_core::person::TransitionPeriod>> {
  source
    .fetch_transition_periods()
    .await
    .context("failed to fetch transition periods")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  let out = serde_json::to_string_pretty(value).context("failed to serialise view")?;
  println!("{out}");
  Ok(())
}

// ─── Serve ────────────────────────────────────────────────────────────────────

async fn serve(source: Source, settings: Settings) -> anyhow::Result<()> {
  let address = format!("{}:{}", settings.host, settings.port);
  let mut state = ApiState::new(source, settings.roster);
  state.period_year_offset = settings.period_year_offset;

  let app = axum::Router::new().nest("/api", roster_api::api_router(state));

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
