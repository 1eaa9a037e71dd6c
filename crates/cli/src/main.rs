// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # auberge
//!
//! Terminal front end for the booking engine.
//!
//! - `auberge quote` prices a stay locally, no backend needed
//! - `auberge rooms`, `auberge availability` and `auberge reviews` query
//!   the booking API at `--api-url` / `AUBERGE_API_URL`
//!
//! Log level follows `-v`/`-q`; `RUST_LOG` overrides it when set.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commands;

use auberge_api::{ClientConfig, DEFAULT_HOTEL_ID, HotelApiClient, TIMEOUT_VAR};
use auberge_domain::LineItem;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .without_time()
        .init();

    match args.run().await {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(name = "auberge", version, about = "Hotel booking engine tools")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the booking API
    #[arg(long, env = "AUBERGE_API_URL", global = true)]
    api_url: Option<String>,

    /// Hotel to query
    #[arg(long, env = "AUBERGE_HOTEL_ID", default_value = DEFAULT_HOTEL_ID, global = true)]
    hotel_id: String,

    /// Request timeout in seconds
    #[arg(long, env = TIMEOUT_VAR, default_value_t = 15, global = true)]
    timeout_secs: u64,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    async fn run(self) -> Result<()> {
        match &self.command {
            Command::Quote {
                check_in,
                check_out,
                rate,
                add_ons,
                tax_exempt,
            } => commands::quote(check_in, check_out, *rate, add_ons, *tax_exempt),
            Command::Rooms => commands::rooms(&self.client()?).await,
            Command::Availability {
                check_in,
                check_out,
                room_type,
            } => {
                commands::availability(&self.client()?, check_in, check_out, room_type.as_deref())
                    .await
            }
            Command::Reviews => commands::reviews(&self.client()?).await,
        }
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn client(&self) -> Result<HotelApiClient> {
        let api_url: &str = self
            .api_url
            .as_deref()
            .ok_or_else(|| eyre!("--api-url or AUBERGE_API_URL is required for this command"))?;
        if self.timeout_secs == 0 {
            return Err(eyre!("--timeout-secs must be greater than zero"));
        }

        let config: ClientConfig = ClientConfig::new(api_url)?
            .with_hotel_id(self.hotel_id.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        HotelApiClient::new(config).wrap_err("Failed to create API client")
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Price a stay locally
    #[command(visible_alias = "q")]
    Quote {
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,

        /// Nightly room rate
        #[arg(long)]
        rate: f64,

        /// Add-on as LABEL:PRICE[:QUANTITY], repeatable
        #[arg(long = "add-on", value_parser = commands::parse_add_on)]
        add_ons: Vec<LineItem>,

        /// Skip TPS and TVQ
        #[arg(long)]
        tax_exempt: bool,
    },

    /// List room types
    Rooms,

    /// Show availability per room type for a stay
    #[command(visible_alias = "a")]
    Availability {
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,

        /// Only show this room type
        #[arg(long)]
        room_type: Option<String>,
    },

    /// List guest reviews
    Reviews,
}
