//! Runtime configuration, parsed from CLI flags with env-var fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// City autocomplete proxy over the Wunderground location API.
#[derive(Debug, Clone, Parser)]
#[command(name = "destinations", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "DESTINATIONS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Base URL of the autocomplete service.
    #[arg(
        long,
        env = "DESTINATIONS_UPSTREAM_URL",
        default_value = crate::upstream::DEFAULT_BASE_URL
    )]
    pub upstream_url: String,

    /// Timeout for a single upstream request, in seconds.
    #[arg(long, env = "DESTINATIONS_UPSTREAM_TIMEOUT_SECS", default_value_t = 5)]
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
