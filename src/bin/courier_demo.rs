//! Courier network demo.
//!
//! Builds the fixed 26-node demonstration network, runs the critical edge
//! analysis between nodes `a` and `c`, and prints the number of critical
//! edges.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `COURIER_MAX_PATHS`: Path enumeration ceiling (default: unbounded)
//! - `COURIER_MAX_DEPTH`: Path length ceiling in edges (default: unbounded)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: json)
//!
//! ## Usage
//!
//! ```bash
//! LOG_FORMAT=pretty cargo run --bin courier_demo
//! ```

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use courier_trust::demo::courier_network;
use courier_trust::{CourierAnalyzer, SearchPolicy};

/// Initialize the tracing subscriber with JSON or pretty format.
///
/// Logs go to stderr so stdout carries only the result.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "courier_demo=info,courier_trust=info".into());

    if log_format == "pretty" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .flatten_event(true)
            )
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let policy = match SearchPolicy::from_env() {
        Ok(policy) => policy,
        Err(e) => {
            error!(error = %e, "Invalid search policy configuration");
            return ExitCode::FAILURE;
        }
    };

    let network = courier_network();
    let (Some(a), Some(c)) = (network.node('a'), network.node('c')) else {
        error!("Demo network is missing node a or c");
        return ExitCode::FAILURE;
    };

    info!(
        nodes = network.store.num_nodes(),
        edges = network.store.num_edges(),
        policy_hash = %policy.params_hash(),
        "Analyzing demo network"
    );

    let analyzer = CourierAnalyzer::with_policy(&network.store, policy);
    let report = analyzer.analyze(a, c);

    info!(
        total_paths = report.total_paths,
        secure_paths = report.secure_paths,
        fallback = ?report.fallback,
        truncated = report.truncated,
        fingerprint = %report.fingerprint(),
        "Analysis complete"
    );

    for edge in &report.edges {
        let (x, y) = edge.endpoints();
        info!(
            from = ?network.name_of(&x),
            to = ?network.name_of(&y),
            "Critical edge"
        );
    }

    println!("{}", report.len());
    ExitCode::SUCCESS
}
