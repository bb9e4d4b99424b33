//! # nwszones
//!
//! A CLI tool that fetches the National Weather Service forecast zone list
//! and prints it to stdout as a column-aligned table.
//!
//! ## Overview
//!
//! nwszones is built on top of nwszoneslib and performs one fetch-and-render
//! pass per run: a single GET against the zones endpoint, extraction into
//! normalized records, and table rendering sorted by state and name. There
//! is no retry, no caching, and no background operation.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch and print the zones table
//! nwszones
//!
//! # Output as JSON instead of a table
//! nwszones --output json
//!
//! # Point at a mock endpoint (testing)
//! nwszones --url http://127.0.0.1:8080/zones
//!
//! # Identify with a custom User-Agent
//! nwszones --user-agent "my-tool/1.0 (me@example.com)"
//! ```
//!
//! A fetch failure is reported via printed text: the error detail goes to
//! stderr and a failure sentence to stdout, and the process still exits 0.

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use console::style;
use nwszoneslib::{
    extract_records, fetch_zones, render_table, sort_records, FetchConfig, ZoneRecord,
};

/// Printed to stdout when the fetch fails.
const FAILURE_MESSAGE: &str = "Failed to retrieve or process NWS zone data.";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("nwszones")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch NWS forecast zones and print them as an aligned table")
        .arg(
            Arg::new("url")
                .long("url")
                .help("Override the zones endpoint URL"),
        )
        .arg(
            Arg::new("user-agent")
                .long("user-agent")
                .help("Override the User-Agent header sent to the API"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build fetch configuration from matches, starting from the defaults
fn build_config(matches: &ArgMatches) -> FetchConfig {
    let mut config = FetchConfig::new();
    if let Some(url) = matches.get_one::<String>("url") {
        config = config.url(url);
    }
    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        config = config.user_agent(user_agent);
    }
    config
}

/// Render records in the requested format. JSON output uses the same
/// (state, name) sort order as the table.
fn render_output(records: Vec<ZoneRecord>, format: &str) -> Result<String, anyhow::Error> {
    if format == "json" {
        let mut sorted = records;
        sort_records(&mut sorted);
        Ok(serde_json::to_string_pretty(&sorted)?)
    } else {
        Ok(render_table(&records))
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let config = build_config(&matches);
    let format = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("table");

    let payload = match fetch_zones(&config) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error fetching data from NWS API: {e}")).red()
            );
            println!("{FAILURE_MESSAGE}");
            // Failures are reported via printed text, not exit codes
            return ExitCode::SUCCESS;
        }
    };

    let records = extract_records(&payload);
    match render_output(records, format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
