//! Config Pipeline: Maybe and Outcome end to end
//!
//! Run with: RUST_LOG=monoid_core=trace cargo run --example config_pipeline
//!
//! This example demonstrates:
//! - Looking up optional settings with `Maybe`
//! - Parsing them through the `Outcome::attempt` boundary
//! - Validating with `filter` / `filter_or`
//! - Unwrapping at the very end, and what the errors carry
//!
//! With `RUST_LOG` set, the library's trace events show where failures were
//! captured.

use std::collections::HashMap;
use std::error::Error as _;

use monoid_core::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
#[error("port {0} is privileged")]
struct PrivilegedPort(u16);

fn settings() -> HashMap<&'static str, &'static str> {
    HashMap::from([("port", "8080"), ("workers", "four"), ("admin_port", "22")])
}

fn lookup(settings: &HashMap<&'static str, &'static str>, key: &str) -> Maybe<&'static str> {
    settings.get(key).copied().into()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_default())
        .with_writer(std::io::stderr)
        .init();

    let settings = settings();

    println!("=== Config Pipeline ===\n");

    // -------------------------------------------------------------------------
    // Optional lookups
    // -------------------------------------------------------------------------
    println!("1. Optional lookups");
    println!("-------------------");

    let host = lookup(&settings, "host").unwrap_or("localhost");
    println!("host      = {host} (fallback)");

    let port = lookup(&settings, "port")
        .filter_map(|s| s.parse::<u16>().ok())
        .unwrap_or(80);
    println!("port      = {port}");

    match lookup(&settings, "timeout").unwrap() {
        Ok(v) => println!("timeout   = {v}"),
        Err(e) => println!("timeout   : {e}"),
    }
    println!();

    // -------------------------------------------------------------------------
    // Fallible parsing
    // -------------------------------------------------------------------------
    println!("2. Fallible parsing");
    println!("-------------------");

    let workers = lookup(&settings, "workers")
        .ok_or(Cause::msg("workers not set"))
        .try_map(|s| s.parse::<usize>())
        .inspect_err(|cause| println!("workers   : parse failed ({cause})"));

    let workers = workers.unwrap_or(1);
    println!("workers   = {workers} (fallback after failure)");
    println!();

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------
    println!("3. Validation");
    println!("-------------");

    let admin = lookup(&settings, "admin_port")
        .ok_or(Cause::msg("admin_port not set"))
        .try_map(|s| s.parse::<u16>())
        .and_then(|p| Outcome::pass(p).filter_or(|p| *p >= 1024, PrivilegedPort(p)));

    match admin.unwrap() {
        Ok(p) => println!("admin     = {p}"),
        Err(e) => {
            println!("admin     : {e}");
            if let Some(source) = e.source() {
                println!("  caused by: {source}");
            }
        }
    }

    let strict = Outcome::pass(port).filter(|p| *p % 2 == 1);
    println!(
        "odd port? {} ({})",
        strict.is_passing(),
        strict.cause().map(|c| c.to_string()).unwrap_or_default()
    );
    println!();

    // -------------------------------------------------------------------------
    // Back to Maybe
    // -------------------------------------------------------------------------
    println!("4. Discarding error detail");
    println!("--------------------------");

    let parsed: Vec<Maybe<u16>> = ["1", "x", "3"]
        .into_iter()
        .map(|s| Outcome::attempt(|| s.parse::<u16>()).passing())
        .collect();
    println!("parsed    = {parsed:?}");

    let total: u16 = parsed.into_iter().flatten().sum();
    println!("total     = {total}");
}
