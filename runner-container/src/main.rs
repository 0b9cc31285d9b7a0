use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::Utc;
use greeter_core::config::load_config;
use greeter_core::handler::{InvocationContext, handle};
use greeter_core::telemetry::init_tracing;
use serde_json::Value;
use tracing::info;

/// Entry point for invoking the greeter outside the Lambda control plane,
/// on container hosting services like AWS EKS, ECS, or a local shell.
///
/// What it does at a high-level:
///     Load config.
///     Read one event from a JSON file argument or stdin.
///     Invoke the handler once and print the response to stdout.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config(None).await?;
    config.validate()?;

    let args: Vec<String> = env::args().collect();
    let event = read_event(args.get(1).map(String::as_str))?;

    let invocation = InvocationContext {
        request_id: Some(format!("local-{}", Utc::now().timestamp_millis())),
    };

    let response = handle(&event, Some(&invocation), &config);
    info!("Invocation finished with status {}", response.status_code);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Missing or empty input counts as the empty event, so piping nothing in
/// still produces the default greeting.
fn read_event(path: Option<&str>) -> Result<Value> {
    let raw = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read event file {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read event from stdin")?;
            buffer
        }
    };

    if raw.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_str(&raw).context("Failed to parse event as JSON")
}
