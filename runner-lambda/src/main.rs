use greeter_core::config::{GreeterConfig, load_config};
use greeter_core::handler::{GreetingResponse, InvocationContext, handle};
use greeter_core::telemetry::init_tracing;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

pub async fn lambda_handler(
    event: LambdaEvent<Value>,
    config: &GreeterConfig,
) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();
    let invocation = InvocationContext {
        request_id: Some(context.request_id),
    };

    // Failures surface as the 500 payload, never as an invocation error.
    Ok(handle(&payload, Some(&invocation), config))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = load_config(None).await?;
    config.validate()?;

    info!("Greeter runtime starting");
    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        lambda_handler(event, config).await
    }))
    .await
}
