//! Attach or detach a Lambda@Edge function on a real distribution:
//!
//! ```sh
//! LAMBDA_ARN=arn:aws:lambda:us-east-1:123456789012:function:edge-fn:1 \
//! CLOUDFRONT_DISTRIBUTION_ID=EDFDVBD6EXAMPLE \
//! cargo run --example attach_detach -- attach
//! ```
//!
//! Optional: EVENT_TYPE (defaults to viewer-request), DEBUG=true for
//! request/response logging, an `edge-binder.ron` settings file in the
//! working directory for region/endpoint/profile overrides.

use std::path::Path;

use anyhow::{Context, bail};
use aws_sdk_cloudfront::types::EventType;
use edge_binder_cloudfront::EdgeFunctionBinder;
use edge_binder_core::AwsClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let action = std::env::args().nth(1).unwrap_or_else(|| "attach".to_string());
    let function_arn = std::env::var("LAMBDA_ARN").context("LAMBDA_ARN is not set")?;
    let distribution_id =
        std::env::var("CLOUDFRONT_DISTRIBUTION_ID").context("CLOUDFRONT_DISTRIBUTION_ID is not set")?;
    let event_type = match std::env::var("EVENT_TYPE") {
        Ok(name) => EventType::try_parse(&name)?,
        Err(_) => EventType::ViewerRequest,
    };

    let config = AwsClientConfig::try_load(Path::new("edge-binder.ron"))?;
    let account_id = config.verify_sts().await?;
    tracing::info!(%account_id, event_type = ?event_type, "credentials verified");

    let mut binder = EdgeFunctionBinder::connect(&config, function_arn, event_type).await;
    if std::env::var("DEBUG").is_ok_and(|v| v == "true") {
        binder.enable_debugger();
    }

    let result = match action.as_str() {
        "attach" => binder.attach_to(&distribution_id).await?,
        "detach" => binder.detach_from(&distribution_id).await?,
        other => bail!("unknown action {other}, expected attach or detach"),
    };

    tracing::info!(
        status = result.distribution().map(|d| d.status.as_str()),
        e_tag = result.e_tag(),
        "distribution update accepted; propagation continues in the background"
    );

    Ok(())
}
