use dotenv_flow::dotenv_flow;
use eyre::{bail, Result};
use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};
use trust_triangle::{run_demo, DemoConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    let config = DemoConfig::from_env()?;

    // Enable logging
    config_tracing(config.log_level);

    // eyre reports the error itself on exit
    let outcome = run_demo(&config).await.inspect_err(|err| {
        if let Some(details) = error_details(err) {
            tracing::error!("error details: {details}");
        }
    })?;

    if !outcome.result.verified {
        bail!("credential {} did not verify", outcome.credential.id.unwrap_or_default());
    }

    Ok(())
}

fn error_details(err: &credentials::Error) -> Option<String> {
    err.details().map(|details| format!("{details:#}"))
}

fn config_tracing(level: Level) {
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("trust_triangle", level)
        .with_target("credentials", level)
        .with_target("did_utils", level)
        .with_default(level.min(Level::WARN));

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_error_details_are_pretty_printed() {
        let err = credentials::Error::Signing {
            message: "failed to sign credential".to_string(),
            details: Some(json!({ "keyId": "did:key:z6Mk#z6Mk" })),
        };
        let details = error_details(&err).unwrap();

        assert!(details.contains("\"keyId\": \"did:key:z6Mk#z6Mk\""));
        assert!(!details.contains("failed to sign credential"));

        let err = credentials::Error::MalformedCredential("no issuer".to_string());
        assert!(error_details(&err).is_none());
    }
}
