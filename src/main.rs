use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use creatorkit::adapters::{BrowserNavigator, CaptureAnalytics, ReqwestHttpClient, TracingAnalytics};
use creatorkit::api::ApiClient;
use creatorkit::cli::{parse_args, run_cli_command, version_line, CliCommand};
use creatorkit::config::ClientConfig;
use creatorkit::session::SessionManager;
use creatorkit::traits::{AnalyticsSink, HttpClient};

/// Logs go to stderr so command output stays pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: tracing init failed: {}", e);
    }
}

fn build_session(config: &ClientConfig) -> Result<SessionManager> {
    let http: Arc<dyn HttpClient> = Arc::new(
        ReqwestHttpClient::from_config(config)
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?,
    );

    let analytics: Arc<dyn AnalyticsSink> = match (&config.analytics_url, &config.analytics_key) {
        (Some(url), Some(key)) => Arc::new(CaptureAnalytics::new(http.clone(), url, key)),
        _ => Arc::new(TracingAnalytics),
    };
    let navigator = Arc::new(BrowserNavigator::new(config.resolved_login_url()));

    let api = ApiClient::from_config(config, http);
    Ok(SessionManager::new(api, analytics, navigator))
}

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Version needs no configuration or runtime
    if command == CliCommand::Version {
        println!("{}", version_line());
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();

    let config = ClientConfig::from_env();
    if config.api_url.is_none() {
        tracing::warn!("No API URL configured; requests will fail");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let session = build_session(&config)?;

    let result = runtime.block_on(async {
        let mut stdout = std::io::stdout();
        run_cli_command(command, &session, &mut stdout).await
    });

    // Let fire-and-forget analytics posts finish before exiting
    runtime.shutdown_timeout(std::time::Duration::from_secs(2));

    // color-eyre renders the report and its suggestion, and the exit code is 1
    result
}
