use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset. Dev traces the HTTP layer
/// too; staging keeps app-level debug; prod is quiet.
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "loaddesk=debug,reqwest=debug,info",
        Environment::Staging => "loaddesk=debug,reqwest=info,info",
        Environment::Prod => "loaddesk=info,warn",
    }
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(env).into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    // Deployed environments (staging and prod) emit JSON for log ingestion;
    // dev stays human-readable.
    if env.is_dev() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    }

    tracing::info!("Logging initialized for {:?} environment", env);
}
