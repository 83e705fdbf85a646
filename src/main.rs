use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flipfit::settings::Settings;
use flipfit::ui::app;

fn main() -> Result<()> {
    init_logging();
    let settings = Settings::load();
    app::run(settings)
}

/// Quiet unless RUST_LOG says otherwise; log lines go to stderr so they
/// stay off the alternate screen.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
