use checkip_domain::Config;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &Config) {
    let level = Level::from_str(&config.logging.level).unwrap_or(Level::INFO);

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    for quiet in ["hyper=warn", "tokio=warn"] {
        if let Ok(directive) = quiet.parse() {
            filter = filter.add_directive(directive);
        }
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
