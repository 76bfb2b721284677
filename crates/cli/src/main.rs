use anyhow::Context;
use checkip_domain::CliOverrides;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "checkip")]
#[command(version)]
#[command(about = "checkip - shows the caller's IP address and checks it against a domain's A/AAAA records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, env = "HOST")]
    bind: Option<String>,

    /// Public URL of the IPv4-only site
    #[arg(long, env = "V4URL", value_name = "URL")]
    v4_url: Option<String>,

    /// Public URL of the IPv6-only site
    #[arg(long, env = "V6URL", value_name = "URL")]
    v6_url: Option<String>,

    /// Public URL of the dual-stack site
    #[arg(long, env = "V4N6URL", value_name = "URL")]
    v4n6_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            v4_url: self.v4_url.clone(),
            v6_url: self.v6_url.clone(),
            dual_stack_url: self.v4n6_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting checkip v{}", env!("CARGO_PKG_VERSION"));

    let app_state = di::build_app_state(&config)?;

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_address))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
