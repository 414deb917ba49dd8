use futures_lite::future::block_on;
use tracing_subscriber::EnvFilter;

use interactive_server::clock::BootClock;
use interactive_server::config::{ServerConfig, OUTPUT_BUFFER_SIZE, UIP_BUFFER_SIZE};
use interactive_server::led::{HostPin, Led};
use interactive_server::routes::Dispatcher;
use interactive_server::server;

static BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");
static RUSTC_VERSION: &str = env!("VERGEN_RUSTC_SEMVER");

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    log::info!(
        "Basic init done. Built on {} with Rustc {}.",
        &BUILD_TIMESTAMP,
        &RUSTC_VERSION
    );

    let config = ServerConfig::from_env()?;
    log::info!(
        "Output buffer {OUTPUT_BUFFER_SIZE} bytes, input buffer {UIP_BUFFER_SIZE} bytes"
    );

    let led = match Led::new(HostPin::default()) {
        Ok(led) => led,
        Err(e) => match e {},
    };
    let mut dispatcher = Dispatcher::new(led, BootClock::new());

    let stack = edge_nal_std::Stack::new();
    let res = block_on(server::run(&config, &stack, &mut dispatcher));
    if let Err(e) = &res {
        log::error!("Server error: {:?}", e);
    }
    res
}
