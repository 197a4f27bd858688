//! Runtime configuration, read from the command line or the environment.

use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-service", version, about = "In-memory product catalogue over HTTP")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "PRODUCT_API_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Number of requests that may queue in front of the store
    #[arg(long, env = "PRODUCT_STORE_BUFFER", default_value = "32")]
    pub buffer_size: NonZeroUsize,
}
