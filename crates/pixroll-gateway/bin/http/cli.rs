use clap::Parser;
use pixroll_core::CacheTtl;
use pixroll_telemetry::LogFormat;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "PIXROLL_LISTEN_ADDR";
pub const CATEGORIES_DIR_ENV: &str = "PIXROLL_CATEGORIES_DIR";
pub const PUBLIC_DIR_ENV: &str = "PIXROLL_PUBLIC_DIR";
pub const CACHE_TTL_MS_ENV: &str = "PIXROLL_CACHE_TTL_MS";
pub const LOG_FORMAT_ENV: &str = "PIXROLL_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CATEGORIES_DIR: &str = "categories";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_CACHE_TTL_MS: &str = "30000";

#[derive(Debug, Parser)]
#[command(name = "pixroll-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = CATEGORIES_DIR_ENV, default_value = DEFAULT_CATEGORIES_DIR)]
    pub categories_dir: PathBuf,

    #[arg(long, env = PUBLIC_DIR_ENV, default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Cache TTL in milliseconds; zero, negative or non-numeric disables caching.
    #[arg(long, env = CACHE_TTL_MS_ENV, default_value = DEFAULT_CACHE_TTL_MS)]
    pub cache_ttl_ms: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn cache_ttl(&self) -> CacheTtl {
        CacheTtl::parse(&self.cache_ttl_ms)
    }
}
