//! Server configuration from flags and environment

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cndie-web")]
#[command(about = "Cndie's iPhone Collection - storefront web server")]
#[command(version)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "CNDIE_WEB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CNDIE_WEB_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
