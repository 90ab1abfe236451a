use std::env;
use std::net::SocketAddr;

use eventlink_shared::share::DEFAULT_LINK_HOST;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
const DEFAULT_PREFIX: &str = "/Prod";

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host placed in generated share URLs
    pub link_host: String,
    /// Route prefix; API Gateway stages mount the service under `/Prod`
    pub route_prefix: String,
    pub bind_addr: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            link_host: DEFAULT_LINK_HOST.to_string(),
            route_prefix: String::new(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let link_host = env::var("LINK_HOST")
            .ok()
            .map(|host| host.trim().trim_end_matches('/').to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_LINK_HOST.to_string());

        // If REMOVE_BASE_PATH is set to true, don't add the /Prod prefix
        let remove_base_path = env::var("REMOVE_BASE_PATH")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);
        let route_prefix = if remove_base_path {
            String::new()
        } else {
            DEFAULT_PREFIX.to_string()
        };

        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().unwrap_or_else(|err| {
            log::warn!(
                "Invalid BIND_ADDR {:?} ({}), falling back to {}",
                raw_addr,
                err,
                DEFAULT_BIND_ADDR
            );
            SocketAddr::from(([127, 0, 0, 1], 3001))
        });

        Self {
            link_host,
            route_prefix,
            bind_addr,
        }
    }
}
