use std::env;

/// Bind address for the catalog's HTTP listener.
///
/// Environment variables:
/// - SERVICE_IP: interface to bind (default: "127.0.0.1")
/// - SERVICE_PORT: port to bind (default: "8080")
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());

        Self { ip, port }
    }

    /// Address the listener binds, as "ip:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(ip: &str, port: &str) -> ServerConfig {
        ServerConfig {
            ip: ip.to_string(),
            port: port.to_string(),
        }
    }

    #[test]
    fn should_join_ip_and_port_into_bind_address() {
        assert_eq!(config("127.0.0.1", "8080").bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_keep_custom_ip_and_port_verbatim() {
        assert_eq!(config("0.0.0.0", "9090").bind_address(), "0.0.0.0:9090");
    }
}
