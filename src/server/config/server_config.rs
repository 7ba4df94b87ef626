use std::net::SocketAddr;
use std::path::PathBuf;

/// Options for the development server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served at `/`
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 8080,
            root: PathBuf::from("./site"),
        }
    }
}

impl ServerConfig {
    pub fn new(root: PathBuf, port: u16) -> Self {
        ServerConfig { root, port, ..Default::default() }
    }

    /// Parse the socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.address, self.port).parse()
    }

    /// Get the full URL (e.g., "http://localhost:8080/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost".to_string()
        } else if self.address.contains(':') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
