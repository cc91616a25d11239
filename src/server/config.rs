use std::{net::SocketAddr, path::PathBuf};

const PORT: u16 = 3000;
const DATA_FILE: &str = "db.json";

/// Where the server listens and which file it serves.
/// Both are fixed; nothing is read from the command line or environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub data_file: PathBuf
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: PORT, data_file: PathBuf::from(DATA_FILE) }
    }
}

impl ServerConfig {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
