use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub books_path: PathBuf,
    pub docs_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let books_path = env::var("BOOKS_PATH").unwrap_or_else(|_| "data/books.yml".to_string());
        let docs_dir = env::var("DOCS_DIR").unwrap_or_else(|_| "docs".to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            books_path: PathBuf::from(books_path),
            docs_dir: PathBuf::from(docs_dir),
        })
    }
}
