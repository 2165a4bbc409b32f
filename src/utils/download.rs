use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::blocking::Client;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{IoContext, ManagerError};

/// Fetches a URL into a local file. The engine only talks to the network
/// through this trait so tests can serve fixtures instead.
pub trait Transport {
    fn download(&self, url: &str, dest: &Path) -> Result<(), ManagerError>;
}

/// Blocking HTTP transport. Builds a fresh client for every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    user_agent: String,
}

impl HttpTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    fn progress_bar(&self, total_size: u64) -> ProgressBar {
        let pb = ProgressBar::new(total_size);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}

impl Transport for HttpTransport {
    fn download(&self, url: &str, dest: &Path) -> Result<(), ManagerError> {
        debug!("GET {} -> {}", url, dest.display());

        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| ManagerError::network(url, e))?;

        let resp = client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ManagerError::network(url, e))?;

        let total_size = resp.content_length().unwrap_or(0);
        let pb = self.progress_bar(total_size);

        let mut file = File::create(dest).at(dest)?;
        let mut reader = pb.wrap_read(resp);
        io::copy(&mut reader, &mut file).map_err(|e| ManagerError::network(url, e))?;
        pb.finish_and_clear();

        debug!("Downloaded {} bytes from {}", total_size, url);
        Ok(())
    }
}
