// src/core/net.rs

// Blocking HTTP GET for sheet exports

use std::time::Duration;

use log::info;
use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::{Error, FetchError};

/// Anything that can hand back the body of a sheet export URL.
/// Production uses `HttpSource`; tests plug in canned text.
pub trait SheetSource {
    /// GET `url` and return the body of a 2xx response.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

impl SheetSource for HttpSource {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        info!("Response status: {}", status.as_u16());

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }
}

/// Source that always returns the same body. Handy for dry runs against a
/// saved export.
impl SheetSource for String {
    fn get_text(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.clone())
    }
}
