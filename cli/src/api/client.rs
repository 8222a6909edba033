use crate::config::Config;
use crate::error::Error;
use eyre::WrapErr;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a zeta name becomes a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP client bound to the control service
#[derive(Clone)]
pub struct Client {
    config: Config,
    client: reqwest::Client,
}

impl Client {
    pub(crate) fn new(config: Config) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .wrap_err("Failed to build the HTTP client")?;

        Ok(Client { config, client })
    }

    /// Full URL of a control service path
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        log::info!("GET {}", self.url(path));
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        log::info!("POST {}", self.url(path));
        self.client.post(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        log::info!("DELETE {}", self.url(path));
        self.client.delete(self.url(path))
    }

    /// Send a request built ahead of time
    pub async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.client.execute(request).await
    }
}

/// Escape a zeta name so it stays one path segment
///
/// Names made of dots only are rejected: URL parsing resolves them (even as `%2E`)
/// as relative segments, so the request would reach another endpoint.
pub fn segment(name: &str) -> Result<String, Error> {
    if !name.is_empty() && name.chars().all(|c| c == '.') {
        return Err(Error::new(
            &format!("Zeta name '{name}' cannot be used in a URL path"),
            Some("Names made only of dots are resolved as relative path segments."),
        ));
    }

    Ok(utf8_percent_encode(name, PATH_SEGMENT).to_string())
}
