use eyre::{eyre, WrapErr};
use std::time::Duration;
use url::Url;

/// Control service used when the URL is not given at runtime
///
/// Can be baked into the binary with `ZETA_API_URL` set at build time.
pub(crate) const DEFAULT_API_BASE: &str = match option_env!("ZETA_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Upper bound for a single request to the control service, in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: &str = "30";

/// Where and how the client talks to the control service
#[derive(Clone, Debug)]
pub(crate) struct Config {
    /// Base URL without a trailing slash, paths are appended as is
    pub(crate) api_base: String,

    pub(crate) timeout: Duration,
}

impl Config {
    /// Both values come straight from the command line or environment and are validated here
    pub(crate) fn new(api_base: &str, timeout_secs: &str) -> eyre::Result<Self> {
        let url = Url::parse(api_base)
            .wrap_err_with(|| format!("Invalid control service URL '{api_base}'"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(eyre!(
                "Unsupported URL scheme '{}', expected http or https",
                url.scheme()
            ));
        }

        let timeout_secs: u64 = timeout_secs.trim().parse().wrap_err_with(|| {
            format!("Invalid timeout '{timeout_secs}', expected a number of seconds")
        })?;

        if timeout_secs == 0 {
            return Err(eyre!("Timeout must be at least one second"));
        }

        Ok(Config {
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Path appended to the base URL
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
