use std::error::Error as StdError;

/// Display global error message in unified format
#[derive(Clone, Debug)]
pub struct Error(String, Option<String>);

impl Error {
    pub fn new(message: &str, details: Option<&str>) -> Self {
        Error(message.to_string(), details.map(|d| d.to_string()))
    }

    pub fn title(&self) -> &str {
        &self.0
    }

    pub fn details(&self) -> Option<&str> {
        self.1.as_deref()
    }

    /// The request never got a response: DNS, connect or timeout failure
    pub fn transport(message: &str, origin: reqwest::Error) -> Self {
        log::error!("{origin:?}");

        let hint = if origin.is_timeout() {
            "The control service did not respond in time."
        } else if origin.is_connect() {
            "Could not connect to the control service."
        } else {
            "The request could not be completed."
        };

        Error::new(
            message,
            Some(&format!("{hint}\n> cause: {}", chain(&origin))),
        )
    }

    /// The control service answered with a status the command does not accept
    ///
    /// Details carry the status line and the response body, when the latter is readable.
    pub async fn status(message: &str, response: reqwest::Response) -> Self {
        let status = response.status();
        let url = response.url().to_string();
        let mut details = format!("> status code: {status}");

        match response.text().await {
            Ok(body) if !body.is_empty() => details.push_str(&format!("\n> body: {body}")),
            Ok(_) => {}
            Err(err) => log::error!("Failed to read response body from {url}: {err:?}"),
        }

        log::error!("Unexpected status from {url}: {status}");
        Error::new(message, Some(&details))
    }
}

/// Display the message and details, as sort of a hint
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.1 {
            Some(details) => write!(f, "{}\n\n{}", self.0, console::style(details).dim()),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Implement std::error::Error trait for Error
impl std::error::Error for Error {}

/// Automatically convert all eyre error reports
///
/// Reports wrapped with an `Error` keep it, anything else becomes the title.
impl From<eyre::ErrReport> for Error {
    fn from(error: eyre::ErrReport) -> Self {
        error
            .downcast::<Error>()
            .unwrap_or_else(|err| Error::new(&format!("{err:#}"), None))
    }
}

/// Join an error with all of its sources, outermost first
fn chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }

    message
}
