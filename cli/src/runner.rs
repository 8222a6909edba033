use crate::{api::client::Client, config::Config, error::Error, writer::Writer};
use std::error::Error as StdError;

/// Everything a command gets from the command line besides its own arguments
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) api_base: String,
    pub(crate) timeout_secs: String,
    pub(crate) writer: Writer,
}

pub(crate) trait Runner {
    fn context(&self) -> &Context;

    /// Construct the API client instance
    ///
    /// Configuration is validated here, so commands that never reach the network do not depend on it.
    fn api_client(&self) -> Result<Client, Error> {
        let context = self.context();

        let config = Config::new(&context.api_base, &context.timeout_secs).map_err(|e| {
            self.error(
                Some("Invalid configuration"),
                Some(&format!("{e:#}")),
                Some(e.into()),
            )
        })?;

        Client::new(config).map_err(|e| self.error(None, None, Some(e.into())))
    }

    fn writer(&self) -> &Writer {
        &self.context().writer
    }

    /// Run the command
    ///
    /// Returns an error shown to the user in case of failure
    async fn run(&mut self) -> Result<(), Error>;

    /// Construct an error shown to the user
    fn error(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        origin: Option<Box<dyn StdError>>,
    ) -> Error {
        if let Some(origin) = origin {
            log::error!("{origin:?}");
        }

        if let Some(title) = title {
            Error::new(title, description)
        } else {
            Error::new(
                "Failed to run the command",
                Some("Run again with RUST_LOG=error to see what went wrong."),
            )
        }
    }
}

/// Return a runner for a command
pub(crate) trait Runnable {
    fn runner(&self, context: &Context) -> impl Runner;
}
