use crate::api::client::segment;
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};
use crate::writer::pretty;
use serde_json::Value;

#[derive(clap::Args, Clone)]
pub(crate) struct PsCommand {
    /// Only show the metadata of this zeta
    #[arg(value_name = "ZETA_NAME")]
    name: Option<String>,
}

impl Runnable for PsCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        PsRunner {
            command: self.clone(),
            context: context.clone(),
        }
    }
}

struct PsRunner {
    command: PsCommand,
    context: Context,
}

impl Runner for PsRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Pretty-prints the metadata the control service returns
    ///
    /// Without a name the request goes to `/zeta/meta/` and the service decides what it lists.
    async fn run(&mut self) -> Result<(), Error> {
        let path = format!(
            "/zeta/meta/{}",
            segment(self.command.name.as_deref().unwrap_or_default())?
        );
        let client = self.api_client()?;

        let spinner = Logger::spinner("Fetching zeta metadata");
        let response = client.get(&path).send().await;
        spinner.finish_and_clear();

        let response =
            response.map_err(|e| Error::transport("Unable to retrieve zeta information", e))?;

        if !response.status().is_success() {
            return Err(Error::status("Unable to retrieve zeta information", response).await);
        }

        let body = response.text().await.map_err(|e| {
            self.error(Some("Unable to read response body"), None, Some(e.into()))
        })?;

        log::debug!("Got response from {path}: {body}");

        let metadata: Value = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse {body}: {e:?}");
            Error::new("Unable to format json", Some(&e.to_string()))
        })?;

        self.writer().text(&format!("{}\n", pretty(&metadata)?))?;
        self.writer().json(metadata)
    }
}
