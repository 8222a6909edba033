use crate::api::client::segment;
use crate::api::run;
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};
use crate::writer::pretty;
use serde_json::Value;

#[derive(clap::Args, Clone)]
pub(crate) struct RunCommand {
    /// Name of the zeta function to call
    #[arg(value_name = "ZETA_NAME")]
    name: String,

    /// Parameters passed to the function, must be a JSON object
    #[arg(short, long, value_name = "JSON", default_value = "{}")]
    payload: String,
}

impl Runnable for RunCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        RunRunner {
            command: self.clone(),
            context: context.clone(),
        }
    }
}

struct RunRunner {
    command: RunCommand,
    context: Context,
}

impl Runner for RunRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Calls the function through the control service and prints what it returned
    ///
    /// The service cold-starts the function when needed, so the call can take a while.
    async fn run(&mut self) -> Result<(), Error> {
        let params = parse_payload(&self.command.payload)?;
        let name = &self.command.name;
        let path = format!("/zeta/run/{}", segment(name)?);
        let client = self.api_client()?;

        let spinner = Logger::spinner(&format!("Running {name}"));
        let response = client.post(&path).json(&params).send().await;
        spinner.finish_and_clear();

        let response = response
            .map_err(|e| Error::transport("Unable to communicate with the control service", e))?;

        log::info!("Got status from {path}: {}", response.status());

        if !response.status().is_success() {
            return Err(Error::status("Error running the zeta function", response).await);
        }

        let body = response.text().await.map_err(|e| {
            self.error(Some("Unable to read response body"), None, Some(e.into()))
        })?;

        let result: run::Response = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse {body}: {e:?}");
            Error::new("Invalid response from the control service", Some(&e.to_string()))
        })?;

        self.writer().text(&format!(
            "{}\n{}\n",
            console::style("Response").bold(),
            pretty(&result.response)?
        ))?;

        self.writer().json(result.response)
    }
}

/// The control service only accepts a JSON object as function parameters
fn parse_payload(payload: &str) -> Result<run::Request, Error> {
    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Object(params)) => Ok(params),
        Ok(other) => Err(Error::new(
            "Invalid payload",
            Some(&format!("Expected a JSON object, got {other}")),
        )),
        Err(e) => Err(Error::new("Invalid payload", Some(&e.to_string()))),
    }
}
