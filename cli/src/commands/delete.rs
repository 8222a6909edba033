use crate::api::client::segment;
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};
use http::StatusCode;
use serde_json::json;

#[derive(clap::Args, Clone)]
pub(crate) struct DeleteCommand {
    /// Name of the zeta function to delete
    #[arg(value_name = "ZETA_NAME")]
    name: String,
}

impl Runnable for DeleteCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        DeleteRunner {
            command: self.clone(),
            context: context.clone(),
        }
    }
}

struct DeleteRunner {
    command: DeleteCommand,
    context: Context,
}

impl Runner for DeleteRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Deletes the zeta, whatever status the service returns for an unknown name is passed through
    async fn run(&mut self) -> Result<(), Error> {
        let name = &self.command.name;
        let path = format!("/zeta/{}", segment(name)?);
        let client = self.api_client()?;

        let request = client.delete(&path).build().map_err(|e| {
            self.error(
                Some("Unable to create a new delete request"),
                None,
                Some(e.into()),
            )
        })?;

        let spinner = Logger::spinner(&format!("Deleting {name}"));
        let response = client.execute(request).await;
        spinner.finish_and_clear();

        let response = response
            .map_err(|e| Error::transport(&format!("Unable to delete the zeta '{name}'"), e))?;

        log::info!("Got status from {path}: {}", response.status());

        if response.status() != StatusCode::NO_CONTENT {
            return Err(Error::status("Error deleting the zeta function", response).await);
        }

        self.writer().text(&format!(
            "{}\n",
            console::style(format!("Deleted '{name}' successfully"))
                .green()
                .bold()
        ))?;

        self.writer().json(json!({ "name": name, "deleted": true }))
    }
}
