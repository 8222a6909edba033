use crate::api::meta::Record;
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};

const HEADER: &str = "List of the created zetas";

#[derive(clap::Args, Clone)]
pub(crate) struct ListCommand;

impl Runnable for ListCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        ListRunner {
            context: context.clone(),
        }
    }
}

struct ListRunner {
    context: Context,
}

impl Runner for ListRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Prints out the names of all zetas known to the control service
    async fn run(&mut self) -> Result<(), Error> {
        let client = self.api_client()?;

        let spinner = Logger::spinner("Fetching zetas");
        let response = client.get("/zeta/meta").send().await;
        spinner.finish_and_clear();

        let response =
            response.map_err(|e| Error::transport("Unable to retrieve zeta information", e))?;

        if !response.status().is_success() {
            return Err(Error::status("Unable to retrieve zeta information", response).await);
        }

        let body = response.text().await.map_err(|e| {
            self.error(Some("Unable to read response body"), None, Some(e.into()))
        })?;

        log::debug!("Got response from /zeta/meta: {body}");

        let records: Vec<Record> = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse {body}: {e:?}");
            Error::new("Unable to parse json", Some(&e.to_string()))
        })?;

        self.writer().text(&render(&records))?;

        self.writer().json(serde_json::to_value(&records).map_err(|e| {
            self.error(Some("Unable to format json"), None, Some(e.into()))
        })?)
    }
}

/// Header followed by one `- name` line per record, in the order received
fn render(records: &[Record]) -> String {
    let mut output = format!(
        "{}\n{}\n",
        console::style(HEADER).bold(),
        "=".repeat(HEADER.len())
    );

    if records.is_empty() {
        output.push_str(&format!("{}\n", console::style("No zetas found").yellow()));
    }

    for record in records {
        output.push_str(&format!("- {}\n", record.display_name()));
    }

    output
}
