use crate::api::client::segment;
use crate::api::create::{self, FILE_FIELD};
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};
use http::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::path::PathBuf;

/// Shortest accepted zeta name, in characters
const MIN_NAME_LENGTH: usize = 2;

#[derive(clap::Args, Clone)]
pub(crate) struct CreateCommand {
    /// Name of the zeta function, at least 2 characters long
    #[arg(value_name = "ZETA_NAME")]
    name: String,

    /// Handler file uploaded as the function's implementation
    #[arg(value_name = "FILEPATH")]
    filepath: PathBuf,
}

impl Runnable for CreateCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        CreateRunner {
            command: self.clone(),
            context: context.clone(),
        }
    }
}

struct CreateRunner {
    command: CreateCommand,
    context: Context,
}

impl Runner for CreateRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Uploads the handler file and registers the zeta under the given name
    ///
    /// Prints the URL the function can be called at.
    async fn run(&mut self) -> Result<(), Error> {
        let name = validate_name(&self.command.name)?;
        let name_segment = segment(name)?;
        let form = self.form().await?;
        let client = self.api_client()?;
        let path = format!("/zeta/create/{name_segment}");

        let spinner = Logger::spinner(&format!("Creating {name}"));
        let response = client.post(&path).multipart(form).send().await;
        spinner.finish_and_clear();

        let response = response
            .map_err(|e| Error::transport("Unable to communicate with the control service", e))?;

        log::info!("Got status from {path}: {}", response.status());

        if response.status() != StatusCode::CREATED {
            return Err(Error::status("Error creating the zeta function", response).await);
        }

        // The body is informational only, the status already tells the zeta exists
        let created = match response.text().await {
            Ok(text) => serde_json::from_str::<create::Response>(&text)
                .inspect_err(|e| log::warn!("Unexpected body from {path}: {e:?}"))
                .unwrap_or_default(),
            Err(e) => {
                log::warn!("Failed to read body from {path}: {e:?}");
                create::Response::default()
            }
        };

        if let Some(image) = &created.runner_image_name {
            log::info!("Runner image for {name}: {image}");
        }

        let url = client.url(&format!("/zeta/run/{name_segment}"));

        self.writer().text(&format!(
            "{}\n\nTo run your function, use this url:\n> {}\n",
            console::style(format!("Zeta '{name}' created successfully!"))
                .green()
                .bold(),
            console::style(&url).underlined()
        ))?;

        self.writer().json(json!({ "name": name, "url": url }))
    }
}

impl CreateRunner {
    /// Read the handler file into a single-part multipart form
    ///
    /// The whole file is held in memory, handlers are expected to be small.
    async fn form(&self) -> Result<Form, Error> {
        let filepath = &self.command.filepath;

        let content = tokio::fs::read(filepath).await.map_err(|e| {
            log::error!("Failed to read {}: {e:?}", filepath.display());
            Error::new(
                &format!("Unable to read content of file '{}'", filepath.display()),
                Some(&e.to_string()),
            )
        })?;

        let file_name = filepath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "handler".into());

        log::debug!("Uploading {} bytes from {file_name}", content.len());

        let part = Part::bytes(content)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| {
                self.error(
                    Some("Unable to initialize multipart form file"),
                    None,
                    Some(e.into()),
                )
            })?;

        Ok(Form::new().part(FILE_FIELD, part))
    }
}

/// Names are URL path segments and must have at least two characters
fn validate_name(name: &str) -> Result<&str, Error> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(Error::new(
            &format!("Zeta name '{name}' should be at least {MIN_NAME_LENGTH} characters long."),
            None,
        ));
    }

    Ok(name)
}
