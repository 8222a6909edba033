use crate::error::Error;
use serde_json::Value;
use std::io::{Stdout, Write};

/// Write all stdout outputs in the app
///
/// In either plain text mode or structured (JSON), one document per command.
#[derive(Clone, Default)]
pub(crate) struct Writer {
    is_structured: bool,
}

impl Writer {
    pub(crate) fn new(is_structured: bool) -> Self {
        Writer { is_structured }
    }

    /// Output plain text
    ///
    /// Prints out nothing but a warning (in warn log level) when the writer is in structured mode.
    pub(crate) fn text(&self, output: &str) -> Result<(), Error> {
        if self.is_structured {
            log::warn!("Skipping output (not structured data): {output}");
            return Ok(());
        }

        self.write(output)
    }

    /// Output serialized JSON
    ///
    /// Prints out nothing but a warning (in warn log level) when the writer is in plain text mode.
    pub(crate) fn json(&self, output: Value) -> Result<(), Error> {
        if !self.is_structured {
            log::warn!("Skipping output (not plain text): {output}");
            return Ok(());
        }

        self.write(&format!("{output}\n"))
    }

    /// Output the error a command stopped with, in either mode
    pub(crate) fn failure(&self, error: &Error) -> Result<(), Error> {
        if self.is_structured {
            return self.write(&format!(
                "{}\n",
                serde_json::json!({
                    "error": error.title(),
                    "details": error.details(),
                })
            ));
        }

        self.write(&format!(
            "{}\n{error}\n",
            console::style("Error").red().bold()
        ))
    }

    /// General method for writing to stdout
    fn write(&self, output: &str) -> Result<(), Error> {
        let mut stdout: Stdout = std::io::stdout();

        stdout
            .write_all(output.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| {
                log::error!("Error while writing to stdout: {e:?}");
                Error::new("Output error", Some("Could not write to standard output."))
            })
    }
}

/// Render JSON with 2-space indentation, keeping key order and number text as received
pub(crate) fn pretty(value: &Value) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| {
        log::error!("Failed to format JSON: {e:?}");
        Error::new("Unable to format json", Some(&e.to_string()))
    })
}
