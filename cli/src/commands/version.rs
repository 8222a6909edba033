use crate::error::Error;
use crate::runner::{Context, Runnable, Runner};
use serde_json::json;

/// Version reported by `zeta version`
pub(crate) const ZETA_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(clap::Args, Clone)]
pub(crate) struct VersionCommand {
    /// Accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

impl Runnable for VersionCommand {
    fn runner(&self, context: &Context) -> impl Runner {
        VersionRunner {
            command: self.clone(),
            context: context.clone(),
        }
    }
}

struct VersionRunner {
    command: VersionCommand,
    context: Context,
}

impl Runner for VersionRunner {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Prints the version compiled into the binary, never touches the network
    async fn run(&mut self) -> Result<(), Error> {
        if !self.command.ignored.is_empty() {
            log::debug!("Ignoring arguments: {:?}", self.command.ignored);
        }

        self.writer()
            .text(&format!("zeta functions version {ZETA_VERSION}\n"))?;

        self.writer().json(json!({ "version": ZETA_VERSION }))
    }
}
