pub mod create;
pub mod delete;
pub mod list;
pub mod ps;
pub mod run;
pub mod version;
use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the zeta function, using the file as its handler
    Create(create::CreateCommand),

    /// Delete the zeta function
    Delete(delete::DeleteCommand),

    /// List the created zeta function names
    #[command(visible_alias = "ls")]
    List(list::ListCommand),

    /// List zeta metadata.
    /// If a zeta name is given, only its own metadata is shown.
    Ps(ps::PsCommand),

    /// Call a zeta function with a JSON payload
    Run(run::RunCommand),

    /// Get the zeta version
    Version(version::VersionCommand),
}
