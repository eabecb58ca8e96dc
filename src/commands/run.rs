//! Command dispatch logic for ssc-approver

use super::common::GlobalArgs;
use super::{ArtifactArgs, ArtifactsArgs, ListArgs, VersionsArgs, list_artifacts, list_pending, list_projects, list_versions, show_artifact};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "ssc-approver", version, author, long_about = None)]
#[command(about = "Find Fortify SSC artifacts that are waiting for approval")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: SscSubcommand,
}

#[derive(Subcommand, Debug)]
enum SscSubcommand {
    /// List all artifacts requiring approval
    List(ListArgs),
    /// List all projects
    Projects,
    /// List the versions of a project
    Versions(VersionsArgs),
    /// List artifacts for a specific project version
    Artifacts(ArtifactsArgs),
    /// Show the details and messages of one artifact
    Artifact(ArtifactArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or if the executed command fails.
/// The failure has already been reported on the host's error stream and the host asked to exit.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        SscSubcommand::List(list_args) => list_pending(host, &cli.global, list_args).await,
        SscSubcommand::Projects => list_projects(host, &cli.global).await,
        SscSubcommand::Versions(versions_args) => list_versions(host, &cli.global, versions_args).await,
        SscSubcommand::Artifacts(artifacts_args) => list_artifacts(host, &cli.global, artifacts_args).await,
        SscSubcommand::Artifact(artifact_args) => show_artifact(host, &cli.global, artifact_args).await,
    }
}
