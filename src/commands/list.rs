use super::Host;
use super::common::{Common, GlobalArgs, Tone};
use crate::Result;
use crate::approval::{Progress, ScanOptions, find_artifacts_requiring_approval};
use crate::reports::{OutputFormat, filter_by_label, generate_approvals_table, generate_csv, generate_json};
use clap::Args;
use core::num::NonZeroUsize;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by project name (partial match, ignoring case)
    #[arg(long, short = 'p', value_name = "NAME")]
    pub project: Option<String>,

    /// Show detailed processing messages
    #[arg(long, short = 'd')]
    pub details: bool,

    /// Output format
    #[arg(long, short = 'o', value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Number of project versions to scan at the same time
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub concurrency: u8,
}

/// Scan every project version and print the artifacts waiting for approval.
pub async fn list_pending<H: Host>(host: &mut H, global: &GlobalArgs, args: &ListArgs) -> Result<()> {
    let mut common = Common::new(host, global)?;

    let options = ScanOptions {
        concurrency: NonZeroUsize::new(usize::from(args.concurrency)).unwrap_or(NonZeroUsize::MIN),
    };

    let progress = common.progress_reporter();
    let scan = find_artifacts_requiring_approval(&common.repository, options, &progress).await;
    progress.done();

    let artifacts = match scan {
        Ok(artifacts) => artifacts,
        Err(e) => return Err(common.fail("Error fetching artifacts", &e)),
    };

    let artifacts = filter_by_label(artifacts, args.project.as_deref().unwrap_or_default());
    if artifacts.is_empty() {
        common.announce(Tone::Success, "No artifacts requiring approval found.", false);
        return Ok(());
    }

    let machine_readable = args.output.is_machine_readable();
    common.announce(
        Tone::Notice,
        format_args!("\nFound {} artifacts requiring approval:\n", artifacts.len()),
        machine_readable,
    );

    let mut rendered = String::new();
    match args.output {
        OutputFormat::Table => generate_approvals_table(&artifacts, args.details, common.stdout_colors(), &mut rendered)?,
        OutputFormat::Json => generate_json(&artifacts, args.details, &mut rendered)?,
        OutputFormat::Csv => generate_csv(&artifacts, &mut rendered)?,
    }
    common.emit(&rendered);

    if args.output == OutputFormat::Table && !args.details {
        common.announce(
            Tone::Hint,
            "\nTip: Use -d or --details flag to see processing messages for each artifact",
            false,
        );
    }

    Ok(())
}
