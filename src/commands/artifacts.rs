use super::Host;
use super::common::{Common, GlobalArgs, Tone};
use crate::Result;
use crate::reports::generate_artifacts_table;
use clap::Args;

#[derive(Args, Debug)]
pub struct ArtifactsArgs {
    /// Project version whose artifacts to list
    #[arg(value_name = "PROJECT_VERSION_ID")]
    pub version_id: i64,
}

/// Print every artifact of one project version, whatever its status.
pub async fn list_artifacts<H: Host>(host: &mut H, global: &GlobalArgs, args: &ArtifactsArgs) -> Result<()> {
    let mut common = Common::new(host, global)?;

    common.say(format_args!("Fetching artifacts for project version {}...", args.version_id));
    let artifacts = match common.repository.list_artifacts(args.version_id).await {
        Ok(artifacts) => artifacts,
        Err(e) => return Err(common.fail("Error fetching artifacts", &e)),
    };

    if artifacts.is_empty() {
        common.announce(Tone::Notice, "No artifacts found for this project version.", false);
        return Ok(());
    }

    common.announce(Tone::Success, format_args!("\nFound {} artifacts:\n", artifacts.len()), false);

    let mut rendered = String::new();
    generate_artifacts_table(&artifacts, common.stdout_colors(), &mut rendered)?;
    common.emit(&rendered);
    Ok(())
}
