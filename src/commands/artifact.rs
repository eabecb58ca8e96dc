use super::Host;
use super::common::{Common, GlobalArgs};
use crate::Result;
use crate::reports::generate_artifact_detail;
use clap::Args;

#[derive(Args, Debug)]
pub struct ArtifactArgs {
    /// Artifact to show
    #[arg(value_name = "ARTIFACT_ID")]
    pub artifact_id: i64,
}

/// Print one artifact's details and messages.
pub async fn show_artifact<H: Host>(host: &mut H, global: &GlobalArgs, args: &ArtifactArgs) -> Result<()> {
    let mut common = Common::new(host, global)?;

    common.say(format_args!("Fetching artifact {}...\n", args.artifact_id));
    let artifact = match common.repository.artifact_details(args.artifact_id).await {
        Ok(artifact) => artifact,
        Err(e) => return Err(common.fail("Error fetching artifact", &e)),
    };

    let mut rendered = String::new();
    generate_artifact_detail(&artifact, common.stdout_colors(), &mut rendered)?;
    common.emit(&rendered);
    Ok(())
}
