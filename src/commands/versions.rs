use super::Host;
use super::common::{Common, GlobalArgs, Tone};
use crate::Result;
use crate::reports::generate_versions_table;
use clap::Args;

#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Project whose versions to list
    #[arg(value_name = "PROJECT_ID")]
    pub project_id: i64,
}

/// Print the versions of one project.
pub async fn list_versions<H: Host>(host: &mut H, global: &GlobalArgs, args: &VersionsArgs) -> Result<()> {
    let mut common = Common::new(host, global)?;

    common.say(format_args!("Fetching versions for project {}...", args.project_id));
    let versions = match common.repository.list_project_versions(args.project_id).await {
        Ok(versions) => versions,
        Err(e) => return Err(common.fail("Error fetching project versions", &e)),
    };

    if versions.is_empty() {
        common.announce(Tone::Notice, "No versions found for this project.", false);
        return Ok(());
    }

    common.announce(Tone::Success, format_args!("\nFound {} versions:\n", versions.len()), false);

    let mut rendered = String::new();
    generate_versions_table(&versions, common.stdout_colors(), &mut rendered)?;
    common.emit(&rendered);
    Ok(())
}
