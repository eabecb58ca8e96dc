use super::Host;
use super::common::{Common, GlobalArgs, Tone};
use crate::Result;
use crate::reports::generate_projects_table;

/// Print every project on the server.
pub async fn list_projects<H: Host>(host: &mut H, global: &GlobalArgs) -> Result<()> {
    let mut common = Common::new(host, global)?;

    common.say("Fetching projects...");
    let projects = match common.repository.list_projects().await {
        Ok(projects) => projects,
        Err(e) => return Err(common.fail("Error fetching projects", &e)),
    };

    if projects.is_empty() {
        common.announce(Tone::Notice, "No projects found.", false);
        return Ok(());
    }

    common.announce(Tone::Success, format_args!("\nFound {} projects:\n", projects.len()), false);

    let mut rendered = String::new();
    generate_projects_table(&projects, common.stdout_colors(), &mut rendered)?;
    common.emit(&rendered);
    Ok(())
}
