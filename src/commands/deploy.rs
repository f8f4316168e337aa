use anyhow::Result;

use pk3deploy::presentation::create_deploy_use_case;
use pk3deploy::presentation::output::render_summary;

use super::Session;

/// Build, deploy, sync extra files and restart if anything changed
pub fn cmd_deploy(session: &Session) -> Result<()> {
    let _lock = session.lock()?;
    let profile = session.config.profile(session.options.mode)?;

    let report = create_deploy_use_case().execute_with_events(
        &session.options,
        &session.config.artifacts,
        &profile,
        session.events(),
    )?;

    if session.ui.verbose > 0 {
        eprintln!("{}", render_summary(&report));
    }
    Ok(())
}
