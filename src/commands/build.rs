use anyhow::Result;

use pk3deploy::presentation::create_deploy_use_case;
use pk3deploy::presentation::output::render_summary;

use super::Session;

/// Build pass only
pub fn cmd_build(session: &Session) -> Result<()> {
    let _lock = session.lock()?;

    let report = create_deploy_use_case().build(
        &session.options,
        &session.config.artifacts,
        session.events(),
    )?;

    if session.ui.verbose > 0 {
        eprintln!("{}", render_summary(&report));
    }
    Ok(())
}
