use anyhow::Result;

use pk3deploy::presentation::create_deploy_use_case;

use super::Session;

/// Restart the game service regardless of what changed
pub fn cmd_restart(session: &Session) -> Result<()> {
    let profile = session.config.profile(session.options.mode)?;
    let was_running = create_deploy_use_case().restart(&profile, session.events())?;
    tracing::debug!(was_running, "service restarted");
    Ok(())
}
