use anyhow::Result;

use pk3deploy::presentation::create_deploy_use_case;
use pk3deploy::presentation::output::render_status;

use super::Session;

/// Print the version overview; `remote` also inspects the server
pub fn cmd_status(session: &Session, remote: bool) -> Result<()> {
    let profile = if remote {
        Some(session.config.profile(session.options.mode)?)
    } else {
        None
    };

    let statuses = create_deploy_use_case().status(
        &session.options,
        &session.config.artifacts,
        profile.as_ref(),
    )?;

    if statuses.is_empty() {
        eprintln!("No pk3 files declared.");
        return Ok(());
    }
    print!("{}", render_status(&statuses, session.ui.color));
    Ok(())
}
