//! Remote Service Control
//!
//! Drives the game server launcher (`bin/tremded <game> <command>`).

use crate::domain::entities::Profile;
use crate::domain::ports::{DeployEvent, DeployEventSink, RemoteTransport};
use crate::domain::value_objects::{shell_quote, RemoteLayout, ServiceCommand};
use crate::error::Pk3Result;

use super::remote::exec_checked;

pub struct ServiceControl<'a, T: RemoteTransport> {
    transport: &'a T,
    host: &'a str,
    game: &'a str,
    events: &'a dyn DeployEventSink,
}

impl<'a, T: RemoteTransport> ServiceControl<'a, T> {
    pub fn new(transport: &'a T, profile: &'a Profile, events: &'a dyn DeployEventSink) -> Self {
        Self {
            transport,
            host: &profile.host,
            game: &profile.game,
            events,
        }
    }

    fn command_line(&self, command: ServiceCommand) -> String {
        format!(
            "{} {} {}",
            RemoteLayout::SERVICE,
            shell_quote(self.game),
            command.as_str()
        )
    }

    /// Probe whether the service is up; any failure reads as "not running"
    pub fn is_running(&self) -> bool {
        self.events.on_event(DeployEvent::ServiceCommand {
            command: ServiceCommand::Running,
        });
        match self
            .transport
            .exec(self.host, &self.command_line(ServiceCommand::Running))
        {
            Ok(output) => output.is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "service probe failed");
                false
            }
        }
    }

    /// Send a lifecycle command that must succeed
    pub fn send(&self, command: ServiceCommand) -> Pk3Result<()> {
        self.events
            .on_event(DeployEvent::ServiceCommand { command });
        exec_checked(self.transport, self.host, &self.command_line(command))?;
        Ok(())
    }

    /// Stop the service if it is up, then start it
    ///
    /// Returns whether the service was running beforehand.
    pub fn restart(&self) -> Pk3Result<bool> {
        let was_running = self.is_running();
        if was_running {
            self.send(ServiceCommand::Detach)?;
            self.send(ServiceCommand::Stop)?;
        }
        self.send(ServiceCommand::Start)?;
        Ok(was_running)
    }
}
