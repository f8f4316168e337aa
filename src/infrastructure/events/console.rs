//! Console Event Sink
//!
//! Renders deploy events as the classic progress lines on stderr:
//!
//! ```text
//! Building pk3 files...
//!     skipped   data-1.1.pk3 (already up to date)
//!     building  vms-1.1.pk3
//! Deploying...
//!     deploying vms-1.1.pk3
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{DeployEvent, DeployEventSink, Phase};

/// Event sink that writes human-readable progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stderr
    pub fn stderr(color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            color,
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn item(&self, verb: Verb, rest: &str) -> String {
        let padded = format!("{:<9}", verb.as_str());
        let verb = if self.color {
            match verb {
                Verb::Skipped => padded.dark_grey().to_string(),
                Verb::Service => padded.cyan().to_string(),
                _ => padded.green().to_string(),
            }
        } else {
            padded
        };
        format!("    {} {}", verb, rest)
    }
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Skipped,
    Building,
    Deploying,
    Deployed,
    Service,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Building => "building",
            Self::Deploying => "deploying",
            Self::Deployed => "deployed",
            Self::Service => "service",
        }
    }
}

impl ConsoleEventSink {
    /// Render one event, or `None` if it has no console line
    fn line(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::PhaseStarted(Phase::Build) => "Building pk3 files...".to_string(),
            DeployEvent::PhaseStarted(Phase::Deploy) => "Deploying...".to_string(),
            DeployEvent::PhaseStarted(Phase::Restart) => "Restarting...".to_string(),
            DeployEvent::Skipped { name, reason } => {
                self.item(Verb::Skipped, &format!("{} ({})", name, reason))
            }
            DeployEvent::Building { name } => self.item(Verb::Building, name),
            DeployEvent::Deploying { name } => self.item(Verb::Deploying, name),
            DeployEvent::ExtraDeployed { name } => self.item(Verb::Deployed, name),
            DeployEvent::ServiceCommand { command } if command.is_probe() => return None,
            DeployEvent::ServiceCommand { command } => self.item(Verb::Service, command.as_str()),
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = self.line(&event) {
            self.write_line(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SkipReason;
    use crate::domain::value_objects::ServiceCommand;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn name(s: &str) -> String {
        s.to_string()
    }

    fn render(event: &DeployEvent) -> Option<String> {
        ConsoleEventSink::with_writer(io::sink(), false).line(event)
    }

    #[test]
    fn renders_a_full_run() {
        let buf = SharedBuf::default();
        let sink = ConsoleEventSink::with_writer(buf.clone(), false);

        for event in [
            DeployEvent::PhaseStarted(Phase::Build),
            DeployEvent::Skipped {
                name: name("data-1.1.pk3"),
                reason: SkipReason::UpToDate,
            },
            DeployEvent::Skipped {
                name: name("maps.pk3"),
                reason: SkipReason::UncommittedChanges,
            },
            DeployEvent::Building {
                name: name("vms-1.1.pk3"),
            },
            DeployEvent::PhaseStarted(Phase::Deploy),
            DeployEvent::Skipped {
                name: name("maps.pk3"),
                reason: SkipReason::NotBuilt,
            },
            DeployEvent::Deploying {
                name: name("vms-1.1.pk3"),
            },
            DeployEvent::ExtraDeployed {
                name: name("server.cfg"),
            },
            DeployEvent::PhaseStarted(Phase::Restart),
            DeployEvent::ServiceCommand {
                command: ServiceCommand::Running,
            },
            DeployEvent::ServiceCommand {
                command: ServiceCommand::Start,
            },
        ] {
            sink.on_event(event);
        }

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        insta::assert_snapshot!(out, @r"
        Building pk3 files...
            skipped   data-1.1.pk3 (already up to date)
            skipped   maps.pk3 (uncommitted changes)
            building  vms-1.1.pk3
        Deploying...
            skipped   maps.pk3 (not built)
            deploying vms-1.1.pk3
            deployed  server.cfg
        Restarting...
            service   start
        ");
    }

    #[test]
    fn probe_has_no_line() {
        assert_eq!(
            render(&DeployEvent::ServiceCommand {
                command: ServiceCommand::Running
            }),
            None
        );
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let line = render(&DeployEvent::Building {
            name: name("data.pk3"),
        })
        .unwrap();
        assert!(!line.contains('\u{1b}'));
        assert_eq!(line, "    building  data.pk3");
    }

    #[test]
    fn colored_output_styles_the_verb() {
        let sink = ConsoleEventSink::with_writer(io::sink(), true);
        let line = sink
            .line(&DeployEvent::Deploying {
                name: name("data.pk3"),
            })
            .unwrap();
        assert!(line.starts_with("    "));
        assert!(line.contains("deploying"));
        assert!(line.ends_with(" data.pk3"));
    }
}
