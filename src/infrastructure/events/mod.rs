//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - ConsoleEventSink: Human-readable progress lines on stderr

mod console;

pub use console::ConsoleEventSink;
