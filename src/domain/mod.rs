//! Domain Layer
//!
//! Pure types for the build/deploy decisions, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ArtifactSpec, Profile)
//! - `value_objects/` - Immutable value types (Revision, SourceVersion, BuildMode)
//! - `ports/` - Interface definitions for infrastructure (transport, version control, events)

pub mod entities;
pub mod ports;
pub mod value_objects;
