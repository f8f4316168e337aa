//! Domain Entities
//!
//! - `ArtifactSpec` - A declared pk3 archive and its manifest
//! - `Profile` - The deployment target for the current build mode

mod artifact;
mod profile;

pub use artifact::ArtifactSpec;
pub use profile::Profile;
