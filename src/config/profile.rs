//! Profile lookup across ordered scopes
//!
//! Options are looked up in `[any-profile]` first, then in the table for
//! the current build mode. The first scope that sets an option wins.

use std::path::PathBuf;

use crate::domain::entities::Profile;
use crate::error::{Pk3Error, Pk3Result};

use super::types::ProfileSection;

/// Ordered list of profile tables to consult
#[derive(Debug, Clone)]
pub struct ProfileScopes<'a> {
    scopes: Vec<(&'a str, Option<&'a ProfileSection>)>,
}

impl<'a> ProfileScopes<'a> {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Append a scope; a missing table is an empty scope
    pub fn with_scope(mut self, name: &'a str, section: Option<&'a ProfileSection>) -> Self {
        self.scopes.push((name, section));
        self
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.scopes.iter().map(|(name, _)| *name).collect()
    }

    /// First value of a string option
    pub fn lookup(&self, option: &str) -> Option<&'a str> {
        self.sections().find_map(|section| section.get(option))
    }

    /// First value of a string option, or an error naming the scopes searched
    pub fn require(&self, option: &str) -> Pk3Result<&'a str> {
        self.lookup(option).ok_or_else(|| Pk3Error::MissingOption {
            option: option.to_string(),
            scopes: self.names().join(", "),
        })
    }

    /// Extra files from the first scope that lists them
    pub fn extra_files(&self) -> Vec<PathBuf> {
        self.sections()
            .find_map(|section| section.extra_files.as_ref())
            .map(|list| list.entries().into_iter().map(PathBuf::from).collect())
            .unwrap_or_default()
    }

    /// Resolve the deployment target
    pub fn profile(&self) -> Pk3Result<Profile> {
        Ok(Profile::new(
            self.require("host")?,
            self.require("game")?,
            self.require("fs_game")?,
        )
        .with_extra_files(self.extra_files()))
    }

    fn sections(&self) -> impl Iterator<Item = &'a ProfileSection> + '_ {
        self.scopes.iter().filter_map(|(_, section)| *section)
    }
}

impl Default for ProfileScopes<'_> {
    fn default() -> Self {
        Self::new()
    }
}
