//! Terminal handling for the binary

pub mod context;
pub mod terminal;
