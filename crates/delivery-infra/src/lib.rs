//! Infrastructure layer - file-backed repositories and loaders

pub mod layout_loader;
pub mod persistence;
