//! Use-Cases der Application-Layer-Orchestrierung.

pub mod cutlist;
pub mod editing;
pub mod export;
pub mod file_io;
pub mod find;
pub mod navigation;
pub mod selection;
pub mod session;
pub mod view;
