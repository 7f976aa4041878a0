//! Integrationstests: Intents laufen durch Controller, Handler und Use-Cases.

mod common;
mod cutlist;
mod editing;
mod file_io;
mod navigation;
