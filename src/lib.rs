//! A small in-memory bank driven from a numbered console menu.
//!
//! - [`domain`] holds the account variants and the registry that owns them.
//! - [`worker`] turns a parsed [`common::command::Command`] into an
//!   [`common::outcome::Outcome`].
//! - [`io`] adapts the interactive console, CSV batch scripts and output.
//! - [`app`] wires the pieces together.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
