//! Canned responses over HTTP.
//!
//! The server is usable as a library without side effects; the `justsayit`
//! binary wires it to the `PORT` and `HOST` environment variables.

pub mod api;
pub mod config;
pub mod logging;
pub mod server;
pub mod utils;

pub use config::ServerOptions;
pub use server::{start_server, BindFailure, RunningServer, Server, ServerError};
