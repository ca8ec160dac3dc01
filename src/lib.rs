//! Async client for the TestingBot REST API: drive cross-browser tests, device
//! pools, screenshots, tunnels, and app storage from Rust, with a thin CLI on top.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;

mod _prelude {
	pub use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

	pub use reqwest::{Client as ReqwestClient, Method};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value, json};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use client::TestingBot;
pub use reqwest;
pub use url;

// Binary-only dependencies; the `testingbot` CLI lives in `src/bin`.
use {clap as _, tracing_subscriber as _};
#[cfg(test)] use httpmock as _;
