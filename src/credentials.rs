//! Credential resolution for the TestingBot API.
//!
//! A key/secret pair is resolved once at client construction: explicit values
//! first, then environment variables (both the `TESTINGBOT_*` and the short
//! `TB_*` scheme), then a colon-delimited `key:secret` line in the per-user
//! `~/.testingbot` file. Each source only fills fields still missing; once key
//! and secret are both set, resolution stops. A missing pair is not an error
//! here; it surfaces as [`ConfigError::MissingCredentials`] when a call first
//! touches the network.
//!
//! [`ConfigError::MissingCredentials`]: crate::error::ConfigError::MissingCredentials

// std
use std::{
	env, fs,
	path::{Path, PathBuf},
};
// self
use crate::_prelude::*;

/// Environment variables consulted for the API key, in precedence order.
pub const KEY_ENV_VARS: [&str; 2] = ["TESTINGBOT_KEY", "TB_KEY"];
/// Environment variables consulted for the API secret, in precedence order.
pub const SECRET_ENV_VARS: [&str; 2] = ["TESTINGBOT_SECRET", "TB_SECRET"];
/// Name of the per-user configuration file, placed in the home directory.
pub const CONFIG_FILE_NAME: &str = ".testingbot";

/// Resolved API key/secret pair attached to every request via basic auth.
#[derive(Clone, Deserialize, PartialEq, Eq, Serialize)]
pub struct Credentials {
	/// API key, the basic-auth username.
	pub key: String,
	/// API secret, the basic-auth password.
	pub secret: String,
}
impl Credentials {
	/// Builds a pair from explicit values, bypassing ambient resolution.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: secret.into() }
	}

	/// Resolves a pair from the environment and the home-directory config file.
	///
	/// Returns `None` when no complete pair could be assembled.
	pub fn resolve() -> Option<Self> {
		Self::resolve_with(|name| env::var(name).ok(), default_config_path().as_deref())
	}

	pub(crate) fn resolve_with(
		env: impl Fn(&str) -> Option<String>,
		config_path: Option<&Path>,
	) -> Option<Self> {
		let mut key = env_first(&env, &KEY_ENV_VARS);
		let mut secret = env_first(&env, &SECRET_ENV_VARS);

		if (key.is_none() || secret.is_none())
			&& let Some((file_key, file_secret)) = config_path.and_then(read_config_file)
		{
			key = key.or(Some(file_key));
			secret = secret.or(Some(file_secret));
		}

		match (key, secret) {
			(Some(key), Some(secret)) => Some(Self { key, secret }),
			_ => None,
		}
	}

	/// Returns whether both fields are non-empty.
	pub fn is_complete(&self) -> bool {
		!self.key.trim().is_empty() && !self.secret.trim().is_empty()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("key", &self.key)
			.field("secret_set", &!self.secret.is_empty())
			.finish()
	}
}

/// Default location of the per-user config file (`~/.testingbot`).
pub fn default_config_path() -> Option<PathBuf> {
	dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

fn env_first(env: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
	names
		.iter()
		.copied()
		.filter_map(env)
		.map(|value| value.trim().to_owned())
		.find(|value| !value.is_empty())
}

fn read_config_file(path: &Path) -> Option<(String, String)> {
	let contents = fs::read_to_string(path).ok()?;

	parse_config_line(&contents)
}

/// Parses the first `key:secret` line of a config file body.
///
/// Trailing fields after a second colon are ignored, matching the historical
/// file format.
pub(crate) fn parse_config_line(contents: &str) -> Option<(String, String)> {
	let line = contents.lines().next()?.trim();
	let mut parts = line.split(':');
	let key = parts.next()?.trim();
	let secret = parts.next()?.trim();

	if key.is_empty() || secret.is_empty() {
		return None;
	}

	Some((key.to_owned(), secret.to_owned()))
}
