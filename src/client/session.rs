//! Live browser session provisioning against the hub host.
//!
//! Unlike the REST endpoints, session creation posts a JSON body to the
//! dedicated hub ([`HUB_BASE`](crate::client::HUB_BASE)): the credential pair
//! travels in the body, caller capabilities are merged over a default
//! browser/version/platform triple, and any extra top-level fields pass
//! through unchanged.

// self
use crate::{
	_prelude::*,
	client::TestingBot,
	credentials::Credentials,
	http::Encoding,
};

/// Default capability triple applied when the caller leaves a field unset.
const DEFAULT_CAPABILITIES: [(&str, &str); 3] =
	[("browserName", "chrome"), ("browserVersion", "latest"), ("platform", "WIN11")];

/// Options for [`TestingBot::create_session`].
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
	/// Requested capabilities, merged over the default triple key-by-key.
	pub capabilities: JsonMap<String, Value>,
	/// Extra top-level body fields (e.g. `name`); reserved keys are ignored.
	pub extra: JsonMap<String, Value>,
}
impl SessionOptions {
	/// Creates empty options, requesting the default capability triple.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the requested capabilities wholesale.
	pub fn with_capabilities(mut self, capabilities: JsonMap<String, Value>) -> Self {
		self.capabilities = capabilities;

		self
	}

	/// Sets a single capability.
	pub fn with_capability(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.capabilities.insert(name.into(), value.into());

		self
	}

	/// Adds an extra top-level body field.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(name.into(), value.into());

		self
	}

	pub(crate) fn into_body(self, credentials: &Credentials) -> Value {
		let mut capabilities: JsonMap<String, Value> = DEFAULT_CAPABILITIES
			.iter()
			.map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
			.collect();

		capabilities.extend(self.capabilities);

		let mut body = self.extra;

		body.insert("key".into(), Value::String(credentials.key.clone()));
		body.insert("secret".into(), Value::String(credentials.secret.clone()));
		body.insert("capabilities".into(), Value::Object(capabilities));

		Value::Object(body)
	}
}

impl TestingBot {
	/// Provisions a live browser session on the hub.
	///
	/// Returns the hub's session document (session identifier, CDP URL, ...).
	pub async fn create_session(&self, options: SessionOptions) -> Result<Value> {
		let body = options.into_body(self.require_credentials()?);
		let url = self.hub_url("/session")?;

		self.execute(url, Method::POST, Some(body), Encoding::Json).await
	}
}
