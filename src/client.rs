//! The [`TestingBot`] client: credential handling, the request executor, and
//! one submodule per API area.

pub mod session;

mod browsers;
mod builds;
mod devices;
mod lab;
mod screenshots;
mod storage;
mod team;
mod tunnels;
mod user;

pub use session::SessionOptions;

// crates.io
use md5::{Digest, Md5};
use reqwest::{RequestBuilder, header::CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	error::{ConfigError, RemoteError, TransportError, ValidationError},
	http::{self, Encoding, RequestDescriptor},
};

/// Fixed HTTPS host of the REST API.
pub const API_BASE: &str = "https://api.testingbot.com";
/// Fixed HTTPS host of the hub that provisions live browser sessions.
pub const HUB_BASE: &str = "https://hub.testingbot.com";
/// Version segment prefixed to every REST path.
const API_VERSION: &str = "/v1";

/// Client for the TestingBot REST API.
///
/// Every public endpoint method funnels into one request executor: build a
/// URL and payload, attach basic-auth credentials, perform exactly one
/// outbound call, and map non-2xx statuses to [`RemoteError`]. Calls are
/// independent async operations with no shared mutable state, so a single
/// client can serve any number of concurrent requests.
#[derive(Clone)]
pub struct TestingBot {
	http: ReqwestClient,
	credentials: Option<Credentials>,
	api_base: Url,
	hub_base: Url,
}
impl TestingBot {
	/// Creates a client, resolving credentials from the environment and the
	/// `~/.testingbot` config file.
	///
	/// An unresolved pair is not an error here; it surfaces as
	/// [`ConfigError::MissingCredentials`] on the first call.
	pub fn new() -> Self {
		Self::with_resolved(Credentials::resolve())
	}

	/// Creates a client with explicit credentials, skipping ambient resolution.
	///
	/// The pair is stored verbatim, so deliberately bogus values still reach
	/// the wire and come back as a remote error.
	pub fn with_credentials(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self::with_resolved(Some(Credentials::new(key, secret)))
	}

	fn with_resolved(credentials: Option<Credentials>) -> Self {
		Self {
			http: ReqwestClient::new(),
			credentials,
			api_base: Url::parse(API_BASE).expect("Fixed API base URL must parse."),
			hub_base: Url::parse(HUB_BASE).expect("Fixed hub base URL must parse."),
		}
	}

	/// Replaces the underlying HTTP client (connection pool, TLS settings).
	pub fn with_http_client(mut self, client: ReqwestClient) -> Self {
		self.http = client;

		self
	}

	/// Overrides the REST API host; intended for tests and private deployments.
	pub fn with_api_base(mut self, base: Url) -> Self {
		self.api_base = base;

		self
	}

	/// Overrides the session hub host; intended for tests and private deployments.
	pub fn with_hub_base(mut self, base: Url) -> Self {
		self.hub_base = base;

		self
	}

	/// Returns the resolved credentials, if any.
	pub fn credentials(&self) -> Option<&Credentials> {
		self.credentials.as_ref()
	}

	/// Deterministically digests `key:secret:session_id` into the 32-character
	/// lowercase hex hash embedded in shareable session URLs.
	///
	/// Pure computation; no network call is made.
	pub fn authentication_hash_for_sharing(&self, session_id: &str) -> Result<String> {
		let credentials = self.require_credentials()?;
		let digest =
			Md5::digest(format!("{}:{}:{session_id}", credentials.key, credentials.secret));

		Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
	}

	/// Executes one REST call described by `descriptor` against the versioned
	/// API root.
	pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
		let url = self.api_url(&descriptor.path)?;

		self.execute(url, descriptor.method, descriptor.data, descriptor.encoding).await
	}

	/// Executes a call with JSON body encoding forced, delegating to
	/// [`request`](Self::request).
	pub async fn request_json(&self, descriptor: RequestDescriptor) -> Result<Value> {
		self.request(descriptor.json()).await
	}

	pub(crate) fn api_url(&self, path: &str) -> Result<Url> {
		join_url(&self.api_base, &format!("{API_VERSION}{path}"))
	}

	pub(crate) fn hub_url(&self, path: &str) -> Result<Url> {
		join_url(&self.hub_base, path)
	}

	pub(crate) fn require_credentials(&self) -> Result<&Credentials> {
		self.credentials
			.as_ref()
			.filter(|credentials| credentials.is_complete())
			.ok_or_else(|| ConfigError::MissingCredentials.into())
	}

	pub(crate) async fn execute(
		&self,
		url: Url,
		method: Method,
		data: Option<Value>,
		encoding: Encoding,
	) -> Result<Value> {
		let credentials = self.require_credentials()?;
		let payload = match data {
			None | Some(Value::Null) => None,
			Some(Value::Object(map)) => Some(map),
			Some(_) =>
				return Err(ValidationError::InvalidPayload { reason: "expected a JSON object" }.into()),
		};

		tracing::debug!(%method, %url, encoding = ?encoding, "Dispatching API request.");

		let mut builder = self
			.http
			.request(method.clone(), url)
			.basic_auth(&credentials.key, Some(&credentials.secret));

		if let Some(map) = payload.filter(|map| !map.is_empty()) {
			if method == Method::GET {
				builder = builder.query(&http::flatten_pairs(&map));
			} else {
				builder = match encoding {
					Encoding::Json => builder.json(&Value::Object(map)),
					Encoding::Form => builder
						.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
						.body(http::form_encode(&map)),
				};
			}
		}

		self.dispatch(builder).await
	}

	pub(crate) async fn dispatch(&self, builder: RequestBuilder) -> Result<Value> {
		let response = builder.send().await.map_err(TransportError::from)?;
		let status = response.status();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned);
		let text = response.text().await.map_err(TransportError::from)?;
		let body = http::classify_body(content_type.as_deref(), text);

		if status.is_success() {
			Ok(body.into_value())
		} else {
			tracing::warn!(status = status.as_u16(), "API call failed.");

			Err(RemoteError { status: status.as_u16(), body: body.into_error_body() }.into())
		}
	}
}
impl Default for TestingBot {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for TestingBot {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TestingBot")
			.field("api_base", &self.api_base.as_str())
			.field("hub_base", &self.hub_base.as_str())
			.field("credentials_set", &self.credentials.is_some())
			.finish()
	}
}

fn join_url(base: &Url, path: &str) -> Result<Url> {
	Url::parse(&format!("{}{path}", base.as_str().trim_end_matches('/')))
		.map_err(|e| ConfigError::InvalidEndpoint { source: e }.into())
}
