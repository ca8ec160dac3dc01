//! Client-level error types shared across the API surface and the CLI.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Caller-side validation failure, raised before any network attempt.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// The API answered with a non-2xx status.
	#[error(transparent)]
	Remote(#[from] RemoteError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration failures surfaced when a call is dispatched, never at construction.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No usable key/secret pair could be resolved.
	#[error(
		"TestingBot API credentials not found. Pass them explicitly, set TB_KEY and TB_SECRET, or create ~/.testingbot."
	)]
	MissingCredentials,
	/// An endpoint override could not be parsed as a URL.
	#[error("Endpoint override is not a valid URL.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Caller-input validation failures; these fail fast and synchronously.
#[derive(Debug, ThisError)]
pub enum ValidationError {
	/// A required identifier or argument was empty.
	#[error("{name} is required.")]
	MissingParameter {
		/// Human-readable parameter label.
		name: &'static str,
	},
	/// A local file scheduled for upload does not exist.
	#[error("File not found: {path}.")]
	FileNotFound {
		/// Path as supplied by the caller.
		path: String,
	},
	/// The supplied payload has the wrong shape.
	#[error("Invalid payload: {reason}.")]
	InvalidPayload {
		/// Short description of the shape mismatch.
		reason: &'static str,
	},
	/// A JSON text argument could not be parsed.
	#[error("Invalid JSON.")]
	InvalidJson {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Non-2xx response; the body becomes the error value.
#[derive(Debug, ThisError)]
#[error("API responded with HTTP {status}: {body}")]
pub struct RemoteError {
	/// HTTP status code returned by the API.
	pub status: u16,
	/// Response body, parsed as JSON when possible.
	pub body: ErrorBody,
}

/// Body carried by a [`RemoteError`].
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
	/// Body parsed from a JSON response.
	Json(Value),
	/// Raw body text when the response was not JSON (or failed to parse).
	Text(String),
}
impl Display for ErrorBody {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Json(value) => write!(f, "{value}"),
			Self::Text(text) => f.write_str(text),
		}
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API: {source}")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<reqwest::Error> for TransportError {
	fn from(e: reqwest::Error) -> Self {
		Self::network(e)
	}
}

/// Rejects empty required arguments before any request is attempted.
pub(crate) fn require(name: &'static str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(ValidationError::MissingParameter { name }.into());
	}

	Ok(())
}
