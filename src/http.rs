//! Request-encoding primitives for the request executor.
//!
//! The module owns everything about how a payload turns into bytes on the
//! wire: the [`RequestDescriptor`] built per call, bracket-notation flattening
//! for `application/x-www-form-urlencoded` bodies and query strings, and the
//! classification of response bodies into JSON or raw text.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Body encoding applied to non-GET requests.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoding {
	/// `application/x-www-form-urlencoded` with bracket-notation flattening.
	#[default]
	Form,
	/// `application/json`.
	Json,
}

/// Ephemeral description of one API call, built per invocation.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: Method,
	/// Path below the versioned API root, e.g. `/tests/`.
	pub path: String,
	/// Optional payload; must be a JSON object when present.
	pub data: Option<Value>,
	/// Body encoding for non-GET requests.
	pub encoding: Encoding,
}
impl RequestDescriptor {
	/// Creates a descriptor with no payload and form encoding.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), data: None, encoding: Encoding::Form }
	}

	/// Attaches a payload (query data for GET, body otherwise).
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = Some(data);

		self
	}

	/// Switches the body to JSON encoding.
	pub fn json(mut self) -> Self {
		self.encoding = Encoding::Json;

		self
	}
}

/// Response body classified by content type.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Body {
	/// Parsed JSON document (empty bodies map to `Value::Null`).
	Json(Value),
	/// Raw text for non-JSON responses or unparseable JSON.
	Text(String),
}
impl Body {
	pub(crate) fn into_value(self) -> Value {
		match self {
			Self::Json(value) => value,
			Self::Text(text) => Value::String(text),
		}
	}

	pub(crate) fn into_error_body(self) -> crate::error::ErrorBody {
		match self {
			Self::Json(value) => crate::error::ErrorBody::Json(value),
			Self::Text(text) => crate::error::ErrorBody::Text(text),
		}
	}
}

/// Classifies a response body without ever raising a parse error.
///
/// Bodies whose content type advertises JSON are parsed; a parse failure falls
/// back to the raw text so malformed upstream responses still reach the caller
/// verbatim.
pub(crate) fn classify_body(content_type: Option<&str>, text: String) -> Body {
	if text.is_empty() {
		return Body::Json(Value::Null);
	}
	if content_type.is_some_and(|value| value.to_ascii_lowercase().contains("json")) {
		let deserializer = &mut serde_json::Deserializer::from_str(&text);

		match serde_path_to_error::deserialize::<_, Value>(deserializer) {
			Ok(value) => return Body::Json(value),
			Err(e) =>
				tracing::debug!(error = %e, "Response advertised JSON but failed to parse; keeping raw text."),
		}
	}

	Body::Text(text)
}

/// Flattens a payload object into wire key/value pairs.
///
/// Nested objects recurse into bracket notation (`parent[child]`); arrays are
/// leaf values emitted as repeated keys; scalars stringify without quoting.
pub(crate) fn flatten_pairs(data: &JsonMap<String, Value>) -> Vec<(String, String)> {
	let mut pairs = Vec::new();

	for (key, value) in data {
		push_pairs(key.clone(), value, &mut pairs);
	}

	pairs
}

fn push_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
	match value {
		Value::Object(nested) =>
			for (child, child_value) in nested {
				push_pairs(format!("{key}[{child}]"), child_value, pairs);
			},
		Value::Array(items) =>
			for item in items {
				pairs.push((key.clone(), leaf_to_string(item)));
			},
		leaf => pairs.push((key, leaf_to_string(leaf))),
	}
}

fn leaf_to_string(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Form-urlencodes a payload object, flattening nested objects first.
pub(crate) fn form_encode(data: &JsonMap<String, Value>) -> String {
	let mut serializer = form_urlencoded::Serializer::new(String::new());

	for (key, value) in flatten_pairs(data) {
		serializer.append_pair(&key, &value);
	}

	serializer.finish()
}

/// Builds an offset/limit payload, defaulting to offset 0 and limit 10.
///
/// A zero limit counts as unset, matching the historical falsy check.
pub(crate) fn page(offset: Option<u32>, limit: Option<u32>) -> Value {
	let offset = offset.unwrap_or(0);
	let limit = limit.filter(|value| *value != 0).unwrap_or(10);

	json!({ "offset": offset, "limit": limit })
}
