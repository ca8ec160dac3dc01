//! App storage endpoints, including the multipart file upload.

// std
use std::path::Path;
// crates.io
use reqwest::multipart::{Form, Part};
// self
use crate::{
	_prelude::*,
	client::TestingBot,
	error::{TransportError, ValidationError, require},
	http::{self, RequestDescriptor},
};

impl TestingBot {
	/// Uploads a local app binary (`.apk`, `.ipa`, ...) as a multipart body.
	///
	/// Fails fast with [`ValidationError::FileNotFound`] before any network
	/// attempt when the path does not exist. Status classification matches the
	/// plain executor.
	pub async fn upload_file(&self, local_path: impl AsRef<Path>) -> Result<Value> {
		let local_path = local_path.as_ref();

		if !local_path.is_file() {
			return Err(ValidationError::FileNotFound {
				path: local_path.display().to_string(),
			}
			.into());
		}

		let credentials = self.require_credentials()?;
		let url = self.api_url("/storage")?;
		let bytes = tokio::fs::read(local_path).await.map_err(TransportError::Io)?;
		let file_name = local_path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| "file".to_owned());
		let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

		tracing::debug!(%url, "Dispatching multipart upload.");

		self.dispatch(
			self.http
				.post(url)
				.basic_auth(&credentials.key, Some(&credentials.secret))
				.multipart(form),
		)
		.await
	}

	/// Asks the API to fetch and store an app binary from a remote URL.
	pub async fn upload_remote_file(&self, remote_url: &str) -> Result<Value> {
		require("File URL", remote_url)?;

		self.request_json(
			RequestDescriptor::new(Method::POST, "/storage").with_data(json!({ "url": remote_url })),
		)
		.await
	}

	/// Fetches metadata for a stored file by its app URL identifier.
	pub async fn get_storage_file(&self, app_url: &str) -> Result<Value> {
		require("Storage file ID", app_url)?;

		self.request(RequestDescriptor::new(Method::GET, format!("/storage/{app_url}"))).await
	}

	/// Lists stored files, paginated (offset defaults to 0, limit to 10).
	pub async fn get_storage_files(&self, offset: Option<u32>, limit: Option<u32>) -> Result<Value> {
		self.request(
			RequestDescriptor::new(Method::GET, "/storage").with_data(http::page(offset, limit)),
		)
		.await
	}

	/// Deletes a stored file.
	pub async fn delete_storage_file(&self, app_url: &str) -> Result<Value> {
		require("Storage file ID", app_url)?;

		self.request(RequestDescriptor::new(Method::DELETE, format!("/storage/{app_url}"))).await
	}
}
