//! Build grouping endpoints.

// self
use crate::{
	_prelude::*,
	client::TestingBot,
	error::require,
	http::{self, RequestDescriptor},
};

impl TestingBot {
	/// Lists builds, paginated (offset defaults to 0, limit to 10).
	pub async fn get_builds(&self, offset: Option<u32>, limit: Option<u32>) -> Result<Value> {
		self.request(
			RequestDescriptor::new(Method::GET, "/builds").with_data(http::page(offset, limit)),
		)
		.await
	}

	/// Lists the tests grouped under a build.
	pub async fn get_tests_for_build(&self, build_id: &str) -> Result<Value> {
		require("Build ID", build_id)?;

		self.request(RequestDescriptor::new(Method::GET, format!("/builds/{build_id}"))).await
	}

	/// Deletes a build.
	pub async fn delete_build(&self, build_id: &str) -> Result<Value> {
		require("Build ID", build_id)?;

		self.request(RequestDescriptor::new(Method::DELETE, format!("/builds/{build_id}"))).await
	}
}
