//! Codeless lab test endpoints.

// self
use crate::{
	_prelude::*,
	client::TestingBot,
	error::require,
	http::{self, RequestDescriptor},
};

impl TestingBot {
	/// Lists codeless lab tests, paginated (offset defaults to 0, limit to 10).
	pub async fn get_lab_tests(&self, offset: Option<u32>, limit: Option<u32>) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/lab").with_data(http::page(offset, limit)))
			.await
	}

	/// Updates a codeless lab test.
	pub async fn update_lab_test(&self, data: Value, test_id: &str) -> Result<Value> {
		require("Test ID", test_id)?;

		self.request(RequestDescriptor::new(Method::PUT, format!("/lab/{test_id}")).with_data(data))
			.await
	}

	/// Deletes a codeless lab test.
	pub async fn delete_lab_test(&self, test_id: &str) -> Result<Value> {
		require("Test ID", test_id)?;

		self.request(RequestDescriptor::new(Method::DELETE, format!("/lab/{test_id}"))).await
	}
}
