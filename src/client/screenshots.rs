//! Cross-browser screenshot endpoints.

// self
use crate::{
	_prelude::*,
	client::TestingBot,
	error::require,
	http::{self, RequestDescriptor},
};

impl TestingBot {
	/// Starts a screenshot job.
	///
	/// `params` carries the job description (`url`, `browsers`, `resolution`,
	/// optional `waitTime`/`fullPage`/`callbackURL`) and is sent as a JSON
	/// body, since `browsers` is a nested array.
	pub async fn take_screenshot(&self, params: Value) -> Result<Value> {
		self.request_json(RequestDescriptor::new(Method::POST, "/screenshots").with_data(params))
			.await
	}

	/// Fetches the results of a previously started screenshot job.
	pub async fn retrieve_screenshots(&self, screenshot_id: &str) -> Result<Value> {
		require("Screenshot ID", screenshot_id)?;

		self.request(
			RequestDescriptor::new(Method::GET, "/screenshots")
				.with_data(json!({ "screenshotId": screenshot_id })),
		)
		.await
	}

	/// Lists screenshot jobs, paginated (offset defaults to 0, limit to 10).
	pub async fn get_screenshot_list(
		&self,
		offset: Option<u32>,
		limit: Option<u32>,
	) -> Result<Value> {
		self.request(
			RequestDescriptor::new(Method::GET, "/screenshots").with_data(http::page(offset, limit)),
		)
		.await
	}
}
