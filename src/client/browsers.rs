//! Browser catalog endpoint.

// self
use crate::{_prelude::*, client::TestingBot, http::RequestDescriptor};

impl TestingBot {
	/// Lists the browsers available on the grid.
	///
	/// `kind` filters by platform class (`"web"` or `"mobile"`); `None` lists
	/// everything.
	pub async fn get_browsers(&self, kind: Option<&str>) -> Result<Value> {
		let mut descriptor = RequestDescriptor::new(Method::GET, "/browsers");

		if let Some(kind) = kind {
			descriptor = descriptor.with_data(json!({ "type": kind }));
		}

		self.request(descriptor).await
	}
}
