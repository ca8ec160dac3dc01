//! Account-level user info endpoints.

// self
use crate::{_prelude::*, client::TestingBot, http::RequestDescriptor};

impl TestingBot {
	/// Fetches the profile of the authenticated user.
	pub async fn get_user_info(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/user")).await
	}

	/// Updates the authenticated user's profile.
	///
	/// Nested payloads such as `{"user": {"first_name": "..."}}` flatten into
	/// `user[first_name]` form fields on the wire.
	pub async fn update_user_info(&self, data: Value) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::PUT, "/user").with_data(data)).await
	}
}
