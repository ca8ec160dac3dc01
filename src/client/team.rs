//! Team management endpoints.

// self
use crate::{_prelude::*, client::TestingBot, error::require, http::RequestDescriptor};

impl TestingBot {
	/// Fetches the team the authenticated user belongs to.
	pub async fn get_team(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/team-management")).await
	}

	/// Lists all users in the team.
	pub async fn get_users_in_team(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/team-management/users")).await
	}

	/// Fetches a single team member.
	pub async fn get_user_from_team(&self, user_id: &str) -> Result<Value> {
		require("User ID", user_id)?;

		self.request(RequestDescriptor::new(
			Method::GET,
			format!("/team-management/users/{user_id}"),
		))
		.await
	}

	/// Creates a new team member; `user` is wrapped so fields flatten into
	/// `user[...]` form keys.
	pub async fn create_user_in_team(&self, user: Value) -> Result<Value> {
		self.request(
			RequestDescriptor::new(Method::POST, "/team-management/users/")
				.with_data(json!({ "user": user })),
		)
		.await
	}

	/// Updates an existing team member.
	pub async fn update_user_in_team(&self, user_id: &str, user_data: Value) -> Result<Value> {
		require("User ID", user_id)?;

		self.request(
			RequestDescriptor::new(Method::PUT, format!("/team-management/users/{user_id}"))
				.with_data(json!({ "user": user_data })),
		)
		.await
	}

	/// Regenerates the API key/secret pair of a team member.
	pub async fn reset_credentials(&self, user_id: &str) -> Result<Value> {
		require("User ID", user_id)?;

		self.request(RequestDescriptor::new(
			Method::POST,
			format!("/team-management/users/{user_id}/reset-keys"),
		))
		.await
	}
}
