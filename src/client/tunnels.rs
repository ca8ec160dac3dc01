//! Local testing tunnel endpoints.

// self
use crate::{_prelude::*, client::TestingBot, error::require, http::RequestDescriptor};

impl TestingBot {
	/// Fetches metadata for the active tunnel.
	pub async fn get_tunnel(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/tunnel")).await
	}

	/// Lists all tunnels for the account.
	pub async fn get_tunnel_list(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/tunnel/list")).await
	}

	/// Shuts down and deletes a tunnel.
	pub async fn delete_tunnel(&self, tunnel_id: &str) -> Result<Value> {
		require("Tunnel ID", tunnel_id)?;

		self.request(RequestDescriptor::new(Method::DELETE, format!("/tunnel/{tunnel_id}"))).await
	}
}
