//! Physical device pool endpoints.

// self
use crate::{_prelude::*, client::TestingBot, error::require, http::RequestDescriptor};

impl TestingBot {
	/// Lists every physical device in the pool.
	pub async fn get_devices(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/devices")).await
	}

	/// Lists the devices currently available for new sessions.
	pub async fn get_available_devices(&self) -> Result<Value> {
		self.request(RequestDescriptor::new(Method::GET, "/devices/available")).await
	}

	/// Fetches a single device by identifier.
	pub async fn get_device(&self, device_id: &str) -> Result<Value> {
		require("Device ID", device_id)?;

		self.request(
			RequestDescriptor::new(Method::GET, "/devices/")
				.with_data(json!({ "deviceId": device_id })),
		)
		.await
	}
}
