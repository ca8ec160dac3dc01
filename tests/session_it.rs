// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use testingbot_api::{
	TestingBot,
	client::SessionOptions,
	error::{Error, ErrorBody, RemoteError},
	url::Url,
};

fn client_for(server: &MockServer) -> TestingBot {
	let base = Url::parse(&server.base_url()).expect("Mock server base URL should parse.");

	TestingBot::with_credentials("tb-key", "tb-secret").with_hub_base(base)
}

#[tokio::test]
async fn sessions_post_default_capabilities_to_the_hub() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/session")
				.header("content-type", "application/json")
				.json_body(json!({
					"key": "tb-key",
					"secret": "tb-secret",
					"capabilities": {
						"browserName": "chrome",
						"browserVersion": "latest",
						"platform": "WIN11",
					},
				}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"session_id\":\"abc-123\",\"cdp_url\":\"wss://hub/cdp\"}");
		})
		.await;
	let value = client
		.create_session(SessionOptions::new())
		.await
		.expect("Default session creation should succeed.");

	assert_eq!(value["session_id"], "abc-123");

	mock.assert_async().await;
}

#[tokio::test]
async fn caller_capabilities_and_extra_fields_override_and_extend_the_body() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/session").json_body(json!({
				"key": "tb-key",
				"secret": "tb-secret",
				"name": "smoke run",
				"capabilities": {
					"browserName": "firefox",
					"browserVersion": "120",
					"platform": "WIN11",
				},
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"session_id\":\"ff-1\"}");
		})
		.await;
	let options = SessionOptions::new()
		.with_capability("browserName", "firefox")
		.with_capability("browserVersion", "120")
		.with_field("name", "smoke run");
	let value =
		client.create_session(options).await.expect("Custom session creation should succeed.");

	assert_eq!(value["session_id"], "ff-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn hub_rejections_surface_as_remote_errors() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/session");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":\"Unauthorized\"}");
		})
		.await;
	let err = client
		.create_session(SessionOptions::new())
		.await
		.expect_err("A 401 from the hub must surface as a remote error.");

	match err {
		Error::Remote(RemoteError { status, body }) => {
			assert_eq!(status, 401);
			assert_eq!(body, ErrorBody::Json(json!({ "error": "Unauthorized" })));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}
