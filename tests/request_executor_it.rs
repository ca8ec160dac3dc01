// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use testingbot_api::{
	TestingBot,
	error::{Error, ErrorBody, RemoteError},
	url::Url,
};

const KEY: &str = "tb-key";
const SECRET: &str = "tb-secret";
// base64 of "tb-key:tb-secret".
const BASIC_AUTH: &str = "Basic dGIta2V5OnRiLXNlY3JldA==";

fn client_for(server: &MockServer) -> TestingBot {
	let base = Url::parse(&server.base_url()).expect("Mock server base URL should parse.");

	TestingBot::with_credentials(KEY, SECRET).with_api_base(base)
}

#[tokio::test]
async fn form_mode_flattens_nested_payloads_into_bracket_keys() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/v1/tests/demo-1")
				.header("content-type", "application/x-www-form-urlencoded")
				.body("test%5Bstatus_message%5D=x&test%5Bsuccess%5D=1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"success\":true}");
		})
		.await;
	let value = client
		.update_test(json!({ "test": { "success": 1, "status_message": "x" } }), "demo-1")
		.await
		.expect("Flattened form update should succeed.");

	assert_eq!(value, json!({ "success": true }));

	mock.assert_async().await;
}

#[tokio::test]
async fn every_request_carries_basic_auth_credentials() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/user").header("authorization", BASIC_AUTH);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"first_name\":\"Jane\"}");
		})
		.await;
	let value = client.get_user_info().await.expect("Authenticated GET should succeed.");

	assert_eq!(value["first_name"], "Jane");

	mock.assert_async().await;
}

#[tokio::test]
async fn json_mode_sends_a_json_body() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/storage")
				.header("content-type", "application/json")
				.json_body(json!({ "url": "https://example.com/app.apk" }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"app_url\":\"tb://100\"}");
		})
		.await;
	let value = client
		.upload_remote_file("https://example.com/app.apk")
		.await
		.expect("Remote upload should succeed.");

	assert_eq!(value["app_url"], "tb://100");

	mock.assert_async().await;
}

#[tokio::test]
async fn get_payloads_serialize_as_query_strings() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/devices/").query_param("deviceId", "iphone-15");
			then.status(200).header("content-type", "application/json").body("{\"id\":\"iphone-15\"}");
		})
		.await;
	let value = client.get_device("iphone-15").await.expect("Device lookup should succeed.");

	assert_eq!(value["id"], "iphone-15");

	mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_json_bodies_become_the_error_value() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/tests/missing");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"error\":\"Test not found\"}");
		})
		.await;
	let err = client
		.get_test_details("missing")
		.await
		.expect_err("A 404 must surface as a remote error.");

	match err {
		Error::Remote(RemoteError { status, body }) => {
			assert_eq!(status, 404);
			assert_eq!(body, ErrorBody::Json(json!({ "error": "Test not found" })));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn non_2xx_non_json_bodies_surface_as_raw_text() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/user");
			then.status(500).header("content-type", "text/html").body("<h1>boom</h1>");
		})
		.await;
	let err = client.get_user_info().await.expect_err("A 500 must surface as a remote error.");

	match err {
		Error::Remote(RemoteError { status, body }) => {
			assert_eq!(status, 500);
			assert_eq!(body, ErrorBody::Text("<h1>boom</h1>".into()));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn malformed_json_error_bodies_fall_back_to_text_without_panicking() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/user");
			then.status(400).header("content-type", "application/json").body("not json {{");
		})
		.await;
	let err = client
		.get_user_info()
		.await
		.expect_err("A 400 must surface as a remote error even with a broken body.");

	match err {
		Error::Remote(RemoteError { status, body }) => {
			assert_eq!(status, 400);
			assert_eq!(body, ErrorBody::Text("not json {{".into()));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn empty_2xx_bodies_map_to_json_null() {
	let server = MockServer::start_async().await;
	let client = client_for(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v1/tests/demo-2");
			then.status(204);
		})
		.await;
	let value = client.delete_test("demo-2").await.expect("Delete should succeed.");

	assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn transport_failures_surface_as_transport_errors() {
	let base = Url::parse("http://127.0.0.1:1").expect("Unreachable base URL should parse.");
	let client = TestingBot::with_credentials(KEY, SECRET).with_api_base(base);
	let err = client
		.get_user_info()
		.await
		.expect_err("Connecting to a closed port must fail with a transport error.");

	assert!(matches!(err, Error::Transport(_)), "Unexpected error variant: {err:?}.");
}
