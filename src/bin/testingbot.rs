//! TestingBot API CLI.
//!
//! Subcommands mirror the API areas; successful calls print the JSON response
//! on stdout, failures print one error line on stderr and exit non-zero.

// std
use std::process;
// crates.io
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
// self
use testingbot_api::{
	TestingBot,
	client::SessionOptions,
	error::{Result, ValidationError},
};

#[derive(Parser)]
#[command(name = "testingbot", version, about = "TestingBot API CLI")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Account user info.
	#[command(subcommand)]
	User(UserCommand),
	/// Automated test management.
	#[command(subcommand)]
	Tests(TestsCommand),
	/// Physical device pool.
	#[command(subcommand)]
	Devices(DevicesCommand),
	/// Browser catalog.
	#[command(subcommand)]
	Browsers(BrowsersCommand),
	/// App storage.
	#[command(subcommand)]
	Storage(StorageCommand),
	/// Cross-browser screenshots.
	#[command(subcommand)]
	Screenshot(ScreenshotCommand),
	/// Local testing tunnels.
	#[command(subcommand)]
	Tunnel(TunnelCommand),
	/// Build groupings.
	#[command(subcommand)]
	Builds(BuildsCommand),
	/// Team management.
	#[command(subcommand)]
	Team(TeamCommand),
	/// Live browser sessions.
	#[command(subcommand)]
	Session(SessionCommand),
	/// Codeless lab tests.
	#[command(subcommand)]
	Lab(LabCommand),
}

#[derive(Subcommand)]
enum UserCommand {
	/// Show the authenticated user's profile.
	Info,
	/// Update the profile from a JSON document.
	Update {
		/// JSON update payload, e.g. '{"user": {"first_name": "Jane"}}'.
		data: String,
	},
}

#[derive(Subcommand)]
enum TestsCommand {
	/// List tests.
	List {
		/// Pagination offset (defaults to 0).
		offset: Option<u32>,
		/// Pagination limit (defaults to 10).
		limit: Option<u32>,
	},
	/// Show one test.
	Get {
		/// Test (session) identifier.
		test_id: String,
	},
	/// Update one test from a JSON document.
	Update {
		/// Test (session) identifier.
		test_id: String,
		/// JSON update payload, e.g. '{"test": {"success": 1}}'.
		data: String,
	},
	/// Delete one test.
	Delete {
		/// Test (session) identifier.
		test_id: String,
	},
	/// Stop a running test.
	Stop {
		/// Test (session) identifier.
		test_id: String,
	},
}

#[derive(Subcommand)]
enum DevicesCommand {
	/// List every device.
	List,
	/// List devices currently available.
	Available,
	/// Show one device.
	Get {
		/// Device identifier.
		device_id: String,
	},
}

#[derive(Subcommand)]
enum BrowsersCommand {
	/// List available browsers.
	List {
		/// Optional platform class filter.
		#[arg(value_parser = ["web", "mobile"])]
		kind: Option<String>,
	},
}

#[derive(Subcommand)]
enum StorageCommand {
	/// Upload a local app binary.
	Upload {
		/// Path to the local file.
		file: String,
	},
	/// Upload an app binary from a remote URL.
	UploadRemote {
		/// HTTPS URL of the file to import.
		url: String,
	},
	/// List stored files.
	List {
		/// Pagination offset (defaults to 0).
		offset: Option<u32>,
		/// Pagination limit (defaults to 10).
		limit: Option<u32>,
	},
	/// Show one stored file.
	Get {
		/// Storage file identifier (app URL without the scheme).
		app_url: String,
	},
	/// Delete one stored file.
	Delete {
		/// Storage file identifier (app URL without the scheme).
		app_url: String,
	},
}

#[derive(Subcommand)]
enum ScreenshotCommand {
	/// Start a screenshot job.
	Take {
		/// Page URL to capture.
		url: String,
		/// JSON job config, e.g. '{"browsers": [...], "resolution": "1280x1024"}'.
		config: String,
	},
	/// Fetch the results of a screenshot job.
	Get {
		/// Screenshot job identifier.
		screenshot_id: String,
	},
	/// List screenshot jobs.
	List {
		/// Pagination offset (defaults to 0).
		offset: Option<u32>,
		/// Pagination limit (defaults to 10).
		limit: Option<u32>,
	},
}

#[derive(Subcommand)]
enum TunnelCommand {
	/// Show the active tunnel.
	Info,
	/// List all tunnels.
	List,
	/// Delete one tunnel.
	Delete {
		/// Tunnel identifier.
		tunnel_id: String,
	},
}

#[derive(Subcommand)]
enum BuildsCommand {
	/// List builds.
	List {
		/// Pagination offset (defaults to 0).
		offset: Option<u32>,
		/// Pagination limit (defaults to 10).
		limit: Option<u32>,
	},
	/// List the tests in one build.
	Get {
		/// Build identifier.
		build_id: String,
	},
	/// Delete one build.
	Delete {
		/// Build identifier.
		build_id: String,
	},
}

#[derive(Subcommand)]
enum TeamCommand {
	/// Show the team.
	Info,
	/// List users in the team.
	Users,
	/// Show one team member.
	GetUser {
		/// Team user identifier.
		user_id: String,
	},
	/// Create a team member from a JSON document.
	CreateUser {
		/// JSON user payload.
		data: String,
	},
	/// Update a team member from a JSON document.
	UpdateUser {
		/// Team user identifier.
		user_id: String,
		/// JSON user payload.
		data: String,
	},
	/// Regenerate a team member's API credentials.
	ResetKeys {
		/// Team user identifier.
		user_id: String,
	},
}

#[derive(Subcommand)]
enum SessionCommand {
	/// Provision a live browser session on the hub.
	Create {
		/// JSON capabilities, e.g. '{"browserName": "chrome"}'; omit for the defaults.
		capabilities: Option<String>,
	},
}

#[derive(Subcommand)]
enum LabCommand {
	/// List codeless lab tests.
	List {
		/// Pagination offset (defaults to 0).
		offset: Option<u32>,
		/// Pagination limit (defaults to 10).
		limit: Option<u32>,
	},
	/// Update a codeless lab test from a JSON document.
	Update {
		/// Lab test identifier.
		test_id: String,
		/// JSON update payload.
		data: String,
	},
	/// Delete a codeless lab test.
	Delete {
		/// Lab test identifier.
		test_id: String,
	},
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let cli = Cli::parse();
	let api = TestingBot::new();

	match run(&api, cli.command).await {
		Ok(value) => println!("{value:#}"),
		Err(e) => {
			eprintln!("Error: {e}");
			process::exit(1);
		},
	}
}

async fn run(api: &TestingBot, command: Command) -> Result<Value> {
	match command {
		Command::User(command) => match command {
			UserCommand::Info => api.get_user_info().await,
			UserCommand::Update { data } => api.update_user_info(parse_json(&data)?).await,
		},
		Command::Tests(command) => match command {
			TestsCommand::List { offset, limit } => api.get_tests(offset, limit).await,
			TestsCommand::Get { test_id } => api.get_test_details(&test_id).await,
			TestsCommand::Update { test_id, data } =>
				api.update_test(parse_json(&data)?, &test_id).await,
			TestsCommand::Delete { test_id } => api.delete_test(&test_id).await,
			TestsCommand::Stop { test_id } => api.stop_test(&test_id).await,
		},
		Command::Devices(command) => match command {
			DevicesCommand::List => api.get_devices().await,
			DevicesCommand::Available => api.get_available_devices().await,
			DevicesCommand::Get { device_id } => api.get_device(&device_id).await,
		},
		Command::Browsers(command) => match command {
			BrowsersCommand::List { kind } => api.get_browsers(kind.as_deref()).await,
		},
		Command::Storage(command) => match command {
			StorageCommand::Upload { file } => api.upload_file(&file).await,
			StorageCommand::UploadRemote { url } => api.upload_remote_file(&url).await,
			StorageCommand::List { offset, limit } => api.get_storage_files(offset, limit).await,
			StorageCommand::Get { app_url } => api.get_storage_file(&app_url).await,
			StorageCommand::Delete { app_url } => api.delete_storage_file(&app_url).await,
		},
		Command::Screenshot(command) => match command {
			ScreenshotCommand::Take { url, config } => {
				let mut params = parse_json_object(&config)?;

				params.insert("url".into(), Value::String(url));

				api.take_screenshot(Value::Object(params)).await
			},
			ScreenshotCommand::Get { screenshot_id } =>
				api.retrieve_screenshots(&screenshot_id).await,
			ScreenshotCommand::List { offset, limit } =>
				api.get_screenshot_list(offset, limit).await,
		},
		Command::Tunnel(command) => match command {
			TunnelCommand::Info => api.get_tunnel().await,
			TunnelCommand::List => api.get_tunnel_list().await,
			TunnelCommand::Delete { tunnel_id } => api.delete_tunnel(&tunnel_id).await,
		},
		Command::Builds(command) => match command {
			BuildsCommand::List { offset, limit } => api.get_builds(offset, limit).await,
			BuildsCommand::Get { build_id } => api.get_tests_for_build(&build_id).await,
			BuildsCommand::Delete { build_id } => api.delete_build(&build_id).await,
		},
		Command::Team(command) => match command {
			TeamCommand::Info => api.get_team().await,
			TeamCommand::Users => api.get_users_in_team().await,
			TeamCommand::GetUser { user_id } => api.get_user_from_team(&user_id).await,
			TeamCommand::CreateUser { data } => api.create_user_in_team(parse_json(&data)?).await,
			TeamCommand::UpdateUser { user_id, data } =>
				api.update_user_in_team(&user_id, parse_json(&data)?).await,
			TeamCommand::ResetKeys { user_id } => api.reset_credentials(&user_id).await,
		},
		Command::Session(command) => match command {
			SessionCommand::Create { capabilities } => {
				let options = match capabilities {
					Some(raw) => SessionOptions::new().with_capabilities(parse_json_object(&raw)?),
					None => SessionOptions::new(),
				};

				api.create_session(options).await
			},
		},
		Command::Lab(command) => match command {
			LabCommand::List { offset, limit } => api.get_lab_tests(offset, limit).await,
			LabCommand::Update { test_id, data } =>
				api.update_lab_test(parse_json(&data)?, &test_id).await,
			LabCommand::Delete { test_id } => api.delete_lab_test(&test_id).await,
		},
	}
}

fn parse_json(raw: &str) -> Result<Value> {
	let deserializer = &mut serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(deserializer)
		.map_err(|source| ValidationError::InvalidJson { source }.into())
}

fn parse_json_object(raw: &str) -> Result<serde_json::Map<String, Value>> {
	match parse_json(raw)? {
		Value::Object(map) => Ok(map),
		_ => Err(ValidationError::InvalidPayload { reason: "expected a JSON object" }.into()),
	}
}
