use std::path::PathBuf;

use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// The Jira base URL could not be turned into a usable client.
	#[snafu(display("Jira client can't be initialized for {}: {}", url, reason))]
	Initialization { url: String, reason: String },

	/// The session handshake was rejected or could not be completed.
	#[snafu(display(
		"Can't authenticate user {} against the Jira instance {}: {}",
		user,
		url,
		source
	))]
	Authentication {
		user: String,
		url: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// A JQL search did not succeed.
	#[snafu(display("Jira search `{}` failed: {}", jql, source))]
	Search {
		jql: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// Adding a comment to an issue did not succeed.
	#[snafu(display("Adding a comment to {} failed: {}", issue_key, source))]
	Comment {
		issue_key: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// Input rejected before any request was made.
	#[snafu(display("Invalid input: {}", msg))]
	Validation { msg: String },

	#[snafu(display("Configuration error: {}", msg))]
	Config { msg: String },

	#[snafu(display("Unable to read config file {}: {}", path.display(), source))]
	ConfigRead {
		path: PathBuf,
		source: std::io::Error,
	},

	#[snafu(display("Unable to parse config file {}: {}", path.display(), source))]
	ConfigParse {
		path: PathBuf,
		source: serde_yaml::Error,
	},

	/// An error occurred while sending or receiving a HTTP request or response
	/// respectively.
	#[snafu(display("HTTP error: {}", source))]
	Http {
		source: reqwest::Error,
		backtrace: Backtrace,
	},

	/// An error occurred while parsing or serializing JSON.
	#[snafu(display("JSON error: {}", source))]
	Json {
		source: serde_json::Error,
		backtrace: Backtrace,
	},

	/// Jira answered with a status outside of the 2xx range.
	#[snafu(display("Jira responded with {}: {}", status, body))]
	Response {
		status: reqwest::StatusCode,
		body: serde_json::Value,
	},
}

impl Error {
	/// The upstream HTTP status behind this error, if Jira answered at all.
	pub fn status(&self) -> Option<reqwest::StatusCode> {
		match self {
			Error::Response { status, .. } => Some(*status),
			Error::Http { source, .. } => source.status(),
			Error::Authentication { source, .. }
			| Error::Search { source, .. }
			| Error::Comment { source, .. } => source.status(),
			_ => None,
		}
	}
}
