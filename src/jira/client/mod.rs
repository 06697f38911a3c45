use url::Url;

use crate::{error, http, types::Result};

mod auth;
mod issue;

pub struct JiraClient {
	pub client: http::Client,
}

impl JiraClient {
	/// Creates an anonymous client for the Jira instance at `base_url`.
	///
	/// # Errors
	/// If `base_url` is not an absolute `http`/`https` URL.
	pub fn new(base_url: &str) -> Result<Self> {
		let mut url = match Url::parse(base_url) {
			Ok(url) => url,
			Err(e) => {
				return error::Initialization {
					url: base_url,
					reason: e.to_string(),
				}
				.fail()
			}
		};

		if url.scheme() != "http" && url.scheme() != "https" {
			return error::Initialization {
				url: base_url,
				reason: format!("unsupported scheme `{}`", url.scheme()),
			}
			.fail();
		}
		if url.cannot_be_a_base() || url.host_str().is_none() {
			return error::Initialization {
				url: base_url,
				reason: "missing host",
			}
			.fail();
		}

		// Keep any context path (e.g. `/jira`) when REST paths are appended.
		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}
		url.set_query(None);
		url.set_fragment(None);

		Ok(Self {
			client: http::Client::new(url)?,
		})
	}

	/// Creates a client and, when both `username` and `password` are
	/// non-empty, acquires a session for that user.
	pub async fn connect(
		base_url: &str,
		username: &str,
		password: &str,
	) -> Result<Self> {
		let mut jira = Self::new(base_url)?;

		if !username.is_empty() && !password.is_empty() {
			log::info!("Authenticating {} against {}", username, base_url);
			jira.authenticate(username, password).await?;
		} else {
			log::debug!("No credentials given, using an anonymous client");
		}

		Ok(jira)
	}

	pub fn base_url(&self) -> &Url {
		self.client.base_url()
	}
}
