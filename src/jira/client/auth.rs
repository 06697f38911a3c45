use snafu::ResultExt;

use super::JiraClient;
use crate::{
	constants::SESSION_PATH,
	error,
	jira::{Credentials, SessionResponse},
	types::Result,
};

impl JiraClient {
	/// Acquires a session cookie which is sent with every later request.
	pub async fn authenticate(
		&mut self,
		username: &str,
		password: &str,
	) -> Result<()> {
		let url = self.client.endpoint(SESSION_PATH.split('/'))?;
		let response: SessionResponse = self
			.client
			.post(url, &Credentials { username, password })
			.await
			.context(error::Authentication {
				user: username,
				url: self.client.base_url().as_str(),
			})?;

		self.client.set_session_cookie(response.session.cookie());
		log::debug!("Acquired Jira session {}", response.session.name);
		Ok(())
	}
}
