use serde::Serialize;
use snafu::{OptionExt, ResultExt};
use url::Url;

use crate::{constants::USER_AGENT, error, types::Result};

/// Thin wrapper over `reqwest::Client` that knows the Jira base URL, the
/// session cookie and how to turn non-2xx responses into errors.
pub struct Client {
	client: reqwest::Client,
	base_url: Url,
	session_cookie: Option<String>,
}

/// HTTP util methods.
impl Client {
	pub fn new(base_url: Url) -> Result<Self> {
		let client = reqwest::Client::builder()
			.user_agent(USER_AGENT)
			.build()
			.context(error::Http)?;

		Ok(Self {
			client,
			base_url,
			session_cookie: None,
		})
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn set_session_cookie<I: Into<String>>(&mut self, cookie: I) {
		self.session_cookie = Some(cookie.into());
	}

	pub fn is_authenticated(&self) -> bool {
		self.session_cookie.is_some()
	}

	/// Appends `segments` to the base URL, escaping each one.
	pub fn endpoint<'a, I>(&self, segments: I) -> Result<Url>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut url = self.base_url.clone();
		url.path_segments_mut()
			.ok()
			.context(error::Initialization {
				url: self.base_url.as_str(),
				reason: "URL cannot be a base",
			})?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	pub async fn request(
		&self,
		builder: reqwest::RequestBuilder,
	) -> Result<reqwest::Response> {
		let mut builder =
			builder.header(reqwest::header::ACCEPT, "application/json");
		if let Some(cookie) = &self.session_cookie {
			builder = builder.header(reqwest::header::COOKIE, cookie);
		}
		let request = builder.build().context(error::Http)?;

		log::debug!("{} {}", request.method(), request.url());

		let response =
			self.client.execute(request).await.context(error::Http)?;
		let status = response.status();

		if status.is_success() {
			Ok(response)
		} else {
			let text = response.text().await.context(error::Http)?;

			// Try to decode the response error as JSON otherwise store
			// it as plain text in a JSON object.
			let body = if let Ok(value) =
				serde_json::from_str(&text).context(error::Json)
			{
				value
			} else {
				serde_json::json!({ "error_message": text })
			};

			error::Response { status, body }.fail()
		}
	}

	/// Sends a `GET` request to `url` with `query` appended.
	pub async fn get<Q, T>(&self, url: Url, query: &Q) -> Result<T>
	where
		Q: Serialize + ?Sized,
		T: serde::de::DeserializeOwned,
	{
		self.request(self.client.get(url).query(query))
			.await?
			.json::<T>()
			.await
			.context(error::Http)
	}

	pub async fn post_response<B>(
		&self,
		url: Url,
		body: &B,
	) -> Result<reqwest::Response>
	where
		B: Serialize + ?Sized,
	{
		self.request(self.client.post(url).json(body)).await
	}

	pub async fn post<B, T>(&self, url: Url, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: serde::de::DeserializeOwned,
	{
		self.post_response(url, body)
			.await?
			.json::<T>()
			.await
			.context(error::Http)
	}
}
