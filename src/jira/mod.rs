use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod client;

pub use client::JiraClient;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
	pub id: String,
	pub key: String,
	#[serde(rename = "self", default)]
	pub self_link: Option<String>,
	pub fields: IssueFields,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct IssueFields {
	#[serde(default)]
	pub summary: String,
	#[serde(default, with = "jira_datetime")]
	pub updated: Option<DateTime<FixedOffset>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
	#[serde(default)]
	pub start_at: u32,
	#[serde(default)]
	pub max_results: u32,
	#[serde(default)]
	pub total: u32,
	#[serde(default)]
	pub issues: Vec<Issue>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
	pub start_at: u32,
	pub max_results: u32,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			start_at: 0,
			max_results: crate::constants::SEARCH_PAGE_SIZE,
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub display_name: Option<String>,
	#[serde(default)]
	pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	pub id: String,
	#[serde(rename = "self", default)]
	pub self_link: Option<String>,
	pub body: String,
	#[serde(default)]
	pub author: Option<User>,
	#[serde(default, with = "jira_datetime")]
	pub created: Option<DateTime<FixedOffset>>,
	#[serde(default, with = "jira_datetime")]
	pub updated: Option<DateTime<FixedOffset>>,
}

#[derive(Serialize, Debug, Clone)]
pub struct NewComment<'a> {
	pub body: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct Credentials<'a> {
	pub username: &'a str,
	pub password: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionResponse {
	pub session: Session,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
	pub name: String,
	pub value: String,
}

impl Session {
	pub fn cookie(&self) -> String {
		format!("{}={}", self.name, self.value)
	}
}

/// Jira timestamps look like `2016-03-16T04:22:37.356+0000`, which is not
/// RFC 3339 (no colon in the offset).
mod jira_datetime {
	use chrono::{DateTime, FixedOffset};
	use serde::{de, Deserialize, Deserializer, Serializer};

	const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

	pub fn serialize<S>(
		value: &Option<DateTime<FixedOffset>>,
		serializer: S,
	) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(datetime) => serializer.serialize_str(
				&datetime.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
			),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D>(
		deserializer: D,
	) -> Result<Option<DateTime<FixedOffset>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(s) => DateTime::parse_from_str(&s, FORMAT)
				.or_else(|_| DateTime::parse_from_rfc3339(&s))
				.map(Some)
				.map_err(de::Error::custom),
			None => Ok(None),
		}
	}
}
