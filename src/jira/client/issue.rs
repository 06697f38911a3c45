use serde::Serialize;
use snafu::ResultExt;

use super::JiraClient;
use crate::{
	constants::{ISSUE_PATH, SEARCH_FIELDS, SEARCH_PATH},
	error,
	jira::{Comment, Issue, NewComment, SearchOptions, SearchResults},
	types::Result,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery<'a> {
	jql: &'a str,
	start_at: u32,
	max_results: u32,
	fields: &'a str,
}

impl JiraClient {
	/// Runs a single page of a JQL search.
	pub async fn search(
		&self,
		jql: &str,
		options: &SearchOptions,
	) -> Result<SearchResults> {
		let url = self
			.client
			.endpoint(SEARCH_PATH.split('/'))
			.context(error::Search { jql })?;
		let query = SearchQuery {
			jql,
			start_at: options.start_at,
			max_results: options.max_results,
			fields: SEARCH_FIELDS,
		};
		self.client
			.get(url, &query)
			.await
			.context(error::Search { jql })
	}

	/// Gets all issues matching `jql` across all result pages, in the order
	/// Jira returns them.
	pub async fn search_all(&self, jql: &str) -> Result<Vec<Issue>> {
		let mut issues = Vec::new();
		let mut options = SearchOptions::default();

		loop {
			let page = self.search(jql, &options).await?;
			let fetched = page.issues.len() as u32;
			issues.extend(page.issues);

			if fetched == 0 || options.start_at + fetched >= page.total {
				break;
			}
			options.start_at += fetched;
		}

		Ok(issues)
	}

	pub async fn add_comment(
		&self,
		issue_key: &str,
		body: &str,
	) -> Result<Comment> {
		let url = self
			.client
			.endpoint(
				ISSUE_PATH
					.split('/')
					.chain(vec![issue_key, "comment"].into_iter()),
			)
			.context(error::Comment { issue_key })?;
		self.client
			.post(url, &NewComment { body })
			.await
			.context(error::Comment { issue_key })
	}
}
