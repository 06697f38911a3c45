#![allow(dead_code)]

use httptest::Server;
use jira_nudge::jira::JiraClient;
use serde_json::{json, Value};

pub const SEARCH_PATH: &str = "/rest/api/2/search";

pub fn base_url(server: &Server) -> String {
	server.url("/").to_string()
}

pub fn anonymous_client(server: &Server) -> JiraClient {
	JiraClient::new(&base_url(server)).unwrap()
}

pub fn issue(id: u32, key: &str, summary: &str) -> Value {
	json!({
		"expand": "operations,versionedRepresentations,editmeta,changelog,renderedFields",
		"id": id.to_string(),
		"self": format!("http://www.example.com/jira/rest/api/2/issue/{}", id),
		"key": key,
		"fields": {
			"summary": summary,
			"updated": "2016-03-16T04:22:37.356+0000"
		}
	})
}

pub fn search_page(start_at: u32, total: u32, issues: Vec<Value>) -> Value {
	json!({
		"expand": "names,schema",
		"startAt": start_at,
		"maxResults": 50,
		"total": total,
		"issues": issues
	})
}

/// Two stale issues in project JIR.
pub fn inactive_issues_fixture() -> Value {
	search_page(
		0,
		2,
		vec![
			issue(10002, "JIR-2", "Upgrade the build agents"),
			issue(10006, "JIR-6", "Flaky integration test"),
		],
	)
}

pub fn comment(issue_key: &str, body: &str) -> Value {
	json!({
		"self": format!("http://www.example.com/jira/rest/api/2/issue/10010/comment/{}", issue_key),
		"id": "10100",
		"author": {
			"self": "http://www.example.com/jira/rest/api/2/user?username=fred",
			"name": "fred",
			"displayName": "Fred F. User",
			"active": false
		},
		"body": body,
		"updateAuthor": {
			"self": "http://www.example.com/jira/rest/api/2/user?username=fred",
			"name": "fred",
			"displayName": "Fred F. User",
			"active": false
		},
		"created": "2016-03-16T04:22:37.356+0000",
		"updated": "2016-03-16T04:22:37.356+0000",
		"visibility": {
			"type": "role",
			"value": "Administrators"
		}
	})
}
