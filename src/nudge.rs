use std::io::Write;

use crate::{
	constants::NUDGE_MESSAGE,
	error,
	jira::{Issue, JiraClient},
	types::Result,
};

lazy_static::lazy_static! {
	static ref PROJECT_KEY: regex::Regex =
		regex::Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct NudgeOptions {
	pub project: String,
	pub days: i64,
	pub dry_run: bool,
}

/// Outcome of a single nudge pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NudgeReport {
	pub matched: Vec<String>,
	pub commented: Vec<String>,
	/// Issue key and error message for every comment that could not be added.
	pub failed: Vec<(String, String)>,
}

/// JQL matching issues in `project` not updated within the last `days` days.
pub fn inactive_issues_query(project: &str, days: i64) -> String {
	format!("project = {} and updated <= -{}d", project, days)
}

pub fn validate(project: &str, days: i64) -> Result<()> {
	if !PROJECT_KEY.is_match(project) {
		return error::Validation {
			msg: format!(
				"project key `{}` must be non-empty and contain only letters, digits or `_`",
				project
			),
		}
		.fail();
	}
	if days < 1 {
		return error::Validation {
			msg: format!("days must be at least 1, got {}", days),
		}
		.fail();
	}
	Ok(())
}

pub async fn search_inactive_issues(
	jira: &JiraClient,
	project: &str,
	days: i64,
) -> Result<Vec<Issue>> {
	validate(project, days)?;

	let jql = inactive_issues_query(project, days);
	log::debug!("Searching Jira with `{}`", jql);
	jira.search_all(&jql).await
}

/// Searches for inactive issues, writes one line per issue to `out` and,
/// unless `options.dry_run` is set, comments on each of them.
///
/// A failed comment is logged and recorded in the report; it does not stop
/// the remaining issues from being processed.
pub async fn run_nudge<W: Write>(
	jira: &JiraClient,
	options: &NudgeOptions,
	out: &mut W,
) -> Result<NudgeReport> {
	let issues =
		search_inactive_issues(jira, &options.project, options.days).await?;
	log::info!(
		"{} issues in {} inactive for {} days",
		issues.len(),
		options.project,
		options.days
	);

	let mut report = NudgeReport::default();
	for issue in issues {
		if let Err(e) =
			writeln!(out, "{} :: {}", issue.key, issue.fields.summary)
		{
			log::warn!("Unable to print {}: {}", issue.key, e);
		}
		report.matched.push(issue.key.clone());

		if options.dry_run {
			continue;
		}

		match jira.add_comment(&issue.key, NUDGE_MESSAGE).await {
			Ok(comment) => {
				log::info!("Nudged {} (comment {})", issue.key, comment.id);
				report.commented.push(issue.key);
			}
			Err(e) => {
				log::error!("Failed to add comment to {}: {}", issue.key, e);
				report.failed.push((issue.key, e.to_string()));
			}
		}
	}

	Ok(report)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	#[test]
	fn query_is_built_from_project_and_days() {
		assert_eq!(
			inactive_issues_query("JIR", 2),
			"project = JIR and updated <= -2d"
		);
		assert_eq!(
			inactive_issues_query("PROJ", 14),
			"project = PROJ and updated <= -14d"
		);
	}

	#[test]
	fn zero_or_negative_days_are_rejected() {
		for days in &[0, -1, -30] {
			match validate("PROJ", *days) {
				Err(Error::Validation { msg }) => {
					assert!(msg.contains("days"), "{}", msg)
				}
				other => panic!("expected validation error, got {:?}", other),
			}
		}
		assert!(validate("PROJ", 1).is_ok());
	}

	#[test]
	fn project_keys_cannot_carry_jql() {
		assert!(validate("", 14).is_err());
		assert!(validate("PROJ or project = OTHER", 14).is_err());
		assert!(validate("PROJ;", 14).is_err());
		assert!(validate("MY_PROJ2", 14).is_ok());
		assert!(validate("10000", 14).is_ok());
	}
}
