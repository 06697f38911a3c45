pub const NUDGE_MESSAGE: &str =
	"NUDGE:: this issue has been inactive for a while and is targeted for closure.";

pub const DEFAULT_INACTIVE_DAYS: i64 = 14;

pub const CONFIG_FILE_NAME: &str = ".jira-nudge.yaml";

pub const URL_ENV: &str = "JIRA_URL";
pub const USER_ENV: &str = "JIRA_USER";
pub const PASS_ENV: &str = "JIRA_PASS";

// Jira REST paths, relative to the instance base URL
pub const SESSION_PATH: &str = "rest/auth/1/session";
pub const SEARCH_PATH: &str = "rest/api/2/search";
pub const ISSUE_PATH: &str = "rest/api/2/issue";

pub const SEARCH_FIELDS: &str = "summary,updated";
pub const SEARCH_PAGE_SIZE: u32 = 50;

pub const USER_AGENT: &str =
	concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
