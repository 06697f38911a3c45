use std::path::{Path, PathBuf};

use serde::Deserialize;
use snafu::ResultExt;

use crate::{
	constants::{CONFIG_FILE_NAME, PASS_ENV, URL_ENV, USER_ENV},
	error,
	types::Result,
};

/// One source of connection settings (command line, environment or config
/// file). Unset and empty values defer to the next source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
	pub url: Option<String>,
	pub user: Option<String>,
	pub pass: Option<String>,
}

impl SettingsLayer {
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();
		Self {
			url: dotenv::var(URL_ENV).ok(),
			user: dotenv::var(USER_ENV).ok(),
			pass: dotenv::var(PASS_ENV).ok(),
		}
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.context(error::ConfigRead { path })?;
		// An empty file parses as YAML null.
		if content.trim().is_empty() {
			return Ok(Self::default());
		}
		serde_yaml::from_str(&content).context(error::ConfigParse { path })
	}
}

#[derive(Clone)]
pub struct MainConfig {
	pub jira_url: String,
	pub jira_user: String,
	pub jira_pass: String,
}

impl MainConfig {
	/// Resolves connection settings with precedence flags > environment >
	/// config file.
	///
	/// An explicitly given `config_path` must exist; the default
	/// `$HOME/.jira-nudge.yaml` is read only when present.
	pub fn resolve(
		flags: SettingsLayer,
		config_path: Option<&Path>,
	) -> Result<Self> {
		let config_file = match config_path {
			Some(path) => Some(path.to_path_buf()),
			None => default_config_path().filter(|path| path.is_file()),
		};
		let file = match &config_file {
			Some(path) => {
				let layer = SettingsLayer::from_file(path)?;
				log::info!("Using config file: {}", path.display());
				layer
			}
			None => SettingsLayer::default(),
		};

		Self::merge(flags, SettingsLayer::from_env(), file)
	}

	pub fn merge(
		flags: SettingsLayer,
		env: SettingsLayer,
		file: SettingsLayer,
	) -> Result<Self> {
		fn pick(
			flag: Option<String>,
			env: Option<String>,
			file: Option<String>,
		) -> Option<String> {
			vec![flag, env, file]
				.into_iter()
				.flatten()
				.find(|value| !value.is_empty())
		}

		let jira_url = match pick(flags.url, env.url, file.url) {
			Some(url) => url,
			None => {
				return error::Config {
					msg: format!(
						"no Jira URL given; use --url, {} or `url:` in {}",
						URL_ENV, CONFIG_FILE_NAME
					),
				}
				.fail()
			}
		};

		Ok(Self {
			jira_url,
			jira_user: pick(flags.user, env.user, file.user)
				.unwrap_or_default(),
			jira_pass: pick(flags.pass, env.pass, file.pass)
				.unwrap_or_default(),
		})
	}
}

pub fn default_config_path() -> Option<PathBuf> {
	dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use std::io::Write;

	fn layer(
		url: Option<&str>,
		user: Option<&str>,
		pass: Option<&str>,
	) -> SettingsLayer {
		SettingsLayer {
			url: url.map(str::to_owned),
			user: user.map(str::to_owned),
			pass: pass.map(str::to_owned),
		}
	}

	#[test]
	fn flags_win_over_env_and_env_over_file() {
		let config = MainConfig::merge(
			layer(Some("https://flag.example.com"), None, None),
			layer(Some("https://env.example.com"), Some("env-user"), None),
			layer(
				Some("https://file.example.com"),
				Some("file-user"),
				Some("file-pass"),
			),
		)
		.unwrap();

		assert_eq!(config.jira_url, "https://flag.example.com");
		assert_eq!(config.jira_user, "env-user");
		assert_eq!(config.jira_pass, "file-pass");
	}

	#[test]
	fn empty_values_defer_to_next_source() {
		let config = MainConfig::merge(
			layer(Some(""), Some(""), None),
			SettingsLayer::default(),
			layer(Some("https://file.example.com"), Some("file-user"), None),
		)
		.unwrap();

		assert_eq!(config.jira_url, "https://file.example.com");
		assert_eq!(config.jira_user, "file-user");
		assert_eq!(config.jira_pass, "");
	}

	#[test]
	fn missing_url_is_a_config_error() {
		match MainConfig::merge(
			SettingsLayer::default(),
			SettingsLayer::default(),
			layer(None, Some("user"), Some("pass")),
		) {
			Err(Error::Config { msg }) => assert!(msg.contains("--url")),
			Err(e) => panic!("unexpected error: {}", e),
			Ok(_) => panic!("expected an error"),
		}
	}

	#[test]
	fn reads_yaml_config_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "url: https://jira.example.com/jira/").unwrap();
		writeln!(file, "user: fred").unwrap();
		writeln!(file, "pass: secret").unwrap();

		let layer = SettingsLayer::from_file(file.path()).unwrap();
		assert_eq!(
			layer,
			SettingsLayer {
				url: Some("https://jira.example.com/jira/".to_owned()),
				user: Some("fred".to_owned()),
				pass: Some("secret".to_owned()),
			}
		);
	}

	#[test]
	fn empty_config_file_is_allowed() {
		let file = tempfile::NamedTempFile::new().unwrap();
		assert_eq!(
			SettingsLayer::from_file(file.path()).unwrap(),
			SettingsLayer::default()
		);
	}

	#[test]
	fn explicit_config_file_must_exist() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.yaml");
		match MainConfig::resolve(
			SettingsLayer::default(),
			Some(missing.as_path()),
		) {
			Err(Error::ConfigRead { path, .. }) => assert_eq!(path, missing),
			Err(e) => panic!("unexpected error: {}", e),
			Ok(_) => panic!("expected an error"),
		}
	}

	#[test]
	fn malformed_config_file_is_reported() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "url: [unterminated").unwrap();
		assert!(matches!(
			SettingsLayer::from_file(file.path()),
			Err(Error::ConfigParse { .. })
		));
	}
}
