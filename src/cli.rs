use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
	config::SettingsLayer, constants::DEFAULT_INACTIVE_DAYS,
	nudge::NudgeOptions,
};

#[derive(Parser, Debug)]
#[command(
	name = "jira-nudge",
	version,
	about = "CLI for Jira housekeeping tasks.",
	long_about = "CLI for Jira housekeeping tasks. Uses the Jira REST API to \
	              control your instance and execute common tasks."
)]
pub struct Cli {
	/// Config file (default is $HOME/.jira-nudge.yaml)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Dry run, no changes made
	#[arg(short = 'n', long = "no-op", global = true)]
	pub no_op: bool,

	/// More log output
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(flatten)]
	pub connection: ConnectionArgs,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
	/// Jira instance URL (format: scheme://host[:port][/context])
	#[arg(long, global = true)]
	pub url: Option<String>,

	/// Jira username
	#[arg(long, global = true)]
	pub user: Option<String>,

	/// Jira password
	#[arg(long, global = true)]
	pub pass: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Prompt issue watchers to action their tickets.
	///
	/// Looks for issues that have not seen any activity in the past x days
	/// and adds a comment warning of closure.
	Nudge(NudgeArgs),
}

#[derive(Args, Debug)]
pub struct NudgeArgs {
	/// The project to scan
	#[arg(short, long)]
	pub project: String,

	/// Inactive for the past x days
	#[arg(
		short,
		long,
		default_value_t = DEFAULT_INACTIVE_DAYS,
		allow_negative_numbers = true
	)]
	pub days: i64,
}

impl From<ConnectionArgs> for SettingsLayer {
	fn from(args: ConnectionArgs) -> Self {
		Self {
			url: args.url,
			user: args.user,
			pass: args.pass,
		}
	}
}

impl NudgeArgs {
	pub fn options(&self, dry_run: bool) -> NudgeOptions {
		NudgeOptions {
			project: self.project.clone(),
			days: self.days,
			dry_run,
		}
	}
}
