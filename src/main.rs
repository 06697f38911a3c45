use clap::Parser;

use jira_nudge::{
	cli::{Cli, Command},
	config::MainConfig,
	jira::JiraClient,
	nudge,
};

#[tokio::main]
async fn main() {
	if let Err(error) = run().await {
		log::error!("{}", error);
		std::process::exit(1);
	}
}

async fn run() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let default_filter = if cli.verbose { "debug" } else { "info" };
	env_logger::from_env(
		env_logger::Env::default().default_filter_or(default_filter),
	)
	.init();

	let config =
		MainConfig::resolve(cli.connection.into(), cli.config.as_deref())?;

	match cli.command {
		Command::Nudge(args) => {
			let options = args.options(cli.no_op);
			log::debug!("project: {}", options.project);
			log::debug!("days: {}", options.days);
			log::debug!("noop: {}", options.dry_run);

			let jira = JiraClient::connect(
				&config.jira_url,
				&config.jira_user,
				&config.jira_pass,
			)
			.await?;

			let stdout = std::io::stdout();
			let report =
				nudge::run_nudge(&jira, &options, &mut stdout.lock()).await?;

			log::info!(
				"{} matched, {} nudged, {} failed{}",
				report.matched.len(),
				report.commented.len(),
				report.failed.len(),
				if options.dry_run { " (no-op)" } else { "" }
			);
		}
	}

	Ok(())
}
