mod bootstrap;
mod di;

use clap::{Parser, Subcommand};
use v6crawl_application::ports::DomainRepository;
use v6crawl_domain::config::CliOverrides;
use v6crawl_jobs::JobRunner;

#[derive(Parser)]
#[command(name = "v6crawl")]
#[command(version)]
#[command(about = "IPv6 readiness crawler")]
struct Cli {
    /// Force debug-level logging regardless of RUST_LOG.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the general domain-pool crawl loop.
    Crawl,
    /// Campaign-flavor subcommands.
    Campaign {
        #[command(subcommand)]
        command: CampaignCommand,
    },
}

#[derive(Subcommand)]
enum CampaignCommand {
    /// Run the campaign domain-pool crawl loop.
    Crawl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(CliOverrides { verbose: cli.verbose })?;
    bootstrap::init_logging(&config);

    let pool = bootstrap::init_database(&config.database).await?;
    let runtime = di::build(pool, &config)?;

    let runner = match cli.command {
        Command::Crawl => {
            runtime
                .domain_repo
                .init_space_timestamps(config.general.interval_secs as i64, config.general.page_size)
                .await?;
            JobRunner::new().with_general_crawl(runtime.general_scheduler)
        }
        Command::Campaign { command: CampaignCommand::Crawl } => {
            JobRunner::new().with_campaign_crawl(runtime.campaign_scheduler)
        }
    };

    runner.start().await;

    tracing::info!("crawler running, press ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");

    Ok(())
}
