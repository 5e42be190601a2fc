use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use lmclient::Builder;
use lmcore::{
    interest::Interest,
    lead::Lead,
    record::Record,
};
use lmctrl::{
    handle::Applied,
    notify::Level,
    platform::Platform,
};
use std::sync::Arc;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Entity {
    Lead,
    Interest,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    List {
        entity: Entity,
        /// Query string of the list location, e.g. `page=2&sort=name,desc`.
        #[clap(long, default_value = "")]
        query: String,
        /// Number of pages to accumulate.
        #[clap(long, default_value_t = 1)]
        pages: u64,
    },
    #[command(arg_required_else_help = true)]
    Get {
        entity: Entity,
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        entity: Entity,
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("lmclient")
        .module("lmcore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let items_per_page = args.builder.lm_items_per_page;
    let platform = Platform::new(
        Arc::new(args.builder.build()?),
        items_per_page,
    );

    let result = match args.command {
        Commands::List { entity, query, pages } => match entity {
            Entity::Lead => list::<Lead>(&platform, &query, pages).await,
            Entity::Interest => list::<Interest>(&platform, &query, pages).await,
        },
        Commands::Get { entity, id } => match entity {
            Entity::Lead => get::<Lead>(&platform, id).await,
            Entity::Interest => get::<Interest>(&platform, id).await,
        },
        Commands::Delete { entity, id } => match entity {
            Entity::Lead => delete::<Lead>(&platform, id).await,
            Entity::Interest => delete::<Interest>(&platform, id).await,
        },
    };

    for notice in platform.notifier.drain() {
        match notice.level {
            Level::Info => log::info!("{}", notice.message),
            Level::Error => log::error!("{}", notice.message),
        }
    }
    result
}

async fn list<R: Record>(
    platform: &Platform,
    query: &str,
    pages: u64,
) -> anyhow::Result<()> {
    let mut ctrl = platform.list_ctrl::<R>(query);
    ctrl.fetch().await?;
    for _ in 1..pages {
        if ctrl.load_more().await? == Applied::Exhausted {
            break;
        }
    }
    println!("{}", serde_json::to_string_pretty(ctrl.records())?);
    eprintln!(
        "{} of {} {}; next query: {}{}",
        ctrl.records().len(),
        ctrl.total_count()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string()),
        R::COLLECTION,
        ctrl.query(),
        if ctrl.has_more() { " (more available)" } else { "" },
    );
    Ok(())
}

async fn get<R: Record>(platform: &Platform, id: i64) -> anyhow::Result<()> {
    let mut ctrl = platform.detail_ctrl::<R>();
    let record = ctrl.load(id).await?;
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

async fn delete<R: Record>(platform: &Platform, id: i64) -> anyhow::Result<()> {
    let mut ctrl = platform.delete_ctrl::<R>(id);
    ctrl.load().await?;
    ctrl.confirm().await?;
    println!("deleted {} id {id}", R::COLLECTION);
    Ok(())
}
