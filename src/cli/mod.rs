pub mod api_client;
mod commands;
pub mod error;
mod utils;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::api_client::ApiClient;
use crate::cli::commands::{DataSource, ListParams};
use crate::cli::error::CliResult;

#[derive(Parser)]
#[command(name = "exd")]
#[command(
    author,
    version,
    about = "Browse exam platform records from the terminal",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override the API URL (default: EXD_API_URL env or http://localhost:8080/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the API (default: EXD_TOKEN env)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Platform user accounts
    Users {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Exams
    Exams {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Exam categories
    Categories {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Subject topics
    Topics {
        #[command(subcommand)]
        command: ResourceCommands,
    },
}

#[derive(Subcommand)]
enum ResourceCommands {
    /// Search, sort and page through records
    List(ListArgs),
    /// Show the field names accepted by --sort
    Fields,
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive substring to match against the default search fields
    #[arg(short, long)]
    search: Option<String>,
    /// Field to sort by (see `fields`)
    #[arg(long)]
    sort: Option<String>,
    /// Sort direction (asc or desc)
    #[arg(long, default_value = "asc")]
    order: String,
    /// Page to show, 1-based; clamped to the last page
    #[arg(short, long, default_value_t = 1)]
    page: usize,
    /// Records per page
    #[arg(long, default_value_t = crate::view::pagination::DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// Read records from a JSON array file instead of the demo data
    #[arg(long, conflicts_with = "remote")]
    file: Option<PathBuf>,
    /// Fetch records from the API
    #[arg(long)]
    remote: bool,
    /// Include soft-deleted records (topics only)
    #[arg(long)]
    include_deleted: bool,
    /// Output format (table or json)
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    format: String,
}

impl ListArgs {
    fn params(&self) -> ListParams<'_> {
        ListParams {
            search: self.search.as_deref(),
            sort: self.sort.as_deref(),
            order: Some(self.order.as_str()),
            page: self.page,
            page_size: self.page_size,
            include_hidden: self.include_deleted,
        }
    }

    fn source<'a>(&'a self, api_client: &'a ApiClient) -> DataSource<'a> {
        match (&self.file, self.remote) {
            (Some(path), _) => DataSource::File(path),
            (None, true) => DataSource::Remote(api_client),
            (None, false) => DataSource::Mock,
        }
    }
}

/// Initialize tracing to stderr so it never mixes with command output
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "examdesk=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_resource(
    kind: &Commands,
    command: &ResourceCommands,
    api_client: &ApiClient,
) -> CliResult<String> {
    use commands::{categories, exams, topics, users};

    match command {
        ResourceCommands::List(args) => {
            let source = args.source(api_client);
            let params = args.params();
            let format = args.format.as_str();
            match kind {
                Commands::Users { .. } => users::list_users(source, &params, format).await,
                Commands::Exams { .. } => exams::list_exams(source, &params, format).await,
                Commands::Categories { .. } => {
                    categories::list_categories(source, &params, format).await
                }
                Commands::Topics { .. } => topics::list_topics(source, &params, format).await,
            }
        }
        ResourceCommands::Fields => Ok(match kind {
            Commands::Users { .. } => users::user_fields(),
            Commands::Exams { .. } => exams::exam_fields(),
            Commands::Categories { .. } => categories::category_fields(),
            Commands::Topics { .. } => topics::topic_fields(),
        }),
    }
}

pub async fn run() -> miette::Result<()> {
    init_tracing();
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url, cli.token);
    debug!(
        base_url = api_client.base_url(),
        authorized = api_client.has_token(),
        "CLI started"
    );

    let Some(kind) = cli.command else {
        return Ok(());
    };
    let command = match &kind {
        Commands::Users { command }
        | Commands::Exams { command }
        | Commands::Categories { command }
        | Commands::Topics { command } => command,
    };

    let output = run_resource(&kind, command, &api_client).await?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;
