//! CLI entry point for graph-dam, a Microsoft Graph deviceAppManagement client.
//!
//! Authenticates via OAuth2 client credentials, then dispatches to the
//! selected subcommand. Results are printed to stdout as pretty JSON; logs
//! go to stderr.
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (auth failure, API error, network error, etc.)
//! - 2: argument validation error (clap handles this automatically)

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use graph_dam::auth::TokenProvider;
use graph_dam::builders::{CollectionRequestBuilder, Deletable, Keyed, Resource};
use graph_dam::client::GraphClient;
use graph_dam::config::NationalCloud;
use graph_dam::error::Result;
use graph_dam::models::DeviceAppManagement;
use graph_dam::query::{CountQuery, ItemQuery, ListQuery, RequestConfiguration};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Entra ID tenant ID for OAuth2 authentication.
    #[arg(long, env = "GRAPH_TENANT_ID")]
    tenant_id: String,

    /// Entra ID application (client) ID.
    #[arg(long, env = "GRAPH_CLIENT_ID")]
    client_id: String,

    /// Client secret. Prefer the GRAPH_CLIENT_SECRET environment variable
    /// to keep it out of process listings and shell history.
    #[arg(long, env = "GRAPH_CLIENT_SECRET", hide_env_values = true)]
    secret: String,

    /// National cloud: global, us-gov, us-gov-dod or china.
    #[arg(long, default_value = "global")]
    cloud: NationalCloud,

    /// Override the Graph base URL (e.g. a proxy or mock server).
    #[arg(long)]
    base_url: Option<String>,

    /// Log requests at debug level to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tenant-wide deviceAppManagement settings, updating them first
    /// when an option is given.
    Settings {
        /// Enable or disable the Microsoft Store for Business integration.
        #[arg(long)]
        store_enabled: Option<bool>,
        /// Locale used for Microsoft Store for Business syncs, e.g. en-us.
        #[arg(long)]
        store_language: Option<String>,
    },
    /// List a collection.
    List {
        collection: Collection,
        /// OData $filter expression.
        #[arg(long)]
        filter: Option<String>,
        /// Comma-separated properties to return.
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
        /// Page size.
        #[arg(long)]
        top: Option<u32>,
        /// Follow @odata.nextLink until every page has been read.
        #[arg(long)]
        all: bool,
    },
    /// Read one entity of a collection.
    Get {
        collection: Collection,
        id: String,
        /// Comma-separated properties to return.
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
    },
    /// Count the entities of a collection.
    Count {
        collection: Collection,
        /// OData $filter expression.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Delete one entity of a collection.
    Delete { collection: Collection, id: String },
    /// Start a Microsoft Store for Business app sync.
    SyncStore,
    /// Sync the licenses of a VPP token.
    SyncVpp {
        /// VPP token ID.
        token_id: String,
    },
}

/// Top-level collections under /deviceAppManagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    MobileApps,
    MobileAppCategories,
    MobileAppConfigurations,
    TargetedManagedAppConfigurations,
    ManagedEBooks,
    ManagedAppPolicies,
    AndroidManagedAppProtections,
    IosManagedAppProtections,
    DefaultManagedAppProtections,
    ManagedAppRegistrations,
    ManagedAppStatuses,
    VppTokens,
    WindowsInformationProtectionPolicies,
    MdmWindowsInformationProtectionPolicies,
}

/// Binds `$builder` to the collection builder selected by `$collection`
/// and evaluates `$body` with it. Each arm has a different builder type.
macro_rules! with_collection {
    ($client:expr, $collection:expr, |$builder:ident| $body:expr) => {{
        let dam = $client.device_app_management();
        match $collection {
            Collection::MobileApps => { let $builder = dam.mobile_apps(); $body }
            Collection::MobileAppCategories => { let $builder = dam.mobile_app_categories(); $body }
            Collection::MobileAppConfigurations => { let $builder = dam.mobile_app_configurations(); $body }
            Collection::TargetedManagedAppConfigurations => {
                let $builder = dam.targeted_managed_app_configurations();
                $body
            }
            Collection::ManagedEBooks => { let $builder = dam.managed_e_books(); $body }
            Collection::ManagedAppPolicies => { let $builder = dam.managed_app_policies(); $body }
            Collection::AndroidManagedAppProtections => {
                let $builder = dam.android_managed_app_protections();
                $body
            }
            Collection::IosManagedAppProtections => { let $builder = dam.ios_managed_app_protections(); $body }
            Collection::DefaultManagedAppProtections => {
                let $builder = dam.default_managed_app_protections();
                $body
            }
            Collection::ManagedAppRegistrations => { let $builder = dam.managed_app_registrations(); $body }
            Collection::ManagedAppStatuses => { let $builder = dam.managed_app_statuses(); $body }
            Collection::VppTokens => { let $builder = dam.vpp_tokens(); $body }
            Collection::WindowsInformationProtectionPolicies => {
                let $builder = dam.windows_information_protection_policies();
                $body
            }
            Collection::MdmWindowsInformationProtectionPolicies => {
                let $builder = dam.mdm_windows_information_protection_policies();
                $body
            }
        }
    }};
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("graph_dam=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(args: &Cli) -> Result<GraphClient> {
    let tp = TokenProvider::for_cloud(args.cloud, &args.tenant_id, &args.client_id, &args.secret);
    match &args.base_url {
        Some(base_url) => GraphClient::with_base_url(tp, base_url),
        None => GraphClient::for_cloud(tp, args.cloud),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn list<R: Resource>(
    builder: CollectionRequestBuilder<'_, R>,
    query: ListQuery,
    all: bool,
) -> Result<()> {
    let config = RequestConfiguration::with_query(query);
    if all {
        let items = builder.pages(Some(&config)).collect_all().await?;
        debug!(items = items.len(), "collected all pages");
        print_json(&items)
    } else {
        print_json(&builder.get(Some(&config)).await?)
    }
}

async fn get<R: Keyed>(builder: CollectionRequestBuilder<'_, R>, id: &str, select: Vec<String>) -> Result<()> {
    let config = RequestConfiguration::with_query(ItemQuery {
        select,
        ..Default::default()
    });
    print_json(&builder.by_id(id).get(Some(&config)).await?)
}

async fn count<R: Resource>(builder: CollectionRequestBuilder<'_, R>, filter: Option<String>) -> Result<()> {
    let config = RequestConfiguration::with_query(CountQuery { filter, search: None });
    println!("{}", builder.count().get(Some(&config)).await?);
    Ok(())
}

async fn delete<R: Keyed + Deletable>(builder: CollectionRequestBuilder<'_, R>, id: &str) -> Result<()> {
    builder.by_id(id).delete(None).await?;
    eprintln!("Deleted {id}");
    Ok(())
}

async fn run(args: Cli) -> Result<()> {
    let client = build_client(&args)?;
    let dam = client.device_app_management();

    match args.command {
        Commands::Settings {
            store_enabled,
            store_language,
        } => {
            if store_enabled.is_some() || store_language.is_some() {
                let update = DeviceAppManagement {
                    is_enabled_for_microsoft_store_for_business: store_enabled,
                    microsoft_store_for_business_language: store_language,
                    ..Default::default()
                };
                dam.patch(&update, None).await?;
            }
            print_json(&dam.get(None).await?)
        }
        Commands::List {
            collection,
            filter,
            select,
            top,
            all,
        } => {
            let query = ListQuery {
                filter,
                select,
                top,
                ..Default::default()
            };
            with_collection!(client, collection, |builder| list(builder, query, all).await)
        }
        Commands::Get { collection, id, select } => {
            with_collection!(client, collection, |builder| get(builder, &id, select).await)
        }
        Commands::Count { collection, filter } => {
            with_collection!(client, collection, |builder| count(builder, filter).await)
        }
        Commands::Delete { collection, id } => {
            with_collection!(client, collection, |builder| delete(builder, &id).await)
        }
        Commands::SyncStore => {
            dam.sync_microsoft_store_for_business_apps().post(&(), None).await?;
            eprintln!("Microsoft Store for Business sync requested");
            Ok(())
        }
        Commands::SyncVpp { token_id } => {
            let token = dam
                .vpp_tokens()
                .by_id(&token_id)
                .sync_licenses()
                .post(&(), None)
                .await?;
            match token {
                Some(token) => print_json(&token),
                None => {
                    eprintln!("License sync requested for {token_id}");
                    Ok(())
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let request_id = e
                .odata_error()
                .and_then(|odata| odata.error.inner_error.as_ref())
                .and_then(|inner| inner.request_id.as_deref());
            if let Some(request_id) = request_id {
                eprintln!("request-id: {request_id}");
            }
            ExitCode::FAILURE
        }
    }
}
