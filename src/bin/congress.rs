use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use congress_api::{
    AmendmentType, ApiConfig, BillType, CongressApiError, CongressClient, ConfigError, Limit,
    ListOptions,
};

#[derive(Parser)]
#[command(author, version, about = "Query the Congress.gov API", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    CONGRESS_API_KEY               API key from api.data.gov (required)
    CONGRESS_API_BASE_URL          Override the API base URL
    CONGRESS_API_MAX_RETRIES       Retries for transient failures [default: 3]
    CONGRESS_API_TIMEOUT           Request timeout in seconds [default: 30]
    CONGRESS_API_DEFAULT_CONGRESS  Congress used when --congress is omitted [default: 118]

EXAMPLES:
    congress bills --congress 117 --type hr --limit 5
    congress bill hr 3076 --congress 117 --part actions
    congress amendment samdt 2137 --congress 117 --part text
    congress members --state mi --district 10 --current
    congress member L000174 --part sponsored --limit all")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List bills, optionally narrowed to a congress and bill type
    Bills {
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long = "type")]
        bill_type: Option<BillType>,
        /// Number of records (1-250) or "all"
        #[arg(long)]
        limit: Option<Limit>,
    },
    /// Show one bill or one of its sub-resources
    Bill {
        bill_type: BillType,
        number: u32,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long, value_enum)]
        part: Option<BillPart>,
        #[arg(long)]
        limit: Option<Limit>,
    },
    /// List amendments, optionally narrowed to a congress and amendment type
    Amendments {
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long = "type")]
        amendment_type: Option<AmendmentType>,
        #[arg(long)]
        limit: Option<Limit>,
    },
    /// Show one amendment or one of its sub-resources
    Amendment {
        amendment_type: AmendmentType,
        number: u32,
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long, value_enum)]
        part: Option<AmendmentPart>,
        #[arg(long)]
        limit: Option<Limit>,
    },
    /// List members by congress, state or district
    Members {
        #[arg(long)]
        congress: Option<u32>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long, requires = "state")]
        district: Option<u32>,
        /// Only members currently serving
        #[arg(long)]
        current: bool,
        #[arg(long)]
        limit: Option<Limit>,
    },
    /// Show one member or their (co)sponsored legislation
    Member {
        bioguide_id: String,
        #[arg(long, value_enum)]
        part: Option<MemberPart>,
        #[arg(long)]
        limit: Option<Limit>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BillPart {
    Actions,
    Amendments,
    Committees,
    Cosponsors,
    RelatedBills,
    Subjects,
    Summaries,
    Text,
    Titles,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AmendmentPart {
    Actions,
    Cosponsors,
    Amendments,
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MemberPart {
    Sponsored,
    Cosponsored,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "congress_api=debug" } else { "congress_api=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn options(limit: Option<Limit>) -> ListOptions {
    ListOptions {
        limit,
        ..ListOptions::default()
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &CongressClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Bills { congress, bill_type, limit } => {
            let opts = options(limit);
            let bills = client.bills();
            match (congress, bill_type) {
                (c, Some(t)) => print_json(&bills.list_by_type(t, c, &opts).await?),
                (Some(c), None) => print_json(&bills.list_by_congress(Some(c), &opts).await?),
                (None, None) => print_json(&bills.list_all(&opts).await?),
            }
        }
        Command::Bill { bill_type: t, number: n, congress: c, part, limit } => {
            let opts = options(limit);
            let bills = client.bills();
            match part {
                None => print_json(&bills.get_bill(t, n, c).await?),
                Some(BillPart::Actions) => print_json(&bills.get_actions(t, n, c, &opts).await?),
                Some(BillPart::Amendments) => print_json(&bills.get_amendments(t, n, c, &opts).await?),
                Some(BillPart::Committees) => print_json(&bills.get_committees(t, n, c, &opts).await?),
                Some(BillPart::Cosponsors) => print_json(&bills.get_cosponsors(t, n, c, &opts).await?),
                Some(BillPart::RelatedBills) => print_json(&bills.get_related_bills(t, n, c, &opts).await?),
                Some(BillPart::Subjects) => print_json(&bills.get_subjects(t, n, c, &opts).await?),
                Some(BillPart::Summaries) => print_json(&bills.get_summaries(t, n, c, &opts).await?),
                Some(BillPart::Text) => print_json(&bills.get_text(t, n, c, &opts).await?),
                Some(BillPart::Titles) => print_json(&bills.get_titles(t, n, c, &opts).await?),
            }
        }
        Command::Amendments { congress, amendment_type, limit } => {
            let opts = options(limit);
            let amendments = client.amendments();
            match (congress, amendment_type) {
                (c, Some(t)) => print_json(&amendments.list_by_type(t, c, &opts).await?),
                (Some(c), None) => print_json(&amendments.list_by_congress(Some(c), &opts).await?),
                (None, None) => print_json(&amendments.list_all(&opts).await?),
            }
        }
        Command::Amendment { amendment_type: t, number: n, congress: c, part, limit } => {
            let opts = options(limit);
            let amendments = client.amendments();
            match part {
                None => print_json(&amendments.get_amendment(t, n, c).await?),
                Some(AmendmentPart::Actions) => print_json(&amendments.get_actions(t, n, c, &opts).await?),
                Some(AmendmentPart::Cosponsors) => print_json(&amendments.get_cosponsors(t, n, c, &opts).await?),
                Some(AmendmentPart::Amendments) => print_json(&amendments.get_amendments(t, n, c, &opts).await?),
                Some(AmendmentPart::Text) => print_json(&amendments.get_text(t, n, c, &opts).await?),
            }
        }
        Command::Members { congress, state, district, current, limit } => {
            let mut opts = options(limit);
            if current {
                opts = opts.current_member(true);
            }
            let members = client.members();
            let response = match (congress, state.as_deref(), district) {
                (Some(c), Some(st), Some(d)) => {
                    members.list_by_congress_state_district(Some(c), st, d, &opts).await?
                }
                (None, Some(st), Some(d)) => members.list_by_state_district(st, d, &opts).await?,
                (None, Some(st), None) => members.list_by_state(st, &opts).await?,
                (Some(_), Some(_), None) => bail!("--congress with --state also needs --district"),
                (Some(c), None, _) => members.list_by_congress(Some(c), &opts).await?,
                (None, None, _) => members.list_members(&opts).await?,
            };
            print_json(&response)
        }
        Command::Member { bioguide_id, part, limit } => {
            let opts = options(limit);
            let members = client.members();
            match part {
                None => print_json(&members.get_member(&bioguide_id).await?),
                Some(MemberPart::Sponsored) => {
                    print_json(&members.list_sponsored_legislation(&bioguide_id, &opts).await?)
                }
                Some(MemberPart::Cosponsored) => {
                    print_json(&members.list_cosponsored_legislation(&bioguide_id, &opts).await?)
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = try_main(args).await {
        eprintln!("Error: {e:#}");
        if let Some(api) = e.downcast_ref::<CongressApiError>() {
            if let Some(status) = api.status_code() {
                eprintln!("Status: {status}");
            }
            if let Some(body) = api.response_body() {
                eprintln!("Body: {body}");
            }
        }
        std::process::exit(1);
    }
}

fn explain_config_error(err: ConfigError) -> anyhow::Error {
    match err {
        ConfigError::MissingKey(name) => anyhow!(
            "{name} is not set. Get a key at https://api.data.gov/signup/ and export it or add it to .env"
        ),
        other => anyhow::Error::new(other).context("loading configuration"),
    }
}

async fn try_main(args: Args) -> anyhow::Result<()> {
    let config = ApiConfig::from_env().map_err(explain_config_error)?;
    let client = CongressClient::new(config)?;
    run(&client, args.command).await
}
