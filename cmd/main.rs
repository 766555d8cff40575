use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use netlify_dns::error::{Error, Result};
use netlify_dns::provider::Provider;
use netlify_dns::provider::netlify::Netlify;
use netlify_dns::record::Record;

mod config;

#[derive(Parser)]
#[command(version, about = "Manage Netlify DNS records")]
struct Cli {
    #[arg(short, long)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a zone name to its Netlify zone
    Zone { zone: String },

    /// List records with the given type and name
    List {
        zone: String,

        #[command(flatten)]
        record: RecordArgs,

        /// Also filter on the record value
        #[arg(long)]
        match_content: bool,
    },

    /// Create a record
    Create {
        zone: String,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Change the given fields of an existing record
    Update {
        zone: String,

        #[arg(long)]
        id: String,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Update the record with this type and name, or create it
    Set {
        zone: String,

        #[command(flatten)]
        record: RecordArgs,
    },
}

#[derive(clap::Args)]
struct RecordArgs {
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    rtype: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    value: String,

    #[arg(long, default_value_t = 0)]
    ttl: u32,
}

impl From<RecordArgs> for Record {
    fn from(args: RecordArgs) -> Self {
        Record::new(&args.rtype, &args.name, &args.value, args.ttl)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::Parser::parse_yaml(&cli.config)?;
    let netlify = Netlify::from_cfg(cfg.try_into()?);

    match cli.command {
        Command::Zone { zone } => print_json(&netlify.resolve_zone(&zone).await?),
        Command::List {
            zone,
            record,
            match_content,
        } => {
            let records = netlify
                .get_records(&zone, &Record::from(record), match_content)
                .await?;
            print_json(&records)
        }
        Command::Create { zone, record } => {
            print_json(&netlify.create_record(&zone, &Record::from(record)).await?)
        }
        Command::Update { zone, id, record } => {
            let old = Record {
                id: Some(id),
                ..Default::default()
            };
            print_json(&netlify.update_record(&zone, &old, &Record::from(record)).await?)
        }
        Command::Set { zone, record } => {
            let records = vec![Record::from(record)];
            print_json(&netlify.set_records(&zone, &records).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| Error::EncodeError(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
