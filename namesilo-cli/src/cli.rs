//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "namesilo", version, about = "Manage NameSilo DNS records")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API key (overrides the config file)
    #[arg(long, env = "NAMESILO_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every record of a zone
    List(ListArgs),
    /// Create records
    Append(MutateArgs),
    /// Update matching records, create the rest
    Set(MutateArgs),
    /// Delete matching records
    Delete(MutateArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Zone name, e.g. example.com
    pub zone: String,

    /// Print JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct MutateArgs {
    /// Zone name, e.g. example.com
    pub zone: String,

    /// Read records from a JSON array file instead of flags
    #[arg(long, conflicts_with_all = ["record_type", "name", "value", "ttl", "priority", "id"])]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub record: RecordArgs,

    /// Print JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Default, Args)]
pub struct RecordArgs {
    /// Record type (A, AAAA, CNAME, MX, TXT, ...)
    #[arg(long = "type", required_unless_present = "file")]
    pub record_type: Option<String>,

    /// Record name, relative or fully qualified
    #[arg(long, required_unless_present = "file")]
    pub name: Option<String>,

    /// Record value
    #[arg(long)]
    pub value: Option<String>,

    /// TTL in seconds (registrar default when omitted)
    #[arg(long)]
    pub ttl: Option<u32>,

    /// MX/SRV priority
    #[arg(long)]
    pub priority: Option<u32>,

    /// Registrar record id
    #[arg(long)]
    pub id: Option<String>,
}
