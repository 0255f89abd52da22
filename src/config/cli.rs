use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "foursomes")]
#[command(about = "Manage an event roster and draw random foursomes")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL of the player store")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Player collection name")]
    pub table: Option<String>,

    #[arg(long, global = true, env = "FOURSOMES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// 列出目前名單
    List,
    /// 新增一位玩家
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        handicap: String,
        #[arg(long, default_value = "")]
        charity: String,
    },
    /// 依識別碼移除玩家
    Remove {
        id: String,
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// 隨機分組
    Groups {
        #[arg(long, help = "Seed for a reproducible draw")]
        seed: Option<u64>,
        #[arg(long, help = "Print groups as JSON")]
        json: bool,
        #[arg(long, help = "Write scorecards to a CSV file")]
        csv: Option<PathBuf>,
    },
}
