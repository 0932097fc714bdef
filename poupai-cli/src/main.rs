use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use poupai_api::ApiClient;
use poupai_core::{TxnFilter, TxnKind};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod dashboard_cmd;
mod goals_cmd;
mod ledger_cmd;
mod render;
mod state;

use config::Config;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POUPAI_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "poupai", version = VERSION, about = "Poupai personal finance CLI")]
struct Cli {
    /// User id (overrides [user].id in config.toml)
    #[arg(long, global = true)]
    user: Option<i64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest transactions grouped by day
    Ledger {
        /// all, income or expense
        #[arg(long, default_value_t = TxnFilter::All)]
        filter: TxnFilter,

        /// Page size (default: [ledger].page_size)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Print the day groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register an expense or income
    Add {
        #[command(subcommand)]
        command: AddCommand,
    },

    /// Delete an expense or income
    Delete {
        #[command(subcommand)]
        command: DeleteCommand,
    },

    /// Monthly balance and spending by category
    Dashboard {
        #[arg(long)]
        year: Option<i32>,

        /// 1-12 (default: current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Savings goals
    Goals {
        #[command(subcommand)]
        command: GoalsCommand,
    },

    /// Manage ~/.poupai/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AddCommand {
    Expense {
        #[arg(long)]
        description: String,

        /// Amount, e.g. 45,90 or 1.234,56
        #[arg(long)]
        amount: String,

        /// dd/mm/aaaa (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Alimentação, Transporte, Saúde, Lazer or Viagem
        #[arg(long)]
        category: String,
    },
    Income {
        #[arg(long)]
        description: String,

        #[arg(long)]
        amount: String,

        /// dd/mm/aaaa (default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum DeleteCommand {
    Expense { id: i64 },
    Income { id: i64 },
}

#[derive(Subcommand, Debug)]
enum GoalsCommand {
    List,
    New {
        #[arg(long)]
        name: String,

        /// Target amount
        #[arg(long)]
        target: String,

        /// Deadline, dd/mm/aaaa
        #[arg(long)]
        deadline: String,
    },
    /// Put money into a goal
    Deposit { id: i64, amount: String },
    /// Take money out of a goal
    Withdraw { id: i64, amount: String },
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
    Show,
}

/// Everything a command needs to talk to the backend
pub struct Session {
    pub client: ApiClient,
    pub user_id: i64,
    pub today: NaiveDate,
    pub config: Config,
}

impl Session {
    fn open(user: Option<i64>) -> Result<Self> {
        let config = config::load_config()?;
        Ok(Self {
            client: config.client()?,
            user_id: user.unwrap_or(config.user.id),
            today: config.today()?,
            config,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG > --verbose > warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => config::show_config(),
        },

        Command::Ledger {
            filter,
            limit,
            offset,
            json,
        } => {
            let session = Session::open(cli.user)?;
            ledger_cmd::show(&session, filter, limit, offset, json).await
        }

        Command::Add { command } => {
            let session = Session::open(cli.user)?;
            let args = match command {
                AddCommand::Expense {
                    description,
                    amount,
                    date,
                    category,
                } => ledger_cmd::AddArgs {
                    kind: TxnKind::Expense,
                    description,
                    amount,
                    date,
                    category: Some(category),
                },
                AddCommand::Income {
                    description,
                    amount,
                    date,
                } => ledger_cmd::AddArgs {
                    kind: TxnKind::Income,
                    description,
                    amount,
                    date,
                    category: None,
                },
            };
            ledger_cmd::add(&session, args).await
        }

        Command::Delete { command } => {
            let session = Session::open(cli.user)?;
            match command {
                DeleteCommand::Expense { id } => ledger_cmd::delete(&session, TxnKind::Expense, id).await,
                DeleteCommand::Income { id } => ledger_cmd::delete(&session, TxnKind::Income, id).await,
            }
        }

        Command::Dashboard { year, month } => {
            let session = Session::open(cli.user)?;
            dashboard_cmd::show(&session, year, month).await
        }

        Command::Goals { command } => {
            let session = Session::open(cli.user)?;
            match command {
                GoalsCommand::List => goals_cmd::list(&session).await,
                GoalsCommand::New {
                    name,
                    target,
                    deadline,
                } => goals_cmd::create(&session, name, target, deadline).await,
                GoalsCommand::Deposit { id, amount } => goals_cmd::adjust(&session, id, &amount, true).await,
                GoalsCommand::Withdraw { id, amount } => goals_cmd::adjust(&session, id, &amount, false).await,
                GoalsCommand::Remove { id } => goals_cmd::remove(&session, id).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_ledger_filter() {
        let cli = Cli::try_parse_from(["poupai", "ledger", "--filter", "receitas", "--limit", "5"]).unwrap();
        match cli.command {
            Command::Ledger { filter, limit, offset, json } => {
                assert_eq!(filter, TxnFilter::Income);
                assert_eq!(limit, Some(5));
                assert_eq!(offset, 0);
                assert!(!json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["poupai", "ledger", "--filter", "bogus"]).is_err());
    }

    #[test]
    fn test_global_user_after_subcommand() {
        let cli = Cli::try_parse_from(["poupai", "goals", "list", "--user", "9"]).unwrap();
        assert_eq!(cli.user, Some(9));
    }

    #[test]
    fn test_add_expense_flags() {
        let cli = Cli::try_parse_from([
            "poupai", "add", "expense", "--description", "Farmácia", "--amount", "45,90",
            "--category", "Saúde",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                command: AddCommand::Expense { amount, date, category, .. },
            } => {
                assert_eq!(amount, "45,90");
                assert_eq!(date, None);
                assert_eq!(category, "Saúde");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
