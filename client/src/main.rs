//! `grow` - command line front end for the AccountingGrow client.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use client::app::handlers::{BudgetHandler, Screen};
use client::app::state::Status;
use client::app::App;
use client::debug::{self, LogConfig};
use client::repository::{AuthRepository, CategoryRepository};
use lib_core::model::{CodeEnum, TransactionType};
use shared::utils::{format_percentage, format_rupiah, format_signed_rupiah};

#[derive(Parser)]
#[command(name = "grow", version, about = "AccountingGrow personal finance client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the session
    Login(Credentials),
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session (locally, even if the server is unreachable)
    Logout,
    /// Show the stored identity
    Whoami,
    /// Exchange the stored refresh token for a new session
    Refresh,
    /// Greeting, totals and the latest transactions
    Home,
    Transactions {
        #[arg(long = "type", value_parser = parse_kind)]
        kind: Option<TransactionType>,
    },
    Categories {
        #[arg(long = "type", value_parser = parse_kind)]
        kind: Option<TransactionType>,
    },
    /// Budgets of one month (default: the current one)
    Budgets {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    Savings,
    Reminders {
        /// Only reminders due soon
        #[arg(long, conflicts_with_all = ["paid", "unpaid"])]
        upcoming: bool,
        #[arg(long, conflicts_with = "unpaid")]
        paid: bool,
        #[arg(long)]
        unpaid: bool,
    },
    Articles {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Print one article in full
        #[arg(long, conflicts_with = "search")]
        id: Option<String>,
    },
}

#[derive(Args)]
struct Credentials {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

fn parse_kind(input: &str) -> Result<TransactionType, String> {
    TransactionType::parse_input(input).ok_or_else(|| format!("expected income or expense, got '{input}'"))
}

/// Print the banner messages of a settled screen; an error becomes the exit status.
fn report(status: &Status) -> anyhow::Result<()> {
    if let Some(message) = &status.success_message {
        println!("{message}");
    }
    if let Some(message) = &status.error_message {
        bail!("{message}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = debug::init_logger(&LogConfig::from_env()).context("failed to initialize logging")?;
    let config = lib_core::config::init_config()
        .map_err(anyhow::Error::msg)
        .context("invalid configuration")?;
    let app = App::from_config(config).context("failed to build HTTP client")?;

    run(&app, cli.command).await
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login(Credentials { username, password }) => {
            let auth = app.auth();
            auth.login(&username, &password).await?;
            report(&auth.state().status)
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let auth = app.auth();
            auth.register(&username, &email, &password).await?;
            report(&auth.state().status)
        }
        Command::Logout => {
            let profile = app.profile();
            profile.logout().await?;
            report(&profile.state().status)
        }
        Command::Whoami => {
            match app.api().credentials().session() {
                Some(session) => println!("{} <{}> (id {})", session.username, session.email, session.user_id),
                None => bail!("Belum login"),
            }
            Ok(())
        }
        Command::Refresh => {
            let message = AuthRepository::new(app.api().clone()).refresh_session().await?;
            println!("{message}");
            Ok(())
        }
        Command::Home => {
            let home = app.home();
            home.load().await?;
            let state = home.state();
            report(&state.status)?;

            println!("Halo, {}", state.username);
            if let Some(summary) = state.summary {
                println!(
                    "Pemasukan {}  Pengeluaran {}  Saldo {}  ({} transaksi)",
                    format_rupiah(summary.total_income),
                    format_rupiah(summary.total_expense),
                    format_rupiah(summary.balance),
                    summary.transaction_count
                );
            }
            for tx in &state.recent_transactions {
                println!(
                    "{}  {:>16}  {}",
                    tx.date,
                    format_signed_rupiah(tx.nominal, tx.kind.is_income()),
                    tx.description.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        Command::Transactions { kind } => {
            let handler = app.transactions();
            handler.load_transactions(kind).await?;
            let state = handler.state();
            report(&state.status)?;

            for tx in &state.transactions {
                let category = tx.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-");
                println!(
                    "{}  {:<8}  {:>16}  {:<14}  {}",
                    tx.date,
                    tx.kind,
                    format_signed_rupiah(tx.nominal, tx.kind.is_income()),
                    category,
                    tx.description.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }
        Command::Categories { kind } => {
            let categories = CategoryRepository::new(app.api().clone()).list(kind).await?;
            for category in categories {
                println!("{:<10}  {:<8}  {}", category.id, category.kind, category.name);
            }
            Ok(())
        }
        Command::Budgets { month, year } => {
            let (current_month, current_year) = lib_utils::current_month_year();
            let handler = BudgetHandler::new(app.api());
            handler
                .load_budgets(Some(month.unwrap_or(current_month)), Some(year.unwrap_or(current_year)))
                .await?;
            let state = handler.state();
            report(&state.status)?;

            for budget in &state.budgets {
                println!(
                    "{:<14}  {:>16} / {:<16}  {:>6}  {:?}",
                    budget.category_name(),
                    format_rupiah(budget.spent),
                    format_rupiah(budget.amount),
                    format_percentage(budget.percentage),
                    budget.severity()
                );
            }
            Ok(())
        }
        Command::Savings => {
            let handler = app.savings();
            handler.load_savings().await?;
            let state = handler.state();
            report(&state.status)?;

            for saving in &state.savings {
                println!(
                    "{:<20}  {:>16} / {:<16}  {:>6}{}",
                    saving.name,
                    format_rupiah(saving.current_amount),
                    format_rupiah(saving.target_amount),
                    format_percentage(saving.progress),
                    if saving.is_reached() { "  tercapai" } else { "" }
                );
            }
            Ok(())
        }
        Command::Reminders { upcoming, paid, unpaid } => {
            let handler = app.reminders();
            let reminders = if upcoming {
                handler.load_upcoming().await?;
                handler.state().upcoming_reminders
            } else {
                let is_paid = match (paid, unpaid) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                handler.load_reminders(is_paid).await?;
                handler.state().reminders
            };
            report(&handler.state().status)?;

            for reminder in &reminders {
                println!(
                    "{}  {:<20}  {:>16}  {:<8}  {}",
                    reminder.due_date,
                    reminder.name,
                    format_rupiah(reminder.amount),
                    reminder.recurrence,
                    if reminder.is_paid { "lunas" } else { "belum" }
                );
            }
            Ok(())
        }
        Command::Articles { search, page, id } => {
            let handler = app.articles();

            if let Some(id) = id {
                handler.open(&id).await?;
                let state = handler.state();
                report(&state.status)?;
                if let Some(article) = state.selected {
                    println!("{}\n{}\n\n{}", article.title, article.published_date, article.content);
                }
                return Ok(());
            }

            match search {
                Some(query) => handler.search(&query).await?,
                None => handler.load_articles(page).await?,
            }
            let state = handler.state();
            report(&state.status)?;

            for article in &state.articles {
                println!("{}  {}\n    {}", article.id, article.title, article.excerpt(80));
            }
            println!("Halaman {} dari {}", state.page, state.total_pages);
            Ok(())
        }
    }
}
