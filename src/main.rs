use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use finbuddy::cli::{
    handle_budget_command, handle_dashboard, handle_document_command, handle_expense_command,
    handle_goal_command, handle_login, handle_logout, handle_signup, handle_sip, handle_tax,
    handle_whoami, AppContext, BudgetCommands, DocumentCommands, ExpenseCommands, GoalCommands,
    SipArgs, TaxArgs,
};
use finbuddy::config::FinbuddyPaths;
use finbuddy::log::init_logging;
use finbuddy::services::{DocumentService, Extractor};

#[derive(Parser)]
#[command(
    name = "finbuddy",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance toolkit for the terminal",
    long_about = "FinBuddy tracks expenses, budgets and investment goals, \
                  calculates income tax under the old and new regimes, \
                  and plans the monthly SIP needed to reach a goal."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a demo account
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long, env = "FINBUDDY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "FINBUDDY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Income tax calculator
    Tax(TaxArgs),

    /// Monthly SIP calculator
    Sip(SipArgs),

    /// Financial overview
    Dashboard,

    /// Expense tracking
    #[command(subcommand, alias = "expenses")]
    Expense(ExpenseCommands),

    /// Budget planning
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Investment goals
    #[command(subcommand, alias = "goals")]
    Goal(GoalCommands),

    /// Document upload and extraction
    #[command(subcommand, alias = "docs")]
    Doc(DocumentCommands),

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// Commands that work without a session
    fn is_public(&self) -> bool {
        matches!(
            self,
            Commands::Login { .. }
                | Commands::Signup { .. }
                | Commands::Logout
                | Commands::Whoami
                | Commands::Config
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = run(command).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

async fn run(command: Commands) -> Result<()> {
    let paths = FinbuddyPaths::new()?;
    let ctx = AppContext::open(paths).context("Failed to initialize FinBuddy")?;

    let session = if command.is_public() {
        None
    } else {
        Some(ctx.require_session()?)
    };
    let symbol = ctx.symbol();

    match command {
        Commands::Login { email, password } => {
            handle_login(&ctx.sessions, email, password).await?;
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            handle_signup(&ctx.sessions, &name, &email, password).await?;
        }
        Commands::Logout => handle_logout(&ctx.sessions)?,
        Commands::Whoami => handle_whoami(&ctx.sessions)?,
        Commands::Tax(args) => handle_tax(args, symbol)?,
        Commands::Sip(args) => handle_sip(args, &ctx.settings.expected_returns, symbol)?,
        Commands::Dashboard => {
            if let Some(session) = session {
                handle_dashboard(&ctx.store, &ctx.settings, session)?;
            }
        }
        Commands::Expense(cmd) => handle_expense_command(&ctx.store, symbol, cmd)?,
        Commands::Budget(cmd) => {
            handle_budget_command(&ctx.store, ctx.settings.alert_threshold, symbol, cmd)?;
        }
        Commands::Goal(cmd) => {
            handle_goal_command(&ctx.store, &ctx.settings.expected_returns, symbol, cmd)?;
        }
        Commands::Doc(cmd) => {
            let documents = DocumentService::new(
                &ctx.store,
                Extractor::new(),
                ctx.settings.processing_delay(),
            );
            handle_document_command(&documents, symbol, cmd).await?;
        }
        Commands::Config => {
            println!("FinBuddy Configuration");
            println!("======================");
            println!("Data directory: {}", ctx.paths.base_dir().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!("Session file:   {}", ctx.paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", ctx.settings.currency_symbol);
            println!("  Login delay:         {} ms", ctx.settings.auth_delay_ms);
            println!("  Processing delay:    {} ms", ctx.settings.processing_delay_ms);
            println!(
                "  Budget alert at:     {:.0}%",
                ctx.settings.alert_threshold * 100.0
            );
            let returns = &ctx.settings.expected_returns;
            println!(
                "  Expected returns:    low {:.1}%, medium {:.1}%, high {:.1}%",
                returns.low, returns.medium, returns.high
            );
        }
    }

    Ok(())
}
