use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use schoolhouse::cli::create_superadmin;
use schoolhouse::schoolhouse_config::DatabaseConfig;
use schoolhouse::schoolhouse_db::{PgStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "schoolhouse-cli")]
#[command(about = "Schoolhouse CLI - Administrative tools for Schoolhouse", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new superadmin account
    CreateSuperadmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    match command {
        Commands::CreateSuperadmin {
            name,
            email,
            password,
        } => handle_create_superadmin(PgStore::new(pool), name, email, password).await,
        Commands::Migrate => {
            println!("✅ Migrations applied");
            Ok(())
        }
    }
}

async fn handle_create_superadmin(
    store: PgStore,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    // Use provided values or prompt interactively
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .interact_text()
            .context("Failed to read name")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let user = create_superadmin(&store, &name, &email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Error creating superadmin: {}", e))?;

    println!("\n✅ Superadmin created successfully!");
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);
    Ok(())
}
