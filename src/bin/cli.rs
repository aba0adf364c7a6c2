use anyhow::Context;
use chirpy::chirpy_config::Platform;
use chirpy::chirpy_db::{PgStore, init_db_pool, run_migrations};
use chirpy::cli::{create_user, reset};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "chirpy-cli")]
#[command(about = "Chirpy CLI - Administrative tools for Chirpy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Delete all users, refresh tokens and chirps (PLATFORM=dev only)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool()
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    let store = PgStore::new(pool);

    match cli.command {
        Commands::CreateUser { email, password } => {
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

            let user = create_user(&store, &email, &password).await?;
            println!("\n✅ User created successfully!");
            println!("   ID:    {}", user.id);
            println!("   Email: {}", user.email);
        }
        Commands::Reset { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete ALL users, refresh tokens and chirps?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;

            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }

            reset(&store, Platform::from_env()).await?;
            println!("\n✅ Store reset.");
        }
    }

    Ok(())
}
