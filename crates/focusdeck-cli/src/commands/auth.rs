//! Sign-in session commands.
//!
//! Identity goes into its own blob slot; the opaque provider token goes
//! into the OS keyring.

use clap::Subcommand;
use focusdeck_core::storage::credentials;
use focusdeck_core::{AuthSession, BlobStore};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store a signed-in session
    Login {
        /// Provider user id
        user_id: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Identity provider
        #[arg(long, default_value = "google")]
        provider: String,
        /// Opaque provider token
        #[arg(long)]
        token: String,
    },
    /// Drop the session and stored token
    Logout,
    /// Show the signed-in identity
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;

    match action {
        AuthAction::Login {
            user_id,
            name,
            email,
            provider,
            token,
        } => {
            let session = AuthSession {
                user_id,
                display_name: name,
                email,
                provider,
            };
            credentials::save_session(&blob, &session, &token)?;
            println!("Signed in as {}", session.display_name);
        }
        AuthAction::Logout => {
            credentials::clear_session(&blob)?;
            println!("Signed out");
        }
        AuthAction::Status => match credentials::load_session(&blob)? {
            Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
            None => println!("Not signed in"),
        },
    }
    Ok(())
}
