//! Interactive sign-in that produces the session file used by the gateway

use std::io::{self, BufRead, Write};

use grammers_client::SignInError;
use tgfeed_common::{try_init_tracing, TelegramConfig};
use tgfeed_core::MessagingSession;
use tgfeed_telegram::{TelegramClientConfig, TelegramSession};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Login failed");
        eprintln!("Login failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = TelegramConfig::from_env()?;
    let session = TelegramSession::connect(&TelegramClientConfig::from(&config)).await?;

    if session.is_authorized().await? {
        println!("Session {} is already authorized", config.session_file().display());
        session.disconnect().await?;
        return Ok(());
    }

    let phone = prompt("Phone number (international format): ")?;
    let client = session.client();
    let token = client.request_login_code(&phone).await?;
    let code = prompt("Login code: ")?;

    let user = match client.sign_in(&token, &code).await {
        Ok(user) => user,
        Err(SignInError::PasswordRequired(password_token)) => {
            let hint = password_token.hint().unwrap_or("none").to_string();
            let password = prompt(&format!("Two-step verification password (hint: {hint}): "))?;
            client.check_password(password_token, password).await?
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id(), "Signed in");
    session.disconnect().await?;
    println!("Session saved to {}", config.session_file().display());
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
