use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hangman_cli::{App, Command, Config, Reply, console};
use hangman_persistence::{DatabaseManager, word_files};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting hangman...");

    let config = Config::from_env()?;
    info!("Loading words from: {}", config.words_path.display());
    let catalog = word_files::load_catalog(&config.words_path).await?;

    let db = DatabaseManager::open(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let mut app = App::start(config, db, catalog).await?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(format!("{}\n> ", console::HELP).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match Command::parse(&line) {
            Ok(command) => match app.handle(command).await {
                Ok(reply) => reply,
                Err(e) => {
                    error!("{:#}", e);
                    Reply::Message(e.to_string())
                }
            },
            Err(e) => Reply::Message(e.to_string()),
        };

        stdout.write_all(format!("{}\n", reply.text()).as_bytes()).await?;
        if let Reply::Exit(_) = reply {
            stdout.flush().await?;
            return Ok(());
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    // End of input
    app.persist_players().await?;
    info!("Players saved, exiting");
    Ok(())
}
