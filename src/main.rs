use anyhow::Result;

use glider_scores::{execute_command, interpret};

#[tokio::main]
async fn main() {
    setup_logging();
    if let Err(e) = parse_and_execute().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    sensible_env_logger::init!();
}

async fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command).await
}
