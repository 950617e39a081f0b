use anyhow::Result;
use gomoku::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    cli::run_cli().await
}
