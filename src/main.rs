#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tally::cli::run().await
}
