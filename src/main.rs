use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    botdash::run().await
}
