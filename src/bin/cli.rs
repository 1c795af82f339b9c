use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    jharkhand_tourism::cli::run().await?;
    Ok(())
}
