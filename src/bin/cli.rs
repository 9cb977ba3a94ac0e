use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    examdesk::cli::run().await
}
