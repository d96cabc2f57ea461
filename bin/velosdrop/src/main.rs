#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    velosdrop::run().await
}
