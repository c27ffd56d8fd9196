#[tokio::main]
async fn main() -> anyhow::Result<()> {
    brain_bites_backend::run().await
}
