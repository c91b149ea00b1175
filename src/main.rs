#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = picrete_plagiarism::run().await {
        eprintln!("picrete-plagiarism fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
