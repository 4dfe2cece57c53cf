use gemini_probe::probe::ProbeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ProbeConfig::from_env()?.build_client()?;
    for model in client.models().all().await? {
        println!(
            "{} {:?}",
            model.name.unwrap_or_default(),
            model.supported_generation_methods
        );
    }
    Ok(())
}
