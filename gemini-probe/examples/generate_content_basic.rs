use gemini_probe::probe::ProbeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProbeConfig::from_env()?;
    let client = config.build_client()?;
    let response = client
        .generative_model(&config.model)
        .generate_content("给我一句问候")
        .await?;
    println!("{:?}", response.text());
    Ok(())
}
