use gemini_probe::probe::{generate, ProbeConfig};
use gemini_probe::GenerationOutcome;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ProbeConfig::from_env()?.build_client()?;
    match generate(&client, "invalid-model", "hello").await {
        GenerationOutcome::Text(text) => println!("unexpected success: {text}"),
        GenerationOutcome::Failed(message) => eprintln!("request failed: {message}"),
    }
    Ok(())
}
