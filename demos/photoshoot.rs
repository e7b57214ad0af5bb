use portrait_scenes::{GeminiClient, ImageResource};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenv::dotenv().is_ok();
    portrait_scenes::logger::init()?;
    if env_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found");
    }

    let path = env::args()
        .nth(1)
        .ok_or("Usage: photoshoot <portrait.jpg>")?;
    let resource = ImageResource::from_file(&path).await?;

    let client = GeminiClient::from_env()?;
    let images = client
        .scenes()
        .generate_from_resource(&resource, "on a rooftop at night")
        .await?;

    for image in images {
        println!("{} -> {} chars", image.pose, image.data_uri().len());
    }

    Ok(())
}
