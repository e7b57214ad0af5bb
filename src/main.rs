use portrait_scenes::{
    logger::{self, LogLevel, LoggerConfig},
    GeminiClient, GeminiConfig, ImageResource,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::development().with_level(LogLevel::Info))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        log::error!("Usage: portrait-scenes <photo.jpg|png|webp> [scene description]");
        std::process::exit(2);
    };
    let description = args.collect::<Vec<_>>().join(" ");

    let config = GeminiConfig::from_env();
    logger::log_config_info(&config);

    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    let resource = ImageResource::from_file(&image_path).await?;
    log::info!(
        "🖼️  Loaded {} ({}, {} bytes)",
        image_path,
        resource.mime_type(),
        resource.len()
    );
    if description.trim().is_empty() {
        log::info!("No scene description given, using the default studio portrait");
    }

    match client.scenes().generate_from_resource(&resource, &description).await {
        Ok(images) => {
            for image in &images {
                log::info!(
                    "✅ {}: {} ({} base64 chars)",
                    image.pose,
                    image.mime_type,
                    image.image_payload.len()
                );
            }
            println!("{}", serde_json::to_string_pretty(&images)?);
        }
        Err(e) => {
            log::error!("❌ Failed to generate images. {}", e);
            if let Some(pose) = e.pose() {
                log::warn!("💡 The model declined the '{}' pose, try another description", pose);
            }
            return Err(e.into());
        }
    }

    Ok(())
}
