use saferoute::config::Config;
use saferoute::map::export::scene_to_geojson;
use saferoute::map::{MapRenderer, SceneFactory};
use saferoute::services::RouteClient;
use saferoute::ui::form::{FIELD_DESTINATION, FIELD_SOURCE, FIELD_TIME_OF_DAY};
use saferoute::ui::{Outcome, QueryForm, RouteQueryController, TextView};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: saferoute <SOURCE> <DESTINATION> [TIME_OF_DAY] [OPTIONS]

Find safety-rated routes between two places.

Options:
  --geojson=PATH        Write the rendered map as a GeoJSON FeatureCollection
  --help                Show this help message

Environment:
  SAFEROUTE_API_URL     Routing service base URL (default: http://localhost:5000)"
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saferoute=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let geojson_path = args
        .iter()
        .find_map(|a| a.strip_prefix("--geojson="))
        .map(PathBuf::from);
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    // Blank inputs are forwarded as-is; the service decides what they mean.
    let mut form = QueryForm::new();
    form.set(FIELD_SOURCE, positional.first().copied().unwrap_or(""))
        .set(FIELD_DESTINATION, positional.get(1).copied().unwrap_or(""))
        .set(FIELD_TIME_OF_DAY, positional.get(2).copied().unwrap_or("day"));

    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    tracing::info!(
        api = %config.api_base_url,
        "Using routing service at {}",
        config.api_base_url
    );

    let client = RouteClient::from_config(&config)?;
    let renderer = MapRenderer::new(SceneFactory::default(), config.map.clone());
    let mut controller = RouteQueryController::new(client, TextView::new(), renderer);

    let outcome = controller.submit(&form).await;
    print!("{}", controller.view().output());

    if let (Some(path), Some(scene)) = (geojson_path, controller.map().current()) {
        let collection = scene_to_geojson(scene);
        std::fs::write(&path, serde_json::to_string_pretty(&collection)?)?;
        eprintln!("Map written to {}", path.display());
    }

    if outcome == Outcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
