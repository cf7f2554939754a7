use clap::Parser;
use geoscriber::Config;
use geoscriber::ui;

#[derive(Parser, Debug)]
#[command(name = "geoscriber")]
#[command(version, about = "Interactive map annotation: draw and title zones on a map")]
struct Cli {
    /// Override the initial view center latitude (degrees)
    #[arg(long, value_name = "LAT", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Override the initial view center longitude (degrees)
    #[arg(long, value_name = "LON", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Override the initial zoom level
    #[arg(long, value_name = "ZOOM")]
    zoom: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(lat) = cli.lat {
        config.map.center_lat = lat;
    }
    if let Some(lon) = cli.lon {
        config.map.center_lon = lon;
    }
    if let Some(zoom) = cli.zoom {
        config.map.zoom = zoom;
    }
    // Command-line overrides go through the same range checks as the file
    config.validate_and_clamp();

    log::info!("Interactive map with drawing tools is ready");
    log::info!("Controls:");
    log::info!("  - Polygon: click to add vertices, double-click or Finish to close");
    log::info!("  - Rectangle: click two opposite corners");
    log::info!("  - Title prompt: Enter to confirm, Escape to discard the shape");
    log::info!("  - Escape while outlining: cancel the outline");

    ui::run(config)
}
