use std::path::PathBuf;

use kitchenkit::{init_logging, Config, Report, BUILD_DATE, VERSION};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&path)?;

    // Initialize logging
    init_logging(&config.logging)?;
    info!("KitchenKit {} (built {})", VERSION, BUILD_DATE);
    info!("Configuration: {}", path.display());

    let mut state = kitchenkit::EstimatorState::new();
    for issue in config.apply_to(&mut state) {
        warn!("Configured default adjusted: {}", issue);
    }

    let report = Report::from_state(&state, &config.viewport);
    println!("{}", report.to_json()?);

    Ok(())
}
