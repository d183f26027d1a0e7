//! JSON config loader
//!
//! Missing sections fall back to the defaults in `TrackerConfig::default()`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::TrackerConfig;
use crate::error::TrackerResult;

/// Load and validate a tracker config from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> TrackerResult<TrackerConfig> {
    let path = path.as_ref();
    log::info!("Loading tracker config from {}", path.display());
    let file = File::open(path)?;
    load_config_from_reader(BufReader::new(file))
}

/// Load and validate a tracker config from any reader
pub fn load_config_from_reader<R: Read>(reader: R) -> TrackerResult<TrackerConfig> {
    let config: TrackerConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}
