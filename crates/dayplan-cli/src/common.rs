//! Shared helpers for CLI commands: snapshot loading and output.

use std::fs;
use std::io::Read;
use std::path::Path;

use dayplan_core::score::ScoreWeights;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Read a JSON snapshot from a file, or from stdin when the path is "-".
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Load score weights from a TOML file, falling back to defaults.
pub fn load_weights(path: Option<&Path>) -> Result<ScoreWeights, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            let weights: ScoreWeights = toml::from_str(&contents)?;
            if let Err(msg) = weights.validate() {
                return Err(msg.into());
            }
            Ok(weights)
        }
        None => Ok(ScoreWeights::default()),
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
