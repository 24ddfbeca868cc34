//! Saving and restoring the calculator between runs.

use crate::calculator::CalculatorState;
use crate::config::data_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `state.json` in the data directory.
pub fn default_state_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("state.json"))
}

/// Read a saved state. A missing file means there is nothing to restore.
pub fn load_state(path: &Path) -> Result<Option<CalculatorState>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file {}", path.display()))?;
    Ok(Some(state))
}

pub fn save_state(path: &Path, state: &CalculatorState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    fs::write(path, content).with_context(|| format!("Failed to write state file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, Operation};

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("pocketcalc-{}-state", std::process::id()));
        let path = dir.join("state.json");
        let _ = fs::remove_dir_all(&dir);
        assert!(load_state(&path).unwrap().is_none());

        let mut calc = Calculator::new();
        calc.input_digit('9');
        calc.perform_operation(Operation::Subtract);
        calc.input_digit('4');

        save_state(&path, &calc.save_state()).unwrap();
        let loaded = load_state(&path).unwrap().unwrap();
        assert_eq!(loaded, calc.save_state());

        let mut restored = Calculator::new();
        restored.restore_state(loaded);
        assert_eq!(restored, calc);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("pocketcalc-{}-corrupt", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");
        fs::write(&path, "{\"currentInput\": 3}").unwrap();

        assert!(load_state(&path).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
