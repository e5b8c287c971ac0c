//! Parameter presets: loading, saving and validation.

use std::path::Path;

use ah_kinetics::SimulationInputs;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A named set of the four simulation parameters, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub inputs: SimulationInputs,
}

impl Preset {
    pub fn new(name: impl Into<String>, inputs: SimulationInputs) -> Self {
        Self {
            name: name.into(),
            description: None,
            inputs,
        }
    }
}

/// Load preset from a YAML file. The parameters must lie within their bounds.
pub fn load_preset(path: &Path) -> AppResult<Preset> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::PresetFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let preset: Preset = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Preset(format!("Failed to parse preset YAML: {}", e)))?;

    validate_inputs(&preset.inputs)?;
    tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
    Ok(preset)
}

/// Save preset to a YAML file.
pub fn save_preset(path: &Path, preset: &Preset) -> AppResult<()> {
    validate_inputs(&preset.inputs)?;

    let content = serde_yaml::to_string(preset)
        .map_err(|e| AppError::Preset(format!("Failed to serialize preset: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::PresetFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Check each parameter against the bounds the sliders offer.
pub fn validate_inputs(inputs: &SimulationInputs) -> AppResult<()> {
    inputs.check_ranges()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_yaml_is_flat() {
        let preset = Preset::new("defaults", SimulationInputs::default());
        let yaml = serde_yaml::to_string(&preset).unwrap();
        assert!(yaml.contains("liquid_ratio: 10.0"));
        assert!(yaml.contains("residence_time_min: 120.0"));
        assert!(!yaml.contains("inputs"));
        assert!(!yaml.contains("description"));
    }

    #[test]
    fn out_of_range_inputs_fail_validation() {
        let inputs = SimulationInputs {
            acid_concentration: 12.0,
            ..Default::default()
        };
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
