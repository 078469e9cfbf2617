use std::fmt;

use rten::Model;
use serde::Serialize;

/// Names of a loaded model's graph inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub location: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl ModelSummary {
    pub fn from_model(location: &str, model: &Model) -> Self {
        // Unnamed nodes show up as an empty string.
        let name = |id| {
            model
                .node_info(id)
                .and_then(|info| info.name().map(str::to_string))
                .unwrap_or_default()
        };

        Self {
            location: location.to_string(),
            inputs: model.input_ids().iter().map(|&id| name(id)).collect(),
            outputs: model.output_ids().iter().map(|&id| name(id)).collect(),
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.location)?;
        writeln!(f, "  inputs:  {}", self.inputs.join(", "))?;
        write!(f, "  outputs: {}", self.outputs.join(", "))
    }
}
