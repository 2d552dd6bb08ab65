use std::{fs, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{FramegateError, FramegateResult},
    model::request::ElementConfig,
    registry::directory::RegistryEntry,
};

/// Serializable snapshot of one HUD's full element configuration.
///
/// The element array is ordered by slot: exporting walks the entry's requests
/// in first-access order, importing writes elements back into slots `0..n`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HudDocument {
    /// Display name recorded in the document.
    pub name: String,
    /// Element configurations, one per slot.
    pub elements: Vec<ElementConfig>,
}

impl HudDocument {
    /// Snapshot every touched slot of a registry entry.
    pub fn from_entry(name: impl Into<String>, entry: &RegistryEntry) -> Self {
        Self {
            name: name.into(),
            elements: entry
                .requests()
                .map(|(_, request)| ElementConfig::from_request(request))
                .collect(),
        }
    }

    /// Write the elements into slots `0..n` of a registry entry.
    pub fn apply_to_entry(&self, entry: &mut RegistryEntry, font_catalog: &[String]) {
        for (slot, config) in self.elements.iter().enumerate() {
            entry
                .request_mut(slot as u32)
                .apply_config(config, font_catalog);
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> FramegateResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramegateError::serde(e.to_string()))
    }

    /// Deserialize from JSON text.
    pub fn from_json(text: &str) -> FramegateResult<Self> {
        serde_json::from_str(text).map_err(|e| FramegateError::serde(e.to_string()))
    }

    /// Save the document as JSON at `path`.
    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: &Path) -> FramegateResult<()> {
        let text = self.to_json()?;
        fs::write(path, text)
            .with_context(|| format!("failed to write HUD document {}", path.display()))?;
        Ok(())
    }

    /// Load a JSON document from `path`.
    #[tracing::instrument]
    pub fn load(path: &Path) -> FramegateResult<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read HUD document {}", path.display()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/document.rs"]
mod tests;
