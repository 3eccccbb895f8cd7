use crate::config::BrushConfig;
use crate::error::{Result, RuleSetError};
use crate::languages;
use crate::tagger::RuleSet;
use crate::tokens::TaggedSpan;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// A lookup table from language names and aliases to rule sets.
///
/// Build one at startup and pass it to whatever needs to pick a brush,
/// there is no process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    brushes: HashMap<String, Arc<RuleSet>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Languages {
    #[serde(default)]
    language: Vec<BrushConfig>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in brush
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for config in languages::builtin() {
            registry.register(&config)?;
        }
        Ok(registry)
    }

    /// Load brushes from a TOML document made of `[[language]]` tables
    pub fn from_toml(source: &str) -> Result<Self> {
        let languages: Languages = toml::from_str(source).map_err(RuleSetError::Config)?;
        let mut registry = Self::new();
        for config in &languages.language {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Compile a brush and register it under its name and every alias.
    /// Aliases already present are replaced.
    pub fn register(&mut self, config: &BrushConfig) -> Result<()> {
        let rules = Arc::new(config.rule_set()?);
        for name in config.names() {
            let key = name.to_lowercase();
            if self.brushes.insert(key, Arc::clone(&rules)).is_some() {
                log::warn!("brush alias '{name}' replaced by '{}'", config.name);
            }
        }
        log::debug!("registered brush '{}' with {} rules", config.name, rules.len());
        Ok(())
    }

    /// Look up a rule set by language name or alias, ignoring case
    pub fn get(&self, alias: &str) -> Option<Arc<RuleSet>> {
        self.brushes.get(&alias.to_lowercase()).cloned()
    }

    /// Every registered alias, sorted
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        let mut aliases: Vec<&str> = self.brushes.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases.into_iter()
    }

    /// Tag the source with the brush registered under `alias`, if there is one
    pub fn tag(&self, alias: &str, source: &str) -> Option<Vec<TaggedSpan>> {
        self.brushes.get(&alias.to_lowercase()).map(|rules| rules.tag(source))
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}
