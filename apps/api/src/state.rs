use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::customization::legacy_store::{ColumnLayoutStore, JsonFileStore, MemoryStore};
use crate::editor::session::{template_or, SessionStore};
use crate::templates::{get_template, TemplateEntry};

/// Id used when `DEFAULT_TEMPLATE_ID` itself is unknown.
const BUILTIN_DEFAULT_TEMPLATE: &str = "classic";

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Legacy column layouts, keyed by template id.
    pub layouts: Arc<dyn ColumnLayoutStore>,
    /// Substituted for unknown template ids.
    pub default_template: &'static TemplateEntry,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let default_template = match get_template(&config.default_template_id) {
            Some(template) => template,
            None => {
                warn!(
                    "DEFAULT_TEMPLATE_ID {:?} is not a registered template, using {BUILTIN_DEFAULT_TEMPLATE}",
                    config.default_template_id
                );
                get_template(BUILTIN_DEFAULT_TEMPLATE)
                    .context("built-in default template is not registered")?
            }
        };

        let layouts: Arc<dyn ColumnLayoutStore> = match &config.legacy_layout_path {
            Some(path) => {
                info!("Legacy column layouts stored in {path}");
                Arc::new(JsonFileStore::new(path))
            }
            None => {
                info!("Legacy column layouts kept in memory");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(AppState {
            config,
            sessions: SessionStore::new(),
            layouts,
            default_template,
        })
    }

    /// Registry lookup with the host fallback for unknown ids.
    pub fn template(&self, id: Option<&str>) -> &'static TemplateEntry {
        template_or(id, self.default_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_default_template_falls_back_to_classic() {
        let config = Config {
            default_template_id: "retro".into(),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.default_template.id, "classic");
        assert_eq!(state.template(Some("gradient")).id, "gradient");
        assert_eq!(state.template(Some("retro")).id, "classic");
    }

    #[test]
    fn test_configured_default_template() {
        let config = Config {
            default_template_id: "minimal".into(),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.template(None).id, "minimal");
    }
}
