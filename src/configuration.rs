use serde::Deserialize;

use crate::preview::DEFAULT_PREVIEW_LENGTH;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub preview: PreviewSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PreviewSettings {
    /// Preview length for listing pages (home, category, search).
    #[serde(default = "default_list_length")]
    pub list_length: usize,
    /// Preview length for the description metadata of an article page.
    #[serde(default = "default_description_length")]
    pub description_length: usize,
    /// Result count for searches that do not ask for one.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            list_length: default_list_length(),
            description_length: default_description_length(),
            search_limit: default_search_limit(),
        }
    }
}

fn default_list_length() -> usize {
    150
}

fn default_description_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_search_limit() -> usize {
    20
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    // initialise config reader
    let configs = config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml).required(false))
        // e.g. `APP_PREVIEW__LIST_LENGTH=120` sets `preview.list_length`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // convert the config values to config type
    configs.try_deserialize::<Settings>()
}
