use contracts::shared::tabs::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabError {
    #[error("Tab group `{group}`: no element with id `{id}`")]
    MissingPanel { group: String, id: String },

    #[error("Tab group `{group}`: element `{id}` has no `{class}` class")]
    ForeignPanel {
        group: String,
        id: String,
        class: String,
    },

    #[error("Unknown tab group `{0}`")]
    UnknownGroup(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
