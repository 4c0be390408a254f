use thiserror::Error;

use pharos_scenario::ScenarioError;

pub type Result<T> = std::result::Result<T, PharosError>;

#[derive(Debug, Error)]
pub enum PharosError {
    #[error("scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}
