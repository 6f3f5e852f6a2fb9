use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Leaguepedia API error: {code} - {info}")]
    Api { code: String, info: String },

    #[error("Leaguepedia {0} not present in the input game, joins cannot be performed")]
    MissingIdentifier(&'static str),

    #[error("Picks and bans could not be resolved for game {game_id}")]
    UnresolvableDraft { game_id: String },

    #[error("Invalid cargo query: {0}")]
    InvalidQuery(&'static str),

    #[error("Fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A call to Leaguepedia can either result in a success with the success type or fail with a [`ParserError`].
pub type ParserResult<T> = Result<T, ParserError>;
