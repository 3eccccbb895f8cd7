use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building or loading a rule set
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(#[from] RuleSetError),
}

/// The reason a rule set was rejected
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("no rules defined")]
    Empty,
    #[error("malformed pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("word list is empty")]
    EmptyWordList,
    #[error("malformed word {word:?} in word list")]
    Word { word: String },
    #[error("line comment prefix must not be empty")]
    CommentPrefix,
    #[error("failed to parse brush configuration")]
    Config(#[source] toml::de::Error),
}
