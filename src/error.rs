use std::io;

use crate::dictionary::PartOfSpeech;

#[derive(Debug, thiserror::Error)]
pub enum FnombreError {
    #[error("invalid casing: {0}")]
    InvalidCasing(String),

    #[error("invalid size: {0}")]
    InvalidSize(usize),

    #[error("word list is empty: {0}")]
    EmptyWordList(PartOfSpeech),

    #[error("no {pos} agrees with noun '{noun}'")]
    UnmatchedAgreement { pos: PartOfSpeech, noun: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FnombreError>;
