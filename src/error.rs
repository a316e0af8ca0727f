use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Corpus is empty, class priors are undefined")]
    EmptyCorpus,

    #[error("Unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("Ham and spam labels must differ, both are {0:?}")]
    DuplicateLabel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
