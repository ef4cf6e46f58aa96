use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Collection is empty: {0}")]
    EmptyCollection(&'static str),

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate anchor: {0}")]
    DuplicateAnchor(String),

    #[error("Nav entry has an empty anchor: {0}")]
    EmptyAnchor(String),

    #[error("Duplicate id {id} in {table}")]
    DuplicateId { table: &'static str, id: String },

    #[error("Site data error: {0}")]
    Data(#[from] serde_json::Error),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email address looks invalid")]
    InvalidEmail,
}

pub type Result<T> = std::result::Result<T, SiteError>;
