use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{}`: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no string value at `{key}` in `{}`", path.display())]
    MissingVersion {
        path: PathBuf,
        key: String,
    },

    #[error("malformed banner `{}`: {reason}", path.display())]
    BannerFormat {
        path: PathBuf,
        reason: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
