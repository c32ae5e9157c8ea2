use crate::error::{Error, Result};

use std::path::Path;

pub const VERSION_KEY: &[&str] = &["tool", "poetry", "version"];

pub fn read(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&raw, path)
}

fn parse(raw: &str, path: &Path) -> Result<String> {
    let table = raw.parse::<toml::Table>().map_err(|source| Error::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut keys = VERSION_KEY.iter();
    let mut value = keys.next().and_then(|key| table.get(*key));

    for key in keys {
        value = value.and_then(|value| value.get(*key));
    }

    value
        .and_then(toml::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingVersion {
            path: path.to_path_buf(),
            key: VERSION_KEY.join("."),
        })
}
