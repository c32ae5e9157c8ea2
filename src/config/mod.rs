use std::path::PathBuf;

pub const DEFAULT_BANNER: &str = "data/banner.txt";
pub const DEFAULT_PROJECT: &str = "pyproject.toml";

pub const BANNER_ENV: &str = "MALBENCH_BANNER";
pub const PROJECT_ENV: &str = "MALBENCH_PROJECT";

/// Where the banner asset and the version descriptor live, relative to the working directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub banner: PathBuf,
    pub project: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            banner: PathBuf::from(DEFAULT_BANNER),
            project: PathBuf::from(DEFAULT_PROJECT),
        }
    }
}

impl Config {
    pub fn new(banner: impl Into<PathBuf>, project: impl Into<PathBuf>) -> Config {
        Config {
            banner: banner.into(),
            project: project.into(),
        }
    }

    pub fn from_env() -> Config {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Config {
        let mut config = Config::default();

        if let Some(banner) = var(BANNER_ENV).filter(|x| !x.is_empty()) {
            config.banner = PathBuf::from(banner);
        }

        if let Some(project) = var(PROJECT_ENV).filter(|x| !x.is_empty()) {
            config.project = PathBuf::from(project);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative() {
        let config = Config::default();

        assert_eq!(config.banner, PathBuf::from("data/banner.txt"));
        assert_eq!(config.project, PathBuf::from("pyproject.toml"));
    }

    #[test]
    fn vars_override_defaults() {
        let config = Config::from_vars(|name| match name {
            BANNER_ENV => Some("/opt/malbench/banner.txt".to_string()),
            _ => None,
        });

        assert_eq!(config.banner, PathBuf::from("/opt/malbench/banner.txt"));
        assert_eq!(config.project, PathBuf::from(DEFAULT_PROJECT));
    }

    #[test]
    fn empty_vars_are_ignored() {
        let config = Config::from_vars(|_| Some(String::new()));

        assert_eq!(config, Config::default());
    }
}
