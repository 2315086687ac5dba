use std::path::{Path, PathBuf};
use anyhow::{Context as _, Result};
use serde::Deserialize;
use tracing::debug;
use mydig::PolicyKind;
use crate::args::Args;
use crate::fs::default_config_path;

#[derive(Default, Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Config {
    /// Command line values win over the file.
    pub fn apply_args(mut self, args: &Args) -> Self {
        self.resolver.server = args.server.clone().or(self.resolver.server);
        self.resolver.port = args.port.or(self.resolver.port);
        self.resolver.timeout = args.timeout.clone().or(self.resolver.timeout);
        self.resolver.retries = args.retries.or(self.resolver.retries);

        if args.no_recurse {
            self.query.recursion_desired = Some(false);
        }

        self.validation.policy = args.policy.or(self.validation.policy);

        self
    }
}

#[derive(Default, Deserialize, Debug, PartialEq)]
pub struct ResolverConfig {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout: Option<String>,
    pub retries: Option<u32>,
}

#[derive(Default, Deserialize, Debug, PartialEq)]
pub struct QueryConfig {
    pub recursion_desired: Option<bool>,
}

#[derive(Default, Deserialize, Debug, PartialEq)]
pub struct ValidationConfig {
    pub policy: Option<PolicyKind>,
}

/// Loads `path`, or the file in the home directory when no path is given.
/// Running without any config file is fine.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    if let Some(path) = path {
        return load(&PathBuf::from(path));
    }

    match default_config_path() {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

fn load(p: &Path) -> Result<Config> {
    debug!("loading config from {}", p.display());

    let file = std::fs::read_to_string(p)
        .with_context(|| format!("couldn't read config file {}", p.display()))?;

    parse(&file).with_context(|| format!("invalid config file {}", p.display()))
}

fn parse(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s)?;

    Ok(cfg)
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_all_sections() {
        let cfg = parse(r#"
            [resolver]
            server = "9.9.9.9"
            port = 5353
            timeout = "2s"
            retries = 3

            [query]
            recursion_desired = false

            [validation]
            policy = "lenient"
        "#).unwrap();

        assert_eq!(cfg.resolver.server.as_deref(), Some("9.9.9.9"));
        assert_eq!(cfg.resolver.port, Some(5353));
        assert_eq!(cfg.resolver.timeout.as_deref(), Some("2s"));
        assert_eq!(cfg.resolver.retries, Some(3));
        assert_eq!(cfg.query.recursion_desired, Some(false));
        assert_eq!(cfg.validation.policy, Some(PolicyKind::Lenient));
    }

    #[test]
    fn sections_are_optional() {
        assert_eq!(parse("").unwrap(), Config::default());
        assert!(parse("[validation]\npolicy = \"loose\"").is_err());
    }

    #[test]
    fn args_override_file() {
        let cfg = parse("[resolver]\nserver = \"9.9.9.9\"\nretries = 3\n").unwrap();
        let args = Args::try_parse_from(["mydig", "a.io", "-s", "1.1.1.1", "--no-recurse"]).unwrap();

        let cfg = cfg.apply_args(&args);
        assert_eq!(cfg.resolver.server.as_deref(), Some("1.1.1.1"));
        assert_eq!(cfg.resolver.retries, Some(3));
        assert_eq!(cfg.query.recursion_desired, Some(false));
        assert_eq!(cfg.validation.policy, None);
    }

    #[test]
    fn missing_explicit_file() {
        assert!(load_config(Some("/nonexistent/mydig.toml")).is_err());
    }
}
