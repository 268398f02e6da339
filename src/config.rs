//! Runner configuration
//!
//! Read from `TETRAI_*` environment variables. An unset or empty variable
//! takes its default; a value that is set but does not parse is an error.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use tetrai::core::PieceRule;
use tetrai::engine::SearchWeights;

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub seed: u32,
    pub games: u32,
    pub max_pieces: u32,
    pub piece_rule: PieceRule,
    pub lookahead: bool,
    pub weights: SearchWeights,
    pub weights_path: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            max_pieces: 500,
            piece_rule: PieceRule::Uniform,
            lookahead: false,
            weights: SearchWeights::default(),
            weights_path: None,
        }
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

impl RunnerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let number = |key: &str, default: u32| -> Result<u32> {
            match var(key) {
                Some(s) => u32::from_str(&s).with_context(|| format!("{}={:?}", key, s)),
                None => Ok(default),
            }
        };

        let seed = number("TETRAI_SEED", defaults.seed)?;
        let games = number("TETRAI_GAMES", defaults.games)?;
        let max_pieces = number("TETRAI_MAX_PIECES", defaults.max_pieces)?;

        let piece_rule = match var("TETRAI_PIECE_RULE") {
            Some(s) => PieceRule::from_str(&s).ok_or_else(|| {
                anyhow!("TETRAI_PIECE_RULE={:?}: expected uniform or bag7", s)
            })?,
            None => defaults.piece_rule,
        };

        let lookahead = match var("TETRAI_LOOKAHEAD") {
            Some(s) => parse_flag(&s)
                .ok_or_else(|| anyhow!("TETRAI_LOOKAHEAD={:?}: expected 1/0/true/false", s))?,
            None => defaults.lookahead,
        };

        let weights_path = var("TETRAI_WEIGHTS_PATH");
        let weights = match &weights_path {
            Some(path) => SearchWeights::load(path)
                .with_context(|| format!("loading weights from {}", path))?,
            None => defaults.weights,
        };

        Ok(Self {
            seed,
            games,
            max_pieces,
            piece_rule,
            lookahead,
            weights,
            weights_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config(vars: &[(&str, &str)]) -> Result<RunnerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunnerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn unset_variables_take_defaults() {
        assert_eq!(config(&[]).unwrap(), RunnerConfig::default());
        // Empty counts as unset
        assert_eq!(
            config(&[("TETRAI_GAMES", "  "), ("TETRAI_WEIGHTS_PATH", "")]).unwrap(),
            RunnerConfig::default()
        );
    }

    #[test]
    fn every_variable_is_read() {
        let cfg = config(&[
            ("TETRAI_SEED", "42"),
            ("TETRAI_GAMES", "3"),
            ("TETRAI_MAX_PIECES", " 200 "),
            ("TETRAI_PIECE_RULE", "Bag7"),
            ("TETRAI_LOOKAHEAD", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.games, 3);
        assert_eq!(cfg.max_pieces, 200);
        assert_eq!(cfg.piece_rule, PieceRule::Bag7);
        assert!(cfg.lookahead);
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = config(&[("TETRAI_GAMES", "abc")]).unwrap_err();
        assert!(err.to_string().contains("TETRAI_GAMES"), "{}", err);
        assert!(config(&[("TETRAI_SEED", "-1")]).is_err());
    }

    #[test]
    fn unknown_piece_rule_is_rejected() {
        let err = config(&[("TETRAI_PIECE_RULE", "tgm")]).unwrap_err();
        assert!(err.to_string().contains("TETRAI_PIECE_RULE"), "{}", err);
    }

    #[test]
    fn lookahead_flag_values() {
        assert!(!config(&[("TETRAI_LOOKAHEAD", "0")]).unwrap().lookahead);
        assert!(config(&[("TETRAI_LOOKAHEAD", "1")]).unwrap().lookahead);
        assert!(config(&[("TETRAI_LOOKAHEAD", "yes")]).is_err());
    }

    #[test]
    fn weights_file_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "holes": -2.5, "bumpiness": -0.1 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cfg = config(&[("TETRAI_WEIGHTS_PATH", path.as_str())]).unwrap();
        assert_eq!(cfg.weights.holes, -2.5);
        assert_eq!(cfg.weights.bumpiness, -0.1);
        assert_eq!(
            cfg.weights.lines_cleared,
            SearchWeights::default().lines_cleared
        );
        assert_eq!(cfg.weights_path.as_deref(), Some(path.as_str()));
    }

    #[test]
    fn bad_weights_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = config(&[("TETRAI_WEIGHTS_PATH", path.as_str())]).unwrap_err();
        assert!(err.to_string().contains("loading weights"), "{}", err);
        assert!(config(&[("TETRAI_WEIGHTS_PATH", "/nonexistent/w.json")]).is_err());
    }
}
