use log::warn;
use thiserror::Error;

pub const DEBUG_VAR: &str = "CONCENTRATION_DEBUG";
pub const WIN_RULE_VAR: &str = "CONCENTRATION_WIN_RULE";
pub const SEED_VAR: &str = "CONCENTRATION_SEED";

/// How the board decides that the game is won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WinRule {
    /// Every card is face up.
    #[default]
    AllFaceUp,
    /// Only the card in the final slot is inspected, so a showing last card
    /// announces a win whatever the rest of the board looks like.
    LastSlot,
}

impl WinRule {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "all-face-up" | "all" => Some(WinRule::AllFaceUp),
            "last-slot" | "last" => Some(WinRule::LastSlot),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown win rule {value:?}, expected \"all-face-up\" or \"last-slot\"")]
    UnknownWinRule { var: &'static str, value: String },
    #[error("{var}: {value:?} is not an unsigned integer")]
    InvalidSeed { var: &'static str, value: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub win_rule: WinRule,
    pub seed: Option<u64>,
}

fn truthy(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    matches!(v.as_str(), "1" | "true" | "yes" | "on")
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from `lookup`. Values that fail to parse are logged
    /// and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let (settings, errors) = Self::parse(lookup);
        for error in errors {
            warn!("ignoring setting: {error}");
        }
        settings
    }

    fn parse(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        let debug = lookup(DEBUG_VAR).is_some_and(|value| truthy(&value));

        let win_rule = match lookup(WIN_RULE_VAR) {
            Some(value) => WinRule::from_code(&value).unwrap_or_else(|| {
                errors.push(ConfigError::UnknownWinRule {
                    var: WIN_RULE_VAR,
                    value,
                });
                WinRule::default()
            }),
            None => WinRule::default(),
        };

        let seed = lookup(SEED_VAR).and_then(|value| match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                errors.push(ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value,
                });
                None
            }
        });

        (
            Settings {
                debug,
                win_rule,
                seed,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.win_rule, WinRule::AllFaceUp);
    }

    #[test]
    fn reads_all_settings() {
        let settings = Settings::from_lookup(lookup_from(&[
            (DEBUG_VAR, "Yes"),
            (WIN_RULE_VAR, "last-slot"),
            (SEED_VAR, " 1234 "),
        ]));
        assert!(settings.debug);
        assert_eq!(settings.win_rule, WinRule::LastSlot);
        assert_eq!(settings.seed, Some(1234));
    }

    #[test]
    fn debug_flag_requires_truthy_value() {
        let settings = Settings::from_lookup(lookup_from(&[(DEBUG_VAR, "0")]));
        assert!(!settings.debug);
    }

    #[test]
    fn bad_values_fall_back_and_are_reported() {
        let (settings, errors) = Settings::parse(lookup_from(&[
            (WIN_RULE_VAR, "sometimes"),
            (SEED_VAR, "-3"),
        ]));
        assert_eq!(settings.win_rule, WinRule::AllFaceUp);
        assert_eq!(settings.seed, None);
        assert_eq!(
            errors,
            vec![
                ConfigError::UnknownWinRule {
                    var: WIN_RULE_VAR,
                    value: "sometimes".to_string(),
                },
                ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value: "-3".to_string(),
                },
            ]
        );
    }
}
