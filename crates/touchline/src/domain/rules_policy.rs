//! Rules-Load Policy
//!
//! Decides what happens when the rules document cannot be loaded at
//! startup. The original behavior embeds the load error message into the
//! instruction text; the alternatives substitute a degraded notice or
//! abort startup.

use crate::domain::errors::RulesError;

/// Text embedded in place of the rules under the `placeholder` policy.
pub const RULES_UNAVAILABLE_NOTICE: &str =
    "The league rules document is currently unavailable. Answer general questions \
     as best you can, and direct users to league officials for rules specifics.";

/// Policy applied to the rules-document load result before the system
/// instruction is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RulesPolicy {
    /// Embed the load error message into the instructions.
    #[default]
    Embed,
    /// Substitute a fixed "rules unavailable" notice.
    Placeholder,
    /// Abort startup on load failure.
    Fail,
}

impl RulesPolicy {
    /// Resolve a load result into the rules text handed to the
    /// instruction builder.
    pub fn apply(self, loaded: Result<String, RulesError>) -> Result<String, RulesError> {
        match loaded {
            Ok(text) => Ok(text),
            Err(err) => match self {
                Self::Embed => Ok(format!("Error loading rules document: {err}")),
                Self::Placeholder => Ok(RULES_UNAVAILABLE_NOTICE.to_string()),
                Self::Fail => Err(err),
            },
        }
    }
}

impl std::fmt::Display for RulesPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesPolicy::Embed => write!(f, "embed"),
            RulesPolicy::Placeholder => write!(f, "placeholder"),
            RulesPolicy::Fail => write!(f, "fail"),
        }
    }
}

impl std::str::FromStr for RulesPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "embed" => Ok(RulesPolicy::Embed),
            "placeholder" => Ok(RulesPolicy::Placeholder),
            "fail" => Ok(RulesPolicy::Fail),
            _ => Err(format!(
                "Unknown rules policy: {}. Valid: embed, placeholder, fail",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn load_failure() -> RulesError {
        RulesError::Extract {
            path: PathBuf::from("league_rules.pdf"),
            message: "not a PDF".to_string(),
        }
    }

    #[test]
    fn test_parse_round_trips() {
        for policy in [RulesPolicy::Embed, RulesPolicy::Placeholder, RulesPolicy::Fail] {
            assert_eq!(policy.to_string().parse::<RulesPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EMBED".parse::<RulesPolicy>(), Ok(RulesPolicy::Embed));
        assert_eq!("Fail".parse::<RulesPolicy>(), Ok(RulesPolicy::Fail));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert!("retry".parse::<RulesPolicy>().is_err());
    }

    #[test]
    fn test_successful_load_passes_through() {
        let text = RulesPolicy::Fail.apply(Ok("rules".to_string())).unwrap();
        assert_eq!(text, "rules");
    }

    #[test]
    fn test_embed_produces_error_sentinel() {
        let text = RulesPolicy::Embed.apply(Err(load_failure())).unwrap();
        assert!(text.starts_with("Error loading rules document:"));
        assert!(text.contains("league_rules.pdf"));
    }

    #[test]
    fn test_placeholder_produces_fixed_notice() {
        let text = RulesPolicy::Placeholder.apply(Err(load_failure())).unwrap();
        assert_eq!(text, RULES_UNAVAILABLE_NOTICE);
    }

    #[test]
    fn test_fail_propagates_the_load_error() {
        assert!(RulesPolicy::Fail.apply(Err(load_failure())).is_err());
    }
}
