use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Output format a user prefers for answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain prose.
    Text,
    /// Markdown-formatted prose.
    Markdown,
    /// Tabular output.
    Table,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" => Ok(OutputFormat::Markdown),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Persisted preferences and domain context for the requesting user.
///
/// Read-only from the pipeline's perspective; the profile store that
/// produces it lives outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    preferences: HashMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
}

impl UserProfile {
    /// Create an empty profile for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            preferences: HashMap::new(),
            preferred_format: None,
            domain: None,
        }
    }

    /// Set a named preference
    pub fn with_preference(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.preferences.insert(name.into(), enabled);
        self
    }

    /// Set the preferred output format
    pub fn with_preferred_format(mut self, format: OutputFormat) -> Self {
        self.preferred_format = Some(format);
        self
    }

    /// Set the domain tag
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// The profile owner's identifier
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether a named preference is present and enabled
    pub fn has_preference(&self, name: &str) -> bool {
        self.preferences.get(name).copied().unwrap_or(false)
    }

    /// The preferred output format, if set
    pub fn preferred_format(&self) -> Option<OutputFormat> {
        self.preferred_format
    }

    /// The domain tag, if set. Open vocabulary; observed values include
    /// "business", "academic" and "creative".
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_round_trip() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Markdown,
            OutputFormat::Table,
            OutputFormat::Json,
        ] {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_serde_snake_case() {
        let json = serde_json::to_string(&OutputFormat::Table).unwrap();
        assert_eq!(json, r#""table""#);
    }

    #[test]
    fn test_profile_new() {
        let profile = UserProfile::new("user-1");
        assert_eq!(profile.user_id(), "user-1");
        assert!(profile.preferred_format().is_none());
        assert!(profile.domain().is_none());
    }

    #[test]
    fn test_has_preference_absent_is_false() {
        let profile = UserProfile::new("user-1");
        assert!(!profile.has_preference("detailed"));
    }

    #[test]
    fn test_has_preference_disabled_is_false() {
        let profile = UserProfile::new("user-1").with_preference("detailed", false);
        assert!(!profile.has_preference("detailed"));
    }

    #[test]
    fn test_has_preference_enabled_is_true() {
        let profile = UserProfile::new("user-1").with_preference("detailed", true);
        assert!(profile.has_preference("detailed"));
    }

    #[test]
    fn test_profile_builder_chain() {
        let profile = UserProfile::new("user-1")
            .with_preference("visual", true)
            .with_preferred_format(OutputFormat::Table)
            .with_domain("business");

        assert!(profile.has_preference("visual"));
        assert_eq!(profile.preferred_format(), Some(OutputFormat::Table));
        assert_eq!(profile.domain(), Some("business"));
    }

    #[test]
    fn test_profile_deserialize_minimal() {
        let profile: UserProfile = serde_json::from_str(r#"{"user_id": "u-1"}"#).unwrap();
        assert_eq!(profile.user_id(), "u-1");
        assert!(!profile.has_preference("detailed"));
    }
}
