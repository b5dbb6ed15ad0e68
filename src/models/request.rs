//! Request-side parameter types.

use serde::{Deserialize, Serialize};

/// Paging parameters for deployment listings.
///
/// Values are passed through to the server verbatim; no local bounds
/// checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: 0, limit: 20 }
    }
}

/// Analytics interval selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsInterval {
    #[default]
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl AnalyticsInterval {
    /// Query-parameter value understood by the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsInterval::Last24Hours => "24h",
            AnalyticsInterval::Last7Days => "7d",
            AnalyticsInterval::Last30Days => "30d",
        }
    }
}

impl std::fmt::Display for AnalyticsInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields editable on an existing project. Currently only the name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProjectEdit {
    /// Rename the project.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_defaults() {
        let paging = Paging::default();
        assert_eq!(paging.page, 0);
        assert_eq!(paging.limit, 20);
    }

    #[test]
    fn test_interval_query_values() {
        assert_eq!(AnalyticsInterval::Last24Hours.as_str(), "24h");
        assert_eq!(AnalyticsInterval::Last7Days.as_str(), "7d");
        assert_eq!(AnalyticsInterval::Last30Days.as_str(), "30d");
        assert_eq!(AnalyticsInterval::default(), AnalyticsInterval::Last24Hours);
    }

    #[test]
    fn test_project_edit_skips_unset_fields() {
        let body = serde_json::to_string(&ProjectEdit::default()).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_string(&ProjectEdit::rename("renamed")).unwrap();
        assert_eq!(body, r#"{"name":"renamed"}"#);
    }
}
