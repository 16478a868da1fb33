//! Static presentation tables: repository formats and namespace content types.

use serde::{Deserialize, Serialize};

/// Format assigned to repositories that do not report one.
pub const FALLBACK_FORMAT: &str = "role";

/// Avatar used when a namespace has none.
pub const DEFAULT_AVATAR_URL: &str = "/assets/avatar.png";

/// Placeholder for display fields with no source value.
pub const NOT_AVAILABLE: &str = "NA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoFormat {
    Role,
    Apb,
    Multi,
}

impl RepoFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoFormat::Role => "role",
            RepoFormat::Apb => "apb",
            RepoFormat::Multi => "multi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "role" => Some(RepoFormat::Role),
            "apb" => Some(RepoFormat::Apb),
            "multi" => Some(RepoFormat::Multi),
            _ => None,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            RepoFormat::Role => "fa fa-gear",
            RepoFormat::Apb => "pficon pficon-bundle",
            RepoFormat::Multi => "fa fa-cubes",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            RepoFormat::Role => "Role",
            RepoFormat::Apb => "Ansible Playbook Bundle",
            RepoFormat::Multi => "Multi-content",
        }
    }
}

/// Content types summarized on the namespace header, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Role,
    Module,
    Apb,
    ModuleUtils,
    Plugin,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Role,
        ContentType::Module,
        ContentType::Apb,
        ContentType::ModuleUtils,
        ContentType::Plugin,
    ];

    /// Key used by the API in `summary_fields.content_counts`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Role => "role",
            ContentType::Module => "module",
            ContentType::Apb => "apb",
            ContentType::ModuleUtils => "module_utils",
            ContentType::Plugin => "plugin",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ContentType::Role => "Roles",
            ContentType::Module => "Modules",
            ContentType::Apb => "APBs",
            ContentType::ModuleUtils => "Module Utils",
            ContentType::Plugin => "Plugins",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ContentType::Role => "fa fa-gear",
            ContentType::Module => "pficon pficon-service",
            ContentType::Apb => "pficon pficon-bundle",
            ContentType::ModuleUtils => "pficon pficon-repository",
            ContentType::Plugin => "fa fa-plug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_format_parse() {
        assert_eq!(RepoFormat::parse("apb"), Some(RepoFormat::Apb));
        assert_eq!(RepoFormat::parse("collection"), None);
    }

    #[test]
    fn test_fallback_format_has_presentation() {
        let fallback = RepoFormat::parse(FALLBACK_FORMAT).unwrap();
        assert_eq!(fallback.icon_class(), "fa fa-gear");
        assert_eq!(fallback.tooltip(), "Role");
    }
}
