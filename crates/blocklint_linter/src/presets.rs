//! Exported configuration presets.
//!
//! Mirrors the `all` / `recommended` configurations a host plugin
//! manifest exports: every rule name is prefixed with the plugin name
//! and mapped to a severity.

use crate::RuleRegistry;
use crate::rules::NoSingleLineCommentBlock;
use crate::registry::FromOptions;

/// The plugin prefix rule ids are exported under.
pub const PLUGIN_PREFIX: &str = "blocklint";

/// Report severity for a rule in a preset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// A named set of rules with severities.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub rules: Vec<(String, Severity)>,
}

fn qualified(rule_name: &str) -> String {
    format!("{PLUGIN_PREFIX}/{rule_name}")
}

/// Every registered rule at error severity, in stable name order.
pub fn all() -> Preset {
    let registry = RuleRegistry::builtin();
    let mut names: Vec<&'static str> = registry.rule_names().collect();
    names.sort_unstable();
    Preset {
        name: "all",
        rules: names
            .into_iter()
            .map(|name| (qualified(name), Severity::Error))
            .collect(),
    }
}

/// The curated default set.
pub fn recommended() -> Preset {
    Preset {
        name: "recommended",
        rules: vec![(
            qualified(NoSingleLineCommentBlock::RULE_NAME),
            Severity::Warn,
        )],
    }
}
