//! Rule registry mapping rule names to option-validated rule values.
//!
//! The registry is built statically at startup; there is no runtime
//! discovery of rule definitions.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::Rule;

/// Errors raised while resolving a rule and its options.
///
/// Option values are validated here, once, before an analysis pass; the
/// rules themselves never fail.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
    #[error("invalid options for rule `{rule}`: {source}")]
    InvalidOptions {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Trait for rules that can be constructed from host-supplied options.
pub trait FromOptions: Rule + Sized {
    /// The rule name this rule is registered under.
    const RULE_NAME: &'static str;

    /// Create a rule instance from the host's option value, if any.
    /// `None` means the rule runs with its defaults.
    fn from_options(options: Option<&Value>) -> Result<Self, OptionsError>;
}

/// A factory function that creates a boxed rule from options.
type RuleFactory = fn(Option<&Value>) -> Result<Box<dyn Rule>, OptionsError>;

/// Registry mapping rule names to rule factories.
pub struct RuleRegistry {
    factories: HashMap<&'static str, RuleFactory>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a rule type that implements FromOptions.
    pub fn register<R: FromOptions + 'static>(&mut self) {
        self.factories.insert(R::RULE_NAME, |options| {
            R::from_options(options).map(|rule| Box::new(rule) as Box<dyn Rule>)
        });
    }

    /// Register all built-in rules.
    fn register_builtins(&mut self) {
        use crate::rules::NoSingleLineCommentBlock;

        // Comment rules
        self.register::<NoSingleLineCommentBlock>();
    }

    /// Create a rule from a rule name and options.
    pub fn create_rule(
        &self,
        rule_name: &str,
        options: Option<&Value>,
    ) -> Result<Box<dyn Rule>, OptionsError> {
        let factory = self
            .factories
            .get(rule_name)
            .ok_or_else(|| OptionsError::UnknownRule(rule_name.to_string()))?;
        factory(options)
    }

    /// Check if a rule name is registered.
    pub fn has_rule(&self, rule_name: &str) -> bool {
        self.factories.contains_key(rule_name)
    }

    /// Get all registered rule names.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
