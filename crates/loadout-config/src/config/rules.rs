//! Transform rules: which files get which source-to-source chain.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// One (file matcher, transform) pair.
///
/// The engine walks the rule list in order and the first rule whose `test`
/// matches (and whose `exclude` does not) claims the file, so list position
/// is load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Regular expression matched against the module path.
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    pub transform: Transform,
}

/// How a matched file's output is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Run the chain and inline the result into the bundle.
    Chain(Vec<TransformStep>),

    /// Run the chain but pull the result into a separate output file,
    /// falling back to `fallback` for chunks loaded after the initial page.
    Extract {
        fallback: TransformStep,
        chain: Vec<TransformStep>,
    },
}

/// A single named step in a transform chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStep {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Named presets, only meaningful for the script step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<String>,
}

impl TransformStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: None,
            presets: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_presets(mut self, presets: Vec<String>) -> Self {
        self.presets = presets;
        self
    }
}

impl TransformRule {
    /// Whether this rule claims `path`.
    pub fn matches(&self, path: &str) -> Result<bool> {
        if !compile(&self.test)?.is_match(path) {
            return Ok(false);
        }
        if let Some(exclude) = &self.exclude {
            if compile(exclude)?.is_match(path) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// First rule in declaration order that claims `path`.
pub fn first_match<'a>(rules: &'a [TransformRule], path: &str) -> Result<Option<&'a TransformRule>> {
    for rule in rules {
        if rule.matches(path)? {
            return Ok(Some(rule));
        }
    }
    Ok(None)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidMatcher {
        pattern: pattern.to_string(),
        source,
    })
}
