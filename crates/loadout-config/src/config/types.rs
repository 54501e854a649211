use serde::{Deserialize, Serialize};

/// Source map fidelity, chosen by build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMapMode {
    /// Full external source map; slow to build, exact positions.
    #[serde(rename = "source-map")]
    Full,

    /// Inline, per-module eval maps; low fidelity, fast rebuilds.
    #[serde(rename = "cheap-module-eval-source-map")]
    CheapModuleEval,
}

impl SourceMapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMapMode::Full => "source-map",
            SourceMapMode::CheapModuleEval => "cheap-module-eval-source-map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_engine_names() {
        assert_eq!(
            serde_json::to_string(&SourceMapMode::Full).unwrap(),
            "\"source-map\""
        );
        assert_eq!(
            serde_json::to_string(&SourceMapMode::CheapModuleEval).unwrap(),
            "\"cheap-module-eval-source-map\""
        );
    }
}
