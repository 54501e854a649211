//! Plugin activation records.
//!
//! List position is the registration order the engine sees, and it is part
//! of the contract: the vendor split must register before the production
//! optimizers, extraction must precede minification, and the reload plugins
//! come last. Reordering silently changes build output, so the assembly
//! code in the resolver is the only place that constructs these lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Split the named entry into its own output chunk.
    VendorSplit { chunk: String, filename: String },

    /// Pull stylesheet output into a separate hashed file.
    ExtractStyles { filename: String },

    /// Collapse modules duplicated across chunks.
    Dedupe,

    /// Assign module ids by occurrence count so hashed output is stable.
    StableModuleOrder,

    /// Minify emitted chunks.
    Minify,

    /// Prepend a raw script to entry chunks.
    Banner {
        script: String,
        raw: bool,
        entry_only: bool,
    },

    /// Patch modules in the running page without a reload.
    HotModuleReplacement,
}

impl PluginSpec {
    /// One-shot console notice identifying the active mode and reload
    /// setting, guarded so repeated chunk evaluation stays quiet.
    pub fn dev_banner(mode: &str, reload: &str) -> Self {
        let script = format!(
            "if (!window.__loadoutBannerShown__) {{\n  \
             window.__loadoutBannerShown__ = true;\n  \
             console.debug('[loadout] BUILD_MODE={mode}');\n  \
             console.debug('[loadout] RELOAD_MODE={reload}');\n}}\n"
        );
        PluginSpec::Banner {
            script,
            raw: true,
            entry_only: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_banner_names_both_flags() {
        let PluginSpec::Banner {
            script,
            raw,
            entry_only,
        } = PluginSpec::dev_banner("development", "hot")
        else {
            panic!("expected banner");
        };

        assert!(raw);
        assert!(entry_only);
        assert!(script.contains("BUILD_MODE=development"));
        assert!(script.contains("RELOAD_MODE=hot"));
        assert!(script.contains("__loadoutBannerShown__"));
    }

    #[test]
    fn tagged_serialization_names_plugins() {
        let json = serde_json::to_value(PluginSpec::Dedupe).unwrap();
        assert_eq!(json["plugin"], "dedupe");

        let json = serde_json::to_value(PluginSpec::VendorSplit {
            chunk: "_vendor".into(),
            filename: "vendor.js".into(),
        })
        .unwrap();
        assert_eq!(json["plugin"], "vendor-split");
        assert_eq!(json["filename"], "vendor.js");
    }
}
