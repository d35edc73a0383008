//! Selection predicates applied while extracting kinds
//!
//! Every name axis is permissive when empty: no `--module` means every
//! module, never none.

use serde::Serialize;
use std::collections::BTreeSet;

use super::errors::ValidationError;
use super::kind::{DefinitionKind, KindTag};

/// Wildcard token selecting every kind.
pub const ALL_KINDS_TOKEN: &str = "all";

/// Kind tokens accepted on the command line and the tag each selects.
pub const KIND_TOKENS: [(&str, Option<KindTag>); 8] = [
    (ALL_KINDS_TOKEN, None),
    ("build", Some(KindTag::BuildDefs)),
    ("package", Some(KindTag::PackageDefs)),
    ("deploy", Some(KindTag::DeployContainerDefs)),
    ("step", Some(KindTag::CustomStepDef)),
    ("pipeline", Some(KindTag::PipelineDef)),
    ("ignore", Some(KindTag::DockerIgnoreDefs)),
    ("ops", Some(KindTag::CustomOpsDefs)),
];

/// Valid kind tokens joined for help and error text
#[must_use]
pub fn kind_token_options() -> String {
    KIND_TOKENS
        .iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" / ")
}

fn lookup_kind_token(token: &str) -> Option<Option<KindTag>> {
    KIND_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, tag)| *tag)
}

fn permits(filter: &[String], name: &str) -> bool {
    filter.is_empty() || filter.iter().any(|f| f == name)
}

/// Immutable selection built once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Requested kinds; empty together with `is_all_kind == false` means summary mode.
    pub kinds: BTreeSet<KindTag>,
    /// Module name filter.
    pub module_names: Vec<String>,
    /// Environment name filter.
    pub env_names: Vec<String>,
    /// Branch name filter.
    pub branch_names: Vec<String>,
    /// Step name filter.
    pub step_names: Vec<String>,
    /// `all` was requested.
    pub is_all_kind: bool,
}

impl FilterSpec {
    /// Creates a filter in summary mode with every axis open
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated kind list such as `build,package`.
    ///
    /// Tokens are trimmed and blank ones skipped. `all` sets
    /// [`is_all_kind`][Self::is_all_kind] and adds no tag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownKind`] for the first token outside
    /// the selector vocabulary.
    pub fn with_kinds(mut self, tokens: &str) -> Result<Self, ValidationError> {
        for token in tokens.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match lookup_kind_token(token) {
                Some(Some(tag)) => {
                    self.kinds.insert(tag);
                }
                Some(None) => self.is_all_kind = true,
                None => {
                    return Err(ValidationError::UnknownKind {
                        token: token.to_string(),
                        options: kind_token_options(),
                    });
                }
            }
        }
        Ok(self)
    }

    /// Sets the module name filter.
    #[must_use]
    pub fn with_modules(mut self, names: Vec<String>) -> Self {
        self.module_names = names;
        self
    }

    /// Sets the environment name filter.
    #[must_use]
    pub fn with_envs(mut self, names: Vec<String>) -> Self {
        self.env_names = names;
        self
    }

    /// Sets the branch name filter.
    #[must_use]
    pub fn with_branches(mut self, names: Vec<String>) -> Self {
        self.branch_names = names;
        self
    }

    /// Sets the step name filter.
    #[must_use]
    pub fn with_steps(mut self, names: Vec<String>) -> Self {
        self.step_names = names;
        self
    }

    /// Returns true if no kind was requested
    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.kinds.is_empty() && !self.is_all_kind
    }

    /// Module axis
    #[must_use]
    pub fn includes_module(&self, name: &str) -> bool {
        permits(&self.module_names, name)
    }

    /// Environment axis
    #[must_use]
    pub fn includes_env(&self, env_name: &str) -> bool {
        permits(&self.env_names, env_name)
    }

    /// Branch axis
    #[must_use]
    pub fn includes_branch(&self, branch_name: &str) -> bool {
        permits(&self.branch_names, branch_name)
    }

    /// Step axis
    #[must_use]
    pub fn includes_step(&self, step_name: &str) -> bool {
        permits(&self.step_names, step_name)
    }

    /// Kind axis; summary mode and `all` keep everything
    #[must_use]
    pub fn includes_kind(&self, tag: KindTag) -> bool {
        self.is_summary() || self.is_all_kind || self.kinds.contains(&tag)
    }

    /// Reduces extracted kinds to the requested ones, preserving order
    #[must_use]
    pub fn retain_kinds(&self, kinds: Vec<DefinitionKind>) -> Vec<DefinitionKind> {
        kinds
            .into_iter()
            .filter(|kind| self.includes_kind(kind.tag()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_summary_and_permissive() {
        let filter = FilterSpec::new();
        assert!(filter.is_summary());
        assert!(filter.includes_module("anything"));
        assert!(filter.includes_env("prod"));
        assert!(filter.includes_branch("develop"));
        assert!(filter.includes_step("testApi"));
    }

    #[test]
    fn test_with_kinds_maps_tokens() {
        let filter = FilterSpec::new().with_kinds("build, package").unwrap();
        assert!(!filter.is_summary());
        assert!(!filter.is_all_kind);
        assert!(filter.kinds.contains(&KindTag::BuildDefs));
        assert!(filter.kinds.contains(&KindTag::PackageDefs));
        assert_eq!(filter.kinds.len(), 2);
    }

    #[test]
    fn test_with_kinds_all_sets_wildcard() {
        let filter = FilterSpec::new().with_kinds("all").unwrap();
        assert!(filter.is_all_kind);
        assert!(filter.kinds.is_empty());
        assert!(!filter.is_summary());
        for tag in KindTag::ALL {
            assert!(filter.includes_kind(tag));
        }
    }

    #[test]
    fn test_with_kinds_all_overrides_explicit_list() {
        let filter = FilterSpec::new().with_kinds("pipeline,all").unwrap();
        assert!(filter.is_all_kind);
        assert!(filter.includes_kind(KindTag::BuildDefs));
    }

    #[test]
    fn test_with_kinds_skips_blank_tokens() {
        let filter = FilterSpec::new().with_kinds(" ,deploy,, ").unwrap();
        assert_eq!(filter.kinds.len(), 1);
        assert!(filter.kinds.contains(&KindTag::DeployContainerDefs));
    }

    #[test]
    fn test_unknown_kind_names_token_and_options() {
        let err = FilterSpec::new().with_kinds("build,deploys").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("kind deploys format error"));
        assert!(msg.contains("all / build / package / deploy / step / pipeline / ignore / ops"));
    }

    #[test]
    fn test_kind_tags_are_not_tokens() {
        assert!(FilterSpec::new().with_kinds("buildDefs").is_err());
    }

    #[test]
    fn test_name_filters_are_exact_and_case_sensitive() {
        let filter = FilterSpec::new()
            .with_modules(vec!["tp1-go-demo".to_string()])
            .with_envs(vec!["test".to_string()]);
        assert!(filter.includes_module("tp1-go-demo"));
        assert!(!filter.includes_module("tp1-go"));
        assert!(!filter.includes_module("TP1-GO-DEMO"));
        assert!(filter.includes_env("test"));
        assert!(!filter.includes_env("Test"));
        assert!(filter.includes_branch("main"));
    }

    #[test]
    fn test_includes_kind_restricts_to_requested() {
        let filter = FilterSpec::new().with_kinds("ignore").unwrap();
        assert!(filter.includes_kind(KindTag::DockerIgnoreDefs));
        assert!(!filter.includes_kind(KindTag::BuildDefs));
    }
}
