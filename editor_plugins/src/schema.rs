//! Schema fragments and composition
//!
//! Plugins declare rules grouped under document / block / inline / mark
//! targets. Composition expands each fragment to a flat canonical rule
//! sequence and concatenates them in plugin-list order. Nothing is merged,
//! deduplicated, or resolved here; conflicting rules for one target survive
//! side by side for the downstream validator.

use crate::plugin::PluginList;
use serde::{Deserialize, Serialize};

/// What a schema rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleTarget {
    Document,
    Block(String),
    Inline(String),
    Mark(String),
}

/// A rule body before it is bound to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// What the rule constrains (e.g. "nodes", "text", "normalize")
    pub directive: String,
    /// Structured parameters, opaque to this layer
    pub params: Vec<(String, String)>,
}

impl RuleSpec {
    /// Creates a rule body with the given directive
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// A canonical rule: a body bound to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRule {
    pub target: RuleTarget,
    pub directive: String,
    pub params: Vec<(String, String)>,
}

impl SchemaRule {
    fn bind(target: RuleTarget, spec: &RuleSpec) -> Self {
        Self {
            target,
            directive: spec.directive.clone(),
            params: spec.params.clone(),
        }
    }
}

/// A plugin's schema contribution, grouped by target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFragment {
    document: Vec<RuleSpec>,
    blocks: Vec<(String, Vec<RuleSpec>)>,
    inlines: Vec<(String, Vec<RuleSpec>)>,
    marks: Vec<(String, Vec<RuleSpec>)>,
}

impl SchemaFragment {
    /// Creates an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document-level rule
    pub fn with_document_rule(mut self, spec: RuleSpec) -> Self {
        self.document.push(spec);
        self
    }

    /// Adds a rule for a block type
    pub fn with_block_rule(mut self, block_type: impl Into<String>, spec: RuleSpec) -> Self {
        push_grouped(&mut self.blocks, block_type.into(), spec);
        self
    }

    /// Adds a rule for an inline type
    pub fn with_inline_rule(mut self, inline_type: impl Into<String>, spec: RuleSpec) -> Self {
        push_grouped(&mut self.inlines, inline_type.into(), spec);
        self
    }

    /// Adds a rule for a mark type
    pub fn with_mark_rule(mut self, mark_type: impl Into<String>, spec: RuleSpec) -> Self {
        push_grouped(&mut self.marks, mark_type.into(), spec);
        self
    }

    /// Returns true if the fragment declares no rules
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
            && self.blocks.is_empty()
            && self.inlines.is_empty()
            && self.marks.is_empty()
    }

    /// Expands the fragment to its canonical flat rule sequence
    ///
    /// Document rules first, then blocks, inlines, and marks, each group in
    /// insertion order.
    pub fn expand(&self) -> Vec<SchemaRule> {
        let mut rules = Vec::new();
        for spec in &self.document {
            rules.push(SchemaRule::bind(RuleTarget::Document, spec));
        }
        for (block_type, specs) in &self.blocks {
            for spec in specs {
                rules.push(SchemaRule::bind(RuleTarget::Block(block_type.clone()), spec));
            }
        }
        for (inline_type, specs) in &self.inlines {
            for spec in specs {
                rules.push(SchemaRule::bind(
                    RuleTarget::Inline(inline_type.clone()),
                    spec,
                ));
            }
        }
        for (mark_type, specs) in &self.marks {
            for spec in specs {
                rules.push(SchemaRule::bind(RuleTarget::Mark(mark_type.clone()), spec));
            }
        }
        rules
    }
}

fn push_grouped(groups: &mut Vec<(String, Vec<RuleSpec>)>, key: String, spec: RuleSpec) {
    if let Some((_, specs)) = groups.iter_mut().find(|(k, _)| *k == key) {
        specs.push(spec);
    } else {
        groups.push((key, vec![spec]));
    }
}

/// The composed schema: an ordered rule sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    rules: Vec<SchemaRule>,
}

impl Schema {
    /// Creates a schema from an ordered rule sequence
    pub fn new(rules: Vec<SchemaRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in order
    pub fn rules(&self) -> &[SchemaRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Composes the schema from a plugin list and an optional override fragment
///
/// The override fragment (supplied directly to the orchestrator) expands
/// first, then each plugin's fragment in list order. Purely additive: later
/// fragments cannot remove or replace earlier rules.
pub fn compose(plugins: &PluginList, schema_override: Option<&SchemaFragment>) -> Schema {
    let mut rules = Vec::new();
    if let Some(fragment) = schema_override {
        rules.extend(fragment.expand());
    }
    for plugin in plugins.iter() {
        if let Some(fragment) = plugin.schema() {
            rules.extend(fragment.expand());
        }
    }
    Schema::new(rules)
}
