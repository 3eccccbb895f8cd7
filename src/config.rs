use crate::error::{Result, RuleSetError};
use crate::tagger::{Rule, RuleSet};
use crate::tokens::Category;
use serde::Deserialize;

/// Describes the lexical rules of one language.
///
/// This can be written by hand or loaded from TOML, e.g.
/// ```toml
/// name = "haskell"
/// aliases = ["hs"]
/// keywords = ["case", "of"]
/// datatypes = ["Int"]
/// special = ["True", "False"]
/// line-comment = "--"
/// char-literal = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BrushConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Words tagged as `keyword`
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Words tagged as `type`
    #[serde(default)]
    pub datatypes: Vec<String>,
    /// Words tagged as `constant`
    #[serde(default)]
    pub special: Vec<String>,
    /// Prefix of a comment running to the end of the line
    #[serde(default)]
    pub line_comment: Option<String>,
    /// Whether single-quoted literals are tagged as `string`
    #[serde(default)]
    pub char_literal: bool,
}

impl BrushConfig {
    /// Parse a brush configuration from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| RuleSetError::Config(e).into())
    }

    /// Every name this brush can be looked up by, the name itself first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Compile the configuration into a rule set.
    ///
    /// Rules are ordered comment, string, keywords, datatypes, special.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut builder = RuleSet::builder();
        if let Some(prefix) = &self.line_comment {
            builder.rule(Rule::line_comment(prefix)?);
        }
        if self.char_literal {
            builder.rule(Rule::quoted(Category::String)?);
        }
        builder
            .words(self.keywords.as_slice(), Category::Keyword)?
            .words(self.datatypes.as_slice(), Category::Type)?
            .words(self.special.as_slice(), Category::Constant)?;
        builder.build()
    }
}
