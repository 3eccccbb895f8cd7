use crate::error::{Result, RuleSetError};
use crate::tokens::{Category, TaggedSpan};
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;

/// Matches a single-quoted literal, backslash escapes included
const QUOTED: &str = r"'(?:[^\\'\n]|\\.)*'";

/// A pattern paired with the category its matches are tagged with
#[derive(Debug, Clone)]
pub struct Rule {
    exp: Regex,
    category: Category,
}

impl Rule {
    /// Compile a rule from a raw regular expression
    pub fn new(exp: &str, category: Category) -> Result<Self> {
        let compiled = Regex::new(exp).map_err(|source| RuleSetError::Pattern {
            pattern: exp.to_string(),
            source,
        })?;
        Ok(Self { exp: compiled, category })
    }

    /// Compile a rule matching whole-word occurrences of any of the given words.
    ///
    /// The words are escaped and joined into a single alternation anchored at
    /// word boundaries, so `case` will never match inside `casePath`.
    pub fn words<S: AsRef<str>>(words: &[S], category: Category) -> Result<Self> {
        if words.is_empty() {
            return Err(RuleSetError::EmptyWordList.into());
        }
        let mut escaped = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(RuleSetError::Word { word: word.to_string() }.into());
            }
            escaped.push(regex::escape(word));
        }
        Self::new(&format!(r"\b(?:{})\b", escaped.join("|")), category)
    }

    /// A comment running from `prefix` up to the end of its line
    pub fn line_comment(prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(RuleSetError::CommentPrefix.into());
        }
        Self::new(&format!("(?mR){}.*$", regex::escape(prefix)), Category::Comment)
    }

    /// A single-quoted literal that respects backslash escapes
    pub fn quoted(category: Category) -> Result<Self> {
        Self::new(QUOTED, category)
    }

    pub fn pattern(&self) -> &str {
        self.exp.as_str()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// All non-empty, non-overlapping matches of this rule in the text
    pub fn find_all<'a>(&'a self, source: &'a str) -> impl Iterator<Item = TaggedSpan> + 'a {
        self.exp
            .find_iter(source)
            .filter(|m| m.start() != m.end())
            .map(|m| TaggedSpan::new(m.start(), m.end(), self.category))
    }
}

/// An ordered, non-empty and immutable list of rules.
/// Earlier rules win when their matches overlap with later ones.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set, this will fail if no rules are given
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(RuleSetError::Empty.into());
        }
        log::debug!("built rule set with {} rules", rules.len());
        Ok(Self { rules })
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tag the source text, returning spans ordered by start offset
    pub fn tag(&self, source: &str) -> Vec<TaggedSpan> {
        resolve(source, &self.rules)
    }

    /// Tag many documents in parallel, results are in the same order as the input
    pub fn tag_all<S: AsRef<str> + Sync>(&self, sources: &[S]) -> Vec<Vec<TaggedSpan>> {
        sources.par_iter().map(|s| self.tag(s.as_ref())).collect()
    }
}

/// Incrementally assembles a [RuleSet], in the order rules are added
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Register a rule from a raw regular expression
    pub fn add(&mut self, exp: &str, category: Category) -> Result<&mut Self> {
        self.rules.push(Rule::new(exp, category)?);
        Ok(self)
    }

    /// Register a word list rule, an empty list adds nothing
    pub fn words<S: AsRef<str>>(&mut self, words: &[S], category: Category) -> Result<&mut Self> {
        if !words.is_empty() {
            self.rules.push(Rule::words(words, category)?);
        }
        Ok(self)
    }

    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn build(&mut self) -> Result<RuleSet> {
        RuleSet::new(std::mem::take(&mut self.rules))
    }
}

/// Tag the source text with an ordered list of rules.
///
/// Fails with [crate::Error::InvalidRuleSet] if no rules are given,
/// any text at all is accepted otherwise.
pub fn tag(source: &str, rules: &[Rule]) -> Result<Vec<TaggedSpan>> {
    if rules.is_empty() {
        return Err(RuleSetError::Empty.into());
    }
    Ok(resolve(source, rules))
}

fn resolve(source: &str, rules: &[Rule]) -> Vec<TaggedSpan> {
    // Accepted spans keyed by their start offset, these never overlap
    let mut accepted: BTreeMap<usize, TaggedSpan> = BTreeMap::new();
    for rule in rules {
        for span in rule.find_all(source) {
            if !overlaps_accepted(&accepted, &span) {
                accepted.insert(span.start, span);
            }
        }
    }
    log::trace!(
        "tagged {} bytes into {} spans with {} rules",
        source.len(),
        accepted.len(),
        rules.len()
    );
    accepted.into_values().collect()
}

fn overlaps_accepted(accepted: &BTreeMap<usize, TaggedSpan>, span: &TaggedSpan) -> bool {
    // Accepted spans are disjoint, so only the closest one starting before our end can overlap
    accepted
        .range(..span.end)
        .next_back()
        .is_some_and(|(_, prev)| prev.end > span.start)
}
