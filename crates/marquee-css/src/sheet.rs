//! The prioritised stylesheet accumulator.

use std::path::{Path, PathBuf};

use crate::error::StyleError;
use crate::parser::parse_rules;
use crate::selector::{Selector, Specificity};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub property: String,
    /// Value text with surrounding whitespace and `!important` removed.
    pub value: String,
    pub important: bool,
}

/// One selector with its declaration block.
///
/// A selector list like `a, b { ... }` becomes one rule per selector, all
/// sharing the same declarations and insertion order.
#[derive(Debug, Clone)]
pub struct StyleRule {
    selector: Selector,
    declarations: Vec<Declaration>,
    priority: u32,
    source: usize,
    order: usize,
}

impl StyleRule {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Priority of the file the rule came from.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Index into [`Stylesheet::sources`].
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn specificity(&self) -> Specificity {
        self.selector.specificity()
    }

    /// Finds the last declaration of `property` in this rule.
    pub fn get(&self, property: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.property.eq_ignore_ascii_case(property))
    }
}

/// A stylesheet file (or in-memory source) that was added successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSource {
    pub path: PathBuf,
    pub priority: u32,
}

/// Accumulates stylesheets, each tagged with a priority.
///
/// Later files are given higher priorities by the theme loader, so in
/// [`cascade_order`](Self::cascade_order) they come after, and override,
/// earlier ones. A file that fails to parse leaves the stylesheet untouched.
///
/// # Example
///
/// ```rust
/// use marquee_css::Stylesheet;
///
/// let mut sheet = Stylesheet::new();
/// sheet.add_data("base", "Button { color: black; }", 0).unwrap();
/// sheet.add_data("accent", ".primary { color: red; }", 1).unwrap();
///
/// let order: Vec<String> = sheet
///     .cascade_order()
///     .iter()
///     .map(|rule| rule.selector().to_string())
///     .collect();
/// assert_eq!(order, vec!["Button", ".primary"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
    sources: Vec<StyleSource>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and adds the stylesheet at `path`.
    pub fn add_file(&mut self, path: impl AsRef<Path>, priority: u32) -> Result<(), StyleError> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(path.to_path_buf(), &css, priority)
    }

    /// Adds CSS held in memory. `source_name` stands in for a path in errors
    /// and in [`sources`](Self::sources).
    pub fn add_data(
        &mut self,
        source_name: impl Into<PathBuf>,
        css: &str,
        priority: u32,
    ) -> Result<(), StyleError> {
        self.add_source(source_name.into(), css, priority)
    }

    fn add_source(&mut self, path: PathBuf, css: &str, priority: u32) -> Result<(), StyleError> {
        let parsed = parse_rules(css).map_err(|failure| StyleError::Parse {
            path: path.clone(),
            line: failure.line,
            column: failure.column,
            message: failure.message,
        })?;

        let source = self.sources.len();
        let mut order = self.rules.len();
        for rule in parsed {
            for selector in rule.selectors {
                self.rules.push(StyleRule {
                    selector,
                    declarations: rule.declarations.clone(),
                    priority,
                    source,
                    order,
                });
            }
            order += 1;
        }
        self.sources.push(StyleSource { path, priority });
        Ok(())
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Rules sorted from weakest to strongest: by priority, then
    /// specificity, then insertion order.
    pub fn cascade_order(&self) -> Vec<&StyleRule> {
        let mut ordered: Vec<&StyleRule> = self.rules.iter().collect();
        ordered.sort_by_key(|rule| (rule.priority, rule.specificity(), rule.order));
        ordered
    }

    /// Successfully added sources in the order they were added.
    pub fn sources(&self) -> &[StyleSource] {
        &self.sources
    }

    pub fn source_of(&self, rule: &StyleRule) -> Option<&StyleSource> {
        self.sources.get(rule.source)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
