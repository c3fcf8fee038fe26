//! Selector model and specificity.

use std::fmt;

/// How two compound selectors relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: any ancestor.
    Descendant,
    /// `>`: direct parent.
    Child,
}

/// A run of simple selectors without combinators, like `Button#ok.primary:hover`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// Element type name; `None` for `*` or when only other parts are given.
    pub type_name: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub pseudo_classes: Vec<String>,
    pub(crate) universal: bool,
}

impl CompoundSelector {
    /// Returns `true` if no simple selector has been recorded.
    pub fn is_empty(&self) -> bool {
        !self.universal
            && self.type_name.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.pseudo_classes.is_empty()
    }

    fn specificity(&self) -> Specificity {
        Specificity {
            ids: u32::from(self.id.is_some()),
            classes: (self.classes.len() + self.pseudo_classes.len()) as u32,
            types: u32::from(self.type_name.is_some()),
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_name {
            Some(name) => write!(f, "{}", name)?,
            None if self.universal => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }
        Ok(())
    }
}

/// Selector weight as (ids, classes and pseudo-classes, types).
///
/// Ordering compares ids first, then classes, then types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, other: Specificity) -> Specificity {
        Specificity {
            ids: self.ids + other.ids,
            classes: self.classes + other.classes,
            types: self.types + other.types,
        }
    }
}

/// A complex selector: compound selectors joined by combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    first: CompoundSelector,
    rest: Vec<(Combinator, CompoundSelector)>,
}

impl Selector {
    pub(crate) fn new(first: CompoundSelector, rest: Vec<(Combinator, CompoundSelector)>) -> Self {
        Self { first, rest }
    }

    /// The rightmost compound, i.e. the element the rule styles.
    pub fn subject(&self) -> &CompoundSelector {
        self.rest.last().map(|(_, c)| c).unwrap_or(&self.first)
    }

    /// The leftmost compound.
    pub fn first(&self) -> &CompoundSelector {
        &self.first
    }

    /// Compounds to the right of the first one, each with the combinator
    /// that links it to its left neighbour.
    pub fn rest(&self) -> &[(Combinator, CompoundSelector)] {
        &self.rest
    }

    pub fn specificity(&self) -> Specificity {
        self.rest
            .iter()
            .fold(self.first.specificity(), |acc, (_, c)| acc + c.specificity())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (combinator, compound) in &self.rest {
            match combinator {
                Combinator::Descendant => write!(f, " {}", compound)?,
                Combinator::Child => write!(f, " > {}", compound)?,
            }
        }
        Ok(())
    }
}
