//! Prioritised stylesheet accumulation for marquee themes.
//!
//! A [`Stylesheet`] collects CSS from any number of files. Each file is
//! added with a priority; [`Stylesheet::cascade_order`] then orders the
//! rules so that higher priorities, then more specific selectors, then
//! later rules win.
//!
//! Only a subset of CSS is understood:
//!
//! | Syntax | Example |
//! |--------|---------|
//! | Type, universal | `Button`, `*` |
//! | Class, id, pseudo-class | `.primary`, `#ok`, `:hover` |
//! | Combinators | `Stage Button`, `Box > Label` |
//! | Declarations | `color: red;`, `color: red !important;` |
//!
//! At-rules such as `@media` or `@import` are rejected.

mod error;
mod parser;
mod selector;
mod sheet;

pub use error::StyleError;
pub use selector::{Combinator, CompoundSelector, Selector, Specificity};
pub use sheet::{Declaration, StyleRule, StyleSource, Stylesheet};
