//! CSS parsing on top of `cssparser`.
//!
//! Supported syntax is a strict subset of CSS level 3:
//!
//! - qualified rules with comma-separated selector lists
//! - type, universal, class, id and pseudo-class selectors
//! - descendant (whitespace) and child (`>`) combinators
//! - `property: value` declarations with an optional `!important`
//!
//! At-rules are rejected, as is anything the tokenizer cannot place.

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError, ParseErrorKind,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    Token,
};

use crate::selector::{Combinator, CompoundSelector, Selector};
use crate::sheet::Declaration;

/// Parser-specific failure reasons carried inside `cssparser` errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum CssError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    #[error("property '{0}' has no value")]
    EmptyValue(String),
}

/// A rule as written: one selector list sharing a declaration block.
#[derive(Debug)]
pub(crate) struct ParsedRule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// Location and description of the first error in a stylesheet.
#[derive(Debug)]
pub(crate) struct ParseFailure {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

/// Parses a whole stylesheet, stopping at the first error.
pub(crate) fn parse_rules(css: &str) -> Result<Vec<ParsedRule>, ParseFailure> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rule_parser = RuleParser;

    let mut rules = Vec::new();
    for result in cssparser::StyleSheetParser::new(&mut parser, &mut rule_parser) {
        match result {
            Ok(rule) => rules.push(rule),
            Err((error, _)) => {
                return Err(ParseFailure {
                    line: error.location.line + 1,
                    column: error.location.column,
                    message: describe(&error.kind),
                })
            }
        }
    }
    Ok(rules)
}

fn describe(kind: &ParseErrorKind<'_, CssError>) -> String {
    match kind {
        ParseErrorKind::Custom(error) => error.to_string(),
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {:?}", token)
        }
        ParseErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(name)) => {
            format!("unsupported at-rule '@{}'", name.as_ref())
        }
        ParseErrorKind::Basic(other) => format!("{:?}", other),
    }
}

struct RuleParser;

impl<'i> QualifiedRuleParser<'i> for RuleParser {
    type Prelude = Vec<Selector>;
    type QualifiedRule = ParsedRule;
    type Error = CssError;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut selectors = Vec::new();
        let mut builder = SelectorBuilder::default();

        loop {
            let token = match input.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            let step = match token {
                Token::WhiteSpace(_) => {
                    builder.whitespace();
                    Ok(())
                }
                Token::Comma => builder.finish().map(|selector| selectors.push(selector)),
                Token::Delim('>') => builder.child(),
                Token::Delim('*') => builder.universal(),
                Token::Ident(name) => builder.type_name(name.as_ref()),
                Token::IDHash(id) => builder.id(id.as_ref()),
                Token::Delim('.') => match input.next_including_whitespace() {
                    Ok(Token::Ident(class)) => {
                        let class = class.as_ref().to_string();
                        builder.class(class)
                    }
                    _ => Err("expected class name after '.'".to_string()),
                },
                Token::Colon => match input.next_including_whitespace() {
                    Ok(Token::Ident(pseudo)) => {
                        let pseudo = pseudo.as_ref().to_string();
                        builder.pseudo_class(pseudo)
                    }
                    _ => Err("expected pseudo-class name after ':'".to_string()),
                },
                other => Err(format!("unexpected {:?}", other)),
            };
            if let Err(reason) = step {
                return Err(input.new_custom_error(CssError::InvalidSelector(reason)));
            }
        }

        match builder.finish() {
            Ok(selector) => selectors.push(selector),
            Err(reason) => return Err(input.new_custom_error(CssError::InvalidSelector(reason))),
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        selectors: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut declaration_parser = DeclarationListParser;
        let mut declarations = Vec::new();

        for item in RuleBodyParser::new(input, &mut declaration_parser) {
            match item {
                Ok(declaration) => declarations.push(declaration),
                Err((error, _)) => return Err(error),
            }
        }

        Ok(ParsedRule {
            selectors,
            declarations,
        })
    }
}

impl<'i> AtRuleParser<'i> for RuleParser {
    type Prelude = ();
    type AtRule = ParsedRule;
    type Error = CssError;
}

/// Accumulates simple selectors and combinators into complex selectors.
#[derive(Default)]
struct SelectorBuilder {
    done: Vec<CompoundSelector>,
    links: Vec<Combinator>,
    current: CompoundSelector,
    pending: Option<Combinator>,
}

impl SelectorBuilder {
    fn whitespace(&mut self) {
        if !self.current.is_empty() && self.pending.is_none() {
            self.pending = Some(Combinator::Descendant);
        }
    }

    fn child(&mut self) -> Result<(), String> {
        if self.current.is_empty() || self.pending == Some(Combinator::Child) {
            return Err("'>' must sit between two selectors".to_string());
        }
        self.pending = Some(Combinator::Child);
        Ok(())
    }

    fn type_name(&mut self, name: &str) -> Result<(), String> {
        self.open_compound();
        if !self.current.is_empty() {
            return Err(format!("type selector '{}' must come first", name));
        }
        self.current.type_name = Some(name.to_string());
        Ok(())
    }

    fn universal(&mut self) -> Result<(), String> {
        self.open_compound();
        if !self.current.is_empty() {
            return Err("'*' must come first".to_string());
        }
        self.current.universal = true;
        Ok(())
    }

    fn id(&mut self, id: &str) -> Result<(), String> {
        self.open_compound();
        if self.current.id.is_some() {
            return Err(format!("second id '#{}' in one compound selector", id));
        }
        self.current.id = Some(id.to_string());
        Ok(())
    }

    fn class(&mut self, class: String) -> Result<(), String> {
        self.open_compound();
        self.current.classes.push(class);
        Ok(())
    }

    fn pseudo_class(&mut self, pseudo: String) -> Result<(), String> {
        self.open_compound();
        self.current.pseudo_classes.push(pseudo);
        Ok(())
    }

    /// Moves the current compound behind a waiting combinator.
    fn open_compound(&mut self) {
        if let Some(combinator) = self.pending.take() {
            self.done.push(std::mem::take(&mut self.current));
            self.links.push(combinator);
        }
    }

    /// Completes one selector of the list and resets for the next.
    fn finish(&mut self) -> Result<Selector, String> {
        let SelectorBuilder {
            mut done,
            links,
            current,
            pending,
        } = std::mem::take(self);

        if pending == Some(Combinator::Child) {
            return Err("selector ends with '>'".to_string());
        }
        if current.is_empty() {
            return Err("empty selector".to_string());
        }

        done.push(current);
        let mut compounds = done.into_iter();
        let first = compounds.next().unwrap_or_default();
        Ok(Selector::new(first, links.into_iter().zip(compounds).collect()))
    }
}

struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Declaration;
    type Error = CssError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        let mut end = start;
        let mut important = false;

        loop {
            match input.next() {
                Ok(Token::Delim('!')) => {
                    input.expect_ident_matching("important")?;
                    important = true;
                    break;
                }
                Ok(token) => {
                    let opens_block = matches!(
                        token,
                        Token::Function(_)
                            | Token::ParenthesisBlock
                            | Token::SquareBracketBlock
                            | Token::CurlyBracketBlock
                    );
                    if opens_block {
                        input.parse_nested_block(|nested| {
                            while nested.next().is_ok() {}
                            Ok::<(), ParseError<'i, CssError>>(())
                        })?;
                    }
                    end = input.position();
                }
                Err(_) => break,
            }
        }
        input.expect_exhausted()?;

        let value = input.slice(start..end).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(CssError::EmptyValue(name.as_ref().to_string())));
        }

        Ok(Declaration {
            property: name.as_ref().to_ascii_lowercase(),
            value: value.to_string(),
            important,
        })
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = CssError;
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = CssError;
}

impl<'i> RuleBodyItemParser<'i, Declaration, CssError> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
