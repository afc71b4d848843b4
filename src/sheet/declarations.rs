//! Flat declaration edits inside a single block
//!
//! Only the block's own text runs are searched. Declarations of nested blocks
//! belong to those blocks.

use super::parser::{next_lexeme, Lexeme};
use super::{Block, Node};
use cssparser::{Parser, ParserInput};
use std::ops::Range;

const DEFAULT_INDENT: &str = "    ";

/// How [`Block::set_declaration`] applied a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationEdit {
    /// An existing declaration of the property was overwritten
    Replaced,
    /// The block had no such declaration and one was added at the end
    Appended,
}

impl Block {
    /// Value of the last declaration of `property`, the one that takes effect,
    /// trimmed and without `;`
    pub fn declaration_value(&self, property: &str) -> Option<&str> {
        self.body
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => find_declarations(text, property)
                    .pop()
                    .map(|range| value_of(&text[range])),
                Node::Block(_) => None,
            })
            .last()
    }

    /// Overwrite every declaration of `property`. Returns false, leaving the
    /// block untouched, when there is none.
    pub fn replace_declaration(&mut self, property: &str, value: &str) -> bool {
        let declaration = format!("{property}: {value};");
        let mut replaced = false;

        for node in &mut self.body {
            if let Node::Text(text) = node {
                for range in find_declarations(text, property).into_iter().rev() {
                    text.replace_range(range, &declaration);
                    replaced = true;
                }
            }
        }
        replaced
    }

    /// Overwrite the declarations of `property`, or append one
    pub fn set_declaration(&mut self, property: &str, value: &str) -> DeclarationEdit {
        if self.replace_declaration(property, value) {
            return DeclarationEdit::Replaced;
        }

        self.append_declaration(&format!("{property}: {value};"));
        DeclarationEdit::Appended
    }

    /// Append a declaration after the block's last content, following its layout:
    /// one line blocks stay on one line, multi-line blocks get a new indented line.
    fn append_declaration(&mut self, declaration: &str) {
        let multiline = self.is_multiline();
        let indent = self.declaration_indent().to_string();

        if !matches!(self.body.last(), Some(Node::Text(_))) {
            self.body.push(Node::Text(String::new()));
        }

        if let Some(Node::Text(text)) = self.body.last_mut() {
            let mut trailing = text.split_off(text.trim_end().len());
            if trailing.is_empty() {
                trailing = if multiline { "\n" } else { " " }.to_string();
            }

            // Before any trailing comment, so the comment does not swallow it
            if let Some(offset) = missing_terminator(text) {
                text.insert(offset, ';');
            }
            if multiline {
                text.push('\n');
                text.push_str(&indent);
            } else {
                text.push(' ');
            }
            text.push_str(declaration);
            text.push_str(&trailing);
        }
    }

    fn is_multiline(&self) -> bool {
        self.body.iter().any(|node| match node {
            Node::Text(text) => text.contains('\n'),
            Node::Block(block) => block.leading.contains('\n'),
        })
    }

    /// Indentation of the first declaration line in the block
    fn declaration_indent(&self) -> &str {
        for node in &self.body {
            if let Node::Text(text) = node {
                for line in text.split('\n').skip(1) {
                    let content = line.trim_start_matches([' ', '\t']);
                    if !content.is_empty() {
                        return &line[..line.len() - content.len()];
                    }
                }
            }
        }
        DEFAULT_INDENT
    }
}

fn value_of(declaration: &str) -> &str {
    let declaration = declaration.trim_end_matches(';');
    let colon = declaration.find(':').unwrap_or(declaration.len());
    declaration[colon..].trim_start_matches(':').trim()
}

/// Offset right after the last token of the text when that token is not a `;`
fn missing_terminator(text: &str) -> Option<usize> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut last = None;

    while let Some(lexeme) = next_lexeme(&mut parser) {
        if lexeme != Lexeme::Trivia {
            last = Some((lexeme, parser.position().byte_index()));
        }
    }

    match last {
        Some((Lexeme::Semicolon | Lexeme::CloseCurly, _)) | None => None,
        Some((_, end)) => Some(end),
    }
}

/// Byte ranges of all declarations of `property` in a run of block text
///
/// Each range starts at the property name and ends after the terminating `;`,
/// or after the value when the declaration is the last one without `;`.
/// Values are tokenized, so `;` inside strings, comments or `url(...)` does not
/// end a declaration. Property names match as whole identifiers, ignoring ASCII
/// case: `background` does not match `background-color`.
pub fn find_declarations(text: &str, property: &str) -> Vec<Range<usize>> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut found = Vec::new();
    let mut statement = Statement::default();

    loop {
        let before = parser.position().byte_index();
        let Some(lexeme) = next_lexeme(&mut parser) else {
            break;
        };
        let after = parser.position().byte_index();

        match lexeme {
            Lexeme::Trivia => {}
            Lexeme::Semicolon => {
                if let Some(start) = statement.declares() {
                    found.push(start..after);
                }
                statement = Statement::default();
            }
            Lexeme::CloseCurly => {
                if let Some(start) = statement.declares() {
                    found.push(start..statement.end);
                }
                statement = Statement::default();
            }
            lexeme => statement.push(&lexeme, property, before, after),
        }
    }

    if let Some(start) = statement.declares() {
        found.push(start..statement.end);
    }
    found
}

/// Tokens seen so far in the statement being scanned
#[derive(Default)]
struct Statement {
    start: Option<usize>,
    end: usize,
    tokens: usize,
    named: bool,
    is_declaration: bool,
}

impl Statement {
    fn push(&mut self, lexeme: &Lexeme, property: &str, before: usize, after: usize) {
        match self.tokens {
            0 => {
                self.start = Some(before);
                self.named =
                    matches!(lexeme, Lexeme::Ident(name) if name.eq_ignore_ascii_case(property));
            }
            1 => self.is_declaration = self.named && *lexeme == Lexeme::Colon,
            _ => {}
        }
        self.tokens += 1;
        self.end = after;
    }

    /// Start of the statement when it is a declaration of the property
    fn declares(&self) -> Option<usize> {
        self.start.filter(|_| self.is_declaration)
    }
}
