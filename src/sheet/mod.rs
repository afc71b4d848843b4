//! Minimal lossless block tree for stylesheets
//!
//! A stylesheet is split into raw text runs and brace-delimited blocks. Blocks
//! nest, so rules inside `@media` are reachable, and everything the parser does
//! not understand is kept verbatim. Rendering an unmodified tree gives back the
//! exact input text.

pub mod declarations;
mod parser;

use cssparser::{Parser, ParserInput};
use parser::{next_lexeme, Lexeme};

pub use declarations::DeclarationEdit;

/// A piece of a stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Declarations, statements, whitespace and comments kept verbatim
    Text(String),
    /// A `prelude { body }` block
    Block(Block),
}

/// A brace-delimited block such as a style rule or an at-rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Whitespace and comments between the previous node and the prelude
    pub leading: String,
    /// Selector or at-rule header, including whitespace before `{`
    pub prelude: String,
    pub body: Vec<Node>,
    /// False when the input ended before the closing brace
    pub closed: bool,
}

impl Block {
    /// Create a closed block from a prelude and raw body text
    pub fn new(prelude: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            leading: String::new(),
            prelude: prelude.into(),
            body: parser::parse_nodes(&body),
            closed: true,
        }
    }

    /// Selector with comments removed and whitespace collapsed
    pub fn selector(&self) -> String {
        normalize_selector(&self.prelude)
    }

    /// Whether this block's selector equals `selector`, ignoring whitespace
    pub fn matches(&self, selector: &str) -> bool {
        self.selector() == normalize_selector(selector)
    }

    /// Replace prelude and body with `replacement`, keeping this block's leading text
    pub fn replace_with(&mut self, replacement: Block) {
        self.prelude = replacement.prelude;
        self.body = replacement.body;
        self.closed = replacement.closed;
    }

    /// Render the body alone
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for node in &self.body {
            node.render_into(&mut out);
        }
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push_str(&self.leading);
        out.push_str(&self.prelude);
        out.push('{');
        for node in &self.body {
            node.render_into(out);
        }
        if self.closed {
            out.push('}');
        }
    }
}

impl Node {
    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Block(block) => block.render_into(out),
        }
    }
}

/// A parsed stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn parse(css: &str) -> Self {
        Self {
            nodes: parser::parse_nodes(css),
        }
    }

    /// Top-level nodes
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.render_into(&mut out);
        }
        out
    }

    /// Block whose selector equals `selector`
    ///
    /// The first top-level rule wins. Only when there is none are nested
    /// blocks (`@media`, `@supports`, ...) searched, depth-first in document order.
    pub fn find_block(&self, selector: &str) -> Option<&Block> {
        let selector = normalize_selector(selector);
        let predicate = |block: &Block| block.selector() == selector;

        match top_level_index(&self.nodes, &predicate) {
            Some(index) => match &self.nodes[index] {
                Node::Block(block) => Some(block),
                Node::Text(_) => None,
            },
            None => find_in(&self.nodes, &predicate),
        }
    }

    /// Mutable access to the block [`find_block`](Self::find_block) returns
    pub fn find_block_mut(&mut self, selector: &str) -> Option<&mut Block> {
        let selector = normalize_selector(selector);
        let predicate = |block: &Block| block.selector() == selector;

        match top_level_index(&self.nodes, &predicate) {
            Some(index) => match &mut self.nodes[index] {
                Node::Block(block) => Some(block),
                Node::Text(_) => None,
            },
            None => find_in_mut(&mut self.nodes, &predicate),
        }
    }

    /// Remove every block, at any depth, for which `predicate` holds
    ///
    /// The leading whitespace and comments of a removed block are kept.
    /// Returns the number of removed blocks; blocks nested inside a removed
    /// block are not counted.
    pub fn remove_blocks_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Block) -> bool,
    {
        remove_in(&mut self.nodes, &predicate)
    }
}

fn top_level_index<F>(nodes: &[Node], predicate: &F) -> Option<usize>
where
    F: Fn(&Block) -> bool,
{
    nodes
        .iter()
        .position(|node| matches!(node, Node::Block(block) if predicate(block)))
}

fn find_in<'a, F>(nodes: &'a [Node], predicate: &F) -> Option<&'a Block>
where
    F: Fn(&Block) -> bool,
{
    for node in nodes {
        if let Node::Block(block) = node {
            if predicate(block) {
                return Some(block);
            }
            if let Some(found) = find_in(&block.body, predicate) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_mut<'a, F>(nodes: &'a mut [Node], predicate: &F) -> Option<&'a mut Block>
where
    F: Fn(&Block) -> bool,
{
    for node in nodes {
        if let Node::Block(block) = node {
            if predicate(&*block) {
                return Some(block);
            }
            if let Some(found) = find_in_mut(&mut block.body, predicate) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_in<F>(nodes: &mut Vec<Node>, predicate: &F) -> usize
where
    F: Fn(&Block) -> bool,
{
    let mut removed = 0;

    for node in std::mem::take(nodes) {
        match node {
            Node::Block(block) if predicate(&block) => {
                removed += 1;
                if !block.leading.is_empty() {
                    nodes.push(Node::Text(block.leading));
                }
            }
            Node::Block(mut block) => {
                removed += remove_in(&mut block.body, predicate);
                nodes.push(Node::Block(block));
            }
            text => nodes.push(text),
        }
    }

    removed
}

/// Strip comments and collapse whitespace in a selector
///
/// Strings and bracketed parts such as `[data-theme="dark"]` are kept as written.
pub fn normalize_selector(prelude: &str) -> String {
    let mut input = ParserInput::new(prelude);
    let mut parser = Parser::new(&mut input);
    let mut normalized = String::with_capacity(prelude.len());
    let mut space = false;

    loop {
        let start = parser.position();
        let Some(lexeme) = next_lexeme(&mut parser) else {
            break;
        };

        if lexeme == Lexeme::Trivia {
            space = !normalized.is_empty();
            continue;
        }
        if space {
            normalized.push(' ');
            space = false;
        }
        normalized.push_str(parser.slice_from(start));
    }

    normalized
}
