use super::{Block, Node};
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Token classes the block tree and declaration lookups care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lexeme {
    /// Whitespace or a comment
    Trivia,
    Semicolon,
    Colon,
    OpenCurly,
    /// A `}` outside of any block
    CloseCurly,
    Ident(String),
    /// Anything else, including whole `(...)`, `[...]` and function groups
    Other,
}

/// Read the next token. Parenthesized, bracketed and function groups are
/// consumed entirely, so the position afterwards is past their closing bracket.
/// Curly blocks are left for the caller to enter.
pub(crate) fn next_lexeme(input: &mut Parser<'_, '_>) -> Option<Lexeme> {
    let (lexeme, group) = match input.next_including_whitespace_and_comments() {
        Err(_) => return None,
        Ok(Token::WhiteSpace(_) | Token::Comment(_)) => (Lexeme::Trivia, false),
        Ok(Token::Semicolon) => (Lexeme::Semicolon, false),
        Ok(Token::Colon) => (Lexeme::Colon, false),
        Ok(Token::CurlyBracketBlock) => (Lexeme::OpenCurly, false),
        Ok(Token::CloseCurlyBracket) => (Lexeme::CloseCurly, false),
        Ok(Token::Ident(name)) => (Lexeme::Ident(name.to_string()), false),
        Ok(Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock) => {
            (Lexeme::Other, true)
        }
        Ok(_) => (Lexeme::Other, false),
    };

    if group {
        skip_nested_block(input);
    }
    Some(lexeme)
}

/// Consume the rest of the block just opened, closing bracket included
pub(crate) fn skip_nested_block<'i>(input: &mut Parser<'i, '_>) {
    let _ = input.parse_nested_block(|nested| {
        while nested.next_including_whitespace_and_comments().is_ok() {}
        Ok::<(), ParseError<'i, ()>>(())
    });
}

/// Parse stylesheet text into a flat list of top-level nodes
///
/// Tokenizing is done by `cssparser`, so comments, strings, `url(...)` and
/// bracket groups never end a statement or a block early. Nodes are built from
/// source slices, so rendering the result gives back the input.
///
/// Malformed input never fails:
/// - A `}` with no open block at top level stays in the surrounding text
/// - A block still open at end of input is returned with `closed: false`
pub(crate) fn parse_nodes(src: &str) -> Vec<Node> {
    let mut input = ParserInput::new(src);
    let mut parser = Parser::new(&mut input);
    let (nodes, _) = parse_level(&mut parser, src);
    nodes
}

/// Parse nodes until the end of the current block or of the input. Returns the
/// nodes and the byte offset where the level ended.
fn parse_level<'i>(input: &mut Parser<'i, '_>, src: &str) -> (Vec<Node>, usize) {
    let mut nodes = Vec::new();
    // Start of text not yet stored in a node
    let mut start = input.position().byte_index();
    // Start of the current statement, i.e. where a block header would begin
    let mut statement = start;

    while let Some(lexeme) = next_lexeme(input) {
        let after = input.position().byte_index();

        match lexeme {
            Lexeme::Semicolon | Lexeme::CloseCurly => statement = after,
            Lexeme::OpenCurly => {
                let open = after - 1;
                push_text(&mut nodes, &src[start..statement]);
                let (leading, prelude) = split_leading(&src[statement..open]);

                let parsed = input.parse_nested_block(|nested| {
                    Ok::<_, ParseError<'i, ()>>(parse_level(nested, src))
                });
                let end = input.position().byte_index();

                let (body, closed) = match parsed {
                    Ok((body, body_end)) => (body, end > body_end),
                    Err(_) => {
                        let mut body = Vec::new();
                        push_text(&mut body, &src[after..end]);
                        (body, false)
                    }
                };

                nodes.push(Node::Block(Block {
                    leading: leading.to_string(),
                    prelude: prelude.to_string(),
                    body,
                    closed,
                }));

                start = end;
                statement = end;
            }
            _ => {}
        }
    }

    let end = input.position().byte_index();
    push_text(&mut nodes, &src[start..end]);
    (nodes, end)
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Split a block header into leading trivia (whitespace, comments) and the
/// selector or at-rule prelude itself
pub(crate) fn split_leading(raw: &str) -> (&str, &str) {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let mut end = 0;

    while let Some(Lexeme::Trivia) = next_lexeme(&mut parser) {
        end = parser.position().byte_index();
    }
    raw.split_at(end)
}
