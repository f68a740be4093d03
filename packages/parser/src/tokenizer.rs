use logos::Logos;
use std::fmt;

/// Token types for TypeScript declaration sources
///
/// Keywords are lexed as identifiers: nearly every TypeScript keyword is
/// contextual (`type`, `readonly`, `keyof` are all valid property names), so
/// the parser decides what an identifier means from its position.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token<'src> {
    // Block comments are kept so the parser can attach JSDoc to declarations
    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", |lex| lex.slice())]
    Comment(&'src str),

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice())]
    Ident(&'src str),

    // String literals (quotes are kept, the parser unquotes)
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice())]
    #[regex(r"'([^'\\\n]|\\.)*'", |lex| lex.slice())]
    String(&'src str),

    #[regex(r"`([^`\\]|\\.)*`", |lex| lex.slice())]
    Template(&'src str),

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"0[xX][0-9a-fA-F_]+", |lex| lex.slice())]
    Number(&'src str),

    // Symbols
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("...")]
    Ellipsis,

    #[token("=>")]
    Arrow,

    #[token("=")]
    Equals,

    #[token("?")]
    Question,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("!")]
    Bang,

    #[token("@")]
    At,

    #[token("&")]
    Ampersand,

    #[token("|")]
    Pipe,
}

impl<'src> Token<'src> {
    /// Returns true when this token is the identifier `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Ident(s) if *s == keyword)
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Comment(_) => write!(f, "comment"),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::String(s) => write!(f, "string {}", s),
            Token::Template(s) => write!(f, "template {}", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::LAngle => write!(f, "'<'"),
            Token::RAngle => write!(f, "'>'"),
            Token::Colon => write!(f, "':'"),
            Token::Semicolon => write!(f, "';'"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
            Token::Ellipsis => write!(f, "'...'"),
            Token::Arrow => write!(f, "'=>'"),
            Token::Equals => write!(f, "'='"),
            Token::Question => write!(f, "'?'"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Bang => write!(f, "'!'"),
            Token::At => write!(f, "'@'"),
            Token::Ampersand => write!(f, "'&'"),
            Token::Pipe => write!(f, "'|'"),
        }
    }
}

/// Tokenize a source string
///
/// Characters the lexer does not recognise (decorator arguments, private
/// `#names`, regex literals in skipped statements) are dropped.
pub fn tokenize(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let lexer = Token::lexer(source);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_and_keywords() {
        let source = "export interface User $scope _private";
        let tokens = tokenize(source);

        assert_eq!(tokens[0].0, Token::Ident("export"));
        assert_eq!(tokens[1].0, Token::Ident("interface"));
        assert_eq!(tokens[2].0, Token::Ident("User"));
        assert_eq!(tokens[3].0, Token::Ident("$scope"));
        assert_eq!(tokens[4].0, Token::Ident("_private"));
        assert!(tokens[1].0.is_keyword("interface"));
    }

    #[test]
    fn test_strings() {
        let source = r#""double" 'single' "escaped \"quote\"" `tpl-${x}`"#;
        let tokens = tokenize(source);

        assert_eq!(tokens[0].0, Token::String("\"double\""));
        assert_eq!(tokens[1].0, Token::String("'single'"));
        assert!(matches!(tokens[2].0, Token::String(_)));
        assert!(matches!(tokens[3].0, Token::Template(_)));
    }

    #[test]
    fn test_numbers() {
        let source = "42 3.14 0xFF 1_000";
        let tokens = tokenize(source);

        assert_eq!(tokens[0].0, Token::Number("42"));
        assert_eq!(tokens[1].0, Token::Number("3.14"));
        assert_eq!(tokens[2].0, Token::Number("0xFF"));
        assert_eq!(tokens[3].0, Token::Number("1_000"));
    }

    #[test]
    fn test_punctuation() {
        let source = "(...args) => T[] | A & B?";
        let tokens: Vec<_> = tokenize(source).into_iter().map(|(t, _)| t).collect();

        assert_eq!(tokens[0], Token::LParen);
        assert_eq!(tokens[1], Token::Ellipsis);
        assert_eq!(tokens[3], Token::RParen);
        assert_eq!(tokens[4], Token::Arrow);
        assert!(tokens.contains(&Token::Pipe));
        assert!(tokens.contains(&Token::Ampersand));
        assert!(tokens.contains(&Token::Question));
    }

    #[test]
    fn test_comments() {
        let source = r#"
            // line comment is skipped
            /** Doc comment */
            /* block comment */
            interface A {}
        "#;

        let tokens = tokenize(source);

        assert_eq!(tokens[0].0, Token::Comment("/** Doc comment */"));
        assert_eq!(tokens[1].0, Token::Comment("/* block comment */"));
        assert_eq!(tokens[2].0, Token::Ident("interface"));
    }

    #[test]
    fn test_nested_generics_do_not_merge_angles() {
        let tokens = tokenize("Array<Array<string>>");
        let closing = tokens.iter().filter(|(t, _)| *t == Token::RAngle).count();
        assert_eq!(closing, 2);
    }
}
