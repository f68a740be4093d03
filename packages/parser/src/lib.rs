pub mod ast;
pub mod docs;
pub mod error;
pub mod parser;
pub mod printer;
pub mod tokenizer;

pub use ast::*;
pub use error::{format_parse_error, ParseError, ParseResult};
pub use parser::{parse, parse_type, parse_with_path, Parser};
pub use printer::render_kind;
pub use tokenizer::{tokenize, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_basic() {
        let source = "interface Button";
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 2);
    }
}
