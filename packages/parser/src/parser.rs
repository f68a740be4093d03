use crate::ast::*;
use crate::docs::extract_doc_comment;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};
use std::collections::HashMap;
use std::ops::Range;

/// Parser for TypeScript declaration sources
///
/// Interfaces, type aliases, enums, imports and re-exports are parsed into
/// the AST. Every other statement is skipped, so ordinary `.ts` modules can be
/// loaded for the declarations they contain.
pub struct Parser<'src> {
    source: &'src str,
    path: String,
    tokens: Vec<(Token<'src>, Range<usize>)>,
    /// JSDoc text keyed by the index of the token it precedes
    docs: HashMap<usize, String>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, path: impl Into<String>) -> Self {
        let mut tokens = Vec::new();
        let mut docs = HashMap::new();
        let mut pending_doc = None;

        for (token, span) in tokenize(source) {
            match token {
                Token::Comment(text) => {
                    if let Some(doc) = extract_doc_comment(text) {
                        pending_doc = Some(doc);
                    }
                }
                token => {
                    if let Some(doc) = pending_doc.take() {
                        docs.insert(tokens.len(), doc);
                    }
                    tokens.push((token, span));
                }
            }
        }

        Self {
            source,
            path: path.into(),
            tokens,
            docs,
            pos: 0,
        }
    }

    /// Parse a complete file
    pub fn parse_source_file(&mut self) -> ParseResult<SourceFile> {
        let mut file = SourceFile::new(self.path.clone());

        while !self.is_at_end() {
            self.parse_statement(&mut file)?;
        }

        Ok(file)
    }

    /// Parse a single type expression spanning the whole input
    pub fn parse_standalone_type(&mut self) -> ParseResult<TypeNode> {
        let ty = self.parse_type()?;
        if !self.is_at_end() {
            return Err(ParseError::unexpected_token(
                self.peek_span(),
                "end of type",
                Self::format_token(self.peek()),
            ));
        }
        Ok(ty)
    }

    fn parse_statement(&mut self, file: &mut SourceFile) -> ParseResult<()> {
        let doc = self.doc_here();
        let start = self.peek_span().start;

        match self.peek() {
            Some((Token::Semicolon, _)) => {
                self.advance();
            }
            Some((Token::Ident("import"), _))
                if !matches!(
                    self.peek_ahead(1),
                    Some((Token::LParen, _)) | Some((Token::Dot, _))
                ) =>
            {
                if let Some(import) = self.parse_import(start)? {
                    file.imports.push(import);
                }
            }
            Some((Token::Ident("export"), _)) => {
                self.parse_export(file, doc, start)?;
            }
            _ => {
                self.parse_declaration(file, doc, start, false, false)?;
            }
        }

        Ok(())
    }

    /// Parse an import statement; `None` for `import x = require(..)` forms
    fn parse_import(&mut self, start: usize) -> ParseResult<Option<ImportDecl>> {
        self.expect_keyword("import")?;

        // Side-effect import
        if let Some((Token::String(_), _)) = self.peek() {
            let specifier = self.expect_string()?;
            self.skip_import_attributes();
            self.match_token(Token::Semicolon);
            return Ok(Some(ImportDecl {
                specifier,
                type_only: false,
                default: None,
                namespace: None,
                names: Vec::new(),
                span: Span::new(start, self.current_end()),
            }));
        }

        let type_only = self.check_keyword("type")
            && match self.peek_ahead(1) {
                Some((Token::LBrace, _)) | Some((Token::Star, _)) => true,
                Some((Token::Ident(next), _)) => *next != "from",
                _ => false,
            };
        if type_only {
            self.advance();
        }

        let mut default = None;
        let mut namespace = None;
        let mut names = Vec::new();

        if let Some((Token::Ident(name), _)) = self.peek() {
            let name = name.to_string();
            self.advance();
            if self.check(Token::Equals) {
                // `import x = require("..")` and `import x = ns.y`
                self.skip_statement();
                return Ok(None);
            }
            default = Some(name);
            self.match_token(Token::Comma);
        }

        if self.match_token(Token::Star) {
            self.expect_keyword("as")?;
            namespace = Some(self.expect_ident()?);
        } else if self.check(Token::LBrace) {
            names = self.parse_specifier_list()?;
        }

        self.expect_keyword("from")?;
        let specifier = self.expect_string()?;
        self.skip_import_attributes();
        self.match_token(Token::Semicolon);

        Ok(Some(ImportDecl {
            specifier,
            type_only,
            default,
            namespace,
            names,
            span: Span::new(start, self.current_end()),
        }))
    }

    /// `{ A, type B, C as D }`
    fn parse_specifier_list(&mut self) -> ParseResult<Vec<ImportSpecifier>> {
        self.expect(Token::LBrace)?;
        let mut specifiers = Vec::new();

        while !self.check(Token::RBrace) && !self.is_at_end() {
            let type_only = self.check_keyword("type")
                && matches!(self.peek_ahead(1), Some((Token::Ident(next), _)) if *next != "as");
            if type_only {
                self.advance();
            }

            let imported = match self.peek() {
                Some((Token::String(_), _)) => self.expect_string()?,
                _ => self.expect_ident()?,
            };
            let local = if self.match_keyword("as") {
                self.expect_ident()?
            } else {
                imported.clone()
            };

            specifiers.push(ImportSpecifier {
                imported,
                local,
                type_only,
            });

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBrace)?;
        Ok(specifiers)
    }

    fn skip_import_attributes(&mut self) {
        if (self.check_keyword("with") || self.check_keyword("assert"))
            && matches!(self.peek_ahead(1), Some((Token::LBrace, _)))
        {
            self.advance();
            self.skip_balanced();
        }
    }

    fn parse_export(
        &mut self,
        file: &mut SourceFile,
        doc: Option<String>,
        start: usize,
    ) -> ParseResult<()> {
        self.expect_keyword("export")?;

        if self.match_keyword("default") {
            if self.check_keyword("interface") {
                let decl = self.parse_interface(doc, start, true, true)?;
                file.declarations.push(Declaration::Interface(decl));
            } else {
                self.skip_statement();
            }
            return Ok(());
        }

        if self.match_token(Token::Star) {
            let namespaced = if self.match_keyword("as") {
                self.expect_ident()?;
                true
            } else {
                false
            };
            self.expect_keyword("from")?;
            let specifier = self.expect_string()?;
            self.match_token(Token::Semicolon);

            if !namespaced {
                file.re_exports.push(ReExport {
                    specifier,
                    names: None,
                    span: Span::new(start, self.current_end()),
                });
            }
            return Ok(());
        }

        if self.check_keyword("type") && matches!(self.peek_ahead(1), Some((Token::LBrace, _))) {
            self.advance();
        }

        if self.check(Token::LBrace) {
            let names = self.parse_specifier_list()?;
            if self.match_keyword("from") {
                let specifier = self.expect_string()?;
                file.re_exports.push(ReExport {
                    specifier,
                    names: Some(names),
                    span: Span::new(start, self.current_end()),
                });
            }
            self.match_token(Token::Semicolon);
            return Ok(());
        }

        if self.check(Token::Equals) || self.check_keyword("import") {
            self.skip_statement();
            return Ok(());
        }

        self.parse_declaration(file, doc, start, true, false)
    }

    fn parse_declaration(
        &mut self,
        file: &mut SourceFile,
        doc: Option<String>,
        start: usize,
        exported: bool,
        default_export: bool,
    ) -> ParseResult<()> {
        while self.check_keyword("declare") && self.peek_ahead(1).is_some() {
            self.advance();
        }

        match self.peek() {
            Some((Token::Ident("interface"), _))
                if matches!(self.peek_ahead(1), Some((Token::Ident(_), _))) =>
            {
                let decl = self.parse_interface(doc, start, exported, default_export)?;
                file.declarations.push(Declaration::Interface(decl));
            }
            Some((Token::Ident("type"), _))
                if matches!(self.peek_ahead(1), Some((Token::Ident(_), _))) =>
            {
                let decl = self.parse_type_alias(doc, start, exported)?;
                file.declarations.push(Declaration::TypeAlias(decl));
            }
            Some((Token::Ident("enum"), _)) => {
                let decl = self.parse_enum(doc, start, exported, false)?;
                file.declarations.push(Declaration::Enum(decl));
            }
            Some((Token::Ident("const"), _))
                if matches!(self.peek_ahead(1), Some((Token::Ident("enum"), _))) =>
            {
                self.advance();
                let decl = self.parse_enum(doc, start, exported, true)?;
                file.declarations.push(Declaration::Enum(decl));
            }
            _ => self.skip_statement(),
        }

        Ok(())
    }

    fn parse_interface(
        &mut self,
        doc: Option<String>,
        start: usize,
        exported: bool,
        default_export: bool,
    ) -> ParseResult<InterfaceDecl> {
        self.expect_keyword("interface")?;
        let name = self.expect_ident()?;
        let type_params = self.parse_type_params()?;

        let mut extends = Vec::new();
        if self.match_keyword("extends") {
            loop {
                let ref_start = self.peek_span().start;
                extends.push(self.parse_type_reference(ref_start)?);
                if !self.match_token(Token::Comma) {
                    break;
                }
            }
        }

        let members = self.parse_members()?;

        Ok(InterfaceDecl {
            name,
            type_params,
            extends,
            members,
            documentation: doc,
            exported,
            default_export,
            span: Span::new(start, self.current_end()),
        })
    }

    fn parse_type_alias(
        &mut self,
        doc: Option<String>,
        start: usize,
        exported: bool,
    ) -> ParseResult<TypeAliasDecl> {
        self.expect_keyword("type")?;
        let name = self.expect_ident()?;
        let type_params = self.parse_type_params()?;
        self.expect(Token::Equals)?;
        let ty = self.parse_type()?;
        self.match_token(Token::Semicolon);

        Ok(TypeAliasDecl {
            name,
            type_params,
            ty,
            documentation: doc,
            exported,
            span: Span::new(start, self.current_end()),
        })
    }

    fn parse_enum(
        &mut self,
        doc: Option<String>,
        start: usize,
        exported: bool,
        is_const: bool,
    ) -> ParseResult<EnumDecl> {
        self.expect_keyword("enum")?;
        let name = self.expect_ident()?;
        self.expect(Token::LBrace)?;

        let mut members = Vec::new();
        while !self.check(Token::RBrace) && !self.is_at_end() {
            let member_doc = self.doc_here();
            let member_name = match self.peek() {
                Some((Token::String(_), _)) => self.expect_string()?,
                Some((Token::Number(raw), _)) => {
                    let raw = raw.to_string();
                    self.advance();
                    raw
                }
                _ => self.expect_ident()?,
            };

            let initializer = if self.match_token(Token::Equals) {
                self.parse_enum_initializer()?
            } else {
                None
            };

            members.push(EnumMember {
                name: member_name,
                initializer,
                documentation: member_doc,
            });

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBrace)?;

        Ok(EnumDecl {
            name,
            is_const,
            members,
            documentation: doc,
            exported,
            span: Span::new(start, self.current_end()),
        })
    }

    /// Literal initializers are kept; computed ones (`1 << 2`, `A | B`) are
    /// skipped and yield `None`
    fn parse_enum_initializer(&mut self) -> ParseResult<Option<Literal>> {
        let literal = match self.peek() {
            Some((Token::String(raw), _)) => {
                let value = unquote(raw);
                self.advance();
                Some(Literal::String(value))
            }
            Some((Token::Template(raw), _)) if !raw.contains("${") => {
                let value = unquote(raw);
                self.advance();
                Some(Literal::String(value))
            }
            Some((Token::Number(raw), span)) => {
                let value = parse_number(raw)
                    .ok_or_else(|| ParseError::invalid_syntax(span.clone(), "Invalid number"))?;
                self.advance();
                Some(Literal::Number(value))
            }
            Some((Token::Minus, _)) => match self.peek_ahead(1) {
                Some((Token::Number(raw), span)) => {
                    let value = parse_number(raw)
                        .ok_or_else(|| ParseError::invalid_syntax(span.clone(), "Invalid number"))?;
                    self.advance();
                    self.advance();
                    Some(Literal::Number(-value))
                }
                _ => None,
            },
            _ => None,
        };

        if literal.is_some() && (self.check(Token::Comma) || self.check(Token::RBrace)) {
            return Ok(literal);
        }

        // Computed initializer: skip to the end of the member
        let mut depth = 0usize;
        while let Some((token, _)) = self.peek() {
            match token {
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
                Token::RBrace if depth == 0 => break,
                Token::RBrace => depth -= 1,
                Token::Comma if depth == 0 => break,
                _ => {}
            }
            self.advance();
        }

        Ok(None)
    }

    fn parse_type_params(&mut self) -> ParseResult<Vec<TypeParam>> {
        let mut params = Vec::new();
        if !self.match_token(Token::LAngle) {
            return Ok(params);
        }

        while !self.check(Token::RAngle) && !self.is_at_end() {
            // Variance and const modifiers
            while matches!(
                self.peek(),
                Some((Token::Ident("in" | "out" | "const"), _))
            ) && matches!(self.peek_ahead(1), Some((Token::Ident(_), _)))
            {
                self.advance();
            }

            let name = self.expect_ident()?;
            let constraint = if self.match_keyword("extends") {
                Some(self.parse_type()?)
            } else {
                None
            };
            let default = if self.match_token(Token::Equals) {
                Some(self.parse_type()?)
            } else {
                None
            };

            params.push(TypeParam {
                name,
                constraint,
                default,
            });

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RAngle)?;
        Ok(params)
    }

    /// Parse a `{ ... }` member list
    fn parse_members(&mut self) -> ParseResult<Vec<TypeMember>> {
        self.expect(Token::LBrace)?;
        let mut members = Vec::new();

        while !self.check(Token::RBrace) && !self.is_at_end() {
            if let Some(member) = self.parse_member()? {
                members.push(member);
            }
            if !self.match_token(Token::Semicolon) {
                self.match_token(Token::Comma);
            }
        }

        self.expect(Token::RBrace)?;
        Ok(members)
    }

    fn parse_member(&mut self) -> ParseResult<Option<TypeMember>> {
        let doc = self.doc_here();
        let start = self.peek_span().start;

        // Call signature
        if self.check(Token::LParen) || self.check(Token::LAngle) {
            return Ok(Some(TypeMember::Call(self.parse_call_signature(false)?)));
        }

        // Construct signature
        if self.check_keyword("new")
            && matches!(
                self.peek_ahead(1),
                Some((Token::LParen, _)) | Some((Token::LAngle, _))
            )
        {
            self.advance();
            return Ok(Some(TypeMember::Call(self.parse_call_signature(true)?)));
        }

        let readonly = self.check_keyword("readonly") && self.next_is_property_name();
        if readonly {
            self.advance();
        }

        // Index signature
        if self.check(Token::LBracket)
            && matches!(self.peek_ahead(1), Some((Token::Ident(_), _)))
            && matches!(self.peek_ahead(2), Some((Token::Colon, _)))
        {
            self.advance();
            let key_name = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let key_type = self.parse_type()?;
            self.expect(Token::RBracket)?;
            self.expect(Token::Colon)?;
            let value_type = self.parse_type()?;

            return Ok(Some(TypeMember::Index(IndexSignature {
                key_name,
                key_type,
                value_type,
                readonly,
                documentation: doc,
            })));
        }

        // Accessors
        if (self.check_keyword("get") || self.check_keyword("set")) && self.next_is_property_name() {
            let is_getter = self.check_keyword("get");
            self.advance();
            let name = self.parse_property_name()?;
            let params = self.parse_params()?;
            let return_type = if self.match_token(Token::Colon) {
                Some(self.parse_return_type()?)
            } else {
                None
            };

            let ty = if is_getter {
                return_type
            } else {
                params.into_iter().next().and_then(|param| param.ty)
            };

            return Ok(Some(TypeMember::Property(PropertySignature {
                name,
                optional: false,
                readonly: is_getter,
                ty,
                documentation: doc,
                span: Span::new(start, self.current_end()),
            })));
        }

        let name = self.parse_property_name()?;
        let optional = self.match_token(Token::Question);

        // Method signature
        if self.check(Token::LParen) || self.check(Token::LAngle) {
            let signature = self.parse_call_signature(false)?;
            return Ok(Some(TypeMember::Method(MethodSignature {
                name,
                optional,
                params: signature.params,
                return_type: signature.return_type,
                documentation: doc,
                span: Span::new(start, self.current_end()),
            })));
        }

        let ty = if self.match_token(Token::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        Ok(Some(TypeMember::Property(PropertySignature {
            name,
            optional,
            readonly,
            ty,
            documentation: doc,
            span: Span::new(start, self.current_end()),
        })))
    }

    fn next_is_property_name(&self) -> bool {
        matches!(
            self.peek_ahead(1),
            Some((Token::Ident(_), _))
                | Some((Token::String(_), _))
                | Some((Token::Number(_), _))
                | Some((Token::LBracket, _))
        )
    }

    fn parse_property_name(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some((Token::Ident(name), _)) => {
                let name = name.to_string();
                self.advance();
                Ok(name)
            }
            Some((Token::String(_), _)) => self.expect_string(),
            Some((Token::Number(raw), span)) => {
                let value = parse_number(raw)
                    .ok_or_else(|| ParseError::invalid_syntax(span.clone(), "Invalid number"))?;
                self.advance();
                Ok(format_number(value))
            }
            Some((Token::LBracket, _)) => {
                // Computed name such as `[Symbol.iterator]`
                let start = self.peek_span().start;
                self.skip_balanced();
                Ok(self.slice(start, self.current_end()).to_string())
            }
            _ => Err(self.unexpected("property name")),
        }
    }

    /// `<T>(params): ReturnType`, after any `new` keyword
    fn parse_call_signature(&mut self, is_construct: bool) -> ParseResult<CallSignature> {
        self.parse_type_params()?;
        let params = self.parse_params()?;
        let return_type = if self.match_token(Token::Colon) {
            Some(self.parse_return_type()?)
        } else {
            None
        };

        Ok(CallSignature {
            params,
            return_type,
            is_construct,
        })
    }

    fn parse_params(&mut self) -> ParseResult<Vec<Parameter>> {
        self.expect(Token::LParen)?;
        let mut params = Vec::new();

        while !self.check(Token::RParen) && !self.is_at_end() {
            while matches!(
                self.peek(),
                Some((Token::Ident("public" | "private" | "protected" | "readonly" | "override"), _))
            ) && matches!(
                self.peek_ahead(1),
                Some((Token::Ident(_), _)) | Some((Token::LBrace, _)) | Some((Token::LBracket, _))
            ) {
                self.advance();
            }

            let rest = self.match_token(Token::Ellipsis);
            let name = match self.peek() {
                Some((Token::Ident(name), _)) => {
                    let name = name.to_string();
                    self.advance();
                    name
                }
                Some((Token::LBrace, _)) | Some((Token::LBracket, _)) => {
                    // Destructuring pattern
                    let start = self.peek_span().start;
                    self.skip_balanced();
                    self.slice(start, self.current_end()).to_string()
                }
                _ => return Err(self.unexpected("parameter name")),
            };
            let optional = self.match_token(Token::Question);
            let ty = if self.match_token(Token::Colon) {
                Some(self.parse_type()?)
            } else {
                None
            };

            if self.match_token(Token::Equals) {
                self.skip_until_list_end(Token::RParen);
            }

            params.push(Parameter {
                name,
                optional,
                rest,
                ty,
            });

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RParen)?;
        Ok(params)
    }

    /// Return type position, where type predicates are allowed
    fn parse_return_type(&mut self) -> ParseResult<TypeNode> {
        let start = self.peek_span().start;

        if self.check_keyword("asserts")
            && matches!(self.peek_ahead(1), Some((Token::Ident(_), _)))
        {
            self.advance();
            self.advance();
            if self.match_keyword("is") {
                self.parse_type()?;
            }
            return Ok(self.node(TypeKind::Keyword(Keyword::Void), start));
        }

        if matches!(self.peek(), Some((Token::Ident(_), _)))
            && matches!(self.peek_ahead(1), Some((Token::Ident("is"), _)))
        {
            self.advance();
            self.advance();
            self.parse_type()?;
            return Ok(self.node(TypeKind::Keyword(Keyword::Boolean), start));
        }

        self.parse_type()
    }

    /// Parse a full type expression
    pub fn parse_type(&mut self) -> ParseResult<TypeNode> {
        let start = self.peek_span().start;

        if self.check_keyword("abstract")
            && matches!(self.peek_ahead(1), Some((Token::Ident("new"), _)))
        {
            self.advance();
        }
        if self.check_keyword("new")
            && matches!(
                self.peek_ahead(1),
                Some((Token::LParen, _)) | Some((Token::LAngle, _))
            )
        {
            self.advance();
            return self.parse_function_type(start, true);
        }
        if self.is_function_type_start() {
            return self.parse_function_type(start, false);
        }

        let check = self.parse_union_type()?;

        if self.check_keyword("extends") {
            self.advance();
            let extends = self.parse_union_type()?;
            self.expect(Token::Question)?;
            let true_type = self.parse_type()?;
            self.expect(Token::Colon)?;
            let false_type = self.parse_type()?;

            return Ok(self.node(
                TypeKind::Conditional {
                    check: Box::new(check),
                    extends: Box::new(extends),
                    true_type: Box::new(true_type),
                    false_type: Box::new(false_type),
                },
                start,
            ));
        }

        Ok(check)
    }

    fn is_function_type_start(&self) -> bool {
        if self.check(Token::LAngle) {
            return true;
        }
        if !self.check(Token::LParen) {
            return false;
        }

        let mut depth = 0usize;
        let mut index = self.pos;
        while let Some((token, _)) = self.tokens.get(index) {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return matches!(self.tokens.get(index + 1), Some((Token::Arrow, _)));
                    }
                }
                _ => {}
            }
            index += 1;
        }

        false
    }

    fn parse_function_type(&mut self, start: usize, is_construct: bool) -> ParseResult<TypeNode> {
        self.parse_type_params()?;
        let params = self.parse_params()?;
        self.expect(Token::Arrow)?;
        let return_type = self.parse_return_type()?;

        Ok(self.node(
            TypeKind::Function {
                params,
                return_type: Box::new(return_type),
                is_construct,
            },
            start,
        ))
    }

    fn parse_union_type(&mut self) -> ParseResult<TypeNode> {
        self.match_token(Token::Pipe);
        let start = self.peek_span().start;

        let first = self.parse_intersection_type()?;
        if !self.check(Token::Pipe) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.match_token(Token::Pipe) {
            members.push(self.parse_intersection_type()?);
        }

        Ok(self.node(TypeKind::Union(members), start))
    }

    fn parse_intersection_type(&mut self) -> ParseResult<TypeNode> {
        self.match_token(Token::Ampersand);
        let start = self.peek_span().start;

        let first = self.parse_type_operator()?;
        if !self.check(Token::Ampersand) {
            return Ok(first);
        }

        let mut members = vec![first];
        while self.match_token(Token::Ampersand) {
            members.push(self.parse_type_operator()?);
        }

        Ok(self.node(TypeKind::Intersection(members), start))
    }

    fn parse_type_operator(&mut self) -> ParseResult<TypeNode> {
        let start = self.peek_span().start;

        let operator = match self.peek() {
            Some((Token::Ident("keyof"), _)) => Some(TypeOperator::KeyOf),
            Some((Token::Ident("readonly"), _)) => Some(TypeOperator::Readonly),
            Some((Token::Ident("unique"), _)) => Some(TypeOperator::Unique),
            _ => None,
        };

        if let Some(operator) = operator {
            if self.next_starts_type() {
                self.advance();
                let ty = self.parse_type_operator()?;
                return Ok(self.node(
                    TypeKind::Operator {
                        operator,
                        ty: Box::new(ty),
                    },
                    start,
                ));
            }
        }

        if self.check_keyword("infer") && matches!(self.peek_ahead(1), Some((Token::Ident(_), _))) {
            self.advance();
            let name = self.expect_ident()?;
            return Ok(self.node(TypeKind::Infer(name), start));
        }

        self.parse_postfix_type()
    }

    fn next_starts_type(&self) -> bool {
        matches!(
            self.peek_ahead(1),
            Some((Token::Ident(_), _))
                | Some((Token::LParen, _))
                | Some((Token::LBracket, _))
                | Some((Token::LBrace, _))
                | Some((Token::String(_), _))
                | Some((Token::Number(_), _))
                | Some((Token::Template(_), _))
        )
    }

    fn parse_postfix_type(&mut self) -> ParseResult<TypeNode> {
        let start = self.peek_span().start;
        let mut ty = self.parse_primary_type()?;

        // A `[` on a new line starts the next member, not an index
        while self.check(Token::LBracket) && !self.newline_before_current() {
            self.advance();
            if self.match_token(Token::RBracket) {
                ty = self.node(TypeKind::Array(Box::new(ty)), start);
            } else {
                let index = self.parse_type()?;
                self.expect(Token::RBracket)?;
                ty = self.node(
                    TypeKind::IndexedAccess {
                        object: Box::new(ty),
                        index: Box::new(index),
                    },
                    start,
                );
            }
        }

        Ok(ty)
    }

    fn parse_primary_type(&mut self) -> ParseResult<TypeNode> {
        let start = self.peek_span().start;

        let Some((token, span)) = self.peek() else {
            return Err(ParseError::unexpected_eof("type"));
        };
        let span = span.clone();

        match token.clone() {
            Token::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(Token::RParen)?;
                Ok(self.node(TypeKind::Parenthesized(Box::new(inner)), start))
            }
            Token::LBrace => {
                if self.is_mapped_type_start() {
                    self.parse_mapped_type(start)
                } else {
                    let members = self.parse_members()?;
                    Ok(self.node(TypeKind::TypeLiteral(members), start))
                }
            }
            Token::LBracket => self.parse_tuple_type(start),
            Token::String(raw) => {
                self.advance();
                Ok(self.node(TypeKind::Literal(Literal::String(unquote(raw))), start))
            }
            Token::Template(raw) => {
                self.advance();
                Ok(self.node(TypeKind::TemplateLiteral(raw.to_string()), start))
            }
            Token::Number(raw) => {
                let value = parse_number(raw)
                    .ok_or_else(|| ParseError::invalid_syntax(span.clone(), "Invalid number"))?;
                self.advance();
                Ok(self.node(TypeKind::Literal(Literal::Number(value)), start))
            }
            Token::Minus => match self.peek_ahead(1) {
                Some((Token::Number(raw), number_span)) => {
                    let value = parse_number(raw).ok_or_else(|| {
                        ParseError::invalid_syntax(number_span.clone(), "Invalid number")
                    })?;
                    self.advance();
                    self.advance();
                    Ok(self.node(TypeKind::Literal(Literal::Number(-value)), start))
                }
                _ => Err(self.unexpected("type")),
            },
            Token::Ident("typeof") => {
                self.advance();
                let entity = self.parse_qualified_name()?;
                if self.check(Token::LAngle) {
                    self.parse_type_args()?;
                }
                Ok(self.node(TypeKind::Query(entity), start))
            }
            Token::Ident("true") => {
                self.advance();
                Ok(self.node(TypeKind::Literal(Literal::Boolean(true)), start))
            }
            Token::Ident("false") => {
                self.advance();
                Ok(self.node(TypeKind::Literal(Literal::Boolean(false)), start))
            }
            Token::Ident(name) => {
                if let Some(keyword) = Keyword::from_name(name) {
                    if !matches!(self.peek_ahead(1), Some((Token::Dot, _))) {
                        self.advance();
                        return Ok(self.node(TypeKind::Keyword(keyword), start));
                    }
                }
                self.parse_type_reference(start)
            }
            _ => Err(self.unexpected("type")),
        }
    }

    /// `Name`, `ns.Name` or `Name<Args>`
    fn parse_type_reference(&mut self, start: usize) -> ParseResult<TypeNode> {
        let name = self.parse_qualified_name()?;
        let type_args = if self.check(Token::LAngle) {
            self.parse_type_args()?
        } else {
            Vec::new()
        };

        Ok(self.node(TypeKind::Reference { name, type_args }, start))
    }

    fn parse_qualified_name(&mut self) -> ParseResult<String> {
        let mut name = self.expect_ident()?;
        while self.check(Token::Dot) && matches!(self.peek_ahead(1), Some((Token::Ident(_), _))) {
            self.advance();
            name.push('.');
            name.push_str(&self.expect_ident()?);
        }
        Ok(name)
    }

    fn parse_type_args(&mut self) -> ParseResult<Vec<TypeNode>> {
        self.expect(Token::LAngle)?;
        let mut args = Vec::new();

        while !self.check(Token::RAngle) && !self.is_at_end() {
            args.push(self.parse_type()?);
            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RAngle)?;
        Ok(args)
    }

    fn parse_tuple_type(&mut self, start: usize) -> ParseResult<TypeNode> {
        self.expect(Token::LBracket)?;
        let mut elements = Vec::new();

        while !self.check(Token::RBracket) && !self.is_at_end() {
            let rest = self.match_token(Token::Ellipsis);

            let labelled = matches!(self.peek(), Some((Token::Ident(_), _)))
                && match self.peek_ahead(1) {
                    Some((Token::Colon, _)) => true,
                    Some((Token::Question, _)) => {
                        matches!(self.peek_ahead(2), Some((Token::Colon, _)))
                    }
                    _ => false,
                };

            let mut optional = false;
            let label = if labelled {
                let label = self.expect_ident()?;
                optional = self.match_token(Token::Question);
                self.expect(Token::Colon)?;
                Some(label)
            } else {
                None
            };

            let ty = self.parse_type()?;
            if label.is_none() && self.match_token(Token::Question) {
                optional = true;
            }

            elements.push(TupleElement {
                label,
                optional,
                rest,
                ty,
            });

            if !self.match_token(Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBracket)?;
        Ok(self.node(TypeKind::Tuple(elements), start))
    }

    fn is_mapped_type_start(&self) -> bool {
        let mut index = self.pos + 1;
        match self.tokens.get(index) {
            Some((Token::Ident("readonly"), _)) => index += 1,
            Some((Token::Plus, _)) | Some((Token::Minus, _)) => index += 2,
            _ => {}
        }

        matches!(self.tokens.get(index), Some((Token::LBracket, _)))
            && matches!(self.tokens.get(index + 1), Some((Token::Ident(_), _)))
            && matches!(self.tokens.get(index + 2), Some((Token::Ident("in"), _)))
    }

    fn parse_mapped_type(&mut self, start: usize) -> ParseResult<TypeNode> {
        self.expect(Token::LBrace)?;

        let readonly = if self.match_token(Token::Plus) {
            self.expect_keyword("readonly")?;
            true
        } else if self.match_token(Token::Minus) {
            self.expect_keyword("readonly")?;
            false
        } else {
            self.match_keyword("readonly")
        };

        self.expect(Token::LBracket)?;
        let param = self.expect_ident()?;
        self.expect_keyword("in")?;
        let constraint = self.parse_type()?;
        let name_type = if self.match_keyword("as") {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(Token::RBracket)?;

        let optional = if self.match_token(Token::Plus) {
            self.expect(Token::Question)?;
            Some(true)
        } else if self.match_token(Token::Minus) {
            self.expect(Token::Question)?;
            Some(false)
        } else if self.match_token(Token::Question) {
            Some(true)
        } else {
            None
        };

        let ty = if self.match_token(Token::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        if !self.match_token(Token::Semicolon) {
            self.match_token(Token::Comma);
        }
        self.expect(Token::RBrace)?;

        Ok(self.node(
            TypeKind::Mapped(Box::new(MappedType {
                param,
                constraint,
                name_type,
                readonly,
                optional,
                ty,
            })),
            start,
        ))
    }

    /// Skip a statement the declaration model has no use for
    fn skip_statement(&mut self) {
        let mut depth = 0usize;
        let mut first = true;

        while let Some((token, _)) = self.peek() {
            let token = token.clone();

            if !first && depth == 0 && self.starts_declaration_on_new_line() {
                return;
            }
            first = false;

            match token {
                Token::LBrace | Token::LParen | Token::LBracket => depth += 1,
                Token::RParen | Token::RBracket => depth = depth.saturating_sub(1),
                Token::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        if self.match_token(Token::Semicolon)
                            || self.is_at_end()
                            || self.newline_before_current()
                        {
                            return;
                        }
                        continue;
                    }
                }
                Token::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                _ => {}
            }

            self.advance();
        }
    }

    fn starts_declaration_on_new_line(&self) -> bool {
        self.newline_before_current()
            && matches!(
                self.peek(),
                Some((
                    Token::Ident("export" | "import" | "interface" | "type" | "enum" | "declare"),
                    _
                ))
            )
    }

    /// Skip a bracketed group starting at the current open token
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        while let Some((token, _)) = self.peek() {
            match token {
                Token::LBrace | Token::LParen | Token::LBracket => depth += 1,
                Token::RBrace | Token::RParen | Token::RBracket => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Skip a default-value expression inside a list
    fn skip_until_list_end(&mut self, close: Token) {
        let mut depth = 0usize;
        while let Some((token, _)) = self.peek() {
            if depth == 0
                && (matches!(token, Token::Comma)
                    || std::mem::discriminant(token) == std::mem::discriminant(&close))
            {
                return;
            }
            match token {
                Token::LBrace | Token::LParen | Token::LBracket => depth += 1,
                Token::RBrace | Token::RParen | Token::RBracket => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.advance();
        }
    }

    // Helper methods

    fn node(&self, kind: TypeKind, start: usize) -> TypeNode {
        let end = self.current_end().max(start);
        TypeNode::new(kind, self.slice(start, end), Span::new(start, end))
    }

    fn slice(&self, start: usize, end: usize) -> &'src str {
        self.source.get(start..end).unwrap_or("")
    }

    fn doc_here(&self) -> Option<String> {
        self.docs.get(&self.pos).cloned()
    }

    fn peek(&self) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn peek_ahead(&self, offset: usize) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos + offset)
    }

    fn advance(&mut self) -> Option<&(Token<'src>, Range<usize>)> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: Token) -> bool {
        if let Some((t, _)) = self.peek() {
            std::mem::discriminant(t) == std::mem::discriminant(&token)
        } else {
            false
        }
    }

    fn check_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some((t, _)) if t.is_keyword(keyword))
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> ParseResult<()> {
        if self.check(token.clone()) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(token.to_string()))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.match_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(format!("keyword '{}'", keyword)))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some((Token::Ident(s), _)) => {
                let val = s.to_string();
                self.advance();
                Ok(val)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn expect_string(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some((Token::String(s), _)) => {
                let val = unquote(s);
                self.advance();
                Ok(val)
            }
            _ => Err(self.unexpected("string literal")),
        }
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        if self.is_at_end() {
            ParseError::unexpected_eof(expected)
        } else {
            ParseError::unexpected_token(self.peek_span(), expected, Self::format_token(self.peek()))
        }
    }

    /// End offset of the last consumed token
    fn current_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map(|(_, span)| span.end)
            .unwrap_or(0)
    }

    /// Get the span of the next token (the one we're about to consume)
    fn peek_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or_else(|| {
                // If we're at EOF, use the end of the last token
                let end = self.tokens.last().map(|(_, span)| span.end).unwrap_or(0);
                end..end
            })
    }

    fn newline_before_current(&self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let start = self.current_end();
        let end = self.peek_span().start;
        self.slice(start, end).contains('\n')
    }

    fn format_token(token: Option<&(Token, Range<usize>)>) -> String {
        match token {
            None => "end of file".to_string(),
            Some((token, _)) => token.to_string(),
        }
    }
}

/// Strip quotes and resolve simple escapes
fn unquote(raw: &str) -> String {
    let inner = if raw.len() >= 2 {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => break,
        }
    }
    out
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('_', "");
    if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        return i64::from_str_radix(hex, 16).ok().map(|value| value as f64);
    }
    cleaned.parse().ok()
}

pub fn parse(source: &str) -> ParseResult<SourceFile> {
    parse_with_path(source, "<anonymous>")
}

pub fn parse_with_path(source: &str, path: &str) -> ParseResult<SourceFile> {
    let mut parser = Parser::new(source, path);
    parser.parse_source_file()
}

/// Parse a standalone type expression such as `Pick<User, "id">`
pub fn parse_type(source: &str) -> ParseResult<TypeNode> {
    let mut parser = Parser::new(source, "<type>");
    parser.parse_standalone_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface<'a>(file: &'a SourceFile, name: &str) -> &'a InterfaceDecl {
        match file.find_declaration(name) {
            Some(Declaration::Interface(decl)) => decl,
            other => panic!("expected interface {}, got {:?}", name, other),
        }
    }

    fn property<'a>(decl: &'a InterfaceDecl, name: &str) -> &'a PropertySignature {
        decl.members
            .iter()
            .find_map(|member| match member {
                TypeMember::Property(prop) if prop.name == name => Some(prop),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no property {}", name))
    }

    #[test]
    fn test_parse_simple_interface() {
        let source = r#"
            /** A user of the system */
            export interface User {
                /** Unique id */
                id: string;
                name?: string,
                readonly age: number
            }
        "#;

        let file = parse(source).unwrap();
        let user = interface(&file, "User");

        assert!(user.exported);
        assert_eq!(user.documentation.as_deref(), Some("A user of the system"));
        assert_eq!(user.members.len(), 3);

        let id = property(user, "id");
        assert_eq!(id.documentation.as_deref(), Some("Unique id"));
        assert_eq!(id.ty.as_ref().map(|t| t.text.as_str()), Some("string"));

        assert!(property(user, "name").optional);
        assert!(property(user, "age").readonly);
    }

    #[test]
    fn test_parse_type_params_and_heritage() {
        let source = r#"
            interface Box<T extends object = {}, U = string> extends Base<T>, ns.Other {
                value: T;
            }
        "#;

        let file = parse(source).unwrap();
        let decl = interface(&file, "Box");

        assert_eq!(decl.type_params.len(), 2);
        assert_eq!(
            decl.type_params[0].constraint.as_ref().map(|t| t.text.as_str()),
            Some("object")
        );
        assert_eq!(
            decl.type_params[1].default.as_ref().map(|t| t.text.as_str()),
            Some("string")
        );
        assert_eq!(decl.extends.len(), 2);
        assert_eq!(decl.extends[0].text, "Base<T>");
        assert_eq!(decl.extends[1].reference_name(), Some("ns.Other"));
    }

    #[test]
    fn test_parse_members_of_every_kind() {
        let source = r#"
            interface Everything {
                (x: number): string;
                new (x: number): Everything;
                [key: string]: unknown;
                method<T>(a: T, b?: string, ...rest: number[]): void;
                get size(): number;
                "quoted-name": boolean;
                42: string;
                onClick: (event: MouseEvent) => void;
            }
        "#;

        let file = parse(source).unwrap();
        let decl = interface(&file, "Everything");

        assert!(matches!(&decl.members[0], TypeMember::Call(c) if !c.is_construct));
        assert!(matches!(&decl.members[1], TypeMember::Call(c) if c.is_construct));
        assert!(matches!(&decl.members[2], TypeMember::Index(i) if i.key_type.text == "string"));
        match &decl.members[3] {
            TypeMember::Method(method) => {
                assert_eq!(method.name, "method");
                assert_eq!(method.params.len(), 3);
                assert!(method.params[1].optional);
                assert!(method.params[2].rest);
            }
            other => panic!("expected method, got {:?}", other),
        }
        assert!(property(decl, "size").readonly);
        assert!(property(decl, "quoted-name").ty.is_some());
        assert!(property(decl, "42").ty.is_some());
        assert!(matches!(
            property(decl, "onClick").ty.as_ref().map(|t| &t.kind),
            Some(TypeKind::Function { .. })
        ));
    }

    #[test]
    fn test_parse_type_alias_union_with_leading_pipe() {
        let source = r#"
            export type Status =
                | "active"
                | "inactive";
        "#;

        let file = parse(source).unwrap();
        match file.find_declaration("Status") {
            Some(Declaration::TypeAlias(alias)) => {
                assert_eq!(alias.ty.text, "\"active\"\n                | \"inactive\"");
                match &alias.ty.kind {
                    TypeKind::Union(members) => {
                        assert_eq!(members.len(), 2);
                        assert_eq!(
                            members[0].kind,
                            TypeKind::Literal(Literal::String("active".to_string()))
                        );
                    }
                    other => panic!("expected union, got {:?}", other),
                }
            }
            other => panic!("expected alias, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_enums() {
        let source = r#"
            export enum Color { Red = "RED", Green = "GREEN", Blue }
            const enum Flags { A = 1, B = -2, C = 1 << 2, D }
        "#;

        let file = parse(source).unwrap();

        match file.find_declaration("Color") {
            Some(Declaration::Enum(decl)) => {
                assert!(!decl.is_const);
                assert_eq!(decl.members.len(), 3);
                assert_eq!(
                    decl.members[0].initializer,
                    Some(Literal::String("RED".to_string()))
                );
                assert_eq!(decl.members[2].initializer, None);
            }
            other => panic!("expected enum, got {:?}", other),
        }

        match file.find_declaration("Flags") {
            Some(Declaration::Enum(decl)) => {
                assert!(decl.is_const);
                assert_eq!(decl.members[1].initializer, Some(Literal::Number(-2.0)));
                assert_eq!(decl.members[2].initializer, None);
                assert_eq!(decl.members[3].name, "D");
            }
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_imports_and_re_exports() {
        let source = r#"
            import type { User, Role as R } from "./user";
            import Default, { type Other } from './other';
            import * as models from "../models";
            import "./side-effect";
            export { Address } from "./address";
            export * from "./shared";
            export type { Meta } from "./meta";
        "#;

        let file = parse(source).unwrap();

        assert_eq!(file.imports.len(), 4);
        assert!(file.imports[0].type_only);
        assert_eq!(file.imports[0].names[1].imported, "Role");
        assert_eq!(file.imports[0].names[1].local, "R");
        assert_eq!(file.imports[1].default.as_deref(), Some("Default"));
        assert!(file.imports[1].names[0].type_only);
        assert_eq!(file.imports[2].namespace.as_deref(), Some("models"));
        assert_eq!(file.imports[3].specifier, "./side-effect");

        assert_eq!(file.re_exports.len(), 3);
        assert!(file.re_exports[1].names.is_none());
        assert_eq!(file.re_exports[2].specifier, "./meta");
        assert!(file.find_namespace_import("models").is_some());
        assert!(file.find_named_import("R").is_some());
    }

    #[test]
    fn test_skips_runtime_statements() {
        let source = r#"
            const DEFAULTS = { a: 1, b: [1, 2] }
            export function build(user: User): string {
                return user.name;
            }
            export class Builder {
                private value = 1;
            }
            export default interface Config { debug: boolean }
            interface After { ok: boolean }
        "#;

        let file = parse(source).unwrap();

        assert_eq!(file.declaration_names(), vec!["Config", "After"]);
        assert!(file.default_export().is_some());
    }

    #[test]
    fn test_parse_complex_types() {
        let cases = [
            ("string[][]", "Array"),
            ("readonly string[]", "Operator"),
            ("[name: string, age?: number, ...rest: boolean[]]", "Tuple"),
            ("{ [K in keyof T]?: T[K] }", "Mapped"),
            ("T extends string ? 'a' : 'b'", "Conditional"),
            ("User['address']", "IndexedAccess"),
            ("keyof User", "Operator"),
            ("typeof config", "Query"),
            ("new (x: number) => Foo", "Function"),
            ("<T>(value: T) => T", "Function"),
            ("(string | number)", "Parenthesized"),
            ("-1", "Literal"),
            ("`prefix-${string}`", "TemplateLiteral"),
            ("& A & B", "Intersection"),
        ];

        for (source, expected) in cases {
            let node = parse_type(source).unwrap_or_else(|e| panic!("{}: {}", source, e));
            let kind = format!("{:?}", node.kind);
            assert!(
                kind.starts_with(expected),
                "{} parsed as {}",
                source,
                kind
            );
        }
    }

    #[test]
    fn test_tuple_elements() {
        let node = parse_type("[x: number, y?: number, string?]").unwrap();
        match node.kind {
            TypeKind::Tuple(elements) => {
                assert_eq!(elements[0].label.as_deref(), Some("x"));
                assert!(elements[1].optional);
                assert!(elements[2].optional);
                assert!(elements[2].label.is_none());
            }
            other => panic!("expected tuple, got {:?}", other),
        }
    }

    #[test]
    fn test_index_signature_on_new_line_is_not_indexed_access() {
        let source = "interface A {\n  name: string\n  [key: string]: unknown\n}";
        let file = parse(source).unwrap();
        let decl = interface(&file, "A");
        assert_eq!(decl.members.len(), 2);
        assert!(matches!(decl.members[1], TypeMember::Index(_)));
    }

    #[test]
    fn test_type_predicates_in_methods() {
        let source = "interface Guard { isUser(x: unknown): x is User; check(v: unknown): asserts v }";
        let file = parse(source).unwrap();
        assert_eq!(interface(&file, "Guard").members.len(), 2);
    }

    #[test]
    fn test_error_on_missing_brace() {
        let result = parse("interface A { name: string");
        assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_error_reports_span() {
        let result = parse("interface A { name: }");
        match result {
            Err(ParseError::UnexpectedToken { span, expected, .. }) => {
                assert_eq!(expected, "type");
                assert_eq!(span, 20..21);
            }
            other => panic!("expected unexpected token, got {:?}", other),
        }
    }
}
