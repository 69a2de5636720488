//! Go declaration parser built on nom combinators.
//!
//! Only package-level `type` declarations are interpreted. Everything else
//! (imports, functions, vars, consts) is skipped by tracking delimiter depth.
//!
//! # Supported
//!
//! - `type Name struct { ... }`, `type Name struct{}` and one-line structs
//! - grouped `type ( ... )` blocks
//! - defined types and aliases (`type Status string`, `type A = B`)
//! - multi-name fields (`X, Y int`), embedded fields, struct tags
//! - field types spanning several lines (`func(` parameter lists, inline
//!   `interface {` blocks)
//!
//! # Rejected
//!
//! - generic type parameters
//! - anonymous struct types in field position

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, space0, space1},
    combinator::{map, opt, recognize, rest},
    error::{Error, ErrorKind},
    multi::separated_list1,
    sequence::{pair, preceded, tuple},
};

use crate::{
    ast::{GoField, GoFile, GoType, GoTypeBody, GoTypeDecl},
    error::GoSourceError,
    lex::{
        LiteralState, delimiter_balance, split_outside_literals, strip_block_comments,
        strip_line_comment,
    },
};

/// What a single type spec line turned into.
enum TypeSpec {
    Complete(GoTypeDecl),
    /// `Name struct {` – fields follow on the next lines.
    OpenStruct(String),
    /// Declaration whose body spans lines that carry nothing we need.
    SkipBody(GoTypeDecl, i32),
}

/// Field declaration collected across lines until its delimiters balance.
struct PendingField {
    text: String,
    depth: i32,
    line_no: usize,
}

impl PendingField {
    fn new(line_no: usize) -> Self {
        Self {
            text: String::new(),
            depth: 0,
            line_no,
        }
    }

    fn push(&mut self, line: &str, balance: i32) {
        if !line.is_empty() {
            if !self.text.is_empty() {
                self.text.push(' ');
            }
            self.text.push_str(line);
        }
        self.depth += balance;
    }
}

pub fn parse_go_file(source: &str) -> Result<GoFile, GoSourceError> {
    let source = strip_block_comments(source);
    let mut package: Option<String> = None;
    let mut types = Vec::new();
    let mut skip_depth = 0i32;
    let mut in_type_group = false;
    let mut current_struct: Option<(String, Vec<GoField>)> = None;
    let mut pending: Option<PendingField> = None;
    let mut literal = LiteralState::default();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let continues_literal = literal.is_open();
        let line = if continues_literal {
            raw.trim()
        } else {
            strip_line_comment(raw).trim()
        };

        if current_struct.is_some() {
            if pending.is_none() {
                if line.is_empty() {
                    continue;
                }
                if line == "}" {
                    if let Some((name, fields)) = current_struct.take() {
                        types.push(GoTypeDecl {
                            name,
                            body: GoTypeBody::Struct(fields),
                        });
                    }
                    continue;
                }
            }
            let field = pending.get_or_insert_with(|| PendingField::new(line_no));
            field.push(line, delimiter_balance(raw, &mut literal));
            if field.depth > 0 || literal.is_open() {
                continue;
            }
            if let Some(field) = pending.take() {
                let parsed = parse_field_line(&field.text).map_err(|e| {
                    GoSourceError(format!("parse error at line {}: {e}", field.line_no))
                })?;
                if let Some((_, fields)) = current_struct.as_mut() {
                    fields.extend(parsed);
                }
            }
            continue;
        }

        if continues_literal || skip_depth > 0 {
            skip_depth = (skip_depth + delimiter_balance(raw, &mut literal)).max(0);
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let spec = if in_type_group {
            if line == ")" {
                in_type_group = false;
                continue;
            }
            line
        } else if let Some(name) = parse_package_clause(line) {
            if package.is_some() {
                return Err(format!("duplicate package clause at line {line_no}").into());
            }
            package = Some(name.to_string());
            continue;
        } else if let Some(spec) = strip_keyword(line, "type") {
            if spec == "(" {
                in_type_group = true;
                continue;
            }
            spec
        } else {
            skip_depth = delimiter_balance(raw, &mut literal).max(0);
            continue;
        };

        match parse_type_spec(spec)
            .map_err(|e| GoSourceError(format!("parse error at line {line_no}: {e}")))?
        {
            TypeSpec::Complete(decl) => types.push(decl),
            TypeSpec::OpenStruct(name) => current_struct = Some((name, Vec::new())),
            TypeSpec::SkipBody(decl, depth) => {
                types.push(decl);
                skip_depth = depth;
            }
        }
    }

    if let Some((name, _)) = current_struct {
        return Err(format!("unclosed struct declaration `{name}`").into());
    }
    if in_type_group {
        return Err("unclosed type group".into());
    }
    let package = package.ok_or_else(|| GoSourceError::from("missing package clause"))?;
    Ok(GoFile { package, types })
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
        Some(rest.trim())
    } else {
        None
    }
}

fn parse_package_clause(line: &str) -> Option<&str> {
    package_clause(line)
        .ok()
        .filter(|(remaining, _)| remaining.trim().is_empty())
        .map(|(_, name)| name)
}

fn parse_type_spec(spec: &str) -> Result<TypeSpec, GoSourceError> {
    let (after_name, name) =
        identifier(spec).map_err(|e| format!("invalid type declaration `{spec}`: {e}"))?;
    if after_name.starts_with('[') {
        return Err(format!("generic type `{name}` is not supported").into());
    }
    let body = after_name.trim_start();
    let body = body.strip_prefix('=').map(str::trim_start).unwrap_or(body);
    let name = name.to_string();

    if let Some(after) = strip_struct_keyword(body) {
        let after = after
            .strip_prefix('{')
            .ok_or_else(|| format!("expected `{{` after `struct` in `{spec}`"))?
            .trim();
        if after.is_empty() {
            return Ok(TypeSpec::OpenStruct(name));
        }
        let inline = after
            .strip_suffix('}')
            .ok_or_else(|| format!("unterminated inline struct `{spec}`"))?;
        let mut fields = Vec::new();
        for part in split_outside_literals(inline, ';')
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            fields.extend(parse_field_line(part)?);
        }
        return Ok(TypeSpec::Complete(GoTypeDecl {
            name,
            body: GoTypeBody::Struct(fields),
        }));
    }

    let depth = delimiter_balance(body, &mut LiteralState::default());
    let ty = parse_type_text(body)?;
    let decl = GoTypeDecl {
        name,
        body: GoTypeBody::Defined(ty),
    };
    if depth > 0 {
        Ok(TypeSpec::SkipBody(decl, depth))
    } else {
        Ok(TypeSpec::Complete(decl))
    }
}

fn strip_struct_keyword(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("struct")?;
    if rest.starts_with(is_ident_continue) {
        return None;
    }
    Some(rest.trim_start())
}

/// Parse one field line (`Name, Other Type \`tag\``) into one or more fields.
fn parse_field_line(line: &str) -> Result<Vec<GoField>, GoSourceError> {
    let line = line.trim_end_matches(';').trim();
    let (decl, tag) = match line.find(['`', '"']) {
        Some(pos) => (line[..pos].trim(), Some(parse_tag(line[pos..].trim())?)),
        None => (line, None),
    };
    if mentions_struct_keyword(decl) {
        return Err(format!("anonymous struct field type is not supported: `{decl}`").into());
    }

    if let Ok((remaining, (names, _, ty))) = named_fields(decl) {
        if remaining.trim().is_empty() {
            return Ok(names
                .into_iter()
                .map(|name| GoField {
                    name: name.to_string(),
                    ty: ty.clone(),
                    tag: tag.clone(),
                })
                .collect());
        }
    }

    let ty = parse_type_text(decl)?;
    let name = embedded_name(&ty)
        .ok_or_else(|| format!("invalid embedded field `{decl}`"))?
        .to_string();
    Ok(vec![GoField {
        name,
        ty,
        tag,
    }])
}

fn mentions_struct_keyword(decl: &str) -> bool {
    decl.split(|c: char| !is_ident_continue(c))
        .any(|word| word == "struct")
}

fn embedded_name(ty: &GoType) -> Option<&str> {
    match ty {
        GoType::Named(name) | GoType::Qualified { name, .. } => Some(name),
        GoType::Pointer(inner) => match inner.as_ref() {
            GoType::Named(name) | GoType::Qualified { name, .. } => Some(name),
            _ => None,
        },
        _ => None,
    }
}

/// Strip the quotes of a raw (`` `...` ``) or interpreted (`"..."`) tag.
fn parse_tag(text: &str) -> Result<String, GoSourceError> {
    if let Some(inner) = text.strip_prefix('`').and_then(|t| t.strip_suffix('`')) {
        return Ok(inner.to_string());
    }
    if let Some(inner) = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        return unescape(inner);
    }
    Err(format!("malformed struct tag {text}").into())
}

fn unescape(text: &str) -> Result<String, GoSourceError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => return Err(format!("unsupported escape `\\{other}` in tag").into()),
            None => return Err("dangling escape in tag".into()),
        }
    }
    Ok(out)
}

fn parse_type_text(text: &str) -> Result<GoType, GoSourceError> {
    match go_type(text.trim()) {
        Ok((remaining, ty)) if remaining.trim().is_empty() => Ok(ty),
        Ok((remaining, _)) => {
            Err(format!("unexpected trailing characters in type: {remaining}").into())
        }
        Err(e) => Err(format!("failed to parse type `{text}`: {e}").into()),
    }
}

/// Parse `package name`.
fn package_clause(input: &str) -> IResult<&str, &str> {
    map(tuple((tag("package"), space1, identifier)), |(_, _, name)| {
        name
    })(input)
}

/// Parse a Go identifier (letters, digits, underscore; not starting with a digit).
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(is_ident_continue),
    ))(input)
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

/// Parse `A, B Type` (names, separator, type).
fn named_fields(input: &str) -> IResult<&str, (Vec<&str>, &str, GoType)> {
    tuple((
        separated_list1(tuple((space0, char(','), space0)), identifier),
        space1,
        go_type,
    ))(input)
}

/// Parse any type expression.
fn go_type(input: &str) -> IResult<&str, GoType> {
    alt((
        map(preceded(char('*'), go_type), |t| GoType::Pointer(Box::new(t))),
        map(preceded(tag("[]"), go_type), |t| GoType::Slice(Box::new(t))),
        array_type,
        opaque_type,
        named_type,
    ))(input)
}

/// Parse `[N]T`.
fn array_type(input: &str) -> IResult<&str, GoType> {
    map(
        tuple((char('['), take_while1(|c: char| c != ']'), char(']'), go_type)),
        |(_, len, _, elem): (char, &str, char, GoType)| GoType::Array {
            len: len.trim().to_string(),
            elem: Box::new(elem),
        },
    )(input)
}

/// Maps, channels, functions and interfaces swallow the rest of the input.
fn opaque_type(input: &str) -> IResult<&str, GoType> {
    map(
        recognize(pair(
            alt((
                tag("map["),
                recognize(pair(tag("<-chan"), keyword_boundary)),
                recognize(pair(tag("chan"), keyword_boundary)),
                recognize(pair(tag("func"), keyword_boundary)),
                recognize(pair(tag("interface"), keyword_boundary)),
            )),
            rest,
        )),
        |text: &str| GoType::Opaque(text.trim_end().to_string()),
    )(input)
}

/// Parse `Name` or `pkg.Name`.
fn named_type(input: &str) -> IResult<&str, GoType> {
    map(
        pair(identifier, opt(preceded(char('.'), identifier))),
        |(first, second)| match second {
            Some(name) => GoType::Qualified {
                package: first.to_string(),
                name: name.to_string(),
            },
            None => GoType::Named(first.to_string()),
        },
    )(input)
}
