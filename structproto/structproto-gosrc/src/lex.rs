//! Line-level lexical helpers: comment stripping and delimiter counting.

/// Replace `/* ... */` comments with spaces, keeping newlines so that line
/// numbers stay meaningful. String, rune and raw-string literals are left as is.
pub fn strip_block_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut in_comment = false;
    let mut in_line_comment = false;

    while let Some(ch) = chars.next() {
        if in_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                out.push_str("  ");
                in_comment = false;
            } else {
                out.push(if ch == '\n' { '\n' } else { ' ' });
            }
            continue;
        }
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
            }
            out.push(ch);
            continue;
        }
        if let Some(q) = quote {
            out.push(ch);
            if q != '`' && escaped {
                escaped = false;
            } else if q != '`' && ch == '\\' {
                escaped = true;
            } else if ch == q || (ch == '\n' && q != '`') {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                quote = Some(ch);
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str("  ");
                in_comment = true;
            }
            '/' if chars.peek() == Some(&'/') => {
                in_line_comment = true;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Cut a trailing `//` comment, ignoring `//` inside literals.
pub fn strip_line_comment(line: &str) -> &str {
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    let bytes = line.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if q != b'`' && escaped {
                escaped = false;
            } else if q != b'`' && b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' | b'`' => quote = Some(b),
            b'/' if bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
        i += 1;
    }
    line
}

/// Literal context carried from one line to the next.
///
/// Only raw strings can span lines; interpreted strings and runes are closed
/// at the end of every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiteralState {
    quote: Option<char>,
    escaped: bool,
}

impl LiteralState {
    /// True while a raw string opened on an earlier line is still unterminated.
    pub fn is_open(&self) -> bool {
        self.quote.is_some()
    }
}

/// Net count of `{`/`(` minus `}`/`)` outside literals and `//` comments.
///
/// `state` is updated so that a raw string left open by this line is still
/// honored on the next one.
pub fn delimiter_balance(line: &str, state: &mut LiteralState) -> i32 {
    let mut balance = 0i32;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(q) = state.quote {
            if q != '`' && state.escaped {
                state.escaped = false;
            } else if q != '`' && ch == '\\' {
                state.escaped = true;
            } else if ch == q {
                state.quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => state.quote = Some(ch),
            '/' if chars.peek() == Some(&'/') => break,
            '{' | '(' => balance += 1,
            '}' | ')' => balance -= 1,
            _ => {}
        }
    }
    if state.quote != Some('`') {
        *state = LiteralState::default();
    }
    balance
}

/// Split `text` on `sep`, ignoring separators inside literals.
pub fn split_outside_literals(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0usize;
    for (i, ch) in text.char_indices() {
        if let Some(q) = quote {
            if q != '`' && escaped {
                escaped = false;
            } else if q != '`' && ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            c if c == sep => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Go exports identifiers that start with an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
