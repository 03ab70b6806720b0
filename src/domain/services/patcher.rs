//! Idempotent config patch operations
//!
//! Each operation is a localized edit of file text. Applying an operation whose
//! effect is already present returns `AlreadyApplied` and leaves the content
//! alone, so patching the same file twice is the same as patching it once.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// A single targeted edit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum PatchOp {
    /// Add an import statement after the last existing import
    EnsureImport { statement: String },
    /// Add an element to a `property: [ ... ]` array literal
    InsertArrayEntry { property: String, entry: String },
    /// Set a nested key in a JSON document, keeping key order
    JsonSetIfAbsent { path: Vec<String>, value: Value },
    AppendLineIfAbsent { line: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied(String),
    AlreadyApplied,
    /// The structure the edit hangs off of is not in the file
    AnchorMissing,
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("cannot set {path}: {segment} is not an object")]
    NotAnObject { path: String, segment: String },

    #[error("invalid property name for pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl PatchOp {
    pub fn ensure_import(statement: impl Into<String>) -> Self {
        PatchOp::EnsureImport {
            statement: statement.into(),
        }
    }

    pub fn insert_array_entry(property: impl Into<String>, entry: impl Into<String>) -> Self {
        PatchOp::InsertArrayEntry {
            property: property.into(),
            entry: entry.into(),
        }
    }

    pub fn json_set_if_absent(path: &[&str], value: Value) -> Self {
        PatchOp::JsonSetIfAbsent {
            path: path.iter().map(|s| s.to_string()).collect(),
            value,
        }
    }

    pub fn append_line_if_absent(line: impl Into<String>) -> Self {
        PatchOp::AppendLineIfAbsent { line: line.into() }
    }

    pub fn apply(&self, content: &str) -> Result<PatchOutcome, PatchError> {
        match self {
            PatchOp::EnsureImport { statement } => Ok(ensure_import(content, statement)),
            PatchOp::InsertArrayEntry { property, entry } => {
                insert_array_entry(content, property, entry)
            }
            PatchOp::JsonSetIfAbsent { path, value } => json_set_if_absent(content, path, value),
            PatchOp::AppendLineIfAbsent { line } => Ok(append_line_if_absent(content, line)),
        }
    }

    /// Content after applying, unchanged when the op was a no-op
    pub fn patched(&self, content: &str) -> Result<String, PatchError> {
        Ok(match self.apply(content)? {
            PatchOutcome::Applied(next) => next,
            PatchOutcome::AlreadyApplied | PatchOutcome::AnchorMissing => content.to_string(),
        })
    }

    /// Short human label for logs and summaries
    pub fn describe(&self) -> String {
        match self {
            PatchOp::EnsureImport { statement } => format!("import `{}`", statement.trim()),
            PatchOp::InsertArrayEntry { property, entry } => format!("{property} += {entry}"),
            PatchOp::JsonSetIfAbsent { path, .. } => format!("set {}", path.join(".")),
            PatchOp::AppendLineIfAbsent { line } => format!("append `{line}`"),
        }
    }
}

fn import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?ms)^import\b.*?["'][^"'\n]*["'][ \t]*;?[ \t]*$"#).expect("valid regex")
    })
}

fn ensure_import(content: &str, statement: &str) -> PatchOutcome {
    let statement = statement.trim();
    if content.lines().any(|l| l.trim() == statement) {
        return PatchOutcome::AlreadyApplied;
    }
    match import_re().find_iter(content).last() {
        Some(last) => {
            let mut out = String::with_capacity(content.len() + statement.len() + 1);
            out.push_str(&content[..last.end()]);
            out.push('\n');
            out.push_str(statement);
            out.push_str(&content[last.end()..]);
            PatchOutcome::Applied(out)
        }
        None => PatchOutcome::Applied(format!("{statement}\n{content}")),
    }
}

/// Bytes of JS/TS source outside comments. String literals are skipped
/// unless `keep_strings` is set.
struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
    keep_strings: bool,
    literal_end: usize,
}

impl<'a> CodeBytes<'a> {
    fn new(src: &'a str, start: usize) -> Self {
        Self {
            bytes: src.as_bytes(),
            pos: start,
            keep_strings: false,
            literal_end: 0,
        }
    }

    fn with_strings(src: &'a str, start: usize) -> Self {
        Self {
            keep_strings: true,
            ..Self::new(src, start)
        }
    }
}

/// Index just past the string literal opened at `start`
fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn find_from(bytes: &[u8], start: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(start..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + start)
}

/// First index at or after `i` that is neither whitespace nor a comment
fn skip_trivia(bytes: &[u8], mut i: usize) -> usize {
    loop {
        match (bytes.get(i), bytes.get(i + 1)) {
            (Some(b), _) if b.is_ascii_whitespace() => i += 1,
            (Some(b'/'), Some(b'/')) => i = find_from(bytes, i, b"\n").unwrap_or(bytes.len()),
            (Some(b'/'), Some(b'*')) => {
                i = find_from(bytes, i + 2, b"*/").map_or(bytes.len(), |p| p + 2)
            }
            _ => return i,
        }
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.bytes.len() {
            let i = self.pos;
            let b = self.bytes[i];
            if i < self.literal_end {
                self.pos = i + 1;
                return Some((i, b));
            }
            let next = self.bytes.get(i + 1).copied();
            match (b, next) {
                (b'"' | b'\'' | b'`', _) => {
                    let end = string_end(self.bytes, i, b);
                    if self.keep_strings {
                        self.literal_end = end;
                    } else {
                        self.pos = end;
                    }
                }
                (b'/', Some(b'/')) => {
                    self.pos = find_from(self.bytes, i, b"\n").unwrap_or(self.bytes.len());
                }
                (b'/', Some(b'*')) => {
                    self.pos = find_from(self.bytes, i + 2, b"*/")
                        .map(|p| p + 2)
                        .unwrap_or(self.bytes.len());
                }
                _ => {
                    self.pos = i + 1;
                    return Some((i, b));
                }
            }
        }
        None
    }
}

/// Index of the bracket closing the one at `open`
fn matching_bracket(src: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in CodeBytes::new(src, open) {
        match b {
            b'[' | b'(' | b'{' => depth += 1,
            b']' | b')' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Top-level comma separated elements of an array body
fn top_level_entries(body: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, b) in CodeBytes::new(body, 0) {
        match b {
            b'[' | b'(' | b'{' => depth += 1,
            b']' | b')' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                entries.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&body[start..]);
    entries.retain(|e| !e.trim().is_empty());
    entries
}

/// Entry text without comments or whitespace, for presence checks
fn normalized(code: &str) -> String {
    let bytes: Vec<u8> = CodeBytes::with_strings(code, 0)
        .map(|(_, b)| b)
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn insert_array_entry(
    content: &str,
    property: &str,
    entry: &str,
) -> Result<PatchOutcome, PatchError> {
    let pattern = format!(
        r#"(?:^|[^\w$])["']?{}["']?\s*:\s*\["#,
        regex::escape(property)
    );
    let re = Regex::new(&pattern)?;
    let Some(found) = re.find(content) else {
        return Ok(PatchOutcome::AnchorMissing);
    };
    let open = found.end() - 1;
    let Some(close) = matching_bracket(content, open) else {
        return Ok(PatchOutcome::AnchorMissing);
    };

    let body = &content[open + 1..close];
    let wanted = normalized(entry);
    if top_level_entries(body).iter().any(|e| normalized(e) == wanted) {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    let entry = entry.trim();
    if body.trim().is_empty() {
        let mut out = content[..open + 1].to_string();
        out.push_str(entry);
        out.push_str(&content[close..]);
        return Ok(PatchOutcome::Applied(out));
    }

    let trimmed = body.trim_end();
    let insertion = if body.contains('\n') {
        let indent = trimmed
            .rsplit('\n')
            .next()
            .map(|line| &line[..line.len() - line.trim_start().len()])
            .unwrap_or("");
        if trimmed.ends_with(',') {
            format!("\n{indent}{entry},")
        } else {
            format!(",\n{indent}{entry}")
        }
    } else if trimmed.ends_with(',') {
        format!(" {entry}")
    } else {
        format!(", {entry}")
    };

    let at = open + 1 + trimmed.len();
    let mut out = String::with_capacity(content.len() + insertion.len());
    out.push_str(&content[..at]);
    out.push_str(&insertion);
    out.push_str(&content[at..]);
    Ok(PatchOutcome::Applied(out))
}

/// JSON-with-comments reduced to plain JSON: comments and trailing commas go
fn jsonc_view(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i, b'"');
                out.extend_from_slice(&bytes[i..end]);
                i = end;
            }
            b'/' if matches!(bytes.get(i + 1), Some(b'/' | b'*')) => {
                i = skip_trivia(bytes, i);
                out.push(b' ');
            }
            b',' => {
                let next = skip_trivia(bytes, i + 1);
                if !matches!(bytes.get(next), Some(b'}' | b']')) {
                    out.push(b',');
                }
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Index just past the JSON value starting at `start`
fn value_end(src: &str, start: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    match bytes.get(start)? {
        b'{' | b'[' => matching_bracket(src, start).map(|close| close + 1),
        b'"' => Some(string_end(bytes, start, b'"')),
        _ => {
            let stop = |b: &u8| matches!(b, b',' | b'}' | b']' | b'/') || b.is_ascii_whitespace();
            Some(
                bytes[start..]
                    .iter()
                    .position(stop)
                    .map_or(bytes.len(), |p| start + p),
            )
        }
    }
}

/// Where the value of member `key` starts, within the object opened at `open`
fn member_value(src: &str, open: usize, key: &str) -> Option<usize> {
    let bytes = src.as_bytes();
    let close = matching_bracket(src, open)?;
    let mut i = skip_trivia(bytes, open + 1);
    while i < close {
        if bytes[i] != b'"' {
            return None;
        }
        let name_end = string_end(bytes, i, b'"');
        let name: String = serde_json::from_str(&src[i..name_end]).ok()?;
        let colon = skip_trivia(bytes, name_end);
        if bytes.get(colon) != Some(&b':') {
            return None;
        }
        let value = skip_trivia(bytes, colon + 1);
        if name == key {
            return Some(value);
        }
        let next = skip_trivia(bytes, value_end(src, value)?);
        i = match bytes.get(next) {
            Some(b',') => skip_trivia(bytes, next + 1),
            _ => next,
        };
    }
    None
}

/// Leading whitespace of the line holding `pos`, if only whitespace precedes it
fn indent_before(src: &str, pos: usize) -> Option<&str> {
    let line_start = src[..pos].rfind('\n').map_or(0, |p| p + 1);
    let indent = &src[line_start..pos];
    indent.trim().is_empty().then_some(indent)
}

/// Insert `"key": value` as the last member of the object opened at `open`,
/// following the formatting already used there. Nothing else is touched.
fn insert_member(
    src: &str,
    open: usize,
    key: &str,
    value: &Value,
) -> Result<Option<String>, PatchError> {
    let bytes = src.as_bytes();
    let Some(close) = matching_bracket(src, open) else {
        return Ok(None);
    };
    let last_code = CodeBytes::with_strings(src, open + 1)
        .take_while(|&(i, _)| i < close)
        .filter(|(_, b)| !b.is_ascii_whitespace())
        .last()
        .map(|(i, _)| i);
    let key = serde_json::to_string(key)?;
    let close_indent = indent_before(src, close).filter(|_| src[open..close].contains('\n'));

    let mut out = String::with_capacity(src.len() + key.len() + 32);
    match close_indent {
        Some(close_indent) => {
            let first = skip_trivia(bytes, open + 1);
            let indent = match indent_before(src, first) {
                Some(indent) if first < close => indent.to_string(),
                _ => format!("{close_indent}  "),
            };
            let value =
                serde_json::to_string_pretty(value)?.replace('\n', &format!("\n{indent}"));
            let trailing_comma = last_code.is_some_and(|i| bytes[i] == b',');
            let line_start = close - close_indent.len();
            match last_code {
                Some(i) if !trailing_comma => {
                    out.push_str(&src[..=i]);
                    out.push(',');
                    out.push_str(&src[i + 1..line_start]);
                }
                _ => out.push_str(&src[..line_start]),
            }
            out.push_str(&format!("{indent}{key}: {value}"));
            if trailing_comma {
                out.push(',');
            }
            out.push('\n');
            out.push_str(&src[line_start..]);
        }
        None => {
            let value = serde_json::to_string(value)?;
            let (at, member) = match last_code {
                Some(i) if bytes[i] == b',' => (i + 1, format!(" {key}: {value}")),
                Some(i) => (i + 1, format!(", {key}: {value}")),
                None => (open + 1, format!("{key}: {value}")),
            };
            out.push_str(&src[..at]);
            out.push_str(&member);
            out.push_str(&src[at..]);
        }
    }
    Ok(Some(out))
}

fn json_set_if_absent(
    content: &str,
    path: &[String],
    value: &Value,
) -> Result<PatchOutcome, PatchError> {
    if path.is_empty() {
        return Ok(PatchOutcome::AnchorMissing);
    }
    let doc: Value = serde_json::from_str(&jsonc_view(content))?;
    let not_an_object = |segment: &String| PatchError::NotAnObject {
        path: path.join("."),
        segment: segment.clone(),
    };

    // Walk down the existing objects, tracking where each one opens in the text
    let mut cursor = &doc;
    let mut open = skip_trivia(content.as_bytes(), 0);
    let mut depth = 0;
    while depth < path.len() {
        let segment = &path[depth];
        let object = cursor.as_object().ok_or_else(|| not_an_object(segment))?;
        let Some(child) = object.get(segment) else {
            break;
        };
        if depth + 1 == path.len() {
            return Ok(PatchOutcome::AlreadyApplied);
        }
        let Some(at) = member_value(content, open, segment) else {
            return Ok(PatchOutcome::AnchorMissing);
        };
        cursor = child;
        open = at;
        depth += 1;
    }

    // Missing parents become nested objects around the value
    let member = path[depth + 1..]
        .iter()
        .rev()
        .fold(value.clone(), |inner, segment| {
            let mut object = serde_json::Map::new();
            object.insert(segment.clone(), inner);
            Value::Object(object)
        });
    Ok(match insert_member(content, open, &path[depth], &member)? {
        Some(out) => PatchOutcome::Applied(out),
        None => PatchOutcome::AnchorMissing,
    })
}

fn append_line_if_absent(content: &str, line: &str) -> PatchOutcome {
    if content.lines().any(|l| l.trim_end() == line) {
        return PatchOutcome::AlreadyApplied;
    }
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(line);
    out.push('\n');
    PatchOutcome::Applied(out)
}
