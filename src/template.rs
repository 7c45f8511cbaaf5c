//! Argument substitution for command templates
//!
//! A `run` string may reference the invocation arguments through `{...}`
//! placeholders: single indices (`{0}`, `{-1}`), ranges (`{1..3}`, `{2..}`,
//! `{..-2}`, `{..}`), and the argument count (`{#}`). Substituted values are
//! JSON-quoted so that simple arguments survive the trip through the runner
//! shell. Anything that does not parse as a placeholder is passed through
//! untouched; unresolvable references degrade to empty output instead of
//! failing, so a template never aborts a run.

/// Source of positional arguments for one substitution pass.
///
/// Indices may be negative, counting from the end (`-1` is the last
/// argument). Implementations must return `None` for anything out of range.
pub trait ArgumentSource {
    /// Resolve a possibly-negative index to an argument value.
    fn resolve(&self, index: i64) -> Option<&str>;

    /// Total number of arguments, used by the `{#}` placeholder.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str>> ArgumentSource for [T] {
    fn resolve(&self, index: i64) -> Option<&str> {
        let len = i64::try_from(self.len()).ok()?;
        let raw = if index < 0 {
            len.checked_add(index)?
        } else {
            index
        };
        let position = usize::try_from(raw).ok()?;
        self.get(position).map(AsRef::as_ref)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

/// One recognized `{...}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    /// `{N}`
    Index(i64),
    /// `{A..B}`, both bounds inclusive
    Closed(i64, i64),
    /// `{A..}`
    RightOpen(i64),
    /// `{..B}`
    LeftOpen(i64),
    /// `{..}`
    Open,
    /// `{#}`
    Count,
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// Substitute all placeholders in `template` against `args`.
///
/// This is a single pass: substituted values are never rescanned, so output
/// containing brace characters cannot trigger further substitution.
#[must_use]
pub fn substitute<S: ArgumentSource + ?Sized>(template: &str, args: &S) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in lex(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(placeholder) => render(placeholder, args, &mut out),
        }
    }
    out
}

/// Split a template into literal text and placeholder tokens.
///
/// A `{` that does not open a recognized placeholder is emitted as literal
/// text and scanning resumes right after it, matching left-to-right
/// find-and-replace over the original string.
fn lex(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let tail = &rest[open + 1..];
        if let Some(close) = tail.find('}')
            && let Some(placeholder) = parse_placeholder(&tail[..close])
        {
            if open > 0 {
                segments.push(Segment::Literal(&rest[..open]));
            }
            segments.push(Segment::Placeholder(placeholder));
            rest = &tail[close + 1..];
        } else {
            segments.push(Segment::Literal(&rest[..=open]));
            rest = tail;
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

/// Parse the text between braces. Returns `None` for anything outside the
/// supported grammar, which leaves the braces untouched in the output.
fn parse_placeholder(body: &str) -> Option<Placeholder> {
    if body == "#" {
        return Some(Placeholder::Count);
    }
    if let Some((start, end)) = body.split_once("..") {
        return match (start.is_empty(), end.is_empty()) {
            (true, true) => Some(Placeholder::Open),
            (true, false) => parse_index(end).map(Placeholder::LeftOpen),
            (false, true) => parse_index(start).map(Placeholder::RightOpen),
            (false, false) => Some(Placeholder::Closed(
                parse_index(start)?,
                parse_index(end)?,
            )),
        };
    }
    parse_index(body).map(Placeholder::Index)
}

/// An optional `-` followed by one or more ASCII digits. No `+`, no
/// whitespace, nothing else.
fn parse_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn render<S: ArgumentSource + ?Sized>(placeholder: Placeholder, args: &S, out: &mut String) {
    match placeholder {
        Placeholder::Index(index) => match args.resolve(index) {
            Some(value) => out.push_str(&quote(value)),
            None => out.push_str("\"\""),
        },
        Placeholder::Count => out.push_str(&args.len().to_string()),
        Placeholder::Closed(start, end) => {
            // Indices outside [-len, len) never resolve, so clamping the
            // bounds keeps the loop proportional to the argument count
            // without changing the output.
            let len = i64::try_from(args.len()).unwrap_or(i64::MAX);
            let mut values = Vec::new();
            for i in start.max(-len)..=end.min(len - 1) {
                if let Some(value) = args.resolve(i) {
                    values.push(quote(value));
                }
            }
            out.push_str(&values.join(" "));
        }
        Placeholder::RightOpen(start) => {
            let mut values = Vec::new();
            let mut i = start;
            loop {
                // A negative start addresses the tail of the sequence; once
                // the counter hits zero the tail is exhausted.
                if start < 0 && i == 0 {
                    break;
                }
                match args.resolve(i) {
                    Some(value) => values.push(quote(value)),
                    None => break,
                }
                i += 1;
            }
            out.push_str(&values.join(" "));
        }
        Placeholder::LeftOpen(end) => {
            let mut values = Vec::new();
            if end < 0 {
                let mut i = end;
                while let Some(value) = args.resolve(i) {
                    values.push(quote(value));
                    i -= 1;
                }
                values.reverse();
            } else {
                // Same clamp as closed ranges: nothing at or past len
                // resolves.
                let len = i64::try_from(args.len()).unwrap_or(i64::MAX);
                for i in 0..=end.min(len - 1) {
                    if let Some(value) = args.resolve(i) {
                        values.push(quote(value));
                    }
                }
            }
            out.push_str(&values.join(" "));
        }
        Placeholder::Open => {
            let mut values = Vec::new();
            let mut i = 0;
            while let Some(value) = args.resolve(i) {
                values.push(quote(value));
                i += 1;
            }
            out.push_str(&values.join(" "));
        }
    }
}

/// JSON-quote a substituted value. String encoding is infallible; the
/// fallback keeps the engine error-free regardless.
fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}
