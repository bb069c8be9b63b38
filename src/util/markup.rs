//! Reply renderer: `[label](url)` links and line breaks, nothing else.
//!
//! DESIGN
//! ======
//! Remote reply text is never interpreted as HTML. The renderer produces a
//! small text model ([`Segment`]) that the view layer turns into escaped text
//! nodes, `<a>` elements, and `<br>` elements. Two rewrites exist:
//!
//! 1. `[label](url)` becomes a [`Segment::Link`] when the URL uses an allowed
//!    scheme; otherwise the span stays literal text.
//! 2. `\n`, `\r\n`, and lone `\r` each become one [`Segment::LineBreak`].

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

const ALLOWED_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

/// One piece of rendered message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Opens in a new browsing context.
    Link { label: String, url: String },
    LineBreak,
}

/// Render raw reply text into display segments.
pub fn render(raw: &str) -> Vec<Segment> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = Vec::new();
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        push_inline(line, &mut out);
    }
    out
}

fn push_inline(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        if let Some((label, url, consumed)) = parse_link(after) {
            push_text(&rest[..open], out);
            out.push(Segment::Link { label: label.to_owned(), url: url.to_owned() });
            rest = &after[consumed..];
        } else {
            push_text(&rest[..=open], out);
            rest = after;
        }
    }
    push_text(rest, out);
}

/// Parse `label](url)` following an opening bracket.
///
/// Returns the label, the URL, and the number of bytes consumed from `after`.
fn parse_link(after: &str) -> Option<(&str, &str, usize)> {
    let close = after.find(']')?;
    let label = &after[..close];
    let tail = after[close + 1..].strip_prefix('(')?;
    let end = tail.find(')')?;
    let url = &tail[..end];

    if label.is_empty() || url.is_empty() || url.chars().any(char::is_whitespace) || !is_allowed_url(url) {
        return None;
    }
    Some((label, url, close + end + 3))
}

fn is_allowed_url(url: &str) -> bool {
    ALLOWED_SCHEMES
        .iter()
        .any(|scheme| url.get(..scheme.len()).is_some_and(|p| p.eq_ignore_ascii_case(scheme)))
}

fn push_text(text: &str, out: &mut Vec<Segment>) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Segment::Text(text.to_owned()));
    }
}

/// Wrap plain text (user input, fixed error text) without link rewriting.
pub fn plain(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    push_text(text, &mut out);
    out
}
