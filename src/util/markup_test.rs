use super::*;

fn text(s: &str) -> Segment {
    Segment::Text(s.to_owned())
}

fn link(label: &str, url: &str) -> Segment {
    Segment::Link { label: label.to_owned(), url: url.to_owned() }
}

// =============================================================
// Links
// =============================================================

#[test]
fn renders_single_link() {
    assert_eq!(render("[Go here](https://x.test)"), vec![link("Go here", "https://x.test")]);
}

#[test]
fn renders_link_inside_text() {
    assert_eq!(
        render("Book at [our page](https://garage.test/rdv) today."),
        vec![text("Book at "), link("our page", "https://garage.test/rdv"), text(" today.")]
    );
}

#[test]
fn renders_every_link_occurrence() {
    assert_eq!(
        render("[a](https://a.test) and [b](mailto:b@b.test)"),
        vec![link("a", "https://a.test"), text(" and "), link("b", "mailto:b@b.test")]
    );
}

#[test]
fn scheme_check_is_case_insensitive() {
    assert_eq!(render("[x](HTTPS://X.TEST)"), vec![link("x", "HTTPS://X.TEST")]);
}

#[test]
fn disallowed_scheme_stays_literal() {
    let raw = "[click](javascript:alert(1))";
    assert_eq!(render(raw), vec![text(raw)]);
}

#[test]
fn relative_url_stays_literal() {
    assert_eq!(render("[x](/admin)"), vec![text("[x](/admin)")]);
}

#[test]
fn url_with_whitespace_stays_literal() {
    assert_eq!(render("[x](https://a.test/ b)"), vec![text("[x](https://a.test/ b)")]);
}

#[test]
fn empty_label_stays_literal() {
    assert_eq!(render("[](https://a.test)"), vec![text("[](https://a.test)")]);
}

#[test]
fn unclosed_brackets_stay_literal() {
    assert_eq!(render("[oops (https://a.test)"), vec![text("[oops (https://a.test)")]);
    assert_eq!(render("[oops](https://a.test"), vec![text("[oops](https://a.test")]);
}

#[test]
fn later_bracket_can_still_start_a_link() {
    assert_eq!(
        render("[note] see [docs](https://d.test)"),
        vec![text("[note] see "), link("docs", "https://d.test")]
    );
}

#[test]
fn html_in_reply_is_kept_as_text() {
    let raw = "<img src=x onerror=alert(1)>";
    assert_eq!(render(raw), vec![text(raw)]);
}

// =============================================================
// Line breaks
// =============================================================

#[test]
fn newline_becomes_line_break() {
    assert_eq!(render("line1\nline2"), vec![text("line1"), Segment::LineBreak, text("line2")]);
}

#[test]
fn output_contains_no_literal_newlines() {
    let segments = render("a\r\nb\rc\n\nd");
    for seg in &segments {
        if let Segment::Text(t) = seg {
            assert!(!t.contains('\n') && !t.contains('\r'));
        }
    }
    let breaks = segments.iter().filter(|s| **s == Segment::LineBreak).count();
    assert_eq!(breaks, 4);
}

#[test]
fn link_on_second_line() {
    assert_eq!(
        render("Hi!\n[RDV](https://r.test)"),
        vec![text("Hi!"), Segment::LineBreak, link("RDV", "https://r.test")]
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render("").is_empty());
}

// =============================================================
// Plain
// =============================================================

#[test]
fn plain_does_not_rewrite_links() {
    assert_eq!(plain("[a](https://a.test)"), vec![text("[a](https://a.test)")]);
}
