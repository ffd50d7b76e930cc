//! Builds relocation fixes for order violations.

use layout_lint_core::{FileContext, Fix, Span, TextEdit};

/// Moves the statement at `statement` to just before `anchor`.
///
/// The statement text is reinserted verbatim, followed by the anchor line's
/// line break and indentation. When the statement sits alone on its lines the
/// whole lines are removed, otherwise only its exact span.
///
/// Returns `None` when either span does not map onto the source or the
/// anchor does not precede the statement.
#[must_use]
pub fn relocation_fix(
    ctx: &FileContext<'_>,
    statement: Span,
    anchor: Span,
    display_name: &str,
) -> Option<Fix> {
    let source = ctx.content;
    let text = statement.text(source)?;
    anchor.text(source)?;
    if anchor.start >= statement.start {
        return None;
    }

    let (delete_start, delete_end) = deletion_range(ctx, statement);
    let inserted = format!(
        "{text}{}{}",
        line_break_after(source, anchor.start),
        ctx.indentation_at(anchor.start)
    );

    Some(Fix::with_edits(
        format!("Move \"{display_name}\" above the statement on line {}", anchor.line),
        vec![
            TextEdit::insert(anchor.start, inserted),
            TextEdit::delete(delete_start, delete_end),
        ],
    ))
}

/// Line break ending the line that contains `offset`; `\n` on the last line.
fn line_break_after(source: &str, offset: usize) -> &'static str {
    match source[offset..].find('\n') {
        Some(at) if source[..offset + at].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn deletion_range(ctx: &FileContext<'_>, statement: Span) -> (usize, usize) {
    let source = ctx.content;
    let line_start = ctx.line_start(statement.start);
    let line_end = ctx.line_end_inclusive(statement.end);

    let before = &source[line_start..statement.start];
    let after = &source[statement.end..line_end];

    if before.trim().is_empty() && after.trim().is_empty() {
        (line_start, line_end)
    } else {
        (statement.start, statement.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ctx(source: &str) -> FileContext<'_> {
        FileContext::new(Path::new("/p/App.tsx"), source, Path::new("/p"))
    }

    fn span_of(source: &str, needle: &str, line: usize) -> Span {
        let start = source.find(needle).unwrap();
        Span::new(start, start + needle.len(), line, 1)
    }

    #[test]
    fn moves_whole_line_above_anchor() {
        let source = "function C() {\n  const [a, setA] = useState(0);\n  const loc = useLocation();\n  return <div />;\n}\n";
        let anchor = span_of(source, "const [a, setA] = useState(0);", 2);
        let statement = span_of(source, "const loc = useLocation();", 3);

        let fix = relocation_fix(&ctx(source), statement, anchor, "useLocation").unwrap();
        assert_eq!(
            fix.apply(source),
            "function C() {\n  const loc = useLocation();\n  const [a, setA] = useState(0);\n  return <div />;\n}\n"
        );
        assert!(fix.message.contains("useLocation"));
    }

    #[test]
    fn shares_line_with_other_code() {
        let source = "function C() {\n  const a = useState(0);\n  const b = 1; const loc = useLocation();\n  return <div />;\n}";
        let anchor = span_of(source, "const a = useState(0);", 2);
        let statement = span_of(source, "const loc = useLocation();", 3);

        let fix = relocation_fix(&ctx(source), statement, anchor, "useLocation").unwrap();
        assert_eq!(
            fix.apply(source),
            "function C() {\n  const loc = useLocation();\n  const a = useState(0);\n  const b = 1; \n  return <div />;\n}"
        );
    }

    #[test]
    fn keeps_multiline_statement_verbatim() {
        let source = "  const a = useState(0);\n  const onSave = () => {\n    save();\n  };\n  const fmt = () => {};\n";
        let anchor = span_of(source, "const onSave = () => {\n    save();\n  };", 2);
        let statement = span_of(source, "const fmt = () => {};", 5);

        let fix = relocation_fix(&ctx(source), statement, anchor, "Utility (fmt)").unwrap();
        assert_eq!(
            fix.apply(source),
            "  const a = useState(0);\n  const fmt = () => {};\n  const onSave = () => {\n    save();\n  };\n"
        );
    }

    #[test]
    fn keeps_crlf_line_endings() {
        let source = "function C() {\r\n  const a = useState(0);\r\n  const loc = useLocation();\r\n  return <div />;\r\n}\r\n";
        let anchor = span_of(source, "const a = useState(0);", 2);
        let statement = span_of(source, "const loc = useLocation();", 3);

        let fix = relocation_fix(&ctx(source), statement, anchor, "useLocation").unwrap();
        let fixed = fix.apply(source);
        assert_eq!(
            fixed,
            "function C() {\r\n  const loc = useLocation();\r\n  const a = useState(0);\r\n  return <div />;\r\n}\r\n"
        );
        assert_eq!(fixed.matches('\n').count(), fixed.matches("\r\n").count());
    }

    #[test]
    fn rejects_anchor_after_statement() {
        let source = "a;\nb;\n";
        let first = span_of(source, "a;", 1);
        let second = span_of(source, "b;", 2);
        assert!(relocation_fix(&ctx(source), first, second, "a").is_none());
        assert!(relocation_fix(&ctx(source), Span::new(0, 99, 1, 1), first, "x").is_none());
    }
}
