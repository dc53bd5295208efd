/// Textual pattern locating a named step header. The quoted step name and
/// the async arrow's opening brace follow it.
const STEP_ANCHOR: &str = "test.step(";

/// One extracted block before classification.
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub name: String,
    pub code: String,
}

/// Locate every named step anchor and extract its body, in source order.
///
/// A successful match consumes through its own opening brace, so the scan
/// resumes inside the body and nested steps are found too. An anchor whose
/// header is malformed or whose braces never rebalance yields no block and
/// raises no error.
pub fn extract_blocks(text: &str) -> Vec<RawBlock> {
    let mut out = Vec::new();
    let mut at = 0usize;

    while let Some(rel) = text[at..].find(STEP_ANCHOR) {
        let header_start = at + rel + STEP_ANCHOR.len();
        match read_block(&text[header_start..]) {
            Some((name, code, body_start)) => {
                out.push(RawBlock { name, code });
                at = header_start + body_start;
            }
            None => {
                at = header_start;
            }
        }
    }

    out
}

/// Parse one block starting just past the anchor text: quoted step name,
/// then an async arrow whose first `{` opens the body.
///
/// Returns `(name, body, byte offset just past the opening brace)`, or
/// `None` when the header does not match or the body never closes.
fn read_block(rest: &str) -> Option<(String, String, usize)> {
    // Step name: a quoted string must follow the anchor, whitespace aside.
    let mut chars = rest.char_indices();
    let quote = loop {
        let (_, ch) = chars.next()?;
        if ch == '\'' || ch == '"' || ch == '`' {
            break ch;
        }
        if !ch.is_whitespace() {
            return None;
        }
    };

    let mut name = String::new();
    let mut escaped = false;
    let name_end = loop {
        let (i, ch) = chars.next()?;
        if escaped {
            name.push(ch);
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == quote {
            break i + ch.len_utf8();
        }
        name.push(ch);
    };

    // The body opens at the first `{` after the arrow; the header between
    // the name and the brace must carry the async marker.
    let arrow = name_end + rest[name_end..].find("=>")?;
    let body_start = arrow + rest[arrow..].find('{')? + 1;
    if !rest[name_end..body_start].contains("async") {
        return None;
    }

    // Brace-depth scan: depth 1 just past the opening brace. Character
    // level only; braces inside string or comment literals are counted
    // too. That leniency is intentional, not a defect.
    let mut depth = 1i32;
    for (i, ch) in rest[body_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let code = rest[body_start..body_start + i].trim().to_string();
                    return Some((name, code, body_start));
                }
            }
            _ => {}
        }
    }

    // Depth never returned to 0: unbalanced braces, skip this anchor.
    None
}
