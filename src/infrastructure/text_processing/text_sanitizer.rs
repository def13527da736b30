use unicode_normalization::UnicodeNormalization;

/// Cleans one page of extracted PDF text.
///
/// NFKC normalization folds ligatures and the composed accented forms that
/// embedded fonts produce (the slips carry French labels); runs of internal
/// whitespace collapse to single spaces. Line structure is preserved because
/// address blocks are line-oriented.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    let mut first_line = true;

    for line in normalized.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !first_line {
            result.push('\n');
        }
        collapse_internal_whitespace(trimmed, &mut result);
        first_line = false;
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
