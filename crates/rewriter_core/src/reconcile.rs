use crate::pattern::ImagePattern;
use crate::placeholder::{count_placeholders, IMAGE_PLACEHOLDER};
use crate::sections::{BODY_MARKER, HASHTAG_MARKER};

/// A rewrite is accepted unchanged when it keeps at least
/// `expected / ACCEPT_DIVISOR` placeholders (integer division).
pub const ACCEPT_DIVISOR: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub text: String,
    pub expected: usize,
    pub actual: usize,
    pub repaired: bool,
}

/// Restores image placeholders the rewrite dropped.
///
/// `rewritten` is the raw completion text, `original` the source content the
/// pattern is derived from. When the rewrite falls below the acceptance
/// threshold, the original's placeholder groups are re-inserted, evenly spread
/// over the paragraphs of the `[본문]` section.
pub fn reconcile_placeholders(rewritten: &str, original: &str) -> Reconciliation {
    let pattern = ImagePattern::analyze(original);
    let expected = pattern.total();
    let actual = count_placeholders(rewritten);

    if expected == 0 || actual >= expected / ACCEPT_DIVISOR {
        return Reconciliation {
            text: rewritten.to_string(),
            expected,
            actual,
            repaired: false,
        };
    }

    let (prefix, body, suffix) = split_body(rewritten);
    let repaired_body = distribute_groups(&paragraphs(body), pattern.runs());

    let mut text = String::with_capacity(rewritten.len() + expected * IMAGE_PLACEHOLDER.len() * 2);
    if !prefix.is_empty() {
        text.push_str(prefix);
        text.push('\n');
    }
    text.push_str(&repaired_body);
    if !suffix.is_empty() {
        text.push_str("\n\n");
        text.push_str(suffix);
    }

    Reconciliation {
        text,
        expected,
        actual,
        repaired: true,
    }
}

/// Splits into (up to and including `[본문]`, body, from `[해시태그]` on).
/// Without a body marker the whole text is the body.
fn split_body(text: &str) -> (&str, &str, &str) {
    let Some(marker) = text.find(BODY_MARKER) else {
        return ("", text, "");
    };
    let body_start = marker + BODY_MARKER.len();
    let body_end = text[body_start..]
        .find(HASHTAG_MARKER)
        .map_or(text.len(), |idx| body_start + idx);
    (
        &text[..body_start],
        &text[body_start..body_end],
        &text[body_end..],
    )
}

fn paragraphs(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

fn placeholder_block(size: usize) -> String {
    vec![IMAGE_PLACEHOLDER; size].join("\n\n")
}

/// Boundary (number of paragraphs before it) where group `k` of `groups`
/// lands: the first boundary at or after `k / (groups + 1)` of the way through.
fn insertion_boundary(k: usize, groups: usize, paragraph_count: usize) -> usize {
    (k * paragraph_count).div_ceil(groups + 1)
}

fn distribute_groups(paragraphs: &[String], runs: &[usize]) -> String {
    if paragraphs.is_empty() {
        return runs
            .iter()
            .map(|&size| placeholder_block(size))
            .collect::<Vec<_>>()
            .join("\n\n");
    }

    let groups = runs.len();
    let mut slots: Vec<Vec<usize>> = vec![Vec::new(); paragraphs.len()];
    for (idx, &size) in runs.iter().enumerate() {
        let boundary = insertion_boundary(idx + 1, groups, paragraphs.len());
        let slot = boundary.clamp(1, paragraphs.len()) - 1;
        slots[slot].push(size);
    }

    let mut blocks: Vec<String> = Vec::with_capacity(paragraphs.len() + groups);
    for (paragraph, inserted) in paragraphs.iter().zip(slots) {
        blocks.push(paragraph.clone());
        blocks.extend(inserted.into_iter().map(placeholder_block));
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::{insertion_boundary, paragraphs, split_body};

    #[test]
    fn boundaries_spread_over_paragraphs() {
        assert_eq!(insertion_boundary(1, 2, 4), 2);
        assert_eq!(insertion_boundary(2, 2, 4), 3);
        assert_eq!(insertion_boundary(1, 1, 5), 3);
        assert_eq!(insertion_boundary(3, 3, 1), 1);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let body = "\n첫 줄\n이어짐\n\n  \n둘째\n\n";
        assert_eq!(paragraphs(body), vec!["첫 줄\n이어짐", "둘째"]);
    }

    #[test]
    fn split_body_without_markers_is_whole_text() {
        assert_eq!(split_body("그냥 본문"), ("", "그냥 본문", ""));
        let (prefix, body, suffix) = split_body("[제목]\n가\n[본문]\n나\n[해시태그]\n#다");
        assert_eq!(prefix, "[제목]\n가\n[본문]");
        assert_eq!(body, "\n나\n");
        assert_eq!(suffix, "[해시태그]\n#다");
    }
}
