use std::fmt::Write as _;

use rewriter_core::{format_sections, AppViewModel, ItemOutcome, RewriteReport};

const COPY_SEPARATOR: &str = "========================================";

/// Full text report for a finished batch, one block per item in submission order.
pub fn render_batch(view: &AppViewModel) -> String {
    let mut out = String::new();
    for (idx, row) in view.items.iter().enumerate() {
        let number = idx + 1;
        match &row.outcome {
            Some(ItemOutcome::Rewritten(report)) => render_report(&mut out, number, report),
            Some(ItemOutcome::Failed { message }) => {
                let _ = writeln!(out, "{number}. {}\n{message}", row.url);
            }
            None => {
                let _ = writeln!(out, "{number}. {}\n(처리되지 않음)", row.url);
            }
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "완료 {}건 / 실패 {}건",
        view.completed_count.saturating_sub(view.failed_count),
        view.failed_count
    );
    out
}

fn render_report(out: &mut String, number: usize, report: &RewriteReport) {
    let stats = &report.stats;
    let _ = writeln!(out, "{number}. {}", report.original_title);
    let _ = writeln!(out, "   {}", report.url);
    let _ = writeln!(out, "{}", metrics_line(report));
    if report.repaired {
        let _ = writeln!(out, "(이미지 표시 {}개를 원문 배치대로 복원함)", stats.image_count);
    }
    let _ = writeln!(out, "\n{}", format_sections(&report.result));

    if !report.image_links.is_empty() {
        let _ = writeln!(out, "이미지 링크");
        for link in &report.image_links {
            let label = match &link.keyword {
                Some(keyword) => format!("[이미지 {}: {keyword}]", link.number),
                None => format!("[이미지 {}]", link.number),
            };
            let source = link.source_url.as_deref().unwrap_or("-");
            match &link.suggested_url {
                Some(suggested) => {
                    let _ = writeln!(out, "  {label} 원본: {source} | 추천: {suggested}");
                }
                None => {
                    let _ = writeln!(out, "  {label} 원본: {source}");
                }
            }
        }
    }
}

/// `원문 길이 1,234자 | 이미지 3장 | 재작성 길이 1,180자 | 유사율 42%`
pub fn metrics_line(report: &RewriteReport) -> String {
    let stats = &report.stats;
    format!(
        "원문 길이 {}자 | 이미지 {}장 | 재작성 길이 {}자 | 유사율 {:.0}%",
        format_with_commas(stats.original_len as u64),
        stats.image_count,
        format_with_commas(stats.rewritten_len as u64),
        stats.similarity * 100.0
    )
}

/// Copy-ready text of every rewritten item, separated by a rule line.
pub fn copy_ready_export(view: &AppViewModel) -> String {
    let texts: Vec<String> = view
        .items
        .iter()
        .filter_map(|row| match &row.outcome {
            Some(ItemOutcome::Rewritten(report)) => Some(report.copy_ready_text()),
            _ => None,
        })
        .collect();
    let mut export = texts.join(&format!("\n\n{COPY_SEPARATOR}\n\n"));
    export.push('\n');
    export
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rewriter_core::{image_links, parse_rewrite, ItemRowView, RewriteStats, SessionState, Stage};

    fn report(url: &str, raw: &str) -> RewriteReport {
        let result = parse_rewrite(raw);
        let links = image_links(&result.body, &["https://img/1.jpg".to_string()]);
        RewriteReport {
            url: url.to_string(),
            fetched_url: url.to_string(),
            original_title: "원래 제목".to_string(),
            original_content: "원문".to_string(),
            stats: RewriteStats {
                original_len: 12_345,
                image_count: 1,
                source_image_count: 1,
                rewritten_len: 987,
                similarity: 0.426,
            },
            result,
            image_links: links,
            source_image_urls: vec!["https://img/1.jpg".to_string()],
            repaired: false,
        }
    }

    fn finished_view(rows: Vec<(String, ItemOutcome)>) -> AppViewModel {
        let items: Vec<ItemRowView> = rows
            .into_iter()
            .enumerate()
            .map(|(idx, (url, outcome))| ItemRowView {
                item_id: idx as u64 + 1,
                url,
                stage: Stage::Done,
                outcome: Some(outcome),
            })
            .collect();
        let failed_count = items
            .iter()
            .filter(|row| matches!(row.outcome, Some(ItemOutcome::Failed { .. })))
            .count();
        AppViewModel {
            session: SessionState::Finished,
            item_count: items.len(),
            completed_count: items.len(),
            failed_count,
            items,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn metrics_use_grouped_digits_and_percent() {
        let report = report("https://a", "[본문]\n글");
        assert_eq!(
            metrics_line(&report),
            "원문 길이 12,345자 | 이미지 1장 | 재작성 길이 987자 | 유사율 43%"
        );
    }

    #[test]
    fn batch_lists_failures_inline() {
        let view = finished_view(vec![
            (
                "https://a".to_string(),
                ItemOutcome::Rewritten(Box::new(report(
                    "https://a",
                    "[제목]\n새 제목\n[본문]\n글\n\n[이미지: 바다]\n[해시태그]\n#바다",
                ))),
            ),
            (
                "https://b".to_string(),
                ItemOutcome::Failed {
                    message: "크롤링 실패: 본문을 추출하지 못했습니다.".to_string(),
                },
            ),
        ]);
        let text = render_batch(&view);
        assert!(text.starts_with("1. 원래 제목\n   https://a\n원문 길이 12,345자"));
        assert!(text.contains("[본문]\n글\n\n[이미지: 바다]\n"));
        assert!(text.contains("  [이미지 1: 바다] 원본: https://img/1.jpg\n"));
        assert!(text.contains("2. https://b\n크롤링 실패: 본문을 추출하지 못했습니다.\n"));
        assert!(text.ends_with("완료 1건 / 실패 1건"));
    }

    #[test]
    fn export_joins_copy_ready_texts() {
        let view = finished_view(vec![
            (
                "https://a".to_string(),
                ItemOutcome::Rewritten(Box::new(report("https://a", "[제목]\n가\n[본문]\n[이미지]\n본문 가"))),
            ),
            (
                "https://b".to_string(),
                ItemOutcome::Failed {
                    message: "x".to_string(),
                },
            ),
            (
                "https://c".to_string(),
                ItemOutcome::Rewritten(Box::new(report("https://c", "[본문]\n본문 다\n[해시태그]\n#다"))),
            ),
        ]);
        assert_eq!(
            copy_ready_export(&view),
            format!("가\n\n[이미지 1]\n본문 가\n\n{COPY_SEPARATOR}\n\n원래 제목\n\n본문 다\n\n#다\n")
        );
    }
}
