use std::fs;
use std::path::Path;

use thiserror::Error;

use rimetab_types::tone_label_columns;

use crate::classify::Tally;

/// Header label of the spelling-category column.
pub const CATEGORY_COLUMN: &str = "归类";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report row: {0}")]
    Csv(#[from] csv::Error),
}

/// Render the tally as CSV text.
///
/// The header is the category column followed by all 15 non-empty tone
/// labels in encoder enumeration order. Rows appear in first-seen spelling
/// order; labels never observed for a spelling render as empty fields, not
/// zero.
pub fn render(tally: &Tally) -> Result<String, ReportError> {
    let labels = tone_label_columns();
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        let mut header = Vec::with_capacity(labels.len() + 1);
        header.push(CATEGORY_COLUMN.to_string());
        header.extend(labels.iter().cloned());
        writer.write_record(&header)?;

        for spelling in tally.spellings() {
            let mut row = Vec::with_capacity(labels.len() + 1);
            row.push(spelling.to_string());
            for label in &labels {
                let cell = tally
                    .weight(spelling, label)
                    .map(|weight| weight.to_string())
                    .unwrap_or_default();
                row.push(cell);
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf).expect("csv output is valid utf8"))
}

/// Write the rendered report, then scrub blank lines from the written file.
pub fn write(tally: &Tally, path: &Path) -> Result<(), ReportError> {
    fs::write(path, render(tally)?)?;
    scrub_blank_lines(path)
}

/// Drop every line of the file that consists solely of whitespace,
/// rewriting only when something was dropped. Cleanup against formatting
/// artifacts; remaining lines keep their order.
pub fn scrub_blank_lines(path: &Path) -> Result<(), ReportError> {
    let text = fs::read_to_string(path)?;
    let cleaned = retain_content_lines(&text);
    if cleaned != text {
        fs::write(path, cleaned)?;
    }
    Ok(())
}

fn retain_content_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "归类,平,上,平上,去,平去,上去,平上去,入,平入,上入,平上入,去入,平去入,上去入,平上去入";

    #[test]
    fn header_lists_all_fifteen_labels_in_enumeration_order() {
        let rendered = render(&Tally::default()).unwrap();
        assert_eq!(rendered, format!("{HEADER}\n"));
    }

    #[test]
    fn unobserved_labels_render_blank_not_zero() {
        let mut tally = Tally::default();
        tally.record("X", "平", 4);
        let rendered = render(&tally).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], format!("X,4{}", ",".repeat(14)));
    }

    #[test]
    fn rows_follow_first_seen_order() {
        let mut tally = Tally::default();
        tally.record("乙", "上", 1);
        tally.record("甲", "平", 2);
        let rendered = render(&tally).unwrap();
        let categories: Vec<&str> = rendered
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(categories, vec!["乙", "甲"]);
    }

    #[test]
    fn scrub_removes_whitespace_only_lines_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        fs::write(&path, "a,1\n   \nb,2\n\n\t\nc,3\n").unwrap();
        scrub_blank_lines(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,1\nb,2\nc,3\n");
    }

    #[test]
    fn scrub_leaves_clean_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        fs::write(&path, "a,1\nb,2\n").unwrap();
        scrub_blank_lines(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,1\nb,2\n");
    }

    #[test]
    fn writes_and_scrubs_in_one_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let mut tally = Tally::default();
        tally.record("X", "平", 4);
        write(&tally, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(HEADER));
        assert!(!text.lines().any(|line| line.trim().is_empty()));
    }
}
