use std::path::{Path, PathBuf};

use crawl_logging::crawl_info;
use visa_qa_core::{ContentType, DetailRecord};

use crate::persist::{AtomicFileWriter, PersistError};

const CATEGORY_PREFIX: &str = "[分類]：";
const TABLE_ANNOTATION: &str = "[內容型態]：表格資料";
const IMAGE_ANNOTATION: &str = "[內容型態]：流程圖（圖片）";
const IMAGE_NOTE: &str = "- 本題內容為官方流程圖，請參考下方圖片。";
const IMAGE_LINK_PREFIX: &str = "- 流程圖連結：";
const SOURCE_PREFIX: &str = "來源：";
const DIVIDER_WIDTH: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub record_count: usize,
    pub output_path: PathBuf,
}

/// One Q/A block, without the trailing divider.
pub fn render_record(record: &DetailRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{CATEGORY_PREFIX}{}\n", record.category));

    match record.content_type {
        ContentType::Table => out.push_str(&format!("{TABLE_ANNOTATION}\n\n")),
        ContentType::Image => out.push_str(&format!("{IMAGE_ANNOTATION}\n\n")),
        ContentType::Text | ContentType::Empty => out.push('\n'),
    }

    out.push_str(&format!("Q: {}\n\n", record.title));
    out.push_str("A:\n");

    if record.content_type == ContentType::Image {
        out.push_str(IMAGE_NOTE);
        out.push('\n');
        for link in &record.content {
            out.push_str(&format!("{IMAGE_LINK_PREFIX}{link}\n"));
        }
    } else {
        for line in &record.content {
            out.push_str(line);
            out.push('\n');
        }
    }

    if let Some(date) = record.publish_date() {
        out.push_str(&format!("\n{date}"));
    }

    out.push_str(&format!("\n{SOURCE_PREFIX}{}\n", record.url));
    out
}

/// All blocks, each followed by the divider.
pub fn render_changed_set(records: &[DetailRecord]) -> String {
    let divider = "=".repeat(DIVIDER_WIDTH);
    records
        .iter()
        .map(|record| format!("{}\n{divider}\n\n", render_record(record)))
        .collect()
}

/// Write the changed-set export. Nothing is written for an empty set.
pub fn export_changed_set(
    path: &Path,
    records: &[DetailRecord],
) -> Result<Option<ExportSummary>, ExportError> {
    if records.is_empty() {
        crawl_info!("No updates.");
        return Ok(None);
    }

    let output_path = AtomicFileWriter.write(path, &render_changed_set(records))?;
    crawl_info!("Exported {} records to {:?}", records.len(), output_path);
    Ok(Some(ExportSummary {
        record_count: records.len(),
        output_path,
    }))
}

/// Write a single record as its own export file, without divider.
pub fn export_single(path: &Path, record: &DetailRecord) -> Result<ExportSummary, ExportError> {
    let output_path = AtomicFileWriter.write(path, &render_record(record))?;
    crawl_info!("Wrote: {:?}", output_path);
    Ok(ExportSummary {
        record_count: 1,
        output_path,
    })
}
