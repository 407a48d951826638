//! CSV 导出
//!
//! 固定表头加逐行记录，仅对嵌入逗号、引号或换行的字段做朴素加引号处理。

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::types::StudySession;

/// CSV 表头
const CSV_HEADER: &str = "date,subject,duration_minutes,productivity,notes";

/// 把记录序列写成 CSV 文件，返回写入路径
pub(super) fn write_csv(
    sessions: &[StudySession],
    path: &Path,
) -> Result<PathBuf, StoreError> {
    let mut content = String::new();
    content.push_str(CSV_HEADER);
    content.push('\n');

    for session in sessions {
        let _ = writeln!(
            content,
            "{},{},{},{},{}",
            quote_field(&session.date.to_rfc3339()),
            quote_field(&session.subject),
            session.duration_minutes,
            session.productivity,
            quote_field(&session.notes)
        );
    }

    fs::write(path, content).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(path.to_path_buf())
}

/// 朴素加引号：字段含逗号、引号或换行时整体包进双引号，内部引号翻倍
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
