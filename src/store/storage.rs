//! 学习记录存储服务
//!
//! 整库载入、整库重写：打开时把 JSON 数组全部读进内存，
//! 每次追加或清空都重写整个文件，不做增量写入。

use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::export;
use super::types::StudySession;

/// 默认数据文件名
const DATA_FILE_NAME: &str = "study_data.json";

/// 学习记录存储
pub struct SessionStore {
    /// 数据文件路径
    data_file: PathBuf,
    /// 内存中的记录序列（追加顺序）
    sessions: Vec<StudySession>,
}

impl SessionStore {
    /// 打开默认位置的存储
    ///
    /// 默认使用 ~/.studytrack/study_data.json，目录不存在时自动创建。
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_data_file()?)
    }

    /// 打开指定路径的存储
    ///
    /// 文件不存在视为空库；文件存在但无法解析为记录数组时返回错误，
    /// 不做局部恢复。
    pub fn open(data_file: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let sessions = Self::load(&data_file)?;
        tracing::debug!(
            "[SessionStore] 载入学习数据: {} 条记录 ({:?})",
            sessions.len(),
            data_file
        );
        Ok(Self {
            data_file,
            sessions,
        })
    }

    /// 获取默认数据文件路径
    fn default_data_file() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(home.join(".studytrack").join(DATA_FILE_NAME))
    }

    /// 从磁盘读取记录数组
    fn load(data_file: &Path) -> Result<Vec<StudySession>, StoreError> {
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(|e| StoreError::Read {
            path: data_file.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: data_file.to_path_buf(),
            source: e,
        })
    }

    /// 把内存中的记录序列整体重写到磁盘
    fn save(&self) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(&self.sessions).map_err(StoreError::Serialize)?;
        fs::write(&self.data_file, content).map_err(|e| StoreError::Write {
            path: self.data_file.clone(),
            source: e,
        })
    }

    /// 数据文件路径
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// 全部记录（追加顺序）
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// 是否为空库
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// 追加一条记录并重写数据文件
    ///
    /// 校验失败或写盘失败时存储内容保持不变。
    pub fn append(&mut self, session: StudySession) -> Result<(), StoreError> {
        session.validate()?;

        self.sessions.push(session);
        if let Err(e) = self.save() {
            // 写盘失败时回滚内存状态，保持与磁盘一致
            self.sessions.pop();
            return Err(e);
        }

        if let Some(appended) = self.sessions.last() {
            tracing::info!(
                "[SessionStore] 追加学习记录: {} ({} 分钟, 专注度 {}/5)",
                appended.subject,
                appended.duration_minutes,
                appended.productivity
            );
        }
        Ok(())
    }

    /// 清空全部记录并重写（空的）数据文件
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.sessions.clear();
        self.save()?;
        tracing::info!("[SessionStore] 清空全部学习数据: {:?}", self.data_file);
        Ok(())
    }

    /// 把全部记录导出为 CSV
    ///
    /// 返回实际写入的文件路径。
    pub fn export_csv(&self, path: &Path) -> Result<PathBuf, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        let written = export::write_csv(&self.sessions, path)?;
        tracing::info!(
            "[SessionStore] 导出 CSV: {} 条记录 -> {:?}",
            self.sessions.len(),
            written
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (SessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::open(temp_dir.path().join(DATA_FILE_NAME)).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let (store, _temp) = create_test_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_then_reload_round_trip() {
        let (mut store, _temp) = create_test_store();
        store.append(StudySession::new("Math", 60, 4, "")).unwrap();
        store
            .append(StudySession::new("Art", 45, 3, "sketching"))
            .unwrap();

        let reloaded = SessionStore::open(store.data_file().to_path_buf()).unwrap();
        assert_eq!(reloaded.sessions(), store.sessions());
    }

    #[test]
    fn test_append_rejects_zero_duration() {
        let (mut store, _temp) = create_test_store();
        store.append(StudySession::new("Math", 30, 3, "")).unwrap();

        let result = store.append(StudySession::new("Math", 0, 3, ""));
        assert!(matches!(result, Err(StoreError::InvalidSession(_))));

        // 存储内容不变
        assert_eq!(store.len(), 1);
        let reloaded = SessionStore::open(store.data_file().to_path_buf()).unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_append_rejects_productivity_out_of_range() {
        let (mut store, _temp) = create_test_store();
        let result = store.append(StudySession::new("Math", 30, 6, ""));
        assert!(matches!(result, Err(StoreError::InvalidSession(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DATA_FILE_NAME);
        fs::write(&path, "{ not a json array").unwrap();

        let result = SessionStore::open(path);
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let (mut store, _temp) = create_test_store();
        store.append(StudySession::new("Math", 60, 4, "")).unwrap();
        store.clear().unwrap();

        // clear 重写空文件而不是删除文件
        assert!(store.data_file().exists());
        let reloaded = SessionStore::open(store.data_file().to_path_buf()).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_data_file_is_pretty_json_array() {
        let (mut store, _temp) = create_test_store();
        store.append(StudySession::new("Math", 60, 4, "")).unwrap();

        let content = fs::read_to_string(store.data_file()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.is_array());
        assert!(content.contains('\n'));
    }
}
