//! 学习记录类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// 一条学习记录
///
/// 记录没有 id 字段，追加顺序就是唯一的排序依据；
/// 记录一旦写入不再单独修改或删除，只支持整库清空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    /// 记录创建时间
    pub date: DateTime<Utc>,
    /// 科目（自由文本）
    pub subject: String,
    /// 学习时长（分钟，必须为正）
    pub duration_minutes: u32,
    /// 专注度评分（1-5）
    pub productivity: u8,
    /// 备注，可为空
    pub notes: String,
}

impl StudySession {
    /// 以当前时间创建一条记录
    pub fn new(
        subject: impl Into<String>,
        duration_minutes: u32,
        productivity: u8,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date: Utc::now(),
            subject: subject.into(),
            duration_minutes,
            productivity,
            notes: notes.into(),
        }
    }

    /// 校验记录字段
    ///
    /// 追加前调用；未通过校验的记录不会进入存储。
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.subject.trim().is_empty() {
            return Err(StoreError::InvalidSession("科目不能为空".to_string()));
        }
        if self.duration_minutes == 0 {
            return Err(StoreError::InvalidSession(
                "学习时长必须为正数".to_string(),
            ));
        }
        if !(1..=5).contains(&self.productivity) {
            return Err(StoreError::InvalidSession(format!(
                "专注度评分必须在 1-5 之间: {}",
                self.productivity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_session_passes() {
        let session = StudySession::new("Math", 60, 4, "");
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let session = StudySession::new("Math", 0, 3, "");
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_productivity_out_of_range_rejected() {
        assert!(StudySession::new("Math", 30, 0, "").validate().is_err());
        assert!(StudySession::new("Math", 30, 6, "").validate().is_err());
    }

    #[test]
    fn test_blank_subject_rejected() {
        assert!(StudySession::new("   ", 30, 3, "").validate().is_err());
    }

    #[test]
    fn test_json_keys_are_stable() {
        let session = StudySession::new("Math", 60, 4, "chapter 3");
        let value = serde_json::to_value(&session).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["date", "subject", "duration_minutes", "productivity", "notes"] {
            assert!(obj.contains_key(key), "missing key: {}", key);
        }
    }
}
