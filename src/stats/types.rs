//! 聚合查询结果类型

use serde::{Deserialize, Serialize};

/// 单个科目的累计时长
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectTotal {
    pub subject: String,
    /// 累计分钟数
    pub minutes: u64,
}

/// 科目时长占比（饼图数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectShare {
    pub subject: String,
    /// 累计分钟数
    pub minutes: u64,
    /// 占全部时长的百分比（0-100）
    pub percent: f64,
}

/// 最近 7 天的学习汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// 窗口内的记录数
    pub session_count: usize,
    /// 窗口内的累计分钟数
    pub total_minutes: u64,
    /// 平均专注度，窗口内无记录时为 0.0
    pub average_productivity: f64,
    /// 学习时间最长的科目
    pub most_studied: Option<SubjectTotal>,
    /// 覆盖的科目数
    pub subjects_covered: usize,
}

impl WeeklySummary {
    /// 窗口内没有记录时的汇总
    pub fn empty() -> Self {
        Self {
            session_count: 0,
            total_minutes: 0,
            average_productivity: 0.0,
            most_studied: None,
            subjects_covered: 0,
        }
    }
}

/// 柱状图的分桶方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBucket {
    /// 按科目分桶
    Subject,
    /// 按自然日分桶
    Day,
}

/// 柱状图数据点
///
/// 顺序为首次出现顺序，查询层不做排序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub minutes: u64,
}

/// 主界面统计面板数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreOverview {
    pub session_count: usize,
    pub total_minutes: u64,
    /// 形如 "2h 5min" / "45 min" 的展示文本
    pub total_time_label: String,
}
