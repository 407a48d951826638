//! 聚合查询实现
//!
//! 每个查询都是对记录切片的一次遍历，分组一律用 IndexMap
//! 保持首次出现顺序（相同总时长不额外定序，见饼图/柱状图约定）。

use chrono::{DateTime, Duration, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::store::StudySession;

use super::types::{
    StoreOverview, SubjectShare, SubjectTotal, TimeBucket, TimeSeriesPoint, WeeklySummary,
};

/// 按科目分组求累计分钟数
pub fn totals_by_subject(sessions: &[StudySession]) -> IndexMap<String, u64> {
    let mut totals: IndexMap<String, u64> = IndexMap::new();
    for session in sessions {
        *totals.entry(session.subject.clone()).or_insert(0) += session.duration_minutes as u64;
    }
    totals
}

/// 全部记录的累计分钟数
pub fn total_minutes(sessions: &[StudySession]) -> u64 {
    sessions.iter().map(|s| s.duration_minutes as u64).sum()
}

/// 平均专注度，无记录时为 0.0
pub fn average_productivity(sessions: &[StudySession]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    let sum: u64 = sessions.iter().map(|s| s.productivity as u64).sum();
    sum as f64 / sessions.len() as f64
}

/// 学习时间最长的科目，总时长相同时取先出现的
pub fn most_studied_subject(sessions: &[StudySession]) -> Option<SubjectTotal> {
    pick_max(&totals_by_subject(sessions))
}

/// 科目时长占比（饼图数据），percent = 科目时长 / 总时长
pub fn subject_distribution(sessions: &[StudySession]) -> Vec<SubjectShare> {
    let grand_total = total_minutes(sessions);
    if grand_total == 0 {
        return Vec::new();
    }
    totals_by_subject(sessions)
        .into_iter()
        .map(|(subject, minutes)| SubjectShare {
            subject,
            minutes,
            percent: minutes as f64 / grand_total as f64 * 100.0,
        })
        .collect()
}

/// 以 now 为基准的最近 7 天汇总
///
/// 窗口为 date >= now - 7 天，不设上界；窗口内无记录时各项为零。
pub fn weekly_summary(sessions: &[StudySession], now: DateTime<Utc>) -> WeeklySummary {
    let cutoff = now - Duration::days(7);

    let mut session_count = 0usize;
    let mut total = 0u64;
    let mut productivity_sum = 0u64;
    let mut by_subject: IndexMap<String, u64> = IndexMap::new();

    for session in sessions.iter().filter(|s| s.date >= cutoff) {
        session_count += 1;
        total += session.duration_minutes as u64;
        productivity_sum += session.productivity as u64;
        *by_subject.entry(session.subject.clone()).or_insert(0) +=
            session.duration_minutes as u64;
    }

    if session_count == 0 {
        return WeeklySummary::empty();
    }

    WeeklySummary {
        session_count,
        total_minutes: total,
        average_productivity: productivity_sum as f64 / session_count as f64,
        most_studied: pick_max(&by_subject),
        subjects_covered: by_subject.len(),
    }
}

/// 柱状图时间序列：按科目或按自然日分桶求累计分钟数
pub fn time_series(sessions: &[StudySession], bucket: TimeBucket) -> Vec<TimeSeriesPoint> {
    match bucket {
        TimeBucket::Subject => totals_by_subject(sessions)
            .into_iter()
            .map(|(label, minutes)| TimeSeriesPoint { label, minutes })
            .collect(),
        TimeBucket::Day => {
            let mut per_day: IndexMap<NaiveDate, u64> = IndexMap::new();
            for session in sessions {
                *per_day.entry(session.date.date_naive()).or_insert(0) +=
                    session.duration_minutes as u64;
            }
            per_day
                .into_iter()
                .map(|(day, minutes)| TimeSeriesPoint {
                    label: day.format("%Y-%m-%d").to_string(),
                    minutes,
                })
                .collect()
        }
    }
}

/// 主界面统计面板数据
pub fn overview(sessions: &[StudySession]) -> StoreOverview {
    let total = total_minutes(sessions);
    StoreOverview {
        session_count: sessions.len(),
        total_minutes: total,
        total_time_label: format_minutes(total),
    }
}

/// 把分钟数格式化为 "2h 5min" / "45 min"
pub fn format_minutes(total: u64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{}h {}min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}

/// 取分组里的最大项，总时长相同时保留先出现的
fn pick_max(totals: &IndexMap<String, u64>) -> Option<SubjectTotal> {
    let mut best: Option<(&str, u64)> = None;
    for (subject, minutes) in totals {
        match best {
            Some((_, top)) if top >= *minutes => {}
            _ => best = Some((subject, *minutes)),
        }
    }
    best.map(|(subject, minutes)| SubjectTotal {
        subject: subject.to_string(),
        minutes,
    })
}
