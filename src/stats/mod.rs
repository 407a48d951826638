//! 聚合查询模块
//!
//! 对内存中的记录序列做只读的单遍聚合，不做任何 I/O。
//! 所有结果类型都可序列化，壳层可以直接交给图表组件渲染
//! （科目占比对应饼图，时间序列对应柱状图）。

mod queries;
mod types;

pub use queries::{
    average_productivity, format_minutes, most_studied_subject, overview,
    subject_distribution, time_series, total_minutes, totals_by_subject, weekly_summary,
};
pub use types::{
    StoreOverview, SubjectShare, SubjectTotal, TimeBucket, TimeSeriesPoint, WeeklySummary,
};
