//! Study Tracker 桌面应用后端
//!
//! 为桌面壳层提供学习记录的存储与统计能力：
//! - [`store`]：JSON 数组落盘的记录存储（载入/追加/清空/CSV 导出）
//! - [`stats`]：对内存记录序列的纯聚合查询（科目分布、周报、时间序列）
//! - [`motivation`]：保存成功后展示的激励文案
//!
//! 窗体交互与图表渲染由外部壳层负责，本库只产出可序列化的数据。

pub mod logging;
pub mod motivation;
pub mod stats;
pub mod store;

pub use store::{SessionStore, StoreError, StudySession};
