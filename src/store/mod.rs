//! 学习记录存储模块
//!
//! 负责学习记录的落盘表示：单个 JSON 文件保存一个记录数组，
//! 打开时整体载入内存，每次变更整体重写。
//!
//! ```text
//! ~/.studytrack/
//! ├── study_data.json     # 记录数组（追加顺序即存储顺序）
//! └── ...                 # CSV 导出目标由调用方指定
//! ```

mod error;
mod export;
mod storage;
mod types;

pub use error::StoreError;
pub use storage::SessionStore;
pub use types::StudySession;
