//! 日志初始化
//!
//! 壳层启动时调用一次；重复调用是无害的空操作。

use tracing::Level;

/// 初始化全局 fmt 订阅器
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .try_init();
}
