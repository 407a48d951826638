//! 激励文案与展示标签
//!
//! 记录保存成功后壳层会弹出一条随机激励语；专注度滑块旁展示等级标签。

use rand::seq::SliceRandom;

/// 激励语池
pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "Great job! Keep up the excellent work!",
    "You're making amazing progress!",
    "Consistency is key - you're doing fantastic!",
    "Every study session brings you closer to your goals!",
    "Your dedication is impressive! Keep it up!",
    "Learning is a journey, and you're on the right path!",
    "Proud of your commitment to learning!",
    "Small steps lead to big achievements!",
    "Your hard work will pay off!",
    "Stay focused, stay motivated!",
    "You're building great study habits!",
    "Knowledge is power, and you're gaining it!",
];

/// 随机挑选一条激励语
pub fn random_message() -> &'static str {
    MOTIVATIONAL_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Great job! Keep up the excellent work!")
}

/// 专注度等级的展示标签，未知等级回落到 "3 - Good"
pub fn productivity_label(level: u8) -> &'static str {
    match level {
        1 => "1 - Very Low",
        2 => "2 - Low",
        3 => "3 - Good",
        4 => "4 - High",
        5 => "5 - Excellent",
        _ => "3 - Good",
    }
}
