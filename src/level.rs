use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 日志级别
///
/// 按严重程度从低到高排序，文本形式为小写（与日志行格式一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// 调试信息
    Debug = 0,
    /// 一般信息
    Info = 1,
    /// 需要注意的事件
    Notice = 2,
    /// 警告信息
    Warning = 3,
    /// 需要立即处理的问题
    Alert = 4,
    /// 致命错误
    Fatal = 5,
}

impl Level {
    /// 级别的小写文本形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Alert => "alert",
            Level::Fatal => "fatal",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warning" => Ok(Level::Warning),
            "alert" => Ok(Level::Alert),
            "fatal" => Ok(Level::Fatal),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// log facade 级别到本地级别的映射
///
/// Notice 和 Alert 没有 facade 对应级别，只能通过本地 API 记录
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Fatal,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
