//! 日志宏
//!
//! 面向显式 Logger 实例的级别宏，支持格式化参数
//!
//! # 示例
//!
//! ```ignore
//! let logger = Logger::new();
//!
//! // 简单日志
//! info!(logger, "application started");
//!
//! // 带格式化参数的日志
//! info!(logger, "user {} logged in", name);
//! ```

/// 记录 DEBUG 级别日志
///
/// # 示例
///
/// ```ignore
/// debug!(logger, "processing request");
/// debug!(logger, "processing {} items", count);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.debug($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.debug(format!($fmt, $($arg)+))
    };
}

/// 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// info!(logger, "user logged in");
/// info!(logger, "user {} logged in", name);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.info($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.info(format!($fmt, $($arg)+))
    };
}

/// 记录 NOTICE 级别日志
///
/// # 示例
///
/// ```ignore
/// notice!(logger, "configuration reloaded");
/// notice!(logger, "switched to replica {}", replica);
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.notice($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.notice(format!($fmt, $($arg)+))
    };
}

/// 记录 WARNING 级别日志
///
/// # 示例
///
/// ```ignore
/// warning!(logger, "high memory usage");
/// warning!(logger, "slow query took {}ms", duration);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.warning($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.warning(format!($fmt, $($arg)+))
    };
}

/// 记录 ALERT 级别日志
///
/// # 示例
///
/// ```ignore
/// alert!(logger, "replication lag above threshold");
/// alert!(logger, "queue depth {} exceeds limit", depth);
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.alert($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.alert(format!($fmt, $($arg)+))
    };
}

/// 记录 FATAL 级别日志
///
/// # 示例
///
/// ```ignore
/// fatal!(logger, "database connection failed");
/// fatal!(logger, "cannot bind port {}", port);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $msg:expr $(,)?) => {
        $logger.fatal($msg)
    };
    ($logger:expr, $fmt:expr, $($arg:tt)+) => {
        $logger.fatal(format!($fmt, $($arg)+))
    };
}

#[cfg(test)]
mod tests {
    // 宏直接展开成 Logger 的方法调用
    // 作为导出宏的测试在 tests/test_macros.rs 中进行
}
