//! log 门面桥接
//!
//! 把标准 `log` 门面的记录转发到 [`Logger`] 的缓冲区，
//! 让依赖 `log::info!` 等宏的第三方代码也能进入同一条刷出路径。
//! 门面级别按 [`Level`] 的 `From<log::Level>` 实现映射

use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

/// `log::Log` 实现，持有目标 [`Logger`]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// 把桥接器安装为进程级门面日志器
    ///
    /// 只能安装一次，之后所有 `log` 宏的输出都会进入目标 Logger 的缓冲区
    pub fn install(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        self.logger.record(message, Level::from(record.level()));
    }

    // 刷出时机由 Logger 的持有者显式决定
    fn flush(&self) {}
}
