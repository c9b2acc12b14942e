//! TraceLog - 带关联 ID 的缓冲日志库
//!
//! 提供先缓冲后刷出的日志能力：日志行在内存中累积并统一携带关联 ID，
//! 由调用方决定何时通过按名称解析的写出驱动刷出。
//!
//! # 特性
//!
//! - 六个日志级别：Debug, Info, Notice, Warning, Alert, Fatal
//! - 内存缓冲，刷出时机由调用方掌握
//! - 关联 ID 首次设置生效，未设置时首次记录惰性生成
//! - 可插拔写出驱动：内置 file / console，支持注册自定义驱动
//! - 非字符串载荷通过 LogMessage 能力渲染
//! - 标准 log 门面桥接
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use tracelog::{Logger, Policy};
//!
//! fn main() -> Result<(), tracelog::LogError> {
//!     let logger = Logger::new();
//!     logger.set_correlation_id("req-42");
//!
//!     // 记录到缓冲区
//!     logger.info("Application started");
//!     logger.warning("Disk almost full");
//!
//!     // 缓冲区整体刷出到 file 驱动
//!     logger.flush("file", &Policy::new().with("path", "logs/app.log"))?;
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod driver;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod message;
pub mod policy;

// 重新导出主要的公共 API
pub use bridge::LogBridge;
pub use error::LogError;
pub use level::Level;
pub use logger::Logger;
pub use message::{Dump, LogMessage};
pub use policy::Policy;

pub use driver::{
    register_builtin_drivers, register_driver, resolve_driver, ConsoleDriver, ConsoleDriverConfig,
    FileDriver, FileDriverConfig, Target, WriteDriver,
};

// 重新导出全局 Logger 的便捷方法
pub use global::{
    alert, clear, correlation_id, debug, fatal, flush, get_log, global_logger, info, notice,
    record, set_correlation_id, warning, write_immediate,
};
