use crate::driver::resolve_driver;
use crate::error::LogError;
use crate::level::Level;
use crate::message::LogMessage;
use crate::policy::Policy;
use chrono::Local;
use once_cell::sync::OnceCell;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Mutex;

// 平台换行符，flush 拼接缓冲行和文件驱动补行尾时使用
#[cfg(windows)]
pub(crate) const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_SEP: &str = "\n";

/// 日志行时间戳格式
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 自动生成的关联 ID 长度
const CORRELATION_ID_LEN: usize = 16;

/// 带缓冲的日志器
///
/// 日志行先在内存缓冲区中累积，flush 时整体交给按名称解析的驱动写出。
/// 缓冲区由互斥锁保护，关联 ID 是一次性写入单元，
/// 因此同一个实例可以直接跨线程共享
///
/// # 示例
///
/// ```ignore
/// let logger = Logger::new();
/// logger.set_correlation_id("req-42");
/// logger.info("user logged in");
/// logger.flush("file", &Policy::new().with("path", "app.log"))?;
/// ```
#[derive(Default)]
pub struct Logger {
    buffer: Mutex<Vec<String>>,
    correlation_id: OnceCell<String>,
}

/// 渲染消息文本
///
/// 统一做首尾去空白；缓冲路径额外把 `\r\n`、`\r`、`\n` 各收敛成一个空格，
/// 保证缓冲区中的每个条目都是单行
fn format_message(message: impl LogMessage, preserve_line_breaks: bool) -> String {
    let rendered = message.render();
    let trimmed = rendered.trim();

    if preserve_line_breaks {
        trimmed.to_string()
    } else {
        trimmed
            .replace("\r\n", " ")
            .replace('\r', " ")
            .replace('\n', " ")
    }
}

/// 生成随机关联 ID
fn random_correlation_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CORRELATION_ID_LEN)
        .map(char::from)
        .collect()
}

impl Logger {
    /// 创建一个空日志器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置关联 ID
    ///
    /// 只有第一次的非空设置生效，之后的调用静默忽略。
    /// 从未设置时，首次记录日志会惰性生成一个随机 ID
    pub fn set_correlation_id(&self, id: impl Into<String>) {
        let id = id.into();
        if id.is_empty() {
            return;
        }
        let _ = self.correlation_id.set(id);
    }

    /// 获取当前关联 ID
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.get().map(String::as_str)
    }

    /// 记录一条日志到缓冲区
    ///
    /// 格式：`[时间戳] 级别: 消息 [关联 ID]`，时间戳取本地时间
    pub fn record(&self, message: impl LogMessage, level: Level) {
        let message = format_message(message, false);
        let correlation_id = self.correlation_id.get_or_init(random_correlation_id);

        let line = format!(
            "[{}] {}: {} [{}]",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message,
            correlation_id
        );

        self.buffer.lock().unwrap().push(line);
    }

    /// 记录 DEBUG 级别日志
    pub fn debug(&self, message: impl LogMessage) {
        self.record(message, Level::Debug);
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: impl LogMessage) {
        self.record(message, Level::Info);
    }

    /// 记录 NOTICE 级别日志
    pub fn notice(&self, message: impl LogMessage) {
        self.record(message, Level::Notice);
    }

    /// 记录 WARNING 级别日志
    pub fn warning(&self, message: impl LogMessage) {
        self.record(message, Level::Warning);
    }

    /// 记录 ALERT 级别日志
    pub fn alert(&self, message: impl LogMessage) {
        self.record(message, Level::Alert);
    }

    /// 记录 FATAL 级别日志
    pub fn fatal(&self, message: impl LogMessage) {
        self.record(message, Level::Fatal);
    }

    /// 把缓冲区刷出到指定驱动
    ///
    /// 空缓冲区直接返回 Ok，不触发驱动解析。
    /// 否则把缓冲行用平台换行符拼接后一次性交给驱动写出，
    /// 成功后只移除本次刷出的行，刷出期间新记录的行保留。
    /// 解析失败或写出失败时缓冲区保持原样
    pub fn flush(&self, driver_name: &str, policy: &Policy) -> Result<(), LogError> {
        let snapshot = {
            let buffer = self.buffer.lock().unwrap();
            if buffer.is_empty() {
                return Ok(());
            }
            buffer.clone()
        };

        let driver = resolve_driver(driver_name, policy)?;
        driver.write(&snapshot.join(LINE_SEP))?;

        let mut buffer = self.buffer.lock().unwrap();
        let flushed = snapshot.len().min(buffer.len());
        buffer.drain(..flushed);

        Ok(())
    }

    /// 绕过缓冲区直接写出一条消息
    ///
    /// 消息只做首尾去空白，内部换行原样保留，适合输出多行内容
    pub fn write_immediate(
        &self,
        message: impl LogMessage,
        driver_name: &str,
        policy: &Policy,
    ) -> Result<(), LogError> {
        let message = format_message(message, true);
        let driver = resolve_driver(driver_name, policy)?;
        driver.write(&message)
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        self.buffer.lock().unwrap().clear();
    }

    /// 获取缓冲区内容快照
    pub fn get_log(&self) -> Vec<String> {
        self.buffer.lock().unwrap().clone()
    }
}
