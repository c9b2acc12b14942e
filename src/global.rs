use crate::error::LogError;
use crate::level::Level;
use crate::logger::Logger;
use crate::message::LogMessage;
use crate::policy::Policy;
use std::sync::Arc;

/// 全局 Logger 单例
///
/// 保留"一个进程一个日志器"的使用方式，测试和库代码仍然可以自建实例
static GLOBAL_LOGGER: once_cell::sync::Lazy<Arc<Logger>> =
    once_cell::sync::Lazy::new(|| Arc::new(Logger::new()));

/// 获取全局 Logger
pub fn global_logger() -> Arc<Logger> {
    Arc::clone(&GLOBAL_LOGGER)
}

// ========== 全局便捷方法 ==========

/// 设置全局关联 ID（只有第一次的非空设置生效）
pub fn set_correlation_id(id: impl Into<String>) {
    global_logger().set_correlation_id(id)
}

/// 获取全局关联 ID
pub fn correlation_id() -> Option<String> {
    global_logger().correlation_id().map(str::to_string)
}

/// 使用全局 Logger 记录日志
pub fn record(message: impl LogMessage, level: Level) {
    global_logger().record(message, level)
}

/// 使用全局 Logger 记录 DEBUG 级别日志
pub fn debug(message: impl LogMessage) {
    global_logger().debug(message)
}

/// 使用全局 Logger 记录 INFO 级别日志
pub fn info(message: impl LogMessage) {
    global_logger().info(message)
}

/// 使用全局 Logger 记录 NOTICE 级别日志
pub fn notice(message: impl LogMessage) {
    global_logger().notice(message)
}

/// 使用全局 Logger 记录 WARNING 级别日志
pub fn warning(message: impl LogMessage) {
    global_logger().warning(message)
}

/// 使用全局 Logger 记录 ALERT 级别日志
pub fn alert(message: impl LogMessage) {
    global_logger().alert(message)
}

/// 使用全局 Logger 记录 FATAL 级别日志
pub fn fatal(message: impl LogMessage) {
    global_logger().fatal(message)
}

/// 把全局 Logger 的缓冲区刷出到指定驱动
pub fn flush(driver_name: &str, policy: &Policy) -> Result<(), LogError> {
    global_logger().flush(driver_name, policy)
}

/// 绕过缓冲区直接写出一条消息（全局）
pub fn write_immediate(
    message: impl LogMessage,
    driver_name: &str,
    policy: &Policy,
) -> Result<(), LogError> {
    global_logger().write_immediate(message, driver_name, policy)
}

/// 清空全局 Logger 的缓冲区
pub fn clear() {
    global_logger().clear()
}

/// 获取全局 Logger 的缓冲区快照
pub fn get_log() -> Vec<String> {
    global_logger().get_log()
}
