use crate::error::LogError;

/// 日志写入驱动 trait
///
/// 负责把格式化后的日志文本持久化到目标介质。构造由注册表根据
/// policy 完成，写入失败原样返回给调用方
pub trait WriteDriver: Send + Sync {
    /// 写入日志文本
    fn write(&self, text: &str) -> Result<(), LogError>;
}

impl std::fmt::Debug for dyn WriteDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WriteDriver")
    }
}
