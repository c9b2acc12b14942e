use thiserror::Error;

/// 日志模块统一错误类型
///
/// flush / write_immediate 是仅有的可失败入口，错误同步返回给调用方，
/// 不重试也不吞掉
#[derive(Error, Debug)]
pub enum LogError {
    /// 驱动名称没有对应的注册实现（名称已转为小写）
    #[error("Log Driver [{0}] does not exist.")]
    UnknownDriver(String),

    /// policy 无法反序列化为驱动的配置类型
    #[error("Invalid policy for driver [{driver}]: {source}")]
    InvalidPolicy {
        driver: String,
        #[source]
        source: serde_json::Error,
    },

    /// 驱动内部的 IO 失败，原样向上传递
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 第三方驱动错误
    #[error("Driver [{driver}] error: {message}")]
    Driver {
        driver: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LogError {
    /// 从第三方驱动错误转换
    pub fn from_driver<E>(err: E, driver: &str, context: &str) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LogError::Driver {
            driver: driver.to_string(),
            message: context.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
