//! 驱动注册表
//!
//! 以名称索引驱动工厂函数，解析时不区分大小写。
//! 内置的 file / console 驱动在首次解析前自动注册

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Once, RwLock};

use crate::driver::{ConsoleDriver, ConsoleDriverConfig, FileDriver, WriteDriver};
use crate::error::LogError;
use crate::policy::Policy;

// 工厂函数类型：从 Policy 构造驱动实例
type DriverFactory = Box<dyn Fn(&Policy) -> Result<Box<dyn WriteDriver>, LogError> + Send + Sync>;

// 全局注册表
static DRIVER_REGISTRY: Lazy<RwLock<HashMap<String, DriverFactory>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static REGISTER_ONCE: Once = Once::new();

/// 注册驱动实现
///
/// `build` 是从配置构造驱动的函数，Policy 会先反序列化成 `Config` 再传入。
/// 名称统一转为小写存储，重复注册覆盖之前的实现
///
/// # 示例
/// ```ignore
/// register_driver("file", FileDriver::new);
/// ```
pub fn register_driver<D, Config, F>(name: &str, build: F)
where
    D: WriteDriver + 'static,
    Config: DeserializeOwned,
    F: Fn(Config) -> Result<D, LogError> + Send + Sync + 'static,
{
    let name = name.to_lowercase();

    let factory: DriverFactory = {
        let name = name.clone();
        Box::new(move |policy| {
            let config: Config =
                serde_json::from_value(policy.to_value()).map_err(|err| LogError::InvalidPolicy {
                    driver: name.clone(),
                    source: err,
                })?;
            let driver = build(config)?;
            Ok(Box::new(driver) as Box<dyn WriteDriver>)
        })
    };

    let mut registry = DRIVER_REGISTRY.write().unwrap();
    registry.insert(name, factory);
}

/// 按名称解析驱动并用 Policy 实例化
///
/// 名称不区分大小写，未注册的名称返回 [`LogError::UnknownDriver`]
pub fn resolve_driver(name: &str, policy: &Policy) -> Result<Box<dyn WriteDriver>, LogError> {
    REGISTER_ONCE.call_once(register_builtin_drivers);

    let name = name.to_lowercase();
    let registry = DRIVER_REGISTRY.read().unwrap();

    let factory = registry
        .get(&name)
        .ok_or_else(|| LogError::UnknownDriver(name.clone()))?;

    factory(policy)
}

/// 注册内置驱动
pub fn register_builtin_drivers() {
    register_driver("file", FileDriver::new);
    register_driver("console", |config: ConsoleDriverConfig| {
        Ok(ConsoleDriver::new(config))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_file_driver() -> Result<(), LogError> {
        let temp_file = tempfile::NamedTempFile::new()?;
        let policy = Policy::new().with("path", temp_file.path().to_string_lossy().to_string());

        let driver = resolve_driver("file", &policy)?;
        driver.write("message through registry")?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        assert!(contents.contains("message through registry"));

        Ok(())
    }

    #[test]
    fn test_resolve_console_driver() -> Result<(), LogError> {
        let driver = resolve_driver("console", &Policy::new())?;
        driver.write("message to console")?;

        let policy = Policy::new().with("target", "stderr");
        let driver = resolve_driver("console", &policy)?;
        driver.write("message to stderr")?;

        Ok(())
    }

    #[test]
    fn test_resolve_case_insensitive() -> Result<(), LogError> {
        let temp_file = tempfile::NamedTempFile::new()?;
        let policy = Policy::new().with("path", temp_file.path().to_string_lossy().to_string());

        // 注册表按小写存储，任意大小写都能命中
        resolve_driver("FILE", &policy)?;
        resolve_driver("File", &policy)?;
        resolve_driver("CONSOLE", &Policy::new())?;

        Ok(())
    }

    #[test]
    fn test_resolve_unknown_driver() {
        let err = resolve_driver("kafka", &Policy::new()).unwrap_err();
        assert_eq!(err.to_string(), "Log Driver [kafka] does not exist.");

        // 错误消息中的名称同样是小写形式
        let err = resolve_driver("Kafka", &Policy::new()).unwrap_err();
        assert_eq!(err.to_string(), "Log Driver [kafka] does not exist.");
    }

    #[test]
    fn test_resolve_invalid_policy() {
        // file 驱动缺少 path 配置
        let err = resolve_driver("file", &Policy::new()).unwrap_err();
        assert!(matches!(err, LogError::InvalidPolicy { .. }));
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_register_custom_driver() -> Result<(), LogError> {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct NullDriverConfig {
            #[serde(default)]
            enabled: bool,
        }

        struct NullDriver {
            #[allow(dead_code)]
            enabled: bool,
        }

        impl WriteDriver for NullDriver {
            fn write(&self, _text: &str) -> Result<(), LogError> {
                Ok(())
            }
        }

        register_driver("null", |config: NullDriverConfig| {
            Ok(NullDriver {
                enabled: config.enabled,
            })
        });

        let policy = Policy::new().with("enabled", true);
        let driver = resolve_driver("null", &policy)?;
        driver.write("discarded")?;

        // 自定义名称同样不区分大小写
        resolve_driver("NULL", &policy)?;

        Ok(())
    }

    #[test]
    fn test_register_overrides_existing() -> Result<(), LogError> {
        use serde::Deserialize;
        use std::sync::atomic::{AtomicUsize, Ordering};

        static WRITES: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug, Deserialize)]
        struct CountingDriverConfig {}

        struct CountingDriver;

        impl WriteDriver for CountingDriver {
            fn write(&self, _text: &str) -> Result<(), LogError> {
                WRITES.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        register_driver("override-test", |_: CountingDriverConfig| Ok(CountingDriver));
        // 重复注册覆盖之前的实现
        register_driver("override-test", |_: CountingDriverConfig| Ok(CountingDriver));

        let driver = resolve_driver("override-test", &Policy::new())?;
        driver.write("counted")?;
        assert_eq!(WRITES.load(Ordering::SeqCst), 1);

        Ok(())
    }
}
