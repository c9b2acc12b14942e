// 驱动配置的不透明传递

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 驱动配置映射
///
/// 调用方通过 Logger 透传给驱动构造函数的键值配置，Logger 本身不解释
/// 其中的内容，能识别哪些键由具体驱动决定（例如文件驱动的 `path`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy {
    options: serde_json::Map<String, JsonValue>,
}

impl Policy {
    /// 创建空配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置配置项
    ///
    /// # 示例
    ///
    /// ```ignore
    /// let policy = Policy::new().with("path", "logs/app.log");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// 获取配置项
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.options.get(key)
    }

    /// 配置是否为空
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// 导出为 JSON 对象，供驱动配置反序列化使用
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.options.clone())
    }

    /// 从 JSON 字符串创建 Policy（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        // 使用 json5 解析（支持注释、尾随逗号、未引用的键等）
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建 Policy
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建 Policy
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 导出为 YAML 字符串
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// 导出为 TOML 字符串
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
