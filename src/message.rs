use serde_json::Value;
use std::fmt;

/// 日志消息渲染能力
///
/// 非字符串类型在进入日志缓冲前统一渲染为文本。字符串原样透传，
/// 基础类型使用 Display 形式，任意 Debug 类型可以通过 [`Dump`] 包装
/// 获得结构化的文本导出
pub trait LogMessage {
    /// 渲染为文本
    fn render(&self) -> String;
}

impl LogMessage for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl LogMessage for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl<M: LogMessage + ?Sized> LogMessage for &M {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// 为 Display 形式的基础类型批量实现 LogMessage
macro_rules! impl_display_message {
    ($($t:ty),* $(,)?) => {
        $(impl LogMessage for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_display_message!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl LogMessage for Value {
    fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

/// Debug 类型的文本导出适配器
///
/// 使用 `{:#?}` 渲染，适合把结构体、错误现场等直接倒进日志
///
/// # 示例
///
/// ```ignore
/// logger.debug(Dump(&request));
/// ```
pub struct Dump<T>(pub T);

impl<T: fmt::Debug> LogMessage for Dump<T> {
    fn render(&self) -> String {
        format!("{:#?}", self.0)
    }
}
