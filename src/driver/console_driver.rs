use crate::driver::WriteDriver;
use crate::error::LogError;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 控制台输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    Stderr,
}

/// ConsoleDriver 配置
#[derive(Debug, Clone, SmartDefault, Deserialize)]
pub struct ConsoleDriverConfig {
    /// 输出目标，默认标准输出
    #[default(Target::Stdout)]
    #[serde(default = "default_target")]
    pub target: Target,
}

fn default_target() -> Target {
    Target::Stdout
}

/// 控制台写入驱动
pub struct ConsoleDriver {
    config: ConsoleDriverConfig,
}

impl ConsoleDriver {
    pub fn new(config: ConsoleDriverConfig) -> Self {
        Self { config }
    }

    pub fn target(&self) -> Target {
        self.config.target
    }
}

impl WriteDriver for ConsoleDriver {
    fn write(&self, text: &str) -> Result<(), LogError> {
        match self.config.target {
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", text)?;
                stdout.flush()?;
            }
            Target::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", text)?;
                stderr.flush()?;
            }
        }
        Ok(())
    }
}
