use crate::driver::WriteDriver;
use crate::error::LogError;
use crate::logger::LINE_SEP;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// FileDriver 配置
#[derive(Debug, Clone, Deserialize)]
pub struct FileDriverConfig {
    /// 日志文件路径（追加写入）
    pub path: String,
}

/// 文件写入驱动
///
/// 以追加模式打开目标文件，每次写入后补一个平台换行符并刷盘，
/// 保证连续多次 flush 的内容仍然按行可读
pub struct FileDriver {
    file: Mutex<File>,
    config: FileDriverConfig,
}

impl FileDriver {
    /// 从配置创建 FileDriver
    ///
    /// 父目录不存在时自动创建，文件打开失败返回 IO 错误
    pub fn new(config: FileDriverConfig) -> Result<Self, LogError> {
        let path = PathBuf::from(&config.path);

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            file: Mutex::new(file),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.path
    }
}

impl WriteDriver for FileDriver {
    fn write(&self, text: &str) -> Result<(), LogError> {
        let mut file = self.file.lock().unwrap();
        file.write_all(text.as_bytes())?;
        file.write_all(LINE_SEP.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
