//! 容器配置加载
//!
//! 配置来源按优先级从低到高：默认值、TOML 文件、环境变量。
//! 容器配置位于 `[container]` 段，日志配置位于 `[logging]` 段：
//!
//! ```toml
//! [container]
//! name = "scene"
//! report_skipped_candidates = true
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! 环境变量使用 `<前缀>_<段>__<字段>` 形式，例如 `DI_CONTAINER__NAME=scene`、
//! `DI_LOGGING__FORMAT=json`。

use crate::logging::LoggingConfig;
use di_abstractions::ContainerConfig;
use infrastructure_common::{ConfigError, InfrastructureError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// 默认的环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "DI";

/// 加载得到的全部配置段
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadedConfig {
    /// `[container]` 段
    pub container: ContainerConfig,
    /// `[logging]` 段
    pub logging: LoggingConfig,
}

/// 容器配置加载器
#[derive(Debug, Clone)]
pub struct ContainerConfigLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl ContainerConfigLoader {
    /// 创建只读取环境变量的加载器
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// 指定 TOML 配置文件，文件必须存在
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// 指定环境变量前缀
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// 配置文件路径
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// 环境变量前缀
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// 加载全部配置段
    pub fn load(&self) -> Result<LoadedConfig, InfrastructureError> {
        let mut builder = config::Config::builder();

        if let Some(path) = &self.file {
            if !path.exists() {
                error!("配置文件不存在: {}", path.display());
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }

            info!("加载容器配置文件: {}", path.display());
            builder = builder.add_source(
                config::File::from(path.as_path()).format(config::FileFormat::Toml),
            );
        }

        debug!("环境变量配置前缀: {}", self.env_prefix);
        let settings = builder
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(parse_error)?;

        let loaded: LoadedConfig = settings.try_deserialize().map_err(parse_error)?;
        debug!("容器配置: {:?}, 日志配置: {:?}", loaded.container, loaded.logging);
        Ok(loaded)
    }
}

impl Default for ContainerConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(e: config::ConfigError) -> InfrastructureError {
    error!("配置解析失败: {}", e);
    ConfigError::ParseError {
        source: Box::new(e),
    }
    .into()
}
