//! 日志初始化
//!
//! 日志配置位于配置文件的 `[logging]` 段：
//!
//! ```toml
//! [logging]
//! level = "info,di_impl=debug"
//! format = "json"
//! show_source = false
//! ```
//!
//! 设置了 `RUST_LOG` 时以它为准，`level` 只作为缺省过滤规则。

use infrastructure_common::InfrastructureError;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 人类可读的多列文本
    #[default]
    Pretty,
    /// 每行一个 JSON 对象
    Json,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 缺省过滤规则，语法同 `RUST_LOG`
    pub level: String,
    /// 输出格式
    pub format: LogFormat,
    /// 是否输出源文件与行号
    pub show_source: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            show_source: false,
        }
    }
}

impl LoggingConfig {
    /// 本地调试：容器内部的解析与注入过程全部可见
    pub fn development() -> Self {
        Self {
            level: "info,di_impl=debug,infrastructure_composition=debug".to_string(),
            format: LogFormat::Pretty,
            show_source: true,
        }
    }

    /// 部署环境：只保留注册与绑定摘要，输出 JSON
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            show_source: false,
        }
    }

    /// 生效的过滤规则：`RUST_LOG` 优先，否则使用 `level`
    pub fn filter(&self) -> Result<EnvFilter, InfrastructureError> {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directives) if !directives.trim().is_empty() => parse_filter(&directives),
            _ => parse_filter(&self.level),
        }
    }

    /// 安装全局订阅者
    ///
    /// 每个进程只能成功一次，重复调用返回 `BootstrapFailed`。
    pub fn init(&self) -> Result<(), InfrastructureError> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter()?)
            .with_file(self.show_source)
            .with_line_number(self.show_source);

        let installed = match self.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        installed.map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志订阅者安装失败: {e}"),
        })?;

        info!("日志已启用: level={}, format={:?}", self.level, self.format);
        Ok(())
    }
}

/// 解析过滤规则
pub(crate) fn parse_filter(directives: &str) -> Result<EnvFilter, InfrastructureError> {
    EnvFilter::try_new(directives).map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("无效的日志过滤规则 \"{directives}\": {e}"),
    })
}
