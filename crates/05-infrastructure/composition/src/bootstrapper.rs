//! 容器启动器

use crate::config_loader::{ContainerConfigLoader, LoadedConfig};
use crate::logging::LoggingConfig;
use di_abstractions::{BindingReport, ComponentHost, ContainerConfig, DiContainer, NoHost};
use di_impl::DiContainerImpl;
use infrastructure_common::InfrastructureError;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// 启动完成的容器
#[derive(Debug)]
pub struct BootstrappedContainer {
    /// 已绑定的容器
    pub container: DiContainerImpl,
    /// 批量绑定结果，未执行批量发现时为 `None`
    pub report: Option<BindingReport>,
}

/// 日志初始化方式
#[derive(Debug, Clone)]
enum LoggingSetup {
    /// 不安装订阅者
    Disabled,
    /// 使用配置中的 `[logging]` 段
    FromConfig,
    /// 使用指定配置，忽略 `[logging]` 段
    Explicit(LoggingConfig),
}

/// 容器启动器
///
/// 按顺序完成：配置加载 → 日志初始化 → 容器创建 → 批量发现与绑定
pub struct ContainerBootstrapper {
    host: Arc<dyn ComponentHost>,
    loader: ContainerConfigLoader,
    config: Option<ContainerConfig>,
    logging: LoggingSetup,
    discover: bool,
}

impl ContainerBootstrapper {
    /// 使用宿主环境创建启动器
    pub fn new(host: Arc<dyn ComponentHost>) -> Self {
        Self {
            host,
            loader: ContainerConfigLoader::new(),
            config: None,
            logging: LoggingSetup::Disabled,
            discover: true,
        }
    }

    /// 没有宿主环境的启动器
    pub fn without_host() -> Self {
        Self::new(Arc::new(NoHost))
    }

    /// 添加 TOML 配置文件
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.loader = self.loader.with_file(path);
        self
    }

    /// 设置环境变量前缀
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.loader = self.loader.with_env_prefix(prefix);
        self
    }

    /// 直接使用给定的容器配置，不再读取 `[container]` 段
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 按配置中的 `[logging]` 段初始化日志
    pub fn with_configured_logging(mut self) -> Self {
        self.logging = LoggingSetup::FromConfig;
        self
    }

    /// 使用指定的日志配置
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging = LoggingSetup::Explicit(config);
        self
    }

    /// 是否在启动时执行批量发现
    pub fn with_discovery(mut self, enabled: bool) -> Self {
        self.discover = enabled;
        self
    }

    /// 使用的配置加载器
    pub fn loader(&self) -> &ContainerConfigLoader {
        &self.loader
    }

    /// 解析最终生效的配置
    ///
    /// 只有需要读取配置段时才访问文件与环境变量。
    pub fn resolve_config(&self) -> Result<LoadedConfig, InfrastructureError> {
        let needs_file_logging = matches!(self.logging, LoggingSetup::FromConfig);
        let mut loaded = if self.config.is_some() && !needs_file_logging {
            LoadedConfig::default()
        } else {
            self.loader.load()?
        };

        if let Some(config) = &self.config {
            loaded.container = config.clone();
        }
        if let LoggingSetup::Explicit(logging) = &self.logging {
            loaded.logging = logging.clone();
        }
        Ok(loaded)
    }

    /// 启动容器
    pub fn bootstrap(self) -> Result<BootstrappedContainer, InfrastructureError> {
        let LoadedConfig { container: config, logging } = self.resolve_config()?;

        if !matches!(self.logging, LoggingSetup::Disabled) {
            logging.init()?;
        }

        info!("开始启动注入容器: {}", config.name);
        let container = DiContainerImpl::with_config(self.host, config);

        let report = if self.discover {
            let report = container.discover_and_bind_all().map_err(|e| {
                error!("批量绑定失败: {}", e);
                InfrastructureError::from(e)
            })?;
            Some(report)
        } else {
            None
        };

        info!("注入容器启动完成: {:?}", container.stats());
        Ok(BootstrappedContainer { container, report })
    }
}

impl Default for ContainerBootstrapper {
    fn default() -> Self {
        Self::without_host()
    }
}
