//! # 基础设施组合层
//!
//! 负责把注入容器与宿主环境、配置、日志组合成一个可运行的整体。
//!
//! ## 主要功能
//!
//! - **配置加载**: 从可选的 TOML 文件与环境变量读取 [`ContainerConfig`] 与 [`LoggingConfig`]
//! - **日志初始化**: 按 `[logging]` 段或 `RUST_LOG` 安装 `tracing` 订阅者
//! - **容器启动**: 创建容器并执行批量发现与绑定
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_abstractions::DiContainer;
//! use di_impl::SceneGraph;
//! use infrastructure_composition::ContainerBootstrapper;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scene = Arc::new(SceneGraph::new());
//!
//!     let bootstrapped = ContainerBootstrapper::new(scene)
//!         .with_config_file("config/container.toml")
//!         .with_configured_logging()
//!         .bootstrap()?;
//!
//!     println!("已注册组件: {}", bootstrapped.container.registered_components().len());
//!     Ok(())
//! }
//! ```
//!
//! [`ContainerConfig`]: di_abstractions::ContainerConfig

pub mod bootstrapper;
pub mod config_loader;
pub mod logging;


// 重新导出主要类型
pub use bootstrapper::{BootstrappedContainer, ContainerBootstrapper};
pub use config_loader::{ContainerConfigLoader, LoadedConfig, DEFAULT_ENV_PREFIX};
pub use logging::{LogFormat, LoggingConfig};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
