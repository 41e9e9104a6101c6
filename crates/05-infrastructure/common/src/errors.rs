//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("类型 \"{type_name}\" 未添加到注入器")]
    MissingDependency { type_name: String },

    #[error("依赖尚未注入: {type_name}")]
    NotInjected { type_name: String },

    #[error("组件实例化失败: {type_name}, 原因: {message}")]
    InstantiationFailed { type_name: String, message: String },
}

impl DependencyError {
    /// 创建缺失依赖错误
    pub fn missing<T: ?Sized + 'static>() -> Self {
        Self::MissingDependency {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// 创建未注入错误
    pub fn not_injected<T: ?Sized + 'static>() -> Self {
        Self::NotInjected {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// 创建实例化失败错误
    pub fn instantiation_failed<T: ?Sized + 'static>(message: impl Into<String>) -> Self {
        Self::InstantiationFailed {
            type_name: std::any::type_name::<T>().to_string(),
            message: message.into(),
        }
    }

    /// 错误涉及的类型名称
    pub fn type_name(&self) -> &str {
        match self {
            Self::MissingDependency { type_name }
            | Self::NotInjected { type_name }
            | Self::InstantiationFailed { type_name, .. } => type_name,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
