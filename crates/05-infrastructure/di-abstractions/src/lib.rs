//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义单例注册、类型解析与字段注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`Injectable`] - 可注入组件，显式声明能力并接收依赖
//! - [`Inject`] - 标记为需要注入的依赖字段
//! - [`DependencyResolver`] - 按精确类型解析已注册实例
//! - [`DiContainer`] - 容器对外提供的全部操作
//! - [`ComponentHost`] - 宿主环境协作接口（候选类型、活动节点、子节点枚举）

pub mod container;
pub mod discovery;
pub mod host;
pub mod inject;
pub mod injectable;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use discovery::*;
pub use host::*;
pub use inject::*;
pub use injectable::*;
pub use registry::*;
pub use resolver::*;

// 派生宏生成的代码只依赖本 crate 的路径
pub use infrastructure_common::{
    Capabilities, Capability, DependencyError, DependencyResult, TypeInfo,
};
