//! # Infrastructure Common
//!
//! 这个 crate 提供了注入容器各层共用的基础类型。
//!
//! ## 核心类型
//!
//! - [`Capability`] / [`Capabilities`] - 组件能力声明
//! - [`TypeInfo`] - 类型元数据，作为注册表的类型键
//! - [`DependencyError`] - 依赖注入错误
//! - [`InfrastructureError`] - 组合层错误
//!
//! ## 设计原则
//!
//! - 能力在编译期显式声明，不依赖运行时反射
//! - 以 `TypeId` 精确匹配类型

pub mod component;
pub mod errors;
pub mod metadata;

pub use component::*;
pub use errors::*;
pub use metadata::*;
