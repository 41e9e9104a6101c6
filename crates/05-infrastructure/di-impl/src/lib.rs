//! # 依赖注入具体实现
//!
//! 提供单例注册表、类型解析器、字段注入器与注册编排器，
//! 以及组合它们的 [`DiContainerImpl`]。
//!
//! ## 数据流
//!
//! [`Binder`] 发现或接收对象 → 按能力声明存入 [`InstanceRegistry`] →
//! 对每个实例调用 [`Injector`] → [`Injector`] 通过 [`TypeResolver`] 满足每个依赖字段。
//!
//! ## 基本使用
//!
//! ```rust
//! use di_abstractions::{
//!     Capabilities, DependencyResolver, DependencyResult, DiContainer, Inject, Injectable,
//! };
//! use di_impl::DiContainerImpl;
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Clock;
//!
//! impl Injectable for Clock {
//!     fn declared_capabilities() -> Capabilities { Capabilities::GLOBAL }
//!     fn capabilities(&self) -> Capabilities { Capabilities::GLOBAL }
//!     fn inject_dependencies(&self, _: &dyn DependencyResolver) -> DependencyResult<()> { Ok(()) }
//!     fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> { self }
//! }
//!
//! #[derive(Default)]
//! struct Scheduler {
//!     clock: Inject<Clock>,
//! }
//!
//! impl Injectable for Scheduler {
//!     fn declared_capabilities() -> Capabilities { Capabilities::NONE }
//!     fn capabilities(&self) -> Capabilities { Capabilities::NONE }
//!     fn inject_dependencies(&self, resolver: &dyn DependencyResolver) -> DependencyResult<()> {
//!         self.clock.resolve_from(resolver)
//!     }
//!     fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> { self }
//! }
//!
//! let container = DiContainerImpl::new();
//! container.register(Arc::new(Clock)).unwrap();
//!
//! let scheduler = Arc::new(Scheduler::default());
//! container.register(scheduler.clone()).unwrap();
//! assert!(scheduler.clock.is_injected());
//! ```

pub mod binder;
pub mod container;
pub mod injector;
pub mod registry;
pub mod resolver;
pub mod scene;


pub use binder::Binder;
pub use container::DiContainerImpl;
pub use injector::{collect_injectable_descendants, Injector};
pub use registry::{InstanceRegistry, RegistryEntry};
pub use resolver::TypeResolver;
pub use scene::{NodeId, SceneGraph};
