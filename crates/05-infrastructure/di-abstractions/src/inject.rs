//! 依赖字段

use crate::resolver::DependencyResolver;
use infrastructure_common::{DependencyError, DependencyResult};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 需要容器注入的依赖字段
///
/// 字段初始为空，每次注入都会覆盖已有的值。
pub struct Inject<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> Inject<T> {
    /// 创建空字段
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 使用已有实例创建字段
    pub fn with(instance: Arc<T>) -> Self {
        Self {
            slot: RwLock::new(Some(instance)),
        }
    }

    /// 获取注入的实例
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().clone()
    }

    /// 写入实例，覆盖已有的值
    pub fn set(&self, instance: Arc<T>) {
        *self.slot.write() = Some(instance);
    }

    /// 是否已注入
    pub fn is_injected(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl<T: Any + Send + Sync> Inject<T> {
    /// 获取注入的实例，未注入时返回错误
    pub fn require(&self) -> DependencyResult<Arc<T>> {
        self.get().ok_or_else(DependencyError::not_injected::<T>)
    }

    /// 从解析器解析 `T` 并写入字段
    pub fn resolve_from(&self, resolver: &dyn DependencyResolver) -> DependencyResult<()> {
        let instance = resolver
            .resolve::<T>()
            .ok_or_else(DependencyError::missing::<T>)?;
        self.set(instance);
        Ok(())
    }
}

impl<T> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Self {
            slot: RwLock::new(self.get()),
        }
    }
}

impl<T> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("type", &std::any::type_name::<T>())
            .field("injected", &self.is_injected())
            .finish()
    }
}
