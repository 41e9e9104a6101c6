//! 类型解析器

use crate::registry::InstanceRegistry;
use di_abstractions::DependencyResolver;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::trace;

/// 按精确运行时类型扫描注册表的解析器
///
/// 先普通注册表后树节点注册表，分类内按插入顺序，返回第一个类型完全相同的实例。
/// 不做子类型或 trait 对象匹配。
pub struct TypeResolver<'a> {
    registry: &'a RwLock<InstanceRegistry>,
}

impl<'a> TypeResolver<'a> {
    /// 基于注册表创建解析器
    pub fn new(registry: &'a RwLock<InstanceRegistry>) -> Self {
        Self { registry }
    }

    /// 解析指定类型的实例
    pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.resolve_by_type_id(TypeId::of::<T>())
            .and_then(|instance| instance.downcast::<T>().ok())
    }
}

impl DependencyResolver for TypeResolver<'_> {
    fn resolve_by_type_id(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        let registry = self.registry.read();
        let entry = registry.find(type_id)?;
        trace!("解析类型: {} ({})", entry.type_info(), entry.category());
        entry.instance()
    }
}
