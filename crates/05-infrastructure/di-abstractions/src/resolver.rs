//! 依赖解析接口

use std::any::{Any, TypeId};
use std::sync::Arc;

/// 依赖解析器 trait
///
/// 按精确的运行时类型查找已注册实例，找不到时返回 `None`。
pub trait DependencyResolver {
    /// 解析指定类型的实例（使用 TypeId）
    fn resolve_by_type_id(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;
}

impl<'a> dyn DependencyResolver + 'a {
    /// 解析指定类型的实例
    pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.resolve_by_type_id(TypeId::of::<T>())
            .and_then(|instance| instance.downcast::<T>().ok())
    }
}
