//! 候选类型描述
//!
//! 批量发现阶段由宿主提供候选类型，容器按能力过滤后默认构造实例

use crate::injectable::{Injectable, NodeRef};
use infrastructure_common::{Capabilities, TypeInfo};
use std::fmt;
use std::sync::Arc;

/// 候选类型工厂函数，返回 `None` 表示无法构造
pub type CandidateFactory = Arc<dyn Fn() -> Option<NodeRef> + Send + Sync>;

/// 候选类型
#[derive(Clone)]
pub struct CandidateType {
    type_info: TypeInfo,
    capabilities: Capabilities,
    factory: CandidateFactory,
}

impl CandidateType {
    /// 使用 `Default` 构造的候选类型
    pub fn of<T: Injectable + Default>() -> Self {
        Self::with_factory(|| Some(Arc::new(T::default())))
    }

    /// 使用自定义工厂的候选类型
    pub fn with_factory<T, F>(factory: F) -> Self
    where
        T: Injectable,
        F: Fn() -> Option<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            type_info: TypeInfo::of::<T>(),
            capabilities: T::declared_capabilities(),
            factory: Arc::new(move || factory().map(|instance| instance as NodeRef)),
        }
    }

    /// 类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 类型声明的能力
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// 构造实例
    pub fn construct(&self) -> Option<NodeRef> {
        (self.factory)()
    }
}

impl fmt::Debug for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateType")
            .field("type_info", &self.type_info)
            .field("capabilities", &self.capabilities)
            .field("factory", &"<function>")
            .finish()
    }
}
