//! 可注入组件接口

use crate::resolver::DependencyResolver;
use infrastructure_common::{Capabilities, DependencyResult, TypeInfo};
use std::any::Any;
use std::sync::Arc;

/// 可注入组件 trait
///
/// 组件通过 [`Injectable::declared_capabilities`] 声明自己属于哪个注册表、是否向子节点级联，
/// 并通过 [`Injectable::inject_dependencies`] 接收容器解析出的依赖。
/// 通常由 `#[derive(Injectable)]` 生成。
pub trait Injectable: Send + Sync + 'static {
    /// 类型声明的能力集合
    fn declared_capabilities() -> Capabilities
    where
        Self: Sized;

    /// 实例的能力集合，用于类型擦除后的节点
    fn capabilities(&self) -> Capabilities;

    /// 实例的具体类型信息
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    /// 按声明顺序填充所有依赖字段
    ///
    /// 第一个无法解析的字段立即返回错误，已经填充的字段不回滚。
    fn inject_dependencies(&self, resolver: &dyn DependencyResolver) -> DependencyResult<()>;

    /// 转换为 `Any`，用于按具体类型向下转型
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// 类型擦除的组件或树节点引用
pub type NodeRef = Arc<dyn Injectable>;

/// 两个引用是否指向同一个实例
pub fn same_node(left: &NodeRef, right: &NodeRef) -> bool {
    std::ptr::eq(
        Arc::as_ptr(left).cast::<()>(),
        Arc::as_ptr(right).cast::<()>(),
    )
}
