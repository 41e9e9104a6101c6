//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::injectable::{Injectable, NodeRef};
use crate::registry::RegisteredComponent;
use crate::resolver::DependencyResolver;
use infrastructure_common::DependencyResult;
use serde::Deserialize;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// 依赖注入容器 trait
///
/// 注册表只增不减，所有实例与进程同生命周期。
pub trait DiContainer: DependencyResolver + Send + Sync {
    /// 注册对象：声明了全局可注入时加入普通注册表，随后总是注入其依赖
    fn register<T: Injectable>(&self, instance: Arc<T>) -> DependencyResult<()>;

    /// 注册树节点：声明了树节点可注入时加入树节点注册表，随后总是注入其依赖
    fn register_node<T: Injectable>(&self, node: Arc<T>) -> DependencyResult<()>;

    /// 批量发现、注册、注入并级联
    fn discover_and_bind_all(&self) -> DependencyResult<BindingReport>;

    /// 向对象注入依赖（级联），不注册
    fn inject<T: Injectable>(&self, target: &Arc<T>) -> DependencyResult<()>;

    /// 向对象注入依赖，`cascade_into_children` 控制是否向子节点级联
    fn inject_into(&self, target: &NodeRef, cascade_into_children: bool) -> DependencyResult<()>;

    /// 解析组件，找不到时返回 `None`
    fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>>;

    /// 由宿主以原型创建新节点，并做非级联注入
    fn instantiate_and_inject<T: Injectable>(
        &self,
        prototype: &Arc<T>,
        parent: Option<&NodeRef>,
    ) -> DependencyResult<Arc<T>>;

    /// 检查是否已注册组件
    fn is_registered<T: 'static>(&self) -> bool {
        self.is_registered_by_type_id(TypeId::of::<T>())
    }

    /// 检查是否已注册组件（使用 TypeId）
    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool;

    /// 获取所有已注册的组件，按解析顺序
    fn registered_components(&self) -> Vec<RegisteredComponent>;

    /// 容器生命周期状态
    fn lifecycle(&self) -> ContainerLifecycle;

    /// 容器统计信息
    fn stats(&self) -> ContainerStats;
}

/// 容器生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerLifecycle {
    /// 注册表只包含容器自身
    Uninitialized,
    /// 已经执行过注册
    Bound,
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 容器名称，用于日志
    pub name: String,
    /// 批量发现时是否以警告级别报告无法构造的候选类型
    pub report_skipped_candidates: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            report_skipped_candidates: false,
        }
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 普通注册表实例数量（含容器自身）
    pub plain_instances: usize,
    /// 树节点注册表实例数量
    pub tree_node_instances: usize,
    /// 已执行的注入次数
    pub injections_performed: usize,
    /// 批量发现时跳过的候选类型数量
    pub skipped_candidates: usize,
    /// 已执行的级联注入次数
    pub cascade_passes: usize,
}

/// 批量绑定结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingReport {
    /// 新加入普通注册表的实例
    pub plain_registered: usize,
    /// 新加入树节点注册表的节点
    pub tree_nodes_registered: usize,
    /// 延迟到最后执行级联注入的节点
    pub deferred_cascades: usize,
    /// 无法构造而跳过的候选类型
    pub skipped_candidates: usize,
    /// 注入阶段处理的实例数量
    pub injected: usize,
}
