//! 依赖注入容器实现

use crate::binder::Binder;
use crate::injector::{collect_injectable_descendants, Injector};
use crate::registry::InstanceRegistry;
use crate::resolver::TypeResolver;
use di_abstractions::{
    BindingReport, Category, ComponentHost, ContainerConfig, ContainerLifecycle, ContainerStats,
    DependencyResolver, DiContainer, Injectable, NoHost, NodeRef, RegisteredComponent,
};
use infrastructure_common::{DependencyError, DependencyResult};
use parking_lot::{Mutex, RwLock};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// 容器共享状态
pub(crate) struct ContainerState {
    pub(crate) config: ContainerConfig,
    pub(crate) host: Arc<dyn ComponentHost>,
    pub(crate) registry: RwLock<InstanceRegistry>,
    pub(crate) lifecycle: RwLock<ContainerLifecycle>,
    pub(crate) stats: Mutex<ContainerStats>,
}

/// 具体的依赖注入容器实现
///
/// 克隆得到的是同一个容器的句柄。容器在注册表中登记了自身，
/// 因此可以作为依赖被解析和注入。
#[derive(Clone)]
pub struct DiContainerImpl {
    state: Arc<ContainerState>,
}

impl DiContainerImpl {
    /// 创建没有宿主环境的容器
    pub fn new() -> Self {
        Self::with_host(Arc::new(NoHost))
    }

    /// 使用宿主环境创建容器
    pub fn with_host(host: Arc<dyn ComponentHost>) -> Self {
        Self::with_config(host, ContainerConfig::default())
    }

    /// 使用宿主环境和配置创建容器
    pub fn with_config(host: Arc<dyn ComponentHost>, config: ContainerConfig) -> Self {
        info!("创建注入容器: {}", config.name);

        let state = Arc::new_cyclic(|owner| ContainerState {
            config,
            host,
            registry: RwLock::new(InstanceRegistry::new(owner.clone())),
            lifecycle: RwLock::new(ContainerLifecycle::Uninitialized),
            stats: Mutex::new(ContainerStats::default()),
        });

        Self { state }
    }

    pub(crate) fn from_state(state: Arc<ContainerState>) -> Self {
        Self { state }
    }

    /// 两个句柄是否指向同一个容器
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.state.config
    }

    /// 宿主环境
    pub fn host(&self) -> &Arc<dyn ComponentHost> {
        &self.state.host
    }

    /// 收集节点下所有树节点可注入的后代
    pub fn collect_injectable_descendants(&self, node: &NodeRef) -> Vec<NodeRef> {
        collect_injectable_descendants(self.state.host.as_ref(), node)
    }

    fn binder(&self) -> Binder<'_> {
        Binder::new(&self.state)
    }
}

impl Default for DiContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DiContainerImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiContainerImpl")
            .field("name", &self.state.config.name)
            .field("lifecycle", &self.lifecycle())
            .field("stats", &self.stats())
            .finish()
    }
}

impl DependencyResolver for DiContainerImpl {
    fn resolve_by_type_id(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        TypeResolver::new(&self.state.registry).resolve_by_type_id(type_id)
    }
}

impl DiContainer for DiContainerImpl {
    fn register<T: Injectable>(&self, instance: Arc<T>) -> DependencyResult<()> {
        self.binder().register(instance)
    }

    fn register_node<T: Injectable>(&self, node: Arc<T>) -> DependencyResult<()> {
        self.binder().register_node(node)
    }

    fn discover_and_bind_all(&self) -> DependencyResult<BindingReport> {
        self.binder().discover_and_bind_all()
    }

    fn inject<T: Injectable>(&self, target: &Arc<T>) -> DependencyResult<()> {
        let target: NodeRef = target.clone();
        self.inject_into(&target, true)
    }

    fn inject_into(&self, target: &NodeRef, cascade_into_children: bool) -> DependencyResult<()> {
        Injector::new(&self.state).inject_into(target, cascade_into_children)
    }

    fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        TypeResolver::new(&self.state.registry).resolve::<T>()
    }

    fn instantiate_and_inject<T: Injectable>(
        &self,
        prototype: &Arc<T>,
        parent: Option<&NodeRef>,
    ) -> DependencyResult<Arc<T>> {
        let prototype: NodeRef = prototype.clone();
        let instance = self
            .binder()
            .instantiate_and_inject(&prototype, parent)?
            .ok_or_else(|| DependencyError::instantiation_failed::<T>("宿主无法创建原型实例"))?;

        let spawned_type = instance.type_info();
        instance.into_any().downcast::<T>().map_err(|_| {
            DependencyError::instantiation_failed::<T>(format!("宿主创建了不同的类型: {spawned_type}"))
        })
    }

    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool {
        self.state.registry.read().find(type_id).is_some()
    }

    fn registered_components(&self) -> Vec<RegisteredComponent> {
        self.state.registry.read().describe()
    }

    fn lifecycle(&self) -> ContainerLifecycle {
        *self.state.lifecycle.read()
    }

    fn stats(&self) -> ContainerStats {
        let registry = self.state.registry.read();
        ContainerStats {
            plain_instances: registry.len(Category::Plain),
            tree_node_instances: registry.len(Category::TreeNode),
            ..self.state.stats.lock().clone()
        }
    }
}
