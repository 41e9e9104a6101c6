//! 注册编排
//!
//! 按能力声明把对象分类加入注册表，并在注册后触发注入

use crate::container::ContainerState;
use crate::injector::Injector;
use di_abstractions::{BindingReport, Category, ContainerLifecycle, NodeRef};
use infrastructure_common::DependencyResult;
use tracing::{debug, info, warn};

/// 注册编排器
pub struct Binder<'a> {
    state: &'a ContainerState,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(state: &'a ContainerState) -> Self {
        Self { state }
    }

    /// 注册对象
    ///
    /// 声明了全局可注入时加入普通注册表；无论是否加入，都会注入其依赖。
    pub fn register(&self, instance: NodeRef) -> DependencyResult<()> {
        self.mark_bound();

        if instance.capabilities().is_globally_injectable() {
            info!("注册单例组件: {}", instance.type_info());
            self.add(Category::Plain, instance.clone());
        }

        Injector::new(self.state).inject_into(&instance, true)
    }

    /// 注册树节点
    ///
    /// 声明了树节点可注入时加入树节点注册表；无论是否加入，都会注入其依赖。
    pub fn register_node(&self, node: NodeRef) -> DependencyResult<()> {
        self.mark_bound();

        if node.capabilities().is_tree_node_injectable() {
            info!("注册树节点组件: {}", node.type_info());
            self.add(Category::TreeNode, node.clone());
        }

        Injector::new(self.state).inject_into(&node, true)
    }

    /// 批量发现并绑定
    ///
    /// 1. 默认构造所有全局可注入的候选类型，无法构造的静默跳过
    /// 2. 活动节点中树节点可注入的加入注册表，只声明级联的延后处理
    /// 3. 注入注册表中的每个实例
    /// 4. 对延后的节点执行级联注入
    pub fn discover_and_bind_all(&self) -> DependencyResult<BindingReport> {
        info!("开始批量发现组件: 容器 {}", self.state.config.name);
        self.mark_bound();

        let host = self.state.host.as_ref();
        let mut report = BindingReport::default();

        for candidate in host.candidate_types() {
            if !candidate.capabilities().is_globally_injectable() {
                continue;
            }

            match candidate.construct() {
                Some(instance) => {
                    debug!("发现单例组件: {}", candidate.type_info());
                    self.add(Category::Plain, instance);
                    report.plain_registered += 1;
                }
                None => {
                    if self.state.config.report_skipped_candidates {
                        warn!("无法构造候选类型，已跳过: {}", candidate.type_info());
                    } else {
                        debug!("无法构造候选类型，已跳过: {}", candidate.type_info());
                    }
                    report.skipped_candidates += 1;
                }
            }
        }
        self.state.stats.lock().skipped_candidates += report.skipped_candidates;

        let mut deferred = Vec::new();
        for node in host.live_nodes() {
            let capabilities = node.capabilities();
            if capabilities.is_tree_node_injectable() {
                debug!("发现树节点组件: {}", node.type_info());
                self.add(Category::TreeNode, node);
                report.tree_nodes_registered += 1;
            } else if capabilities.cascades_into_children() {
                deferred.push(node);
            }
        }
        report.deferred_cascades = deferred.len();

        // 锁只在取快照时持有，注入过程中会再次读取注册表
        let registered = self.state.registry.read().components();
        let injector = Injector::new(self.state);
        for instance in &registered {
            injector.inject_into(instance, true)?;
            report.injected += 1;
        }

        for node in &deferred {
            injector.inject_into(node, true)?;
        }

        info!(
            "批量绑定完成: 单例 {}, 树节点 {}, 级联 {}, 跳过 {}",
            report.plain_registered,
            report.tree_nodes_registered,
            report.deferred_cascades,
            report.skipped_candidates
        );
        Ok(report)
    }

    /// 由宿主以原型创建新节点，并做非级联注入
    ///
    /// 宿主无法创建时返回 `None`。
    pub fn instantiate_and_inject(
        &self,
        prototype: &NodeRef,
        parent: Option<&NodeRef>,
    ) -> DependencyResult<Option<NodeRef>> {
        let Some(instance) = self.state.host.instantiate(prototype, parent) else {
            return Ok(None);
        };

        debug!("实例化原型: {}", instance.type_info());
        Injector::new(self.state).inject_into(&instance, false)?;
        Ok(Some(instance))
    }

    fn add(&self, category: Category, instance: NodeRef) {
        self.state.registry.write().add(category, instance);
    }

    fn mark_bound(&self) {
        *self.state.lifecycle.write() = ContainerLifecycle::Bound;
    }
}
