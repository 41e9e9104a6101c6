//! 字段注入器

use crate::container::ContainerState;
use crate::resolver::TypeResolver;
use di_abstractions::{ComponentHost, NodeRef};
use infrastructure_common::DependencyResult;
use tracing::{debug, error};

/// 字段注入器
///
/// 为对象填充所有依赖字段，并可向声明了级联能力的树节点的后代注入。
pub struct Injector<'a> {
    state: &'a ContainerState,
}

impl<'a> Injector<'a> {
    pub(crate) fn new(state: &'a ContainerState) -> Self {
        Self { state }
    }

    /// 向对象注入依赖
    ///
    /// 级联只发生在这一层调用：后代节点以非级联方式注入，
    /// 后代自身即使声明了级联也不会再次展开。
    pub fn inject_into(&self, target: &NodeRef, cascade_into_children: bool) -> DependencyResult<()> {
        let type_info = target.type_info();
        debug!("注入依赖: {}", type_info);

        let resolver = TypeResolver::new(&self.state.registry);
        if let Err(e) = target.inject_dependencies(&resolver) {
            error!("注入失败: {}, 原因: {}", type_info, e);
            return Err(e);
        }
        self.state.stats.lock().injections_performed += 1;

        if !cascade_into_children || !target.capabilities().cascades_into_children() {
            return Ok(());
        }

        let descendants = collect_injectable_descendants(self.state.host.as_ref(), target);
        debug!("级联注入: {} -> {} 个后代节点", type_info, descendants.len());
        self.state.stats.lock().cascade_passes += 1;

        for descendant in &descendants {
            self.inject_into(descendant, false)?;
        }

        Ok(())
    }
}

/// 收集节点下所有声明了树节点可注入的后代
///
/// 深度优先，子树先于其根节点加入结果。节点自身不在结果中。
pub fn collect_injectable_descendants(host: &dyn ComponentHost, node: &NodeRef) -> Vec<NodeRef> {
    let mut found = Vec::new();
    collect_into(host, node, &mut found);
    found
}

fn collect_into(host: &dyn ComponentHost, node: &NodeRef, found: &mut Vec<NodeRef>) {
    for child in host.children(node) {
        collect_into(host, &child, found);

        if child.capabilities().is_tree_node_injectable() {
            found.push(child);
        }
    }
}
