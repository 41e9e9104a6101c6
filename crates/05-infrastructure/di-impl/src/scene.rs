//! 内存场景宿主
//!
//! 以节点数组保存父子关系的简单宿主实现，供测试与嵌入场景使用

use di_abstractions::{same_node, CandidateType, ComponentHost, Injectable, NodeRef};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// 场景中节点的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// 原型生成函数
type Spawner = Arc<dyn Fn(&NodeRef) -> Option<NodeRef> + Send + Sync>;

struct SceneNode {
    component: NodeRef,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Default)]
struct SceneInner {
    nodes: Vec<SceneNode>,
    candidates: Vec<CandidateType>,
    spawners: HashMap<TypeId, Spawner>,
}

impl SceneInner {
    fn find(&self, component: &NodeRef) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| same_node(&node.component, component))
            .map(NodeId)
    }

    /// 每个组件只对应一个节点，重复加入时保持原位置，树中不会出现环
    fn insert(&mut self, parent: Option<NodeId>, component: NodeRef) -> NodeId {
        if let Some(existing) = self.find(&component) {
            warn!(
                "组件已在场景中: {} ({:?})，忽略重复加入",
                component.type_info(),
                existing
            );
            return existing;
        }

        let id = NodeId(self.nodes.len());
        let parent = parent.filter(|parent| {
            let known = parent.0 < self.nodes.len();
            if !known {
                warn!("父节点不存在: {:?}，作为根节点加入", parent);
            }
            known
        });

        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(SceneNode {
            component,
            parent,
            children: Vec::new(),
        });
        id
    }
}

/// 内存场景图
#[derive(Default)]
pub struct SceneGraph {
    inner: RwLock<SceneInner>,
}

impl SceneGraph {
    /// 创建空场景
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加根节点，组件已在场景中时返回原节点
    pub fn add_root(&self, component: NodeRef) -> NodeId {
        self.inner.write().insert(None, component)
    }

    /// 在父节点下添加子节点，组件已在场景中时返回原节点
    pub fn add_child(&self, parent: NodeId, component: NodeRef) -> NodeId {
        self.inner.write().insert(Some(parent), component)
    }

    /// 节点上的组件
    pub fn component(&self, id: NodeId) -> Option<NodeRef> {
        self.inner
            .read()
            .nodes
            .get(id.0)
            .map(|node| node.component.clone())
    }

    /// 查找组件所在的节点
    pub fn find(&self, component: &NodeRef) -> Option<NodeId> {
        self.inner.read().find(component)
    }

    /// 组件所在节点的父节点
    pub fn parent_of(&self, component: &NodeRef) -> Option<NodeId> {
        let inner = self.inner.read();
        let id = inner.find(component)?;
        inner.nodes[id.0].parent
    }

    /// 节点数量
    pub fn len(&self) -> usize {
        self.inner.read().nodes.len()
    }

    /// 场景是否没有节点
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 添加候选类型
    pub fn add_candidate(&self, candidate: CandidateType) {
        self.inner.write().candidates.push(candidate);
    }

    /// 登记可以通过克隆实例化的原型类型
    pub fn register_prototype<T: Injectable + Clone>(&self) {
        let spawner: Spawner = Arc::new(|prototype: &NodeRef| {
            let prototype = prototype.clone().into_any().downcast::<T>().ok()?;
            Some(Arc::new(T::clone(&prototype)) as NodeRef)
        });
        self.inner.write().spawners.insert(TypeId::of::<T>(), spawner);
    }
}

impl ComponentHost for SceneGraph {
    fn candidate_types(&self) -> Vec<CandidateType> {
        self.inner.read().candidates.clone()
    }

    fn live_nodes(&self) -> Vec<NodeRef> {
        self.inner
            .read()
            .nodes
            .iter()
            .map(|node| node.component.clone())
            .collect()
    }

    fn children(&self, node: &NodeRef) -> Vec<NodeRef> {
        let inner = self.inner.read();
        let Some(id) = inner.find(node) else {
            return Vec::new();
        };

        inner.nodes[id.0]
            .children
            .iter()
            .map(|child| inner.nodes[child.0].component.clone())
            .collect()
    }

    fn instantiate(&self, prototype: &NodeRef, parent: Option<&NodeRef>) -> Option<NodeRef> {
        let type_info = prototype.type_info();
        let spawner = self.inner.read().spawners.get(&type_info.id).cloned();
        let Some(spawner) = spawner else {
            warn!("未登记的原型类型: {}", type_info);
            return None;
        };

        let instance = spawner(prototype)?;

        let mut inner = self.inner.write();
        let parent_id = parent.and_then(|parent| inner.find(parent));
        let id = inner.insert(parent_id, instance.clone());
        debug!("实例化原型 {} -> {:?}", type_info, id);
        Some(instance)
    }
}

impl fmt::Debug for SceneGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SceneGraph")
            .field("nodes", &inner.nodes.len())
            .field("candidates", &inner.candidates.len())
            .field("prototypes", &inner.spawners.len())
            .finish()
    }
}
