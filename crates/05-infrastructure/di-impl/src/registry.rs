//! 实例注册表
//!
//! 按分类保存单例实例，保持插入顺序，只增不减

use crate::container::{ContainerState, DiContainerImpl};
use di_abstractions::{Category, NodeRef, RegisteredComponent};
use infrastructure_common::TypeInfo;
use std::any::{Any, TypeId};
use std::sync::{Arc, Weak};

/// 注册表条目中保存的实例
enum EntryInstance {
    /// 注册的组件
    Component(NodeRef),
    /// 容器自身，弱引用避免所有权循环
    Container(Weak<ContainerState>),
}

/// 注册表条目
pub struct RegistryEntry {
    category: Category,
    type_info: TypeInfo,
    instance: EntryInstance,
}

impl RegistryEntry {
    /// 所在分类
    pub fn category(&self) -> Category {
        self.category
    }

    /// 实例的具体类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 是否精确匹配指定类型
    pub fn matches(&self, type_id: TypeId) -> bool {
        self.type_info.id == type_id
    }

    /// 组件实例，容器自身条目返回 `None`
    pub fn component(&self) -> Option<&NodeRef> {
        match &self.instance {
            EntryInstance::Component(component) => Some(component),
            EntryInstance::Container(_) => None,
        }
    }

    /// 作为 `Any` 的实例
    pub fn instance(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        match &self.instance {
            EntryInstance::Component(component) => Some(component.clone().into_any()),
            EntryInstance::Container(state) => state
                .upgrade()
                .map(|state| Arc::new(DiContainerImpl::from_state(state)) as Arc<dyn Any + Send + Sync>),
        }
    }

    fn describe(&self) -> RegisteredComponent {
        RegisteredComponent {
            category: self.category,
            type_info: self.type_info.clone(),
        }
    }
}

/// 实例注册表
///
/// 第一个普通条目永远是容器自身。
pub struct InstanceRegistry {
    plain: Vec<RegistryEntry>,
    tree_nodes: Vec<RegistryEntry>,
}

impl InstanceRegistry {
    /// 创建只包含容器自身的注册表
    pub(crate) fn new(owner: Weak<ContainerState>) -> Self {
        let self_entry = RegistryEntry {
            category: Category::Plain,
            type_info: TypeInfo::of::<DiContainerImpl>(),
            instance: EntryInstance::Container(owner),
        };

        Self {
            plain: vec![self_entry],
            tree_nodes: Vec::new(),
        }
    }

    /// 追加实例，不去重、不校验分类
    pub fn add(&mut self, category: Category, instance: NodeRef) {
        let entry = RegistryEntry {
            category,
            type_info: instance.type_info(),
            instance: EntryInstance::Component(instance),
        };

        match category {
            Category::Plain => self.plain.push(entry),
            Category::TreeNode => self.tree_nodes.push(entry),
        }
    }

    /// 按解析顺序遍历所有条目：先普通，后树节点，分类内按插入顺序
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        Category::RESOLUTION_ORDER
            .into_iter()
            .flat_map(move |category| self.category_entries(category).iter())
    }

    /// 指定分类的条目
    pub fn category_entries(&self, category: Category) -> &[RegistryEntry] {
        match category {
            Category::Plain => &self.plain,
            Category::TreeNode => &self.tree_nodes,
        }
    }

    /// 第一个精确匹配类型的条目
    pub fn find(&self, type_id: TypeId) -> Option<&RegistryEntry> {
        self.entries().find(|entry| entry.matches(type_id))
    }

    /// 指定分类的条目数量
    pub fn len(&self, category: Category) -> usize {
        self.category_entries(category).len()
    }

    /// 所有组件实例（不含容器自身），按解析顺序
    pub fn components(&self) -> Vec<NodeRef> {
        self.entries()
            .filter_map(RegistryEntry::component)
            .cloned()
            .collect()
    }

    /// 已注册组件描述，按解析顺序
    pub fn describe(&self) -> Vec<RegisteredComponent> {
        self.entries().map(RegistryEntry::describe).collect()
    }
}
