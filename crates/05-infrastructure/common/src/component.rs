//! 组件能力声明
//!
//! 每个可注入类型通过一组 [`Capabilities`] 显式声明自己在容器中的角色

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// 能力集合
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// 全局可注入 - 加入普通实例注册表
        const GLOBAL = 1;
        /// 树节点可注入 - 加入树节点注册表
        const TREE_NODE = 1 << 1;
        /// 向子节点级联注入
        const CASCADE = 1 << 2;
    }
}

/// 单项组件能力，派生宏按名称引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// 全局可注入
    GloballyInjectable,
    /// 树节点可注入
    TreeNodeInjectable,
    /// 向子节点级联注入
    CascadesIntoChildren,
}

impl Capability {
    /// 对应的能力位
    pub const fn flag(self) -> Capabilities {
        match self {
            Capability::GloballyInjectable => Capabilities::GLOBAL,
            Capability::TreeNodeInjectable => Capabilities::TREE_NODE,
            Capability::CascadesIntoChildren => Capabilities::CASCADE,
        }
    }
}

impl Capabilities {
    /// 无任何能力
    pub const NONE: Self = Self::empty();

    /// 添加能力
    pub const fn with(self, capability: Capability) -> Self {
        self.union(capability.flag())
    }

    /// 是否声明了全局可注入
    pub fn is_globally_injectable(self) -> bool {
        self.contains(Self::GLOBAL)
    }

    /// 是否声明了树节点可注入
    pub fn is_tree_node_injectable(self) -> bool {
        self.contains(Self::TREE_NODE)
    }

    /// 是否向子节点级联注入
    pub fn cascades_into_children(self) -> bool {
        self.contains(Self::CASCADE)
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        capability.flag()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        f.write_str(&names.join("|"))
    }
}
