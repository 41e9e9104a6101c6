//! 实例注册表相关类型

use infrastructure_common::TypeInfo;
use std::fmt;

/// 注册表分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 普通对象
    Plain,
    /// 树节点对象
    TreeNode,
}

impl Category {
    /// 解析时遍历分类的固定顺序
    pub const RESOLUTION_ORDER: [Category; 2] = [Category::Plain, Category::TreeNode];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Plain => f.write_str("plain"),
            Category::TreeNode => f.write_str("tree-node"),
        }
    }
}

/// 已注册组件的描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredComponent {
    /// 所在分类
    pub category: Category,
    /// 具体类型信息
    pub type_info: TypeInfo,
}
