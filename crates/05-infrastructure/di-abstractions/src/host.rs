//! 宿主环境协作接口
//!
//! 容器只通过这里的接口接触宿主的类型集合与节点树，不拥有也不修改树结构

use crate::discovery::CandidateType;
use crate::injectable::NodeRef;

/// 宿主环境 trait
///
/// 所有方法都有空实现，宿主只需覆盖自己支持的部分。
pub trait ComponentHost: Send + Sync {
    /// 可供批量发现的候选类型
    fn candidate_types(&self) -> Vec<CandidateType> {
        Vec::new()
    }

    /// 当前活动的树节点
    fn live_nodes(&self) -> Vec<NodeRef> {
        Vec::new()
    }

    /// 节点的直接子节点
    fn children(&self, _node: &NodeRef) -> Vec<NodeRef> {
        Vec::new()
    }

    /// 以原型在指定父节点下创建新节点
    fn instantiate(&self, _prototype: &NodeRef, _parent: Option<&NodeRef>) -> Option<NodeRef> {
        None
    }
}

/// 空宿主：没有候选类型、没有节点
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHost;

impl ComponentHost for NoHost {}
