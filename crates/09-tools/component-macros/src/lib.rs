//! # Component Macros
//!
//! 这个 crate 提供了用于声明组件能力和依赖字段的过程宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`](derive@Injectable) - 实现 `di_abstractions::Injectable`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Injectable;
//! use di_abstractions::Inject;
//!
//! #[derive(Default, Injectable)]
//! #[injectable(global)]
//! pub struct Clock;
//!
//! #[derive(Default, Injectable)]
//! #[injectable(node, cascade)]
//! pub struct Hud {
//!     #[inject]
//!     clock: Inject<Clock>,
//!     title: String,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入组件派生宏
///
/// # 结构体属性
///
/// `#[injectable(...)]` 声明能力，可组合：
///
/// - `global` - 全局可注入，加入普通注册表
/// - `node` - 树节点可注入，加入树节点注册表
/// - `cascade` - 注入时向子节点级联
///
/// # 字段属性
///
/// - `#[inject]` - 字段类型必须是 `Inject<T>`，注入时解析 `T`
/// - `#[inject(flatten)]` - 字段类型本身实现 `Injectable`，注入时填充它的依赖字段
///
/// 未标记的字段不会被修改。依赖按字段声明顺序注入。
#[proc_macro_derive(Injectable, attributes(injectable, inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
