//! 可注入组件派生宏实现

use crate::utils::{fields_with_members, find_attribute};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Result};

/// 结构体上可声明的能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityFlag {
    Global,
    Node,
    Cascade,
}

impl CapabilityFlag {
    fn tokens(self) -> TokenStream {
        match self {
            CapabilityFlag::Global => quote! { ::di_abstractions::Capability::GloballyInjectable },
            CapabilityFlag::Node => quote! { ::di_abstractions::Capability::TreeNodeInjectable },
            CapabilityFlag::Cascade => quote! { ::di_abstractions::Capability::CascadesIntoChildren },
        }
    }
}

/// 字段的注入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInjection {
    /// `Inject<T>` 字段
    Slot,
    /// 嵌入的可注入类型
    Flatten,
}

/// 解析 `#[injectable(...)]`
pub fn parse_capabilities(attrs: &[Attribute]) -> Result<Vec<CapabilityFlag>> {
    let mut flags = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("injectable")) {
        attr.parse_nested_meta(|meta| {
            let flag = if meta.path.is_ident("global") {
                CapabilityFlag::Global
            } else if meta.path.is_ident("node") {
                CapabilityFlag::Node
            } else if meta.path.is_ident("cascade") {
                CapabilityFlag::Cascade
            } else {
                return Err(meta.error("未知的能力，可用: global, node, cascade"));
            };

            if !flags.contains(&flag) {
                flags.push(flag);
            }
            Ok(())
        })?;
    }

    Ok(flags)
}

/// 解析字段上的 `#[inject]` / `#[inject(flatten)]`
pub fn parse_field_injection(attrs: &[Attribute]) -> Result<Option<FieldInjection>> {
    let Some(attr) = find_attribute(attrs, "inject") else {
        return Ok(None);
    };

    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(Some(FieldInjection::Slot));
    }

    let mut injection = FieldInjection::Slot;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("flatten") {
            injection = FieldInjection::Flatten;
            Ok(())
        } else {
            Err(meta.error("未知的注入选项，可用: flatten"))
        }
    })?;

    Ok(Some(injection))
}

/// 按字段声明顺序生成注入语句
fn injection_steps(fields: &Fields) -> Result<Vec<TokenStream>> {
    let mut steps = Vec::new();

    for (member, field) in fields_with_members(fields) {
        match parse_field_injection(&field.attrs)? {
            Some(FieldInjection::Slot) => steps.push(quote! {
                ::di_abstractions::Inject::resolve_from(&self.#member, resolver)?;
            }),
            Some(FieldInjection::Flatten) => steps.push(quote! {
                ::di_abstractions::Injectable::inject_dependencies(&self.#member, resolver)?;
            }),
            None => {}
        }
    }

    Ok(steps)
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "Injectable 只能用于结构体",
        ));
    };

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let capabilities = parse_capabilities(&input.attrs)?
        .into_iter()
        .map(CapabilityFlag::tokens);
    let steps = injection_steps(&data.fields)?;

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn declared_capabilities() -> ::di_abstractions::Capabilities {
                ::di_abstractions::Capabilities::NONE #(.with(#capabilities))*
            }

            fn capabilities(&self) -> ::di_abstractions::Capabilities {
                <Self as ::di_abstractions::Injectable>::declared_capabilities()
            }

            #[allow(unused_variables)]
            fn inject_dependencies(
                &self,
                resolver: &dyn ::di_abstractions::DependencyResolver,
            ) -> ::di_abstractions::DependencyResult<()> {
                #(#steps)*
                ::core::result::Result::Ok(())
            }

            fn into_any(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync> {
                self
            }
        }
    })
}
