//! 宏工具函数

use syn::{Attribute, Field, Fields, Index, Member};

/// 查找特定属性
pub fn find_attribute<'a>(attrs: &'a [Attribute], attr_name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(attr_name))
}

/// 字段的访问成员，具名字段用名称，元组字段用下标
pub fn field_member(index: usize, field: &Field) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

/// 遍历字段及其访问成员
pub fn fields_with_members(fields: &Fields) -> impl Iterator<Item = (Member, &Field)> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| (field_member(index, field), field))
}
