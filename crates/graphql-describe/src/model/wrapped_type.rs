use crate::document::text_of;
use apollo_parser::cst;

/// A single layer of a type reference, from the outermost layer inwards.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum WrapperTag {
    List,
    Named(String),
    NonNull,
}
impl WrapperTag {
    /// Flatten a (possibly nested) type reference into its layers.
    ///
    /// `[String!]!` becomes `[NonNull, List, NonNull, Named("String")]`.
    pub(crate) fn collect(ty: &cst::Type) -> Vec<Self> {
        let mut tags = vec![];
        let mut next = Some(ty.clone());
        while let Some(ty) = next.take() {
            match ty {
                cst::Type::NamedType(named) =>
                    tags.push(Self::Named(text_of(named.name()))),

                cst::Type::ListType(list) => {
                    tags.push(Self::List);
                    next = list.ty();
                },

                cst::Type::NonNullType(non_null) => {
                    tags.push(Self::NonNull);
                    next = non_null.named_type()
                        .map(cst::Type::NamedType)
                        .or_else(|| non_null.list_type().map(cst::Type::ListType));
                },
            }
        }
        tags
    }
}

/// The innermost named type of a field or argument plus its nullability and
/// list modifiers.
///
/// The three flags are independent, so `[T]!`, `[T!]` and `[T!]!` each have a
/// distinct representation.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedType {
    #[serde(rename = "type")]
    pub type_name: String,
    pub is_nullable: bool,
    pub is_list: bool,
    pub list_elements_non_null: bool,
}
impl WrappedType {
    pub(crate) fn from_cst(ty: Option<cst::Type>) -> Self {
        match ty {
            Some(ty) => Self::from_tags(WrapperTag::collect(&ty)),
            None => Self::from_tags(vec![]),
        }
    }

    pub(crate) fn from_tags(tags: impl IntoIterator<Item = WrapperTag>) -> Self {
        let mut state = UnwrapState::default();
        let mut type_name = None;
        for tag in tags {
            match tag {
                WrapperTag::NonNull if state.at_top =>
                    state.saw_non_null_at_top = true,
                WrapperTag::NonNull if state.inside_list =>
                    state.saw_non_null_inside_list = true,
                WrapperTag::NonNull => (),
                WrapperTag::List => state.inside_list = true,
                WrapperTag::Named(name) => {
                    if type_name.is_none() {
                        type_name = Some(name);
                    }
                },
            }
            state.at_top = false;
        }

        Self {
            type_name: type_name.unwrap_or_default(),
            is_nullable: !state.saw_non_null_at_top,
            is_list: state.inside_list,
            list_elements_non_null: state.saw_non_null_inside_list,
        }
    }
}

struct UnwrapState {
    at_top: bool,
    inside_list: bool,
    saw_non_null_at_top: bool,
    saw_non_null_inside_list: bool,
}
impl Default for UnwrapState {
    fn default() -> Self {
        Self {
            at_top: true,
            inside_list: false,
            saw_non_null_at_top: false,
            saw_non_null_inside_list: false,
        }
    }
}
