//! Implementation of `#[derive(Form)]`.
//!
//! The struct header is parsed with `unsynn`. Field lists are split at
//! top-level commas by hand first, because field types such as
//! `HashMap<String, u8>` contain commas of their own.

use proc_macro2::{Literal, Spacing, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use unsynn::*;

keyword! {
    KStruct = "struct";
    KEnum = "enum";
    KPub = "pub";
}

operator! {
    Eq = "=";
    Lt = "<";
}

unsynn! {
    /// Visibility: `pub`, `pub(..)` or nothing
    enum Vis {
        PubIn(Cons<KPub, ParenthesisGroup>),
        Pub(KPub),
    }

    /// An attribute: `#[...]`
    struct Attribute {
        _pound: Pound,
        content: BracketGroup,
    }

    /// The top-level derive input
    enum DeriveInput {
        Struct(StructDef),
        Enum(EnumDef),
    }

    /// A struct definition
    struct StructDef {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_struct: KStruct,
        name: Ident,
        body: StructBody,
    }

    /// What follows the struct name
    enum StructBody {
        Named(BraceGroup),
        Tuple(Cons<ParenthesisGroup, Semicolon>),
        Unit(Semicolon),
        Generic(Cons<Lt, Vec<TokenTree>>),
    }

    /// An enum definition, only parsed to be rejected
    struct EnumDef {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_enum: KEnum,
        name: Ident,
        _rest: Vec<TokenTree>,
    }

    /// A named field, once split out of the brace group
    struct NamedField {
        attrs: Vec<Attribute>,
        vis: Option<Vis>,
        name: Ident,
        _colon: Colon,
        ty: Vec<TokenTree>,
    }

    /// A tuple field, once split out of the parenthesis group
    struct TupleField {
        attrs: Vec<Attribute>,
        vis: Option<Vis>,
        ty: Vec<TokenTree>,
    }

    /// `form(...)` or `serde(...)`
    struct AttrList {
        _namespace: Ident,
        items: ParenthesisGroupContaining<CommaDelimitedVec<AttrItem>>,
    }

    /// One item of an attribute list
    enum AttrItem {
        Assign(Cons<Ident, Eq, LiteralString>),
        Nested(Cons<Ident, ParenthesisGroup>),
        Flag(Ident),
    }
}

type Result<T> = std::result::Result<T, String>;

/// Field-level annotations that matter to the decoder.
#[derive(Debug, Default, PartialEq)]
struct FieldAttrs {
    rename: Option<String>,
    serde_rename: Option<String>,
    skip: bool,
}

/// Container-level annotations.
#[derive(Debug, Default)]
struct ContainerAttrs {
    default: bool,
}

struct FieldInfo {
    /// `name` or `0`, as written after `record.`
    access: TokenStream2,
    /// The declared name, without any `r#` prefix
    name: String,
    ty: TokenStream2,
    exported: bool,
    anonymous: bool,
    attrs: FieldAttrs,
}

impl FieldInfo {
    /// Whether the field gets a `FieldDef`. Private named fields are never
    /// decoded, so their types need not implement `Form`.
    fn listed(&self) -> bool {
        !self.attrs.skip && (self.exported || self.anonymous)
    }
}

/// Returns the namespace of an attribute (`form` in `#[form(skip)]`).
fn attr_namespace(attr: &Attribute) -> Option<String> {
    match attr.content.0.stream().into_iter().next() {
        Some(proc_macro2::TokenTree::Ident(ident)) => Some(ident.to_string()),
        _ => None,
    }
}

fn parse_attr_list(attr: &Attribute) -> Result<AttrList> {
    let mut it = attr.content.0.stream().to_token_iter();
    it.parse().map_err(|e| e.to_string())
}

fn literal_value(lit: &LiteralString) -> String {
    lit.value().trim_matches('"').to_string()
}

fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs {
        match attr_namespace(attr).as_deref() {
            Some("form") => {
                let list = parse_attr_list(attr)?;
                for item in list.items.content.iter() {
                    match &item.value {
                        AttrItem::Assign(assign) if assign.first == "rename" => {
                            out.rename = Some(literal_value(&assign.third));
                        }
                        AttrItem::Flag(flag) if flag == "skip" => out.skip = true,
                        AttrItem::Assign(Cons { first: key, .. })
                        | AttrItem::Nested(Cons { first: key, .. })
                        | AttrItem::Flag(key) => {
                            return Err(format!("unknown form field attribute `{key}`"));
                        }
                    }
                }
            }
            Some("serde") => {
                // serde has many attributes we don't care about; ignore what we can't read
                let Ok(list) = parse_attr_list(attr) else {
                    continue;
                };
                for item in list.items.content.iter() {
                    match &item.value {
                        AttrItem::Assign(assign) if assign.first == "rename" => {
                            out.serde_rename = Some(literal_value(&assign.third));
                        }
                        AttrItem::Flag(flag) if flag == "skip" || flag == "skip_deserializing" => {
                            out.skip = true;
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    Ok(out)
}

fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs {
        if attr_namespace(attr).as_deref() != Some("form") {
            continue;
        }
        let list = parse_attr_list(attr)?;
        for item in list.items.content.iter() {
            match &item.value {
                AttrItem::Flag(flag) if flag == "default" => out.default = true,
                AttrItem::Assign(Cons { first: key, .. })
                | AttrItem::Nested(Cons { first: key, .. })
                | AttrItem::Flag(key) => {
                    return Err(format!("unknown form container attribute `{key}`"));
                }
            }
        }
    }
    Ok(out)
}

/// Splits a field list at commas that are not nested inside `<...>`.
///
/// Groups are single token trees already, so only angle brackets need
/// tracking; the `>` of a `->` arrow does not close one.
fn split_fields(stream: TokenStream2) -> Vec<TokenStream2> {
    let mut chunks = Vec::new();
    let mut current: Vec<proc_macro2::TokenTree> = Vec::new();
    let mut depth = 0usize;
    let mut after_dash = false;

    for tt in stream {
        let mut dash = false;
        if let proc_macro2::TokenTree::Punct(punct) = &tt {
            match punct.as_char() {
                '<' => depth += 1,
                '>' if !after_dash => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    chunks.push(current.drain(..).collect::<TokenStream2>());
                    after_dash = false;
                    continue;
                }
                '-' => dash = punct.spacing() == Spacing::Joint,
                _ => {}
            }
        }
        after_dash = dash;
        current.push(tt);
    }
    chunks.push(current.into_iter().collect());
    chunks.retain(|chunk| !chunk.is_empty());
    chunks
}

fn named_fields(stream: TokenStream2) -> Result<Vec<FieldInfo>> {
    split_fields(stream)
        .into_iter()
        .map(|chunk| {
            let mut it = chunk.to_token_iter();
            let field: NamedField = it.parse().map_err(|e| e.to_string())?;
            let name = field.name.to_string();
            let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
            let ident = &field.name;
            let ty = &field.ty;
            Ok(FieldInfo {
                access: quote! { #ident },
                name,
                ty: quote! { #(#ty)* },
                exported: field.vis.is_some(),
                anonymous: false,
                attrs: parse_field_attrs(&field.attrs)?,
            })
        })
        .collect()
}

fn tuple_fields(stream: TokenStream2) -> Result<Vec<FieldInfo>> {
    split_fields(stream)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut it = chunk.to_token_iter();
            let field: TupleField = it.parse().map_err(|e| e.to_string())?;
            let access = Literal::usize_unsuffixed(index);
            let ty = &field.ty;
            Ok(FieldInfo {
                access: quote! { #access },
                name: index.to_string(),
                ty: quote! { #(#ty)* },
                exported: field.vis.is_some(),
                anonymous: true,
                attrs: parse_field_attrs(&field.attrs)?,
            })
        })
        .collect()
}

fn expand_struct(def: &StructDef) -> Result<TokenStream2> {
    let name = &def.name;
    let name_str = name.to_string();
    let container = parse_container_attrs(&def.attrs)?;

    let fields = match &def.body {
        StructBody::Named(group) => named_fields(group.0.stream())?,
        StructBody::Tuple(tuple) => tuple_fields(tuple.first.0.stream())?,
        StructBody::Unit(_) => Vec::new(),
        StructBody::Generic(_) => {
            return Err(format!(
                "#[derive(Form)] does not support generic parameters (on `{name}`)"
            ));
        }
    };

    let mut getters = Vec::new();
    let mut field_defs = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !field.listed() {
            continue;
        }
        let getter = format_ident!("__form_field_{}", index);
        let access = &field.access;
        let ty = &field.ty;
        getters.push(quote! {
            fn #getter(
                record: &mut dyn ::core::any::Any,
            ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                let record = record.downcast_mut::<#name>()?;
                let field: &mut dyn ::core::any::Any = &mut record.#access;
                ::core::option::Option::Some(field)
            }
        });

        let field_name = &field.name;
        let rename = field.attrs.rename.as_ref().map(|r| quote! { .rename(#r) });
        let serde_rename = field
            .attrs
            .serde_rename
            .as_ref()
            .map(|r| quote! { .serde_rename(#r) });
        let flags = match (field.exported, field.anonymous) {
            (_, false) => quote! { ::formbind::FieldFlags::EXPORTED },
            (false, true) => quote! { ::formbind::FieldFlags::ANONYMOUS },
            (true, true) => quote! {
                ::formbind::FieldFlags::EXPORTED.union(::formbind::FieldFlags::ANONYMOUS)
            },
        };
        field_defs.push(quote! {
            ::formbind::FieldDef::new(#field_name, ::formbind::shape_of::<#ty>, #getter)
                #rename
                #serde_rename
                .flags(#flags)
        });
    }

    let fields_expr = if field_defs.is_empty() {
        quote! { &[] }
    } else {
        quote! { &const { [#(#field_defs),*] } }
    };

    let zero_value = if container.default {
        quote! { <#name as ::core::default::Default>::default() }
    } else {
        let inits = fields.iter().map(|field| {
            let ty = &field.ty;
            if field.listed() {
                quote! { ::formbind::zero_of::<#ty>()? }
            } else {
                quote! { ::core::default::Default::default() }
            }
        });
        match &def.body {
            StructBody::Named(_) => {
                let names = fields.iter().map(|field| &field.access);
                quote! { #name { #(#names: #inits),* } }
            }
            StructBody::Tuple(_) => quote! { #name(#(#inits),*) },
            _ => quote! { #name },
        }
    };

    Ok(quote! {
        const _: () = {
            #(#getters)*

            fn __form_zero() -> ::core::option::Option<::std::boxed::Box<dyn ::core::any::Any>> {
                ::core::option::Option::Some(::std::boxed::Box::new(#zero_value))
            }

            #[automatically_derived]
            impl ::formbind::Form for #name {
                const SHAPE: &'static ::formbind::Shape = &const {
                    ::formbind::Shape::of::<#name>(
                        #name_str,
                        ::formbind::Def::Record(::formbind::RecordDef::new(#fields_expr)),
                    )
                    .with_zero(__form_zero)
                };
            }
        };
    })
}

pub(crate) fn derive_form(input: TokenStream2) -> TokenStream2 {
    let mut iter = input.to_token_iter();

    let parsed: DeriveInput = match iter.parse() {
        Ok(i) => i,
        Err(e) => {
            let msg = e.to_string();
            return quote! { compile_error!(#msg); };
        }
    };

    let expanded = match parsed {
        DeriveInput::Struct(def) => expand_struct(&def),
        DeriveInput::Enum(def) => Err(format!(
            "#[derive(Form)] only supports structs, `{}` is an enum",
            def.name
        )),
    };

    match expanded {
        Ok(tokens) => tokens,
        Err(err) => quote! { compile_error!(#err); },
    }
}
