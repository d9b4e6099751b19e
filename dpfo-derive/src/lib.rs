use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Lit, Meta, PathArguments, Type};

/// Derive macro that lists the wire fields of an input record.
///
/// For each field, extracts:
/// - Wire name (respects #[serde(rename = "...")])
/// - Kind (text, amount, flag, number, list, object) from the field type
/// - Description (from doc comments)
///
/// Generates a `field_schema() -> &'static [InputField]` method. `InputField`
/// must be reachable as `crate::core::InputField`.
#[proc_macro_derive(FieldSchema, attributes(serde))]
pub fn derive_field_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("FieldSchema only supports structs with named fields"),
        },
        _ => panic!("FieldSchema only supports structs"),
    };

    let entries = fields.iter().map(|field| {
        let field_name = field.ident.as_ref().unwrap().to_string();
        let wire_name = get_serde_rename(&field.attrs).unwrap_or(field_name);
        let kind = type_kind(&field.ty);
        let description = get_doc_comment(&field.attrs);

        quote! {
            crate::core::InputField {
                name: #wire_name,
                kind: #kind,
                description: #description,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn field_schema() -> &'static [crate::core::InputField] {
                static SCHEMA: &[crate::core::InputField] = &[
                    #(#entries),*
                ];
                SCHEMA
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        if let Meta::List(meta_list) = &attr.meta {
            let tokens = meta_list.tokens.to_string();
            // `rename = "..."` but not `rename_all`
            let mut search = tokens.as_str();
            while let Some(start) = search.find("rename") {
                let rest = &search[start + "rename".len()..];
                let after = rest.trim_start();
                if let Some(after_eq) = after.strip_prefix('=') {
                    let after_eq = after_eq.trim_start();
                    if let Some(stripped) = after_eq.strip_prefix('"') {
                        if let Some(end_quote) = stripped.find('"') {
                            return Some(stripped[..end_quote].to_string());
                        }
                    }
                }
                search = rest;
            }
        }
    }
    None
}

fn type_kind(ty: &Type) -> &'static str {
    let Type::Path(type_path) = ty else {
        return "object";
    };
    let Some(segment) = type_path.path.segments.last() else {
        return "object";
    };
    match segment.ident.to_string().as_str() {
        "String" => "text",
        "Amount" => "amount",
        "bool" => "flag",
        "u8" | "u16" | "u32" | "u64" | "i32" | "i64" | "usize" => "number",
        "Vec" => "list",
        "Option" => match first_generic_arg(&segment.arguments) {
            Some(inner) => type_kind(inner),
            None => "object",
        },
        _ => "object",
    }
}

fn first_generic_arg(args: &PathArguments) -> Option<&Type> {
    if let PathArguments::AngleBracketed(generics) = args {
        for arg in &generics.args {
            if let GenericArgument::Type(ty) = arg {
                return Some(ty);
            }
        }
    }
    None
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}
