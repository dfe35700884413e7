use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, parse_macro_input};

/// Implements `tesserae_styles::variants::VariantOption` for a fieldless enum.
///
/// ```ignore
/// #[derive(IntoVariantOption)]
/// #[axis("variant")]
/// enum BadgeVariant {
///     Default,
///     #[option("secondary")]
///     Secondary,
/// }
/// ```
///
/// Variants without an `#[option(...)]` attribute use their name in kebab-case.
#[proc_macro_derive(IntoVariantOption, attributes(axis, option))]
pub fn into_variant_option_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = if let Data::Enum(data_enum) = input.data {
        data_enum.variants
    } else {
        panic!("#[derive(IntoVariantOption)] can only be used on enums");
    };

    let axis = get_axis_name(&input.attrs);

    let variant_matches = variants.iter().map(|variant| {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("#[derive(IntoVariantOption)] variants can't have fields");
        }

        let ident = &variant.ident;
        let option = get_option_name(&variant.attrs)
            .unwrap_or_else(|| LitStr::new(&kebab_case(&ident.to_string()), ident.span()));

        quote! {
            #name::#ident => #option,
        }
    });

    let all_variants = variants.iter().map(|variant| {
        let ident = &variant.ident;
        quote! { #name::#ident, }
    });

    let expanded = quote! {
        impl ::tesserae_styles::variants::VariantOption for #name {
            const AXIS: &'static str = #axis;
            const ALL: &'static [Self] = &[#(#all_variants)*];

            fn option(&self) -> &'static str {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_axis_name(attrs: &[Attribute]) -> LitStr {
    let axis_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("axis"))
        .expect("Enum is missing #[axis(...)] attribute");

    parse_string_list(axis_attr, "#[axis(...)] must be a list, like #[axis(\"variant\")]")
}

fn get_option_name(attrs: &[Attribute]) -> Option<LitStr> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("option"))
        .map(|attr| {
            parse_string_list(attr, "#[option(...)] must be a list, like #[option(\"default\")]")
        })
}

fn parse_string_list(attr: &Attribute, message: &str) -> LitStr {
    match &attr.meta {
        Meta::List(list) => {
            syn::parse2::<LitStr>(list.tokens.clone()).expect("Expected a string literal")
        }
        _ => panic!("{message}"),
    }
}

fn kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
