use heck::ToShoutySnakeCase;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;
use serde_json::{Map, Value};
use std::fs;

const KEY_PREFIX: &str = "command.tpatool.";

/// `command.tpatool.tpa.self` -> `TPA_SELF`, `command.tpatool.error` -> `ERROR`.
fn const_name(key: &str) -> Ident {
    let short = key.strip_prefix(KEY_PREFIX).unwrap_or(key);
    let name = short.replace('.', "_").to_shouty_snake_case();
    Ident::new(&name, Span::call_site())
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=build_assets/en_us.json");

    let file = fs::read_to_string("build_assets/en_us.json").expect("Failed to read en_us.json");
    let entries: Map<String, Value> =
        serde_json::from_str(&file).expect("Failed to parse en_us.json");

    let mut stream = TokenStream::new();
    let mut all = TokenStream::new();

    for (key, value) in &entries {
        let fallback = value
            .as_str()
            .unwrap_or_else(|| panic!("Translation {key} is not a string"));
        let name = const_name(key);
        let doc = format!("`{key}`: \"{fallback}\"");
        let key_lit = Literal::string(key);
        let fallback_lit = Literal::string(fallback);
        stream.extend(quote! {
            #[doc = #doc]
            pub const #name: TranslationKey = TranslationKey::new(#key_lit, #fallback_lit);
        });
        all.extend(quote! { #name, });
    }

    let count = Literal::usize_unsuffixed(entries.len());

    quote! {
        use crate::translations::TranslationKey;

        #stream

        /// Every known key, in key order.
        pub const ALL: [TranslationKey; #count] = [#all];
    }
}
