use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitInt, LitStr, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[tier(stars = <n>)] or #[tier(stars = <n>, fallback)]
///
/// Variants are listed rarest first; that order becomes `Tiered::PRIORITY`.
#[proc_macro_derive(Tiered, attributes(tier))]
pub fn derive_tiered(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(input.ident.span(), "Tiered can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut priority = Vec::new();
    let mut stars_arms = Vec::new();
    let mut key_arms = Vec::new();
    let mut from_key_arms = Vec::new();
    let mut fallback: Option<syn::Ident> = None;

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "Tiered only supports fieldless variants")
                .to_compile_error()
                .into();
        }

        // Find #[tier(...)]
        let mut stars: Option<u8> = None;
        let mut is_fallback = false;
        for attr in &variant.attrs {
            if !attr.path().is_ident("tier") {
                continue;
            }
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("stars") {
                    let lit: LitInt = meta.value()?.parse()?;
                    stars = Some(lit.base10_parse::<u8>()?);
                    Ok(())
                } else if meta.path.is_ident("fallback") {
                    is_fallback = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `stars = <n>` or `fallback`"))
                }
            });
            if let Err(err) = parsed {
                return err.to_compile_error().into();
            }
        }

        let Some(stars) = stars else {
            return syn::Error::new(variant.span(), "missing #[tier(stars = ...)] on variant")
                .to_compile_error()
                .into();
        };

        let ident = &variant.ident;
        if is_fallback {
            if fallback.is_some() {
                return syn::Error::new(variant.span(), "only one variant may be the fallback")
                    .to_compile_error()
                    .into();
            }
            fallback = Some(ident.clone());
        }

        let key = LitStr::new(&stars.to_string(), variant.span());
        priority.push(quote! { Self::#ident });
        stars_arms.push(quote! { Self::#ident => #stars });
        key_arms.push(quote! { Self::#ident => #key });
        from_key_arms.push(quote! { #key => ::core::option::Option::Some(Self::#ident) });
    }

    let Some(fallback) = fallback else {
        return syn::Error::new(
            input.ident.span(),
            "one variant must be marked #[tier(..., fallback)]",
        )
        .to_compile_error()
        .into();
    };

    let expanded = quote! {
        impl wishsim::Tiered for #enum_ident {
            const PRIORITY: &'static [Self] = &[
                #(#priority),*
            ];
            const FALLBACK: Self = Self::#fallback;

            fn stars(self) -> u8 {
                match self {
                    #(#stars_arms),*
                }
            }

            fn key(self) -> &'static str {
                match self {
                    #(#key_arms),*
                }
            }

            fn from_key(key: &str) -> ::core::option::Option<Self> {
                match key {
                    #(#from_key_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    expanded.into()
}
