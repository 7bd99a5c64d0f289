use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive `HasSpan`, `HasNodeType`, `AstNode` and `AstVisitable` for a leaf
/// node of the models AST.
///
/// The struct must have a `span: SymbolSpan` field. The traits (and
/// `AstVisitor`) are referenced unqualified, so they must be in scope at the
/// derive site. A leaf's `accept` visits only the leaf itself.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(AstLeafNode)]
/// struct CommentLine {
///     pub text: String,
///     pub span: SymbolSpan,
/// }
/// ```
#[proc_macro_derive(AstLeafNode)]
pub fn derive_ast_leaf_node(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_node(&input, false).into()
}

/// Derive the node traits for a container node.
///
/// Same requirements as `AstLeafNode`; `is_container()` returns `true` and
/// `AstVisitable::accept` is left for the type to implement by hand so that
/// it can walk its children in document order.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(AstContainerNode)]
/// struct Entity {
///     pub name: TypeIdent,
///     pub children: Vec<EntityChild>,
///     pub span: SymbolSpan,
/// }
/// ```
#[proc_macro_derive(AstContainerNode)]
pub fn derive_ast_container_node(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_node(&input, true).into()
}

fn has_span_field(input: &DeriveInput) -> bool {
    let Data::Struct(data) = &input.data else {
        return false;
    };
    let Fields::Named(fields) = &data.fields else {
        return false;
    };
    fields
        .named
        .iter()
        .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "span"))
}

fn expand_node(input: &DeriveInput, container: bool) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    if !has_span_field(input) {
        let derive = if container {
            "AstContainerNode"
        } else {
            "AstLeafNode"
        };
        return syn::Error::new_spanned(
            input,
            format!(
                "{derive} can only be derived for structs with a \
                 `span: SymbolSpan` field"
            ),
        )
        .to_compile_error();
    }

    let type_name = name.to_string();
    let node_impl = if container {
        quote! {
            impl #impl_generics AstNode for #name #ty_generics #where_clause {
                fn is_container(&self) -> bool {
                    true
                }
            }
        }
    } else {
        quote! {
            impl #impl_generics AstNode for #name #ty_generics #where_clause {}

            impl #impl_generics AstVisitable for #name #ty_generics
            #where_clause
            {
                fn accept(&self, visitor: &mut dyn AstVisitor) {
                    visitor.visit_node(self);
                }
            }
        }
    };

    quote! {
        impl #impl_generics HasSpan for #name #ty_generics #where_clause {
            fn span(&self) -> &SymbolSpan {
                &self.span
            }
        }

        impl #impl_generics HasNodeType for #name #ty_generics #where_clause {
            fn node_type(&self) -> &'static str {
                #type_name
            }
        }

        #node_impl
    }
}

/// Derive an inherent `name()` method returning the variant name of an enum,
/// plus a `VARIANTS` constant listing every variant name in declaration
/// order.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(EnumKindName)]
/// enum EntityChild { Field(EntityField), WhiteSpace(WhiteSpaceLine) }
/// assert_eq!(EntityChild::VARIANTS, &["Field", "WhiteSpace"]);
/// ```
#[proc_macro_derive(EnumKindName)]
pub fn derive_enum_kind_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            &input,
            "EnumKindName can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    let names: Vec<String> = data_enum
        .variants
        .iter()
        .map(|v| v.ident.to_string())
        .collect();

    let arms = data_enum.variants.iter().map(|v| {
        let v_ident = &v.ident;
        let v_name = v_ident.to_string();
        match &v.fields {
            Fields::Unit => quote! { Self::#v_ident => #v_name },
            Fields::Unnamed(_) => quote! { Self::#v_ident(..) => #v_name },
            Fields::Named(_) => quote! { Self::#v_ident { .. } => #v_name },
        }
    });

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Variant names in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[ #( #names ),* ];

            /// Return the enum variant name.
            pub fn name(&self) -> &'static str {
                match self {
                    #( #arms, )*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
