use proc_macro2::TokenStream;
use quote::quote;
use rexparse::RegexParser;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, LitStr};

#[cfg(feature = "dot")]
use std::fs::File;
#[cfg(feature = "dot")]
use syn::{Expr, ExprLit, Lit, Meta, MetaNameValue};

pub(crate) struct RegexInput {
    attrs: Vec<Attribute>,
    pattern: LitStr,
}

impl Parse for RegexInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            pattern: input.parse()?,
        })
    }
}

impl RegexInput {
    pub fn compile(self) -> TokenStream {
        let mut errors = Vec::new();
        #[cfg(feature = "dot")]
        let mut graph = None;

        for attr in self.attrs {
            match attr.meta {
                #[cfg(feature = "dot")]
                Meta::NameValue(MetaNameValue {
                    path,
                    value:
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(s), ..
                        }),
                    ..
                }) if path.is_ident("graph") => {
                    graph = Some(s);
                }
                meta => errors.push(syn::Error::new_spanned(meta, "unexpected attribute")),
            }
        }

        let regex = match RegexParser::new().parse(self.pattern.value()) {
            Ok(regex) => regex,
            Err(err) => {
                errors.push(syn::Error::new(self.pattern.span(), err));
                return to_compile_errors(errors);
            }
        };

        #[cfg(feature = "dot")]
        if let Some(path) = graph {
            let written = File::create(path.value()).and_then(|mut f| regex.output_dot(&mut f));
            if let Err(e) = written {
                errors.push(syn::Error::new(
                    path.span(),
                    format!("failed while graphing at {}: {e}", path.value()),
                ));
            }
        }

        if !errors.is_empty() {
            return to_compile_errors(errors);
        }
        regex.emit()
    }
}

fn to_compile_errors(errors: Vec<syn::Error>) -> TokenStream {
    let errors = errors.into_iter().map(syn::Error::into_compile_error);
    quote!({ #(#errors)* })
}
