use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub code: Option<Expr>,
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let ident_str = ident.to_string();
        match ident_str.as_str() {
            "code" => self.code = Some(input.parse()?),
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            _ => return Err(syn::Error::new_spanned(ident, format!("unknown tag `{}`", ident_str))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The target struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // parse outer attributes, including documentation and `error` attributes
        let attributes = input.call(Attribute::parse_outer)?;
        let remaining = input.parse::<ItemStruct>()?;

        let mut error_args = None;
        for attr in &attributes {
            if attr.path().is_ident("error") {
                error_args = Some(attr.parse_args::<ErrorArgs>()?);
                break;
            }
        }

        let Some(error_args) = error_args else {
            return Err(syn::Error::new_spanned(
                &remaining.ident,
                "missing `#[error(...)]` attribute",
            ));
        };

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(
                &remaining.ident,
                "the `error` attribute needs a `message` tag",
            ));
        }

        Ok(ErrorKindTarget {
            name: remaining.ident,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let code = self.error_args.code
            .as_ref()
            .map(|e| quote! { #e })
            .unwrap_or_else(|| quote! { 0 });
        let message = self.error_args.message.as_ref();
        let labels = self.error_args.labels
            .as_ref()
            .map(|e| quote! { #e })
            .unwrap_or_else(|| quote! { [""] });
        let help = self.error_args.help
            .as_ref()
            .map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            fn code(&self) -> u16 {
                #code
            }

            fn message(&self) -> String {
                ::std::string::ToString::to_string(&(#message))
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_code(lambda_error::ErrorKind::code(self))
                    .with_message(lambda_error::ErrorKind::message(self))
                    .with_labels(
                        (#labels)
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(lambda_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}
