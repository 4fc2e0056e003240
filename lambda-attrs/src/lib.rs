mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `lambda-error` for the given struct.
///
/// The information of the error is given with the `error` attribute by adding the corresponding
/// tags to it:
/// ```ignore
/// use lambda_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(code = 107, message = "missing token", labels = ["add something here"])]
/// pub struct MissingToken;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `code`    | The numeric code of the error, shown next to the message.                      |
/// | `message` | The message displayed at the top of the error when it is displayed.            |
/// | `labels`  | An array of label texts; the n-th label points at the n-th span of the error.  |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each tag accepts an expression. `message`, each label and `help` may evaluate to a [`String`]
/// or a `&str`. The expressions are evaluated inside a method of the struct, so fields are
/// available through `self`.
///
/// The generated code refers to the `ariadne` and `lambda_error` crates, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl lambda_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
