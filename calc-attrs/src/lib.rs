mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use calc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(stage = Syntax, message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `stage`     | The pipeline stage that raises the error: `Lex`, `Syntax`, or `Eval`.        |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | One label per span of the error, pointing to that span. May be empty.        |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message`, `labels` and `help` accept expressions. For structs with named fields, the
/// expressions are evaluated with the members of the struct in scope, so they can be used in the
/// expression (tuple structs are not supported).
///
/// [`ErrorKind`]: https://docs.rs/calc-error/latest/calc_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl calc_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
