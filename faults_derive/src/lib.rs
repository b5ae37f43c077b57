mod enum_;
mod struct_;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::Parse, parse_macro_input, punctuated::Punctuated, spanned::Spanned, Attribute, Error,
    Fields, Ident, Item, LitStr, Token,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Capability {
    Timeout,
    NotFound,
    StatusCode,
    PreConditionFailed,
    Conflict,
    Gone,
}

impl Capability {
    const ALL: [Self; 6] = [
        Self::Timeout,
        Self::NotFound,
        Self::StatusCode,
        Self::PreConditionFailed,
        Self::Conflict,
        Self::Gone,
    ];

    fn from_ident(ident: &Ident) -> Option<Self> {
        Some(match ident.to_string().as_str() {
            "timeout" => Self::Timeout,
            "not_found" => Self::NotFound,
            "status_code" => Self::StatusCode,
            "pre_condition_failed" => Self::PreConditionFailed,
            "conflict" => Self::Conflict,
            "gone" => Self::Gone,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::NotFound => "not_found",
            Self::StatusCode => "status_code",
            Self::PreConditionFailed => "pre_condition_failed",
            Self::Conflict => "conflict",
            Self::Gone => "gone",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Signature of the accessor of this capability in `faults::Behavior`.
    fn signature(self) -> TokenStream {
        let method = format_ident!("{}", self.name());
        match self {
            Self::Timeout => quote! { fn #method(&self) -> ::core::option::Option<::core::time::Duration> },
            Self::NotFound | Self::StatusCode => {
                quote! { fn #method(&self) -> ::core::option::Option<&str> }
            }
            Self::PreConditionFailed | Self::Conflict | Self::Gone => {
                quote! { fn #method(&self) -> ::core::option::Option<bool> }
            }
        }
    }

    /// Value of this capability when declared on a type or variant.
    fn declared_value(self, arg: &BehaviorArg) -> Result<TokenStream, Error> {
        match (self, &arg.value) {
            (Self::PreConditionFailed | Self::Conflict | Self::Gone, None) => Ok(quote! { true }),
            (Self::NotFound | Self::StatusCode, Some(value)) => Ok(quote! { #value }),
            (Self::Timeout, _) => Err(Error::new(
                arg.span,
                "`timeout` must be declared on a `Duration` field",
            )),
            (Self::NotFound | Self::StatusCode, None) => Err(Error::new(
                arg.span,
                format!(
                    "`{}` must be declared on a field or given a value, like `{} = \"...\"`",
                    self.name(),
                    self.name()
                ),
            )),
            (Self::PreConditionFailed | Self::Conflict | Self::Gone, Some(value)) => Err(
                Error::new(value.span(), format!("`{}` does not take a value", self.name())),
            ),
        }
    }

    /// Value of this capability when declared on the field bound to `binding`.
    fn field_value(self, arg: &BehaviorArg, binding: &Ident) -> Result<TokenStream, Error> {
        if let Some(value) = &arg.value {
            return Err(Error::new(
                value.span(),
                "behaviors declared on a field do not take a value",
            ));
        }

        Ok(match self {
            Self::Timeout | Self::PreConditionFailed | Self::Conflict | Self::Gone => {
                quote! { ::core::clone::Clone::clone(#binding) }
            }
            Self::NotFound | Self::StatusCode => {
                quote! { ::core::convert::AsRef::<str>::as_ref(#binding) }
            }
        })
    }
}

/// A single argument of a `#[behavior(...)]` attribute, e.g. `conflict` or
/// `status_code = "409"`.
struct BehaviorArg {
    capability: Capability,
    value: Option<LitStr>,
    span: proc_macro2::Span,
}

impl Parse for BehaviorArg {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let Some(capability) = Capability::from_ident(&ident) else {
            return Err(Error::new(
                ident.span(),
                "unknown behavior. valid behaviors are `timeout`, `not_found`, `status_code`, \
                 `pre_condition_failed`, `conflict` or `gone`.",
            ));
        };

        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse::<LitStr>()?)
        } else {
            None
        };

        Ok(Self {
            capability,
            value,
            span: ident.span(),
        })
    }
}

fn behavior_args(attrs: &[Attribute]) -> Result<Vec<BehaviorArg>, Error> {
    let mut args = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("behavior")) {
        args.extend(attr.parse_args_with(Punctuated::<BehaviorArg, Token![,]>::parse_terminated)?);
    }

    Ok(args)
}

/// Name a field is bound to when destructuring: its own name, or `f{index}` for tuple fields.
fn field_binding(index: usize, field: &syn::Field) -> Ident {
    field
        .ident
        .clone()
        .unwrap_or_else(|| format_ident!("f{index}"))
}

/// Pattern destructuring all `fields`, e.g. `{ a, b }` or `(f0, f1)`.
fn fields_pattern(fields: &Fields) -> TokenStream {
    let bindings = fields.iter().enumerate().map(|(i, f)| field_binding(i, f));
    match fields {
        Fields::Named(_) => quote! { { #(#bindings),* } },
        Fields::Unnamed(_) => quote! { ( #(#bindings),* ) },
        Fields::Unit => quote! {},
    }
}

/// Values of the capabilities declared on a type (or a variant) and its fields, indexed by
/// [`Capability::index`].
struct Behaviors([Option<TokenStream>; 6]);

impl Behaviors {
    fn collect(attrs: &[Attribute], fields: &Fields) -> Result<Self, Error> {
        let mut behaviors = Self(Default::default());

        for arg in behavior_args(attrs)? {
            let value = arg.capability.declared_value(&arg)?;
            behaviors.set(&arg, value)?;
        }

        for (i, field) in fields.iter().enumerate() {
            let binding = field_binding(i, field);
            for arg in behavior_args(&field.attrs)? {
                let value = arg.capability.field_value(&arg, &binding)?;
                behaviors.set(&arg, value)?;
            }
        }

        Ok(behaviors)
    }

    fn set(&mut self, arg: &BehaviorArg, value: TokenStream) -> Result<(), Error> {
        let slot = &mut self.0[arg.capability.index()];
        if slot.is_some() {
            return Err(Error::new(
                arg.span,
                format!("duplicate `{}` behavior", arg.capability.name()),
            ));
        }

        *slot = Some(value);
        Ok(())
    }

    fn get(&self, capability: Capability) -> Option<&TokenStream> {
        self.0[capability.index()].as_ref()
    }
}

#[proc_macro_derive(Behavior, attributes(behavior))]
pub fn derive_behavior(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input: Item = parse_macro_input!(input);

    let result = match input {
        Item::Enum(e) => enum_::derive_behavior_enum(&e),
        Item::Struct(s) => struct_::derive_behavior_struct(&s),
        _ => Err(syn::Error::new(input.span(), "Unsupported item")),
    };

    match result {
        Ok(ok) => ok.into(),
        Err(e) => e.into_compile_error().into(),
    }
}
