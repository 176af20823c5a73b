//! Procedural macros for the `puzzle-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties given to `#[solution_runner(...)]`.
#[derive(Default)]
struct RunnerProperties {
    /// Expression for the solution name; should resolve to a string slice.
    name: Option<Expr>,
    /// Type implementing `ParseData`, if input is parsed before solving.
    parsed: Option<Type>,
    /// Type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// Type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
}

/// Parse a property value into `slot`, rejecting a second occurrence of the same key.
fn set_once<T: Parse>(slot: &mut Option<T>, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn require<T>(value: Option<T>, key: &str) -> syn::Result<T> {
    value.ok_or_else(|| {
        Error::new(
            Span::call_site(),
            format!("missing required property: '{key}'"),
        )
    })
}

/// Attribute macro implementing `puzzle_framework::runner::SolutionRunner` for a struct or the
/// self type of an impl block.
///
/// # Properties
///
/// - `name` (required): an expression evaluating to `&str`, the solution's display name.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two` (required): the type implementing `Solution<PartTwo>`.
/// - `parsed` (optional): a type implementing `ParseData`. When given, input is parsed once and
///   passed to both parts; otherwise both parts receive the input string.
///
/// A compile error is reported for a missing required property, a repeated property, an unknown
/// property, or an item that is neither a struct nor an impl block.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
/// struct Day01Runner;
/// ```
///
/// ```ignore
/// #[solution_runner(name = "Day 3", parsed = Schematic, part_one = Day03, part_two = Day03)]
/// impl PuzzleDays<3> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            set_once(&mut properties.name, &meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut properties.parsed, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut properties.part_one, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut properties.part_two, &meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with properties_parser);

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    match expand(properties, &item) {
        Ok(runner_impl) => TokenStream::from(quote! {
            #original_input
            #runner_impl
        }),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(properties: RunnerProperties, item: &Item) -> syn::Result<proc_macro2::TokenStream> {
    let name = require(properties.name, "name")?;
    let part_one = require(properties.part_one, "part_one")?;
    let part_two = require(properties.part_two, "part_two")?;

    let self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Err(Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            ));
        }
    };

    let solve_call = if let Some(parsed) = properties.parsed {
        quote! {
            ::puzzle_framework::runner::solve_parsed_full_solution::<#parsed, #part_one, #part_two>(
                #name, input, handler, timed
            )
        }
    } else {
        quote! {
            ::puzzle_framework::runner::solve_full_solution::<#part_one, #part_two>(
                #name, input, handler, timed
            )
        }
    };

    Ok(quote! {
        impl ::puzzle_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn ::puzzle_framework::runner::OutputHandler,
                timed: bool,
            ) -> ::puzzle_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}
