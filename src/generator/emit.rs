//! Dispatcher code generation.
//!
//! Builds the dispatcher as a token stream with `quote`, checks that it parses as a Rust file, and pretty-prints it
//! with `prettyplease`. The output is a module file meant to sit next to the fixtures it drives and be declared with
//! `mod fixtest_generated;`.

use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use fixtest_core::conventions::LONG_IGNORE_REASON;

use super::config::GenerateConfig;
use super::discovery::{Dispatch, FixtureInfo, TestCase};
use super::error::GenerateError;
use crate::version::FIXTEST_VERSION;

/// Where the dispatcher finds its fixture directory at test time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureDir {
    /// `concat!(env!("CARGO_MANIFEST_DIR"), suffix)`; `suffix` is empty or starts with `/`.
    ManifestRelative(String),
    Absolute(PathBuf),
}

impl FixtureDir {
    /// Locate `dir` relative to the nearest ancestor holding a `Cargo.toml`, falling back to an absolute path.
    pub fn resolve(dir: &Path, config: &GenerateConfig) -> Self {
        let absolute = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        if !config.manifest_relative {
            return FixtureDir::Absolute(absolute);
        }
        let manifest_dir = absolute.ancestors().find(|a| a.join("Cargo.toml").is_file());
        match manifest_dir.and_then(|root| absolute.strip_prefix(root).ok()) {
            Some(relative) => {
                let suffix: String = relative
                    .components()
                    .map(|c| format!("/{}", c.as_os_str().to_string_lossy()))
                    .collect();
                FixtureDir::ManifestRelative(suffix)
            }
            None => FixtureDir::Absolute(absolute),
        }
    }

    fn tokens(&self) -> TokenStream {
        match self {
            FixtureDir::ManifestRelative(suffix) => quote! { concat!(env!("CARGO_MANIFEST_DIR"), #suffix) },
            FixtureDir::Absolute(path) => {
                let path = path.to_string_lossy().into_owned();
                quote! { #path }
            }
        }
    }
}

/// Render the complete dispatcher source.
pub fn render(
    fixtures: &[FixtureInfo],
    checksum: &str,
    fixture_dir: &FixtureDir,
    config: &GenerateConfig,
) -> Result<String, GenerateError> {
    let runtime = format_ident!("{}", config.runtime_crate);
    let dir = fixture_dir.tokens();
    let modules = fixtures.iter().map(|f| fixture_module(f, &runtime));

    let tokens = quote! {
        #![allow(dead_code, non_snake_case, clippy::all)]

        const CHECKSUM: &str = #checksum;
        const FIXTURE_DIR: &str = #dir;

        /// Stop the test binary if the fixtures changed since this file was generated.
        fn guard() {
            static CHECKED: ::std::sync::Once = ::std::sync::Once::new();
            CHECKED.call_once(|| ::#runtime::guard::validate(FIXTURE_DIR, CHECKSUM));
        }

        #(#modules)*
    };

    let file: syn::File = syn::parse2(tokens).map_err(|e| GenerateError::Emit(e.to_string()))?;
    Ok(format!("{}{}", header(), prettyplease::unparse(&file)))
}

fn header() -> String {
    format!(
        "// Code generated by fixtest {FIXTEST_VERSION}. DO NOT EDIT.\n\
         // Regenerate with `fixtest generate` after changing any fixture in this directory.\n\n"
    )
}

fn fixture_module(fixture: &FixtureInfo, runtime: &syn::Ident) -> TokenStream {
    let module = format_ident!("{}", fixture.module_name());
    let segments = fixture.module_path.iter().map(|s| format_ident!("{}", s));
    let name = format_ident!("{}", fixture.name);
    let cases = fixture.cases.iter().map(|case| test_fn(fixture, case, runtime));

    quote! {
        mod #module {
            type Subject = super::super:: #(#segments::)* #name;

            #(#cases)*
        }
    }
}

fn test_fn(fixture: &FixtureInfo, case: &TestCase, runtime: &syn::Ident) -> TokenStream {
    let method = format_ident!("{}", case.method);
    let test_name = format!("{}::{}", fixture.name, case.method);

    let (attrs, body) = match fixture.dispatch(case) {
        Dispatch::Skip { reason } => (
            quote! {},
            quote! {
                let _ = Subject::#method;
                fx.skip(#reason);
            },
        ),
        Dispatch::Run { ignored } => {
            let attrs = if ignored {
                quote! { #[ignore = #LONG_IGNORE_REASON] }
            } else {
                quote! {}
            };
            let setup = if fixture.has_setup {
                quote! { let mut fixture = Subject::setup(&mut fx); }
            } else {
                quote! { let mut fixture = <Subject as ::core::default::Default>::default(); }
            };
            let teardown = if fixture.has_teardown {
                quote! { fixture.teardown(&mut fx); }
            } else {
                quote! {}
            };
            (
                attrs,
                quote! {
                    #setup
                    fixture.#method(&mut fx);
                    #teardown
                },
            )
        }
    };

    quote! {
        #[test]
        #attrs
        fn #method() {
            super::guard();
            ::#runtime::run_test(#test_name, |t| {
                let mut fx = ::#runtime::Fixture::new(t, ::#runtime::RunConfig::global().clone());
                #body
                fx.finalize();
            });
        }
    }
}
