//! Fixture discovery.
//!
//! Scans the same file set the checksum covers, parses each file with `syn`, and collects every inherent `impl`
//! block whose type name ends in `Fixture`. Method names decide how each case is dispatched (see
//! [`fixtest_core::conventions`]).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use fixtest_core::checksum;
use fixtest_core::conventions::{self, CaseKind, SETUP_METHOD, TEARDOWN_METHOD};
use syn::{ImplItem, ImplItemFn, Item, Type, Visibility};

use super::error::{GenerateError, ParseDiagnostic};

/// A test method discovered on a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub method: String,
    pub kind: CaseKind,
}

/// How the dispatcher runs one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run the method; `ignored` cases carry `#[ignore]`.
    Run { ignored: bool },
    /// Do not run the method; skip through the fixture with this reason.
    Skip { reason: String },
}

/// A fixture type and everything the dispatcher needs to drive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureInfo {
    pub name: String,
    /// Module path from the dispatcher's parent module, e.g. `["game_fixture"]`.
    pub module_path: Vec<String>,
    pub file_path: PathBuf,
    pub has_setup: bool,
    pub has_teardown: bool,
    pub cases: Vec<TestCase>,
}

impl FixtureInfo {
    fn new(name: String, module_path: Vec<String>, file_path: PathBuf) -> Self {
        Self {
            name,
            module_path,
            file_path,
            has_setup: false,
            has_teardown: false,
            cases: Vec::new(),
        }
    }

    pub fn has_focus(&self) -> bool {
        self.cases.iter().any(|c| c.kind == CaseKind::Focus)
    }

    /// Decide how `case` is dispatched, taking focus mode into account.
    pub fn dispatch(&self, case: &TestCase) -> Dispatch {
        match case.kind {
            CaseKind::Skip => Dispatch::Skip {
                reason: format!("Skipping test case: '{}'", case.method),
            },
            kind if self.has_focus() && kind != CaseKind::Focus => Dispatch::Skip {
                reason: format!("Skipping test case: '{}' (not focused)", case.method),
            },
            CaseKind::Long => Dispatch::Run { ignored: true },
            CaseKind::Run | CaseKind::Focus => Dispatch::Run { ignored: false },
        }
    }

    /// `module::path::Type`, or the bare type name for fixtures in the parent module.
    pub fn qualified_name(&self) -> String {
        self.module_path.iter().chain([&self.name]).cloned().collect::<Vec<_>>().join("::")
    }

    /// The `snake_case` module name used for this fixture in generated code.
    pub fn module_name(&self) -> String {
        let base = conventions::module_name(&self.name);
        if self.module_path.is_empty() {
            base
        } else {
            format!("{}_{}", self.module_path.join("_"), base)
        }
    }
}

/// Discover every fixture in `dir`.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover(dir: &Path) -> Result<Vec<FixtureInfo>, GenerateError> {
    if !dir.is_dir() {
        return Err(GenerateError::NotADirectory(dir.to_path_buf()));
    }

    let mut fixtures = Vec::new();
    for path in checksum::source_files(dir)? {
        let source = fs::read_to_string(&path).map_err(|source| GenerateError::Read {
            path: path.clone(),
            source,
        })?;
        discover_source(&path, &source, &mut fixtures)?;
    }

    fixtures.retain(|f: &FixtureInfo| {
        if f.cases.is_empty() {
            tracing::debug!(fixture = %f.name, "fixture has no test cases; skipping");
        }
        !f.cases.is_empty()
    });
    check_module_names(&fixtures)?;
    tracing::debug!(count = fixtures.len(), "discovered fixtures");
    Ok(fixtures)
}

/// Every fixture needs its own module in the dispatcher.
fn check_module_names(fixtures: &[FixtureInfo]) -> Result<(), GenerateError> {
    let mut seen: HashMap<String, &FixtureInfo> = HashMap::new();
    for fixture in fixtures {
        let module = fixture.module_name();
        if let Some(first) = seen.get(&module) {
            return Err(GenerateError::DuplicateModule {
                module,
                first: first.qualified_name(),
                first_file: first.file_path.clone(),
                second: fixture.qualified_name(),
                second_file: fixture.file_path.clone(),
            });
        }
        seen.insert(module, fixture);
    }
    Ok(())
}

/// Parse one source file and merge its fixtures into `fixtures`.
pub fn discover_source(path: &Path, source: &str, fixtures: &mut Vec<FixtureInfo>) -> Result<(), GenerateError> {
    let file = syn::parse_file(source).map_err(|err| ParseDiagnostic::from_syn(path, source, &err))?;
    collect_items(&file.items, path, &module_path_for(path), fixtures);
    Ok(())
}

/// `main.rs`, `lib.rs` and `mod.rs` are the parent module itself; any other file is a child module named after it.
fn module_path_for(path: &Path) -> Vec<String> {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some("main" | "lib" | "mod") | None => Vec::new(),
        Some(stem) => vec![stem.to_string()],
    }
}

fn collect_items(items: &[Item], path: &Path, module_path: &[String], fixtures: &mut Vec<FixtureInfo>) {
    for item in items {
        match item {
            Item::Impl(item_impl) if item_impl.trait_.is_none() => {
                let Some(name) = self_type_name(&item_impl.self_ty) else {
                    continue;
                };
                if !conventions::is_fixture_type(&name) {
                    continue;
                }
                let index = match fixtures
                    .iter()
                    .position(|f| f.name == name && f.module_path == module_path)
                {
                    Some(index) => index,
                    None => {
                        fixtures.push(FixtureInfo::new(name, module_path.to_vec(), path.to_path_buf()));
                        fixtures.len() - 1
                    }
                };
                for impl_item in &item_impl.items {
                    if let ImplItem::Fn(method) = impl_item {
                        collect_method(&mut fixtures[index], method);
                    }
                }
            }
            Item::Mod(item_mod) => {
                if let Some((_, nested)) = &item_mod.content {
                    let mut nested_path = module_path.to_vec();
                    nested_path.push(item_mod.ident.to_string());
                    collect_items(nested, path, &nested_path, fixtures);
                }
            }
            _ => {}
        }
    }
}

fn self_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.segments.last().map(|segment| segment.ident.to_string())
        }
        _ => None,
    }
}

fn collect_method(fixture: &mut FixtureInfo, method: &ImplItemFn) {
    let name = method.sig.ident.to_string();
    let has_receiver = method.sig.receiver().is_some();

    let recognized = if name == SETUP_METHOD {
        if has_receiver {
            tracing::warn!(fixture = %fixture.name, "`setup` takes `self`; expected `fn setup(fx: &mut Fixture) -> Self`");
            false
        } else {
            fixture.has_setup = true;
            true
        }
    } else if name == TEARDOWN_METHOD {
        fixture.has_teardown = has_receiver;
        has_receiver
    } else if let Some(kind) = conventions::classify(&name) {
        if has_receiver {
            fixture.cases.push(TestCase { method: name.clone(), kind });
            true
        } else {
            tracing::warn!(fixture = %fixture.name, method = %name, "test method has no `self` receiver; ignoring");
            false
        }
    } else {
        false
    };

    if recognized && matches!(method.vis, Visibility::Inherited) {
        tracing::warn!(
            fixture = %fixture.name,
            method = %name,
            "method is private; the generated dispatcher needs at least `pub(crate)` visibility"
        );
    }
}
