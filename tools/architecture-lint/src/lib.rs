//! Layer boundary lint for the ticket gateway backend.
//!
//! Every `.rs` file under `backend/src/{domain,inbound,outbound}` belongs to
//! one layer of the hexagon. The lint parses each file, resolves the paths it
//! names (`use` trees and inline paths, with `crate::`, `self::` and
//! `super::` resolved against the file's own module) and reports any path
//! that reaches a forbidden sibling layer or a forbidden external crate:
//!
//! | layer      | may not reach                                          |
//! |------------|--------------------------------------------------------|
//! | `domain`   | `inbound`, `outbound`, HTTP server/client, OpenAPI     |
//! | `inbound`  | `outbound`, HTTP client                                |
//! | `outbound` | `inbound`, HTTP server, OpenAPI                        |

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use syn::visit::{self, Visit};
use thiserror::Error;

/// Library name of the linted crate, used by its tests and binary.
const CRATE_NAME: &str = "ticket_gateway";

const DOMAIN_FORBIDS: &[&str] = &[
    "actix_web",
    "actix_service",
    "awc",
    "reqwest",
    "utoipa",
    "utoipa_swagger_ui",
];
const INBOUND_FORBIDS: &[&str] = &["reqwest"];
const OUTBOUND_FORBIDS: &[&str] = &[
    "actix_web",
    "actix_service",
    "awc",
    "utoipa",
    "utoipa_swagger_ui",
];

/// A hexagon layer, named after its top-level module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Domain,
    Inbound,
    Outbound,
}

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    fn module(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn from_module(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.module() == name)
    }

    fn may_reach(self, other: Self) -> bool {
        match self {
            Self::Domain => other == Self::Domain,
            Self::Inbound => other != Self::Outbound,
            Self::Outbound => other != Self::Inbound,
        }
    }

    fn forbidden_crates(self) -> &'static [&'static str] {
        match self {
            Self::Domain => DOMAIN_FORBIDS,
            Self::Inbound => INBOUND_FORBIDS,
            Self::Outbound => OUTBOUND_FORBIDS,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module())
    }
}

/// What an offending path reached.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Target {
    Layer(Layer),
    Crate(String),
}

/// One forbidden dependency found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finding {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    pub layer: Layer,
    pub target: Target,
    /// The path as written, joined with `::`.
    pub via: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match &self.target {
            Target::Layer(layer) => format!("crate::{layer}"),
            Target::Crate(name) => format!("crate `{name}`"),
        };
        write!(
            f,
            "{}: {} must not depend on {target} (via `{}`)",
            self.file.display(),
            self.layer,
            self.via
        )
    }
}

/// Reasons the lint could not run to completion.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },
    #[error("{0} is not inside a hexagon layer")]
    OutsideLayers(PathBuf),
}

/// Lint every layer file under `src_dir` (the crate's `src/`).
///
/// Findings are sorted by file and deduplicated per target.
pub fn lint_tree(src_dir: &Path) -> Result<Vec<Finding>, LintError> {
    let mut findings = BTreeSet::new();
    for layer in Layer::ALL {
        let root = src_dir.join(layer.module());
        if !root.is_dir() {
            continue;
        }
        for file in rust_files(&root)? {
            let contents = fs::read_to_string(&file).map_err(|source| LintError::Io {
                path: file.clone(),
                source,
            })?;
            let relative = file.strip_prefix(src_dir).unwrap_or(&file);
            findings.extend(lint_source(relative, &contents)?);
        }
    }
    Ok(findings.into_iter().collect())
}

/// Lint one file given its path relative to `src/`.
pub fn lint_source(relative: &Path, contents: &str) -> Result<Vec<Finding>, LintError> {
    let module = module_path(relative);
    let layer = module
        .first()
        .and_then(|first| Layer::from_module(first))
        .ok_or_else(|| LintError::OutsideLayers(relative.to_path_buf()))?;
    let parsed = syn::parse_file(contents).map_err(|err| LintError::Parse {
        file: relative.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut names = NameCollector::default();
    names.visit_file(&parsed);

    let mut seen = BTreeSet::new();
    let mut findings = Vec::new();
    for path in names.paths {
        let Some(target) = forbidden_target(layer, &module, &path) else {
            continue;
        };
        if seen.insert(target.clone()) {
            findings.push(Finding {
                file: relative.to_path_buf(),
                layer,
                target,
                via: path.join("::"),
            });
        }
    }
    Ok(findings)
}

/// Module path of a source file: `domain/ports/mod.rs` is `domain::ports`.
fn module_path(relative: &Path) -> Vec<String> {
    let mut module: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if let Some(last) = module.last_mut() {
        if let Some(stem) = last.strip_suffix(".rs") {
            *last = stem.to_owned();
        }
    }
    if module.last().is_some_and(|last| last == "mod") {
        module.pop();
    }
    module
}

fn forbidden_target(layer: Layer, module: &[String], path: &[String]) -> Option<Target> {
    let (first, rest) = path.split_first()?;
    let absolute: Vec<&str> = match first.as_str() {
        "crate" => rest.iter().map(String::as_str).collect(),
        name if name == CRATE_NAME => rest.iter().map(String::as_str).collect(),
        "self" => module.iter().chain(rest).map(String::as_str).collect(),
        "super" => {
            let ups = path.iter().take_while(|segment| *segment == "super").count();
            let base = module.len().checked_sub(ups)?;
            module[..base]
                .iter()
                .chain(&path[ups..])
                .map(String::as_str)
                .collect()
        }
        external => {
            return layer
                .forbidden_crates()
                .contains(&external)
                .then(|| Target::Crate(external.to_owned()));
        }
    };
    let reached = Layer::from_module(absolute.first()?)?;
    (!layer.may_reach(reached)).then_some(Target::Layer(reached))
}

/// Collects every path a file names, as segment lists.
#[derive(Default)]
struct NameCollector {
    paths: Vec<Vec<String>>,
}

impl NameCollector {
    fn flatten_use(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(node) => {
                prefix.push(node.ident.to_string());
                self.flatten_use(&node.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(node) => self.push_leaf(prefix, node.ident.to_string()),
            syn::UseTree::Rename(node) => self.push_leaf(prefix, node.ident.to_string()),
            syn::UseTree::Glob(_) => self.push_leaf(prefix, "*".to_owned()),
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.flatten_use(item, prefix);
                }
            }
        }
    }

    fn push_leaf(&mut self, prefix: &[String], leaf: String) {
        let mut path = prefix.to_vec();
        path.push(leaf);
        self.paths.push(path);
    }
}

impl<'ast> Visit<'ast> for NameCollector {
    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.flatten_use(&node.tree, &mut Vec::new());
    }

    fn visit_path(&mut self, node: &'ast syn::Path) {
        // Single identifiers are locals or items in scope, never crate roots.
        if node.segments.len() > 1 {
            self.paths.push(
                node.segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect(),
            );
        }
        visit::visit_path(self, node);
    }
}

fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, LintError> {
    let io_error = |source| LintError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
