//! Directory-based Go package loading.

use std::{
    fs,
    path::{Path, PathBuf},
};

use structproto_core::{FeedError, PackageFailure, SourcePackage, TypeFeed};

use crate::{ast::GoTypeDecl, parser::parse_go_file, resolver::resolve_package};

/// [`TypeFeed`] that reads Go packages from source directories.
///
/// Every package is loaded before any error is reported, so a single run
/// lists all broken packages at once.
#[derive(Debug, Clone)]
pub struct GoSourceFeed {
    base_dir: PathBuf,
    packages: Vec<String>,
}

impl GoSourceFeed {
    /// `packages` are directory paths; relative ones are resolved against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, packages: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            packages,
        }
    }

    fn package_dir(&self, package: &str) -> PathBuf {
        let path = Path::new(package);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl TypeFeed for GoSourceFeed {
    fn load(&self) -> Result<Vec<SourcePackage>, FeedError> {
        let mut loaded = Vec::with_capacity(self.packages.len());
        let mut failures = Vec::new();

        for package in &self.packages {
            match load_package(package, &self.package_dir(package)) {
                Ok(p) => loaded.push(p),
                Err(messages) => failures.push(PackageFailure::new(package.clone(), messages)),
            }
        }

        if !failures.is_empty() {
            return Err(FeedError::PackageLoad { failures });
        }
        Ok(loaded)
    }
}

/// Load one package directory, collecting every problem found in it.
fn load_package(package: &str, dir: &Path) -> Result<SourcePackage, Vec<String>> {
    let files = go_files(dir).map_err(|e| vec![format!("{}: {e}", dir.display())])?;
    if files.is_empty() {
        return Err(vec![format!("no Go files in {}", dir.display())]);
    }

    let mut errors = Vec::new();
    let mut package_name: Option<(String, String)> = None;
    let mut decls: Vec<GoTypeDecl> = Vec::new();

    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                errors.push(format!("{file_name}: {e}"));
                continue;
            }
        };
        let parsed = match parse_go_file(&source) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(format!("{file_name}: {e}"));
                continue;
            }
        };
        if let Some((name, first_file)) = &package_name {
            if *name != parsed.package {
                errors.push(format!(
                    "found packages {name} ({first_file}) and {} ({file_name}) in {}",
                    parsed.package,
                    dir.display()
                ));
                continue;
            }
        } else {
            package_name = Some((parsed.package.clone(), file_name));
        }
        decls.extend(parsed.types);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let name = package_name.map(|(name, _)| name).unwrap_or_default();
    Ok(resolve_package(package, &name, &decls))
}

/// `.go` files of `dir` in name order, test files excluded.
fn go_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".go") && !name.ends_with("_test.go") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
