//! Extraction orchestrator: file, source text and directory entry points.

mod comments;
mod helpers;
mod imports;
mod records;
pub mod type_expr;

use std::collections::BTreeMap;
use std::path::Path;

use ast_grep_core::AstGrep;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::parser::{SOURCE_PATH, is_go_file, parse_source};
use crate::test_files::is_test_file;
use crate::types::{DirOptions, ExtractOptions, File, Package};

use comments::CommentIndex;

/// Extract the file at `path`.
///
/// # Errors
/// Returns `ParserError` if the file cannot be read, does not parse, or its
/// absolute path cannot be resolved.
pub fn extract_file(path: impl AsRef<Path>, options: ExtractOptions) -> Result<File, ParserError> {
    let path = path.as_ref();
    let shown = path.to_string_lossy().into_owned();
    tracing::debug!(path = %shown, ?options, "extracting file");

    let source = std::fs::read_to_string(path)?;
    let tree = parse_source(&source).map_err(|e| e.with_path(&shown))?;
    let abs_path = std::path::absolute(path).map_err(|source| ParserError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(extract_tree(
        &tree,
        &source,
        &shown,
        &abs_path.to_string_lossy(),
        options,
    ))
}

/// Extract Go source text that did not come from a file.
///
/// The resulting [`File`] has `path` set to [`SOURCE_PATH`] and an empty
/// `abs_path`.
///
/// # Errors
/// Returns `ParserError::Parse` if the source does not parse.
pub fn extract_source(source: &str, options: ExtractOptions) -> Result<File, ParserError> {
    let tree = parse_source(source)?;
    Ok(extract_tree(&tree, source, SOURCE_PATH, "", options))
}

/// Extract every `.go` file directly inside `path`, grouped by package name.
///
/// # Errors
/// Returns the first error met; no partial result is returned.
pub fn extract_dir(
    path: impl AsRef<Path>,
    options: ExtractOptions,
) -> Result<BTreeMap<String, Package>, ParserError> {
    extract_dir_with(
        path,
        &DirOptions {
            extract: options,
            ..DirOptions::default()
        },
    )
}

/// Like [`extract_dir`], with control over test file inclusion.
///
/// # Errors
/// Returns the first error met; no partial result is returned.
pub fn extract_dir_with(
    path: impl AsRef<Path>,
    options: &DirOptions,
) -> Result<BTreeMap<String, Package>, ParserError> {
    let dir = path.as_ref();
    tracing::debug!(dir = %dir.display(), ?options, "extracting directory");

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_go_file(&name) || (!options.include_tests && is_test_file(&name)) {
            continue;
        }
        let file_path = entry.path();
        if file_path.is_file() {
            files.push(file_path);
        }
    }
    files.sort();

    let mut packages: BTreeMap<String, Package> = BTreeMap::new();
    for file_path in files {
        let file = extract_file(&file_path, options.extract)?;
        packages
            .entry(file.package.clone())
            .or_insert_with(|| Package {
                name: file.package.clone(),
                files: Vec::new(),
            })
            .files
            .push(file);
    }

    tracing::debug!(dir = %dir.display(), packages = packages.len(), "directory extracted");
    Ok(packages)
}

/// Assemble a [`File`] from an already-parsed tree.
///
/// `source` must be the text `root` was parsed from; comment lookups slice it
/// by the tree's byte offsets.
pub(crate) fn extract_tree<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
    source: &str,
    path: &str,
    abs_path: &str,
    options: ExtractOptions,
) -> File {
    let index = CommentIndex::new(root, source);

    let package = root
        .root()
        .children()
        .find(|c| c.kind().as_ref() == "package_clause")
        .and_then(|clause| {
            clause
                .children()
                .find(|c| c.kind().as_ref() == "package_identifier")
        })
        .map(|name| name.text().to_string())
        .unwrap_or_default();

    let imports = options
        .contains(ExtractOptions::IMPORTS)
        .then(|| imports::extract_imports(root, &index));
    let records = options
        .contains(ExtractOptions::RECORDS)
        .then(|| records::extract_records(root, &index));

    File {
        package,
        path: path.to_string(),
        abs_path: abs_path.to_string(),
        imports,
        records,
    }
}

#[cfg(test)]
mod tests;
