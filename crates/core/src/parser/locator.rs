use super::ts_parser::SourceTree;
use super::utils::{node_text, unquote};
use crate::error::{Error, Result};
use tracing::debug;
use tree_sitter::Node;

/// A decorator-bearing declaration found in a parsed file.
///
/// Borrows from the [`SourceTree`] that produced it; both live only for the
/// duration of one scaffolding operation.
#[derive(Debug)]
pub struct DeclarationSite<'t> {
    /// The decorator's object-literal argument.
    pub metadata: Node<'t>,
    pub decorator: String,
}

/// Locate the declaration decorated with `@<decorator_name>({...})`.
///
/// Candidates are considered in document order; the first whose single
/// argument is a non-empty object literal wins and later duplicates are never
/// consulted. When `origin` is given, the decorator must be imported from
/// that module specifier, which disambiguates identically-named decorators
/// from unrelated sources.
pub fn find_declaration<'t>(
    tree: &'t SourceTree,
    source: &str,
    decorator_name: &str,
    origin: Option<&str>,
) -> Result<DeclarationSite<'t>> {
    let not_found = || Error::DeclarationNotFound {
        decorator: decorator_name.to_string(),
        path: tree.path().to_path_buf(),
    };

    if let Some(module) = origin {
        if !is_imported_from(tree.root(), source, decorator_name, module) {
            debug!("{decorator_name} is not imported from {module}");
            return Err(not_found());
        }
    }

    let mut candidates = Vec::new();
    collect_decorator_calls(tree.root(), source, decorator_name, &mut candidates);

    if candidates.is_empty() {
        return Err(not_found());
    }

    for call in candidates {
        if let Some(metadata) = object_argument(call) {
            if metadata.named_child_count() > 0 {
                debug!(
                    "matched @{decorator_name} at byte {} in {}",
                    call.start_byte(),
                    tree.path().display()
                );
                return Ok(DeclarationSite {
                    metadata,
                    decorator: decorator_name.to_string(),
                });
            }
        }
    }

    Err(Error::MalformedDeclaration {
        decorator: decorator_name.to_string(),
        path: tree.path().to_path_buf(),
    })
}

/// Depth-first, document-order walk collecting `@name(...)` call nodes.
fn collect_decorator_calls<'t>(
    node: Node<'t>,
    source: &str,
    name: &str,
    out: &mut Vec<Node<'t>>,
) {
    if node.kind() == "decorator" {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "call_expression" {
                continue;
            }
            if let Some(function) = child.child_by_field_name("function") {
                if function.kind() == "identifier" && node_text(function, source) == name {
                    out.push(child);
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_decorator_calls(child, source, name, out);
    }
}

/// The first object-literal argument of a call expression, if any.
fn object_argument(call: Node<'_>) -> Option<Node<'_>> {
    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    arguments
        .named_children(&mut cursor)
        .find(|arg| arg.kind() == "object")
}

/// Whether `name` is a named import from `module` anywhere in the file.
fn is_imported_from(root: Node<'_>, source: &str, name: &str, module: &str) -> bool {
    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "import_statement" {
            continue;
        }
        let Some(spec) = statement.child_by_field_name("source") else {
            continue;
        };
        if unquote(node_text(spec, source)) != module {
            continue;
        }
        if imports_name(statement, source, name) {
            return true;
        }
    }
    false
}

fn imports_name(statement: Node<'_>, source: &str, name: &str) -> bool {
    let mut stack = vec![statement];
    while let Some(node) = stack.pop() {
        if node.kind() == "import_specifier" {
            if let Some(imported) = node.child_by_field_name("name") {
                if node_text(imported, source) == name {
                    return true;
                }
            }
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            stack.push(child);
        }
    }
    false
}
