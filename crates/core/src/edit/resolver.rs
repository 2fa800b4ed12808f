use crate::error::{Error, Result};
use crate::parser::{DeclarationSite, node_text, utils::unquote};
use std::path::Path;
use tracing::debug;
use tree_sitter::Node;

/// Outcome of insertion-point resolution for a list-shaped property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// Insert `text` at `offset`, a byte offset into the original source.
    At { offset: usize, text: String },
    /// The identifier is already an element of the collection; nothing to do.
    AlreadyPresent,
}

/// Compute the exact insertion for appending `identifier` to the `property`
/// array of a located declaration.
///
/// The offset is the end boundary of the element sequence, so the new entry
/// becomes the last element. The fragment is the identifier wrapped in the
/// collection's bracket syntax. A property that is absent or not array-shaped
/// is a hard failure: guessing how to create one risks corrupting the
/// declaration.
pub fn resolve_insertion(
    site: &DeclarationSite<'_>,
    source: &str,
    path: &Path,
    property: &str,
    identifier: &str,
) -> Result<Insertion> {
    let array = find_array_property(site.metadata, source, path, property)?;

    let wrapped = format!("[{identifier}]");
    let mut cursor = array.walk();
    let mut last: Option<Node<'_>> = None;
    for element in array.named_children(&mut cursor) {
        let text = node_text(element, source).trim();
        if text == identifier || text == wrapped {
            debug!("{identifier} already present in `{property}` of {}", path.display());
            return Ok(Insertion::AlreadyPresent);
        }
        last = Some(element);
    }

    match last {
        Some(element) => Ok(Insertion::At {
            offset: element.end_byte(),
            text: format!(", {wrapped}"),
        }),
        // Empty array: insert right after the opening bracket.
        None => Ok(Insertion::At {
            offset: array.start_byte() + 1,
            text: wrapped,
        }),
    }
}

fn find_array_property<'t>(
    object: Node<'t>,
    source: &str,
    path: &Path,
    property: &str,
) -> Result<Node<'t>> {
    let missing = || Error::MissingCollection {
        property: property.to_string(),
        path: path.to_path_buf(),
    };

    let mut cursor = object.walk();
    for pair in object.named_children(&mut cursor) {
        if pair.kind() != "pair" {
            continue;
        }
        let Some(key) = pair.child_by_field_name("key") else {
            continue;
        };
        if unquote(node_text(key, source)) != property {
            continue;
        }
        let value = pair.child_by_field_name("value").ok_or_else(missing)?;
        if value.kind() != "array" {
            // Present but the wrong shape is just as fatal as absent.
            return Err(missing());
        }
        return Ok(value);
    }

    Err(missing())
}
