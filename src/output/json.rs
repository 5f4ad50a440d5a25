//! JSON output formatting

use std::io;

use crate::tree::Tree;

/// Print the tree as a pretty-printed JSON manifest to stdout.
pub fn print_json(tree: &Tree) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&tree.to_manifest()).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
