// Mermaid diagram rendering
//
// Every function returns a complete fenced block ready to paste into
// Markdown. Output depends only on the input, so the same analysis always
// renders byte-identical diagrams.

use crate::analysis::TreeNode;
use crate::parser::Declaration;

/// Default levels of the file tree drawn
pub const DEFAULT_DIAGRAM_DEPTH: usize = 3;
/// Sibling nodes drawn per tree level
pub const MAX_TREE_SIBLINGS: usize = 20;
/// Classes drawn in the class diagram
pub const MAX_CLASSES: usize = 30;
/// Methods listed per class
pub const MAX_METHODS_PER_CLASS: usize = 5;
/// Functions drawn in the function diagram
pub const MAX_FUNCTIONS: usize = 20;
/// Modules drawn in the architecture chain
pub const MAX_MODULES: usize = 10;

const FENCE_OPEN: &str = "```mermaid\n";
const FENCE_CLOSE: &str = "```\n";
const TREE_ROOT_ID: &str = "root";

/// File tree as a top-down graph
///
/// Node ids are `{parent_id}_{index}`, so two files with the same name never
/// collide.
pub fn tree_diagram(tree: &[TreeNode], max_depth: usize) -> String {
    let mut out = String::from(FENCE_OPEN);
    out.push_str("graph TD\n");
    push_tree_level(&mut out, tree, TREE_ROOT_ID, 0, max_depth);
    out.push_str(FENCE_CLOSE);
    out
}

fn push_tree_level(
    out: &mut String,
    nodes: &[TreeNode],
    parent_id: &str,
    depth: usize,
    max_depth: usize,
) {
    if depth >= max_depth {
        return;
    }

    for (idx, node) in nodes.iter().take(MAX_TREE_SIBLINGS).enumerate() {
        let node_id = format!("{}_{}", parent_id, idx);
        let marker = if node.is_dir() { "📁" } else { "📄" };

        out.push_str(&format!("    {}[\"{} {}\"]\n", node_id, marker, node.name));
        out.push_str(&format!("    {} --> {}\n", parent_id, node_id));

        if node.is_dir() && !node.children.is_empty() {
            push_tree_level(out, &node.children, &node_id, depth + 1, max_depth);
        }
    }
}

/// Classes with up to five public method names each
pub fn class_hierarchy_diagram(classes: &[Declaration]) -> String {
    let mut out = String::from(FENCE_OPEN);
    out.push_str("classDiagram\n");

    for class in classes.iter().take(MAX_CLASSES) {
        out.push_str(&format!("    class {} {{\n", class.name));
        for method in scan_method_names(&class.source_text)
            .into_iter()
            .take(MAX_METHODS_PER_CLASS)
        {
            out.push_str(&format!("        +{}()\n", method));
        }
        out.push_str("    }\n");
    }

    out.push_str(FENCE_CLOSE);
    out
}

/// Public method names found by scanning class source line by line
///
/// Text matching, not parsing: any line holding both `def ` and `(`
/// contributes whatever sits between them. Names starting with `_` are
/// dropped. Comments and strings that look like definitions will match too.
pub fn scan_method_names(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| line.contains('('))
        .filter_map(|line| {
            let (_, after) = line.split_once("def ")?;
            let segment = after.split("def ").next().unwrap_or(after);
            let name = segment.split('(').next().unwrap_or(segment).trim();
            (!name.is_empty() && !name.starts_with('_')).then(|| name.to_string())
        })
        .collect()
}

/// Functions as unconnected nodes
///
/// Ids replace spaces and hyphens with underscores; names that differ only
/// in those characters share a node.
pub fn function_call_diagram(functions: &[Declaration]) -> String {
    let mut out = String::from(FENCE_OPEN);
    out.push_str("flowchart TD\n");

    for func in functions.iter().take(MAX_FUNCTIONS) {
        out.push_str(&format!("    {}[\"{}\"]\n", function_id(&func.name), func.name));
    }

    out.push_str(FENCE_CLOSE);
    out
}

fn function_id(name: &str) -> String {
    name.replace([' ', '-'], "_")
}

/// Modules chained left to right in input order
pub fn architecture_diagram<S: AsRef<str>>(modules: &[S]) -> String {
    let mut out = String::from(FENCE_OPEN);
    out.push_str("graph LR\n");

    for (idx, module) in modules.iter().take(MAX_MODULES).enumerate() {
        out.push_str(&format!("    module_{}[\"{}\"]\n", idx, module.as_ref()));
        if idx > 0 {
            out.push_str(&format!("    module_{} --> module_{}\n", idx - 1, idx));
        }
    }

    out.push_str(FENCE_CLOSE);
    out
}
