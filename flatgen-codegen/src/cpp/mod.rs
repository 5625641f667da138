//! C++ code generation modules.

pub mod enums;
pub mod structs;
pub mod tables;
pub mod types;

pub use enums::{EnumGenerator, NameTable};
pub use structs::StructGenerator;
pub use tables::TableGenerator;
pub use types::TypeMapper;

/// Appends a doc comment as `///` lines, one per source line.
pub(crate) fn push_doc_comment(output: &mut String, doc: Option<&str>, indent: &str) {
    let Some(doc) = doc else {
        return;
    };
    for line in doc.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str(&format!("{}///\n", indent));
        } else {
            output.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_doc_comment_multiline() {
        let mut output = String::new();
        push_doc_comment(&mut output, Some("First line.\n\nThird line."), "  ");
        assert_eq!(output, "  /// First line.\n  ///\n  /// Third line.\n");
    }

    #[test]
    fn test_push_doc_comment_none() {
        let mut output = String::new();
        push_doc_comment(&mut output, None, "");
        assert!(output.is_empty());
    }
}
