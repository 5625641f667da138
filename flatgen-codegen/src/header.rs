//! Header file packaging.

use crate::error::CodegenError;
use crate::generator::Generator;
use flatgen_schema::Schema;
use std::path::{Path, PathBuf};

/// Extension of generated headers.
pub const HEADER_EXTENSION: &str = "fb.h";

/// Returns the include guard macro for a header, e.g. `__MONSTER_FLATBUFFERS_H__`.
#[must_use]
pub fn header_guard(file_name: &str) -> String {
    let stem: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("__{}_FLATBUFFERS_H__", stem)
}

/// Generates a complete header: banner, include guard and module body.
///
/// The guard and banner are emitted even when the module body is empty.
#[must_use]
pub fn generate_header(schema: &mut Schema, file_name: &str) -> String {
    let guard = header_guard(file_name);
    let body = Generator::new(schema).generate();

    let mut output = String::new();
    output.push_str("// automatically generated, do not modify\n\n");
    output.push_str(&format!("#ifndef {}\n", guard));
    output.push_str(&format!("#define {}\n\n", guard));
    output.push_str(&body);
    output.push_str("\n#endif\n");
    output.push_str(&format!(
        "\n// the end of the header file {}.{}\n\n",
        file_name, HEADER_EXTENSION
    ));
    output
}

/// Generates a header and writes it to `<dir>/<file_name>.fb.h`.
///
/// # Returns
/// Path of the written header.
///
/// # Errors
/// Returns `CodegenError::Io` if the file cannot be written.
pub fn generate_file(
    schema: &mut Schema,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, CodegenError> {
    let code = generate_header(schema, file_name);
    let path = dir.join(format!("{}.{}", file_name, HEADER_EXTENSION));
    std::fs::write(&path, code)?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}
