//! Project-variable expansion over raw configuration text.

use indexmap::IndexMap;
use miette::NamedSource;

use crate::{Error, Result};

/// Substitute every `${name}` reference in `src` from `vars`.
///
/// Expansion runs before parsing, so variables may appear anywhere in the
/// text, including inside keys. A reference to an undefined variable is a
/// load error, never a silent blank.
pub fn expand_variables(
    src: &str,
    filename: &str,
    vars: &IndexMap<String, String>,
) -> Result<String> {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    let mut offset = 0;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let reference_at = offset + start;

        let Some(end) = rest[start + 2..].find('}') else {
            return Err(Box::new(Error::UnterminatedVariable {
                src: NamedSource::new(filename, src.to_string()),
                span: (reference_at, 2).into(),
            }));
        };

        let name = &rest[start + 2..start + 2 + end];
        match vars.get(name) {
            Some(value) => out.push_str(value),
            None => {
                return Err(Box::new(Error::UndefinedVariable {
                    src: NamedSource::new(filename, src.to_string()),
                    span: (reference_at, name.len() + 3).into(),
                    name: name.to_string(),
                }));
            }
        }

        rest = &rest[start + 2 + end + 1..];
        offset = reference_at + name.len() + 3;
    }

    out.push_str(rest);
    Ok(out)
}
