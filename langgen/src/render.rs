//! Rendering resolved language definitions as Python source for
//! `robot.conf.Language` subclasses.

use std::io::Write;

use crate::{
    document::LanguageDef,
    error::Error,
    schema::{BddPrefix, HeaderGroup, SettingField},
};

/// The fixed import line every generated file starts with.
pub const PREAMBLE: &str = "from robot.conf import Language\n";

/// Quote a translated value as a single-quoted Python string literal.
///
/// Backslashes, quotes, and line breaks are escaped, so a translation
/// containing `'` or a YAML block-scalar newline still produces valid
/// generated source.
fn py_str(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str(r"\\"),
            '\'' => literal.push_str(r"\'"),
            '\n' => literal.push_str(r"\n"),
            '\r' => literal.push_str(r"\r"),
            _ => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

/// Format values as a Python list literal, preserving order.
fn py_list<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let items = values.into_iter().map(py_str).collect::<Vec<_>>().join(", ");
    format!("[{items}]")
}

/// Render one language definition as a Python class body.
///
/// The output is the class header, a doc string line, and one assignment
/// line per generated attribute: 6 headers, 24 settings, 5 BDD prefix
/// lists, and the two boolean literal lists.
pub fn render_class(def: &LanguageDef) -> String {
    let mut out = format!("class {}(Language):\n", def.class_name);
    out.push_str(&format!("    \"\"\"{}\"\"\"\n", def.doc));
    for group in HeaderGroup::ALL {
        out.push_str(&format!(
            "    {} = {}\n",
            group.attribute(),
            py_str(def.header(group))
        ));
    }
    for field in SettingField::ALL {
        out.push_str(&format!(
            "    {} = {}\n",
            field.attribute(),
            py_str(def.setting(field))
        ));
    }
    for prefix in BddPrefix::ALL {
        out.push_str(&format!(
            "    {} = {}\n",
            prefix.attribute(),
            py_list([def.bdd_prefix(prefix)])
        ));
    }
    out.push_str(&format!(
        "    true_strings = {}\n",
        py_list(def.true_strings.iter().map(String::as_str))
    ));
    out.push_str(&format!(
        "    false_strings = {}\n",
        py_list(def.false_strings.iter().map(String::as_str))
    ));
    out
}

/// Write the full generated module: the preamble, then each class preceded
/// by exactly one blank line, in the given order.
pub fn write_module<W: Write>(definitions: &[LanguageDef], mut writer: W) -> Result<(), Error> {
    let mut content = String::from(PREAMBLE);
    for def in definitions {
        content.push('\n');
        content.push_str(&render_class(def));
    }
    writer.write_all(content.as_bytes()).map_err(Error::Io)
}
