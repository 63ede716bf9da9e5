#![doc = include_str!("../README.md")]

use fs_err as fs;
use heck::ToShoutySnakeCase as _;
use msgrepo_core::{Code, MessageDefinition};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

pub mod error;

pub use error::GenerateError;

/// Writes the constants module for `definitions` to `output_path`.
///
/// Returns `true` when the file was created or changed, `false` when it
/// already held the same content.
pub fn generate<P: AsRef<Path>>(
    module_name: &str,
    definitions: &[MessageDefinition],
    output_path: P,
) -> Result<bool, GenerateError> {
    let output_path = output_path.as_ref();
    let content = render_module(module_name, definitions)?;

    let current = if output_path.exists() {
        fs::read_to_string(output_path)?
    } else {
        String::new()
    };

    if current == content {
        tracing::debug!("Generated module unchanged: {}", output_path.display());
        return Ok(false);
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, &content)?;
    tracing::info!(
        "Wrote {} constants to {}",
        definitions.len(),
        output_path.display()
    );
    Ok(true)
}

/// Renders the module source without touching the filesystem.
pub fn render_module(
    module_name: &str,
    definitions: &[MessageDefinition],
) -> Result<String, GenerateError> {
    let mut by_id: BTreeMap<u32, &MessageDefinition> = BTreeMap::new();
    for definition in definitions {
        by_id.entry(definition.id()).or_insert(definition);
    }

    let mut owners: BTreeMap<String, u32> = BTreeMap::new();
    let mut items = Vec::with_capacity(by_id.len());
    for (&id, definition) in &by_id {
        let name = const_name(definition);
        if let Some(&first) = owners.get(&name) {
            return Err(GenerateError::DuplicateName {
                name,
                first,
                second: id,
            });
        }
        owners.insert(name.clone(), id);
        items.push((name, *definition));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "// @generated by msgrepo from the `{module_name}` catalog. Do not edit."
    );

    let imports = imports(items.iter().map(|(_, d)| d.code()));
    match imports.as_slice() {
        [] => {},
        [single] => {
            let _ = writeln!(out, "\nuse msgrepo::{single};");
        },
        many => {
            let _ = writeln!(out, "\nuse msgrepo::{{{}}};", many.join(", "));
        },
    }

    for (name, definition) in &items {
        out.push('\n');
        for line in definition.default_template().as_str().lines() {
            if line.is_empty() {
                out.push_str("///\n");
            } else {
                let _ = writeln!(out, "/// {line}");
            }
        }
        let _ = writeln!(out, "{}", const_item(name, definition.code()));
    }

    Ok(out)
}

/// `SCREAMING_SNAKE_CASE` of the entry name, else `MSG_<id>`.
pub fn const_name(definition: &MessageDefinition) -> String {
    let converted = definition
        .name()
        .map(|name| name.to_shouty_snake_case())
        .unwrap_or_default();

    match converted.chars().next() {
        None => format!("MSG_{}", definition.id()),
        Some(first) if first.is_ascii_digit() => format!("MSG_{converted}"),
        Some(_) => converted,
    }
}

fn const_item(name: &str, code: Code) -> String {
    match code {
        Code::Info(code) => {
            format!("pub const {name}: InfoCode = InfoCode::new({});", code.id())
        },
        Code::Error(code) => format!(
            "pub const {name}: ErrorCode = ErrorCode::new({}, TraceLevel::{:?});",
            code.id(),
            code.level()
        ),
        Code::LocalizedString(code) => format!(
            "pub const {name}: LocalizedString = LocalizedString::new({});",
            code.id()
        ),
    }
}

fn imports(codes: impl Iterator<Item = Code>) -> Vec<&'static str> {
    let (mut info, mut error, mut string) = (false, false, false);
    for code in codes {
        match code {
            Code::Info(_) => info = true,
            Code::Error(_) => error = true,
            Code::LocalizedString(_) => string = true,
        }
    }

    let mut names = Vec::new();
    if error {
        names.push("ErrorCode");
    }
    if info {
        names.push("InfoCode");
    }
    if string {
        names.push("LocalizedString");
    }
    if error {
        names.push("TraceLevel");
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgrepo_core::{ErrorCode, InfoCode, LocalizedString, TraceLevel};
    use tempfile::TempDir;

    fn definitions() -> Vec<MessageDefinition> {
        vec![
            MessageDefinition::from_text(LocalizedString::new(1003), "Cancel")
                .unwrap()
                .with_name("cancel"),
            MessageDefinition::from_text(
                ErrorCode::new(1001, TraceLevel::Error),
                "Parameter '{0}' must not be null.",
            )
            .unwrap()
            .with_name("ParameterNull"),
            MessageDefinition::from_text(InfoCode::new(1002), "Started.").unwrap(),
        ]
    }

    #[test]
    fn test_const_name_conversion() {
        let named = MessageDefinition::from_text(InfoCode::new(1), "x")
            .unwrap()
            .with_name("disk-space low");
        assert_eq!(const_name(&named), "DISK_SPACE_LOW");

        let unnamed = MessageDefinition::from_text(InfoCode::new(42), "x").unwrap();
        assert_eq!(const_name(&unnamed), "MSG_42");

        let numeric = MessageDefinition::from_text(InfoCode::new(7), "x")
            .unwrap()
            .with_name("404 page");
        assert_eq!(const_name(&numeric), "MSG_404_PAGE");
    }

    #[test]
    fn test_render_module_is_ordered_by_id() {
        let rendered = render_module("core", &definitions()).unwrap();

        let expected = "\
// @generated by msgrepo from the `core` catalog. Do not edit.

use msgrepo::{ErrorCode, InfoCode, LocalizedString, TraceLevel};

/// Parameter '{0}' must not be null.
pub const PARAMETER_NULL: ErrorCode = ErrorCode::new(1001, TraceLevel::Error);

/// Started.
pub const MSG_1002: InfoCode = InfoCode::new(1002);

/// Cancel
pub const CANCEL: LocalizedString = LocalizedString::new(1003);
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_module_imports_only_used_types() {
        let only_info = vec![MessageDefinition::from_text(InfoCode::new(5), "five").unwrap()];
        let rendered = render_module("small", &only_info).unwrap();
        assert!(rendered.contains("\nuse msgrepo::InfoCode;\n"));
        assert!(!rendered.contains("use msgrepo::{"));
        assert!(!rendered.contains("TraceLevel"));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let clashing = vec![
            MessageDefinition::from_text(InfoCode::new(1), "a")
                .unwrap()
                .with_name("disk_low"),
            MessageDefinition::from_text(InfoCode::new(2), "b")
                .unwrap()
                .with_name("DiskLow"),
        ];

        assert!(matches!(
            render_module("clash", &clashing),
            Err(GenerateError::DuplicateName { ref name, first: 1, second: 2 }) if name == "DISK_LOW"
        ));
    }

    #[test]
    fn test_generate_writes_only_on_change() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("src").join("codes.rs");

        assert!(generate("core", &definitions(), &output).unwrap());
        let first = std::fs::read_to_string(&output).unwrap();
        assert!(first.contains("pub const CANCEL"));

        assert!(!generate("core", &definitions(), &output).unwrap());

        let fewer = &definitions()[..1];
        assert!(generate("core", fewer, &output).unwrap());
        assert!(!std::fs::read_to_string(&output).unwrap().contains("MSG_1002"));
    }

    #[test]
    fn test_multiline_templates_become_multiline_docs() {
        let definition =
            MessageDefinition::from_text(InfoCode::new(9), "first line\n\nthird line").unwrap();
        let rendered = render_module("docs", &[definition]).unwrap();
        assert!(rendered.contains("/// first line\n///\n/// third line\n"));
    }
}
