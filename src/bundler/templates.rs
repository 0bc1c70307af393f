//! Handlebars templates for generated launcher files.

use crate::bundler::Result;
use handlebars::Handlebars;
use std::collections::BTreeMap;

/// Windows batch launcher.
pub const LAUNCHER_TEMPLATE: &str = r#"@echo off
echo Starting {{product_name}}...
start "" "%~dp0{{executable}}"
"#;

/// freedesktop.org desktop entry.
pub const DESKTOP_ENTRY_TEMPLATE: &str = r#"[Desktop Entry]
Type=Application
Name={{product_name}}
{{#if comment}}Comment={{comment}}
{{/if}}Exec={{exec}}
Icon={{icon}}
Categories={{categories}}
Terminal=false
"#;

/// Collects template variables.
pub fn data<const N: usize>(pairs: [(&'static str, String); N]) -> BTreeMap<&'static str, String> {
    pairs.into_iter().collect()
}

/// Renders a template without HTML escaping.
pub fn render(name: &str, template: &str, data: &BTreeMap<&'static str, String>) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars.register_template_string(name, template)?;
    Ok(handlebars.render(name, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_starts_executable_from_its_directory() {
        let rendered = render(
            "launcher",
            LAUNCHER_TEMPLATE,
            &data([
                ("product_name", "C0lorNote".to_string()),
                ("executable", "C0lorNote.exe".to_string()),
            ]),
        )
        .unwrap();

        assert!(rendered.starts_with("@echo off\n"));
        assert!(rendered.contains("echo Starting C0lorNote..."));
        assert!(rendered.contains(r#"start "" "%~dp0C0lorNote.exe""#));
    }

    #[test]
    fn desktop_entry_skips_empty_comment() {
        let rendered = render(
            "desktop",
            DESKTOP_ENTRY_TEMPLATE,
            &data([
                ("product_name", "C0lorNote".to_string()),
                ("comment", String::new()),
                ("exec", "/usr/local/bin/C0lorNote".to_string()),
                ("icon", "/usr/local/share/icons/C0lorNote.png".to_string()),
                ("categories", "Utility;TextEditor;".to_string()),
            ]),
        )
        .unwrap();

        assert!(!rendered.contains("Comment="));
        assert!(rendered.contains("Exec=/usr/local/bin/C0lorNote\n"));
        assert!(rendered.contains("Categories=Utility;TextEditor;\n"));
    }
}
