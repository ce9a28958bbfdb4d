use super::filter::group_by_category;
use super::models::{AppData, Os, Shortcut};

/// Renders a grouped shortcut list as plain text, suitable for piping to
/// a printer spooler or a file. No markup, no color.
pub fn render_sheet(app: &AppData, os: Os, shortcuts: &[&Shortcut]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} Cheat Sheet ({})", app.name, os.label()));
    lines.push(String::new());

    if shortcuts.is_empty() {
        lines.push("No shortcuts.".to_string());
        return lines.join("\n") + "\n";
    }

    for (category, members) in group_by_category(shortcuts) {
        lines.push(format!("## {}", category));
        let width = members.iter().map(|s| s.action.len()).max().unwrap_or(0);
        for shortcut in members {
            let keys = shortcut.keys.for_os(os).join(" + ");
            lines.push(format!("  {:width$}  {}", shortcut.action, keys));
        }
        lines.push(String::new());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::models::KeySet;

    fn app_with_shortcuts() -> AppData {
        AppData {
            id: "ps".to_string(),
            name: "Photoshop".to_string(),
            color: "#31A8FF".to_string(),
            icon: "Ps".to_string(),
            shortcuts: vec![
                Shortcut {
                    id: "ps-save".to_string(),
                    action: "Save".to_string(),
                    category: "File".to_string(),
                    keys: KeySet {
                        mac: vec!["Cmd".to_string(), "S".to_string()],
                        win: vec!["Ctrl".to_string(), "S".to_string()],
                    },
                    description: None,
                },
                Shortcut {
                    id: "ps-undo".to_string(),
                    action: "Undo".to_string(),
                    category: "Edit".to_string(),
                    keys: KeySet {
                        mac: vec!["Cmd".to_string(), "Z".to_string()],
                        win: vec!["Ctrl".to_string(), "Z".to_string()],
                    },
                    description: None,
                },
            ],
        }
    }

    #[test]
    fn test_render_contains_groups_and_keys() {
        let app = app_with_shortcuts();
        let all: Vec<&Shortcut> = app.shortcuts.iter().collect();
        let text = render_sheet(&app, Os::Win, &all);

        assert!(text.starts_with("Photoshop Cheat Sheet (Windows)"));
        assert!(text.contains("## File"));
        assert!(text.contains("## Edit"));
        assert!(text.contains("Ctrl + S"));
        assert!(text.contains("Ctrl + Z"));
    }

    #[test]
    fn test_render_uses_os_labels() {
        let app = app_with_shortcuts();
        let all: Vec<&Shortcut> = app.shortcuts.iter().collect();
        let text = render_sheet(&app, Os::Mac, &all);
        assert!(text.contains("Cmd + S"));
        assert!(!text.contains("Ctrl"));
    }

    #[test]
    fn test_render_empty_list() {
        let app = app_with_shortcuts();
        let text = render_sheet(&app, Os::Mac, &[]);
        assert!(text.contains("No shortcuts."));
    }
}
