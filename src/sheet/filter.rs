use super::models::{Os, Shortcut};

/// Everything that narrows the displayed shortcut list. Pure data; the
/// TUI owns one of these and hands it to `filter_shortcuts` on every draw.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub query: String,
    pub active_key: Option<String>,
    pub favorites_only: bool,
    pub favorites: Vec<String>,
}

/// Canonical form of a key label for virtual-key matching. Modifier
/// synonyms collapse to one token; everything else just lower-cases.
pub fn canonical_key(key: &str) -> String {
    let lower = key.to_lowercase();
    match lower.as_str() {
        "command" => "cmd".to_string(),
        "control" => "ctrl".to_string(),
        "alt" => "opt".to_string(),
        _ => lower,
    }
}

/// Whether two key labels normalize-equal. `Cmd` matches `Command` but
/// never `Ctrl`.
pub fn keys_match(a: &str, b: &str) -> bool {
    canonical_key(a) == canonical_key(b)
}

/// The filter pipeline: favorites, then search, then virtual key. Each
/// step narrows or leaves the candidate set unchanged; order within the
/// list is never disturbed.
pub fn filter_shortcuts<'a>(shortcuts: &'a [Shortcut], os: Os, criteria: &Criteria) -> Vec<&'a Shortcut> {
    let mut result: Vec<&Shortcut> = shortcuts.iter().collect();

    if criteria.favorites_only {
        result.retain(|s| criteria.favorites.iter().any(|f| f == &s.id));
    }

    if !criteria.query.is_empty() {
        let q = criteria.query.to_lowercase();
        result.retain(|s| {
            s.action.to_lowercase().contains(&q)
                || s.category.to_lowercase().contains(&q)
                || s.keys.for_os(os).iter().any(|k| k.to_lowercase().contains(&q))
        });
    }

    if let Some(active) = &criteria.active_key {
        result.retain(|s| s.keys.for_os(os).iter().any(|k| keys_match(k, active)));
    }

    result
}

/// Partitions a filtered list by category. Categories keep the order of
/// first occurrence; shortcuts within a category keep dataset order.
pub fn group_by_category<'a>(shortcuts: &[&'a Shortcut]) -> Vec<(&'a str, Vec<&'a Shortcut>)> {
    let mut groups: Vec<(&str, Vec<&Shortcut>)> = Vec::new();
    for &shortcut in shortcuts {
        match groups.iter_mut().find(|(name, _)| *name == shortcut.category) {
            Some((_, members)) => members.push(shortcut),
            None => groups.push((&shortcut.category, vec![shortcut])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::models::KeySet;

    fn shortcut(id: &str, action: &str, category: &str, mac: &[&str], win: &[&str]) -> Shortcut {
        Shortcut {
            id: id.to_string(),
            action: action.to_string(),
            category: category.to_string(),
            keys: KeySet {
                mac: mac.iter().map(|k| k.to_string()).collect(),
                win: win.iter().map(|k| k.to_string()).collect(),
            },
            description: None,
        }
    }

    fn sample() -> Vec<Shortcut> {
        vec![
            shortcut("s1", "Save", "File", &["Cmd", "S"], &["Ctrl", "S"]),
            shortcut("s2", "Open", "File", &["Cmd", "O"], &["Ctrl", "O"]),
            shortcut("s3", "Undo", "Edit", &["Cmd", "Z"], &["Control", "Z"]),
            shortcut("s4", "Brush Tool", "Tools", &["B"], &["B"]),
        ]
    }

    fn ids(result: &[&Shortcut]) -> Vec<String> {
        result.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let shortcuts = sample();
        let result = filter_shortcuts(&shortcuts, Os::Mac, &Criteria::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_search_matches_action_category_and_keys() {
        let shortcuts = sample();
        let mut criteria = Criteria::default();

        criteria.query = "save".to_string();
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)), ["s1"]);

        criteria.query = "edit".to_string();
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria)), ["s3"]);

        // "ctrl" is a win key label, so it only matches in win mode
        criteria.query = "ctrl".to_string();
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)), ["s1", "s2"]);
        assert!(filter_shortcuts(&shortcuts, Os::Mac, &criteria).is_empty());
    }

    #[test]
    fn test_search_result_always_contains_query() {
        let shortcuts = sample();
        for q in ["s", "o", "tool", "z"] {
            let criteria = Criteria {
                query: q.to_string(),
                ..Criteria::default()
            };
            for s in filter_shortcuts(&shortcuts, Os::Mac, &criteria) {
                let hit = s.action.to_lowercase().contains(q)
                    || s.category.to_lowercase().contains(q)
                    || s.keys.for_os(Os::Mac).iter().any(|k| k.to_lowercase().contains(q));
                assert!(hit, "{} matched '{}' without containing it", s.id, q);
            }
        }
    }

    #[test]
    fn test_favorites_filter() {
        let shortcuts = sample();
        let criteria = Criteria {
            favorites_only: true,
            favorites: vec!["s2".to_string(), "s4".to_string()],
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria)), ["s2", "s4"]);
    }

    #[test]
    fn test_stale_favorite_ids_are_inert() {
        let shortcuts = sample();
        let criteria = Criteria {
            favorites_only: true,
            favorites: vec!["gone".to_string()],
            ..Criteria::default()
        };
        assert!(filter_shortcuts(&shortcuts, Os::Mac, &criteria).is_empty());
    }

    #[test]
    fn test_virtual_key_normalization() {
        let shortcuts = sample();

        // "Ctrl" matches the literal "Control" label on s3 in win mode
        let criteria = Criteria {
            active_key: Some("Ctrl".to_string()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)), ["s1", "s2", "s3"]);

        // ...and "Control" matches the literal "Ctrl" labels
        let criteria = Criteria {
            active_key: Some("Control".to_string()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)), ["s1", "s2", "s3"]);

        // Cmd does not normalize to Ctrl: no matches in mac mode
        let criteria = Criteria {
            active_key: Some("Ctrl".to_string()),
            ..Criteria::default()
        };
        assert!(filter_shortcuts(&shortcuts, Os::Mac, &criteria).is_empty());
    }

    #[test]
    fn test_spec_scenario_save_shortcut() {
        let shortcuts = vec![shortcut("s1", "Save", "File", &["Cmd", "S"], &["Ctrl", "S"])];

        let criteria = Criteria {
            query: "save".to_string(),
            ..Criteria::default()
        };
        let result = filter_shortcuts(&shortcuts, Os::Win, &criteria);
        assert_eq!(ids(&result), ["s1"]);
        let grouped = group_by_category(&result);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].0, "File");

        let criteria = Criteria {
            active_key: Some("Ctrl".to_string()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)), ["s1"]);
        assert!(filter_shortcuts(&shortcuts, Os::Mac, &criteria).is_empty());
    }

    #[test]
    fn test_os_switch_does_not_change_membership() {
        // Same labels modulo modifier naming on both platforms, so search
        // by action must select identical sets under either OS.
        let shortcuts = sample();
        let criteria = Criteria {
            query: "open".to_string(),
            ..Criteria::default()
        };
        assert_eq!(
            ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria)),
            ids(&filter_shortcuts(&shortcuts, Os::Win, &criteria)),
        );
    }

    #[test]
    fn test_clearing_virtual_key_restores_previous_list() {
        let shortcuts = sample();
        let mut criteria = Criteria::default();
        let before = ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria));

        criteria.active_key = Some("Cmd".to_string());
        let during = ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria));
        assert_eq!(during, ["s1", "s2", "s3"]);

        criteria.active_key = None;
        assert_eq!(ids(&filter_shortcuts(&shortcuts, Os::Mac, &criteria)), before);
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let shortcuts = vec![
            shortcut("a", "A", "Zeta", &["A"], &["A"]),
            shortcut("b", "B", "Alpha", &["B"], &["B"]),
            shortcut("c", "C", "Zeta", &["C"], &["C"]),
        ];
        let all: Vec<&Shortcut> = shortcuts.iter().collect();
        let grouped = group_by_category(&all);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "Zeta");
        assert_eq!(ids(&grouped[0].1), ["a", "c"]);
        assert_eq!(grouped[1].0, "Alpha");
    }

    #[test]
    fn test_empty_input_yields_zero_groups() {
        let grouped = group_by_category(&[]);
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("Command"), "cmd");
        assert_eq!(canonical_key("CONTROL"), "ctrl");
        assert_eq!(canonical_key("Alt"), "opt");
        assert_eq!(canonical_key("Shift"), "shift");
        assert_eq!(canonical_key("F5"), "f5");
        assert!(keys_match("Opt", "ALT"));
        assert!(!keys_match("Cmd", "Ctrl"));
    }
}
