//! Parsing of `xprop -id <window>` output.
//!
//! Lines look like:
//!
//! ```text
//! WM_CLASS(STRING) = "kitty", "kitty"
//! _NET_WM_PID(CARDINAL) = 4127
//! _NET_WM_NAME(UTF8_STRING) = "nvim ~/notes.md"
//! ```

use crate::process::Pid;
use crate::window::types::WindowProperties;

const WM_CLASS: &str = "WM_CLASS";
const NET_WM_PID: &str = "_NET_WM_PID";
const NET_WM_NAME: &str = "_NET_WM_NAME";
const WM_NAME: &str = "WM_NAME";

/// Find the line for `atom` (`ATOM(TYPE) = value`) and return its value part.
fn atom_value<'a>(output: &'a str, atom: &str) -> Option<&'a str> {
    output.lines().find_map(|line| {
        let rest = line.strip_prefix(atom)?;
        // Guard against prefixes of longer atom names (WM_NAME vs WM_NAME_EXTRA).
        if !rest.starts_with('(') && !rest.starts_with(' ') && !rest.starts_with('=') {
            return None;
        }
        line.split_once('=').map(|(_, value)| value.trim())
    })
}

/// Split an xprop string list (`"a", "b"`) into its unescaped items.
pub fn parse_quoted_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', false) => in_quotes = true,
            ('"', true) => {
                items.push(std::mem::take(&mut current));
                in_quotes = false;
            }
            ('\\', true) => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            (c, true) => current.push(c),
            _ => {}
        }
    }

    items
}

/// Owning pid: the third whitespace token of the `_NET_WM_PID` line.
pub fn parse_pid(output: &str) -> Option<Pid> {
    let line = output.lines().find(|line| line.starts_with(NET_WM_PID))?;
    line.split_whitespace().nth(2)?.parse().ok()
}

/// Parse the properties nns cares about. Missing atoms stay unknown.
pub fn parse_properties(output: &str) -> WindowProperties {
    let wm_class = atom_value(output, WM_CLASS)
        .map(parse_quoted_list)
        .unwrap_or_default();

    let title = atom_value(output, NET_WM_NAME)
        .or_else(|| atom_value(output, WM_NAME))
        .and_then(|value| parse_quoted_list(value).into_iter().next())
        .filter(|title| !title.trim().is_empty());

    WindowProperties {
        wm_class,
        pid: parse_pid(output),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KITTY: &str = r#"_NET_WM_USER_TIME(CARDINAL) = 1874211
WM_STATE(WM_STATE):
		window state: Normal
		icon window: 0x0
_NET_WM_PID(CARDINAL) = 4127
WM_CLASS(STRING) = "kitty", "kitty"
WM_NAME(STRING) = "fallback"
_NET_WM_NAME(UTF8_STRING) = "nvim ~/notes.md"
"#;

    #[test]
    fn test_parse_kitty_window() {
        let props = parse_properties(KITTY);
        assert_eq!(props.wm_class, vec!["kitty", "kitty"]);
        assert_eq!(props.pid, Some(Pid::from_raw(4127)));
        assert_eq!(props.title.as_deref(), Some("nvim ~/notes.md"));
    }

    #[test]
    fn test_title_falls_back_to_wm_name() {
        let props = parse_properties("WM_NAME(STRING) = \"Firefox\"\n");
        assert_eq!(props.title.as_deref(), Some("Firefox"));
    }

    #[test]
    fn test_missing_pid_is_unknown() {
        let props = parse_properties("WM_CLASS(STRING) = \"feh\", \"feh\"\n");
        assert!(props.pid.is_none());
        assert_eq!(props.class(), Some("feh"));
    }

    #[test]
    fn test_unparseable_pid_is_unknown() {
        assert!(parse_pid("_NET_WM_PID(CARDINAL) = oops").is_none());
        assert!(parse_pid("_NET_WM_PID:  not found.").is_none());
    }

    #[test]
    fn test_quoted_list_with_escapes_and_commas() {
        assert_eq!(
            parse_quoted_list(r#""a, \"b\"", "c""#),
            vec![r#"a, "b""#.to_string(), "c".to_string()]
        );
        assert!(parse_quoted_list("").is_empty());
    }

    #[test]
    fn test_empty_output_is_all_unknown() {
        assert_eq!(parse_properties(""), WindowProperties::default());
    }
}
