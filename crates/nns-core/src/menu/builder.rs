use std::collections::HashMap;

use tracing::debug;

use crate::editor::{EditorInstance, is_excluded_buffer};
use crate::menu::icons::IconRules;
use crate::menu::types::{EntryMetadata, IconTag, Menu, MenuEntry, sanitize_selection};
use crate::window::{WindowHandle, WindowProperties};

/// Knobs for menu construction.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub icons: IconRules,
    /// Buffers containing this marker are never offered.
    pub exclude_marker: String,
    /// Icon for window entries whose class is unknown.
    pub window_icon: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            icons: IconRules::default(),
            exclude_marker: "term".to_string(),
            window_icon: "window".to_string(),
        }
    }
}

/// Accumulates entries with insertion-order output and idempotent keys.
///
/// The first entry recorded for a key wins; later duplicates are skipped and
/// never overwrite its metadata.
pub struct MenuBuilder {
    options: MenuOptions,
    entries: Vec<MenuEntry>,
    metadata: HashMap<String, EntryMetadata>,
}

impl MenuBuilder {
    pub fn new(options: MenuOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    fn insert(&mut self, display: String, icon: IconTag, metadata: EntryMetadata) -> bool {
        let key = sanitize_selection(&display);
        if key.trim().is_empty() || self.metadata.contains_key(&key) {
            return false;
        }

        self.metadata.insert(key.clone(), metadata);
        self.entries.push(MenuEntry { display, icon, key });
        true
    }

    /// Record every offerable buffer of one editor instance.
    ///
    /// `host` is the window hosting the instance, if correlation found one.
    pub fn add_buffers(&mut self, instance: &EditorInstance, host: Option<&WindowHandle>) {
        for buffer in &instance.buffers {
            if is_excluded_buffer(buffer, &self.options.exclude_marker) {
                continue;
            }

            let icon = self.options.icons.icon_for(buffer);
            let metadata = EntryMetadata {
                window: host.cloned(),
                editor_server: Some(instance.server_id.clone()),
                buffer: Some(buffer.clone()),
            };

            if !self.insert(buffer.clone(), icon, metadata) {
                debug!(
                    event = "core.menu.duplicate_skipped",
                    display = %buffer,
                    server = %instance.server_id
                );
            }
        }
    }

    /// Record a plain window-manager leaf.
    ///
    /// Shown by title, then class, then id. A text already taken is retried
    /// with the window id appended before giving up.
    pub fn add_window(&mut self, handle: &WindowHandle, props: &WindowProperties) {
        let text = props
            .title
            .clone()
            .or_else(|| props.class().map(str::to_string))
            .unwrap_or_else(|| handle.to_string());

        let icon = props
            .class()
            .map(|class| IconTag::new(class.to_lowercase()))
            .unwrap_or_else(|| IconTag::new(self.options.window_icon.clone()));

        let metadata = EntryMetadata {
            window: Some(handle.clone()),
            ..Default::default()
        };

        if self.insert(text.clone(), icon.clone(), metadata.clone()) {
            return;
        }

        let qualified = format!("{} [{}]", text, handle);
        if !self.insert(qualified, icon, metadata) {
            debug!(
                event = "core.menu.duplicate_skipped",
                entry = %text,
                window = %handle
            );
        }
    }

    pub fn build(self) -> Menu {
        Menu::from_parts(self.entries, self.metadata)
    }
}
