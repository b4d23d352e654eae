// Translation lookup - an explicit dependency, not a global
//
// The host application owns its i18n catalog. The navigator receives a
// lookup closure at construction and falls back to a built-in English table
// for any key the host does not cover, so the engine renders sensibly even
// with a bare `Translator::default()`.

/// Lookup function over a message key. Returning `None` falls back to the
/// built-in English string for that key.
pub type LookupFn = Box<dyn Fn(&str) -> Option<String>>;

pub struct Translator {
    lookup: Option<LookupFn>,
}

impl Translator {
    /// Translator backed by a host-supplied catalog.
    pub fn new(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            lookup: Some(Box::new(lookup)),
        }
    }

    /// Resolve a message key.
    pub fn tr(&self, key: &str) -> String {
        if let Some(lookup) = &self.lookup {
            if let Some(text) = lookup(key) {
                return text;
            }
        }
        builtin(key).to_string()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self { lookup: None }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("custom", &self.lookup.is_some())
            .finish()
    }
}

/// Built-in English strings for every key the renderer uses.
fn builtin(key: &str) -> &str {
    match key {
        "pane.preview" => "Preview",
        "help.move" => "↑/↓ move",
        "help.ascend" => "← up",
        "help.descend" => "→ open",
        "help.select" => "Enter select",
        "help.select_dir" => "Enter select dir",
        "help.cancel" => "Esc cancel",
        "help.preview_scroll" => "PgUp/PgDn preview",
        "help.columns" => "←/→ column",
        "help.edit" => "Enter edit",
        "help.save" => "Ctrl+S save",
        "help.commit" => "Enter commit",
        "help.discard" => "Esc discard",
        "help.type" => "type digits",
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_builtin_english() {
        let t = Translator::default();
        assert_eq!(t.tr("pane.preview"), "Preview");
        assert_eq!(t.tr("help.cancel"), "Esc cancel");
    }

    #[test]
    fn unknown_keys_echo_back() {
        let t = Translator::default();
        assert_eq!(t.tr("no.such.key"), "no.such.key");
    }

    #[test]
    fn custom_lookup_wins_with_fallback() {
        let t = Translator::new(|key| {
            (key == "pane.preview").then(|| "Vorschau".to_string())
        });
        assert_eq!(t.tr("pane.preview"), "Vorschau");
        // Uncovered key falls back to English
        assert_eq!(t.tr("help.move"), "↑/↓ move");
    }
}
