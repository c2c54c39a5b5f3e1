//! Translation keys, localized messages and their rendering.
//!
//! Components never produce user-facing text directly. They build a
//! [`Message`] from a [`TranslationKey`] plus positional arguments and hand it
//! to the host, which renders it with the active [`Translations`] table.
//!
//! Lookup order for a key: `config/tpatools/lang/<lang>.json`, then the
//! built-in table for the language, then the English fallback baked into the
//! key itself.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;

use crate::ActorId;

pub use crate::generated::translations as keys;

/// Languages shipped with the plugin.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en_us", "zh_cn"];

const ZH_CN: &str = include_str!("../build_assets/zh_cn.json");

/// A translatable message template with its English fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationKey {
    /// Lookup key, e.g. `command.tpatool.tpa.sent`.
    pub key: &'static str,
    /// English text used when no translation is loaded.
    pub fallback: &'static str,
}

impl TranslationKey {
    /// Creates a new key.
    #[must_use]
    pub const fn new(key: &'static str, fallback: &'static str) -> Self {
        Self { key, fallback }
    }

    /// Builds a message from this key and its positional arguments.
    #[must_use]
    pub fn message<const N: usize>(&self, args: [MessageArg; N]) -> Message {
        Message {
            key: *self,
            args: args.into(),
        }
    }

    /// Builds a message without arguments.
    #[must_use]
    pub fn plain(&self) -> Message {
        Message {
            key: *self,
            args: Vec::new(),
        }
    }
}

/// A positional argument of a [`Message`].
#[derive(Clone, Debug, PartialEq)]
pub enum MessageArg {
    /// A player, rendered with their current name by the host.
    Player(ActorId),
    /// Literal text (home names, world names, coordinates).
    Text(String),
    /// A whole number.
    Number(i64),
}

impl From<ActorId> for MessageArg {
    fn from(value: ActorId) -> Self {
        Self::Player(value)
    }
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for MessageArg {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A localized message ready to be delivered to a player.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// The template.
    pub key: TranslationKey,
    /// Positional arguments, in template order.
    pub args: Vec<MessageArg>,
}

/// The active translation table.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    language: String,
    table: FxHashMap<String, String>,
}

impl Translations {
    /// An empty table; every key renders with its English fallback.
    #[must_use]
    pub fn english() -> Self {
        Self {
            language: "en_us".to_string(),
            table: FxHashMap::default(),
        }
    }

    /// Loads the table for `language`.
    ///
    /// Starts from the built-in table (if any) and overlays
    /// `<config_dir>/lang/<language>.json` when that file exists. A broken
    /// override is logged and ignored.
    #[must_use]
    pub fn load(language: &str, config_dir: Option<&Path>) -> Self {
        let mut table = FxHashMap::default();

        if language == "zh_cn" {
            match serde_json::from_str::<FxHashMap<String, String>>(ZH_CN) {
                Ok(builtin) => table.extend(builtin),
                Err(e) => log::error!("Built-in zh_cn table is malformed: {e}"),
            }
        }

        if let Some(dir) = config_dir {
            let path = dir.join("lang").join(format!("{language}.json"));
            if path.exists() {
                match fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|s| {
                        serde_json::from_str::<FxHashMap<String, String>>(&s)
                            .map_err(|e| e.to_string())
                    }) {
                    Ok(overrides) => {
                        log::info!("Loaded language overrides from {}", path.display());
                        table.extend(overrides);
                    }
                    Err(e) => log::warn!("Ignoring language file {}: {e}", path.display()),
                }
            }
        }

        log::info!("Loaded {} translations for '{language}'", table.len());
        Self {
            language: language.to_string(),
            table,
        }
    }

    /// The language this table was loaded for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The template for `key` in this language.
    #[must_use]
    pub fn get(&self, key: &TranslationKey) -> &str {
        self.table
            .get(key.key)
            .map_or(key.fallback, String::as_str)
    }

    /// Renders `message`, resolving player arguments through `name_of`.
    ///
    /// `%s` and `%d` consume the next argument, `%%` is a literal percent
    /// sign. Missing arguments render as nothing.
    pub fn render(&self, message: &Message, name_of: impl Fn(ActorId) -> String) -> String {
        let template = self.get(&message.key);
        let mut args = message.args.iter();
        let mut out = String::with_capacity(template.len() + 16);
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('s' | 'd') => {
                    chars.next();
                    match args.next() {
                        Some(MessageArg::Player(id)) => out.push_str(&name_of(*id)),
                        Some(MessageArg::Text(text)) => out.push_str(text),
                        Some(MessageArg::Number(n)) => out.push_str(&n.to_string()),
                        None => {}
                    }
                }
                _ => out.push('%'),
            }
        }
        out
    }
}
