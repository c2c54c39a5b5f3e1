//! Per command group "requires operator" switches (`tpatool.json`).

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
    sync::Arc,
};

use crate::storage::{StateStore, load_json, save_json};

/// Document holding the switches.
pub const PERMISSIONS_FILE: &str = "tpatool.json";

/// Commands that can be restricted to operators together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandGroup {
    /// `/tpa`, `/tpahere`, `/tpaccept`, `/tpadeny`, `/tpacancel`, `/tpatoggle`,
    /// `/tpalock` and `/tpaunlock`.
    Tpa,
    /// Every `/home` subcommand.
    Home,
    /// `/grave`.
    Grave,
    /// `/back`.
    Back,
}

impl CommandGroup {
    /// Every group, in display order.
    pub const ALL: [Self; 4] = [Self::Tpa, Self::Home, Self::Grave, Self::Back];

    /// The name used in `tpatool.json` and `/tpatools needop`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tpa => "tpa",
            Self::Home => "home",
            Self::Grave => "grave",
            Self::Back => "back",
        }
    }
}

impl Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandGroup {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or(())
    }
}

/// Which command groups are restricted to operators. Everything is open by default.
pub struct CommandPermissions {
    store: Arc<dyn StateStore>,
    requires_op: BTreeMap<CommandGroup, bool>,
}

impl CommandPermissions {
    /// Every group open to everyone.
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            requires_op: CommandGroup::ALL.into_iter().map(|g| (g, false)).collect(),
        }
    }

    /// Restores the switches. Unknown entries are ignored, missing ones stay open.
    pub fn load_state(&mut self) {
        let stored = load_json::<BTreeMap<String, bool>>(self.store.as_ref(), PERMISSIONS_FILE);
        let Some(stored) = stored else {
            self.save_state();
            return;
        };
        for (name, requires_op) in stored {
            match name.parse::<CommandGroup>() {
                Ok(group) => {
                    self.requires_op.insert(group, requires_op);
                }
                Err(()) => log::debug!("Ignoring unknown permission entry {name}"),
            }
        }
        log::info!("Loaded command permissions");
    }

    /// Writes the switches to `tpatool.json`.
    pub fn save_state(&self) {
        let document: BTreeMap<&str, bool> = self
            .requires_op
            .iter()
            .map(|(group, requires_op)| (group.as_str(), *requires_op))
            .collect();
        save_json(self.store.as_ref(), PERMISSIONS_FILE, &document);
    }

    /// Whether `group` is restricted to operators.
    #[must_use]
    pub fn requires_operator(&self, group: CommandGroup) -> bool {
        self.requires_op.get(&group).copied().unwrap_or(false)
    }

    /// Whether a player with the given operator status may run commands of `group`.
    #[must_use]
    pub fn check(&self, group: CommandGroup, is_operator: bool) -> bool {
        is_operator || !self.requires_operator(group)
    }

    /// Changes and persists a switch.
    pub fn set_requires_operator(&mut self, group: CommandGroup, requires_op: bool) {
        self.requires_op.insert(group, requires_op);
        self.save_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn open_by_default_and_op_only_when_flagged() {
        let mut permissions = CommandPermissions::new(Arc::new(MemoryStore::new()));
        assert!(permissions.check(CommandGroup::Home, false));

        permissions.set_requires_operator(CommandGroup::Home, true);
        assert!(!permissions.check(CommandGroup::Home, false));
        assert!(permissions.check(CommandGroup::Home, true));
        assert!(permissions.check(CommandGroup::Tpa, false));
    }

    #[test]
    fn load_ignores_unknown_entries() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        store
            .save(
                PERMISSIONS_FILE,
                r#"{"tpa": true, "debug": true, "home": false}"#,
            )
            .expect("memory");

        let mut permissions = CommandPermissions::new(store);
        permissions.load_state();
        assert!(permissions.requires_operator(CommandGroup::Tpa));
        assert!(!permissions.requires_operator(CommandGroup::Back));
    }

    #[test]
    fn missing_file_writes_defaults() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let mut permissions = CommandPermissions::new(store.clone());
        permissions.load_state();
        let written = store.load(PERMISSIONS_FILE).expect("memory").expect("written");
        assert!(written.contains("\"grave\": false"));
    }

    #[test]
    fn group_names_parse() {
        assert_eq!("back".parse::<CommandGroup>(), Ok(CommandGroup::Back));
        assert!("debug".parse::<CommandGroup>().is_err());
    }
}
