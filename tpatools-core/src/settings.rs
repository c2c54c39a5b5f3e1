//! `/tpatools` administration: language, limits, timings, permissions, debug.
//!
//! Every change is applied to the shared [`TpaConfig`](crate::config::TpaConfig)
//! at once, so the next operation of any component sees it, and is then
//! written back to the config file.

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tpatools_utils::{
    ActorId, Message, MessageArg, Translations, locks::SyncRwLock,
    translations::{SUPPORTED_LANGUAGES, keys},
};

use crate::{
    config::{ConfigError, SharedConfig},
    host::{Host, HostError},
    permissions::{CommandGroup, CommandPermissions},
    storage::StateStore,
};

/// The active translation table, shared with the host that renders messages.
pub type SharedTranslations = Arc<SyncRwLock<Translations>>;

/// Failures of admin operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Not one of the shipped languages.
    #[error("Unsupported language {0}")]
    InvalidLanguage(String),
    /// The home limit must be at least one.
    #[error("Invalid home limit {0}")]
    InvalidMaxHomes(i64),
    /// `needop` only knows `tpa`, `home`, `grave` and `back`.
    #[error("Unknown command group {0}")]
    InvalidCommand(String),
    /// The config could not be written.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The host failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl SettingsError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::InvalidLanguage(_) => keys::SETLANGUAGE_INVALID.plain(),
            Self::InvalidMaxHomes(_) => keys::SETMAXHOME_INVALID.plain(),
            Self::InvalidCommand(_) => keys::NEEDOP_INVALID_COMMAND.plain(),
            Self::Config(_) | Self::Host(_) => keys::ERROR.plain(),
        }
    }
}

/// Owns the command permissions and applies admin changes to the shared config.
pub struct Settings {
    config: SharedConfig,
    store: Arc<dyn StateStore>,
    translations: SharedTranslations,
    lang_dir: Option<PathBuf>,
    permissions: CommandPermissions,
}

impl Settings {
    /// `lang_dir` is where `lang/<language>.json` overrides are looked up.
    #[must_use]
    pub fn new(
        config: SharedConfig,
        store: Arc<dyn StateStore>,
        translations: SharedTranslations,
        lang_dir: Option<PathBuf>,
    ) -> Self {
        let permissions = CommandPermissions::new(store.clone());
        Self {
            config,
            store,
            translations,
            lang_dir,
            permissions,
        }
    }

    /// The operator switches per command group.
    #[must_use]
    pub const fn permissions(&self) -> &CommandPermissions {
        &self.permissions
    }

    /// Restores permissions, then applies language and log level.
    pub fn load_state(&mut self) {
        self.permissions.load_state();
        self.reload_translations();
        self.config.read().apply_log_level();
    }

    /// Writes permissions and the config.
    pub fn save_state(&self) {
        self.permissions.save_state();
        if let Err(e) = self.config.read().save(self.store.as_ref()) {
            log::error!("Failed to save config: {e}");
        }
    }

    /// Reloads the translation table for the configured language.
    pub fn reload_translations(&self) {
        let language = self.config.read().language.clone();
        *self.translations.write() = Translations::load(&language, self.lang_dir.as_deref());
    }

    fn save_config(&self) -> Result<(), SettingsError> {
        self.config.read().save(self.store.as_ref())?;
        Ok(())
    }

    /// `/tpatools setlanguage <lang>`
    pub fn set_language(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        language: &str,
    ) -> Result<(), SettingsError> {
        if !SUPPORTED_LANGUAGES.contains(&language) {
            return Err(SettingsError::InvalidLanguage(language.to_string()));
        }
        self.config.write().language = language.to_string();
        self.reload_translations();
        self.save_config()?;
        log::info!("Language set to {language}");

        host.send_message(invoker, keys::SETLANGUAGE_SUCCESS.message([language.into()]))?;
        Ok(())
    }

    /// `/tpatools setmaxhome <count>`
    pub fn set_max_homes(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        count: i64,
    ) -> Result<(), SettingsError> {
        let max = usize::try_from(count)
            .ok()
            .filter(|max| *max >= 1)
            .ok_or(SettingsError::InvalidMaxHomes(count))?;
        self.config.write().max_homes = max;
        self.save_config()?;
        log::info!("Max homes set to {max}");

        host.send_message(
            invoker,
            keys::SETMAXHOME_SUCCESS.message([MessageArg::Number(count)]),
        )?;
        Ok(())
    }

    /// `/tpatools needop <group> <true|false>`
    pub fn set_need_op(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        group: &str,
        requires_op: bool,
    ) -> Result<(), SettingsError> {
        let parsed = group
            .parse::<CommandGroup>()
            .map_err(|()| SettingsError::InvalidCommand(group.to_string()))?;
        self.permissions.set_requires_operator(parsed, requires_op);
        log::info!("Command group {parsed} requires operator: {requires_op}");

        let key = if requires_op {
            keys::NEEDOP_SUCCESS_ENABLED
        } else {
            keys::NEEDOP_SUCCESS_DISABLED
        };
        host.send_message(invoker, key.message([parsed.as_str().into()]))?;
        Ok(())
    }

    /// `/tpatools tpacdtime <seconds>`
    pub fn set_cooldown_seconds(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        seconds: u32,
    ) -> Result<(), SettingsError> {
        self.config.write().cooldown_ms = u64::from(seconds) * 1000;
        self.save_config()?;
        log::info!("TPA cooldown set to {seconds}s");

        host.send_message(
            invoker,
            keys::TPACDTIME_SUCCESS.message([MessageArg::Number(seconds.into())]),
        )?;
        Ok(())
    }

    /// `/tpatools tpawaittime <seconds>`
    pub fn set_wait_seconds(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        seconds: u32,
    ) -> Result<(), SettingsError> {
        self.config.write().timeout_ticks = u64::from(seconds) * 20;
        self.save_config()?;
        log::info!("TPA wait time set to {seconds}s");

        host.send_message(
            invoker,
            keys::TPAWAITTIME_SUCCESS.message([MessageArg::Number(seconds.into())]),
        )?;
        Ok(())
    }

    /// `/tpatools debug <true|false>`
    pub fn set_debug(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        enable: bool,
    ) -> Result<(), SettingsError> {
        {
            let mut config = self.config.write();
            config.debug = enable;
            config.apply_log_level();
        }
        self.save_config()?;
        log::info!("Debug mode {}", if enable { "enabled" } else { "disabled" });

        let key = if enable {
            keys::DEBUG_ENABLED
        } else {
            keys::DEBUG_DISABLED
        };
        host.send_message(invoker, key.plain())?;
        Ok(())
    }

    /// `/tpatools debug`
    pub fn debug_status(&self, host: &dyn Host, invoker: ActorId) -> Result<(), SettingsError> {
        let state = if self.config.read().debug {
            "enabled"
        } else {
            "disabled"
        };
        host.send_message(invoker, keys::DEBUG_STATUS.message([state.into()]))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{CONFIG_FILE, TpaConfig, shared},
        host::mock::MockHost,
        storage::MemoryStore,
    };

    fn settings(store: Arc<dyn StateStore>) -> (Settings, SharedConfig, SharedTranslations) {
        let config = shared(TpaConfig::default());
        let translations = Arc::new(SyncRwLock::new(Translations::english()));
        let settings = Settings::new(config.clone(), store, translations.clone(), None);
        (settings, config, translations)
    }

    #[test]
    fn language_switch_reloads_translations_and_saves() {
        let host = MockHost::new();
        let admin = host.add_player("admin");
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let (mut settings, config, translations) = settings(store.clone());

        assert!(matches!(
            settings.set_language(&host, admin, "fr_fr"),
            Err(SettingsError::InvalidLanguage(_))
        ));
        settings
            .set_language(&host, admin, "en_us")
            .expect("set language");
        assert_eq!(config.read().language, "en_us");
        assert_eq!(translations.read().language(), "en_us");

        let saved = TpaConfig::load(store.as_ref()).expect("saved config");
        assert_eq!(saved.language, "en_us");
    }

    #[test]
    fn timings_convert_to_internal_units() {
        let host = MockHost::new();
        let admin = host.add_player("admin");
        let (mut settings, config, _) = settings(Arc::new(MemoryStore::new()));

        settings
            .set_cooldown_seconds(&host, admin, 5)
            .expect("cooldown");
        settings.set_wait_seconds(&host, admin, 10).expect("wait");
        assert_eq!(config.read().cooldown_window(), 5000);
        assert_eq!(config.read().timeout_ticks, 200);
        assert_eq!(config.read().timeout_window_ms(), 10_000);
    }

    #[test]
    fn max_homes_must_be_positive() {
        let host = MockHost::new();
        let admin = host.add_player("admin");
        let (mut settings, config, _) = settings(Arc::new(MemoryStore::new()));

        assert!(matches!(
            settings.set_max_homes(&host, admin, 0),
            Err(SettingsError::InvalidMaxHomes(0))
        ));
        settings.set_max_homes(&host, admin, 5).expect("max homes");
        assert_eq!(config.read().max_homes, 5);
    }

    #[test]
    fn need_op_validates_group() {
        let host = MockHost::new();
        let admin = host.add_player("admin");
        let (mut settings, _, _) = settings(Arc::new(MemoryStore::new()));

        assert!(matches!(
            settings.set_need_op(&host, admin, "debug", true),
            Err(SettingsError::InvalidCommand(_))
        ));
        settings
            .set_need_op(&host, admin, "grave", true)
            .expect("needop");
        assert!(settings.permissions().requires_operator(CommandGroup::Grave));
        assert_eq!(
            host.keys_for(admin),
            [keys::NEEDOP_SUCCESS_ENABLED.key]
        );
    }

    #[test]
    fn debug_toggle_and_status() {
        let host = MockHost::new();
        let admin = host.add_player("admin");
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let (mut settings, config, _) = settings(store.clone());

        settings.set_debug(&host, admin, true).expect("debug on");
        assert!(config.read().debug);
        settings.debug_status(&host, admin).expect("status");
        settings.set_debug(&host, admin, false).expect("debug off");
        assert_eq!(
            host.keys_for(admin),
            [
                keys::DEBUG_ENABLED.key,
                keys::DEBUG_STATUS.key,
                keys::DEBUG_DISABLED.key
            ]
        );
        assert!(store.load(CONFIG_FILE).expect("memory").is_some());
    }
}
