//! The plugin facade the host adapter talks to.
//!
//! One [`TpaTools`] per server process owns every component. The host calls
//! the lifecycle hooks (`on_server_starting`, `tick`, `on_player_death`,
//! `on_chat`, `on_server_stopping`) and one method per parsed command. Each
//! command checks permissions, runs, and on failure sends the matching
//! message to the invoker before returning the error.

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tpatools_utils::{
    ActorId, Message, Translations, locks::SyncRwLock, translations::keys,
};

use crate::{
    back::{BackError, BackTracker},
    chat::{ChatMessage, process_chat},
    config::{ConfigError, SharedConfig, TpaConfig, shared},
    grave::{GraveError, GraveTracker},
    home::{HomeError, HomeRegistry, ShareListKind},
    host::Host,
    permissions::CommandGroup,
    settings::{Settings, SettingsError, SharedTranslations},
    storage::StateStore,
    teleport::{TeleportError, TeleportMode, TeleportTracker},
};

/// Why a command did not run to completion. The invoker has already been told.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command group is restricted to operators.
    #[error("{0} commands require operator")]
    NoPermission(CommandGroup),
    /// Admin commands always require operator.
    #[error("Admin commands require operator")]
    NotOperator,
    /// A teleport request command failed.
    #[error(transparent)]
    Teleport(#[from] TeleportError),
    /// A home command failed.
    #[error(transparent)]
    Home(#[from] HomeError),
    /// `/back` failed.
    #[error(transparent)]
    Back(#[from] BackError),
    /// `/grave` failed.
    #[error(transparent)]
    Grave(#[from] GraveError),
    /// An admin command failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl CommandError {
    /// The message shown to the invoker.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::NoPermission(_) | Self::NotOperator => keys::NO_PERMISSION.plain(),
            Self::Teleport(e) => e.message(),
            Self::Home(e) => e.message(),
            Self::Back(e) => e.message(),
            Self::Grave(e) => e.message(),
            Self::Settings(e) => e.message(),
        }
    }

    /// Whether this is an unexpected fault rather than a user-facing outcome.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Teleport(TeleportError::Host(_))
                | Self::Home(HomeError::Host(_))
                | Self::Back(BackError::Host(_))
                | Self::Grave(GraveError::Host(_))
                | Self::Settings(SettingsError::Host(_) | SettingsError::Config(_))
        )
    }
}

/// Who may run a command.
#[derive(Clone, Copy)]
enum Access {
    Group(CommandGroup),
    Operator,
}

/// Every TPATools component, wired to the host.
pub struct TpaTools {
    config: SharedConfig,
    translations: SharedTranslations,
    tracker: TeleportTracker,
    back: BackTracker,
    graves: GraveTracker,
    homes: HomeRegistry,
    settings: Settings,
}

impl TpaTools {
    /// Builds the plugin around an already loaded config.
    ///
    /// `lang_dir` is the directory holding `lang/<language>.json` overrides,
    /// usually the config directory.
    #[must_use]
    pub fn new(config: TpaConfig, store: Arc<dyn StateStore>, lang_dir: Option<PathBuf>) -> Self {
        let config = shared(config);
        let translations = Arc::new(SyncRwLock::new(Translations::english()));
        Self {
            tracker: TeleportTracker::new(config.clone(), store.clone()),
            back: BackTracker::new(),
            graves: GraveTracker::new(store.clone()),
            homes: HomeRegistry::new(config.clone(), store.clone()),
            settings: Settings::new(config.clone(), store, translations.clone(), lang_dir),
            config,
            translations,
        }
    }

    /// Loads `tpatools.json5` from the store (writing defaults if missing) and builds the plugin.
    pub fn open(
        store: Arc<dyn StateStore>,
        lang_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = TpaConfig::load(store.as_ref())?;
        Ok(Self::new(config, store, lang_dir))
    }

    /// The live config shared by every component.
    #[must_use]
    pub const fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// The translation table the host should render messages with.
    #[must_use]
    pub fn translations(&self) -> SharedTranslations {
        self.translations.clone()
    }

    /// Pending teleport requests, mutes and locks.
    #[must_use]
    pub const fn tracker(&self) -> &TeleportTracker {
        &self.tracker
    }

    /// Every player's homes.
    #[must_use]
    pub const fn homes(&self) -> &HomeRegistry {
        &self.homes
    }

    /// Last positions before a teleport.
    #[must_use]
    pub const fn back(&self) -> &BackTracker {
        &self.back
    }

    /// Last death positions.
    #[must_use]
    pub const fn graves(&self) -> &GraveTracker {
        &self.graves
    }

    /// Admin settings and command permissions.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Restores persisted state and applies the config.
    pub fn on_server_starting(&mut self) {
        self.settings.load_state();
        self.tracker.load_state();
        self.graves.load_state();
        self.homes.load_state();
        log::info!("TPATools ready");
    }

    /// Persists everything that survives a restart.
    pub fn on_server_stopping(&mut self) {
        self.settings.save_state();
        self.tracker.save_state();
        self.graves.save_state();
        self.homes.save_state();
        log::info!("TPATools state saved");
    }

    /// Heartbeat, once per server tick. Returns how many requests expired.
    pub fn tick(&mut self, host: &dyn Host) -> usize {
        self.tracker.expire_stale_requests(host, host.now())
    }

    /// Records the grave of a player who just died.
    pub fn on_player_death(&mut self, host: &dyn Host, actor: ActorId) {
        match host.position_of(actor) {
            Ok(position) => self.graves.on_player_death(actor, position),
            Err(e) => log::warn!("Could not record grave for {actor}: {e}"),
        }
    }

    /// Augments a chat message and pings mentioned players.
    pub fn on_chat(&self, host: &dyn Host, sender: ActorId, raw: &str) -> ChatMessage {
        log::debug!("Processing chat message from {sender}: {raw}");
        process_chat(host, sender, raw)
    }

    fn run<T, E>(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        access: Access,
        op: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, CommandError>
    where
        CommandError: From<E>,
    {
        let is_operator = host.is_operator(invoker);
        let allowed = match access {
            Access::Group(group) => {
                if self.settings.permissions().check(group, is_operator) {
                    Ok(())
                } else {
                    Err(CommandError::NoPermission(group))
                }
            }
            Access::Operator if is_operator => Ok(()),
            Access::Operator => Err(CommandError::NotOperator),
        };

        let result = allowed.and_then(|()| op(self).map_err(CommandError::from));
        if let Err(e) = &result {
            if e.is_fault() {
                log::error!("Command by {invoker} failed: {e}");
            } else {
                log::debug!("Command by {invoker} rejected: {e}");
            }
            if let Err(send) = host.send_message(invoker, e.message()) {
                log::warn!("Could not tell {invoker} about the failure: {send}");
            }
        }
        result
    }

    /// `/tpa <target>`
    pub fn tpa(
        &mut self,
        host: &dyn Host,
        sender: ActorId,
        target: ActorId,
    ) -> Result<(), CommandError> {
        self.run(host, sender, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.send_request(host, sender, target, TeleportMode::ToTarget)
        })
    }

    /// `/tpahere <target>`
    pub fn tpahere(
        &mut self,
        host: &dyn Host,
        sender: ActorId,
        target: ActorId,
    ) -> Result<(), CommandError> {
        self.run(host, sender, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.send_request(host, sender, target, TeleportMode::BringTarget)
        })
    }

    /// `/tpaccept [sender]`
    pub fn tpaccept(
        &mut self,
        host: &dyn Host,
        target: ActorId,
        sender: Option<ActorId>,
    ) -> Result<(), CommandError> {
        self.run(host, target, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.accept_request(host, &mut t.back, target, sender)
        })
    }

    /// `/tpadeny [sender]`
    pub fn tpadeny(
        &mut self,
        host: &dyn Host,
        target: ActorId,
        sender: Option<ActorId>,
    ) -> Result<(), CommandError> {
        self.run(host, target, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.deny_request(host, target, sender)
        })
    }

    /// `/tpacancel [target]`
    pub fn tpacancel(
        &mut self,
        host: &dyn Host,
        sender: ActorId,
        target: Option<ActorId>,
    ) -> Result<(), CommandError> {
        self.run(host, sender, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.cancel_request(host, sender, target)
        })
    }

    /// `/tpatoggle`, returns whether requests are now refused.
    pub fn tpatoggle(&mut self, host: &dyn Host, actor: ActorId) -> Result<bool, CommandError> {
        self.run(host, actor, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.toggle_mute(host, actor)
        })
    }

    /// `/tpalock <player>`
    pub fn tpalock(
        &mut self,
        host: &dyn Host,
        actor: ActorId,
        blocked: ActorId,
    ) -> Result<(), CommandError> {
        self.run(host, actor, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.lock(host, actor, blocked)
        })
    }

    /// `/tpaunlock <player>`
    pub fn tpaunlock(
        &mut self,
        host: &dyn Host,
        actor: ActorId,
        blocked: ActorId,
    ) -> Result<(), CommandError> {
        self.run(host, actor, Access::Group(CommandGroup::Tpa), |t| {
            t.tracker.unlock(host, actor, blocked)
        })
    }

    /// `/back`
    pub fn back_command(&mut self, host: &dyn Host, actor: ActorId) -> Result<(), CommandError> {
        self.run(host, actor, Access::Group(CommandGroup::Back), |t| {
            t.back.teleport_back(host, actor)
        })
    }

    /// `/grave`
    pub fn grave_command(&mut self, host: &dyn Host, actor: ActorId) -> Result<(), CommandError> {
        self.run(host, actor, Access::Group(CommandGroup::Grave), |t| {
            t.graves.teleport_to_grave(host, &mut t.back, actor)
        })
    }

    /// `/home set <name>`
    pub fn home_set(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.set_home(host, owner, name)
        })
    }

    /// `/home <name>`, also accepts `owner:home`.
    pub fn home_teleport(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.teleport_home(host, &mut t.back, owner, name)
        })
    }

    /// `/home list`
    pub fn home_list(&mut self, host: &dyn Host, owner: ActorId) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.list_homes(host, owner)
        })
    }

    /// `/home remove <name>`
    pub fn home_remove(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.remove_home(host, owner, name)
        })
    }

    /// `/home rename <old> <new>`
    pub fn home_rename(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        old: &str,
        new: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.rename_home(host, owner, old, new)
        })
    }

    /// `/home share <name> <player>`
    pub fn home_share(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
        player: ActorId,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.share_home(host, owner, name, player)
        })
    }

    /// `/home unshare <name> [player]`
    pub fn home_unshare(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
        player_name: Option<&str>,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.unshare_home(host, owner, name, player_name)
        })
    }

    /// `/home public <name>`
    pub fn home_public(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.set_public(host, owner, name)
        })
    }

    /// `/home private <name>`
    pub fn home_private(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), CommandError> {
        self.run(host, owner, Access::Group(CommandGroup::Home), |t| {
            t.homes.set_private(host, owner, name)
        })
    }

    /// `/home otherhome <owner:home>`
    pub fn home_other(
        &mut self,
        host: &dyn Host,
        player: ActorId,
        arg: &str,
    ) -> Result<(), CommandError> {
        self.run(host, player, Access::Group(CommandGroup::Home), |t| {
            t.homes.teleport_other_home(host, &mut t.back, player, arg)
        })
    }

    /// `/home otherlist`
    pub fn home_otherlist(&mut self, host: &dyn Host, player: ActorId) -> Result<(), CommandError> {
        self.run(host, player, Access::Group(CommandGroup::Home), |t| {
            t.homes.list_other_homes(host, player)
        })
    }

    /// `/home sharelist <in|out>`
    pub fn home_sharelist(
        &mut self,
        host: &dyn Host,
        player: ActorId,
        kind: &str,
    ) -> Result<(), CommandError> {
        self.run(host, player, Access::Group(CommandGroup::Home), |t| {
            let kind = kind.parse::<ShareListKind>()?;
            t.homes.share_list(host, player, kind)
        })
    }

    /// `/tpatools setlanguage <lang>`
    pub fn admin_set_language(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        language: &str,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| {
            t.settings.set_language(host, invoker, language)
        })
    }

    /// `/tpatools setmaxhome <count>`
    pub fn admin_set_max_homes(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        count: i64,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| {
            t.settings.set_max_homes(host, invoker, count)
        })
    }

    /// `/tpatools needop <group> <bool>`
    pub fn admin_need_op(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        group: &str,
        requires_op: bool,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| {
            t.settings.set_need_op(host, invoker, group, requires_op)
        })
    }

    /// `/tpatools tpacdtime <seconds>`
    pub fn admin_cooldown(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        seconds: u32,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| {
            t.settings.set_cooldown_seconds(host, invoker, seconds)
        })
    }

    /// `/tpatools tpawaittime <seconds>`
    pub fn admin_wait_time(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        seconds: u32,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| {
            t.settings.set_wait_seconds(host, invoker, seconds)
        })
    }

    /// `/tpatools debug [bool]`; without a value reports the current state.
    pub fn admin_debug(
        &mut self,
        host: &dyn Host,
        invoker: ActorId,
        enable: Option<bool>,
    ) -> Result<(), CommandError> {
        self.run(host, invoker, Access::Operator, |t| match enable {
            Some(enable) => t.settings.set_debug(host, invoker, enable),
            None => t.settings.debug_status(host, invoker),
        })
    }
}
