//! In-memory host for the sandbox: players live in a map, messages are
//! rendered with the plugin's translations and written to the log.

use std::time::Instant;

use glam::DVec3;
use rustc_hash::FxHashMap;
use tpatools_core::{Host, HostError, settings::SharedTranslations};
use tpatools_utils::{ActorId, Identifier, Message, Position, locks::SyncRwLock};

/// Where players join and respawn.
const SPAWN: DVec3 = DVec3::new(0.5, 64.0, 0.5);

/// A player known to the sandbox. Leaving keeps the profile.
pub struct SandboxPlayer {
    pub name: String,
    pub position: Position,
    pub online: bool,
    pub alive: bool,
    pub operator: bool,
    pub hotbar: [Option<String>; 9],
}

/// Console-driven [`Host`].
pub struct SandboxHost {
    started: Instant,
    translations: SharedTranslations,
    worlds: Vec<Identifier>,
    players: SyncRwLock<FxHashMap<ActorId, SandboxPlayer>>,
}

impl SandboxHost {
    #[must_use]
    pub fn new(translations: SharedTranslations) -> Self {
        Self {
            started: Instant::now(),
            translations,
            worlds: vec![
                Identifier::OVERWORLD,
                Identifier::THE_NETHER,
                Identifier::THE_END,
            ],
            players: SyncRwLock::new(FxHashMap::default()),
        }
    }

    /// Brings a player online, creating the profile on first join.
    pub fn join(&self, name: &str) -> ActorId {
        if let Some(id) = self.find_profile(name) {
            if let Some(player) = self.players.write().get_mut(&id) {
                player.online = true;
            }
            log::info!("{name} joined the game");
            return id;
        }

        let id = ActorId::random();
        self.players.write().insert(
            id,
            SandboxPlayer {
                name: name.to_string(),
                position: Position::new(Identifier::OVERWORLD, SPAWN, 0.0, 0.0),
                online: true,
                alive: true,
                operator: false,
                hotbar: Default::default(),
            },
        );
        log::info!("{name} joined the game for the first time ({id})");
        id
    }

    /// Runs `f` on the player, if known.
    pub fn update<R>(&self, actor: ActorId, f: impl FnOnce(&mut SandboxPlayer) -> R) -> Option<R> {
        self.players.write().get_mut(&actor).map(f)
    }

    /// Sends the player back to the overworld spawn, alive.
    pub fn respawn(&self, actor: ActorId) {
        self.update(actor, |player| {
            player.alive = true;
            player.position = Position::new(Identifier::OVERWORLD, SPAWN, 0.0, 0.0);
        });
    }

    /// Every known profile, online or not, sorted by name.
    #[must_use]
    pub fn roster(&self) -> Vec<String> {
        let players = self.players.read();
        let mut lines: Vec<String> = players
            .values()
            .map(|p| {
                let [x, y, z] = p.position.coordinate_strings();
                format!(
                    "{} [{}{}{}] {} ({x}, {y}, {z})",
                    p.name,
                    if p.online { "online" } else { "offline" },
                    if p.alive { "" } else { ", dead" },
                    if p.operator { ", op" } else { "" },
                    p.position.world,
                )
            })
            .collect();
        lines.sort_unstable();
        lines
    }

    fn name_or_id(&self, actor: ActorId) -> String {
        self.player_name(actor)
            .unwrap_or_else(|| actor.to_string())
    }
}

impl Host for SandboxHost {
    fn now(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.players
            .read()
            .get(&actor)
            .is_some_and(|p| p.online && p.alive)
    }

    fn position_of(&self, actor: ActorId) -> Result<Position, HostError> {
        self.players
            .read()
            .get(&actor)
            .filter(|p| p.online)
            .map(|p| p.position.clone())
            .ok_or(HostError::PlayerOffline(actor))
    }

    fn world_exists(&self, world: &Identifier) -> bool {
        self.worlds.contains(world)
    }

    fn move_player(&self, actor: ActorId, destination: &Position) -> Result<(), HostError> {
        if !self.world_exists(&destination.world) {
            return Err(HostError::UnknownWorld(destination.world.clone()));
        }
        let mut players = self.players.write();
        let player = players
            .get_mut(&actor)
            .filter(|p| p.online)
            .ok_or(HostError::PlayerOffline(actor))?;
        player.position = destination.clone();
        log::debug!("Moved {} to {} {:?}", player.name, destination.world, destination.pos);
        Ok(())
    }

    fn send_message(&self, actor: ActorId, message: Message) -> Result<(), HostError> {
        let name = self
            .players
            .read()
            .get(&actor)
            .filter(|p| p.online)
            .map(|p| p.name.clone())
            .ok_or(HostError::PlayerOffline(actor))?;
        let text = self
            .translations
            .read()
            .render(&message, |id| self.name_or_id(id));
        tracing::info!(target: "chat", "[to {name}] {text}");
        Ok(())
    }

    fn player_name(&self, actor: ActorId) -> Option<String> {
        self.players.read().get(&actor).map(|p| p.name.clone())
    }

    fn find_profile(&self, name: &str) -> Option<ActorId> {
        self.players
            .read()
            .iter()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    fn online_players(&self) -> Vec<ActorId> {
        self.players
            .read()
            .iter()
            .filter(|(_, p)| p.online)
            .map(|(id, _)| *id)
            .collect()
    }

    fn hotbar_item(&self, actor: ActorId, slot: usize) -> Option<String> {
        self.players
            .read()
            .get(&actor)
            .and_then(|p| p.hotbar.get(slot).cloned().flatten())
    }

    fn notify_mention(&self, target: ActorId, title: Message) -> Result<(), HostError> {
        let target_name = self
            .players
            .read()
            .get(&target)
            .filter(|p| p.online)
            .map(|p| p.name.clone())
            .ok_or(HostError::PlayerOffline(target))?;
        let text = self
            .translations
            .read()
            .render(&title, |id| self.name_or_id(id));
        tracing::info!(target: "chat", "[title for {target_name}] {text} *ding*");
        Ok(())
    }

    fn is_operator(&self, actor: ActorId) -> bool {
        self.players.read().get(&actor).is_some_and(|p| p.operator)
    }
}
