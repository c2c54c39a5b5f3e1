//! End-to-end flows through the [`TpaTools`] facade.
//!
//! Drives the plugin the way a server would: lifecycle hooks, heartbeat
//! ticks and commands, against an in-memory host that records every message.

use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::{env, fs, process};

use glam::DVec3;
use rustc_hash::FxHashMap;
use tpatools_core::config::CONFIG_FILE;
use tpatools_core::home::HomeError;
use tpatools_core::teleport::TeleportError;
use tpatools_core::{
    CommandError, Host, HostError, JsonFileStore, MemoryStore, StateStore, TpaConfig, TpaTools,
};
use tpatools_utils::translations::keys;
use tpatools_utils::{ActorId, Identifier, Message, Position};

struct Player {
    name: String,
    position: Position,
    operator: bool,
}

/// A single-threaded host that keeps players in memory.
#[derive(Default)]
struct RecordingHost {
    now: Cell<u64>,
    players: RefCell<FxHashMap<ActorId, Player>>,
    sent: RefCell<Vec<(ActorId, Message)>>,
    next: Cell<u128>,
}

impl RecordingHost {
    fn join(&self, name: &str) -> ActorId {
        self.next.set(self.next.get() + 1);
        let id = ActorId::from_u128(self.next.get());
        let x = self.next.get() as f64 * 100.0;
        self.players.borrow_mut().insert(
            id,
            Player {
                name: name.to_string(),
                position: Position::new(Identifier::OVERWORLD, DVec3::new(x, 70.0, -x), 0.0, 0.0),
                operator: false,
            },
        );
        id
    }

    fn op(&self, actor: ActorId) {
        if let Some(p) = self.players.borrow_mut().get_mut(&actor) {
            p.operator = true;
        }
    }

    fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    fn position(&self, actor: ActorId) -> Position {
        self.players.borrow()[&actor].position.clone()
    }

    fn teleport(&self, actor: ActorId, world: Identifier, pos: DVec3) {
        if let Some(p) = self.players.borrow_mut().get_mut(&actor) {
            p.position = Position::new(world, pos, 0.0, 0.0);
        }
    }

    fn last_key(&self, actor: ActorId) -> Option<&'static str> {
        self.sent
            .borrow()
            .iter()
            .rev()
            .find(|(to, _)| *to == actor)
            .map(|(_, m)| m.key.key)
    }

    fn count(&self, actor: ActorId, key: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|(to, m)| *to == actor && m.key.key == key)
            .count()
    }
}

impl Host for RecordingHost {
    fn now(&self) -> u64 {
        self.now.get()
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.players.borrow().contains_key(&actor)
    }

    fn position_of(&self, actor: ActorId) -> Result<Position, HostError> {
        self.players
            .borrow()
            .get(&actor)
            .map(|p| p.position.clone())
            .ok_or(HostError::PlayerOffline(actor))
    }

    fn world_exists(&self, world: &Identifier) -> bool {
        *world == Identifier::OVERWORLD || *world == Identifier::THE_NETHER
    }

    fn move_player(&self, actor: ActorId, destination: &Position) -> Result<(), HostError> {
        let mut players = self.players.borrow_mut();
        let player = players
            .get_mut(&actor)
            .ok_or(HostError::PlayerOffline(actor))?;
        player.position = destination.clone();
        Ok(())
    }

    fn send_message(&self, actor: ActorId, message: Message) -> Result<(), HostError> {
        self.sent.borrow_mut().push((actor, message));
        Ok(())
    }

    fn player_name(&self, actor: ActorId) -> Option<String> {
        self.players.borrow().get(&actor).map(|p| p.name.clone())
    }

    fn find_profile(&self, name: &str) -> Option<ActorId> {
        self.players
            .borrow()
            .iter()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    fn online_players(&self) -> Vec<ActorId> {
        self.players.borrow().keys().copied().collect()
    }

    fn hotbar_item(&self, _actor: ActorId, _slot: usize) -> Option<String> {
        None
    }

    fn notify_mention(&self, target: ActorId, title: Message) -> Result<(), HostError> {
        self.sent.borrow_mut().push((target, title));
        Ok(())
    }

    fn is_operator(&self, actor: ActorId) -> bool {
        self.players.borrow().get(&actor).is_some_and(|p| p.operator)
    }
}

fn started(store: Arc<dyn StateStore>) -> TpaTools {
    let mut tools = TpaTools::open(store, None).expect("config loads");
    tools.on_server_starting();
    tools
}

#[test]
fn request_accept_and_back() {
    let host = RecordingHost::default();
    let alice = host.join("Alice");
    let bob = host.join("Bob");
    let mut tools = started(Arc::new(MemoryStore::new()));
    let start = host.position(alice);

    tools.tpa(&host, alice, bob).expect("request sent");
    assert_eq!(host.last_key(bob), Some(keys::TPA_RECEIVED.key));
    assert_eq!(host.last_key(alice), Some(keys::TPA_SENT.key));

    tools.tpaccept(&host, bob, None).expect("accepted");
    assert_eq!(host.position(alice), host.position(bob));
    assert_eq!(host.last_key(alice), Some(keys::TPA_ACCEPTED_BY.key));

    tools.back_command(&host, alice).expect("back");
    assert_eq!(host.position(alice), start);
    assert_eq!(tools.tracker().pending_count(), 0);
}

#[test]
fn cooldown_then_timeout_on_heartbeat() {
    let host = RecordingHost::default();
    let alice = host.join("Alice");
    let bob = host.join("Bob");
    let carol = host.join("Carol");
    let mut tools = started(Arc::new(MemoryStore::new()));

    tools.tpahere(&host, alice, bob).expect("request sent");
    host.advance(1000);
    let err = tools.tpa(&host, alice, carol).expect_err("cooling down");
    assert!(matches!(err, CommandError::Teleport(TeleportError::OnCooldown(2000))));
    assert_eq!(host.last_key(alice), Some(keys::TPA_COOLDOWN.key));

    // 600 ticks of 50 ms.
    host.advance(28_999);
    assert_eq!(tools.tick(&host), 0);
    host.advance(1);
    assert_eq!(tools.tick(&host), 1);
    assert_eq!(host.last_key(bob), Some(keys::TPAHERE_TIMEOUT.key));
    assert_eq!(host.last_key(alice), Some(keys::TPA_TIMEOUT_SELF.key));

    let err = tools.tpaccept(&host, bob, None).expect_err("expired");
    assert!(matches!(err, CommandError::Teleport(TeleportError::NoPendingRequest)));
}

#[test]
fn homes_survive_a_restart() {
    let host = RecordingHost::default();
    let alice = host.join("Alice");
    let bob = host.join("Bob");
    let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());

    let mut tools = started(store.clone());
    tools.home_set(&host, alice, "base").expect("set");
    tools.home_share(&host, alice, "base", bob).expect("share");
    tools.tpatoggle(&host, bob).expect("toggle");
    tools.on_server_stopping();

    let mut tools = started(store);
    assert!(tools.homes().home(alice, "base").is_some_and(|h| h.is_shared_with(bob)));
    assert!(tools.tracker().is_muted(bob));

    let base = host.position(alice);
    tools.home_other(&host, bob, "alice:base").expect("shared home");
    assert_eq!(host.position(bob), base);

    let err = tools.home_other(&host, bob, "alice:nowhere").expect_err("missing");
    assert!(matches!(err, CommandError::Home(HomeError::OtherNotFound(_))));
}

#[test]
fn home_limit_follows_admin_changes() {
    let host = RecordingHost::default();
    let admin = host.join("Admin");
    host.op(admin);
    let mut tools = started(Arc::new(MemoryStore::new()));

    tools.home_set(&host, admin, "a").expect("first");
    tools.home_set(&host, admin, "b").expect("second");
    assert!(matches!(
        tools.home_set(&host, admin, "c"),
        Err(CommandError::Home(HomeError::LimitExceeded(2)))
    ));

    tools.admin_set_max_homes(&host, admin, 3).expect("raise limit");
    tools.home_set(&host, admin, "c").expect("third");
    assert_eq!(tools.homes().homes_of(admin).map(|h| h.len()), Some(3));
}

#[test]
fn chat_mention_title_is_translated() {
    let host = RecordingHost::default();
    let alice = host.join("Alice");
    let bob = host.join("Bob");
    let tools = started(Arc::new(MemoryStore::new()));

    let message = tools.on_chat(&host, alice, "hi bob");
    assert_eq!(message.mentions().collect::<Vec<_>>(), ["Bob"]);
    assert_eq!(host.last_key(bob), Some(keys::CHAT_MENTION.key));
    assert_eq!(host.last_key(alice), None);
}

#[test]
fn language_switch_is_live() {
    let host = RecordingHost::default();
    let admin = host.join("Admin");
    host.op(admin);
    let mut tools = started(Arc::new(MemoryStore::new()));
    assert_eq!(tools.translations().read().language(), "zh_cn");

    tools.admin_set_language(&host, admin, "en_us").expect("switch");
    assert_eq!(tools.translations().read().language(), "en_us");
    assert_eq!(tools.config().read().language, "en_us");
    assert_eq!(host.count(admin, keys::SETLANGUAGE_SUCCESS.key), 1);
}

#[test]
fn grave_in_a_missing_world_is_forgotten() {
    let host = RecordingHost::default();
    let alice = host.join("Alice");
    let mut tools = started(Arc::new(MemoryStore::new()));

    host.teleport(alice, Identifier::THE_END, DVec3::ZERO);
    tools.on_player_death(&host, alice);
    assert!(tools.graves().grave_of(alice).is_some());

    assert!(tools.grave_command(&host, alice).is_err());
    assert!(tools.graves().grave_of(alice).is_none());
    assert_eq!(host.last_key(alice), Some(keys::GRAVE_INVALID_DIMENSION.key));
}

#[test]
fn file_store_writes_default_config() {
    let dir = env::temp_dir().join(format!("tpatools-flows-{}", process::id()));
    let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::open(&dir).expect("dir"));

    let tools = started(store);
    assert_eq!(*tools.config().read(), TpaConfig::default());
    assert!(dir.join(CONFIG_FILE).exists());

    fs::remove_dir_all(&dir).expect("cleanup");
}
