//! TPATools sandbox.
//!
//! Runs the plugin against an in-memory host driven from the console, so
//! every command can be tried without a game server:
//!
//! ```text
//! tpatools [--ephemeral] [config dir]
//! > join alice
//! > join bob
//! > as alice /tpa bob
//! > as bob /tpaccept
//! ```

mod console;
mod host;

use std::{
    env,
    ops::ControlFlow,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use glam::DVec3;
use tokio::{
    io::{AsyncBufReadExt, BufReader, stdin},
    runtime::Builder,
    signal,
    time::{MissedTickBehavior, interval},
};
use tokio_util::sync::CancellationToken;
use tpatools_core::{
    CommandError, Host, JsonFileStore, MemoryStore, StateStore, TpaTools, config::TICK_MILLIS,
};
use tpatools_utils::{ActorId, Position, locks::SyncMutex};
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use crate::console::{AdminCommand, ConsoleCommand, HELP, HomeCommand, PlayerCommand};
use crate::host::SandboxHost;

const DEFAULT_CONFIG_DIR: &str = "config/tpatools";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("tpatools")
        .build()
        .context("Failed to build the tokio runtime")?;
    let result = runtime.block_on(run());
    // The console task may still be parked on a blocking stdin read.
    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}

fn init_logging() -> anyhow::Result<()> {
    LogTracer::init().context("Failed to install the log bridge")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tpatools=debug,tpatools_core=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    set_global_default(subscriber).context("Failed to install the tracing subscriber")?;
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let mut ephemeral = false;
    let mut config_dir = PathBuf::from(DEFAULT_CONFIG_DIR);
    for arg in env::args().skip(1) {
        if arg == "--ephemeral" {
            ephemeral = true;
        } else {
            config_dir = PathBuf::from(arg);
        }
    }

    let store: Arc<dyn StateStore> = if ephemeral {
        log::info!("Ephemeral mode, nothing is written to disk");
        Arc::new(MemoryStore::new())
    } else {
        log::info!("Using config directory {}", config_dir.display());
        Arc::new(
            JsonFileStore::open(&config_dir)
                .with_context(|| format!("Failed to open {}", config_dir.display()))?,
        )
    };
    let mut tools =
        TpaTools::open(store, Some(config_dir)).context("Failed to load the config")?;
    tools.on_server_starting();

    let sandbox = Arc::new(Sandbox {
        host: SandboxHost::new(tools.translations()),
        tools: SyncMutex::new(tools),
    });
    let cancel_token = CancellationToken::new();

    let ticker = tokio::spawn(run_ticks(sandbox.clone(), cancel_token.clone()));
    tokio::spawn(run_console(sandbox.clone(), cancel_token.clone()));

    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl-c")?;
            log::info!("Ctrl-C received, shutting down");
            cancel_token.cancel();
        }
        () = cancel_token.cancelled() => {}
    }

    ticker.await.context("Tick task panicked")?;
    sandbox.tools.lock().on_server_stopping();
    Ok(())
}

/// Heartbeat, once per server tick.
async fn run_ticks(sandbox: Arc<Sandbox>, cancel_token: CancellationToken) {
    let mut ticker = interval(Duration::from_millis(TICK_MILLIS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            () = cancel_token.cancelled() => break,
            _ = ticker.tick() => {
                let expired = sandbox.tools.lock().tick(&sandbox.host);
                if expired > 0 {
                    log::debug!("{expired} teleport requests expired");
                }
            }
        }
    }
}

async fn run_console(sandbox: Arc<Sandbox>, cancel_token: CancellationToken) {
    let mut lines = BufReader::new(stdin()).lines();
    log::info!("Type `help` for commands");
    loop {
        let line = tokio::select! {
            () = cancel_token.cancelled() => break,
            line = lines.next_line() => line,
        };
        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                log::info!("Console closed, shutting down");
                cancel_token.cancel();
                break;
            }
            Err(e) => {
                log::error!("Failed to read the console: {e}");
                cancel_token.cancel();
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ConsoleCommand>() {
            Ok(command) => {
                if sandbox.execute(command).is_break() {
                    cancel_token.cancel();
                    break;
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    }
}

/// The host plus the plugin, behind one lock.
struct Sandbox {
    host: SandboxHost,
    tools: SyncMutex<TpaTools>,
}

impl Sandbox {
    fn resolve(&self, name: &str) -> Option<ActorId> {
        let found = self.host.find_profile(name);
        if found.is_none() {
            log::warn!("No player named {name}");
        }
        found
    }

    fn execute(&self, command: ConsoleCommand) -> ControlFlow<()> {
        match command {
            ConsoleCommand::Join(name) => {
                self.host.join(&name);
            }
            ConsoleCommand::Leave(name) => {
                if let Some(id) = self.resolve(&name) {
                    self.host.update(id, |p| p.online = false);
                    log::info!("{name} left the game");
                }
            }
            ConsoleCommand::Op(name) => {
                if let Some(id) = self.resolve(&name) {
                    self.host.update(id, |p| p.operator = true);
                    log::info!("Made {name} a server operator");
                }
            }
            ConsoleCommand::Kill(name) => {
                if let Some(id) = self.resolve(&name) {
                    self.tools.lock().on_player_death(&self.host, id);
                    self.host.update(id, |p| p.alive = false);
                    log::info!("{name} died");
                }
            }
            ConsoleCommand::Respawn(name) => {
                if let Some(id) = self.resolve(&name) {
                    self.host.respawn(id);
                }
            }
            ConsoleCommand::Move {
                player,
                world,
                x,
                y,
                z,
            } => {
                if let Some(id) = self.resolve(&player) {
                    let destination = Position::new(world, DVec3::new(x, y, z), 0.0, 0.0);
                    if let Err(e) = self.host.move_player(id, &destination) {
                        log::warn!("Could not move {player}: {e}");
                    }
                }
            }
            ConsoleCommand::Give { player, slot, item } => {
                if !(1..=9).contains(&slot) {
                    log::warn!("Hotbar slots are 1 to 9");
                } else if let Some(id) = self.resolve(&player) {
                    log::info!("Gave {item} to {player} in slot {slot}");
                    self.host.update(id, |p| p.hotbar[slot - 1] = Some(item));
                }
            }
            ConsoleCommand::As { player, command } => {
                if let Some(id) = self.resolve(&player) {
                    self.run_player_command(id, command);
                }
            }
            ConsoleCommand::Say { player, text } => {
                if let Some(id) = self.resolve(&player) {
                    let message = self.tools.lock().on_chat(&self.host, id, &text);
                    tracing::info!(target: "chat", "<{player}> {}", message.to_plain_string());
                }
            }
            ConsoleCommand::Players => {
                for line in self.host.roster() {
                    log::info!("{line}");
                }
            }
            ConsoleCommand::Save => self.tools.lock().on_server_stopping(),
            ConsoleCommand::Help => log::info!("\n{HELP}"),
            ConsoleCommand::Stop => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Runs a player command. `None` when a named player does not exist.
    fn run_player_command(&self, actor: ActorId, command: PlayerCommand) -> Option<()> {
        let host = &self.host;
        let mut tools = self.tools.lock();
        let outcome: Result<(), CommandError> = match command {
            PlayerCommand::Tpa(target) => tools.tpa(host, actor, self.resolve(&target)?),
            PlayerCommand::TpaHere(target) => tools.tpahere(host, actor, self.resolve(&target)?),
            PlayerCommand::TpAccept(sender) => {
                let sender = self.resolve_optional(sender)?;
                tools.tpaccept(host, actor, sender)
            }
            PlayerCommand::TpaDeny(sender) => {
                let sender = self.resolve_optional(sender)?;
                tools.tpadeny(host, actor, sender)
            }
            PlayerCommand::TpaCancel(target) => {
                let target = self.resolve_optional(target)?;
                tools.tpacancel(host, actor, target)
            }
            PlayerCommand::TpaToggle => tools.tpatoggle(host, actor).map(|_| ()),
            PlayerCommand::TpaLock(player) => tools.tpalock(host, actor, self.resolve(&player)?),
            PlayerCommand::TpaUnlock(player) => {
                tools.tpaunlock(host, actor, self.resolve(&player)?)
            }
            PlayerCommand::Back => tools.back_command(host, actor),
            PlayerCommand::Grave => tools.grave_command(host, actor),
            PlayerCommand::Home(home) => match home {
                HomeCommand::Teleport(name) => tools.home_teleport(host, actor, &name),
                HomeCommand::Set(name) => tools.home_set(host, actor, &name),
                HomeCommand::Remove(name) => tools.home_remove(host, actor, &name),
                HomeCommand::List => tools.home_list(host, actor),
                HomeCommand::Rename { old, new } => tools.home_rename(host, actor, &old, &new),
                HomeCommand::Share { home, player } => {
                    tools.home_share(host, actor, &home, self.resolve(&player)?)
                }
                HomeCommand::Unshare { home, player } => {
                    tools.home_unshare(host, actor, &home, player.as_deref())
                }
                HomeCommand::Public(name) => tools.home_public(host, actor, &name),
                HomeCommand::Private(name) => tools.home_private(host, actor, &name),
                HomeCommand::OtherHome(arg) => tools.home_other(host, actor, &arg),
                HomeCommand::OtherList => tools.home_otherlist(host, actor),
                HomeCommand::ShareList(kind) => tools.home_sharelist(host, actor, &kind),
            },
            PlayerCommand::Admin(admin) => match admin {
                AdminCommand::SetLanguage(language) => {
                    tools.admin_set_language(host, actor, &language)
                }
                AdminCommand::SetMaxHome(count) => tools.admin_set_max_homes(host, actor, count),
                AdminCommand::NeedOp { group, requires_op } => {
                    tools.admin_need_op(host, actor, &group, requires_op)
                }
                AdminCommand::CooldownSeconds(seconds) => {
                    tools.admin_cooldown(host, actor, seconds)
                }
                AdminCommand::WaitSeconds(seconds) => tools.admin_wait_time(host, actor, seconds),
                AdminCommand::Debug(enable) => tools.admin_debug(host, actor, enable),
            },
        };
        if outcome.is_ok() {
            log::debug!("Command by {actor} succeeded");
        }
        Some(())
    }

    /// `Some(None)` without a name, `None` when the name is unknown.
    fn resolve_optional(&self, name: Option<String>) -> Option<Option<ActorId>> {
        match name {
            Some(name) => self.resolve(&name).map(Some),
            None => Some(None),
        }
    }
}
