use std::{collections::BTreeSet, sync::Arc};

use rustc_hash::FxHashMap;
use tpatools_utils::{ActorId, translations::keys};

use super::{TeleportError, TeleportMode, TeleportRequest};
use crate::{
    back::PositionHistory,
    config::SharedConfig,
    host::{Host, notify_all},
    storage::{StateStore, load_json, save_json},
};

/// Document holding the mute toggles.
pub const TOGGLES_FILE: &str = "tpatool_toggles.json";
/// Document holding the lock lists.
pub const LOCKS_FILE: &str = "tpatool_locks.json";

/// Owns pending requests and the cooldown, mute and lock registries.
///
/// All four registries live in one value so a multi-threaded host only needs
/// a single lock around the tracker.
pub struct TeleportTracker {
    config: SharedConfig,
    store: Arc<dyn StateStore>,
    /// Target -> pending requests, insertion order. Never holds an empty queue.
    requests: FxHashMap<ActorId, Vec<TeleportRequest>>,
    /// Sender -> time of the last successful send.
    cooldowns: FxHashMap<ActorId, u64>,
    /// Actors refusing all requests. Only `true` entries are kept.
    mutes: FxHashMap<ActorId, bool>,
    /// Protected actor -> blocked senders. Never holds an empty set.
    locks: FxHashMap<ActorId, BTreeSet<ActorId>>,
}

impl TeleportTracker {
    /// Creates an empty tracker. Call [`Self::load_state`] to restore mutes and locks.
    #[must_use]
    pub fn new(config: SharedConfig, store: Arc<dyn StateStore>) -> Self {
        Self {
            config,
            store,
            requests: FxHashMap::default(),
            cooldowns: FxHashMap::default(),
            mutes: FxHashMap::default(),
            locks: FxHashMap::default(),
        }
    }

    /// Restores mutes and locks from the store.
    pub fn load_state(&mut self) {
        self.mutes = load_json::<FxHashMap<ActorId, bool>>(self.store.as_ref(), TOGGLES_FILE)
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, muted)| *muted)
            .collect();
        self.locks =
            load_json::<FxHashMap<ActorId, BTreeSet<ActorId>>>(self.store.as_ref(), LOCKS_FILE)
                .unwrap_or_default()
                .into_iter()
                .filter(|(_, blocked)| !blocked.is_empty())
                .collect();
        log::info!(
            "Loaded {} TPA toggles and {} lock lists",
            self.mutes.len(),
            self.locks.len()
        );
    }

    /// Writes mutes and locks to the store.
    pub fn save_state(&self) {
        self.save_mutes();
        self.save_locks();
    }

    fn save_mutes(&self) {
        save_json(self.store.as_ref(), TOGGLES_FILE, &self.mutes);
    }

    fn save_locks(&self) {
        save_json(self.store.as_ref(), LOCKS_FILE, &self.locks);
    }

    /// Queues a request from `sender` to `target`.
    ///
    /// Checks, in order: self target, sender cooldown, target liveness, target
    /// mute, target lock list. A failed check leaves every registry untouched.
    pub fn send_request(
        &mut self,
        host: &dyn Host,
        sender: ActorId,
        target: ActorId,
        mode: TeleportMode,
    ) -> Result<(), TeleportError> {
        if sender == target {
            return Err(TeleportError::SelfTarget);
        }

        let now = host.now();
        let window = self.config.read().cooldown_window();
        if let Some(&last) = self.cooldowns.get(&sender) {
            let elapsed = now.saturating_sub(last);
            if elapsed < window {
                return Err(TeleportError::OnCooldown(window - elapsed));
            }
        }

        if !host.is_alive(target) {
            return Err(TeleportError::TargetUnavailable);
        }
        if self.is_muted(target) {
            return Err(TeleportError::TargetMuted(target));
        }
        if self
            .locks
            .get(&target)
            .is_some_and(|blocked| blocked.contains(&sender))
        {
            return Err(TeleportError::TargetLocked(target));
        }

        self.requests
            .entry(target)
            .or_default()
            .push(TeleportRequest {
                sender,
                target,
                mode,
                created_at: now,
            });
        self.cooldowns.insert(sender, now);
        log::debug!("{mode:?} request sent: {sender} -> {target}");

        notify_all(
            host,
            [
                (target, mode.received_key().message([sender.into()])),
                (sender, keys::TPA_SENT.message([target.into()])),
            ],
        )?;
        Ok(())
    }

    /// Accepts a pending request for `target`.
    ///
    /// Without a filter the most recently queued request wins. With a filter
    /// the oldest request from that sender is picked.
    pub fn accept_request(
        &mut self,
        host: &dyn Host,
        history: &mut dyn PositionHistory,
        target: ActorId,
        sender_filter: Option<ActorId>,
    ) -> Result<(), TeleportError> {
        let (index, request) = self.select(target, sender_filter)?;

        if !host.is_alive(request.sender) {
            self.remove(target, index);
            log::debug!(
                "Dropped request {} -> {target}: sender unavailable",
                request.sender
            );
            return Err(TeleportError::SenderUnavailable);
        }

        let (mover, anchor) = request.mover_and_anchor();
        let destination = host.position_of(anchor)?;
        let origin = host.position_of(mover)?;
        host.move_player(mover, &destination)?;
        history.record(mover, origin);

        self.remove(target, index);
        log::debug!("TPA request accepted: {mover} teleported to {anchor}");

        notify_all(
            host,
            [
                (
                    target,
                    request.mode.accepted_key().message([request.sender.into()]),
                ),
                (request.sender, keys::TPA_ACCEPTED_BY.message([target.into()])),
            ],
        )?;
        Ok(())
    }

    /// Denies a pending request for `target`, using the same selection as accept.
    pub fn deny_request(
        &mut self,
        host: &dyn Host,
        target: ActorId,
        sender_filter: Option<ActorId>,
    ) -> Result<(), TeleportError> {
        let (index, request) = self.select(target, sender_filter)?;
        self.remove(target, index);
        log::debug!("TPA request denied: {} -> {target}", request.sender);

        notify_all(
            host,
            [
                (
                    target,
                    request.mode.denied_key().message([request.sender.into()]),
                ),
                (request.sender, keys::TPA_DENIED_BY.message([target.into()])),
            ],
        )?;
        Ok(())
    }

    /// Cancels every request from `sender`, or only those to `target_filter`.
    pub fn cancel_request(
        &mut self,
        host: &dyn Host,
        sender: ActorId,
        target_filter: Option<ActorId>,
    ) -> Result<(), TeleportError> {
        let mut cancelled = Vec::new();
        for queue in self.requests.values_mut() {
            queue.retain(|request| {
                let hit = request.sender == sender
                    && target_filter.is_none_or(|target| request.target == target);
                if hit {
                    cancelled.push(request.clone());
                }
                !hit
            });
        }
        self.requests.retain(|_, queue| !queue.is_empty());

        if cancelled.is_empty() {
            return Err(TeleportError::NothingToCancel);
        }
        log::debug!("{sender} cancelled {} request(s)", cancelled.len());

        notify_all(
            host,
            cancelled.iter().flat_map(|request| {
                [
                    (request.target, keys::TPA_CANCELLED.message([sender.into()])),
                    (
                        sender,
                        keys::TPA_CANCELLED_SELF.message([request.target.into()]),
                    ),
                ]
            }),
        )?;
        Ok(())
    }

    /// Flips the actor's mute toggle and returns the new state.
    pub fn toggle_mute(&mut self, host: &dyn Host, actor: ActorId) -> Result<bool, TeleportError> {
        let muted = !self.is_muted(actor);
        if muted {
            self.mutes.insert(actor, true);
        } else {
            self.mutes.remove(&actor);
        }
        self.save_mutes();
        log::debug!("{actor} toggled TPA requests {}", if muted { "off" } else { "on" });

        let key = if muted {
            keys::TPA_TOGGLE_ON
        } else {
            keys::TPA_TOGGLE_OFF
        };
        host.send_message(actor, key.plain())?;
        Ok(muted)
    }

    /// Blocks requests from `blocked` to `actor`.
    pub fn lock(
        &mut self,
        host: &dyn Host,
        actor: ActorId,
        blocked: ActorId,
    ) -> Result<(), TeleportError> {
        if actor == blocked {
            return Err(TeleportError::SelfLock);
        }
        if !self.locks.entry(actor).or_default().insert(blocked) {
            return Err(TeleportError::AlreadyLocked(blocked));
        }
        self.save_locks();
        log::debug!("{actor} locked TPA from {blocked}");

        host.send_message(actor, keys::TPA_LOCKED_PLAYER.message([blocked.into()]))?;
        Ok(())
    }

    /// Lifts a block set by [`Self::lock`].
    pub fn unlock(
        &mut self,
        host: &dyn Host,
        actor: ActorId,
        blocked: ActorId,
    ) -> Result<(), TeleportError> {
        if actor == blocked {
            return Err(TeleportError::SelfLock);
        }
        let Some(set) = self.locks.get_mut(&actor) else {
            return Err(TeleportError::NotLocked(blocked));
        };
        if !set.remove(&blocked) {
            return Err(TeleportError::NotLocked(blocked));
        }
        if set.is_empty() {
            self.locks.remove(&actor);
        }
        self.save_locks();
        log::debug!("{actor} unlocked TPA from {blocked}");

        host.send_message(actor, keys::TPA_UNLOCKED_PLAYER.message([blocked.into()]))?;
        Ok(())
    }

    /// Removes every request at least one timeout window old and notifies
    /// both parties. Runs on every heartbeat; notification failures are
    /// logged and skipped. Returns the number of expired requests.
    pub fn expire_stale_requests(&mut self, host: &dyn Host, now: u64) -> usize {
        let timeout = self.config.read().timeout_window_ms();
        let mut expired = Vec::new();
        self.requests.retain(|_, queue| {
            queue.retain(|request| {
                let stale = request.is_expired(now, timeout);
                if stale {
                    expired.push(request.clone());
                }
                !stale
            });
            !queue.is_empty()
        });

        for request in &expired {
            log::debug!(
                "TPA request timed out: {} -> {}",
                request.sender,
                request.target
            );
            let notified = notify_all(
                host,
                [
                    (
                        request.target,
                        request.mode.timeout_key().message([request.sender.into()]),
                    ),
                    (
                        request.sender,
                        keys::TPA_TIMEOUT_SELF.message([request.target.into()]),
                    ),
                ],
            );
            if let Err(e) = notified {
                log::warn!(
                    "Timeout notice for {} -> {} not delivered: {e}",
                    request.sender,
                    request.target
                );
            }
        }
        expired.len()
    }

    /// Requests waiting for `target`, oldest first.
    #[must_use]
    pub fn pending_for(&self, target: ActorId) -> &[TeleportRequest] {
        self.requests.get(&target).map_or(&[], Vec::as_slice)
    }

    /// Total number of pending requests.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.requests.values().map(Vec::len).sum()
    }

    /// Number of targets with at least one pending request.
    #[must_use]
    pub fn queue_count(&self) -> usize {
        self.requests.len()
    }

    /// Whether `actor` has turned incoming requests off.
    #[must_use]
    pub fn is_muted(&self, actor: ActorId) -> bool {
        self.mutes.get(&actor).copied().unwrap_or(false)
    }

    /// Senders `actor` has blocked.
    #[must_use]
    pub fn locked_by(&self, actor: ActorId) -> Option<&BTreeSet<ActorId>> {
        self.locks.get(&actor)
    }

    fn select(
        &self,
        target: ActorId,
        sender_filter: Option<ActorId>,
    ) -> Result<(usize, TeleportRequest), TeleportError> {
        let queue = self
            .requests
            .get(&target)
            .filter(|queue| !queue.is_empty())
            .ok_or(TeleportError::NoPendingRequest)?;

        let index = match sender_filter {
            Some(sender) => queue
                .iter()
                .position(|request| request.sender == sender)
                .ok_or(TeleportError::NoRequestFromSender(sender))?,
            None => queue.len() - 1,
        };
        Ok((index, queue[index].clone()))
    }

    fn remove(&mut self, target: ActorId, index: usize) {
        if let Some(queue) = self.requests.get_mut(&target) {
            queue.remove(index);
            if queue.is_empty() {
                self.requests.remove(&target);
            }
        }
    }
}
