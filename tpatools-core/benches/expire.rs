#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use glam::DVec3;
use tpatools_core::config::{TpaConfig, shared};
use tpatools_core::teleport::{TeleportMode, TeleportTracker};
use tpatools_core::{Host, HostError, MemoryStore};
use tpatools_utils::{ActorId, Identifier, Message, Position};

/// Everyone is online, nothing is delivered.
struct QuietHost;

impl Host for QuietHost {
    fn now(&self) -> u64 {
        0
    }

    fn is_alive(&self, _actor: ActorId) -> bool {
        true
    }

    fn position_of(&self, _actor: ActorId) -> Result<Position, HostError> {
        Ok(Position::new(Identifier::OVERWORLD, DVec3::ZERO, 0.0, 0.0))
    }

    fn world_exists(&self, _world: &Identifier) -> bool {
        true
    }

    fn move_player(&self, _actor: ActorId, _destination: &Position) -> Result<(), HostError> {
        Ok(())
    }

    fn send_message(&self, _actor: ActorId, message: Message) -> Result<(), HostError> {
        black_box(message);
        Ok(())
    }

    fn player_name(&self, _actor: ActorId) -> Option<String> {
        None
    }

    fn find_profile(&self, _name: &str) -> Option<ActorId> {
        None
    }

    fn online_players(&self) -> Vec<ActorId> {
        Vec::new()
    }

    fn hotbar_item(&self, _actor: ActorId, _slot: usize) -> Option<String> {
        None
    }

    fn notify_mention(&self, _target: ActorId, _title: Message) -> Result<(), HostError> {
        Ok(())
    }

    fn is_operator(&self, _actor: ActorId) -> bool {
        false
    }
}

/// `senders` players each asking one of `targets` players.
fn populated(senders: u128, targets: u128) -> TeleportTracker {
    let config = shared(TpaConfig {
        cooldown_ms: 0,
        ..TpaConfig::default()
    });
    let mut tracker = TeleportTracker::new(config, Arc::new(MemoryStore::new()));
    for sender in 0..senders {
        let target = ActorId::from_u128(1_000_000 + sender % targets);
        // Cannot fail: no cooldown, nobody muted or locked.
        let _ = tracker.send_request(
            &QuietHost,
            ActorId::from_u128(sender),
            target,
            TeleportMode::ToTarget,
        );
    }
    tracker
}

// ── Heartbeat ───────────────────────────────────────────────────────────────

fn bench_heartbeat_nothing_stale(c: &mut Criterion) {
    let mut group = c.benchmark_group("heartbeat_nothing_stale");
    for pending in [100u128, 1000] {
        let mut tracker = populated(pending, 16);
        group.throughput(Throughput::Elements(pending as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pending), &pending, |b, _| {
            b.iter(|| black_box(tracker.expire_stale_requests(&QuietHost, black_box(1))));
        });
    }
    group.finish();
}

fn bench_heartbeat_all_stale(c: &mut Criterion) {
    let mut group = c.benchmark_group("heartbeat_all_stale");
    for pending in [100u128, 1000] {
        group.throughput(Throughput::Elements(pending as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pending), &pending, |b, &n| {
            b.iter_batched(
                || populated(n, 16),
                |mut tracker| black_box(tracker.expire_stale_requests(&QuietHost, u64::MAX)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heartbeat_nothing_stale, bench_heartbeat_all_stale);
criterion_main!(benches);
