use std::{collections::BTreeMap, iter, sync::Arc};

use serde::{Deserialize, Serialize};
use tpatools_utils::{ActorId, Message, MessageArg, TranslationKey, translations::keys};

use super::{Home, HomeError, PublicHomeInfo, ShareListKind};
use crate::{
    back::PositionHistory,
    config::SharedConfig,
    host::{Host, notify_all},
    storage::{StateStore, load_json, save_json},
};

/// Document holding every home and the public index.
pub const HOMES_FILE: &str = "tpatool_homes.json";

const UNKNOWN_PLAYER: &str = "Unknown";

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct HomesDocument {
    player_homes: BTreeMap<ActorId, BTreeMap<String, Home>>,
    public_homes_by_owner: BTreeMap<ActorId, BTreeMap<String, PublicHomeInfo>>,
}

/// Every player's homes and the public home index.
///
/// Invariants: no owner maps to an empty home set, and every public entry
/// names an existing home of its owner.
pub struct HomeRegistry {
    config: SharedConfig,
    store: Arc<dyn StateStore>,
    homes: BTreeMap<ActorId, BTreeMap<String, Home>>,
    public: BTreeMap<ActorId, BTreeMap<String, PublicHomeInfo>>,
}

impl HomeRegistry {
    /// An empty registry. Call [`Self::load_state`] to restore saved homes.
    #[must_use]
    pub fn new(config: SharedConfig, store: Arc<dyn StateStore>) -> Self {
        Self {
            config,
            store,
            homes: BTreeMap::new(),
            public: BTreeMap::new(),
        }
    }

    /// Restores homes, dropping public entries whose home vanished.
    pub fn load_state(&mut self) {
        let document: HomesDocument =
            load_json(self.store.as_ref(), HOMES_FILE).unwrap_or_default();
        self.homes = document.player_homes;
        self.homes.retain(|_, homes| !homes.is_empty());
        self.public = document.public_homes_by_owner;
        for (owner, listed) in &mut self.public {
            let homes = self.homes.get(owner);
            listed.retain(|name, _| homes.is_some_and(|h| h.contains_key(name)));
        }
        self.public.retain(|_, listed| !listed.is_empty());
        log::info!(
            "Loaded homes of {} players, {} public",
            self.homes.len(),
            self.public.values().map(BTreeMap::len).sum::<usize>()
        );
    }

    /// Writes homes and public listings to the store.
    pub fn save_state(&self) {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct HomesDocumentRef<'a> {
            player_homes: &'a BTreeMap<ActorId, BTreeMap<String, Home>>,
            public_homes_by_owner: &'a BTreeMap<ActorId, BTreeMap<String, PublicHomeInfo>>,
        }
        save_json(
            self.store.as_ref(),
            HOMES_FILE,
            &HomesDocumentRef {
                player_homes: &self.homes,
                public_homes_by_owner: &self.public,
            },
        );
    }

    /// The homes of `owner`, sorted by name.
    #[must_use]
    pub fn homes_of(&self, owner: ActorId) -> Option<&BTreeMap<String, Home>> {
        self.homes.get(&owner)
    }

    /// One home of `owner`, by exact name.
    #[must_use]
    pub fn home(&self, owner: ActorId, name: &str) -> Option<&Home> {
        self.homes.get(&owner).and_then(|homes| homes.get(name))
    }

    /// Whether `owner` lists the home publicly.
    #[must_use]
    pub fn is_public(&self, owner: ActorId, name: &str) -> bool {
        self.public
            .get(&owner)
            .is_some_and(|listed| listed.contains_key(name))
    }

    fn own_home_mut(&mut self, owner: ActorId, name: &str) -> Result<&mut Home, HomeError> {
        self.homes
            .get_mut(&owner)
            .and_then(|homes| homes.get_mut(name))
            .ok_or_else(|| HomeError::NotFound(name.to_string()))
    }

    /// Saves the owner's current position as a new home.
    pub fn set_home(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), HomeError> {
        let max = self.config.read().max_homes;
        let count = self.homes.get(&owner).map_or(0, BTreeMap::len);
        if count >= max {
            return Err(HomeError::LimitExceeded(max));
        }
        if self.home(owner, name).is_some() {
            return Err(HomeError::NameExists(name.to_string()));
        }

        let position = host.position_of(owner)?;
        log::debug!("{owner} set home {name} in {}", position.world);
        self.homes
            .entry(owner)
            .or_default()
            .insert(name.to_string(), Home::new(position));
        self.save_state();

        host.send_message(owner, keys::HOME_SET.message([name.into()]))?;
        Ok(())
    }

    /// Teleports the owner to one of their homes. A name of the form
    /// `owner:home` that is not an own home is resolved as another player's home.
    pub fn teleport_home(
        &self,
        host: &dyn Host,
        history: &mut dyn PositionHistory,
        owner: ActorId,
        name: &str,
    ) -> Result<(), HomeError> {
        let Some(destination) = self.home(owner, name).map(|home| home.position.clone()) else {
            if name.contains(':') {
                return self.teleport_other_home(host, history, owner, name);
            }
            return Err(HomeError::NotFound(name.to_string()));
        };

        if !host.world_exists(&destination.world) {
            return Err(HomeError::InvalidDimension(name.to_string()));
        }

        let origin = host.position_of(owner)?;
        host.move_player(owner, &destination)?;
        history.record(owner, origin);
        log::debug!("{owner} teleported to home {name}");

        host.send_message(owner, keys::HOME_TELEPORTED.message([name.into()]))?;
        Ok(())
    }

    /// Sends the owner a listing of their homes.
    pub fn list_homes(&self, host: &dyn Host, owner: ActorId) -> Result<(), HomeError> {
        let homes = self
            .homes
            .get(&owner)
            .filter(|homes| !homes.is_empty())
            .ok_or(HomeError::NoHomes)?;

        let entries = homes.iter().map(|(name, home)| {
            let [x, y, z] = home.position.coordinate_strings();
            keys::HOME_LIST_ENTRY.message([
                name.as_str().into(),
                home.position.world.to_string().into(),
                x.into(),
                y.into(),
                z.into(),
            ])
        });
        send_listing(host, owner, keys::HOME_LIST.plain(), entries)
    }

    /// Deletes a home and its public listing.
    pub fn remove_home(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), HomeError> {
        let homes = self
            .homes
            .get_mut(&owner)
            .ok_or_else(|| HomeError::NotFound(name.to_string()))?;
        if homes.remove(name).is_none() {
            return Err(HomeError::NotFound(name.to_string()));
        }
        if homes.is_empty() {
            self.homes.remove(&owner);
        }
        self.unlist(owner, name);
        self.save_state();
        log::debug!("{owner} removed home {name}");

        host.send_message(owner, keys::HOME_REMOVED.message([name.into()]))?;
        Ok(())
    }

    /// Renames a home; shares and the public listing follow.
    pub fn rename_home(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        old: &str,
        new: &str,
    ) -> Result<(), HomeError> {
        let homes = self
            .homes
            .get_mut(&owner)
            .ok_or_else(|| HomeError::NotFound(old.to_string()))?;
        if !homes.contains_key(old) {
            return Err(HomeError::NotFound(old.to_string()));
        }
        if homes.contains_key(new) {
            return Err(HomeError::NameExists(new.to_string()));
        }
        if let Some(home) = homes.remove(old) {
            homes.insert(new.to_string(), home);
        }

        if let Some(listed) = self.public.get_mut(&owner) {
            if let Some(mut info) = listed.remove(old) {
                info.home_name = new.to_string();
                listed.insert(new.to_string(), info);
            }
        }
        self.save_state();
        log::debug!("{owner} renamed home {old} to {new}");

        host.send_message(owner, keys::HOME_RENAMED.message([old.into(), new.into()]))?;
        Ok(())
    }

    /// Lets `player` use the home.
    pub fn share_home(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
        player: ActorId,
    ) -> Result<(), HomeError> {
        let home = self.own_home_mut(owner, name)?;
        if home.is_shared_with(player) {
            return Err(HomeError::AlreadyShared {
                home: name.to_string(),
                player,
            });
        }
        home.shared_players.push(player);
        self.save_state();
        log::debug!("{owner} shared home {name} with {player}");

        notify_all(
            host,
            [
                (owner, keys::HOME_SHARED.message([name.into(), player.into()])),
                (
                    player,
                    keys::HOME_SHARED_RECEIVED.message([owner.into(), name.into()]),
                ),
            ],
        )?;
        Ok(())
    }

    /// Revokes sharing, from one player by name or from everyone.
    pub fn unshare_home(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
        player_name: Option<&str>,
    ) -> Result<(), HomeError> {
        let home = self.own_home_mut(owner, name)?;

        let Some(player_name) = player_name else {
            if home.shared_players.is_empty() {
                return Err(HomeError::NotSharedWithAnyone(name.to_string()));
            }
            home.shared_players.clear();
            self.save_state();
            log::debug!("{owner} unshared home {name} from everyone");
            host.send_message(owner, keys::UNSHARE_ALL.message([name.into()]))?;
            return Ok(());
        };

        let player = host
            .find_profile(player_name)
            .ok_or_else(|| HomeError::PlayerNotFound(player_name.to_string()))?;
        let Some(index) = home.shared_players.iter().position(|p| *p == player) else {
            return Err(HomeError::NotSharedWith {
                home: name.to_string(),
                player: player_name.to_string(),
            });
        };
        home.shared_players.remove(index);
        self.save_state();
        log::debug!("{owner} unshared home {name} from {player}");

        let mut messages = vec![(
            owner,
            keys::UNSHARE_PLAYER.message([name.into(), player_name.into()]),
        )];
        if host.online_players().contains(&player) {
            messages.push((
                player,
                keys::UNSHARE_NOTIFY.message([owner.into(), name.into()]),
            ));
        }
        notify_all(host, messages)?;
        Ok(())
    }

    /// Lists the home publicly.
    pub fn set_public(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), HomeError> {
        if self.home(owner, name).is_none() {
            return Err(HomeError::NotFound(name.to_string()));
        }
        if self.is_public(owner, name) {
            return Err(HomeError::AlreadyPublic(name.to_string()));
        }

        let owner_name = host
            .player_name(owner)
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());
        self.public.entry(owner).or_default().insert(
            name.to_string(),
            PublicHomeInfo {
                owner,
                owner_name,
                home_name: name.to_string(),
            },
        );
        self.save_state();
        log::debug!("{owner} made home {name} public");

        host.send_message(owner, keys::HOME_PUBLICIZED.message([name.into()]))?;
        Ok(())
    }

    /// Removes the home from the public listing.
    pub fn set_private(
        &mut self,
        host: &dyn Host,
        owner: ActorId,
        name: &str,
    ) -> Result<(), HomeError> {
        if self.home(owner, name).is_none() {
            return Err(HomeError::NotFound(name.to_string()));
        }
        if !self.unlist(owner, name) {
            return Err(HomeError::NotPublic(name.to_string()));
        }
        self.save_state();
        log::debug!("{owner} made home {name} private");

        host.send_message(owner, keys::HOME_PRIVATIZED.message([name.into()]))?;
        Ok(())
    }

    /// Teleports `player` to `owner:home` when that home is public or shared with them.
    pub fn teleport_other_home(
        &self,
        host: &dyn Host,
        history: &mut dyn PositionHistory,
        player: ActorId,
        arg: &str,
    ) -> Result<(), HomeError> {
        let (owner_name, name) = arg
            .split_once(':')
            .filter(|(owner, home)| !owner.is_empty() && !home.is_empty())
            .ok_or(HomeError::InvalidFormat)?;
        let not_found = || HomeError::OtherNotFound(arg.to_string());

        let owner = host.find_profile(owner_name).ok_or_else(not_found)?;
        let home = self.home(owner, name).ok_or_else(not_found)?;
        if !self.is_public(owner, name) && !home.is_shared_with(player) {
            return Err(not_found());
        }

        let destination = home.position.clone();
        if !host.world_exists(&destination.world) {
            return Err(HomeError::InvalidDimension(arg.to_string()));
        }

        let origin = host.position_of(player)?;
        host.move_player(player, &destination)?;
        history.record(player, origin);
        log::debug!("{player} teleported to {owner}'s home {name}");

        host.send_message(
            player,
            keys::HOME_OTHER_TELEPORTED.message([owner.into(), name.into()]),
        )?;
        Ok(())
    }

    /// Sends the player every public home.
    pub fn list_other_homes(&self, host: &dyn Host, player: ActorId) -> Result<(), HomeError> {
        let entries: Vec<Message> = self
            .public
            .iter()
            .flat_map(|(owner, listed)| {
                listed.iter().filter_map(move |(name, info)| {
                    self.home(*owner, name)
                        .map(|home| other_entry(host, keys::HOME_OTHERLIST_ENTRY, info, name, home))
                })
            })
            .collect();
        if entries.is_empty() {
            return Err(HomeError::NoOtherHomes);
        }
        send_listing(host, player, keys::HOME_OTHERLIST.plain(), entries)
    }

    /// Sends the player homes shared with them, or homes they shared.
    pub fn share_list(
        &self,
        host: &dyn Host,
        player: ActorId,
        kind: ShareListKind,
    ) -> Result<(), HomeError> {
        match kind {
            ShareListKind::In => {
                let entries: Vec<Message> = self
                    .homes
                    .iter()
                    .filter(|(owner, _)| **owner != player)
                    .flat_map(|(owner, homes)| {
                        homes
                            .iter()
                            .filter(move |(_, home)| home.is_shared_with(player))
                            .map(move |(name, home)| {
                                let info = PublicHomeInfo {
                                    owner: *owner,
                                    owner_name: UNKNOWN_PLAYER.to_string(),
                                    home_name: name.clone(),
                                };
                                other_entry(host, keys::SHARELIST_IN_ENTRY, &info, name, home)
                            })
                    })
                    .collect();
                if entries.is_empty() {
                    return Err(HomeError::ShareListInEmpty);
                }
                send_listing(host, player, keys::SHARELIST_IN.plain(), entries)
            }
            ShareListKind::Out => {
                let entries: Vec<Message> = self
                    .homes
                    .get(&player)
                    .into_iter()
                    .flatten()
                    .filter(|(_, home)| !home.shared_players.is_empty())
                    .map(|(name, home)| {
                        let names = home
                            .shared_players
                            .iter()
                            .map(|p| {
                                host.player_name(*p)
                                    .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
                            })
                            .collect::<Vec<_>>()
                            .join(", ");
                        let [x, y, z] = home.position.coordinate_strings();
                        keys::SHARELIST_OUT_ENTRY.message([
                            name.as_str().into(),
                            names.into(),
                            home.position.world.to_string().into(),
                            x.into(),
                            y.into(),
                            z.into(),
                        ])
                    })
                    .collect();
                if entries.is_empty() {
                    return Err(HomeError::ShareListOutEmpty);
                }
                send_listing(host, player, keys::SHARELIST_OUT.plain(), entries)
            }
        }
    }

    /// Drops a public listing; returns whether there was one.
    fn unlist(&mut self, owner: ActorId, name: &str) -> bool {
        let Some(listed) = self.public.get_mut(&owner) else {
            return false;
        };
        let removed = listed.remove(name).is_some();
        if listed.is_empty() {
            self.public.remove(&owner);
        }
        removed
    }
}

/// `- home (owner): world (x=.., y=.., z=..)`
fn other_entry(
    host: &dyn Host,
    key: TranslationKey,
    info: &PublicHomeInfo,
    name: &str,
    home: &Home,
) -> Message {
    let owner_name = host
        .player_name(info.owner)
        .unwrap_or_else(|| info.owner_name.clone());
    let [x, y, z] = home.position.coordinate_strings();
    key.message([
        name.into(),
        MessageArg::Text(owner_name),
        home.position.world.to_string().into(),
        x.into(),
        y.into(),
        z.into(),
    ])
}

fn send_listing(
    host: &dyn Host,
    to: ActorId,
    header: Message,
    entries: impl IntoIterator<Item = Message>,
) -> Result<(), HomeError> {
    notify_all(
        host,
        iter::once((to, header)).chain(entries.into_iter().map(|entry| (to, entry))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use tpatools_utils::{Identifier, Position};

    use super::*;
    use crate::{
        back::BackTracker,
        config::{TpaConfig, shared},
        host::mock::MockHost,
        storage::MemoryStore,
    };

    fn registry() -> HomeRegistry {
        HomeRegistry::new(shared(TpaConfig::default()), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn limit_is_checked_before_duplicates() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut homes = registry();

        homes.set_home(&host, alice, "base").expect("first");
        assert_eq!(
            homes.set_home(&host, alice, "base"),
            Err(HomeError::NameExists("base".to_string()))
        );
        homes.set_home(&host, alice, "mine").expect("second");
        assert_eq!(
            homes.set_home(&host, alice, "base"),
            Err(HomeError::LimitExceeded(2))
        );
    }

    #[test]
    fn max_homes_is_read_per_call() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let config = shared(TpaConfig::default());
        let mut homes = HomeRegistry::new(config.clone(), Arc::new(MemoryStore::new()));

        config.write().max_homes = 1;
        homes.set_home(&host, alice, "a").expect("first");
        assert_eq!(
            homes.set_home(&host, alice, "b"),
            Err(HomeError::LimitExceeded(1))
        );
        config.write().max_homes = 3;
        homes.set_home(&host, alice, "b").expect("raised limit");
    }

    #[test]
    fn teleport_home_records_back() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut homes = registry();
        let mut back = BackTracker::new();

        homes.set_home(&host, alice, "base").expect("set");
        let base = host.position(alice);
        let away = Position::new(Identifier::THE_NETHER, DVec3::new(9.0, 9.0, 9.0), 0.0, 0.0);
        host.set_position(alice, away.clone());

        homes
            .teleport_home(&host, &mut back, alice, "base")
            .expect("teleport");
        assert_eq!(host.position(alice), base);
        assert_eq!(back.previous(alice), Some(&away));

        assert_eq!(
            homes.teleport_home(&host, &mut back, alice, "nowhere"),
            Err(HomeError::NotFound("nowhere".to_string()))
        );
    }

    #[test]
    fn home_in_missing_world_is_rejected() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        host.set_position(
            alice,
            Position::new(Identifier::THE_END, DVec3::ZERO, 0.0, 0.0),
        );
        let mut homes = registry();
        let mut back = BackTracker::new();

        homes.set_home(&host, alice, "end").expect("set");
        assert_eq!(
            homes.teleport_home(&host, &mut back, alice, "end"),
            Err(HomeError::InvalidDimension("end".to_string()))
        );
        assert!(homes.home(alice, "end").is_some());
    }

    #[test]
    fn list_homes_sends_header_and_sorted_entries() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut homes = registry();

        assert_eq!(homes.list_homes(&host, alice), Err(HomeError::NoHomes));
        homes.set_home(&host, alice, "zeta").expect("set");
        homes.set_home(&host, alice, "alpha").expect("set");
        host.clear_messages();

        homes.list_homes(&host, alice).expect("list");
        let sent = host.sent.borrow();
        assert_eq!(sent[0].1.key, keys::HOME_LIST);
        assert_eq!(sent[1].1.args[0], MessageArg::Text("alpha".to_string()));
        assert_eq!(sent[2].1.args[0], MessageArg::Text("zeta".to_string()));
        assert_eq!(sent[1].1.args[2], MessageArg::Text("10.00".to_string()));
    }

    #[test]
    fn rename_and_remove_keep_public_index_in_step() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let mut homes = registry();

        homes.set_home(&host, alice, "base").expect("set");
        homes.set_public(&host, alice, "base").expect("public");
        assert_eq!(
            homes.set_public(&host, alice, "base"),
            Err(HomeError::AlreadyPublic("base".to_string()))
        );

        homes
            .rename_home(&host, alice, "base", "castle")
            .expect("rename");
        assert!(homes.is_public(alice, "castle"));
        assert!(!homes.is_public(alice, "base"));

        homes.set_home(&host, alice, "farm").expect("set");
        assert_eq!(
            homes.rename_home(&host, alice, "farm", "castle"),
            Err(HomeError::NameExists("castle".to_string()))
        );
        assert_eq!(
            homes.rename_home(&host, alice, "nope", "x"),
            Err(HomeError::NotFound("nope".to_string()))
        );

        homes.remove_home(&host, alice, "castle").expect("remove");
        assert!(!homes.is_public(alice, "castle"));
        assert_eq!(
            homes.set_private(&host, alice, "farm"),
            Err(HomeError::NotPublic("farm".to_string()))
        );
        homes.remove_home(&host, alice, "farm").expect("remove");
        assert!(homes.homes_of(alice).is_none());
    }

    #[test]
    fn other_home_needs_share_or_public() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        let mut homes = registry();
        let mut back = BackTracker::new();

        homes.set_home(&host, alice, "base").expect("set");
        let base = host.position(alice);

        assert_eq!(
            homes.teleport_other_home(&host, &mut back, bob, "alice"),
            Err(HomeError::InvalidFormat)
        );
        assert_eq!(
            homes.teleport_other_home(&host, &mut back, bob, "alice:base"),
            Err(HomeError::OtherNotFound("alice:base".to_string()))
        );
        assert_eq!(
            homes.teleport_other_home(&host, &mut back, bob, "nobody:base"),
            Err(HomeError::OtherNotFound("nobody:base".to_string()))
        );

        homes.share_home(&host, alice, "base", bob).expect("share");
        assert_eq!(
            homes.share_home(&host, alice, "base", bob),
            Err(HomeError::AlreadyShared {
                home: "base".to_string(),
                player: bob
            })
        );
        assert!(host.keys_for(bob).contains(&keys::HOME_SHARED_RECEIVED.key));

        homes
            .teleport_home(&host, &mut back, bob, "ALICE:base")
            .expect("own-home fallback resolves owner:home");
        assert_eq!(host.position(bob), base);
        assert!(back.previous(bob).is_some());
    }

    #[test]
    fn public_home_is_usable_by_anyone() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        let mut homes = registry();
        let mut back = BackTracker::new();

        assert_eq!(
            homes.list_other_homes(&host, bob),
            Err(HomeError::NoOtherHomes)
        );
        homes.set_home(&host, alice, "plaza").expect("set");
        homes.set_public(&host, alice, "plaza").expect("public");

        homes
            .teleport_other_home(&host, &mut back, bob, "alice:plaza")
            .expect("public home");
        host.clear_messages();
        homes.list_other_homes(&host, bob).expect("list");
        assert_eq!(
            host.keys_for(bob),
            [keys::HOME_OTHERLIST.key, keys::HOME_OTHERLIST_ENTRY.key]
        );
        let sent = host.sent.borrow();
        assert_eq!(sent[1].1.args[1], MessageArg::Text("alice".to_string()));
    }

    #[test]
    fn unshare_by_name_and_all() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        let carol = host.add_player("carol");
        let mut homes = registry();

        homes.set_home(&host, alice, "base").expect("set");
        assert_eq!(
            homes.unshare_home(&host, alice, "base", None),
            Err(HomeError::NotSharedWithAnyone("base".to_string()))
        );
        homes.share_home(&host, alice, "base", bob).expect("share");
        homes.share_home(&host, alice, "base", carol).expect("share");

        assert_eq!(
            homes.unshare_home(&host, alice, "base", Some("dave")),
            Err(HomeError::PlayerNotFound("dave".to_string()))
        );
        host.clear_messages();
        homes
            .unshare_home(&host, alice, "base", Some("Bob"))
            .expect("unshare bob");
        assert_eq!(host.keys_for(bob), [keys::UNSHARE_NOTIFY.key]);
        assert_eq!(
            homes.unshare_home(&host, alice, "base", Some("bob")),
            Err(HomeError::NotSharedWith {
                home: "base".to_string(),
                player: "bob".to_string()
            })
        );

        host.set_online(carol, false);
        homes
            .unshare_home(&host, alice, "base", None)
            .expect("unshare all");
        assert!(host.keys_for(carol).is_empty());
        assert!(
            homes
                .home(alice, "base")
                .is_some_and(|h| h.shared_players.is_empty())
        );
    }

    #[test]
    fn share_lists() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        let mut homes = registry();

        assert_eq!(
            homes.share_list(&host, bob, ShareListKind::In),
            Err(HomeError::ShareListInEmpty)
        );
        homes.set_home(&host, alice, "base").expect("set");
        assert_eq!(
            homes.share_list(&host, alice, ShareListKind::Out),
            Err(HomeError::ShareListOutEmpty)
        );
        homes.share_home(&host, alice, "base", bob).expect("share");
        host.clear_messages();

        homes.share_list(&host, bob, ShareListKind::In).expect("in");
        homes.share_list(&host, alice, ShareListKind::Out).expect("out");
        assert_eq!(
            host.keys_for(bob),
            [keys::SHARELIST_IN.key, keys::SHARELIST_IN_ENTRY.key]
        );
        let sent = host.sent.borrow();
        let out_entry = sent
            .iter()
            .find(|(_, m)| m.key == keys::SHARELIST_OUT_ENTRY)
            .expect("out entry");
        assert_eq!(out_entry.1.args[1], MessageArg::Text("bob".to_string()));
    }

    #[test]
    fn share_list_kind_parses() {
        assert_eq!("in".parse::<ShareListKind>(), Ok(ShareListKind::In));
        assert_eq!("out".parse::<ShareListKind>(), Ok(ShareListKind::Out));
        assert_eq!(
            "sideways".parse::<ShareListKind>(),
            Err(HomeError::InvalidShareListType)
        );
    }

    #[test]
    fn homes_persist_with_public_index() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let config = shared(TpaConfig::default());

        let mut first = HomeRegistry::new(config.clone(), store.clone());
        first.set_home(&host, alice, "base").expect("set");
        first.set_public(&host, alice, "base").expect("public");
        first.share_home(&host, alice, "base", bob).expect("share");

        let contents = store.load(HOMES_FILE).expect("load").expect("written");
        assert!(contents.contains("playerHomes"));
        assert!(contents.contains("publicHomesByOwner"));

        let mut second = HomeRegistry::new(config, store);
        second.load_state();
        assert!(second.is_public(alice, "base"));
        assert!(
            second
                .home(alice, "base")
                .is_some_and(|h| h.is_shared_with(bob))
        );
    }
}
