//! Chat augmentation: player mentions and hotbar item links.
//!
//! A message is split into styled [`ChatSegment`]s. Names of online players
//! found in the text (case-insensitive) become [`ChatSegment::Mention`], and
//! `&1` .. `&9` become [`ChatSegment::Item`] with the display name of the
//! sender's hotbar slot.

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tpatools_utils::{ActorId, translations::keys};

use crate::host::{Host, HostError};

/// A styled run of chat text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatSegment {
    /// Unstyled text.
    Text(String),
    /// A highlighted player name, spelled the way the player spells it.
    Mention(String),
    /// A linked item, rendered in brackets.
    Item(String),
}

/// A chat message after augmentation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatMessage {
    /// Styled runs, in order.
    pub segments: Vec<ChatSegment>,
}

impl ChatMessage {
    /// A message with one unstyled segment.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![ChatSegment::Text(text.to_string())],
        }
    }

    /// The players highlighted in this message.
    pub fn mentions(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            ChatSegment::Mention(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The message as unstyled text, items in brackets.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                ChatSegment::Text(text) | ChatSegment::Mention(text) => out.push_str(text),
                ChatSegment::Item(item) => {
                    out.push('[');
                    out.push_str(item);
                    out.push(']');
                }
            }
        }
        out
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ChatSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(ChatSegment::Text(text.to_string()));
        }
    }
}

/// Augments `raw` sent by `sender` and pings every mentioned player.
///
/// Never fails: if anything goes wrong the message is passed through as plain text.
pub fn process_chat(host: &dyn Host, sender: ActorId, raw: &str) -> ChatMessage {
    match augment(host, sender, raw) {
        Ok(message) => message,
        Err(e) => {
            log::error!("Error processing chat message from {sender}: {e}");
            ChatMessage::plain(raw)
        }
    }
}

#[derive(Debug, Error)]
enum ChatError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

fn augment(host: &dyn Host, sender: ActorId, raw: &str) -> Result<ChatMessage, ChatError> {
    let lowered = raw.to_lowercase();

    // Lowercased name -> (player, spelling). The sender is highlighted but not pinged.
    let mut names: FxHashMap<String, (ActorId, String)> = FxHashMap::default();
    for player in host.online_players() {
        let Some(name) = host.player_name(player) else {
            continue;
        };
        let key = name.to_lowercase();
        if !name.is_empty() && lowered.contains(&key) {
            names.insert(key, (player, name));
        }
    }

    let pattern = build_pattern(&names)?;
    let mut message = ChatMessage::default();
    let mut last = 0;
    for captures in pattern.captures_iter(raw) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        message.push_text(&raw[last..whole.start()]);
        last = whole.end();

        if let Some(slot) = captures.get(1) {
            let item = slot
                .as_str()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .and_then(|n| host.hotbar_item(sender, n - 1));
            match item {
                Some(item) => {
                    log::debug!("Replaced {} with item {item}", whole.as_str());
                    message.segments.push(ChatSegment::Item(item));
                }
                None => message.push_text(whole.as_str()),
            }
        } else {
            let spelling = names
                .get(&whole.as_str().to_lowercase())
                .map_or_else(|| whole.as_str().to_string(), |(_, name)| name.clone());
            message.segments.push(ChatSegment::Mention(spelling));
        }
    }
    message.push_text(&raw[last..]);

    for (player, name) in names.values() {
        if *player == sender {
            continue;
        }
        log::debug!("{sender} mentioned {name}");
        host.notify_mention(*player, keys::CHAT_MENTION.message([sender.into()]))?;
    }
    Ok(message)
}

/// `&(\d)` plus an alternation of every mentioned name, longest first.
fn build_pattern(names: &FxHashMap<String, (ActorId, String)>) -> Result<Regex, regex::Error> {
    let mut escaped: Vec<&String> = names.keys().collect();
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let mut pattern = String::from(r"&(\d)");
    for name in escaped {
        pattern.push('|');
        pattern.push_str(&regex::escape(name));
    }
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn mentions_are_highlighted_and_pinged() {
        let host = MockHost::new();
        let alice = host.add_player("Alice");
        let bob = host.add_player("Bob");
        let carol = host.add_player("Carol");

        let message = process_chat(&host, alice, "hey bob and BOB, where is alice?");
        assert_eq!(
            message.segments,
            [
                ChatSegment::Text("hey ".to_string()),
                ChatSegment::Mention("Bob".to_string()),
                ChatSegment::Text(" and ".to_string()),
                ChatSegment::Mention("Bob".to_string()),
                ChatSegment::Text(", where is ".to_string()),
                ChatSegment::Mention("Alice".to_string()),
                ChatSegment::Text("?".to_string()),
            ]
        );
        assert_eq!(host.mention_keys_for(bob), [keys::CHAT_MENTION.key]);
        assert!(host.mention_keys_for(alice).is_empty());
        assert!(host.mention_keys_for(carol).is_empty());
    }

    #[test]
    fn mention_title_names_the_sender() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");

        process_chat(&host, alice, "hi bob");
        assert_eq!(
            *host.mentions.borrow(),
            [(bob, keys::CHAT_MENTION.message([alice.into()]))]
        );
    }

    #[test]
    fn offline_players_are_not_mentioned() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        let bob = host.add_player("bob");
        host.set_online(bob, false);

        let message = process_chat(&host, alice, "bob?");
        assert_eq!(message, ChatMessage::plain("bob?"));
        assert!(host.mentions.borrow().is_empty());
    }

    #[test]
    fn item_links_use_hotbar_slots() {
        let host = MockHost::new();
        let alice = host.add_player("alice");
        host.set_hotbar(alice, 0, "Diamond Sword");

        let message = process_chat(&host, alice, "look &1 &2 &0");
        assert_eq!(
            message.segments,
            [
                ChatSegment::Text("look ".to_string()),
                ChatSegment::Item("Diamond Sword".to_string()),
                ChatSegment::Text(" &2 &0".to_string()),
            ]
        );
        assert_eq!(message.to_plain_string(), "look [Diamond Sword] &2 &0");
    }

    #[test]
    fn longer_names_win_over_prefixes() {
        let host = MockHost::new();
        let sender = host.add_player("sender");
        host.add_player("Al");
        host.add_player("Alex");

        let message = process_chat(&host, sender, "alex");
        assert_eq!(message.mentions().collect::<Vec<_>>(), ["Alex"]);
    }
}
