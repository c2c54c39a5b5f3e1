//! Console line parsing for the sandbox.
//!
//! Two layers: [`ConsoleCommand`] drives the simulated server (players
//! joining, dying, moving), [`PlayerCommand`] is what a player would type
//! in chat after a `/`.

use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;
use tpatools_utils::{Identifier, identifier::IdentifierError};

/// A line that could not be understood.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
    #[error("`{0}` is not true or false")]
    InvalidBool(String),
    #[error(transparent)]
    InvalidWorld(#[from] IdentifierError),
}

/// Commands typed into the sandbox console.
#[derive(Debug, PartialEq)]
pub enum ConsoleCommand {
    Join(String),
    Leave(String),
    Op(String),
    Kill(String),
    Respawn(String),
    Move {
        player: String,
        world: Identifier,
        x: f64,
        y: f64,
        z: f64,
    },
    /// Puts an item into hotbar slot 1..=9.
    Give {
        player: String,
        slot: usize,
        item: String,
    },
    /// Runs a player command line as `player`.
    As { player: String, command: PlayerCommand },
    /// Chat message from `player`.
    Say { player: String, text: String },
    Players,
    Save,
    Help,
    Stop,
}

/// Everything a player can type.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Tpa(String),
    TpaHere(String),
    TpAccept(Option<String>),
    TpaDeny(Option<String>),
    TpaCancel(Option<String>),
    TpaToggle,
    TpaLock(String),
    TpaUnlock(String),
    Back,
    Grave,
    Home(HomeCommand),
    Admin(AdminCommand),
}

/// `/home` subcommands.
#[derive(Debug, PartialEq, Eq)]
pub enum HomeCommand {
    /// `/home <name>` or `/home <owner:home>`.
    Teleport(String),
    Set(String),
    Remove(String),
    List,
    Rename { old: String, new: String },
    Share { home: String, player: String },
    Unshare { home: String, player: Option<String> },
    Public(String),
    Private(String),
    OtherHome(String),
    OtherList,
    ShareList(String),
}

/// `/tpatools` subcommands.
#[derive(Debug, PartialEq, Eq)]
pub enum AdminCommand {
    SetLanguage(String),
    SetMaxHome(i64),
    NeedOp { group: String, requires_op: bool },
    CooldownSeconds(u32),
    WaitSeconds(u32),
    Debug(Option<bool>),
}

pub const HELP: &str = "\
join <name> | leave <name> | op <name> | kill <name> | respawn <name>
move <name> <world> <x> <y> <z> | give <name> <slot> <item>
as <name> /<command> | say <name> <text> | players | save | stop";

struct Args<'a>(SplitWhitespace<'a>);

impl<'a> Args<'a> {
    fn new(line: &'a str) -> Self {
        Self(line.split_whitespace())
    }

    fn optional(&mut self) -> Option<String> {
        self.0.next().map(str::to_string)
    }

    fn required(&mut self, name: &'static str) -> Result<String, ParseError> {
        self.optional().ok_or(ParseError::MissingArgument(name))
    }

    fn number<T: FromStr>(&mut self, name: &'static str) -> Result<T, ParseError> {
        let raw = self.required(name)?;
        raw.parse().map_err(|_| ParseError::InvalidNumber(raw))
    }

    /// Everything left, joined by single spaces.
    fn rest(&mut self, name: &'static str) -> Result<String, ParseError> {
        let rest = self.0.by_ref().collect::<Vec<_>>().join(" ");
        if rest.is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(rest)
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidBool(raw.to_string())),
    }
}

impl FromStr for ConsoleCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = Args::new(line);
        let Some(verb) = args.optional() else {
            return Err(ParseError::Empty);
        };
        Ok(match verb.as_str() {
            "join" => Self::Join(args.required("name")?),
            "leave" => Self::Leave(args.required("name")?),
            "op" => Self::Op(args.required("name")?),
            "kill" => Self::Kill(args.required("name")?),
            "respawn" => Self::Respawn(args.required("name")?),
            "move" => Self::Move {
                player: args.required("name")?,
                world: args.required("world")?.parse()?,
                x: args.number("x")?,
                y: args.number("y")?,
                z: args.number("z")?,
            },
            "give" => Self::Give {
                player: args.required("name")?,
                slot: args.number("slot")?,
                item: args.rest("item")?,
            },
            "as" => Self::As {
                player: args.required("name")?,
                command: args.rest("command")?.parse()?,
            },
            "say" => Self::Say {
                player: args.required("name")?,
                text: args.rest("text")?,
            },
            "players" | "list" => Self::Players,
            "save" => Self::Save,
            "help" => Self::Help,
            "stop" => Self::Stop,
            _ => return Err(ParseError::UnknownCommand(verb)),
        })
    }
}

impl FromStr for PlayerCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = Args::new(line.trim_start().trim_start_matches('/'));
        let Some(verb) = args.optional() else {
            return Err(ParseError::Empty);
        };
        Ok(match verb.as_str() {
            "tpa" => Self::Tpa(args.required("player")?),
            "tpahere" => Self::TpaHere(args.required("player")?),
            "tpaccept" => Self::TpAccept(args.optional()),
            "tpadeny" => Self::TpaDeny(args.optional()),
            "tpacancel" => Self::TpaCancel(args.optional()),
            "tpatoggle" => Self::TpaToggle,
            "tpalock" => Self::TpaLock(args.required("player")?),
            "tpaunlock" => Self::TpaUnlock(args.required("player")?),
            "back" => Self::Back,
            "grave" => Self::Grave,
            "home" => Self::Home(parse_home(&mut args)?),
            "tpatools" => Self::Admin(parse_admin(&mut args)?),
            _ => return Err(ParseError::UnknownCommand(verb)),
        })
    }
}

fn parse_home(args: &mut Args<'_>) -> Result<HomeCommand, ParseError> {
    let sub = args.required("name")?;
    Ok(match sub.as_str() {
        "set" => HomeCommand::Set(args.required("name")?),
        "remove" => HomeCommand::Remove(args.required("name")?),
        "list" => HomeCommand::List,
        "rename" => HomeCommand::Rename {
            old: args.required("old")?,
            new: args.required("new")?,
        },
        "share" => HomeCommand::Share {
            home: args.required("name")?,
            player: args.required("player")?,
        },
        "unshare" => HomeCommand::Unshare {
            home: args.required("name")?,
            player: args.optional(),
        },
        "public" => HomeCommand::Public(args.required("name")?),
        "private" => HomeCommand::Private(args.required("name")?),
        "otherhome" => HomeCommand::OtherHome(args.required("owner:home")?),
        "otherlist" => HomeCommand::OtherList,
        "sharelist" => HomeCommand::ShareList(args.required("in|out")?),
        _ => HomeCommand::Teleport(sub),
    })
}

fn parse_admin(args: &mut Args<'_>) -> Result<AdminCommand, ParseError> {
    let sub = args.required("setting")?;
    Ok(match sub.as_str() {
        "setlanguage" => AdminCommand::SetLanguage(args.required("language")?),
        "setmaxhome" => AdminCommand::SetMaxHome(args.number("count")?),
        "needop" => AdminCommand::NeedOp {
            group: args.required("command")?,
            requires_op: parse_bool(&args.required("value")?)?,
        },
        "tpacdtime" => AdminCommand::CooldownSeconds(args.number("seconds")?),
        "tpawaittime" => AdminCommand::WaitSeconds(args.number("seconds")?),
        "debug" => AdminCommand::Debug(args.optional().map(|v| parse_bool(&v)).transpose()?),
        _ => return Err(ParseError::UnknownCommand(format!("tpatools {sub}"))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_lines() {
        assert_eq!(
            "move alice the_nether 1 2.5 -3".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Move {
                player: "alice".to_string(),
                world: Identifier::THE_NETHER,
                x: 1.0,
                y: 2.5,
                z: -3.0,
            })
        );
        assert_eq!(
            "give bob 1 Diamond Sword".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Give {
                player: "bob".to_string(),
                slot: 1,
                item: "Diamond Sword".to_string(),
            })
        );
        assert_eq!(
            "as alice /tpa bob".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::As {
                player: "alice".to_string(),
                command: PlayerCommand::Tpa("bob".to_string()),
            })
        );
        assert_eq!("".parse::<ConsoleCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "kill".parse::<ConsoleCommand>(),
            Err(ParseError::MissingArgument("name"))
        );
    }

    #[test]
    fn home_subcommands_and_teleport_fallback() {
        assert_eq!(
            "/home base".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Home(HomeCommand::Teleport("base".to_string())))
        );
        assert_eq!(
            "/home unshare base".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Home(HomeCommand::Unshare {
                home: "base".to_string(),
                player: None,
            }))
        );
        assert_eq!(
            "/home rename a".parse::<PlayerCommand>(),
            Err(ParseError::MissingArgument("new"))
        );
    }

    #[test]
    fn admin_subcommands() {
        assert_eq!(
            "/tpatools needop home true".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Admin(AdminCommand::NeedOp {
                group: "home".to_string(),
                requires_op: true,
            }))
        );
        assert_eq!(
            "/tpatools debug".parse::<PlayerCommand>(),
            Ok(PlayerCommand::Admin(AdminCommand::Debug(None)))
        );
        assert_eq!(
            "/tpatools tpacdtime soon".parse::<PlayerCommand>(),
            Err(ParseError::InvalidNumber("soon".to_string()))
        );
        assert_eq!(
            "/tpatools debug maybe".parse::<PlayerCommand>(),
            Err(ParseError::InvalidBool("maybe".to_string()))
        );
    }
}
