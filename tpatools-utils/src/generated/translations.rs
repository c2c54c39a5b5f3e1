use crate::translations::TranslationKey;
#[doc = "`command.tpatool.back.invalid_dimension`: \"Invalid dimension for previous position!\""]
pub const BACK_INVALID_DIMENSION: TranslationKey = TranslationKey::new(
    "command.tpatool.back.invalid_dimension",
    "Invalid dimension for previous position!",
);
#[doc = "`command.tpatool.back.no_position`: \"No previous position recorded!\""]
pub const BACK_NO_POSITION: TranslationKey = TranslationKey::new(
    "command.tpatool.back.no_position",
    "No previous position recorded!",
);
#[doc = "`command.tpatool.back.success`: \"Teleported to previous position.\""]
pub const BACK_SUCCESS: TranslationKey = TranslationKey::new(
    "command.tpatool.back.success",
    "Teleported to previous position.",
);
#[doc = "`command.tpatool.chat.mention`: \"%s mentioned you\""]
pub const CHAT_MENTION: TranslationKey =
    TranslationKey::new("command.tpatool.chat.mention", "%s mentioned you");
#[doc = "`command.tpatool.debug.disabled`: \"Debug mode disabled.\""]
pub const DEBUG_DISABLED: TranslationKey =
    TranslationKey::new("command.tpatool.debug.disabled", "Debug mode disabled.");
#[doc = "`command.tpatool.debug.enabled`: \"Debug mode enabled.\""]
pub const DEBUG_ENABLED: TranslationKey =
    TranslationKey::new("command.tpatool.debug.enabled", "Debug mode enabled.");
#[doc = "`command.tpatool.debug.status`: \"Debug mode is currently %s.\""]
pub const DEBUG_STATUS: TranslationKey = TranslationKey::new(
    "command.tpatool.debug.status",
    "Debug mode is currently %s.",
);
#[doc = "`command.tpatool.error`: \"An unexpected error occurred while executing the command.\""]
pub const ERROR: TranslationKey = TranslationKey::new(
    "command.tpatool.error",
    "An unexpected error occurred while executing the command.",
);
#[doc = "`command.tpatool.grave.invalid_dimension`: \"Invalid dimension for death position!\""]
pub const GRAVE_INVALID_DIMENSION: TranslationKey = TranslationKey::new(
    "command.tpatool.grave.invalid_dimension",
    "Invalid dimension for death position!",
);
#[doc = "`command.tpatool.grave.no_position`: \"No previous death position recorded!\""]
pub const GRAVE_NO_POSITION: TranslationKey = TranslationKey::new(
    "command.tpatool.grave.no_position",
    "No previous death position recorded!",
);
#[doc = "`command.tpatool.grave.success`: \"Teleported to last death position.\""]
pub const GRAVE_SUCCESS: TranslationKey = TranslationKey::new(
    "command.tpatool.grave.success",
    "Teleported to last death position.",
);
#[doc = "`command.tpatool.home.already_public`: \"Home %s is already public!\""]
pub const HOME_ALREADY_PUBLIC: TranslationKey = TranslationKey::new(
    "command.tpatool.home.already_public",
    "Home %s is already public!",
);
#[doc = "`command.tpatool.home.already_shared`: \"Home %s is already shared with %s!\""]
pub const HOME_ALREADY_SHARED: TranslationKey = TranslationKey::new(
    "command.tpatool.home.already_shared",
    "Home %s is already shared with %s!",
);
#[doc = "`command.tpatool.home.invalid_dimension`: \"Invalid dimension for home %s!\""]
pub const HOME_INVALID_DIMENSION: TranslationKey = TranslationKey::new(
    "command.tpatool.home.invalid_dimension",
    "Invalid dimension for home %s!",
);
#[doc = "`command.tpatool.home.invalid_format`: \"Invalid format! Use playername:homename.\""]
pub const HOME_INVALID_FORMAT: TranslationKey = TranslationKey::new(
    "command.tpatool.home.invalid_format",
    "Invalid format! Use playername:homename.",
);
#[doc = "`command.tpatool.home.limit_exceeded`: \"You have reached the maximum number of homes (%s)!\""]
pub const HOME_LIMIT_EXCEEDED: TranslationKey = TranslationKey::new(
    "command.tpatool.home.limit_exceeded",
    "You have reached the maximum number of homes (%s)!",
);
#[doc = "`command.tpatool.home.list`: \"Your homes:\""]
pub const HOME_LIST: TranslationKey =
    TranslationKey::new("command.tpatool.home.list", "Your homes:");
#[doc = "`command.tpatool.home.list_empty`: \"You have no homes set.\""]
pub const HOME_LIST_EMPTY: TranslationKey =
    TranslationKey::new("command.tpatool.home.list_empty", "You have no homes set.");
#[doc = "`command.tpatool.home.list_entry`: \"- %s: %s (x=%s, y=%s, z=%s)\""]
pub const HOME_LIST_ENTRY: TranslationKey = TranslationKey::new(
    "command.tpatool.home.list_entry",
    "- %s: %s (x=%s, y=%s, z=%s)",
);
#[doc = "`command.tpatool.home.name_exists`: \"A home named %s already exists!\""]
pub const HOME_NAME_EXISTS: TranslationKey = TranslationKey::new(
    "command.tpatool.home.name_exists",
    "A home named %s already exists!",
);
#[doc = "`command.tpatool.home.not_found`: \"Home %s not found!\""]
pub const HOME_NOT_FOUND: TranslationKey =
    TranslationKey::new("command.tpatool.home.not_found", "Home %s not found!");
#[doc = "`command.tpatool.home.not_public`: \"Home %s is not public!\""]
pub const HOME_NOT_PUBLIC: TranslationKey =
    TranslationKey::new("command.tpatool.home.not_public", "Home %s is not public!");
#[doc = "`command.tpatool.home.other_not_found`: \"Home %s not found or not accessible!\""]
pub const HOME_OTHER_NOT_FOUND: TranslationKey = TranslationKey::new(
    "command.tpatool.home.other_not_found",
    "Home %s not found or not accessible!",
);
#[doc = "`command.tpatool.home.other_teleported`: \"Teleported to %s's home %s.\""]
pub const HOME_OTHER_TELEPORTED: TranslationKey = TranslationKey::new(
    "command.tpatool.home.other_teleported",
    "Teleported to %s's home %s.",
);
#[doc = "`command.tpatool.home.otherlist`: \"Public homes:\""]
pub const HOME_OTHERLIST: TranslationKey =
    TranslationKey::new("command.tpatool.home.otherlist", "Public homes:");
#[doc = "`command.tpatool.home.otherlist_empty`: \"No public or shared homes available.\""]
pub const HOME_OTHERLIST_EMPTY: TranslationKey = TranslationKey::new(
    "command.tpatool.home.otherlist_empty",
    "No public or shared homes available.",
);
#[doc = "`command.tpatool.home.otherlist_entry`: \"- %s (%s): %s (x=%s, y=%s, z=%s)\""]
pub const HOME_OTHERLIST_ENTRY: TranslationKey = TranslationKey::new(
    "command.tpatool.home.otherlist_entry",
    "- %s (%s): %s (x=%s, y=%s, z=%s)",
);
#[doc = "`command.tpatool.home.privatized`: \"Home %s is no longer public.\""]
pub const HOME_PRIVATIZED: TranslationKey = TranslationKey::new(
    "command.tpatool.home.privatized",
    "Home %s is no longer public.",
);
#[doc = "`command.tpatool.home.publicized`: \"Home %s is now public.\""]
pub const HOME_PUBLICIZED: TranslationKey =
    TranslationKey::new("command.tpatool.home.publicized", "Home %s is now public.");
#[doc = "`command.tpatool.home.removed`: \"Home %s removed.\""]
pub const HOME_REMOVED: TranslationKey =
    TranslationKey::new("command.tpatool.home.removed", "Home %s removed.");
#[doc = "`command.tpatool.home.renamed`: \"Home %s renamed to %s.\""]
pub const HOME_RENAMED: TranslationKey =
    TranslationKey::new("command.tpatool.home.renamed", "Home %s renamed to %s.");
#[doc = "`command.tpatool.home.set`: \"Home %s set at your current position.\""]
pub const HOME_SET: TranslationKey = TranslationKey::new(
    "command.tpatool.home.set",
    "Home %s set at your current position.",
);
#[doc = "`command.tpatool.home.shared`: \"Home %s shared with %s.\""]
pub const HOME_SHARED: TranslationKey =
    TranslationKey::new("command.tpatool.home.shared", "Home %s shared with %s.");
#[doc = "`command.tpatool.home.shared_received`: \"%s shared their home %s with you.\""]
pub const HOME_SHARED_RECEIVED: TranslationKey = TranslationKey::new(
    "command.tpatool.home.shared_received",
    "%s shared their home %s with you.",
);
#[doc = "`command.tpatool.home.teleported`: \"Teleported to home %s.\""]
pub const HOME_TELEPORTED: TranslationKey =
    TranslationKey::new("command.tpatool.home.teleported", "Teleported to home %s.");
#[doc = "`command.tpatool.needop.invalid_command`: \"Invalid command. Use 'tpa', 'home', 'grave', or 'back'.\""]
pub const NEEDOP_INVALID_COMMAND: TranslationKey = TranslationKey::new(
    "command.tpatool.needop.invalid_command",
    "Invalid command. Use 'tpa', 'home', 'grave', or 'back'.",
);
#[doc = "`command.tpatool.needop.success_disabled`: \"%s commands now do not require OP permission.\""]
pub const NEEDOP_SUCCESS_DISABLED: TranslationKey = TranslationKey::new(
    "command.tpatool.needop.success_disabled",
    "%s commands now do not require OP permission.",
);
#[doc = "`command.tpatool.needop.success_enabled`: \"%s commands now require OP permission.\""]
pub const NEEDOP_SUCCESS_ENABLED: TranslationKey = TranslationKey::new(
    "command.tpatool.needop.success_enabled",
    "%s commands now require OP permission.",
);
#[doc = "`command.tpatool.no_permission`: \"You do not have permission to use this command.\""]
pub const NO_PERMISSION: TranslationKey = TranslationKey::new(
    "command.tpatool.no_permission",
    "You do not have permission to use this command.",
);
#[doc = "`command.tpatool.setlanguage.invalid`: \"Invalid language. Available: en_us, zh_cn\""]
pub const SETLANGUAGE_INVALID: TranslationKey = TranslationKey::new(
    "command.tpatool.setlanguage.invalid",
    "Invalid language. Available: en_us, zh_cn",
);
#[doc = "`command.tpatool.setlanguage.success`: \"Language set to %s.\""]
pub const SETLANGUAGE_SUCCESS: TranslationKey =
    TranslationKey::new("command.tpatool.setlanguage.success", "Language set to %s.");
#[doc = "`command.tpatool.setmaxhome.invalid`: \"The maximum number of homes must be at least 1.\""]
pub const SETMAXHOME_INVALID: TranslationKey = TranslationKey::new(
    "command.tpatool.setmaxhome.invalid",
    "The maximum number of homes must be at least 1.",
);
#[doc = "`command.tpatool.setmaxhome.success`: \"Maximum homes set to %s.\""]
pub const SETMAXHOME_SUCCESS: TranslationKey = TranslationKey::new(
    "command.tpatool.setmaxhome.success",
    "Maximum homes set to %s.",
);
#[doc = "`command.tpatool.sharelist.in`: \"Homes shared with you:\""]
pub const SHARELIST_IN: TranslationKey =
    TranslationKey::new("command.tpatool.sharelist.in", "Homes shared with you:");
#[doc = "`command.tpatool.sharelist.in_empty`: \"No homes are shared with you.\""]
pub const SHARELIST_IN_EMPTY: TranslationKey = TranslationKey::new(
    "command.tpatool.sharelist.in_empty",
    "No homes are shared with you.",
);
#[doc = "`command.tpatool.sharelist.in_entry`: \"- %s (%s): %s (x=%s, y=%s, z=%s)\""]
pub const SHARELIST_IN_ENTRY: TranslationKey = TranslationKey::new(
    "command.tpatool.sharelist.in_entry",
    "- %s (%s): %s (x=%s, y=%s, z=%s)",
);
#[doc = "`command.tpatool.sharelist.invalid_type`: \"Invalid type! Use 'in' or 'out'.\""]
pub const SHARELIST_INVALID_TYPE: TranslationKey = TranslationKey::new(
    "command.tpatool.sharelist.invalid_type",
    "Invalid type! Use 'in' or 'out'.",
);
#[doc = "`command.tpatool.sharelist.out`: \"Homes you have shared:\""]
pub const SHARELIST_OUT: TranslationKey =
    TranslationKey::new("command.tpatool.sharelist.out", "Homes you have shared:");
#[doc = "`command.tpatool.sharelist.out_empty`: \"You have not shared any homes.\""]
pub const SHARELIST_OUT_EMPTY: TranslationKey = TranslationKey::new(
    "command.tpatool.sharelist.out_empty",
    "You have not shared any homes.",
);
#[doc = "`command.tpatool.sharelist.out_entry`: \"- %s: Shared with %s (%s, x=%s, y=%s, z=%s)\""]
pub const SHARELIST_OUT_ENTRY: TranslationKey = TranslationKey::new(
    "command.tpatool.sharelist.out_entry",
    "- %s: Shared with %s (%s, x=%s, y=%s, z=%s)",
);
#[doc = "`command.tpatool.tpa.accepted`: \"Accepted teleport request from %s.\""]
pub const TPA_ACCEPTED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.accepted",
    "Accepted teleport request from %s.",
);
#[doc = "`command.tpatool.tpa.accepted_by`: \"Your teleport request was accepted by %s!\""]
pub const TPA_ACCEPTED_BY: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.accepted_by",
    "Your teleport request was accepted by %s!",
);
#[doc = "`command.tpatool.tpa.already_locked`: \"%s is already locked.\""]
pub const TPA_ALREADY_LOCKED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.already_locked",
    "%s is already locked.",
);
#[doc = "`command.tpatool.tpa.cancelled`: \"%s cancelled their teleport request.\""]
pub const TPA_CANCELLED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.cancelled",
    "%s cancelled their teleport request.",
);
#[doc = "`command.tpatool.tpa.cancelled_self`: \"Cancelled teleport request to %s.\""]
pub const TPA_CANCELLED_SELF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.cancelled_self",
    "Cancelled teleport request to %s.",
);
#[doc = "`command.tpatool.tpa.cooldown`: \"Please wait for the cooldown (%d seconds)!\""]
pub const TPA_COOLDOWN: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.cooldown",
    "Please wait for the cooldown (%d seconds)!",
);
#[doc = "`command.tpatool.tpa.denied`: \"Denied teleport request from %s.\""]
pub const TPA_DENIED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.denied",
    "Denied teleport request from %s.",
);
#[doc = "`command.tpatool.tpa.denied_by`: \"%s denied your teleport request.\""]
pub const TPA_DENIED_BY: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.denied_by",
    "%s denied your teleport request.",
);
#[doc = "`command.tpatool.tpa.lock_self`: \"You cannot lock or unlock yourself!\""]
pub const TPA_LOCK_SELF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.lock_self",
    "You cannot lock or unlock yourself!",
);
#[doc = "`command.tpatool.tpa.locked`: \"%s has locked TPA requests from you.\""]
pub const TPA_LOCKED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.locked",
    "%s has locked TPA requests from you.",
);
#[doc = "`command.tpatool.tpa.locked_player`: \"Locked TPA requests from %s.\""]
pub const TPA_LOCKED_PLAYER: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.locked_player",
    "Locked TPA requests from %s.",
);
#[doc = "`command.tpatool.tpa.no_request`: \"You have no pending teleport requests.\""]
pub const TPA_NO_REQUEST: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.no_request",
    "You have no pending teleport requests.",
);
#[doc = "`command.tpatool.tpa.no_request_from`: \"No teleport request from %s.\""]
pub const TPA_NO_REQUEST_FROM: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.no_request_from",
    "No teleport request from %s.",
);
#[doc = "`command.tpatool.tpa.no_requests_to_cancel`: \"No teleport requests to cancel.\""]
pub const TPA_NO_REQUESTS_TO_CANCEL: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.no_requests_to_cancel",
    "No teleport requests to cancel.",
);
#[doc = "`command.tpatool.tpa.not_locked`: \"%s is not locked.\""]
pub const TPA_NOT_LOCKED: TranslationKey =
    TranslationKey::new("command.tpatool.tpa.not_locked", "%s is not locked.");
#[doc = "`command.tpatool.tpa.received`: \"%s wants to teleport to you! Use /tpaccept or /tpadeny.\""]
pub const TPA_RECEIVED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.received",
    "%s wants to teleport to you! Use /tpaccept or /tpadeny.",
);
#[doc = "`command.tpatool.tpa.self`: \"You cannot teleport to yourself!\""]
pub const TPA_SELF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.self",
    "You cannot teleport to yourself!",
);
#[doc = "`command.tpatool.tpa.sender_dead`: \"The requesting player is dead!\""]
pub const TPA_SENDER_DEAD: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.sender_dead",
    "The requesting player is dead!",
);
#[doc = "`command.tpatool.tpa.sent`: \"Teleport request sent to %s.\""]
pub const TPA_SENT: TranslationKey =
    TranslationKey::new("command.tpatool.tpa.sent", "Teleport request sent to %s.");
#[doc = "`command.tpatool.tpa.target_dead`: \"The target player is dead!\""]
pub const TPA_TARGET_DEAD: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.target_dead",
    "The target player is dead!",
);
#[doc = "`command.tpatool.tpa.timeout`: \"Teleport request from %s has timed out.\""]
pub const TPA_TIMEOUT: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.timeout",
    "Teleport request from %s has timed out.",
);
#[doc = "`command.tpatool.tpa.timeout_self`: \"Your teleport request to %s has timed out.\""]
pub const TPA_TIMEOUT_SELF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.timeout_self",
    "Your teleport request to %s has timed out.",
);
#[doc = "`command.tpatool.tpa.toggle_off`: \"TPA requests are now enabled.\""]
pub const TPA_TOGGLE_OFF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.toggle_off",
    "TPA requests are now enabled.",
);
#[doc = "`command.tpatool.tpa.toggle_on`: \"TPA requests are now disabled.\""]
pub const TPA_TOGGLE_ON: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.toggle_on",
    "TPA requests are now disabled.",
);
#[doc = "`command.tpatool.tpa.toggled_off`: \"%s has disabled TPA requests.\""]
pub const TPA_TOGGLED_OFF: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.toggled_off",
    "%s has disabled TPA requests.",
);
#[doc = "`command.tpatool.tpa.unlocked_player`: \"Unlocked TPA requests from %s.\""]
pub const TPA_UNLOCKED_PLAYER: TranslationKey = TranslationKey::new(
    "command.tpatool.tpa.unlocked_player",
    "Unlocked TPA requests from %s.",
);
#[doc = "`command.tpatool.tpacdtime.success`: \"TPA cooldown time set to %d seconds.\""]
pub const TPACDTIME_SUCCESS: TranslationKey = TranslationKey::new(
    "command.tpatool.tpacdtime.success",
    "TPA cooldown time set to %d seconds.",
);
#[doc = "`command.tpatool.tpahere.accepted`: \"Accepted teleport request to %s.\""]
pub const TPAHERE_ACCEPTED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpahere.accepted",
    "Accepted teleport request to %s.",
);
#[doc = "`command.tpatool.tpahere.denied`: \"Denied teleport request to %s.\""]
pub const TPAHERE_DENIED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpahere.denied",
    "Denied teleport request to %s.",
);
#[doc = "`command.tpatool.tpahere.received`: \"%s wants you to teleport to them! Use /tpaccept or /tpadeny.\""]
pub const TPAHERE_RECEIVED: TranslationKey = TranslationKey::new(
    "command.tpatool.tpahere.received",
    "%s wants you to teleport to them! Use /tpaccept or /tpadeny.",
);
#[doc = "`command.tpatool.tpahere.timeout`: \"Teleport request from %s has timed out.\""]
pub const TPAHERE_TIMEOUT: TranslationKey = TranslationKey::new(
    "command.tpatool.tpahere.timeout",
    "Teleport request from %s has timed out.",
);
#[doc = "`command.tpatool.tpawaittime.success`: \"TPA wait time set to %d seconds.\""]
pub const TPAWAITTIME_SUCCESS: TranslationKey = TranslationKey::new(
    "command.tpatool.tpawaittime.success",
    "TPA wait time set to %d seconds.",
);
#[doc = "`command.tpatool.unshare.all`: \"Removed sharing of home %s for all players.\""]
pub const UNSHARE_ALL: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.all",
    "Removed sharing of home %s for all players.",
);
#[doc = "`command.tpatool.unshare.no_players`: \"Home %s is not shared with anyone!\""]
pub const UNSHARE_NO_PLAYERS: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.no_players",
    "Home %s is not shared with anyone!",
);
#[doc = "`command.tpatool.unshare.not_shared`: \"Home %s is not shared with %s!\""]
pub const UNSHARE_NOT_SHARED: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.not_shared",
    "Home %s is not shared with %s!",
);
#[doc = "`command.tpatool.unshare.notify`: \"%s has removed sharing of their home %s with you.\""]
pub const UNSHARE_NOTIFY: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.notify",
    "%s has removed sharing of their home %s with you.",
);
#[doc = "`command.tpatool.unshare.player`: \"Removed sharing of home %s with %s.\""]
pub const UNSHARE_PLAYER: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.player",
    "Removed sharing of home %s with %s.",
);
#[doc = "`command.tpatool.unshare.player_not_found`: \"Player %s not found!\""]
pub const UNSHARE_PLAYER_NOT_FOUND: TranslationKey = TranslationKey::new(
    "command.tpatool.unshare.player_not_found",
    "Player %s not found!",
);
#[doc = r" Every known key, in key order."]
pub const ALL: [TranslationKey; 88] = [
    BACK_INVALID_DIMENSION,
    BACK_NO_POSITION,
    BACK_SUCCESS,
    CHAT_MENTION,
    DEBUG_DISABLED,
    DEBUG_ENABLED,
    DEBUG_STATUS,
    ERROR,
    GRAVE_INVALID_DIMENSION,
    GRAVE_NO_POSITION,
    GRAVE_SUCCESS,
    HOME_ALREADY_PUBLIC,
    HOME_ALREADY_SHARED,
    HOME_INVALID_DIMENSION,
    HOME_INVALID_FORMAT,
    HOME_LIMIT_EXCEEDED,
    HOME_LIST,
    HOME_LIST_EMPTY,
    HOME_LIST_ENTRY,
    HOME_NAME_EXISTS,
    HOME_NOT_FOUND,
    HOME_NOT_PUBLIC,
    HOME_OTHER_NOT_FOUND,
    HOME_OTHER_TELEPORTED,
    HOME_OTHERLIST,
    HOME_OTHERLIST_EMPTY,
    HOME_OTHERLIST_ENTRY,
    HOME_PRIVATIZED,
    HOME_PUBLICIZED,
    HOME_REMOVED,
    HOME_RENAMED,
    HOME_SET,
    HOME_SHARED,
    HOME_SHARED_RECEIVED,
    HOME_TELEPORTED,
    NEEDOP_INVALID_COMMAND,
    NEEDOP_SUCCESS_DISABLED,
    NEEDOP_SUCCESS_ENABLED,
    NO_PERMISSION,
    SETLANGUAGE_INVALID,
    SETLANGUAGE_SUCCESS,
    SETMAXHOME_INVALID,
    SETMAXHOME_SUCCESS,
    SHARELIST_IN,
    SHARELIST_IN_EMPTY,
    SHARELIST_IN_ENTRY,
    SHARELIST_INVALID_TYPE,
    SHARELIST_OUT,
    SHARELIST_OUT_EMPTY,
    SHARELIST_OUT_ENTRY,
    TPA_ACCEPTED,
    TPA_ACCEPTED_BY,
    TPA_ALREADY_LOCKED,
    TPA_CANCELLED,
    TPA_CANCELLED_SELF,
    TPA_COOLDOWN,
    TPA_DENIED,
    TPA_DENIED_BY,
    TPA_LOCK_SELF,
    TPA_LOCKED,
    TPA_LOCKED_PLAYER,
    TPA_NO_REQUEST,
    TPA_NO_REQUEST_FROM,
    TPA_NO_REQUESTS_TO_CANCEL,
    TPA_NOT_LOCKED,
    TPA_RECEIVED,
    TPA_SELF,
    TPA_SENDER_DEAD,
    TPA_SENT,
    TPA_TARGET_DEAD,
    TPA_TIMEOUT,
    TPA_TIMEOUT_SELF,
    TPA_TOGGLE_OFF,
    TPA_TOGGLE_ON,
    TPA_TOGGLED_OFF,
    TPA_UNLOCKED_PLAYER,
    TPACDTIME_SUCCESS,
    TPAHERE_ACCEPTED,
    TPAHERE_DENIED,
    TPAHERE_RECEIVED,
    TPAHERE_TIMEOUT,
    TPAWAITTIME_SUCCESS,
    UNSHARE_ALL,
    UNSHARE_NO_PLAYERS,
    UNSHARE_NOT_SHARED,
    UNSHARE_NOTIFY,
    UNSHARE_PLAYER,
    UNSHARE_PLAYER_NOT_FOUND,
];
