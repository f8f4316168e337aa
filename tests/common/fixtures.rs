//! Test fixtures - reusable content constants for tests.

/// One archive rooted at `assets/`, no server profile
pub const BUILD_ONLY_CONFIG: &str = r#"
["data.pk3"]
root = "assets"
files = ["a.cfg", "maps/b.txt"]
"#;

/// One archive plus a profile with an extra file
pub const DEPLOY_CONFIG: &str = r#"
["data.pk3"]
root = "assets"
files = ["a.cfg", "maps/b.txt"]

["any-profile"]
host = "game.example.net"
game = "gpp"
fs_game = "slacker"
extra_files = ["server.cfg"]
"#;

/// Two archives with independent sources
pub const TWO_ARCHIVES_CONFIG: &str = r#"
["data.pk3"]
root = "assets"
files = ["a.cfg", "maps/b.txt"]

["sounds.pk3"]
root = "sounds"
files = ["hit.wav"]
"#;

/// Archive whose name uses a build variable in its root
pub const TEMPLATED_CONFIG: &str = r#"
["vms.pk3"]
root = "${B}/vm"
files = ["game.qvm"]
src = ["src/game"]
"#;

/// Typo'd key to exercise unknown-key warnings
pub const TYPO_CONFIG: &str = r#"
["data.pk3"]
root = "assets"
files = ["a.cfg", "maps/b.txt"]
rooot = "assets"
"#;

pub const ASSET_A: &str = "seta sv_hostname \"test\"\n";
pub const ASSET_B: &str = "map arena\n";
pub const SERVER_CFG: &str = "set g_motd \"welcome\"\n";
