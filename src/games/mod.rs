//! Game-mode extractors and the aggregation orchestrator.
//!
//! Every extractor is an independent pure function over the same raw
//! profile and static config; [`derive_stats`] fans the profile out to all
//! of them and mounts each result at its place in the derived document.

pub mod bedwars;
pub mod duels;
pub mod general;
pub mod modes;
pub mod skywars;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::StaticConfig;
use crate::models::{DerivedStats, Stats};
use crate::profile::RawProfile;
use crate::rank::get_rank;

/// Every supported game mode, in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    General,
    Bedwars,
    Skywars,
    Duels,
    Arcade,
    Bsg,
    BuildBattle,
    Cvc,
    MegaWalls,
    MurderMystery,
    Pit,
    Smash,
    SpeedUhc,
    Tnt,
    Uhc,
    Warlords,
    Wool,
    Arena,
    Paintball,
    Quakecraft,
    Tkr,
    VampireZ,
    Walls,
    CrazyWalls,
    SkyClash,
}

impl GameMode {
    pub const ALL: [GameMode; 25] = [
        GameMode::General,
        GameMode::Bedwars,
        GameMode::Skywars,
        GameMode::Duels,
        GameMode::Arcade,
        GameMode::Bsg,
        GameMode::BuildBattle,
        GameMode::Cvc,
        GameMode::MegaWalls,
        GameMode::MurderMystery,
        GameMode::Pit,
        GameMode::Smash,
        GameMode::SpeedUhc,
        GameMode::Tnt,
        GameMode::Uhc,
        GameMode::Warlords,
        GameMode::Wool,
        GameMode::Arena,
        GameMode::Paintball,
        GameMode::Quakecraft,
        GameMode::Tkr,
        GameMode::VampireZ,
        GameMode::Walls,
        GameMode::CrazyWalls,
        GameMode::SkyClash,
    ];

    /// Dotted mount point in the derived document.
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::General => "general",
            GameMode::Bedwars => "bedwars",
            GameMode::Skywars => "skywars",
            GameMode::Duels => "duels",
            GameMode::Arcade => "modes.arcade",
            GameMode::Bsg => "modes.bsg",
            GameMode::BuildBattle => "modes.build_battle",
            GameMode::Cvc => "modes.cvc",
            GameMode::MegaWalls => "modes.megawalls",
            GameMode::MurderMystery => "modes.murdermystery",
            GameMode::Pit => "modes.pit",
            GameMode::Smash => "modes.smash",
            GameMode::SpeedUhc => "modes.speeduhc",
            GameMode::Tnt => "modes.tnt",
            GameMode::Uhc => "modes.uhc",
            GameMode::Warlords => "modes.warlords",
            GameMode::Wool => "modes.wool",
            GameMode::Arena => "modes.classic.arena",
            GameMode::Paintball => "modes.classic.paintball",
            GameMode::Quakecraft => "modes.classic.quakecraft",
            GameMode::Tkr => "modes.classic.tkr",
            GameMode::VampireZ => "modes.classic.vampirez",
            GameMode::Walls => "modes.classic.walls",
            GameMode::CrazyWalls => "modes.legacy.crazywalls",
            GameMode::SkyClash => "modes.legacy.skyclash",
        }
    }

    /// Run this mode's extractor.
    pub fn extract(&self, profile: &RawProfile, config: &StaticConfig) -> Stats {
        match self {
            GameMode::General => general::get_stats(profile, config),
            GameMode::Bedwars => bedwars::get_stats(profile, config),
            GameMode::Skywars => skywars::get_stats(profile, config),
            GameMode::Duels => duels::get_stats(profile, config),
            GameMode::Arcade => modes::arcade::get_stats(profile, config),
            GameMode::Bsg => modes::bsg::get_stats(profile, config),
            GameMode::BuildBattle => modes::buildbattle::get_stats(profile, config),
            GameMode::Cvc => modes::cvc::get_stats(profile, config),
            GameMode::MegaWalls => modes::megawalls::get_stats(profile, config),
            GameMode::MurderMystery => modes::murdermystery::get_stats(profile, config),
            GameMode::Pit => modes::pit::get_stats(profile, config),
            GameMode::Smash => modes::smash::get_stats(profile, config),
            GameMode::SpeedUhc => modes::speeduhc::get_stats(profile, config),
            GameMode::Tnt => modes::tnt::get_stats(profile, config),
            GameMode::Uhc => modes::uhc::get_stats(profile, config),
            GameMode::Warlords => modes::warlords::get_stats(profile, config),
            GameMode::Wool => modes::wool::get_stats(profile, config),
            GameMode::Arena => modes::classic::arena::get_stats(profile, config),
            GameMode::Paintball => modes::classic::paintball::get_stats(profile, config),
            GameMode::Quakecraft => modes::classic::quakecraft::get_stats(profile, config),
            GameMode::Tkr => modes::classic::tkr::get_stats(profile, config),
            GameMode::VampireZ => modes::classic::vampirez::get_stats(profile, config),
            GameMode::Walls => modes::classic::walls::get_stats(profile, config),
            GameMode::CrazyWalls => modes::legacy::crazywalls::get_stats(profile, config),
            GameMode::SkyClash => modes::legacy::skyclash::get_stats(profile, config),
        }
    }
}

/// Insert `value` at a dotted path, creating intermediate objects.
fn mount(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut current = root;
    let mut parts = path.split('.').peekable();
    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            current.insert(part.to_string(), value);
            return;
        }
        let entry = current
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry.as_object_mut() {
            Some(object) => current = object,
            None => return,
        }
    }
}

/// Derive the full statistics document for one player.
///
/// Runs the rank resolver and every extractor against the same immutable
/// inputs and merges the results into one nested document.
pub fn derive_stats(profile: &RawProfile, config: &StaticConfig) -> DerivedStats {
    let mut root = Map::new();

    let rank = get_rank(profile);
    root.insert(
        "rank".to_string(),
        serde_json::to_value(&rank).unwrap_or(Value::Null),
    );

    for mode in GameMode::ALL {
        let stats = mode.extract(profile, config);
        debug!(mode = mode.key(), keys = stats.0.len(), "extracted mode stats");
        mount(
            &mut root,
            mode.key(),
            serde_json::to_value(&stats).unwrap_or(Value::Null),
        );
    }

    DerivedStats(Value::Object(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_profile_derives_every_section() {
        let profile = RawProfile::from_value(json!({"player": {}})).unwrap();
        let config = StaticConfig::default();

        let derived = derive_stats(&profile, &config);

        for mode in GameMode::ALL {
            assert!(
                derived.get(mode.key()).is_some(),
                "missing section {}",
                mode.key()
            );
        }
        assert_eq!(derived.get("rank.rank"), Some(&json!("None")));
    }

    #[test]
    fn test_end_to_end_bedwars_scenario() {
        let profile = RawProfile::from_value(json!({
            "player": {"stats": {"Bedwars": {
                "wins_bedwars": 10,
                "losses_bedwars": 5,
                "Experience": 500
            }}}
        }))
        .unwrap();
        let config = StaticConfig::default();

        let derived = derive_stats(&profile, &config);

        assert_eq!(derived.get("bedwars.win_loss"), Some(&json!(2.0)));
        assert_eq!(derived.get("bedwars.level"), Some(&json!(1.0)));
    }

    #[test]
    fn test_nested_mode_mounting() {
        let profile = RawProfile::from_value(json!({
            "player": {"stats": {"Quake": {"wins": 2}}}
        }))
        .unwrap();
        let config = StaticConfig::default();

        let derived = derive_stats(&profile, &config);

        assert_eq!(derived.get("modes.classic.quakecraft.wins"), Some(&json!(2)));
        assert!(derived.get("modes.legacy.skyclash").is_some());
    }

    #[test]
    fn test_every_emitted_table_is_consistent() {
        let profile = RawProfile::from_value(json!({"player": {}})).unwrap();
        let config = StaticConfig::default();
        let derived = derive_stats(&profile, &config);

        fn walk(value: &Value, checked: &mut usize) {
            if let Some(object) = value.as_object() {
                let looks_like_table = object.contains_key("head")
                    && object.contains_key("rows")
                    && object.contains_key("id");
                if looks_like_table {
                    let head = object["head"].as_array().unwrap().len();
                    for row in object["rows"].as_array().unwrap() {
                        assert_eq!(
                            row.as_array().unwrap().len(),
                            head,
                            "row arity mismatch in {}",
                            object["id"]
                        );
                    }
                    *checked += 1;
                }
                for child in object.values() {
                    walk(child, checked);
                }
            }
        }

        let mut checked = 0;
        walk(&derived.0, &mut checked);
        assert!(checked > 20, "expected to find tables, found {checked}");
    }
}
