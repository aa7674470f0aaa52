//! Pit stats: profile cash/XP, the prestige/level curve and its three
//! progress bars, and combat accuracy ratios.

use serde_json::{json, Value};

use crate::calculate::leveling::pit_xp_to_level;
use crate::calculate::{commafy, percentage2, ratio, ratio3};
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 37] = [
    "playtime_minutes",
    "cash_earned",
    "contracts_completed",
    "king_quest_completion",
    "kills",
    "deaths",
    "assists",
    "enchanted_tier1",
    "enchanted_tier2",
    "enchanted_tier3",
    "damage_dealt",
    "damage_received",
    "max_streak",
    "melee_damage_dealt",
    "melee_damage_received",
    "left_clicks",
    "sword_hits",
    "bow_damage_dealt",
    "bow_damage_received",
    "arrows_fired",
    "arrow_hits",
    "jumped_into_pit",
    "launched_by_launchers",
    "lucky_diamond_pieces",
    "diamond_items_purchased",
    "soups_drank",
    "gapple_eaten",
    "ghead_eaten",
    "rage_potatoes_eaten",
    "blocks_broken",
    "blocks_placed",
    "fishing_rod_launched",
    "lava_bucket_emptied",
    "wheat_farmed",
    "fished_anything",
    "fishes_fished",
    "sewer_treasures_found",
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let pit = profile.game("Pit");
    let pit_profile = pit.sub("profile");
    let mut stats = Stats::new();

    // Main Stats
    let completed_prestiges = pit_profile.list("prestiges").len();
    stats.set(
        "cash_during_current_prestige",
        pit_profile.num(&format!("cash_during_prestige_{completed_prestiges}")),
    );

    stats.set("cash", pit_profile.num("cash"));
    stats.set("xp", pit_profile.num("xp"));
    stats.set("renown_unlocks", pit_profile.list("renown_unlocks").len() as i64);

    let pit_stats = pit.sub("pit_stats_ptl");
    for stat in STATS_NEEDED {
        stats.set(stat, pit_stats.int(stat));
    }

    let hours = stats.num("playtime_minutes") / 60.0;
    stats.set("gold_hour", ratio(stats.num("cash_earned"), hours, 2));
    stats.set("xp_hour", ratio(stats.num("xp"), hours, 2));
    stats.set(
        "playtime",
        format!(
            "{}h {}m",
            commafy(hours as i64),
            stats.int("playtime_minutes") % 60
        ),
    );

    // Progress Bars
    let pit_config = &config.modes.pit;
    let level = pit_xp_to_level(stats.num("xp"), &pit_config.prestiges, &pit_config.levels);
    let prestige_info = &pit_config.prestiges[level.prestige];

    let xp_over = stats.num("xp") - (prestige_info.xp_total - prestige_info.xp);
    stats.set_struct(
        "prestige_xp_progress",
        &ProgressBar::new(xp_over as i64, prestige_info.xp as i64).text("Prestige XP"),
    );

    stats.set_struct(
        "prestige_gold_progress",
        &ProgressBar::new(
            stats.num("cash_during_current_prestige") as i64,
            prestige_info.gold_req,
        )
        .text("Prestige Gold")
        .current_color("darkGray")
        .next_color("gold"),
    );

    stats.set_struct(
        "renown_progress",
        &ProgressBar::new(stats.int("renown_unlocks"), 114)
            .text("Renown")
            .current_color("darkPurple")
            .next_color("lightPurple"),
    );

    stats.set_struct("level", &level);

    // Combat Stats
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    let bounty: i64 = pit_profile
        .list("bounties")
        .iter()
        .map(|entry| entry.get("amount").and_then(Value::as_i64).unwrap_or(0))
        .sum();
    stats.set("bounty", bounty);

    stats.set("kill_hour", ratio(stats.num("kills"), hours, 2));
    stats.set(
        "kill_assist_death",
        ratio3(stats.num("kills") + stats.num("assists"), stats.num("deaths")),
    );
    stats.set(
        "kill_assist_hour",
        ratio(stats.num("kills") + stats.num("assists"), hours, 2),
    );

    stats.set(
        "damage_dealt_taken",
        ratio3(stats.num("damage_dealt"), stats.num("damage_received")),
    );
    stats.set(
        "melee_damage_dealt_taken",
        ratio3(
            stats.num("melee_damage_dealt"),
            stats.num("melee_damage_received"),
        ),
    );
    stats.set(
        "melee_accuracy",
        percentage2(stats.num("sword_hits"), stats.num("left_clicks")),
    );

    stats.set(
        "bow_damage_dealt_taken",
        ratio3(stats.num("bow_damage_dealt"), stats.num("bow_damage_received")),
    );
    stats.set(
        "bow_accuracy",
        percentage2(stats.num("arrow_hits"), stats.num("arrows_fired")),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(pit: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Pit": pit}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.num("xp"), 0.0);
        assert_eq!(stats.get("playtime"), Some(&json!("0h 0m")));
        assert_eq!(stats.get("level").unwrap()["prestige"], 0);
        assert_eq!(stats.get("level").unwrap()["level"], 0);
    }

    #[test]
    fn test_playtime_and_rates() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "profile": {"xp": 1200},
                "pit_stats_ptl": {"playtime_minutes": 150, "cash_earned": 3000, "kills": 75}
            })),
            &config,
        );

        assert_eq!(stats.get("playtime"), Some(&json!("2h 30m")));
        assert_eq!(stats.num("gold_hour"), 1200.0);
        assert_eq!(stats.num("xp_hour"), 480.0);
        assert_eq!(stats.num("kill_hour"), 30.0);
    }

    #[test]
    fn test_prestige_progress() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "profile": {
                    "xp": 300,
                    "prestiges": [],
                    "cash_during_prestige_0": 2500
                }
            })),
            &config,
        );

        let xp_bar = stats.get("prestige_xp_progress").unwrap();
        assert_eq!(xp_bar["current"]["progress"], 300);
        assert_eq!(xp_bar["next"]["needed"], 65950);

        let gold_bar = stats.get("prestige_gold_progress").unwrap();
        assert_eq!(gold_bar["current"]["progress"], 2500);
        assert_eq!(gold_bar["next"]["needed"], 10000);
    }

    #[test]
    fn test_bounty_sum() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "profile": {"bounties": [{"amount": 500}, {"amount": 120}]}
            })),
            &config,
        );
        assert_eq!(stats.int("bounty"), 620);
    }

    #[test]
    fn test_accuracies() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "pit_stats_ptl": {
                    "sword_hits": 60,
                    "left_clicks": 100,
                    "arrow_hits": 40,
                    "arrows_fired": 50,
                    "kills": 10,
                    "assists": 5,
                    "deaths": 5
                }
            })),
            &config,
        );

        assert_eq!(stats.num("melee_accuracy"), 60.0);
        assert_eq!(stats.num("bow_accuracy"), 80.0);
        assert_eq!(stats.num("kill_assist_death"), 3.0);
    }
}
