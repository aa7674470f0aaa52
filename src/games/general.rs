//! Network-wide (non-game) stats: level, karma, quests, achievements,
//! challenges, parkour, pets and account history.

use chrono::DateTime;
use serde_json::{json, Map, Value};

use crate::calculate::{camel_to_snake, commafy, leveling};
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats};
use crate::profile::RawProfile;
use crate::rank::get_rank;

/// Coin multiplier ladder: minimum network level → multiplier label.
const COIN_MULTIPLIERS: [(f64, &str); 14] = [
    (0.0, "1x"),
    (5.0, "1.5x"),
    (10.0, "2x"),
    (15.0, "2.5x"),
    (20.0, "3x"),
    (25.0, "3.5x"),
    (30.0, "4x"),
    (40.0, "4.5x"),
    (50.0, "5x"),
    (100.0, "5.5x"),
    (125.0, "6x"),
    (150.0, "6.5x"),
    (200.0, "7x"),
    (250.0, "8x"),
];

/// XP needed for network level 250, the first milestone.
const LEVEL_250_XP: f64 = 79_680_000.0;

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let player = profile.player();
    let mut stats = Stats::new();

    // ==================================================================
    // MAIN
    // ==================================================================

    for stat in [
        "karma",
        "firstLogin",
        "lastLogin",
        "totalDailyRewards",
        "rewardStreak",
        "rewardHighScore",
    ] {
        let value = player.get(stat).cloned().unwrap_or(json!(0));
        stats.set(camel_to_snake(stat), value);
    }

    // Login instants as RFC 3339 for display.
    for (raw, key) in [("firstLogin", "first_login_at"), ("lastLogin", "last_login_at")] {
        let millis = player.int(raw);
        if millis > 0 {
            if let Some(instant) = DateTime::from_timestamp_millis(millis) {
                stats.set(key, instant.to_rfc3339());
            }
        }
    }

    // Network level
    let xp = player.num("networkExp").floor();
    let level = leveling::network_xp_to_level(xp);
    stats.set("network_experience", xp as i64);
    stats.set("network_level", level);

    let current_level_xp = leveling::network_level_to_xp(level.floor());
    stats.set_struct(
        "next_level_progress",
        &ProgressBar::new(
            (xp - current_level_xp) as i64,
            (leveling::network_level_to_xp(level.ceil()) - current_level_xp) as i64,
        )
        .text(format!(
            "Level {} to {}",
            commafy(level.floor() as i64),
            commafy(level.floor() as i64 + 1)
        )),
    );

    // Next 100-level milestone (level 250 is the first).
    let (prev, next) = if xp < LEVEL_250_XP {
        (0.0, 250.0)
    } else {
        let prev = if level >= 300.0 {
            (level / 100.0).floor() * 100.0
        } else {
            250.0
        };
        (prev, (level / 100.0).ceil() * 100.0)
    };

    let prev_milestone_xp = leveling::network_level_to_xp(prev);
    stats.set_struct(
        "next_milestone_progress",
        &ProgressBar::new(
            (xp - prev_milestone_xp) as i64,
            (leveling::network_level_to_xp(next) - prev_milestone_xp) as i64,
        )
        .text(format!(
            "Level {} to {}",
            commafy(prev as i64),
            commafy(next as i64)
        )),
    );

    // Coin multiplier
    let rank = get_rank(profile);
    let multiplier = if level >= 250.0 {
        "8x".to_string()
    } else if rank.rank == "YOUTUBER" {
        "7x (YT)".to_string()
    } else {
        let mut multiplier = "1x";
        for (req, value) in COIN_MULTIPLIERS {
            if level > req {
                multiplier = value;
            }
        }
        multiplier.to_string()
    };
    stats.set("coin_multiplier", multiplier);

    // Votes
    stats.set("total_votes", player.sub("voting").int("total"));

    // Gifts
    let gifts = player.sub("giftingMeta");
    for stat in ["bundlesGiven", "bundlesReceived", "ranksGiven"] {
        stats.set(camel_to_snake(stat), gifts.int(stat));
    }

    // ==================================================================
    // QUESTS
    // ==================================================================

    let mut quest_completions = Map::new();
    let mut quests_completed: i64 = 0;
    for (quest, info) in player.sub("quests").entries() {
        let completions = info
            .get("completions")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0) as i64;
        quest_completions.insert(quest.clone(), json!(completions));
        quests_completed += completions;
    }
    stats.set(
        "quests",
        json!({ "completed": quests_completed, "completions": quest_completions }),
    );

    // ==================================================================
    // ACHIEVEMENTS
    // ==================================================================

    let achievements = player.sub("achievements");
    stats.set(
        "achievements",
        json!({
            "points": player.int("achievementPoints"),
            "achievements": player.get("achievements").cloned().unwrap_or(json!({})),
            "achievements_one_time": player.get("achievementsOneTime").cloned().unwrap_or(json!([])),
        }),
    );

    // ==================================================================
    // CHALLENGES
    // ==================================================================

    let mut challenge_completions = Map::new();
    for (challenge, count) in player.sub("challenges").sub("all_time").entries() {
        challenge_completions.insert(challenge.clone(), count.clone());
    }
    stats.set(
        "challenges",
        json!({
            "completed": achievements.int("general_challenger"),
            "completions": challenge_completions,
        }),
    );

    // ==================================================================
    // PARKOUR
    // ==================================================================

    // Most recently attempted lobby first.
    let mut parkour_times: Vec<(String, Value)> = player
        .sub("parkourCompletions")
        .entries()
        .map(|(lobby, times)| (lobby.clone(), times.clone()))
        .collect();
    parkour_times.sort_by_key(|(_, times)| {
        std::cmp::Reverse(
            times
                .get(0)
                .and_then(|t| t.get("timeStart"))
                .and_then(Value::as_i64)
                .unwrap_or(0),
        )
    });
    let parkour_times: Vec<Value> = parkour_times
        .into_iter()
        .map(|(lobby, times)| json!({ "lobby": lobby, "times": times }))
        .collect();
    stats.set("parkour_times", parkour_times);

    stats.set(
        "parkour_checkpoints",
        player
            .get("parkourCheckpointBests")
            .cloned()
            .unwrap_or(json!({})),
    );

    // ==================================================================
    // PETS
    // ==================================================================

    let mut pet_items = Map::new();
    let mut pet_items_total: i64 = 0;
    for (item, count) in player.sub("petConsumables").entries() {
        pet_items_total += count.as_i64().unwrap_or(0);
        pet_items.insert(item.clone(), count.clone());
    }
    pet_items.insert("total".to_string(), json!(pet_items_total));
    stats.set("pet_items", Value::Object(pet_items));

    let mut pets = Map::new();
    for (pet, info) in player.sub("petStats").entries() {
        let mut info = info.clone();
        let experience = info
            .get("experience")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        if let Some(object) = info.as_object_mut() {
            object.insert(
                "level".to_string(),
                json!(leveling::pet_xp_to_level(
                    experience,
                    &config.general.pet_levels
                )),
            );
        }
        pets.insert(pet.clone(), info);
    }
    stats.set("pets", Value::Object(pets));

    // ==================================================================
    // HISTORY
    // ==================================================================

    let mut rank_history = Map::new();
    for rank_name in ["VIP", "VIP_PLUS", "MVP", "MVP_PLUS"] {
        let value = player
            .get(&format!("levelUp_{rank_name}"))
            .cloned()
            .unwrap_or(json!("Unknown"));
        rank_history.insert(rank_name.to_string(), value);
    }
    stats.set("rank_history", Value::Object(rank_history));

    // ==================================================================
    // SOCIALS
    // ==================================================================

    stats.set(
        "social_media",
        player
            .sub("socialMedia")
            .get("links")
            .cloned()
            .unwrap_or(json!({})),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(player: Value) -> RawProfile {
        RawProfile::from_value(json!({ "player": player })).unwrap()
    }

    #[test]
    fn test_empty_player() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.num("karma"), 0.0);
        assert_eq!(stats.num("network_experience"), 0.0);
        assert_eq!(stats.num("network_level"), 1.0);
        assert_eq!(stats.get("coin_multiplier"), Some(&json!("1x")));
        assert_eq!(stats.get("quests").unwrap()["completed"], 0);
    }

    #[test]
    fn test_network_progress() {
        let config = StaticConfig::default();
        let xp = leveling::network_level_to_xp(10.0) + 100.0;
        let stats = get_stats(&profile(json!({ "networkExp": xp })), &config);

        let progress = stats.get("next_level_progress").unwrap();
        assert_eq!(progress["text"], "Level 10 to 11");
        assert_eq!(progress["current"]["progress"], 100);

        let milestone = stats.get("next_milestone_progress").unwrap();
        assert_eq!(milestone["text"], "Level 0 to 250");
    }

    #[test]
    fn test_coin_multiplier_ladder() {
        let config = StaticConfig::default();
        let xp = leveling::network_level_to_xp(26.0);
        let stats = get_stats(&profile(json!({ "networkExp": xp })), &config);
        assert_eq!(stats.get("coin_multiplier"), Some(&json!("3.5x")));

        let xp = leveling::network_level_to_xp(251.0);
        let stats = get_stats(&profile(json!({ "networkExp": xp })), &config);
        assert_eq!(stats.get("coin_multiplier"), Some(&json!("8x")));
    }

    #[test]
    fn test_quests_and_challenges() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "quests": {
                    "daily_a": {"completions": [{"time": 1}, {"time": 2}]},
                    "daily_b": {"completions": [{"time": 3}]},
                    "never": {}
                },
                "achievements": {"general_challenger": 42},
                "challenges": {"all_time": {"bedwars__offensive": 7}}
            })),
            &config,
        );

        let quests = stats.get("quests").unwrap();
        assert_eq!(quests["completed"], 3);
        assert_eq!(quests["completions"]["daily_a"], 2);
        assert_eq!(quests["completions"]["never"], 0);

        let challenges = stats.get("challenges").unwrap();
        assert_eq!(challenges["completed"], 42);
        assert_eq!(challenges["completions"]["bedwars__offensive"], 7);
    }

    #[test]
    fn test_parkour_sorted_by_recency() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "parkourCompletions": {
                    "Bedwars": [{"timeStart": 100, "timeTook": 5}],
                    "Arcade": [{"timeStart": 900, "timeTook": 7}]
                }
            })),
            &config,
        );

        let times = stats.get("parkour_times").unwrap().as_array().unwrap();
        assert_eq!(times[0]["lobby"], "Arcade");
        assert_eq!(times[1]["lobby"], "Bedwars");
    }

    #[test]
    fn test_pet_levels_and_items() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "petConsumables": {"CAKE": 3, "FEATHER": 2},
                "petStats": {"ROCK": {"experience": 50}}
            })),
            &config,
        );

        assert_eq!(stats.get("pet_items").unwrap()["total"], 5);
        assert_eq!(stats.get("pets").unwrap()["ROCK"]["level"], 0.5);
    }

    #[test]
    fn test_rank_history_fallback() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"levelUp_MVP": 123456})), &config);
        let history = stats.get("rank_history").unwrap();
        assert_eq!(history["MVP"], 123456);
        assert_eq!(history["VIP"], "Unknown");
    }
}
