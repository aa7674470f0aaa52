//! Turbo Kart Racers stats, including the kart parts recovered from
//! malformed embedded pseudo-JSON.

use serde_json::{json, Value};

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::Stats;
use crate::profile::{parse_embedded, RawProfile};

const STATS_NEEDED: [&str; 15] = [
    "wins",
    "coins",
    "grand_prix_tokens",
    "gold_trophy",
    "silver_trophy",
    "bronze_trophy",
    "banana_hits_sent",
    "banana_hits_received",
    "laps_completed",
    "blue_torpedo_hit",
    "box_pickups",
    "coins_picked_up",
    "engine_active",
    "frame_active",
    "booster_active",
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let tkr = profile.game("GingerBread");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, tkr.get(stat).cloned().unwrap_or(json!(0)));
    }

    stats.set(
        "banana_sent_received",
        ratio3(
            tkr.num("banana_hits_sent"),
            tkr.num("banana_hits_received"),
        ),
    );

    // Kart parts. The active-part fields hold pseudo-JSON with unquoted
    // keys; repair them before reading, and fall back to a part-type-only
    // record when the text is beyond saving.
    let mut kart_parts = Vec::new();
    for part in ["engine", "frame", "booster"] {
        let raw = tkr.text(&format!("{part}_active"), "{}");
        let parsed = parse_embedded(&raw)
            .and_then(|value| value.get("GingerbreadPart").cloned())
            .and_then(|part| part.as_object().cloned())
            .unwrap_or_default();

        if parsed.is_empty() {
            kart_parts.push(json!({ "PartType": part }));
            continue;
        }

        let mut info = parsed;
        let quality: i64 = info
            .get("Attributes")
            .and_then(Value::as_array)
            .map(|attributes| {
                attributes
                    .iter()
                    .map(|attr| attr.get("Level").and_then(Value::as_i64).unwrap_or(0))
                    .sum::<i64>()
                    - 1
            })
            .unwrap_or(-1);
        info.insert("Quality".to_string(), json!(quality));
        kart_parts.push(Value::Object(info));
    }
    stats.set("kart_parts", kart_parts);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(tkr: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"GingerBread": tkr}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let stats = get_stats(&profile(json!({})), &StaticConfig::default());

        assert_eq!(stats.int("wins"), 0);
        let parts = stats.get("kart_parts").unwrap().as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["PartType"], "engine");
        assert_eq!(parts[1]["PartType"], "frame");
        assert_eq!(parts[2]["PartType"], "booster");
    }

    #[test]
    fn test_kart_part_repair() {
        let raw = "{GingerbreadPart:{PartType:ENGINE,Rarity:SUPER_LUCKY,Attributes:[{KartAttributeType:ACCELERATION,Level:2},{KartAttributeType:TOP_SPEED,Level:3}]}}";
        let stats = get_stats(
            &profile(json!({"engine_active": raw})),
            &StaticConfig::default(),
        );

        let parts = stats.get("kart_parts").unwrap().as_array().unwrap();
        assert_eq!(parts[0]["PartType"], "ENGINE");
        assert_eq!(parts[0]["Rarity"], "SUPER_LUCKY");
        // 2 + 3 - 1
        assert_eq!(parts[0]["Quality"], 4);
    }

    #[test]
    fn test_unrepairable_part_degrades() {
        let stats = get_stats(
            &profile(json!({"frame_active": "total garbage ]["})),
            &StaticConfig::default(),
        );

        let parts = stats.get("kart_parts").unwrap().as_array().unwrap();
        assert_eq!(parts[1], json!({"PartType": "frame"}));
    }

    #[test]
    fn test_banana_ratio() {
        let stats = get_stats(
            &profile(json!({"banana_hits_sent": 30, "banana_hits_received": 12})),
            &StaticConfig::default(),
        );
        assert_eq!(stats.num("banana_sent_received"), 2.5);
    }
}
