//! Warlords stats: mode and class tables plus weapon-inventory scoring.

use serde_json::{json, Value};

use crate::calculate::{ratio3, round_dp};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 10] = [
    "wins",
    "losses",
    "kills",
    "deaths",
    "coins",
    "void_shards",
    "magic_dust",
    "assists",
    "flag_conquer_self",
    "flag_returns",
];

const CLASS_UPGRADES: [&str; 10] = [
    "cooldown",
    "critchance",
    "critmultiplier",
    "energy",
    "health",
    "skill1",
    "skill2",
    "skill3",
    "skill4",
    "skill5",
];

/// Weapon quality score: each attribute scaled by its upgrade sensitivity.
fn weapon_score(weapon: &serde_json::Map<String, Value>) -> f64 {
    let num = |key: &str| weapon.get(key).and_then(Value::as_f64).unwrap_or(0.0);
    let upgrades = num("upgradeTimes");

    num("damage") * (1.0 + upgrades * 0.075)
        + num("chance")
        + num("multiplier")
        + num("ability") * (1.0 + upgrades * 0.075)
        + num("health") * (1.0 + upgrades * 0.25)
        + num("energy") * (1.0 + upgrades * 0.1)
        + num("cooldown") * (1.0 + upgrades * 0.075)
        + num("movement") * (1.0 + upgrades * 0.075)
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let warlords = profile.game("Battleground");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, warlords.int(stat));
    }

    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));
    stats.set("kill_death", ratio3(stats.num("kills"), stats.num("deaths")));

    // Main Table
    let mut rows = Vec::new();
    for (mode, label) in [
        ("capturetheflag", "Capture the Flag"),
        ("domination", "Domination"),
        ("teamdeathmatch", "Team Deathmatch"),
    ] {
        rows.push(vec![
            json!(label),
            json!(warlords.int(&format!("wins_{mode}"))),
            json!(warlords.int(&format!("kills_{mode}"))),
        ]);
    }

    stats.set_table(
        "table",
        Table::new("tableWarlords", &["Mode", "Wins", "Kills"])
            .rows(rows)
            .bold_cols(&[0]),
    );

    // Weapons
    stats.set("repaired", warlords.int("repaired"));
    for rarity in ["common", "rare", "epic", "legendary"] {
        stats.set(
            format!("repaired_{rarity}"),
            warlords.int(&format!("repaired_{rarity}")),
        );
    }

    let mut weapon_inv = Vec::new();
    for entry in warlords.list("weapon_inventory") {
        let Some(weapon) = entry.as_object() else {
            continue;
        };
        let mut weapon = weapon.clone();

        // Booleans render as plain strings downstream.
        for value in weapon.values_mut() {
            if let Value::Bool(flag) = value {
                *value = json!(flag.to_string());
            }
        }

        let score = weapon_score(&weapon);
        let category = weapon
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if let Some(prefixes) = config.modes.warlords.prefixes_for(category) {
            let prefix = prefixes
                .iter()
                .rev()
                .find(|p| score >= p.score)
                .map(|p| p.prefix.clone());
            if let Some(prefix) = prefix {
                weapon.insert("prefix".to_string(), json!(prefix));
            }
        }
        weapon.insert("score".to_string(), json!(round_dp(score, 2)));

        weapon_inv.push(Value::Object(weapon));
    }
    stats.set("weapon_inv", weapon_inv);

    // Classes Table
    let mut rows = Vec::new();
    for (suffix, name) in [
        ("", "Overall"),
        ("_mage", "Mage"),
        ("_warrior", "Warrior"),
        ("_paladin", "Paladin"),
        ("_shaman", "Shaman"),
    ] {
        let wins = warlords.int(&format!("wins{suffix}"));
        let losses = warlords.int(&format!("losses{suffix}"));

        let label = if suffix.is_empty() {
            name.to_string()
        } else {
            let class_key = suffix.trim_start_matches('_');
            let level: i64 = CLASS_UPGRADES
                .iter()
                .map(|upgrade| warlords.int(&format!("{class_key}_{upgrade}")))
                .sum();
            format!("[Lv{level}] {name}")
        };

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(warlords.int(&format!("damage{suffix}"))),
            json!(warlords.int(&format!("damage_prevented{suffix}"))),
            json!(warlords.int(&format!("heal{suffix}"))),
        ]);
    }

    stats.set_table(
        "table_classes",
        Table::new(
            "tableWarlordsClasses",
            &[
                "Class",
                "Wins",
                "Losses",
                "W/L",
                "Damage",
                "Damage Prevented",
                "Healing",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .bold_cols(&[0])
        .percent(&[3])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("Damage", &[0, 4, 5]), ("Healing", &[0, 6])]),
    );

    stats
}
