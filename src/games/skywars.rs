//! SkyWars stats: both level curves, prestige window with projections,
//! Angel's Descent, heads, playtime/kit/carry breakdowns and the legacy
//! ranked/mega/lab blocks.

use serde_json::{json, Value};

use crate::calculate::leveling::{
    skywars_next_prestige, skywars_prev_prestige, skywars_xp_to_level, skywars_xp_to_level_old,
};
use crate::calculate::{percentage2, ratio3};
use crate::config::{DescentKind, SkywarsConfig, StaticConfig};
use crate::models::{PrestigeStatus, PrestigeTierRef, ProgressBar, Projection, Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 31] = [
    // Main
    "wins",
    "losses",
    "kills",
    "deaths",
    "skywars_experience",
    "heads",
    "angel_of_death_level",
    "time_played",
    // More
    "coins",
    "cosmetic_tokens",
    "blocks_broken",
    "blocks_placed",
    "souls",
    "souls_gathered",
    "soul_well",
    "soul_well_rares",
    "soul_well_legendaries",
    "paid_souls",
    "arrows_shot",
    "arrows_hit",
    "enderpearls_thrown",
    "items_enchanted",
    "egg_thrown",
    "chests_opened",
    "assists",
    "survived_players",
    "angels_offering",
    "melee_kills",
    "void_kills",
    "mob_kills",
    "bow_kills",
];

/// Plain display form of a level with the active emblem, e.g. `[42⋆]`.
fn format_prestige(level: i64, emblem_key: &str, config: &SkywarsConfig) -> String {
    format!("[{}{}]", level, config.emblem(emblem_key))
}

fn tier_ref(level: i64, emblem_key: &str, config: &SkywarsConfig) -> PrestigeTierRef {
    let (name, color) = config
        .prestige_for(level)
        .map(|p| (p.name.clone(), p.color.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "gray".to_string()));
    PrestigeTierRef {
        level,
        name,
        color,
        formatted: format_prestige(level, emblem_key, config),
    }
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let skywars = profile.game("SkyWars");
    let sw_config = &config.skywars;
    let mut stats = Stats::new();

    // ==================================================================
    // GENERAL
    // ==================================================================

    for active in ["emblem", "scheme"] {
        stats.set(
            format!("active_{active}"),
            skywars.text(&format!("active_{active}"), "default"),
        );
    }
    let emblem_key = stats
        .get("active_emblem")
        .and_then(Value::as_str)
        .unwrap_or("default")
        .trim_start_matches("emblem_")
        .to_string();

    for stat in STATS_NEEDED {
        stats.set(stat, skywars.int(stat));
    }

    stats.set("angel_of_death_level_raw", stats.int("angel_of_death_level"));

    let mut angel_level = stats.int("angel_of_death_level");
    let favor = skywars.list_contains("packages", "favor_of_the_angel");
    stats.set("favor_of_the_angel", if favor { "true" } else { "false" });
    if favor {
        angel_level += 1;
    }

    let offering = skywars.int("angels_offering") == 1;
    stats.set("angels_offering", if offering { "true" } else { "false" });
    if offering {
        angel_level += 1;
    }
    stats.set("angel_of_death_level", angel_level);

    stats.set("games_played", stats.int("wins") + stats.int("losses"));
    stats.set(
        "arrows_missed",
        stats.int("arrows_shot") - stats.int("arrows_hit"),
    );

    stats.add_ratios(&[
        ("win_loss", "wins", "losses"),
        ("kill_death", "kills", "deaths"),
        ("kill_win", "kills", "wins"),
        ("kill_game", "kills", "games_played"),
        ("arrow_hit_miss", "arrows_hit", "arrows_missed"),
    ]);

    // Levelling and prestige
    let experience = stats.num("skywars_experience");
    let level = skywars_xp_to_level(experience);
    stats.set("level", level);
    stats.set(
        "prestige_formatted",
        format_prestige(level as i64, &emblem_key, sw_config),
    );
    stats.set("level_old", skywars_xp_to_level_old(experience));

    // ==================================================================
    // PRESTIGE
    // ==================================================================

    let prev = skywars_prev_prestige(level as i64);
    let next = skywars_next_prestige(level as i64);

    let (needed, progress) = match (sw_config.prestige_for(prev), sw_config.prestige_for(next)) {
        (Some(prev_info), Some(next_info)) => (
            (next_info.end_xp - next_info.start_xp + 1.0) as i64,
            (experience - prev_info.start_xp).round() as i64,
        ),
        _ => (0, 0),
    };
    let remaining = needed - progress;

    let mut prestige = PrestigeStatus {
        previous: tier_ref(prev, &emblem_key, sw_config),
        next: tier_ref(next, &emblem_key, sw_config),
        progress: ProgressBar::new(progress, needed)
            .current_color(
                sw_config
                    .prestige_for(prev)
                    .map(|p| p.color.clone())
                    .unwrap_or_default(),
            )
            .next_color(
                sw_config
                    .prestige_for(next)
                    .map(|p| p.color.clone())
                    .unwrap_or_default(),
            ),
        remaining,
        percent: percentage2(progress as f64, needed as f64),
        ..Default::default()
    };

    let wins = stats.num("wins");
    let kills = stats.num("kills");
    let proceed = wins != 0.0 && kills != 0.0;

    let (wins_estimated, kills_estimated) = if proceed {
        // Ten XP per win, eleven with the angel's favor, plus one per kill.
        let xp_win = if favor { 11.0 } else { 10.0 };
        let kill_win = kills / wins;
        let estimate = remaining as f64 / (xp_win + kill_win);
        (
            Projection::Known(estimate as i64),
            Projection::Known((estimate * kill_win) as i64),
        )
    } else {
        (Projection::Unknown, Projection::Unknown)
    };

    prestige
        .projections
        .insert("wins_estimated".to_string(), wins_estimated);
    prestige
        .projections
        .insert("kills_estimated".to_string(), kills_estimated);
    for (stat, estimated) in [("wins", wins_estimated), ("kills", kills_estimated)] {
        let at = match estimated {
            Projection::Known(value) => Projection::Known(stats.int(stat) + value),
            Projection::Unknown => Projection::Unknown,
        };
        prestige.projections.insert(format!("{stat}_at"), at);
    }

    stats.set_struct("prestige", &prestige);

    // ==================================================================
    // TABLE
    // ==================================================================

    const TABLE_MODES: [(&str, &str); 8] = [
        ("", "Overall"),
        ("_mini", "Mini"),
        ("_solo", "Solo Overall"),
        ("_solo_normal", "Solo Normal"),
        ("_solo_insane", "Solo Insane"),
        ("_team", "Team Overall"),
        ("_team_normal", "Team Normal"),
        ("_team_insane", "Team Insane"),
    ];

    let mut rows = Vec::new();
    for (suffix, label) in TABLE_MODES {
        let wins = skywars.int(&format!("wins{suffix}"));
        let mut losses = skywars.int(&format!("losses{suffix}"));
        let kills = skywars.int(&format!("kills{suffix}"));
        let mut deaths = skywars.int(&format!("deaths{suffix}"));

        if suffix == "_mini" {
            // Mini tracks games rather than losses or deaths.
            losses = skywars.int("games_mini") - wins;
            deaths = losses;
        }

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
        ]);
    }

    stats.set_table(
        "table",
        Table::new(
            "tableSkyWars",
            &["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"],
        )
        .rows(rows)
        .green(&[(3, 1.0), (6, 5.0)])
        .bold_rows(&[1, 3, 6])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    // ==================================================================
    // GRIM REAPER
    // ==================================================================

    // Angel's Descent
    for stat in ["shard_seeker", "grand_slam", "opals", "souls"] {
        stats.set(stat, skywars.int(stat));
    }

    stats.set(
        "harvesting_season",
        skywars.get("harvesting_season").and_then(Value::as_i64).unwrap_or(-1) + 1,
    );
    stats.set(
        "xezbeth_luck",
        skywars.get("xezbeth_luck").and_then(Value::as_i64).unwrap_or(-1) + 1,
    );

    stats.set_struct("opal_progress", &ProgressBar::new(stats.int("souls"), 1500));

    let vanity_packages = profile.player().sub("vanityMeta");
    let mut descent_items = Vec::new();
    let mut opals_spent: i64 = 0;
    let mut opals_to_spend: i64 = 0;
    for item in &sw_config.descent_info {
        let value = match item.kind {
            DescentKind::Stat => skywars.int(&item.key),
            DescentKind::Package => i64::from(skywars.list_contains("packages", &item.key)),
            DescentKind::Vanity => i64::from(vanity_packages.list_contains("packages", &item.key)),
        };
        opals_spent += item.cost * value;
        opals_to_spend += item.cost * item.tiers;
        descent_items.push(json!({
            "key": item.key,
            "type": item.kind,
            "cost": item.cost,
            "tiers": item.tiers,
            "value": value,
        }));
    }
    stats.set("angels_descent_info", descent_items);
    stats.set("opals_spent", opals_spent);
    stats.set("opals_to_spend", opals_to_spend);

    // Heads
    let mut head_stats = serde_json::Map::new();
    let mut heads_xp: i64 = 0;
    for tier in &sw_config.heads {
        for head in &tier.heads {
            let count = skywars.int(&format!("heads_{}", head.name));
            head_stats.insert(head.name.clone(), json!(count));
            heads_xp += count * head.xp;
        }
    }
    head_stats.insert("total_xp".to_string(), json!(heads_xp));
    stats.set("head_stats", Value::Object(head_stats));

    // Angel's Brewery
    stats.set("brewery_active", skywars.text("brewery_active", "none"));
    stats.set(
        "brewery",
        skywars.get("brewery").cloned().unwrap_or(json!({})),
    );

    // ==================================================================
    // PLAYTIME
    // ==================================================================

    const PLAYTIME_MODES: [(&str, &str); 7] = [
        ("", "Overall"),
        ("_lab", "Lab"),
        ("_solo", "Solo"),
        ("_team", "Team"),
        ("_ranked", "Ranked"),
        ("_mega", "Mega Normal"),
        ("_mega_doubles", "Mega Doubles"),
    ];

    let mut rows = Vec::new();
    for (suffix, label) in PLAYTIME_MODES {
        let wins = skywars.int(&format!("wins{suffix}"));
        let kills = skywars.int(&format!("kills{suffix}"));
        let time_played = skywars.int(&format!("time_played{suffix}"));
        let hours = time_played as f64 / 3600.0;

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(ratio3(wins as f64, hours)),
            json!(kills),
            json!(ratio3(kills as f64, hours)),
            json!(time_played),
        ]);
    }

    stats.set_table(
        "table_playtime",
        Table::new(
            "tablePlaytimeSkyWars",
            &["Mode", "Wins", "Wins/Hour", "Kills", "Kills/Hour", "Playtime"],
        )
        .rows(rows)
        .bold_rows(&[1])
        .bold_cols(&[0, 5])
        .duration(&[5])
        .decimal(&[2, 4])
        .buttons(&[("Playtime", &[0, 5]), ("W/H", &[0, 1, 2]), ("K/H", &[0, 3, 4])]),
    );

    // ==================================================================
    // KITS
    // ==================================================================

    for group in &sw_config.kit_names {
        let mut rows = Vec::new();
        for kit in &group.kits {
            let wins = skywars.int(&format!("wins_{}", kit.key));
            let losses = skywars.int(&format!("losses_{}", kit.key));
            let kills = skywars.int(&format!("kills_{}", kit.key));
            let deaths = skywars.int(&format!("deaths_{}", kit.key));
            let time_played = skywars.int(&format!("time_played_{}", kit.key));
            let xp = skywars.int(&format!("xp_{}", kit.key));

            rows.push(vec![
                json!(kit.name),
                json!(wins),
                json!(losses),
                json!(ratio3(wins as f64, losses as f64)),
                json!(kills),
                json!(deaths),
                json!(ratio3(kills as f64, deaths as f64)),
                json!(time_played),
                json!(xp),
            ]);
        }

        // Most-played kits first.
        rows.sort_by_key(|row| std::cmp::Reverse(row[8].as_i64().unwrap_or(0)));

        let mut type_title = group.key.clone();
        if let Some(first) = type_title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        stats.set_table(
            format!("table_kits_{}", group.key),
            Table::new(
                &format!("tableKits{type_title}SkyWars"),
                &[
                    "Kit", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D", "Playtime", "XP",
                ],
            )
            .rows(rows)
            .bold_cols(&[0, 3, 6, 8])
            .percent(&[3])
            .duration(&[7])
            .decimal(&[6])
            .green(&[(3, 1.0), (6, 5.0)])
            .buttons(&[
                ("W/L", &[0, 1, 2, 3]),
                ("K/D", &[0, 4, 5, 6]),
                ("Playtime", &[0, 7]),
                ("XP", &[0, 8]),
            ]),
        );
    }

    // ==================================================================
    // CARRIES
    // ==================================================================

    const CARRY_MODES: [(&str, &str); 6] = [
        ("", "Overall"),
        ("_team", "Team Overall"),
        ("_team_normal", "Team Normal"),
        ("_team_insane", "Team Insane"),
        ("_mega", "Mega Normal"),
        ("_mega_doubles", "Mega Insane"),
    ];

    let mut rows = Vec::new();
    for (suffix, label) in CARRY_MODES {
        let wins = skywars.int(&format!("wins{suffix}"));
        let losses = skywars.int(&format!("losses{suffix}"));
        let deaths = skywars.int(&format!("deaths{suffix}"));
        let carries = (deaths - losses).abs();

        rows.push(vec![
            json!(label),
            json!(carries),
            json!(wins),
            json!(format!("{}%", percentage2(carries as f64, wins as f64))),
        ]);
    }

    // Mega Overall, from the two mega rows.
    let mega_carries = rows[rows.len() - 1][1].as_i64().unwrap_or(0)
        + rows[rows.len() - 2][1].as_i64().unwrap_or(0);
    let mega_wins = rows[rows.len() - 1][2].as_i64().unwrap_or(0)
        + rows[rows.len() - 2][2].as_i64().unwrap_or(0);
    rows.insert(
        4,
        vec![
            json!("Mega Overall"),
            json!(mega_carries),
            json!(mega_wins),
            json!(format!(
                "{}%",
                percentage2(mega_carries as f64, mega_wins as f64)
            )),
        ],
    );

    stats.set(
        "carries",
        rows[1][1].as_i64().unwrap_or(0) + rows[4][1].as_i64().unwrap_or(0),
    );

    stats.set_table(
        "table_carries",
        Table::new("tableCarriesSkyWars", &["Mode", "Carries", "Wins", "% of Wins"])
            .rows(rows)
            .bold_rows(&[1, 2, 5])
            .width(520),
    );

    // ==================================================================
    // LEGACY
    // ==================================================================

    // Ranked
    for stat in ["wins", "losses", "kills", "deaths"] {
        stats.set(format!("{stat}_ranked"), skywars.int(&format!("{stat}_ranked")));
    }
    stats.set(
        "win_loss_ranked",
        ratio3(stats.num("wins_ranked"), stats.num("losses_ranked")),
    );
    stats.set(
        "kill_death_ranked",
        ratio3(stats.num("kills_ranked"), stats.num("deaths_ranked")),
    );

    let mut reward_groups = Vec::new();
    let mut reward_counts = serde_json::Map::new();
    for group in &sw_config.ranked.rewards {
        let mut owned: i64 = 0;
        let rewards: Vec<Value> = group
            .rewards
            .iter()
            .map(|key| {
                let has = i64::from(skywars.list_contains("packages", key));
                owned += has;
                json!({ "key": key, "has": has })
            })
            .collect();
        reward_counts.insert(group.division.clone(), json!(owned));
        reward_groups.push(json!({ "division": group.division, "rewards": rewards }));
    }
    stats.set("rewards_ranked", reward_groups);
    stats.set("reward_counts_ranked", Value::Object(reward_counts));

    fn ranked_history_color(position: i64) -> &'static str {
        if position <= 10 {
            "darkGreen" // Masters
        } else if position <= 200 {
            "darkAqua" // Diamond
        } else if position <= 1500 {
            "gold"
        } else {
            "gray"
        }
    }

    let mut history = Vec::new();
    for (offset, season) in sw_config.ranked.seasons.iter().enumerate() {
        let position_field = format!("SkyWars_skywars_rating{season}_position");
        let rating_field = format!("SkyWars_skywars_rating{season}_rating");
        if !skywars.has(&position_field) {
            continue; // Player didn't rank this season
        }
        let position = skywars.int(&position_field) + 1;
        history.push(json!({
            "season": sw_config.ranked.first_season_number + offset as i64,
            "rating": skywars.int(&rating_field),
            "position": position,
            "color": ranked_history_color(position),
        }));
    }

    let best_season = history
        .iter()
        .min_by_key(|entry| entry["position"].as_i64().unwrap_or(i64::MAX))
        .cloned()
        .unwrap_or(json!(0));
    history.reverse(); // Order as descending
    stats.set("history_ranked", history);
    stats.set("best_season_ranked", best_season);

    // Mega
    let mut overall = [0i64; 4];
    let mut rows = Vec::new();
    for (suffix, label) in [("_mega", "Mega Normal"), ("_mega_doubles", "Mega Doubles")] {
        let values = [
            skywars.int(&format!("wins{suffix}")),
            skywars.int(&format!("losses{suffix}")),
            skywars.int(&format!("kills{suffix}")),
            skywars.int(&format!("deaths{suffix}")),
        ];
        for (total, value) in overall.iter_mut().zip(values) {
            *total += value;
        }
        rows.push(vec![
            json!(label),
            json!(values[0]),
            json!(values[1]),
            json!(ratio3(values[0] as f64, values[1] as f64)),
            json!(values[2]),
            json!(values[3]),
            json!(ratio3(values[2] as f64, values[3] as f64)),
        ]);
    }

    for (key, value) in ["wins", "losses", "kills", "deaths"].iter().zip(overall) {
        stats.set(format!("{key}_mega_overall"), value);
    }

    rows.insert(
        0,
        vec![
            json!("Mega Overall"),
            json!(overall[0]),
            json!(overall[1]),
            json!(ratio3(overall[0] as f64, overall[1] as f64)),
            json!(overall[2]),
            json!(overall[3]),
            json!(ratio3(overall[2] as f64, overall[3] as f64)),
        ],
    );

    stats.set_table(
        "table_mega",
        Table::new(
            "tableMegaSkyWars",
            &["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D"],
        )
        .rows(rows)
        .green(&[(3, 1.0), (6, 5.0)])
        .bold_rows(&[1])
        .percent(&[3])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6])]),
    );

    // Lab
    stats.set("assists_lab", skywars.int("assists_lab"));

    for sub_mode in ["rush", "tnt_madness", "slime", "lucky_blocks", "hunters_vs_beasts"] {
        stats.set(
            format!("wins_{sub_mode}_lab"),
            skywars.int(&format!("lab_win_{sub_mode}_lab")),
        );
    }

    let mut rows = Vec::new();
    for (suffix, label) in [("", "Overall"), ("_solo", "Solo"), ("_team", "Team")] {
        let wins = skywars.int(&format!("wins_lab{suffix}"));
        let losses = skywars.int(&format!("losses_lab{suffix}"));
        let kills = skywars.int(&format!("kills_lab{suffix}"));
        let deaths = skywars.int(&format!("deaths_lab{suffix}"));
        let time_played = skywars.int(&format!("time_played_lab{suffix}"));

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(time_played),
        ]);
    }

    stats.set_table(
        "table_lab",
        Table::new(
            "tableLabSkyWars",
            &["Mode", "Wins", "Losses", "W/L", "Kills", "Deaths", "K/D", "Playtime"],
        )
        .rows(rows)
        .green(&[(3, 1.0), (6, 5.0)])
        .bold_rows(&[1])
        .percent(&[3])
        .duration(&[7])
        .decimal(&[6])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("K/D", &[0, 4, 5, 6]), ("Playtime", &[0, 7])]),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(skywars: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"SkyWars": skywars}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("wins"), 0);
        assert_eq!(stats.num("level"), 1.0);
        assert_eq!(stats.num("level_old"), 1.0);
        assert_eq!(stats.get("favor_of_the_angel"), Some(&json!("false")));

        let prestige = stats.get("prestige").unwrap();
        assert_eq!(prestige["wins_estimated"], "Unknown");
    }

    #[test]
    fn test_angel_of_death_bonuses() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "angel_of_death_level": 5,
                "angels_offering": 1,
                "packages": ["favor_of_the_angel"]
            })),
            &config,
        );

        assert_eq!(stats.int("angel_of_death_level_raw"), 5);
        assert_eq!(stats.int("angel_of_death_level"), 7);
        assert_eq!(stats.get("angels_offering"), Some(&json!("true")));
    }

    #[test]
    fn test_levels_and_prestige_window() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "skywars_experience": 26760,
                "wins": 100,
                "kills": 500
            })),
            &config,
        );

        assert_eq!(stats.num("level"), 19.0);
        let prestige = stats.get("prestige").unwrap();
        assert_eq!(prestige["previous"]["level"], 10);
        assert_eq!(prestige["next"]["level"], 20);

        // kills/wins = 5, so 15 XP per estimated win.
        let remaining = prestige["remaining"].as_i64().unwrap();
        assert_eq!(
            prestige["wins_estimated"].as_i64().unwrap(),
            (remaining as f64 / 15.0) as i64
        );
        assert_eq!(
            prestige["kills_at"].as_i64().unwrap(),
            500 + prestige["kills_estimated"].as_i64().unwrap()
        );
    }

    #[test]
    fn test_mini_row_derives_losses_from_games() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins_mini": 3,
                "games_mini": 10
            })),
            &config,
        );

        let table = stats.get("table").unwrap();
        let mini = &table["rows"][1];
        assert_eq!(mini[0], "Mini");
        assert_eq!(mini[1], 3);
        assert_eq!(mini[2], 7);
        assert_eq!(mini[5], 7);
    }

    #[test]
    fn test_descent_opals() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "angels_offering": 1,
                "packages": ["favor_of_the_angel"]
            })),
            &config,
        );

        // angels_offering (stat, cost 5) + favor_of_the_angel (package, cost 10).
        assert_eq!(stats.int("opals_spent"), 15);
        assert!(stats.int("opals_to_spend") > 15);
    }

    #[test]
    fn test_heads_xp() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "heads_eww": 10,
                "heads_heavenly": 2
            })),
            &config,
        );

        let heads = stats.get("head_stats").unwrap();
        assert_eq!(heads["eww"], 10);
        assert_eq!(heads["total_xp"], 10 + 400);
    }

    #[test]
    fn test_carries_and_mega_overall() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "losses_team": 10,
                "deaths_team": 16,
                "wins_team": 5,
                "losses_mega": 3,
                "deaths_mega": 7,
                "wins_mega": 2,
                "losses_mega_doubles": 1,
                "deaths_mega_doubles": 2,
                "wins_mega_doubles": 4
            })),
            &config,
        );

        let table = stats.get("table_carries").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[4][0], "Mega Overall");
        assert_eq!(rows[4][1], 5); // |7-3| + |2-1|
        assert_eq!(rows[4][2], 6);
        // Team Overall carries + Mega Overall carries.
        assert_eq!(stats.int("carries"), 6 + 5);
    }

    #[test]
    fn test_ranked_history() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "SkyWars_skywars_rating_5_20_position": 4,
                "SkyWars_skywars_rating_5_20_rating": 1800,
                "SkyWars_skywars_rating_7_20_position": 300,
                "SkyWars_skywars_rating_7_20_rating": 1500
            })),
            &config,
        );

        let history = stats.get("history_ranked").unwrap().as_array().unwrap();
        assert_eq!(history.len(), 2);
        // Descending order: newest first.
        assert_eq!(history[0]["season"], 26);
        assert_eq!(history[0]["color"], "gold");
        assert_eq!(history[1]["season"], 24);
        assert_eq!(history[1]["position"], 5);
        assert_eq!(history[1]["color"], "darkGreen");

        let best = stats.get("best_season_ranked").unwrap();
        assert_eq!(best["season"], 24);
    }

    #[test]
    fn test_lab_wins() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({"lab_win_slime_lab": 9, "wins_lab": 20})),
            &config,
        );

        assert_eq!(stats.int("wins_slime_lab"), 9);
        let table = stats.get("table_lab").unwrap();
        assert_eq!(table["rows"][0][1], 20);
    }
}
