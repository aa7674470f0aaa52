//! BedWars stats: counters, level/prestige state, estimated stats at the
//! next prestige, and the main/beds/carries/dream/practice breakdowns.

use serde_json::{json, Value};

use crate::calculate::leveling::{
    bedwars_next_prestige, bedwars_prev_prestige, bedwars_xp_to_level, BEDWARS_XP_PER_PRESTIGE,
};
use crate::calculate::{percentage2, ratio3};
use crate::config::{BedwarsConfig, StaticConfig};
use crate::models::{PrestigeStatus, PrestigeTierRef, ProgressBar, Projection, Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 29] = [
    // Main
    "wins_bedwars",
    "losses_bedwars",
    "final_kills_bedwars",
    "final_deaths_bedwars",
    "kills_bedwars",
    "deaths_bedwars",
    "winstreak",
    "Experience",
    // More
    "beds_broken_bedwars",
    "beds_lost_bedwars",
    "items_purchased_bedwars",
    "void_final_kills_bedwars",
    "entity_attack_final_kills_bedwars",
    "void_final_deaths_bedwars",
    "entity_attack_final_deaths_bedwars",
    "eight_one_winstreak",
    "eight_two_winstreak",
    "four_three_winstreak",
    "four_four_winstreak",
    "bedwars_boxes",
    "bedwars_christmas_boxes",
    "bedwars_halloween_boxes",
    "bedwars_easter_boxes",
    "bedwars_lunar_boxes",
    "coins",
    "iron_resources_collected_bedwars",
    "gold_resources_collected_bedwars",
    "diamond_resources_collected_bedwars",
    "emerald_resources_collected_bedwars",
];

const MODES: [(&str, &str); 6] = [
    ("", "Overall"),
    ("two_four_", "4v4"),
    ("eight_one_", "Solo"),
    ("eight_two_", "Doubles"),
    ("four_three_", "3v3v3v3"),
    ("four_four_", "4v4v4v4"),
];

/// Plain display form of a level with its emblem, e.g. `[520✫]`.
fn format_prestige(level: i64, config: &BedwarsConfig) -> String {
    format!("[{}{}]", level, config.emblem_for(level))
}

fn tier_ref(level: i64, config: &BedwarsConfig) -> PrestigeTierRef {
    let (name, color) = config
        .prestige_for(level)
        .map(|p| (p.name.clone(), p.color.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "gray".to_string()));
    PrestigeTierRef {
        level,
        name,
        color,
        formatted: format_prestige(level, config),
    }
}

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let bedwars = profile.game("Bedwars");
    let mut stats = Stats::new();

    // ==================================================================
    // GENERAL
    // ==================================================================

    for stat in STATS_NEEDED {
        stats.set(stat, bedwars.int(stat));
    }

    stats.set(
        "games_played",
        stats.int("wins_bedwars") + stats.int("losses_bedwars"),
    );

    // Levelling and prestige
    let experience = stats.num("Experience");
    let level = bedwars_xp_to_level(experience);
    stats.set("level", level);
    stats.set(
        "prestige_formatted",
        format_prestige(level as i64, &config.bedwars),
    );

    stats.add_ratios(&[
        ("win_loss", "wins_bedwars", "losses_bedwars"),
        ("kill_death", "kills_bedwars", "deaths_bedwars"),
        ("final_kill_death", "final_kills_bedwars", "final_deaths_bedwars"),
        ("beds_broken_lost", "beds_broken_bedwars", "beds_lost_bedwars"),
        ("beds_win", "beds_broken_bedwars", "wins_bedwars"),
        ("beds_game", "beds_broken_bedwars", "games_played"),
        ("final_kills_win", "final_kills_bedwars", "wins_bedwars"),
        ("final_kills_game", "final_kills_bedwars", "games_played"),
        ("experience_win", "Experience", "wins_bedwars"),
        ("experience_game", "Experience", "games_played"),
    ]);

    let total_boxes: i64 = [
        "bedwars_boxes",
        "bedwars_christmas_boxes",
        "bedwars_halloween_boxes",
        "bedwars_easter_boxes",
        "bedwars_lunar_boxes",
    ]
    .iter()
    .map(|key| stats.int(key))
    .sum();
    stats.set("total_boxes", total_boxes);

    // ==================================================================
    // PRESTIGE
    // ==================================================================

    let prev = bedwars_prev_prestige(level as i64);
    let next = bedwars_next_prestige(level as i64);

    let per_prestige = BEDWARS_XP_PER_PRESTIGE as f64;
    let progress = (experience % per_prestige) as i64;
    let remaining = BEDWARS_XP_PER_PRESTIGE - progress;

    let mut prestige = PrestigeStatus {
        previous: tier_ref(prev, &config.bedwars),
        next: tier_ref(next, &config.bedwars),
        progress: ProgressBar::new(progress, BEDWARS_XP_PER_PRESTIGE)
            .current_color(
                config
                    .bedwars
                    .prestige_for(prev)
                    .map(|p| p.color.clone())
                    .unwrap_or_default(),
            )
            .next_color(
                config
                    .bedwars
                    .prestige_for(next)
                    .map(|p| p.color.clone())
                    .unwrap_or_default(),
            ),
        remaining,
        percent: percentage2(progress as f64, per_prestige),
        ..Default::default()
    };

    // Estimated stats at next prestige, guarded against zero divisors.
    let wins = stats.num("wins_bedwars");
    let proceed = experience > 0.0
        && ["wins", "final_kills", "beds_broken"]
            .iter()
            .all(|stat| stats.num(&format!("{stat}_bedwars")) != 0.0);

    let wins_estimated = if proceed {
        Some(remaining as f64 / (experience / wins))
    } else {
        None
    };

    for stat in ["final_kills", "beds_broken"] {
        let estimated = match wins_estimated {
            Some(estimate) => {
                Projection::Known((stats.num(&format!("{stat}_bedwars")) / wins * estimate) as i64)
            }
            None => Projection::Unknown,
        };
        prestige
            .projections
            .insert(format!("{stat}_estimated"), estimated);
    }
    prestige.projections.insert(
        "wins_estimated".to_string(),
        match wins_estimated {
            Some(estimate) => Projection::Known(estimate as i64),
            None => Projection::Unknown,
        },
    );

    for stat in ["wins", "final_kills", "beds_broken"] {
        let at = match prestige.projections.get(&format!("{stat}_estimated")) {
            Some(Projection::Known(estimated)) => {
                Projection::Known(stats.int(&format!("{stat}_bedwars")) + estimated)
            }
            _ => Projection::Unknown,
        };
        prestige.projections.insert(format!("{stat}_at"), at);
    }

    stats.set_struct("prestige", &prestige);

    // ==================================================================
    // TABLE
    // ==================================================================

    let combat_row = |wins: i64,
                      losses: i64,
                      final_kills: i64,
                      final_deaths: i64,
                      kills: i64,
                      deaths: i64,
                      beds_broken: i64,
                      label: &str| {
        vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(final_kills),
            json!(final_deaths),
            json!(ratio3(final_kills as f64, final_deaths as f64)),
            json!(kills),
            json!(deaths),
            json!(ratio3(kills as f64, deaths as f64)),
            json!(beds_broken),
        ]
    };

    const COMBAT_HEAD: [&str; 11] = [
        "Mode",
        "Wins",
        "Losses",
        "W/L",
        "Final Kills",
        "Final Deaths",
        "Final K/D",
        "Kills",
        "Deaths",
        "K/D",
        "Beds Broken",
    ];

    let mut rows = Vec::new();
    for (prefix, label) in MODES {
        rows.push(combat_row(
            bedwars.int(&format!("{prefix}wins_bedwars")),
            bedwars.int(&format!("{prefix}losses_bedwars")),
            bedwars.int(&format!("{prefix}final_kills_bedwars")),
            bedwars.int(&format!("{prefix}final_deaths_bedwars")),
            bedwars.int(&format!("{prefix}kills_bedwars")),
            bedwars.int(&format!("{prefix}deaths_bedwars")),
            bedwars.int(&format!("{prefix}beds_broken_bedwars")),
            label,
        ));
    }

    stats.set_table(
        "table",
        Table::new("tableBedWars", &COMBAT_HEAD)
            .rows(rows)
            .green(&[(3, 10.0), (6, 30.0)])
            .bold_rows(&[1])
            .percent(&[3])
            .decimal(&[6, 9])
            .buttons(&[
                ("W/L", &[0, 1, 2, 3]),
                ("FK/D", &[0, 4, 5, 6]),
                ("K/D", &[0, 7, 8, 9]),
                ("Beds", &[0, 10]),
            ]),
    );

    // ==================================================================
    // BEDS
    // ==================================================================

    let mut rows = Vec::new();
    for (prefix, label) in MODES {
        let wins = bedwars.int(&format!("{prefix}wins_bedwars"));
        let losses = bedwars.int(&format!("{prefix}losses_bedwars"));
        let broken = bedwars.int(&format!("{prefix}beds_broken_bedwars"));
        let lost = bedwars.int(&format!("{prefix}beds_lost_bedwars"));

        rows.push(vec![
            json!(label),
            json!(broken),
            json!(lost),
            json!(ratio3(broken as f64, lost as f64)),
            json!(ratio3(broken as f64, wins as f64)),
            json!(ratio3(broken as f64, (wins + losses) as f64)),
        ]);
    }

    stats.set_table(
        "table_beds",
        Table::new(
            "tableBedsBedWars",
            &[
                "Mode",
                "Beds Broken",
                "Beds Lost",
                "Beds Broken/Beds Lost",
                "Beds Broken/Win",
                "Beds Broken/Game",
            ],
        )
        .rows(rows)
        .bold_rows(&[1])
        .decimal(&[3, 4, 5])
        .buttons(&[
            ("Broken", &[0, 1]),
            ("Lost", &[0, 2]),
            ("BB/BL", &[0, 3]),
            ("BB/W", &[0, 4]),
            ("BB/G", &[0, 5]),
        ]),
    );

    // ==================================================================
    // CARRIES
    // ==================================================================

    const CARRY_MODES: [(&str, &str); 5] = [
        ("", "Overall"),
        ("two_four_", "4v4"),
        ("eight_two_", "Doubles"),
        ("four_three_", "3v3v3v3"),
        ("four_four_", "4v4v4v4"),
    ];

    let mut rows = Vec::new();
    for (prefix, label) in CARRY_MODES {
        let wins = bedwars.int(&format!("{prefix}wins_bedwars"));
        let losses = bedwars.int(&format!("{prefix}losses_bedwars"));
        let final_deaths = bedwars.int(&format!("{prefix}final_deaths_bedwars"));
        let carries = (final_deaths - losses).abs();

        rows.push(vec![
            json!(label),
            json!(carries),
            json!(wins),
            json!(format!("{}%", percentage2(carries as f64, wins as f64))),
        ]);
    }

    // The overall row shows the sum of the per-mode carries, not the
    // counter-derived value.
    let total_carries: i64 = rows[1..]
        .iter()
        .map(|row| row[1].as_i64().unwrap_or(0))
        .sum();
    rows[0][1] = json!(total_carries);
    stats.set("carries_bedwars", total_carries);

    stats.set_table(
        "table_carries",
        Table::new("tableCarriesBedWars", &["Mode", "Carries", "Wins", "% of Wins"])
            .rows(rows)
            .bold_rows(&[1])
            .width(520),
    );

    // ==================================================================
    // DREAM
    // ==================================================================

    const DREAM_MODES: [(&str, &str); 11] = [
        ("castle", "Castle"),
        ("eight_one_rush", "Rush Solo"),
        ("eight_two_rush", "Rush Doubles"),
        ("four_four_rush", "Rush 4v4v4v4"),
        ("eight_one_ultimate", "Ultimate Solo"),
        ("eight_two_ultimate", "Ultimate Doubles"),
        ("four_four_ultimate", "Ultimate 4v4v4v4"),
        ("eight_two_lucky", "Lucky Doubles"),
        ("four_four_lucky", "Lucky 4v4v4v4"),
        ("eight_two_armed", "Armed Doubles"),
        ("four_four_armed", "Armed 4v4v4v4"),
    ];

    let mut rows = Vec::new();
    for (prefix, label) in DREAM_MODES {
        rows.push(combat_row(
            bedwars.int(&format!("{prefix}_wins_bedwars")),
            bedwars.int(&format!("{prefix}_losses_bedwars")),
            bedwars.int(&format!("{prefix}_final_kills_bedwars")),
            bedwars.int(&format!("{prefix}_final_deaths_bedwars")),
            bedwars.int(&format!("{prefix}_kills_bedwars")),
            bedwars.int(&format!("{prefix}_deaths_bedwars")),
            bedwars.int(&format!("{prefix}_beds_broken_bedwars")),
            label,
        ));
    }

    // Per-variant overall rows, inserted in order so each index refers to
    // the table state at that step.
    const OVERALLS: [(&str, usize, &[usize]); 4] = [
        ("Rush", 1, &[1, 2, 3]),
        ("Ultimate", 5, &[5, 6, 7]),
        ("Lucky", 9, &[9, 10]),
        ("Armed", 12, &[12, 13]),
    ];
    const SUM_COLS: [usize; 7] = [1, 2, 4, 5, 7, 8, 10];

    for (label, index, source_rows) in OVERALLS {
        let mut sums = [0i64; 7];
        for (slot, &col) in SUM_COLS.iter().enumerate() {
            sums[slot] = source_rows
                .iter()
                .map(|&row| rows[row][col].as_i64().unwrap_or(0))
                .sum();
        }
        let [wins, losses, final_kills, final_deaths, kills, deaths, beds_broken] = sums;
        rows.insert(
            index,
            combat_row(
                wins,
                losses,
                final_kills,
                final_deaths,
                kills,
                deaths,
                beds_broken,
                &format!("{label} Overall"),
            ),
        );
    }

    stats.set_table(
        "table_dream",
        Table::new("tableDreamBedWars", &COMBAT_HEAD)
            .rows(rows)
            .green(&[(3, 10.0), (6, 30.0)])
            .bold_rows(&[2, 6, 10, 13])
            .percent(&[3])
            .decimal(&[6, 9])
            .buttons(&[
                ("W/L", &[0, 1, 2, 3]),
                ("FK/D", &[0, 4, 5, 6]),
                ("K/D", &[0, 7, 8, 9]),
                ("Beds", &[0, 10]),
            ]),
    );

    // ==================================================================
    // PRACTICE MODE
    // ==================================================================

    let practice = bedwars.sub("practice");
    for mode in ["bridging", "mlg", "fireball_jumping", "pearl_clutching", "bow"] {
        let mode_stats = practice.sub(mode);
        for stat in ["blocks_placed", "successful_attempts", "failed_attempts"] {
            stats.set(format!("{stat}_{mode}"), mode_stats.int(stat));
        }
        let successful = mode_stats.num("successful_attempts");
        let failed = mode_stats.num("failed_attempts");
        stats.set(
            format!("success_rate_{mode}"),
            format!("{}%", percentage2(successful, successful + failed)),
        );
    }

    const BRIDGING_RECORDS: [(&str, &str); 9] = [
        ("straight_30", "bridging_distance_30:elevation_NONE:angle_STRAIGHT:"),
        ("incline_30", "bridging_distance_30:elevation_SLIGHT:angle_STRAIGHT:"),
        ("stairs_30", "bridging_distance_30:elevation_STAIRCASE:angle_STRAIGHT:"),
        ("straight_50", "bridging_distance_50:elevation_NONE:angle_STRAIGHT:"),
        ("incline_50", "bridging_distance_50:elevation_SLIGHT:angle_STRAIGHT:"),
        ("stairs_50", "bridging_distance_50:elevation_STAIRCASE:angle_STRAIGHT:"),
        ("straight_100", "bridging_distance_100:elevation_NONE:angle_STRAIGHT:"),
        ("incline_100", "bridging_distance_100:elevation_SLIGHT:angle_STRAIGHT:"),
        ("stairs_100", "bridging_distance_100:elevation_STAIRCASE:angle_STRAIGHT:"),
    ];

    let records = practice.sub("records");
    for (key, field) in BRIDGING_RECORDS {
        let value: Value = match records.get(field).and_then(Value::as_f64) {
            Some(millis) => json!(format!("{:.3}s", millis / 1000.0)),
            None => json!("N/A"),
        };
        stats.set(key, value);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(bedwars: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"Bedwars": bedwars}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("wins_bedwars"), 0);
        assert_eq!(stats.num("level"), 0.0);
        assert_eq!(stats.num("win_loss"), 0.0);
        assert_eq!(stats.int("games_played"), 0);

        let prestige = stats.get("prestige").unwrap();
        assert_eq!(prestige["wins_estimated"], "Unknown");
        assert_eq!(prestige["wins_at"], "Unknown");
    }

    #[test]
    fn test_basic_counters_and_level() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins_bedwars": 10,
                "losses_bedwars": 5,
                "Experience": 500
            })),
            &config,
        );

        assert_eq!(stats.num("win_loss"), 2.0);
        // 500 XP completes level 1 exactly.
        assert_eq!(stats.num("level"), 1.0);
        assert_eq!(stats.int("games_played"), 15);
        assert_eq!(stats.get("prestige_formatted"), Some(&json!("[1✫]")));
    }

    #[test]
    fn test_prestige_block() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins_bedwars": 100,
                "final_kills_bedwars": 300,
                "beds_broken_bedwars": 150,
                "Experience": 487_000 + 7_000
            })),
            &config,
        );

        let prestige = stats.get("prestige").unwrap();
        assert_eq!(prestige["previous"]["level"], 100);
        assert_eq!(prestige["previous"]["name"], "Iron");
        assert_eq!(prestige["next"]["level"], 200);
        assert_eq!(prestige["next"]["name"], "Gold");
        assert_eq!(prestige["progress"]["current"]["progress"], 7_000);
        assert_eq!(prestige["remaining"], 480_000);

        // Estimates are computed since every divisor is non-zero.
        let wins_estimated = prestige["wins_estimated"].as_i64().unwrap();
        assert!(wins_estimated > 0);
        assert_eq!(
            prestige["wins_at"].as_i64().unwrap(),
            100 + wins_estimated
        );
    }

    #[test]
    fn test_main_table_shape() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "wins_bedwars": 12,
                "eight_one_wins_bedwars": 7,
                "eight_one_losses_bedwars": 2
            })),
            &config,
        );

        let table = stats.get("table").unwrap();
        assert_eq!(table["rows"].as_array().unwrap().len(), 6);
        assert_eq!(table["rows"][0][0], "Overall");
        assert_eq!(table["rows"][2][0], "Solo");
        assert_eq!(table["rows"][2][1], 7);
        assert_eq!(table["rows"][2][3], 3.5);
    }

    #[test]
    fn test_carries_overall_is_summed() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                // Overall counters disagree with the per-mode sum on purpose.
                "losses_bedwars": 100,
                "final_deaths_bedwars": 100,
                "eight_two_losses_bedwars": 10,
                "eight_two_final_deaths_bedwars": 4,
                "four_four_losses_bedwars": 3,
                "four_four_final_deaths_bedwars": 9
            })),
            &config,
        );

        // |4-10| + |9-3| = 12
        assert_eq!(stats.int("carries_bedwars"), 12);
        let table = stats.get("table_carries").unwrap();
        assert_eq!(table["rows"][0][1], 12);
    }

    #[test]
    fn test_dream_table_overall_rows() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "eight_one_rush_wins_bedwars": 3,
                "eight_two_rush_wins_bedwars": 4,
                "four_four_rush_wins_bedwars": 5,
                "eight_two_lucky_wins_bedwars": 2,
                "four_four_lucky_wins_bedwars": 1
            })),
            &config,
        );

        let table = stats.get("table_dream").unwrap();
        let rows = table["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[1][0], "Rush Overall");
        assert_eq!(rows[1][1], 12);
        assert_eq!(rows[5][0], "Ultimate Overall");
        assert_eq!(rows[9][0], "Lucky Overall");
        assert_eq!(rows[9][1], 3);
        assert_eq!(rows[12][0], "Armed Overall");
    }

    #[test]
    fn test_practice_and_bridging() {
        let config = StaticConfig::default();
        let stats = get_stats(
            &profile(json!({
                "practice": {
                    "bridging": {
                        "blocks_placed": 200,
                        "successful_attempts": 3,
                        "failed_attempts": 1
                    },
                    "records": {
                        "bridging_distance_30:elevation_NONE:angle_STRAIGHT:": 4567
                    }
                }
            })),
            &config,
        );

        assert_eq!(stats.int("blocks_placed_bridging"), 200);
        assert_eq!(stats.get("success_rate_bridging"), Some(&json!("75%")));
        assert_eq!(stats.get("straight_30"), Some(&json!("4.567s")));
        assert_eq!(stats.get("stairs_100"), Some(&json!("N/A")));
    }

    #[test]
    fn test_tables_are_consistent() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);
        for key in ["table", "table_beds", "table_carries", "table_dream"] {
            let table = stats.get(key).unwrap();
            let head = table["head"].as_array().unwrap().len();
            for row in table["rows"].as_array().unwrap() {
                assert_eq!(row.as_array().unwrap().len(), head);
            }
        }
    }
}
