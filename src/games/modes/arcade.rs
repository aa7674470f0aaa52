//! Arcade stats: one counter block spanning ~20 sub-games plus the
//! dropper, pixel party and zombies breakdowns.

use serde_json::json;

use crate::calculate::{percentage2, ratio3, title_case};
use crate::config::StaticConfig;
use crate::models::{Stats, Table};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 80] = [
    "coins",
    // Blocking Dead
    "wins_dayone",
    "kills_dayone",
    "headshots_dayone",
    // Bounty Hunters
    "wins_oneinthequiver",
    "kills_oneinthequiver",
    "deaths_oneinthequiver",
    "bounty_kills_oneinthequiver",
    "bow_kills_oneinthequiver",
    "sword_kills_oneinthequiver",
    // Creeper Attack
    "max_wave",
    // Dragon Wars
    "wins_dragonwars2",
    "kills_dragonwars2",
    // Easter Simulator
    "wins_easter_simulator",
    "eggs_found_easter_simulator",
    // Ender Spleef
    "wins_ender",
    "blocks_destroyed_ender",
    "powerup_activations_ender",
    "bigshot_powerup_activations_ender",
    "tripleshot_powerup_activations_ender",
    // Farm Hunt
    "wins_farm_hunt",
    "poop_collected",
    "taunts_used_farm_hunt",
    "risky_taunts_used_farm_hunt",
    // Football
    "wins_soccer",
    "goals_soccer",
    "kicks_soccer",
    "powerkicks_soccer",
    // Galaxy Wars
    "sw_game_wins",
    "sw_kills",
    "sw_deaths",
    "sw_rebel_kills",
    "sw_empire_kills",
    "sw_shots_fired",
    // Grinch Simulator v2
    "wins_grinch_simulator_v2",
    "gifts_grinch_simulator_v2",
    // Halloween Simulator
    "wins_halloween_simulator",
    "candy_found_halloween_simulator",
    // Hide and Seek
    "seeker_wins_hide_and_seek",
    "hider_wins_hide_and_seek",
    // Hole in the Wall
    "wins_hole_in_the_wall",
    "rounds_hole_in_the_wall",
    "hitw_record_q",
    "hitw_record_f",
    // Hypixel Says
    "wins_simon_says",
    "rounds_simon_says",
    // Party Games
    "wins_party",
    "wins_party_2",
    "wins_party_3",
    // Pixel Painters
    "wins_draw_their_thing",
    // Santa Says
    "wins_santa_says",
    "rounds_santa_says",
    // Santa Simulator
    "delivered_santa_simulator",
    "spotted_santa_simulator",
    // Scuba Simulator
    "wins_scuba_simulator",
    "items_found_scuba_simulator",
    "total_points_scuba_simulator",
    // Throw Out
    "wins_throw_out",
    "kills_throw_out",
    "deaths_throw_out",
    // Mini Walls
    "wins_mini_walls",
    "kills_mini_walls",
    "deaths_mini_walls",
    "final_kills_mini_walls",
    "wither_kills_mini_walls",
    "wither_damage_mini_walls",
    "arrows_shot_mini_walls",
    "arrows_hit_mini_walls",
    // Zombies
    "wins_zombies",
    "deaths_zombies",
    "total_rounds_survived_zombies",
    "best_round_zombies",
    "zombie_kills_zombies",
    "bullets_shot_zombies",
    "bullets_hit_zombies",
    "headshots_zombies",
    "players_revived_zombies",
    "times_knocked_down_zombies",
    "doors_opened_zombies",
    "windows_repaired_zombies",
];

const ZOMBIE_TYPES: [&str; 44] = [
    "basic",
    "blaze",
    "blob",
    "broodmother",
    "cave_spider",
    "charged_creeper",
    "chgluglu",
    "clown",
    "empowered",
    "ender",
    "endermite",
    "family_daughter",
    "fire",
    "ghast",
    "giant",
    "guardian",
    "herobrine_minion",
    "inferno",
    "invisible",
    "iron_golem",
    "magma",
    "magma_cube",
    "mega_magma",
    "mega_blob",
    "pig_zombie",
    "rainbow",
    "sentinel",
    "skelefish",
    "skeleton",
    "slime",
    "slime_zombie",
    "space_blaster",
    "space_grunt",
    "tnt",
    "tnt_baby",
    "werewolf",
    "witch",
    "wither",
    "wither_skeleton",
    "wither_zombie",
    "wolf",
    "wolf_pet",
    "worm",
    "worm_small",
];

pub fn get_stats(profile: &RawProfile, _config: &StaticConfig) -> Stats {
    let arcade = profile.game("Arcade");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, arcade.int(stat));
    }

    // Blocking Dead
    stats.set(
        "melee_weapon",
        title_case(&arcade.text("melee_weapon", "None").replace('_', " ")),
    );

    // Bounty Hunters
    stats.set(
        "kill_death_oneinthequiver",
        ratio3(
            stats.num("kills_oneinthequiver"),
            stats.num("deaths_oneinthequiver"),
        ),
    );

    // Capture the Wool
    let achievements = profile.player().sub("achievements");
    stats.set("ctw_kills", achievements.int("arcade_ctw_slayer"));
    stats.set("ctw_captures", achievements.int("arcade_ctw_oh_sheep"));

    // Dropper
    let dropper = arcade.sub("dropper");
    for stat in [
        "wins",
        "games_played",
        "maps_completed",
        "fastest_game",
        "games_finished",
        "flawless_games",
        "fails",
    ] {
        stats.set(format!("{stat}_dropper"), dropper.int(stat));
    }
    stats.set(
        "losses_dropper",
        stats.int("games_played_dropper") - stats.int("wins_dropper"),
    );
    stats.set(
        "win_loss_dropper",
        ratio3(stats.num("wins_dropper"), stats.num("losses_dropper")),
    );
    stats.set("fastest_game_dropper", stats.num("fastest_game_dropper") / 1000.0);

    // Galaxy Wars
    stats.set(
        "sw_kill_death",
        ratio3(stats.num("sw_kills"), stats.num("sw_deaths")),
    );

    // Party Games
    stats.set(
        "wins_party_games",
        stats.int("wins_party") + stats.int("wins_party_2") + stats.int("wins_party_3"),
    );

    // Pixel Party
    const PIXEL_PARTY_STATS: [&str; 5] = [
        "games_played",
        "wins",
        "power_ups_collected",
        "highest_round",
        "rounds_completed",
    ];

    let pixel_party = arcade.sub("pixel_party");
    for stat in PIXEL_PARTY_STATS {
        stats.set(format!("{stat}_pixel_party"), pixel_party.int(stat));
    }
    stats.set(
        "losses_pixel_party",
        stats.int("games_played_pixel_party") - stats.int("wins_pixel_party"),
    );
    stats.set(
        "win_loss_pixel_party",
        ratio3(stats.num("wins_pixel_party"), stats.num("losses_pixel_party")),
    );

    let mut rows = Vec::new();
    for (suffix, label) in [("", "Overall"), ("_normal", "Normal"), ("_hyper", "Hyper")] {
        let games = pixel_party.int(&format!("games_played{suffix}"));
        let wins = pixel_party.int(&format!("wins{suffix}"));
        let losses = games - wins;

        rows.push(vec![
            json!(label),
            json!(wins),
            json!(losses),
            json!(ratio3(wins as f64, losses as f64)),
            json!(pixel_party.int(&format!("power_ups_collected{suffix}"))),
            json!(pixel_party.int(&format!("rounds_completed{suffix}"))),
        ]);
    }

    stats.set_table(
        "table_pixel_party",
        Table::new(
            "tablePixelPartyArcade",
            &["Mode", "Wins", "Losses", "W/L", "Powerups", "Rounds"],
        )
        .rows(rows)
        .bold_rows(&[1])
        .percent(&[3])
        .buttons(&[("W/L", &[0, 1, 2, 3]), ("Powerups", &[0, 4]), ("Rounds", &[0, 5])]),
    );

    // Throw Out
    stats.set(
        "kill_death_throw_out",
        ratio3(stats.num("kills_throw_out"), stats.num("deaths_throw_out")),
    );

    // Mini Walls
    stats.set("miniwalls_activeKit", arcade.text("miniwalls_activeKit", "None"));
    stats.set(
        "kill_death_mini_walls",
        ratio3(stats.num("kills_mini_walls"), stats.num("deaths_mini_walls")),
    );
    stats.set(
        "arrow_hit_miss_mini_walls",
        ratio3(
            stats.num("arrows_hit_mini_walls"),
            stats.num("arrows_shot_mini_walls") - stats.num("arrows_hit_mini_walls"),
        ),
    );

    // Zombies
    stats.set(
        "bullet_accuracy_zombies",
        percentage2(stats.num("bullets_hit_zombies"), stats.num("bullets_shot_zombies")),
    );
    stats.set(
        "headshot_accuracy_zombies",
        percentage2(stats.num("headshots_zombies"), stats.num("bullets_shot_zombies")),
    );

    // Zombies maps
    const ZOMBIES_STATS: [&str; 8] = [
        "best_round",
        "wins",
        "deaths",
        "zombie_kills",
        "players_revived",
        "times_knocked_down",
        "doors_opened",
        "windows_repaired",
    ];
    const ZOMBIES_MAPS: [(&str, &str); 3] = [
        ("deadend", "Deadend"),
        ("badblood", "Badblood"),
        ("alienarcadium", "Alienarcadium"),
    ];

    let mut rows = Vec::new();
    for (map, label) in ZOMBIES_MAPS {
        let mut row = vec![json!(label)];
        for col in ZOMBIES_STATS {
            row.push(json!(arcade.int(&format!("{col}_zombies_{map}"))));
        }
        rows.push(row);
    }

    stats.set_table(
        "table_zombies",
        Table::new(
            "tableZombiesArcade",
            &[
                "Map",
                "Best Round",
                "Wins",
                "Deaths",
                "Zombie Kills",
                "Revivals",
                "Downs",
                "Doors",
                "Windows",
            ],
        )
        .rows(rows)
        .bold_cols(&[0])
        .buttons(&[
            ("Core", &[0, 1, 2, 3]),
            ("Kills", &[0, 4]),
            ("Revivals/Downs", &[0, 5, 6]),
            ("Doors/Windows", &[0, 7, 8]),
        ]),
    );

    // Zombies kill types
    let total_zombie_kills = stats.num("zombie_kills_zombies");
    let mut rows = Vec::new();
    for zombie in ZOMBIE_TYPES {
        let kills = arcade.int(&format!("{zombie}_zombie_kills_zombies"));
        let label = match zombie {
            "tnt" => "TNT".to_string(),
            "tnt_baby" => "TNT Baby".to_string(),
            other => title_case(&other.replace('_', " ")),
        };
        rows.push(vec![
            json!(label),
            json!(kills),
            json!(format!("{}%", percentage2(kills as f64, total_zombie_kills))),
        ]);
    }

    stats.set_table(
        "table_zombies_types",
        Table::new("tableZombiesTypesArcade", &["Zombie Type", "Kills", "% of Kills"])
            .rows(rows)
            .bold_cols(&[0]),
    );

    stats
}
