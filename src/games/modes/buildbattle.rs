//! Build Battle stats and the score-gated title ladder.

use serde_json::json;

use crate::calculate::ratio3;
use crate::config::StaticConfig;
use crate::models::{ProgressBar, Stats};
use crate::profile::RawProfile;

const STATS_NEEDED: [&str; 11] = [
    "score",
    "coins",
    "wins",
    "games_played",
    "total_votes",
    "wins_guess_the_build",
    "correct_guesses",
    "super_votes",
    "wins_solo_normal",
    "wins_teams_normal",
    "wins_solo_pro",
];

pub fn get_stats(profile: &RawProfile, config: &StaticConfig) -> Stats {
    let buildbattle = profile.game("BuildBattle");
    let mut stats = Stats::new();

    for stat in STATS_NEEDED {
        stats.set(stat, buildbattle.int(stat));
    }

    stats.set("losses", stats.int("games_played") - stats.int("wins"));
    stats.set("win_loss", ratio3(stats.num("wins"), stats.num("losses")));

    // Titles
    let score = stats.num("score");
    if let Some((current, next)) = config.modes.build_battle.window(score) {
        stats.set_struct("current_title", current);
        stats.set_struct("next_title", next);

        let progress = if next.name == "N/A" {
            // Max title reached
            ProgressBar::new(current.value as i64, current.value as i64)
                .text(current.name.clone())
                .next_color(current.color.clone())
                .complete()
        } else {
            ProgressBar::new((score - current.value) as i64, (next.value - current.value) as i64)
                .text(next.name.clone())
                .current_color(current.color.clone())
                .next_color(next.color.clone())
        };
        stats.set_struct("title_progress", &progress);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(buildbattle: Value) -> RawProfile {
        RawProfile::from_value(json!({
            "player": {"stats": {"BuildBattle": buildbattle}}
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_section() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({})), &config);

        assert_eq!(stats.int("score"), 0);
        assert_eq!(stats.num("win_loss"), 0.0);
        assert_eq!(stats.get("current_title").unwrap()["name"], "Rookie");
    }

    #[test]
    fn test_title_window_and_progress() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"score": 300})), &config);

        assert_eq!(stats.get("current_title").unwrap()["name"], "Amateur");
        assert_eq!(stats.get("next_title").unwrap()["name"], "Apprentice");

        let progress = stats.get("title_progress").unwrap();
        assert_eq!(progress["text"], "Apprentice");
        assert_eq!(progress["current"]["progress"], 50);
        assert_eq!(progress["next"]["needed"], 250);
        assert!(progress.get("complete").is_none());
    }

    #[test]
    fn test_terminal_title() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"score": 99_999_999})), &config);

        let progress = stats.get("title_progress").unwrap();
        assert_eq!(progress["complete"], 1);
        assert_eq!(progress["text"], "Master");
    }

    #[test]
    fn test_losses() {
        let config = StaticConfig::default();
        let stats = get_stats(&profile(json!({"games_played": 30, "wins": 12})), &config);
        assert_eq!(stats.int("losses"), 18);
        assert_eq!(stats.num("win_loss"), ratio3(12.0, 18.0));
    }
}
