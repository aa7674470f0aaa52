//! Display-rank resolution.
//!
//! A player's rank can live in any of several overlapping raw fields
//! depending on account age and subscriptions. The resolver scans a fixed
//! candidate list in precedence order and takes the first meaningful value.

use serde::Serialize;

use crate::profile::RawProfile;

/// Candidate rank fields, highest precedence first.
const RANK_LOCATIONS: [&str; 5] = [
    "prefix",
    "rank",
    "monthlyPackageRank",
    "newPackageRank",
    "packageRank",
];

/// A resolved display rank with its accent colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub rank: String,
    pub rank_plus_color: String,
    pub monthly_rank_color: String,
}

impl Default for Rank {
    fn default() -> Self {
        Rank {
            rank: "None".to_string(),
            rank_plus_color: "None".to_string(),
            monthly_rank_color: "None".to_string(),
        }
    }
}

/// Resolve the display rank for a player.
///
/// `"NORMAL"` and `"NONE"` never win; `SUPERSTAR` maps to `MVP++` and
/// `MVP_PLUS` to `MVP+`, with `"RED"`/`"GOLD"` fallbacks for the accent
/// colors when the player never picked one.
pub fn get_rank(profile: &RawProfile) -> Rank {
    let player = profile.player();

    let found = RANK_LOCATIONS.iter().find_map(|location| {
        player
            .get(location)
            .and_then(|v| v.as_str())
            .filter(|v| *v != "NORMAL" && *v != "NONE")
    });

    let mut rank = Rank::default();
    match found {
        None => {}
        Some("SUPERSTAR") => {
            rank.rank = "MVP++".to_string();
            rank.rank_plus_color = player.text("rankPlusColor", "RED");
            rank.monthly_rank_color = player.text("monthlyRankColor", "GOLD");
        }
        Some("MVP_PLUS") => {
            rank.rank = "MVP+".to_string();
            rank.rank_plus_color = player.text("rankPlusColor", "RED");
        }
        Some(other) => {
            rank.rank = other.to_string();
        }
    }

    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(player: serde_json::Value) -> RawProfile {
        RawProfile::from_value(json!({ "player": player })).unwrap()
    }

    #[test]
    fn test_no_rank() {
        let rank = get_rank(&profile(json!({})));
        assert_eq!(rank.rank, "None");
        assert_eq!(rank.rank_plus_color, "None");
        assert_eq!(rank.monthly_rank_color, "None");
    }

    #[test]
    fn test_normal_and_none_are_skipped() {
        let rank = get_rank(&profile(json!({
            "monthlyPackageRank": "NONE",
            "newPackageRank": "NORMAL",
            "packageRank": "VIP"
        })));
        assert_eq!(rank.rank, "VIP");
    }

    #[test]
    fn test_precedence_order() {
        let rank = get_rank(&profile(json!({
            "rank": "YOUTUBER",
            "newPackageRank": "MVP_PLUS"
        })));
        assert_eq!(rank.rank, "YOUTUBER");
    }

    #[test]
    fn test_superstar_with_colors() {
        let rank = get_rank(&profile(json!({
            "monthlyPackageRank": "SUPERSTAR",
            "rankPlusColor": "AQUA",
            "monthlyRankColor": "AQUA"
        })));
        assert_eq!(rank.rank, "MVP++");
        assert_eq!(rank.rank_plus_color, "AQUA");
        assert_eq!(rank.monthly_rank_color, "AQUA");
    }

    #[test]
    fn test_superstar_color_fallbacks() {
        let rank = get_rank(&profile(json!({"monthlyPackageRank": "SUPERSTAR"})));
        assert_eq!(rank.rank_plus_color, "RED");
        assert_eq!(rank.monthly_rank_color, "GOLD");
    }

    #[test]
    fn test_mvp_plus() {
        let rank = get_rank(&profile(json!({"newPackageRank": "MVP_PLUS"})));
        assert_eq!(rank.rank, "MVP+");
        assert_eq!(rank.rank_plus_color, "RED");
        assert_eq!(rank.monthly_rank_color, "None");
    }
}
