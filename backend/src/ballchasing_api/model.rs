use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayGroup {
    pub id: String,
    pub name: String,
    pub link: Option<String>,
    pub created: DateTime<FixedOffset>,
    pub status: Option<String>,
    pub player_identification: Option<String>,
    pub team_identification: Option<String>,
    #[serde(default)]
    pub shared: bool,
    pub creator: Option<Creator>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<ReplayPlayer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<ReplayTeam>,
}

/// Entry of the group listing, only used to find the children of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: Option<String>,
    pub created: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct GroupListing {
    #[serde(default)]
    pub list: Vec<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub steam_id: Option<String>,
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayPlayer {
    pub platform: String,
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cumulative: Cumulative,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_average: GameAverage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayTeam {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<ReplayPlayer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cumulative: Cumulative,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_average: GameAverage,
}

/// Totals over every game of the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cumulative {
    pub games: Option<i32>,
    pub wins: Option<i32>,
    pub win_percentage: Option<f64>,
    pub play_duration: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: Core,
    #[serde(default, deserialize_with = "null_as_default")]
    pub boost: Boost,
    #[serde(default, deserialize_with = "null_as_default")]
    pub movement: Movement,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positioning: Positioning,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demo: Demo,
}

/// Per game means of the same blocks as [`Cumulative`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameAverage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: Core,
    #[serde(default, deserialize_with = "null_as_default")]
    pub boost: Boost,
    #[serde(default, deserialize_with = "null_as_default")]
    pub movement: Movement,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positioning: Positioning,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demo: Demo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Core {
    pub shots: Option<f64>,
    pub shots_against: Option<f64>,
    pub goals: Option<f64>,
    pub goals_against: Option<f64>,
    pub saves: Option<f64>,
    pub assists: Option<f64>,
    pub score: Option<f64>,
    pub mvp: Option<f64>,
    pub shooting_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub bpm: Option<f64>,
    pub bcpm: Option<f64>,
    pub avg_amount: Option<f64>,
    pub amount_collected: Option<f64>,
    pub amount_stolen: Option<f64>,
    pub amount_collected_big: Option<f64>,
    pub amount_stolen_big: Option<f64>,
    pub amount_collected_small: Option<f64>,
    pub amount_stolen_small: Option<f64>,
    pub count_collected_big: Option<f64>,
    pub count_stolen_big: Option<f64>,
    pub count_collected_small: Option<f64>,
    pub count_stolen_small: Option<f64>,
    pub time_zero_boost: Option<f64>,
    pub percent_zero_boost: Option<f64>,
    pub time_full_boost: Option<f64>,
    pub percent_full_boost: Option<f64>,
    pub amount_overfill: Option<f64>,
    pub amount_overfill_stolen: Option<f64>,
    pub amount_used_while_supersonic: Option<f64>,
    pub time_boost_0_25: Option<f64>,
    pub time_boost_25_50: Option<f64>,
    pub time_boost_50_75: Option<f64>,
    pub time_boost_75_100: Option<f64>,
    pub percent_boost_0_25: Option<f64>,
    pub percent_boost_25_50: Option<f64>,
    pub percent_boost_50_75: Option<f64>,
    pub percent_boost_75_100: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub avg_speed: Option<f64>,
    pub total_distance: Option<f64>,
    pub time_supersonic_speed: Option<f64>,
    pub time_boost_speed: Option<f64>,
    pub time_slow_speed: Option<f64>,
    pub time_ground: Option<f64>,
    pub time_low_air: Option<f64>,
    pub time_high_air: Option<f64>,
    pub time_powerslide: Option<f64>,
    pub count_powerslide: Option<f64>,
    pub avg_powerslide_duration: Option<f64>,
    pub avg_speed_percentage: Option<f64>,
    pub percent_slow_speed: Option<f64>,
    pub percent_boost_speed: Option<f64>,
    pub percent_supersonic_speed: Option<f64>,
    pub percent_ground: Option<f64>,
    pub percent_low_air: Option<f64>,
    pub percent_high_air: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Positioning {
    pub avg_distance_to_ball: Option<f64>,
    pub avg_distance_to_ball_possession: Option<f64>,
    pub avg_distance_to_ball_no_possession: Option<f64>,
    pub time_defensive_third: Option<f64>,
    pub time_neutral_third: Option<f64>,
    pub time_offensive_third: Option<f64>,
    pub time_defensive_half: Option<f64>,
    pub time_offensive_half: Option<f64>,
    pub time_behind_ball: Option<f64>,
    pub time_infront_ball: Option<f64>,
    pub time_most_back: Option<f64>,
    pub time_most_forward: Option<f64>,
    pub goals_against_while_last_defender: Option<f64>,
    pub time_closest_to_ball: Option<f64>,
    pub time_farthest_from_ball: Option<f64>,
    pub percent_defensive_third: Option<f64>,
    pub percent_offensive_third: Option<f64>,
    pub percent_neutral_third: Option<f64>,
    pub percent_defensive_half: Option<f64>,
    pub percent_offensive_half: Option<f64>,
    pub percent_behind_ball: Option<f64>,
    pub percent_infront_ball: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub inflicted: Option<f64>,
    pub taken: Option<f64>,
}
