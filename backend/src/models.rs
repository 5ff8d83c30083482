use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Team {
    pub id: String,
    pub name: String,
    pub bc_team_id: Option<String>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Match {
    pub id: String,
    pub status: String,
    pub stage_id: String,
    pub group_id: String,
    pub round_id: Option<String>,
    pub number: i32,
    pub match_type: String,
    pub scheduled_datetime: Option<chrono::DateTime<chrono::Utc>>,
    pub public_note: Option<String>,
    pub private_note: Option<String>,
    pub played_at: Option<chrono::DateTime<chrono::Utc>>,
    pub report_closed: bool,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::match_opponents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchOpponent {
    pub match_id: String,
    pub number: i32,
    pub position: i32,
    pub result: Option<String>,
    pub rank: Option<i32>,
    pub forfeit: bool,
    pub score: Option<i32>,
    pub participant_id: Option<String>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Group {
    pub id: String,
    pub name: String,
    pub parent_group_id: Option<String>,
    pub created: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Player {
    pub platform: String,
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::cumulatives)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cumulative {
    pub id: i64,
    pub group_id: String,
    pub player_platform: String,
    pub player_id: String,
    pub games: Option<i32>,
    pub wins: Option<i32>,
    pub win_percentage: Option<f64>,
    pub play_duration: Option<f64>,
    pub core_id: i64,
    pub boost_id: i64,
    pub movement_id: i64,
    pub positioning_id: i64,
    pub demo_id: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::game_averages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameAverage {
    pub id: i64,
    pub group_id: String,
    pub player_platform: String,
    pub player_id: String,
    pub core_id: i64,
    pub boost_id: i64,
    pub movement_id: i64,
    pub positioning_id: i64,
    pub demo_id: i64,
}

// The cumulative and game average sub-tables share their columns, only the
// table differs.
macro_rules! stat_rows {
    ($block:ty, [$($row:ident => $table:ident),+ $(,)?], $fields:tt) => {
        $(
            stat_row!($block, $row, $table, $fields);
        )+
    };
}

macro_rules! stat_row {
    ($block:ty, $row:ident, $table:ident, { $($field:ident),+ $(,)? }) => {
        #[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
        #[diesel(table_name = crate::schema::$table)]
        #[diesel(check_for_backend(diesel::pg::Pg))]
        pub struct $row {
            pub id: i64,
            $(pub $field: Option<f64>,)+
        }

        impl $row {
            pub fn from_block(id: i64, block: &$block) -> Self {
                Self {
                    id,
                    $($field: block.$field,)+
                }
            }
        }
    };
}

stat_rows!(
    crate::ballchasing_api::Core,
    [CumulativeCore => cumulative_cores, GameAverageCore => game_average_cores],
    {
        shots,
        shots_against,
        goals,
        goals_against,
        saves,
        assists,
        score,
        mvp,
        shooting_percentage,
    }
);

stat_rows!(
    crate::ballchasing_api::Boost,
    [CumulativeBoost => cumulative_boosts, GameAverageBoost => game_average_boosts],
    {
        bpm,
        bcpm,
        avg_amount,
        amount_collected,
        amount_stolen,
        amount_collected_big,
        amount_stolen_big,
        amount_collected_small,
        amount_stolen_small,
        count_collected_big,
        count_stolen_big,
        count_collected_small,
        count_stolen_small,
        time_zero_boost,
        percent_zero_boost,
        time_full_boost,
        percent_full_boost,
        amount_overfill,
        amount_overfill_stolen,
        amount_used_while_supersonic,
        time_boost_0_25,
        time_boost_25_50,
        time_boost_50_75,
        time_boost_75_100,
        percent_boost_0_25,
        percent_boost_25_50,
        percent_boost_50_75,
        percent_boost_75_100,
    }
);

stat_rows!(
    crate::ballchasing_api::Movement,
    [CumulativeMovement => cumulative_movements, GameAverageMovement => game_average_movements],
    {
        avg_speed,
        total_distance,
        time_supersonic_speed,
        time_boost_speed,
        time_slow_speed,
        time_ground,
        time_low_air,
        time_high_air,
        time_powerslide,
        count_powerslide,
        avg_powerslide_duration,
        avg_speed_percentage,
        percent_slow_speed,
        percent_boost_speed,
        percent_supersonic_speed,
        percent_ground,
        percent_low_air,
        percent_high_air,
    }
);

stat_rows!(
    crate::ballchasing_api::Positioning,
    [CumulativePositioning => cumulative_positionings, GameAveragePositioning => game_average_positionings],
    {
        avg_distance_to_ball,
        avg_distance_to_ball_possession,
        avg_distance_to_ball_no_possession,
        time_defensive_third,
        time_neutral_third,
        time_offensive_third,
        time_defensive_half,
        time_offensive_half,
        time_behind_ball,
        time_infront_ball,
        time_most_back,
        time_most_forward,
        goals_against_while_last_defender,
        time_closest_to_ball,
        time_farthest_from_ball,
        percent_defensive_third,
        percent_offensive_third,
        percent_neutral_third,
        percent_defensive_half,
        percent_offensive_half,
        percent_behind_ball,
        percent_infront_ball,
    }
);

stat_rows!(
    crate::ballchasing_api::Demo,
    [CumulativeDemo => cumulative_demos, GameAverageDemo => game_average_demos],
    { inflicted, taken }
);

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::background_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTaskStatus {
    pub task_id: uuid::Uuid,
    pub source: String,
    pub state: String,
    pub status: String,
    pub error: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::background_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskStatusRecord {
    pub id: i64,
    pub task_id: uuid::Uuid,
    pub source: String,
    pub state: String,
    pub status: String,
    pub error: Option<serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::stream_slots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StreamSlot {
    pub slot: i32,
    pub team_id: Option<String>,
}

/// One player in one child group, as shown on the daily leaderboard.
#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct DailyScoreRow {
    pub group_name: String,
    pub group_created: chrono::DateTime<chrono::Utc>,
    pub player_name: String,
    pub wins: Option<i32>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
}

/// One player in a root group, joined to the tournament team.
#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct OverallScoreRow {
    pub team_id: String,
    pub team_name: String,
    pub player_name: String,
    pub wins: Option<i32>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
    pub demos: Option<f64>,
}

/// The largest stored value of every overall leaderboard metric, over all
/// groups and players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricMaxima {
    pub wins: Option<f64>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
    pub demos: Option<f64>,
}
