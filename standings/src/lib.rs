//! Leaderboard math that does not care where the rows come from.
//!
//! Everything in here works on plain values, the backend is responsible for
//! loading rows from the database and mapping the results into the API types.

pub mod daily;
pub mod normalize;
