use diesel::prelude::*;
use diesel::query_builder::{QueryFragment, SqlQuery};
use diesel_async::RunQueryDsl;

use super::{Crosswalk, Sequence, Storage, Table};
use crate::error::DatabaseError;
use crate::flatten::{CumulativeBatch, GameAverageBatch};
use crate::models;
use crate::schema;

/// Rows per `INSERT` statement, keeps the widest stat table well below the
/// bind parameter limit.
const INSERT_CHUNK: usize = 1000;

macro_rules! insert_chunked {
    ($con:expr, $table:expr, $rows:expr) => {{
        let mut inserted = 0;
        for chunk in $rows.chunks(INSERT_CHUNK) {
            inserted += diesel::dsl::insert_into($table)
                .values(chunk)
                .execute($con)
                .await?;
        }
        inserted
    }};
}

fn truncate_statement(table: Table) -> SqlQuery {
    diesel::sql_query(format!("TRUNCATE TABLE {}", table.name()))
}

/// Draws `n` values of the sequence in one round trip.
fn next_ids_query(
    sequence: Sequence,
    n: usize,
) -> impl QueryFragment<diesel::pg::Pg>
       + diesel_async::methods::LoadQuery<'static, diesel_async::AsyncPgConnection, Value>
       + Send {
    diesel::sql_query("SELECT nextval($1::regclass) AS value FROM generate_series(1::bigint, $2)")
        .bind::<diesel::sql_types::Text, _>(sequence.name())
        .bind::<diesel::sql_types::BigInt, _>(n as i64)
}

// Child groups only, players matched on platform and id.
macro_rules! daily_scores_query {
    () => {{
        use schema::{cumulative_cores, cumulatives, groups, players};

        groups::table
            .inner_join(cumulatives::table.on(cumulatives::group_id.eq(groups::id)))
            .inner_join(cumulative_cores::table.on(cumulative_cores::id.eq(cumulatives::core_id)))
            .inner_join(
                players::table.on(players::id
                    .eq(cumulatives::player_id)
                    .and(players::platform.eq(cumulatives::player_platform))),
            )
            .filter(groups::parent_group_id.is_not_null())
            .order((groups::created.asc(), cumulative_cores::score.desc().nulls_last()))
            .select((
                groups::name,
                groups::created,
                players::name,
                cumulatives::wins,
                cumulative_cores::score,
                cumulative_cores::goals,
                cumulative_cores::shots,
                cumulative_cores::shooting_percentage,
                cumulative_cores::assists,
                cumulative_cores::saves,
            ))
    }};
}

// Root groups only, players joined to the team that carries their replay
// team id.
macro_rules! overall_scores_query {
    () => {{
        use schema::{cumulative_cores, cumulative_demos, cumulatives, groups, players, teams};

        groups::table
            .inner_join(cumulatives::table.on(cumulatives::group_id.eq(groups::id)))
            .inner_join(cumulative_cores::table.on(cumulative_cores::id.eq(cumulatives::core_id)))
            .inner_join(cumulative_demos::table.on(cumulative_demos::id.eq(cumulatives::demo_id)))
            .inner_join(
                players::table.on(players::id
                    .eq(cumulatives::player_id)
                    .and(players::platform.eq(cumulatives::player_platform))),
            )
            .inner_join(teams::table.on(teams::bc_team_id.eq(players::team_id)))
            .filter(groups::parent_group_id.is_null())
            .order(cumulative_cores::score.desc().nulls_last())
            .select((
                teams::id,
                teams::name,
                players::name,
                cumulatives::wins,
                cumulative_cores::score,
                cumulative_cores::goals,
                cumulative_cores::shots,
                cumulative_cores::shooting_percentage,
                cumulative_cores::assists,
                cumulative_cores::saves,
                cumulative_demos::taken,
            ))
    }};
}

#[derive(QueryableByName)]
struct Value {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    value: i64,
}

/// Every method opens its own connection and runs its statements on it.
#[derive(Debug, Clone)]
pub struct PgStore {
    database_url: String,
}

impl PgStore {
    pub fn new<IS>(database_url: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            database_url: database_url.into(),
        }
    }

    async fn connection(&self) -> Result<diesel_async::AsyncPgConnection, DatabaseError> {
        crate::db_connection(&self.database_url).await
    }
}

#[async_trait::async_trait]
impl Storage for PgStore {
    async fn record_task_status(&self, status: models::NewTaskStatus) -> Result<(), DatabaseError> {
        let query = diesel::dsl::insert_into(schema::background_tasks::dsl::background_tasks).values(status);
        tracing::trace!(?query, "Record task status");

        query.execute(&mut self.connection().await?).await?;
        Ok(())
    }

    async fn task_history(&self, task_id: uuid::Uuid) -> Result<Vec<models::TaskStatusRecord>, DatabaseError> {
        let query = schema::background_tasks::dsl::background_tasks
            .filter(schema::background_tasks::dsl::task_id.eq(task_id))
            .order(schema::background_tasks::dsl::id.asc())
            .select(models::TaskStatusRecord::as_select());

        Ok(query.load(&mut self.connection().await?).await?)
    }

    async fn truncate(&self, table: Table) -> Result<(), DatabaseError> {
        truncate_statement(table)
            .execute(&mut self.connection().await?)
            .await?;
        Ok(())
    }

    async fn next_ids(&self, sequence: Sequence, n: usize) -> Result<Vec<i64>, DatabaseError> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let rows: Vec<Value> = next_ids_query(sequence, n)
            .load(&mut self.connection().await?)
            .await?;

        if rows.len() != n {
            return Err(DatabaseError::Sequence {
                sequence: sequence.name(),
                expected: n,
                got: rows.len(),
            });
        }

        let mut ids: Vec<i64> = rows.into_iter().map(|row| row.value).collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn count(&self, table: Table) -> Result<usize, DatabaseError> {
        let row: Value = diesel::sql_query(format!("SELECT COUNT(*) AS value FROM {}", table.name()))
            .get_result(&mut self.connection().await?)
            .await?;

        Ok(row.value as usize)
    }

    async fn insert_teams(&self, rows: &[models::Team]) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;
        Ok(insert_chunked!(&mut con, schema::teams::table, rows))
    }

    async fn insert_matches(&self, rows: &[models::Match]) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;
        Ok(insert_chunked!(&mut con, schema::matches::table, rows))
    }

    async fn insert_match_opponents(&self, rows: &[models::MatchOpponent]) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;
        Ok(insert_chunked!(&mut con, schema::match_opponents::table, rows))
    }

    async fn insert_groups(&self, rows: &[models::Group]) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;
        Ok(insert_chunked!(&mut con, schema::groups::table, rows))
    }

    async fn insert_players(&self, rows: &[models::Player]) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;
        Ok(insert_chunked!(&mut con, schema::players::table, rows))
    }

    async fn insert_cumulatives(&self, batch: &CumulativeBatch) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;

        insert_chunked!(&mut con, schema::cumulative_cores::table, batch.cores);
        insert_chunked!(&mut con, schema::cumulative_boosts::table, batch.boosts);
        insert_chunked!(&mut con, schema::cumulative_movements::table, batch.movements);
        insert_chunked!(&mut con, schema::cumulative_positionings::table, batch.positionings);
        insert_chunked!(&mut con, schema::cumulative_demos::table, batch.demos);

        Ok(insert_chunked!(&mut con, schema::cumulatives::table, batch.base))
    }

    async fn insert_game_averages(&self, batch: &GameAverageBatch) -> Result<usize, DatabaseError> {
        let mut con = self.connection().await?;

        insert_chunked!(&mut con, schema::game_average_cores::table, batch.cores);
        insert_chunked!(&mut con, schema::game_average_boosts::table, batch.boosts);
        insert_chunked!(&mut con, schema::game_average_movements::table, batch.movements);
        insert_chunked!(&mut con, schema::game_average_positionings::table, batch.positionings);
        insert_chunked!(&mut con, schema::game_average_demos::table, batch.demos);

        Ok(insert_chunked!(&mut con, schema::game_averages::table, batch.base))
    }

    async fn daily_score_rows(&self) -> Result<Vec<models::DailyScoreRow>, DatabaseError> {
        let query = daily_scores_query!();
        tracing::trace!(query = %diesel::debug_query::<diesel::pg::Pg, _>(&query), "Daily scores");

        Ok(query.load(&mut self.connection().await?).await?)
    }

    async fn overall_score_rows(&self) -> Result<Vec<models::OverallScoreRow>, DatabaseError> {
        let query = overall_scores_query!();
        tracing::trace!(query = %diesel::debug_query::<diesel::pg::Pg, _>(&query), "Overall scores");

        Ok(query.load(&mut self.connection().await?).await?)
    }

    async fn metric_maxima(&self) -> Result<models::MetricMaxima, DatabaseError> {
        use diesel::dsl::max;
        use schema::{cumulative_cores, cumulative_demos, cumulatives};

        let mut con = self.connection().await?;

        let (score, goals, shots, shooting_percentage, assists, saves) = cumulative_cores::table
            .select((
                max(cumulative_cores::score),
                max(cumulative_cores::goals),
                max(cumulative_cores::shots),
                max(cumulative_cores::shooting_percentage),
                max(cumulative_cores::assists),
                max(cumulative_cores::saves),
            ))
            .get_result::<(
                Option<f64>,
                Option<f64>,
                Option<f64>,
                Option<f64>,
                Option<f64>,
                Option<f64>,
            )>(&mut con)
            .await?;
        let wins: Option<i32> = cumulatives::table
            .select(max(cumulatives::wins))
            .get_result(&mut con)
            .await?;
        let demos: Option<f64> = cumulative_demos::table
            .select(max(cumulative_demos::taken))
            .get_result(&mut con)
            .await?;

        Ok(models::MetricMaxima {
            wins: wins.map(f64::from),
            score,
            goals,
            shots,
            shooting_percentage,
            assists,
            saves,
            demos,
        })
    }

    async fn stream_slots(&self) -> Result<Vec<models::StreamSlot>, DatabaseError> {
        let query = schema::stream_slots::dsl::stream_slots
            .order(schema::stream_slots::dsl::slot.asc())
            .select(models::StreamSlot::as_select());

        Ok(query.load(&mut self.connection().await?).await?)
    }

    async fn assign_stream_slot(&self, slot: models::StreamSlot) -> Result<(), DatabaseError> {
        let query = diesel::dsl::insert_into(schema::stream_slots::dsl::stream_slots)
            .values(&slot)
            .on_conflict(schema::stream_slots::dsl::slot)
            .do_update()
            .set(schema::stream_slots::dsl::team_id.eq(&slot.team_id));
        tracing::debug!("Running Query: {:?}", query);

        query.execute(&mut self.connection().await?).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Crosswalk for PgStore {
    async fn bc_team_id(&self, participant_id: &str) -> Result<Option<String>, DatabaseError> {
        let query = schema::cnv_teams::dsl::cnv_teams
            .filter(schema::cnv_teams::dsl::toornament_id.eq(participant_id))
            .select(schema::cnv_teams::dsl::ballchasing_id);

        Ok(query
            .first::<String>(&mut self.connection().await?)
            .await
            .optional()?)
    }
}
