//! In-memory DuckDB view of an [`AnnualTable`].
//!
//! Rows are staged in a temp file with [`AnnualTable::write_ndjson`] and
//! read into the `annual_sun` table with an explicit schema:
//!
//! | column       | type    |
//! |--------------|---------|
//! | `city`       | VARCHAR |
//! | `date`       | DATE    |
//! | `lat`, `lng` | DOUBLE  |
//! | `sunrise`    | VARCHAR (`HH:MM:SS`, local) |
//! | `sunrise_hr` | DOUBLE  |
//! | `sunset`     | VARCHAR (`HH:MM:SS`, local) |
//! | `sunset_hr`  | DOUBLE  |

use std::collections::HashMap;
use chrono::NaiveDate;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{DaylightError, Result};
use crate::models::{AnnualTable, DaylightSummary};
use crate::sql_builder::SqlBuilder;

pub const TABLE_NAME: &str = "annual_sun";

const TABLE_COLUMNS: &str = "city VARCHAR, date DATE, lat DOUBLE, lng DOUBLE, \
     sunrise VARCHAR, sunrise_hr DOUBLE, sunset VARCHAR, sunset_hr DOUBLE";

/// Shape of the NDJSON lines written by [`AnnualTable::write_ndjson`].
const JSON_COLUMNS: &str = "{'city': 'VARCHAR', 'date': 'DATE', 'lat-lng': 'DOUBLE[]', \
     'sunrise': 'VARCHAR', 'sunrise_hr': 'DOUBLE', 'sunset': 'VARCHAR', 'sunset_hr': 'DOUBLE'}";

/// Flattens `lat-lng` into the table's `lat` / `lng` columns (lists are 1-based).
const SELECT_STAGED: &str = "city, date, \"lat-lng\"[1], \"lat-lng\"[2], \
     sunrise, sunrise_hr, sunset, sunset_hr";

/// Day length in hours, wrapping when local sunset reads before sunrise.
const DAY_LENGTH_EXPR: &str = "CASE WHEN sunset_hr < sunrise_hr \
     THEN sunset_hr + 24 - sunrise_hr ELSE sunset_hr - sunrise_hr END";

/// Wraps an in-memory DuckDB database holding one annual table.
pub struct TableStore {
    conn: DuckDbConnection,
}

impl TableStore {
    /// Open an empty store; [`load`](Self::load) fills it.
    pub fn open() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        conn.execute_batch(&format!(
            "CREATE TABLE {} ({})",
            TABLE_NAME, TABLE_COLUMNS
        ))?;
        Ok(Self { conn })
    }

    /// Open a store and load `table` into it.
    pub fn from_table(table: &AnnualTable) -> Result<Self> {
        let store = Self::open()?;
        store.load(table)?;
        Ok(store)
    }

    /// Replace the contents of `annual_sun` with `table`'s rows.
    pub fn load(&self, table: &AnnualTable) -> Result<()> {
        self.conn
            .execute_batch(&format!("DELETE FROM {}", TABLE_NAME))?;
        if table.is_empty() {
            return Ok(());
        }

        let mut file = NamedTempFile::new()?;
        table.write_ndjson(&mut file)?;

        // Use forward slashes for DuckDB compatibility
        let path = file.path().to_string_lossy().replace('\\', "/");
        self.conn.execute_batch(&format!(
            "INSERT INTO {} SELECT {} FROM read_json('{}', format='newline_delimited', columns={})",
            TABLE_NAME, SELECT_STAGED, path, JSON_COLUMNS
        ))?;
        info!(rows = table.len(), table = TABLE_NAME, "loaded annual table into DuckDB");
        Ok(())
    }

    /// Number of rows currently in `annual_sun`.
    pub fn row_count(&self) -> Result<i64> {
        let value = self.execute_scalar(&format!("SELECT COUNT(*) FROM {}", TABLE_NAME), &[])?;
        Ok(value.and_then(|v| v.as_i64()).unwrap_or(0))
    }

    /// Per-city day-length statistics, ordered by city name.
    pub fn daylight_summary(&self) -> Result<Vec<DaylightSummary>> {
        let from = format!(
            "(SELECT city, sunrise_hr, sunset_hr, {} AS day_length_hr FROM {}) t",
            DAY_LENGTH_EXPR, TABLE_NAME
        );
        let (sql, params) = SqlBuilder::new(&from)
            .select(&[
                "city",
                "COUNT(*) AS samples",
                "MIN(day_length_hr) AS min_day_length_hr",
                "MAX(day_length_hr) AS max_day_length_hr",
                "AVG(day_length_hr) AS avg_day_length_hr",
                "MIN(sunrise_hr) AS earliest_sunrise_hr",
                "MAX(sunset_hr) AS latest_sunset_hr",
            ])
            .group_by(&["city"])
            .order_by(&["city ASC"])
            .build();
        self.execute_into(&sql, &params)
    }

    /// One city's rows by ascending date, optionally bounded (inclusive).
    pub fn series(
        &self,
        city: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<Value>> {
        let mut qb = SqlBuilder::new(TABLE_NAME);
        qb.select(&[
            "city",
            "CAST(date AS VARCHAR) AS date",
            "lat",
            "lng",
            "sunrise",
            "sunrise_hr",
            "sunset",
            "sunset_hr",
        ]);
        qb.where_eq("city", city);
        qb.order_by(&["date ASC"]);

        let from_str = date_from.map(|d| d.to_string());
        if let Some(df) = &from_str {
            qb.where_date_gte("date", df);
        }
        let to_str = date_to.map(|d| d.to_string());
        if let Some(dt) = &to_str {
            qb.where_date_lte("date", dt);
        }

        let (sql, params) = qb.build();
        let rows = self.execute(&sql, &params)?;
        Ok(rows
            .into_iter()
            .map(|r| Value::Object(r.into_iter().collect()))
            .collect())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// DuckDB values are converted to `serde_json::Value`.
    pub fn execute(&self, sql: &str, params: &[String]) -> Result<Vec<HashMap<String, Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run
        let stmt_ref = rows_result.as_ref().ok_or_else(|| {
            DaylightError::InvalidArgument(format!("statement has no result set: {}", sql))
        })?;
        let column_names: Vec<String> = stmt_ref
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out = Vec::new();
        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = Value::Object(row.into_iter().collect());
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(&self, sql: &str, params: &[String]) -> Result<Option<Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Days from 0001-01-01 (CE) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> Value {
    match val {
        ValueRef::Null => Value::Null,
        ValueRef::Boolean(b) => Value::Bool(b),
        ValueRef::TinyInt(n) => Value::Number(n.into()),
        ValueRef::SmallInt(n) => Value::Number(n.into()),
        ValueRef::Int(n) => Value::Number(n.into()),
        ValueRef::BigInt(n) => Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // HugeInt may not fit in i64; fall back to string
            if let Ok(i) = i64::try_from(n) {
                Value::Number(i.into())
            } else {
                Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).to_string()),
        ValueRef::Date32(days) => NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),
        // Remaining types (Time, Timestamp, List, ...) are not produced by
        // the store's own queries
        _ => Value::Null,
    }
}
