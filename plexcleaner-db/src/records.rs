//! The movie query and conversion of its rows into [`RawRecord`]s.

use plexcleaner_core::{RawRecord, RecordError};
use rusqlite::types::Value;
use rusqlite::{Connection, Row, params};

use crate::schema::DbError;

/// One row per movie, columns in [`RawRecord`] order.
///
/// `part_count` is the number of media parts Plex holds for the movie and
/// serves as the duplicate counter.
pub const MOVIE_QUERY: &str = "
SELECT mdi.id, mdi.title, mp.file, mdi.year, mp.size, mi.frames_per_second,
       mdi.guid, COUNT(mp.id) AS part_count, mdi.user_thumb_url, sl.root_path,
       mdi.studio, mdi.tags_star
FROM metadata_items mdi
JOIN media_items mi ON mi.metadata_item_id = mdi.id
JOIN media_parts mp ON mp.media_item_id = mi.id
JOIN section_locations sl ON sl.id = mi.section_location_id
WHERE mdi.metadata_type = 1
GROUP BY mdi.id
ORDER BY mdi.id
LIMIT ?1";

/// Run the movie query. Rows that cannot be converted come back as
/// `Err(RecordError)` in place; only SQL failures abort the call.
pub fn fetch_records(
    conn: &Connection,
    limit: Option<usize>,
) -> Result<Vec<Result<RawRecord, RecordError>>, DbError> {
    // SQLite treats a negative LIMIT as "no limit"
    let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));
    let mut stmt = conn.prepare(MOVIE_QUERY)?;
    let rows = stmt.query_map(params![limit], row_to_record)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn row_to_record(row: &Row) -> rusqlite::Result<Result<RawRecord, RecordError>> {
    let id: i64 = row.get(0)?;
    let values = (1..12)
        .map(|i| row.get::<_, Value>(i))
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(convert(id, values))
}

fn convert(id: i64, values: Vec<Value>) -> Result<RawRecord, RecordError> {
    let mut values = values.into_iter();
    let mut next = move || values.next().unwrap_or(Value::Null);

    let title = text(next()).ok_or_else(|| RecordError::missing(id, "title"))?;
    let original_file = text(next()).ok_or_else(|| RecordError::missing(id, "file"))?;
    let year = year(id, next())?;
    let size = size(id, next())?;
    let frame_rate = match next() {
        Value::Real(f) => f,
        Value::Integer(i) => i as f64,
        _ => 0.0,
    };
    let guid = text(next()).ok_or_else(|| RecordError::missing(id, "guid"))?;
    let duplicate_count = match next() {
        Value::Integer(n) => u32::try_from(n)
            .map_err(|_| RecordError::invalid(id, "part_count", n.to_string()))?,
        _ => return Err(RecordError::missing(id, "part_count")),
    };
    let jacket = text(next()).unwrap_or_default();
    let library_root = text(next()).ok_or_else(|| RecordError::missing(id, "root_path"))?;
    let studio = text(next());
    let cast_tags = text(next());

    Ok(RawRecord {
        id,
        title,
        original_file,
        year,
        size,
        frame_rate,
        guid,
        duplicate_count,
        jacket,
        library_root,
        studio,
        cast_tags,
    })
}

/// Any scalar as text; NULL and blobs are absent.
fn text(value: Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s),
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Null | Value::Blob(_) => None,
    }
}

fn year(id: i64, value: Value) -> Result<Option<String>, RecordError> {
    match value {
        Value::Null => Ok(None),
        Value::Integer(y) => Ok(Some(y.to_string())),
        Value::Text(y) => Ok(Some(y.trim().to_string()).filter(|y| !y.is_empty())),
        other => Err(RecordError::invalid(id, "year", format!("{other:?}"))),
    }
}

fn size(id: i64, value: Value) -> Result<u64, RecordError> {
    match value {
        Value::Integer(n) => {
            u64::try_from(n).map_err(|_| RecordError::invalid(id, "size", n.to_string()))
        }
        Value::Null => Err(RecordError::missing(id, "size")),
        other => Err(RecordError::invalid(id, "size", format!("{other:?}"))),
    }
}
