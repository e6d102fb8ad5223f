//! The `path_segments` table-valued function.
//!
//! An eponymous virtual table yielding one row per segment of a path, in
//! forward traversal order:
//!
//! ```sql
//! SELECT rowid, kind, segment FROM path_segments('/home/user/.config');
//! ```
//!
//! The hidden `path` column must be constrained with an equality filter
//! supplying the path; its absence is a planning-time error. Rows carry a
//! rowid starting at 1 and a `kind` of `normal`, `current`, or `back`.

use std::marker::PhantomData;
use std::os::raw::c_int;

use pathwalk::{SegmentCursor, SegmentKind, Style};
use rusqlite::ffi;
use rusqlite::types::Null;
use rusqlite::vtab::{
    eponymous_only_module, Context, IndexConstraintOp, IndexInfo, VTab, VTabConnection,
    Filters, VTabCursor,
};
use rusqlite::{Connection, Error, Result};

const COLUMN_PATH: c_int = 0;
const COLUMN_KIND: c_int = 1;
const COLUMN_SEGMENT: c_int = 2;

pub(crate) fn register(conn: &Connection, style: Style) -> Result<()> {
    conn.create_module(
        "path_segments",
        eponymous_only_module::<PathSegmentsTab>(),
        Some(style),
    )
}

/// The virtual table definition; carries the style captured at
/// registration.
#[repr(C)]
struct PathSegmentsTab {
    /// Base class. Must be first.
    base: ffi::sqlite3_vtab,
    style: Style,
}

unsafe impl<'vtab> VTab<'vtab> for PathSegmentsTab {
    type Aux = Style;
    type Cursor = PathSegmentsCursor<'vtab>;

    fn connect(
        _db: &mut VTabConnection,
        aux: Option<&Style>,
        _args: &[&[u8]],
    ) -> Result<(String, Self)> {
        let vtab = Self {
            base: ffi::sqlite3_vtab::default(),
            style: aux.copied().unwrap_or_default(),
        };
        Ok((
            "CREATE TABLE x(path TEXT HIDDEN, kind TEXT, segment TEXT)".to_owned(),
            vtab,
        ))
    }

    fn best_index(&self, info: &mut IndexInfo) -> Result<()> {
        let mut path_constraint = None;
        for (i, constraint) in info.constraints().enumerate() {
            if constraint.column() == COLUMN_PATH
                && constraint.is_usable()
                && constraint.operator() == IndexConstraintOp::SQLITE_INDEX_CONSTRAINT_EQ
            {
                path_constraint = Some(i);
            }
        }
        let Some(path_constraint) = path_constraint else {
            return Err(Error::ModuleError("path argument is required".to_owned()));
        };
        let mut usage = info.constraint_usage(path_constraint);
        usage.set_argv_index(1);
        usage.set_omit(true);
        info.set_estimated_cost(100_000.0);
        info.set_estimated_rows(100_000);
        Ok(())
    }

    fn open(&'vtab mut self) -> Result<PathSegmentsCursor<'vtab>> {
        Ok(PathSegmentsCursor::new(self.style))
    }
}

/// One buffered output row.
struct Row {
    row_id: i64,
    kind: SegmentKind,
    segment: String,
}

/// Cursor over the segments of one filtered path.
///
/// The rows are produced through the engine's `SegmentCursor` when the
/// filter value arrives and buffered owned; the borrowing cursor cannot be
/// stored next to the owned path string it would borrow from.
#[repr(C)]
struct PathSegmentsCursor<'vtab> {
    /// Base class. Must be first.
    base: ffi::sqlite3_vtab_cursor,
    style: Style,
    rows: Vec<Row>,
    pos: usize,
    phantom: PhantomData<&'vtab PathSegmentsTab>,
}

impl PathSegmentsCursor<'_> {
    fn new(style: Style) -> Self {
        Self {
            base: ffi::sqlite3_vtab_cursor::default(),
            style,
            rows: Vec::new(),
            pos: 0,
            phantom: PhantomData,
        }
    }
}

unsafe impl VTabCursor for PathSegmentsCursor<'_> {
    fn filter(
        &mut self,
        _idx_num: c_int,
        _idx_str: Option<&str>,
        args: &Filters<'_>,
    ) -> Result<()> {
        let path: Option<String> = args.get(0)?;
        self.rows.clear();
        self.pos = 0;
        if let Some(path) = path {
            let mut cursor = SegmentCursor::open(&path, self.style);
            while let Some(row) = cursor.current() {
                self.rows.push(Row {
                    row_id: row.row_id,
                    kind: row.kind,
                    segment: row.text.to_owned(),
                });
                cursor.advance();
            }
        }
        Ok(())
    }

    fn next(&mut self) -> Result<()> {
        self.pos += 1;
        Ok(())
    }

    fn eof(&self) -> bool {
        self.pos >= self.rows.len()
    }

    fn column(&self, ctx: &mut Context, col: c_int) -> Result<()> {
        let Some(row) = self.rows.get(self.pos) else {
            return Ok(());
        };
        match col {
            // The filter constraint is consumed with omit set, so the
            // hidden column is never re-checked; it reads as null.
            COLUMN_PATH => ctx.set_result(&Null),
            COLUMN_KIND => ctx.set_result(&row.kind.as_str()),
            COLUMN_SEGMENT => ctx.set_result(&row.segment),
            _ => Ok(()),
        }
    }

    fn rowid(&self) -> Result<i64> {
        Ok(self.rows.get(self.pos).map_or(0, |row| row.row_id))
    }
}
