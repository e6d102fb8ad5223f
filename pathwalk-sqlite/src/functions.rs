//! Scalar path functions.
//!
//! One SQL function per engine operation. Null propagation is a success
//! path, not an error: every function returns null for null inputs, with
//! the single pinned exception of `path_absolute`, which reports 0 for a
//! null path.

use pathwalk::{Error, Style};
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Result};

/// Hard cap applied to produced paths (`path_join`, `path_normalize`).
/// Exceeding it is an overflow error, never silent truncation.
const MAX_PATH_LEN: usize = 4096;

fn flags() -> FunctionFlags {
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC | FunctionFlags::SQLITE_INNOCUOUS
}

fn lib_err(err: Error) -> rusqlite::Error {
    rusqlite::Error::UserFunctionError(Box::new(err))
}

fn capped(path: String) -> Result<String> {
    if path.len() > MAX_PATH_LEN {
        return Err(lib_err(Error::Overflow {
            length: path.len(),
            max: MAX_PATH_LEN,
        }));
    }
    Ok(path)
}

fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

fn debug_report(style: Style) -> String {
    format!(
        "Version: {}\nSource: {}\nStyle: {}\nMax path length: {}",
        version(),
        env!("CARGO_PKG_REPOSITORY"),
        style,
        MAX_PATH_LEN
    )
}

pub(crate) fn register(conn: &Connection, style: Style) -> Result<()> {
    conn.create_scalar_function("path_version", 0, flags(), |_ctx| Ok(version()))?;

    conn.create_scalar_function("path_debug", 0, flags(), move |_ctx| {
        Ok(debug_report(style))
    })?;

    conn.create_scalar_function("path_absolute", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        // A null path reports 0, not null. The sibling predicates all
        // propagate null; this asymmetry is part of the contract.
        Ok(path.is_some_and(|p| pathwalk::is_absolute(&p, style)))
    })?;

    conn.create_scalar_function("path_relative", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.map(|p| pathwalk::is_relative(&p, style)))
    })?;

    conn.create_scalar_function("path_basename", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.and_then(|p| pathwalk::basename(&p, style).map(str::to_owned)))
    })?;

    conn.create_scalar_function("path_dirname", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.and_then(|p| pathwalk::dirname(&p, style).map(str::to_owned)))
    })?;

    conn.create_scalar_function("path_extension", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.and_then(|p| pathwalk::extension(&p, style).map(str::to_owned)))
    })?;

    conn.create_scalar_function("path_name", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.and_then(|p| pathwalk::name(&p, style).map(str::to_owned)))
    })?;

    conn.create_scalar_function("path_root", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        Ok(path.and_then(|p| pathwalk::root(&p, style).map(str::to_owned)))
    })?;

    conn.create_scalar_function("path_join", -1, flags(), move |ctx| {
        if ctx.len() < 2 {
            return Err(lib_err(Error::Argument {
                message: format!(
                    "path_join requires at least 2 paths, got {}",
                    ctx.len()
                ),
            }));
        }
        let mut parts: Vec<String> = Vec::with_capacity(ctx.len());
        for i in 0..ctx.len() {
            match ctx.get::<Option<String>>(i)? {
                Some(part) => parts.push(part),
                None => return Ok(None),
            }
        }
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        let joined = pathwalk::join(&refs, style).map_err(lib_err)?;
        capped(joined).map(Some)
    })?;

    conn.create_scalar_function("path_normalize", 1, flags(), move |ctx| {
        let path: Option<String> = ctx.get(0)?;
        let Some(path) = path else { return Ok(None) };
        let normalized = pathwalk::normalize(&path, style).map_err(lib_err)?;
        capped(normalized).map(Some)
    })?;

    conn.create_scalar_function("path_intersection", 2, flags(), move |ctx| {
        let (Some(base), Some(other)) =
            (ctx.get::<Option<String>>(0)?, ctx.get::<Option<String>>(1)?)
        else {
            return Ok(None);
        };
        let len = pathwalk::intersection(&base, &other);
        if len == 0 {
            return Ok(None);
        }
        Ok(Some(base[..len].to_owned()))
    })?;

    conn.create_scalar_function("path_segment_at", 2, flags(), move |ctx| {
        let (Some(path), Some(index)) =
            (ctx.get::<Option<String>>(0)?, ctx.get::<Option<i64>>(1)?)
        else {
            return Ok(None);
        };
        Ok(pathwalk::segment_at(&path, index, style).map(|s| s.as_str().to_owned()))
    })?;

    Ok(())
}
