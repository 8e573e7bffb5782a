// src/utils/params.rs

//! Coercion of query-string and path values.
//!
//! These are not validated up front: a value that cannot be turned into a
//! usable number is a server fault (500), unlike a malformed JSON body (400).

use crate::error::AppError;

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Row offset for the requested page. Absent or empty means page 1.
///
/// Pages below 1 produce a negative offset, which the store rejects.
pub fn page_offset(page: Option<&str>) -> Result<i64, AppError> {
    let page = match page.map(str::trim) {
        None | Some("") => 1,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|e| AppError::InternalServerError(format!("invalid page {:?}: {}", raw, e)))?,
    };

    page.checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .ok_or_else(|| AppError::InternalServerError(format!("page {} out of range", page)))
}

/// Integer id taken from a path segment.
pub fn path_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|e| AppError::InternalServerError(format!("invalid id {:?}: {}", raw, e)))
}
