use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{AppError, Result};

/// Name of the news database; resolves to `news.db`.
pub const DB_NAME: &str = "news";

/// Overrides the database location when set.
pub const DB_PATH_ENV: &str = "LOGS_ANALYSIS_DB";

/// Days with an error fraction above this are reported as bad days.
pub const BAD_DAY_TOLERANCE: f64 = 0.01;

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "udacity", "logs-analysis")
        .ok_or_else(|| AppError::Config("Could not determine home directory".into()))
}

/// Resolve the database file: explicit path, then `LOGS_ANALYSIS_DB`, then
/// the platform data directory.
pub fn db_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_db_path(explicit, std::env::var_os(DB_PATH_ENV), || {
        Ok(project_dirs()?.data_dir().to_path_buf())
    })
}

fn resolve_db_path(
    explicit: Option<PathBuf>,
    from_env: Option<OsString>,
    data_dir: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(db_file_in(&data_dir()?))
}

pub fn db_file_in(dir: &Path) -> PathBuf {
    dir.join(format!("{DB_NAME}.db"))
}
