use super::Report;
use crate::config::BAD_DAY_TOLERANCE;
use crate::db::models::Row;
use crate::error::Result;

const TOP_ARTICLES_QUERY: &str = "
    SELECT title, count(*) AS num
        FROM articles, log
        WHERE path LIKE '%' || slug
        GROUP BY articles.id
        ORDER BY num DESC
        LIMIT 3;";

/// `(title, views)` → `"<title>" - <views> views`
pub fn top_articles_line(row: &Row) -> Result<String> {
    Ok(format!("\"{}\" - {} views", row.text(0)?, row.integer(1)?))
}

pub fn top_articles() -> Result<Report> {
    Report::new("Top 3 articles", top_articles_line, TOP_ARTICLES_QUERY, &[])
}

const TOP_AUTHORS_QUERY: &str = "
    SELECT authors.name, count(*) AS num
        FROM articles, log, authors
        WHERE path LIKE '%' || slug
            AND author = authors.id
        GROUP BY authors.name
        ORDER BY num DESC;";

/// `(name, views)` → `<name> - <views> views`
pub fn top_authors_line(row: &Row) -> Result<String> {
    Ok(format!("{} - {} views", row.text(0)?, row.integer(1)?))
}

pub fn top_authors() -> Result<Report> {
    Report::new("Top authors", top_authors_line, TOP_AUTHORS_QUERY, &[])
}

// Daily request and error counts joined on the day; `{}` is the tolerance.
const BAD_DAYS_QUERY: &str = "
    SELECT *
        FROM
        (SELECT err_n_daily.day, (CAST(errs AS REAL) / CAST(rqs AS REAL)) AS err_f
            FROM
            (SELECT date(time) AS day, count(*) AS rqs
                FROM log
                GROUP BY day) AS rq_n_daily,
            (SELECT date(time) AS day, count(*) AS errs
                FROM log
                WHERE NOT status = '200 OK'
                GROUP BY day) AS err_n_daily
            WHERE err_n_daily.day = rq_n_daily.day) AS err_f_daily
        WHERE err_f > {}
        ORDER BY day;";

/// `(day, error fraction)` → `<Month DD, YYYY> - <percent>% errors`
pub fn bad_days_line(row: &Row) -> Result<String> {
    let day = row.date(0)?;
    let percent = (row.real(1)? * 100.0 * 100.0).round() / 100.0;
    Ok(format!(
        "{} - {}% errors",
        day.format("%B %d, %Y"),
        decimal(percent)
    ))
}

/// Shortest form that reads back as `value`, keeping at least one decimal
/// (`2.5`, `25.0`, `1.23`).
fn decimal(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

pub fn bad_days() -> Result<Report> {
    Report::new("Bad days", bad_days_line, BAD_DAYS_QUERY, &[&BAD_DAY_TOLERANCE])
}
