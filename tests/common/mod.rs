use std::path::{Path, PathBuf};

use assert_cmd::Command;
use rusqlite::{Connection, params};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub db: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        let db = make_fixture_db(&dir);
        Self { _tmp: tmp, dir, db }
    }

    /// The binary, run inside the temp dir against the fixture database.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("logs_analysis").expect("binary built");
        cmd.current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .env_remove("LOGS_ANALYSIS_DB")
            .arg("--db")
            .arg(&self.db);
        cmd
    }
}

fn make_fixture_db(dir: &Path) -> PathBuf {
    let path = dir.join("news.db");
    let conn = Connection::open(&path).expect("create fixture db");
    conn.execute_batch(
        "CREATE TABLE authors (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE articles (
             id INTEGER PRIMARY KEY,
             author INTEGER NOT NULL,
             title TEXT NOT NULL,
             slug TEXT NOT NULL
         );
         CREATE TABLE log (path TEXT, time TEXT, status TEXT);
         INSERT INTO authors VALUES (1, 'Ursula La Multa'), (2, 'Markoff Chaney');
         INSERT INTO articles VALUES
             (1, 1, 'Balloon goons doomed', 'balloon-goons-doomed'),
             (2, 2, 'There are a lot of bears', 'so-many-bears');",
    )
    .expect("create fixture schema");

    let mut insert = conn
        .prepare("INSERT INTO log (path, time, status) VALUES (?1, ?2, ?3)")
        .expect("prepare insert");
    let rows = [
        ("/article/so-many-bears", "2016-07-01 08:00:00", "200 OK", 4),
        ("/article/balloon-goons-doomed", "2016-07-01 09:00:00", "200 OK", 2),
        ("/article/nope", "2016-07-03 10:00:00", "404 NOT FOUND", 1),
        ("/", "2016-07-03 10:00:00", "200 OK", 1),
    ];
    for (path, time, status, n) in rows {
        for _ in 0..n {
            insert
                .execute(params![path, time, status])
                .expect("insert log row");
        }
    }
    path
}
