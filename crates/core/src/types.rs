/// All primary keys are SQLite `INTEGER PRIMARY KEY` (64-bit rowids).
pub type DbId = i64;
