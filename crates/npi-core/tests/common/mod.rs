use npi_core::{Board, BoardBuilder};
use tempfile::TempDir;

/// Helper function to create a board backed by a temporary database
pub fn create_test_board() -> (TempDir, Board) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let board = BoardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create board");
    (temp_dir, board)
}

/// Reopens the board stored in `temp_dir`
pub fn reopen(temp_dir: &TempDir) -> Board {
    BoardBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to reopen board")
}
