//! Integration tests for the durability contract.
//!
//! Verifies the persist/load round trip, that failed mutations leave the
//! on-disk file byte-for-byte unchanged, and that an interrupted write (a
//! leftover temporary file) never shadows the last committed state.

use camino::Utf8PathBuf;
use ralaunch_data::{DataDirPaths, GameItem, GameRepository, PathResolver, StoreError};
use tempfile::TempDir;

fn create_test_paths() -> (DataDirPaths, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (DataDirPaths::new(&data_dir), temp_dir)
}

fn game(id: &str) -> GameItem {
    let mut g = GameItem::new(id, format!("Game {id}"));
    g.displayed_description = "imported".to_string();
    g
}

#[tokio::test]
async fn test_persist_load_round_trip_preserves_order() {
    let (paths, _temp_dir) = create_test_paths();

    {
        let repo = GameRepository::open(&paths).await.unwrap();
        for id in ["c", "a", "b"] {
            repo.upsert(game(id), usize::MAX).await.unwrap();
        }
    }

    let reopened = GameRepository::open(&paths).await.unwrap();
    let games = reopened.games();
    let ids: Vec<_> = games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
    assert_eq!(games[0].displayed_description, "imported");
}

#[tokio::test]
async fn test_failed_mutation_leaves_file_untouched() {
    let (paths, _temp_dir) = create_test_paths();
    let repo = GameRepository::open(&paths).await.unwrap();
    repo.upsert(game("a"), 0).await.unwrap();

    let file = paths.game_list_file().unwrap();
    let before = std::fs::read(&file).unwrap();

    assert!(repo.remove_at(7).await.is_err());
    assert!(
        repo.replace_all(vec![game("x"), game("x")]).await.is_err()
    );

    let after = std::fs::read(&file).unwrap();
    assert_eq!(before, after, "rejected mutations must not touch the file");
}

#[tokio::test]
async fn test_interrupted_write_keeps_prior_committed_state() {
    let (paths, _temp_dir) = create_test_paths();

    {
        let repo = GameRepository::open(&paths).await.unwrap();
        repo.upsert(game("committed"), 0).await.unwrap();
    }

    // A crash between the temp write and the rename leaves the temp file
    // behind and the target intact.
    let file = paths.game_list_file().unwrap();
    std::fs::write(format!("{file}.tmp"), "[{\"id\":\"trunc").unwrap();

    let reopened = GameRepository::open(&paths).await.unwrap();
    let games = reopened.games();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, "committed");
}

#[tokio::test]
async fn test_persist_failure_rolls_back_and_releases_gate() {
    let (paths, _temp_dir) = create_test_paths();
    let repo = GameRepository::open(&paths).await.unwrap();
    repo.upsert(game("committed"), 0).await.unwrap();

    // A directory squatting on the temp path makes the next write fail.
    let file = paths.game_list_file().unwrap();
    let tmp = Utf8PathBuf::from(format!("{file}.tmp"));
    std::fs::create_dir(&tmp).unwrap();

    let err = repo.upsert(game("doomed"), 0).await.unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));

    // In-memory state rolled back to the pre-mutation snapshot, and the
    // committed file is untouched.
    let ids: Vec<_> = repo.games().into_iter().map(|g| g.id).collect();
    assert_eq!(ids, ["committed"]);
    let reloaded = GameRepository::open(&paths).await.unwrap();
    assert_eq!(reloaded.games().len(), 1);

    // The gate was released: once the obstacle is gone, mutations proceed.
    std::fs::remove_dir(&tmp).unwrap();
    repo.upsert(game("retry"), 0).await.unwrap();
    let ids: Vec<_> = repo.games().into_iter().map(|g| g.id).collect();
    assert_eq!(ids, ["retry", "committed"]);
}

#[tokio::test]
async fn test_corrupt_game_list_surfaces_and_empty_fallback_works() {
    let (paths, _temp_dir) = create_test_paths();
    let file = paths.game_list_file().unwrap();
    std::fs::write(&file, "{\"games\": oops").unwrap();

    let err = GameRepository::open(&paths).await.unwrap_err();
    assert!(matches!(err, StoreError::CorruptState { .. }));

    let repo = GameRepository::open_empty(&paths).unwrap();
    assert!(repo.games().is_empty());

    // First commit replaces the corrupt file.
    repo.upsert(game("fresh"), 0).await.unwrap();
    let reopened = GameRepository::open(&paths).await.unwrap();
    assert_eq!(reopened.games().len(), 1);
}

#[tokio::test]
async fn test_clear_persists_empty_list() {
    let (paths, _temp_dir) = create_test_paths();

    {
        let repo = GameRepository::open(&paths).await.unwrap();
        repo.upsert(game("a"), 0).await.unwrap();
        repo.clear().await.unwrap();
    }

    let reopened = GameRepository::open(&paths).await.unwrap();
    assert!(reopened.games().is_empty());
}

#[tokio::test]
async fn test_on_disk_format_is_readable_json_array() {
    let (paths, _temp_dir) = create_test_paths();
    let repo = GameRepository::open(&paths).await.unwrap();
    repo.upsert(game("a"), 0).await.unwrap();

    let text = std::fs::read_to_string(paths.game_list_file().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["id"], "a");
    // Pretty-printed like the original launcher's files
    assert!(text.contains('\n'));
}
