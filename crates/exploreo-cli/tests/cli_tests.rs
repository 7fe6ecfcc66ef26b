use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir
        .path()
        .join("cli_test.db")
        .to_str()
        .expect("temp path is UTF-8")
        .to_string();
    (temp_dir, db_path)
}

/// Helper function to create a Command with --no-color and no API keys
fn exploreo_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("exploreo").expect("Failed to find exploreo binary");
    cmd.env_remove("GEOAPIFY_API_KEY")
        .env_remove("GOOGLE_MAPS_API_KEY")
        .env_remove("EXPLOREO_DATABASE")
        .args(["--no-color", "--database-file", db_path]);
    cmd
}

fn sign_up(db_path: &str, email: &str) {
    exploreo_cmd(db_path)
        .args(["auth", "sign-up", email, "secret1", "--name", "Ayanda"])
        .assert()
        .success();
}

#[test]
fn test_cli_catalog_default() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Explore by region"))
        .stdout(predicate::str::contains("Table Mountain, Cape Town"));
}

#[test]
fn test_cli_catalog_single_region() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["catalog", "--region", "gauteng"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Gauteng"))
        .stdout(predicate::str::contains("Western Cape").not());

    exploreo_cmd(&db)
        .args(["catalog", "--region", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown region"));
}

#[test]
fn test_cli_auth_flow() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));

    exploreo_cmd(&db)
        .args(["auth", "sign-up", "ayanda@example.com", "secret1", "--name", "Ayanda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed up as ayanda@example.com"));

    exploreo_cmd(&db)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Ayanda"))
        .stdout(predicate::str::contains("- Language: English"));

    exploreo_cmd(&db)
        .args(["auth", "sign-out"])
        .assert()
        .success();

    exploreo_cmd(&db)
        .args(["auth", "sign-in", "ayanda@example.com", "wrong-pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email or password"));

    exploreo_cmd(&db)
        .args(["auth", "sign-in", "ayanda@example.com", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Ayanda"));
}

#[test]
fn test_cli_short_password_rejected() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["auth", "sign-up", "a@example.com", "12345", "--name", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("password"));
}

#[test]
fn test_cli_bookmark_requires_sign_in() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["bookmark", "add", "Table Mountain, Cape Town"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please sign in"));

    exploreo_cmd(&db)
        .args(["bookmark", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet."));

    for action in ["show", "share", "links"] {
        exploreo_cmd(&db)
            .args(["bookmark", action, "some-id"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Please sign in to view bookmarks"));
    }
}

#[test]
fn test_cli_bookmark_dedup() {
    let (_temp_dir, db) = create_cli_test_environment();
    sign_up(&db, "dedup@example.com");

    exploreo_cmd(&db)
        .args(["bookmark", "add", "table mountain, cape town"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarked 'Table Mountain, Cape Town'"));

    exploreo_cmd(&db)
        .args([
            "bookmark",
            "add-place",
            "--name",
            "Cableway",
            "--lat",
            "-33.96281",
            "--lon",
            "18.40981",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already bookmarked"));

    exploreo_cmd(&db)
        .args([
            "bookmark",
            "add-place",
            "--name",
            "Lion's Head",
            "--lat",
            "-33.97",
            "--lon",
            "18.4098",
            "--category",
            "natural.peak",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("natural.peak"));

    exploreo_cmd(&db)
        .args(["bookmark", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Table Mountain, Cape Town"))
        .stdout(predicate::str::contains("## Lion's Head"))
        .stdout(predicate::str::contains("Cableway").not());
}

#[test]
fn test_cli_unknown_attraction() {
    let (_temp_dir, db) = create_cli_test_environment();
    sign_up(&db, "unknown@example.com");

    exploreo_cmd(&db)
        .args(["bookmark", "add", "Eiffel Tower"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No attraction named"));
}

#[test]
fn test_cli_bookmark_missing_id() {
    let (_temp_dir, db) = create_cli_test_environment();
    sign_up(&db, "missing@example.com");

    exploreo_cmd(&db)
        .args(["bookmark", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bookmark nope not found"));

    exploreo_cmd(&db)
        .args(["bookmark", "remove", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmark with ID nope"));
}

#[test]
fn test_cli_itinerary_share() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args([
            "itinerary",
            "plan",
            "--item",
            "Beach|||10:00",
            "--item",
            "Market|buy gifts",
            "--share",
        ])
        .assert()
        .success()
        .stdout(predicate::eq(
            "My Exploreo itinerary:\n1. Beach (10:00)\n2. Market: buy gifts\n",
        ));
}

#[test]
fn test_cli_itinerary_blank_title_rejected() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["itinerary", "plan", "--item", " |note", "--share"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stop #1"));
}

#[test]
fn test_cli_itinerary_save_requires_sign_in() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["itinerary", "plan", "--item", "Beach", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please sign in to save itineraries"));
}

#[test]
fn test_cli_itinerary_save_and_latest() {
    let (_temp_dir, db) = create_cli_test_environment();
    sign_up(&db, "planner@example.com");

    exploreo_cmd(&db)
        .args(["itinerary", "latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved itinerary found"));

    exploreo_cmd(&db)
        .args(["itinerary", "plan", "--item", "Old stop", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Itinerary saved (ID: "));

    exploreo_cmd(&db)
        .args([
            "itinerary",
            "plan",
            "--item",
            "Boulders Beach|penguins||09:00|-34.1975|18.4512",
            "--item",
            "Cape Point",
            "--save",
        ])
        .assert()
        .success();

    exploreo_cmd(&db)
        .args(["itinerary", "latest", "--share"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "My Exploreo itinerary:\n1. Boulders Beach (09:00): penguins\n2. Cape Point\n",
        ));

    exploreo_cmd(&db)
        .args(["itinerary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Stops: 2"))
        .stdout(predicate::str::contains("- Stops: 1"));

    exploreo_cmd(&db)
        .args(["--geoapify-key", "test-key", "itinerary", "latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Latest itinerary"))
        .stdout(predicate::str::contains(
            "- Map: geo:-34.1975,18.4512?q=Boulders%20Beach",
        ))
        .stdout(predicate::str::contains("width=400&height=180"));
}

#[test]
fn test_cli_settings() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- dark-mode: true"))
        .stdout(predicate::str::contains("- image-quality: High"));

    exploreo_cmd(&db)
        .args(["settings", "set", "image-quality", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- image-quality: Standard"));

    exploreo_cmd(&db)
        .args(["settings", "set", "map-mode", "hybrid"])
        .assert()
        .failure();

    exploreo_cmd(&db)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- image-quality: Standard"))
        .stdout(predicate::str::contains("- map-mode: Normal"));
}

#[test]
fn test_cli_bookmark_links_follow_settings() {
    let (_temp_dir, db) = create_cli_test_environment();
    sign_up(&db, "links@example.com");

    let output = exploreo_cmd(&db)
        .args(["bookmark", "add", "God's Window"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("- ID: "))
        .expect("bookmark id in output")
        .to_string();

    exploreo_cmd(&db)
        .args(["bookmark", "share", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("God's Window ("));

    exploreo_cmd(&db)
        .args(["settings", "set", "image-quality", "standard"])
        .assert()
        .success();

    exploreo_cmd(&db)
        .args(["--geoapify-key", "test-key", "bookmark", "links", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Map: geo:"))
        .stdout(predicate::str::contains("width=600&height=300"))
        .stdout(predicate::str::contains("- Street view: (API key not configured)"));
}

#[test]
fn test_cli_search_without_key() {
    let (_temp_dir, db) = create_cli_test_environment();

    exploreo_cmd(&db)
        .args(["search", "tourism.sights", "circle:18.42,-33.92,5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Geoapify API key"));
}
