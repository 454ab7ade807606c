//! End-to-end tests over the logical core: gate, preferences, browser and
//! storage wired together the way the shell wires them, with file-backed
//! stores under a temporary directory.

use std::fs;

use tempfile::tempdir;

use data_vault::browser::FolderBrowser;
use data_vault::gate::{GateState, PasscodeGate, SubmitOutcome};
use data_vault::prefs::{self, FilePreferenceStore, PrefKey, PreferenceStore};
use data_vault::secrets::{FileCredentialStore, SecureCredentialStore};
use data_vault::shell::{Command, CommandStatus, Session, parse_command};
use data_vault::storage;

#[test]
fn test_passcode_survives_restart() {
    let dir = tempdir().unwrap();
    let creds_path = dir.path().join("state/data-vault.json");

    let store = FileCredentialStore::open(creds_path.clone()).unwrap();
    let mut gate = PasscodeGate::new(store, false).unwrap();
    assert_eq!(gate.state(), GateState::AwaitingCreation);
    gate.submit("1234").unwrap();

    // A fresh process opens the same file and goes straight to entry.
    let store = FileCredentialStore::open(creds_path).unwrap();
    let mut gate = PasscodeGate::new(store, false).unwrap();
    assert_eq!(gate.state(), GateState::AwaitingEntry);
    assert_eq!(gate.submit("1234").unwrap(), SubmitOutcome::Unlocked);
}

#[test]
fn test_first_launch_defaults_then_user_override() {
    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("state/preferences.json");

    let mut prefs = FilePreferenceStore::open(prefs_path.clone()).unwrap();
    prefs::init_first_launch(&mut prefs).unwrap();
    assert!(prefs.get_bool(PrefKey::SortAscending, false));
    assert!(prefs.get_bool(PrefKey::ShowFileSize, false));

    prefs.set_bool(PrefKey::SortAscending, false).unwrap();

    let mut prefs = FilePreferenceStore::open(prefs_path).unwrap();
    prefs::init_first_launch(&mut prefs).unwrap();
    assert!(!prefs.get_bool(PrefKey::SortAscending, true));
}

#[test]
fn test_browse_create_import_full_flow() {
    let dir = tempdir().unwrap();
    let mut prefs = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
    prefs::init_first_launch(&mut prefs).unwrap();

    let mut root = FolderBrowser::open_root(dir.path().join("documents")).unwrap();
    assert!(root.entries(&prefs).is_empty());

    root.create_folder("Holidays").unwrap();
    let photo = root.import_photo(b"jpeg bytes");
    let photo_path = photo.stored_path().unwrap().to_path_buf();

    let names: Vec<_> = root
        .entries(&prefs)
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Holidays".to_string()));

    // Ascending sort puts the folder before the uuid-named photo only if
    // it compares lower; assert ordering explicitly instead.
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    // Descending after flipping the preference.
    prefs.set_bool(PrefKey::SortAscending, false).unwrap();
    let names_desc: Vec<_> = root
        .entries(&prefs)
        .iter()
        .map(|e| e.name.clone())
        .collect();
    let mut expected = names_desc.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(names_desc, expected);

    // The photo is a leaf with a formatted size.
    let size = storage::format_size(&photo_path);
    assert_eq!(size, "0.00");

    // Subfolders browse independently.
    let mut inner = root.open("Holidays").unwrap();
    assert!(inner.entries(&prefs).is_empty());
    assert_eq!(inner.import_photo(b""), storage::ImportOutcome::Skipped);
    assert!(inner.entries(&prefs).is_empty());
}

#[test]
fn test_session_drives_gate_then_browser() {
    let dir = tempdir().unwrap();
    let creds = FileCredentialStore::open(dir.path().join("creds.json")).unwrap();
    let mut prefs = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
    prefs::init_first_launch(&mut prefs).unwrap();
    let gate = PasscodeGate::new(creds, true).unwrap();
    let root = FolderBrowser::open_root(dir.path().join("documents")).unwrap();

    let mut session = Session::new(gate, prefs, root);
    assert!(!session.is_unlocked());

    // Create, enter, confirm.
    session.handle_passcode("1234");
    session.handle_passcode("1234");
    assert!(!session.is_unlocked());
    session.handle_passcode("1234");
    assert!(session.is_unlocked());

    let result = session.handle_command(parse_command("MKDIR Trips"));
    assert!(matches!(result.status, CommandStatus::Success));

    let result = session.handle_command(parse_command("LIST"));
    assert_eq!(result.message.as_deref(), Some("Trips/"));

    let source = dir.path().join("picked.jpeg");
    fs::write(&source, b"jpeg bytes").unwrap();
    let result = session.handle_command(Command::Import(source.display().to_string()));
    assert!(matches!(result.status, CommandStatus::Success));

    let result = session.handle_command(parse_command("QUIT"));
    assert!(matches!(result.status, CommandStatus::CloseSession));
}

#[test]
fn test_stale_entries_survive_external_deletion() {
    let dir = tempdir().unwrap();
    let prefs = FilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
    let mut root = FolderBrowser::open_root(dir.path().join("documents")).unwrap();

    fs::write(dir.path().join("documents/a.txt"), b"x").unwrap();
    assert_eq!(root.entries(&prefs).len(), 1);

    fs::remove_file(dir.path().join("documents/a.txt")).unwrap();
    // Accumulated names are kept until the browser is dropped.
    assert_eq!(root.entries(&prefs).len(), 1);

    let mut fresh = FolderBrowser::open_root(dir.path().join("documents")).unwrap();
    assert!(fresh.entries(&prefs).is_empty());
}

#[test]
fn test_change_passcode_takes_effect_for_next_gate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("creds.json");

    let store = FileCredentialStore::open(path.clone()).unwrap();
    let mut gate = PasscodeGate::new(store, false).unwrap();
    gate.submit("1234").unwrap();
    gate.submit("1234").unwrap();
    gate.change_passcode("9876").unwrap();
    assert_eq!(gate.current_passcode().unwrap(), Some("9876".to_string()));

    let store = FileCredentialStore::open(path).unwrap();
    assert_eq!(store.get("User").unwrap(), Some("9876".to_string()));
    let mut gate = PasscodeGate::new(store, false).unwrap();
    assert!(gate.submit("1234").is_err());
    assert_eq!(gate.submit("9876").unwrap(), SubmitOutcome::Unlocked);
}
