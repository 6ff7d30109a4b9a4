//! End-to-end command flows against a temporary state file

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use chiptable_cli::commands::{deploy, register_chips, register_tsm};
use chiptable_cli::state;
use chiptable_core::RegistryError;
use chiptable_testkit::{test_identity, TestDevice};

struct Setup {
    dir: TempDir,
    state: PathBuf,
    owner: String,
    tsm: String,
}

impl Setup {
    fn deployed() -> Self {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("registry.json");
        let owner = test_identity(0xA0).to_string();
        let tsm = test_identity(0xB0).to_string();
        deploy::run(&owner, "0.1", &state, true).unwrap();
        Self {
            dir,
            state,
            owner,
            tsm,
        }
    }

    fn key_file(&self, devices: &[TestDevice]) -> PathBuf {
        let path = self.dir.path().join("keys.txt");
        let mut lines = String::new();
        for (i, device) in devices.iter().enumerate() {
            // Mix prefixed and bare hex; both are accepted.
            if i % 2 == 0 {
                lines.push_str("0x");
            }
            lines.push_str(&hex::encode(device.public_key()));
            lines.push('\n');
        }
        lines.push('\n');
        fs::write(&path, lines).unwrap();
        path
    }
}

#[test]
fn deploy_writes_a_loadable_state_file() {
    let setup = Setup::deployed();
    let table = state::load_table(&setup.state).unwrap();
    assert_eq!(table.owner().to_string(), setup.owner);
    assert_eq!(table.registry_version(), "0.1");
}

#[test]
fn deploy_refuses_to_clobber_existing_state() {
    let setup = Setup::deployed();
    let err = deploy::run(&setup.owner, "0.2", &setup.state, true).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn deploy_rejects_bad_owner_identities() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("registry.json");

    assert!(deploy::run("not-hex", "0.1", &state, true).is_err());
    let zero = chiptable_core::Identity::ZERO.to_string();
    assert!(deploy::run(&zero, "0.1", &state, true).is_err());
    assert!(!state.exists());
}

#[test]
fn register_tsm_updates_the_state_file() {
    let setup = Setup::deployed();
    register_tsm::run(&setup.state, &setup.owner, &setup.tsm, "u0", true).unwrap();

    let table = state::load_table(&setup.state).unwrap();
    assert_eq!(table.total_tsms(), 1);
    assert_eq!(
        table.tsm_uri(setup.tsm.parse().unwrap()).unwrap(),
        "u0"
    );
}

#[test]
fn register_tsm_surfaces_registry_errors_verbatim() {
    let setup = Setup::deployed();
    let stranger = test_identity(0x55).to_string();

    let err = register_tsm::run(&setup.state, &stranger, &setup.tsm, "u0", true).unwrap_err();
    let registry_err = err.downcast_ref::<RegistryError>().unwrap();
    assert!(matches!(registry_err, RegistryError::Unauthorized { .. }));

    // Nothing was persisted.
    assert_eq!(state::load_table(&setup.state).unwrap().total_tsms(), 0);
}

#[test]
fn register_chips_enrolls_every_key_in_the_file() {
    let setup = Setup::deployed();
    register_tsm::run(&setup.state, &setup.owner, &setup.tsm, "u0", true).unwrap();

    let devices = TestDevice::batch(40, 3);
    let keys = setup.key_file(&devices);
    register_chips::run(&setup.state, &setup.owner, &setup.tsm, &keys, true).unwrap();

    let table = state::load_table(&setup.state).unwrap();
    for device in &devices {
        assert!(table.chip_exists(device.chip_id));
        assert_eq!(table.chip_uri(device.chip_id).unwrap(), "u0");
    }
}

#[test]
fn duplicate_key_in_the_file_aborts_without_persisting() {
    let setup = Setup::deployed();
    register_tsm::run(&setup.state, &setup.owner, &setup.tsm, "u0", true).unwrap();

    let device = TestDevice::from_seed(41);
    let keys = setup.dir.path().join("dup.txt");
    let line = hex::encode(device.public_key());
    fs::write(&keys, format!("{line}\n{line}\n")).unwrap();

    let err =
        register_chips::run(&setup.state, &setup.owner, &setup.tsm, &keys, true).unwrap_err();
    let registry_err = err.downcast_ref::<RegistryError>().unwrap();
    assert!(matches!(registry_err, RegistryError::AlreadyExists { .. }));

    let table = state::load_table(&setup.state).unwrap();
    assert!(!table.chip_exists(device.chip_id));
}

#[test]
fn key_file_parsing_rejects_bad_lines() {
    let setup = Setup::deployed();
    let keys = setup.dir.path().join("bad.txt");

    fs::write(&keys, "zz-not-hex\n").unwrap();
    let err = register_chips::chip_ids_from_file(&keys).unwrap_err();
    assert!(err.to_string().contains("line 1"));

    fs::write(&keys, "0xdeadbeef\n").unwrap();
    let err = register_chips::chip_ids_from_file(&keys).unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
