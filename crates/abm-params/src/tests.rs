//! Unit tests for abm-params.

use std::io::Cursor;

use abm_core::DiseaseParams;

use crate::{ParamOverrides, ParamsError, load_params_file, load_params_reader, write_params_file};

#[test]
fn parses_all_four_keys() {
    let text = "infection_prob=0.5\nrecovery_prob=0.1\nvaccination_prob=0.25\nquarantine_prob=0.3\n";
    let o = load_params_reader(Cursor::new(text)).unwrap();
    assert_eq!(o.infection_prob, Some(0.5));
    assert_eq!(o.recovery_prob, Some(0.1));
    assert_eq!(o.vaccination_prob, Some(0.25));
    assert_eq!(o.quarantine_prob, Some(0.3));
}

#[test]
fn missing_keys_keep_caller_defaults() {
    let o = load_params_reader(Cursor::new("recovery_prob=0.4\n")).unwrap();
    let p = o.applied_to(DiseaseParams::default());
    assert_eq!(p.recovery_prob, 0.4);
    assert_eq!(p.infection_prob, DiseaseParams::default().infection_prob);
    assert_eq!(p.quarantine_prob, DiseaseParams::default().quarantine_prob);
}

#[test]
fn whitespace_comments_and_blank_lines() {
    let text = "# tuned for a slow outbreak\n\n  infection_prob = 0.05  \n\t\n";
    let o = load_params_reader(Cursor::new(text)).unwrap();
    assert_eq!(o.infection_prob, Some(0.05));
    assert_eq!(o.recovery_prob, None);
}

#[test]
fn unknown_keys_ignored() {
    let o = load_params_reader(Cursor::new("safe_practices_prob=0.4\nquarantine_prob=0.2\n")).unwrap();
    assert_eq!(o.quarantine_prob, Some(0.2));
    assert_eq!(o.infection_prob, None);
}

#[test]
fn later_lines_win() {
    let o = load_params_reader(Cursor::new("infection_prob=0.1\ninfection_prob=0.9\n")).unwrap();
    assert_eq!(o.infection_prob, Some(0.9));
}

#[test]
fn bad_value_names_line() {
    let err = load_params_reader(Cursor::new("recovery_prob=0.1\ninfection_prob=high\n")).unwrap_err();
    match err {
        ParamsError::Parse(msg) => {
            assert!(msg.contains("line 2"), "{msg}");
            assert!(msg.contains("infection_prob"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_separator_is_error() {
    assert!(matches!(
        load_params_reader(Cursor::new("infection_prob 0.3\n")),
        Err(ParamsError::Parse(_))
    ));
}

#[test]
fn empty_file_has_no_overrides() {
    let o = load_params_reader(Cursor::new("")).unwrap();
    assert!(o.is_empty());
    assert_eq!(o, ParamOverrides::default());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_params_file(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(ParamsError::Io(_))));
}

#[test]
fn written_file_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ABM_params.txt");
    let params = DiseaseParams {
        infection_prob:   0.8,
        recovery_prob:    0.7,
        vaccination_prob: 0.5,
        quarantine_prob:  0.9,
    };
    write_params_file(&path, &params).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("infection_prob=0.8\n"));

    let loaded = load_params_file(&path).unwrap().applied_to(DiseaseParams::default());
    assert_eq!(loaded, params);
}
