use canview::persistence::{
    load_state_from_path, save_state_to_path, state_from_json, state_to_json, TimeFormatSerde,
    ViewStateSerde,
};
use canview::{TimeFormat, TimeResolution, UniqueFrameFilter, ViewConfig};

#[test]
fn json_round_trip_preserves_settings() {
    let state = ViewStateSerde {
        filter_active: true,
        time_format: TimeFormatSerde::Elapsed {
            resolution: TimeResolution::Microseconds,
            force_hms: true,
        },
    };

    let json = state_to_json(&state).unwrap();
    let restored = state_from_json(&json).unwrap();

    assert!(restored.filter_active);
    match restored.time_format {
        TimeFormatSerde::Elapsed {
            resolution,
            force_hms,
        } => {
            assert_eq!(resolution, TimeResolution::Microseconds);
            assert!(force_hms);
        }
        other => panic!("unexpected time format after round trip: {:?}", other),
    }
}

#[test]
fn capture_and_apply_transfer_state_between_sessions() {
    let mut filter = UniqueFrameFilter::new();
    filter.set_active(true);
    let mut config = ViewConfig::default();
    config.time_format = TimeFormat::wall_clock(Default::default());

    let state = ViewStateSerde::capture(&filter, &config);

    let mut new_filter = UniqueFrameFilter::new();
    let mut new_config = ViewConfig::default();
    state.apply_to(&mut new_filter, &mut new_config);

    assert!(new_filter.is_active());
    assert!(new_config.filter_active_on_start);
    assert!(matches!(new_config.time_format, TimeFormat::WallClock(_)));
}

#[test]
fn file_round_trip() {
    let state = ViewStateSerde {
        filter_active: true,
        time_format: TimeFormatSerde::Auto,
    };
    let path = std::env::temp_dir().join("canview_persistence_test.json");

    save_state_to_path(&state, &path).unwrap();
    let restored = load_state_from_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(restored.filter_active);
    assert!(matches!(restored.time_format, TimeFormatSerde::Auto));
}

#[test]
fn loading_garbage_reports_an_error_instead_of_panicking() {
    assert!(state_from_json("not json at all").is_err());
    assert!(load_state_from_path(std::path::Path::new("/nonexistent/canview.json")).is_err());
}

#[test]
fn default_state_leaves_the_filter_off() {
    let state = ViewStateSerde::default();
    assert!(!state.filter_active);

    let mut filter = UniqueFrameFilter::new();
    filter.set_active(true);
    let mut config = ViewConfig::default();
    state.apply_to(&mut filter, &mut config);
    assert!(!filter.is_active());
}
