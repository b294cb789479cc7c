use terramesh::heightfield::{ElevationPalette, ElevationSource};
use terramesh::TerrainSettings;

#[test]
fn defaults_match_the_reference_terrain() {
    let settings = TerrainSettings::default();

    assert_eq!(settings.grid.columns, 128);
    assert_eq!(settings.grid.rows, 128);
    assert_eq!(settings.noise.octaves, 8);
    assert_eq!(settings.noise.lacunarity, 2.0);
    assert_eq!(settings.noise.persistence, 0.5);
    assert_eq!(settings.noise.amplitude, 0.5);
    assert_eq!(settings.mosaic.patches_x, 2);
    assert_eq!(settings.mosaic.patch_size, 10.0);
}

#[test]
fn settings_round_trip_through_toml() {
    let mut settings = TerrainSettings::default();
    settings.grid.columns = 33;
    settings.noise.seed = 42;
    settings.mosaic.patch_size = 25.0;
    settings.palette.snow_above = 0.2;

    let text = toml::to_string_pretty(&settings).unwrap();
    let loaded: TerrainSettings = toml::from_str(&text).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn partial_settings_fill_in_defaults() {
    let loaded: TerrainSettings = toml::from_str(
        r#"
        [grid]
        columns = 9
        rows = 9
        "#,
    )
    .unwrap();

    assert_eq!(loaded.grid.columns, 9);
    assert_eq!(loaded.noise.octaves, 8);
    assert_eq!(loaded.mosaic.patches_z, 2);
}

#[test]
fn noise_settings_build_a_deterministic_source() {
    let settings = TerrainSettings::default();
    let a = settings.noise.elevation();
    let b = settings.noise.elevation();

    for &(x, y) in &[(0.0f32, 0.0f32), (0.5, 0.25), (1.0, 1.0)] {
        assert_eq!(a.sample(x, y).unwrap(), b.sample(x, y).unwrap());
    }
}

#[test]
fn palette_buckets_elevation_into_three_colors() {
    let palette = ElevationPalette::default();

    assert_eq!(palette.classify(-0.3), [0.0, 0.0, 1.0]);
    assert_eq!(palette.classify(0.0), [0.0, 1.0, 0.0]);
    assert_eq!(palette.classify(0.2), [1.0, 1.0, 1.0]);

    // Thresholds are half-open: a value exactly at the boundary belongs to
    // the bucket above.
    assert_eq!(palette.classify(-0.025), [0.0, 1.0, 0.0]);
    assert_eq!(palette.classify(0.05), [1.0, 1.0, 1.0]);
}
