use minitools::api::{
    ChartConfig, DotPlotEngine, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, Margins,
};
use minitools::core::presets::battery_lifespans;
use minitools::render::NullRenderer;

#[test]
fn chart_config_json_roundtrip() {
    let config = ChartConfig::new(720.0, 320.0, 10.5, 88.25)
        .with_margins(Margins {
            top: 10.0,
            right: 10.0,
            bottom: 30.0,
            left: 50.0,
        })
        .with_x_axis_step(5.0)
        .with_initial_range(20.0, 40.0);

    let json = config
        .to_json_pretty()
        .expect("config should serialize to json");
    let restored = ChartConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn chart_config_json_fills_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{"width": 400, "height": 200, "domain_min": 0, "domain_max": 10}"#,
    )
    .expect("config should deserialize");

    assert_eq!(config, ChartConfig::new(400.0, 200.0, 0.0, 10.0));
    assert!(ChartConfig::from_json_str("{}").is_err());
}

#[test]
fn snapshot_reflects_derived_state() {
    let config = ChartConfig::new(710.0, 300.0, 0.0, 130.0).with_initial_range(102.0, 126.0);
    let engine = DotPlotEngine::new(NullRenderer::default(), config, battery_lifespans())
        .expect("engine init");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.observations.len(), 20);
    assert_eq!(snapshot.scatter.len(), 20);
    assert_eq!(snapshot.range_count, 13);
    assert_eq!(snapshot.threshold_split.total(), 20);
    assert_eq!(
        snapshot.interval_bins.iter().map(|bin| bin.count).sum::<usize>(),
        20
    );
    assert!(snapshot.chart_height >= 300.0);
}

#[test]
fn snapshot_json_contract_v1_roundtrip() {
    let engine = DotPlotEngine::new(
        NullRenderer::default(),
        ChartConfig::new(710.0, 300.0, 0.0, 130.0),
        battery_lifespans(),
    )
    .expect("engine init");
    let snapshot = engine.snapshot();

    let contract = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(contract.contains(&format!(
        "\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    let from_contract = EngineSnapshot::from_json_compat_str(&contract).expect("parse contract");

    let bare = engine.snapshot_json_pretty().expect("snapshot json");
    let from_bare = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare snapshot");

    for parsed in [from_contract, from_bare] {
        assert_eq!(parsed.observations, snapshot.observations);
        assert_eq!(parsed.range_count, snapshot.range_count);
        assert_eq!(parsed.threshold_lines, snapshot.threshold_lines);
        assert_eq!(
            parsed.scatter.iter().map(|p| p.level).collect::<Vec<_>>(),
            snapshot.scatter.iter().map(|p| p.level).collect::<Vec<_>>()
        );
    }
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let engine = DotPlotEngine::new(
        NullRenderer::default(),
        ChartConfig::new(710.0, 300.0, 0.0, 130.0),
        Vec::new(),
    )
    .expect("engine init");
    let contract = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("contract should serialize")
        .replace(
            &format!("\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );

    assert!(EngineSnapshot::from_json_compat_str(&contract).is_err());
}
