use minitools::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_fallback("minitools=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_refuses_second_global_subscriber() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_fallback("minitools=debug"));
}
