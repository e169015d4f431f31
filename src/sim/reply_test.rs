use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn chart_request_carries_chart_payload() {
    let reply = generate_reply("Show me a chart for Revenue.", 3, &mut rng());

    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.id, 3);
    let chart = reply.chart_data.expect("chart trigger matched");
    assert_eq!(chart.title, "Revenue");
    assert!(ChartKind::ALL.contains(&chart.kind));
    assert!(POINT_COUNT_RANGE.contains(&chart.point_count));
    assert!(reply.content.contains(&format!("{} chart", chart.kind)));
    assert!(reply.content.contains("Revenue"));
}

#[test]
fn chart_trigger_is_case_insensitive() {
    let reply = generate_reply("CHART FOR sales, please", 2, &mut rng());
    let chart = reply.chart_data.expect("trigger matched");
    assert_eq!(chart.title, "sales");
}

#[test]
fn chart_subject_stops_at_comma_or_period() {
    assert_eq!(chart_subject("chart for profit, thanks"), "profit");
    assert_eq!(chart_subject("chart for profit. thanks"), "profit");
    assert_eq!(chart_subject("chart for profit"), "profit");
}

#[test]
fn chart_without_subject_uses_default_title() {
    let reply = generate_reply("draw me a chart please", 2, &mut rng());
    let chart = reply.chart_data.expect("trigger matched");
    assert_eq!(chart.title, DEFAULT_CHART_TITLE);
}

#[test]
fn chart_subject_ignores_surrounding_whitespace() {
    assert_eq!(chart_subject("chart for   Monthly Sales  ."), "Monthly Sales");
}

#[test]
fn point_count_stays_in_range_across_seeds() {
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let reply = generate_reply("a chart for x", 1, &mut rng);
        let chart = reply.chart_data.unwrap();
        assert!(POINT_COUNT_RANGE.contains(&chart.point_count));
    }
}

#[test]
fn non_chart_request_echoes_verbatim() {
    let reply = generate_reply("What's the weather?", 4, &mut rng());

    assert!(reply.chart_data.is_none());
    assert_eq!(
        reply.content,
        "This is a simulated response to: \"What's the weather?\""
    );
}
