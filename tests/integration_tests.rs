//! End-to-end tests for the benchmark passes and report output

use std::time::Duration;

use iterbench::{
    build_input, filter_eager, filter_lazy, format_report, is_even, map_eager, map_lazy,
    run_passes, PassTimings,
};

#[test]
fn shrunk_scenario_matches_expected_collections() {
    // range(0, 10): filtered-even = [0,2,4,6,8]; mapped = [2..=11]
    let input = build_input(10);

    assert_eq!(filter_lazy(&input), vec![0, 2, 4, 6, 8]);
    assert_eq!(filter_eager(&input), vec![0, 2, 4, 6, 8]);

    let expected: Vec<u64> = (2..=11).collect();
    assert_eq!(map_lazy(&input), expected);
    assert_eq!(map_eager(&input), expected);
}

#[test]
fn lazy_and_eager_filters_realize_the_same_set() {
    let input = build_input(100_000);

    let lazy = filter_lazy(&input);
    let eager = filter_eager(&input);

    assert_eq!(lazy, eager);
    assert_eq!(lazy.len(), 50_000);
    assert!(lazy.iter().all(|&x| is_even(x)));
    assert!(lazy.windows(2).all(|w| w[0] < w[1]), "order must be ascending");
}

#[test]
fn lazy_and_eager_maps_realize_the_same_sequence() {
    let input = build_input(100_000);

    let lazy = map_lazy(&input);
    let eager = map_eager(&input);

    assert_eq!(lazy, eager);
    assert_eq!(lazy.len(), input.len());
    for (i, &v) in lazy.iter().enumerate() {
        assert_eq!(v, i as u64 + 2);
    }
}

#[test]
fn passes_are_deterministic_across_runs() {
    let input = build_input(10_000);

    assert_eq!(filter_lazy(&input), filter_lazy(&input));
    assert_eq!(filter_eager(&input), filter_eager(&input));
    assert_eq!(map_lazy(&input), map_lazy(&input));
    assert_eq!(map_eager(&input), map_eager(&input));
}

#[test]
fn run_passes_produces_renderable_timings() {
    let timings = run_passes(10_000);

    // Durations are unsigned, so non-negativity holds by construction;
    // bound them loosely to catch a wildly broken clock.
    for d in [
        timings.filter_lazy,
        timings.filter_eager,
        timings.map_lazy,
        timings.map_eager,
    ] {
        assert!(d < Duration::from_secs(60));
    }

    let report = format_report(&timings);
    assert_eq!(report.lines().count(), 4);
}

#[test]
fn report_has_four_fields_with_four_decimals() {
    let timings = PassTimings {
        filter_lazy: Duration::from_millis(312),
        filter_eager: Duration::from_millis(255),
        map_lazy: Duration::from_millis(401),
        map_eager: Duration::from_millis(389),
    };

    let report = format_report(&timings);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);

    let expected_labels = ["filter", "list compre", "map", "list compre"];
    for (line, label) in lines.iter().zip(expected_labels) {
        let (got_label, rest) = line.split_once(": ").expect("label separator");
        assert_eq!(got_label, label);

        let value = rest.strip_suffix(" s").expect("seconds suffix");
        let (_, frac) = value.split_once('.').expect("decimal point");
        assert_eq!(frac.len(), 4, "exactly four decimal digits: {line}");
        assert!(value.parse::<f64>().expect("numeric field") >= 0.0);
    }
}
