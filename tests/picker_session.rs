use weekday_range::{
    CalendarDate, DateRange, Month, MonthView, PickerConfig, Preset, RangeChange, RangeError, RangeSelector,
    SelectionState, build_grid, catalog, is_weekend, weekends_in_range,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn click_session_emits_json_for_the_view() {
    let mut selector = RangeSelector::new(date("2024-03-13"));
    assert_eq!(selector.pick_date(date("2024-03-15")), None);
    let change = selector.pick_date(date("2024-03-04")).unwrap();
    assert_eq!(change.weekends_iso(), ["2024-03-09", "2024-03-10"]);

    let json = serde_json::to_string(&change).unwrap();
    assert_eq!(
        json,
        r#"{"selectedRange":["2024-03-04","2024-03-15"],"weekends":["2024-03-09","2024-03-10"]}"#
    );

    let cleared = serde_json::to_string(&selector.clear()).unwrap();
    assert_eq!(cleared, r#"{"selectedRange":[null,null],"weekends":[]}"#);
}

#[test]
fn emitted_change_round_trips_through_json() {
    let mut selector = RangeSelector::new(date("2024-03-13"));
    let change = selector.pick_preset("Previous Month").unwrap();
    let json = serde_json::to_string(&change).unwrap();
    let back: RangeChange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, change);
    assert_eq!(back.selected_iso(), [Some("2024-02-01".to_owned()), Some("2024-02-29".to_owned())]);
}

#[test]
fn every_preset_commits_for_a_whole_year_of_todays() {
    let mut today = date("2024-01-01");
    while today <= date("2024-12-31") {
        let mut selector = RangeSelector::new(today);
        assert_eq!(selector.presets().len(), Preset::ALL.len(), "{today}");

        for preset in catalog(today) {
            let change = selector.pick_predefined(&preset).unwrap();
            let (from, to) = preset.range();
            assert!(from <= to, "{} on {today}", preset.label);
            assert_eq!(selector.state(), SelectionState::Complete { from, to });
            assert_eq!(selector.view(), MonthView::containing(to));
            assert!(change.weekends.iter().all(|d| is_weekend(*d) && from <= *d && *d <= to));
        }
        today = today.succ().unwrap();
    }
}

#[test]
fn weekend_count_matches_a_day_by_day_walk() {
    let start = date("2023-12-20");
    for len in 0..60 {
        let end = start.checked_add_days(len).unwrap();
        let weekends = weekends_in_range(start, end).unwrap();

        let mut walked = Vec::new();
        let mut day = start;
        while day <= end {
            if is_weekend(day) {
                walked.push(day);
            }
            day = day.succ().unwrap();
        }
        assert_eq!(weekends, walked, "{start}..{end}");
    }
}

#[test]
fn inverted_weekend_query_is_an_error() {
    assert_eq!(
        weekends_in_range(date("2024-03-15"), date("2024-03-11")),
        Err(RangeError::InvalidRange {
            from: date("2024-03-15"),
            to:   date("2024-03-11"),
        })
    );
}

#[test]
fn click_order_does_not_matter() {
    let weekdays: Vec<_> = ["2024-02-26", "2024-03-01", "2024-03-06", "2024-03-14", "2024-04-02"]
        .into_iter()
        .map(date)
        .collect();

    for &a in &weekdays {
        for &b in &weekdays {
            let mut forward = RangeSelector::new(date("2024-03-13"));
            forward.pick_date(a);
            let ab = forward.pick_date(b).unwrap();

            let mut backward = RangeSelector::new(date("2024-03-13"));
            backward.pick_date(b);
            let ba = backward.pick_date(a).unwrap();

            assert_eq!(ab, ba, "{a} {b}");
        }
    }
}

#[test]
fn navigating_and_rendering_a_long_stretch() {
    let config = PickerConfig {
        show_predefined: false,
        initial_view:    Some(MonthView::new(2019, Month::JANUARY)),
    };
    let mut selector = RangeSelector::with_config(date("2024-03-13"), &config);
    selector.pick_date(date("2019-01-07"));
    selector.pick_date(date("2019-03-29"));
    let range = selector.range();

    for _ in 0..120 {
        let grid = selector.grid().unwrap();
        assert_eq!(grid.cells().len(), 42);
        assert_eq!(grid.rows().count(), 6);
        for cell in grid.cells() {
            assert_eq!(cell.is_in_range, range.contains(cell.date) && !range.is_endpoint(cell.date));
        }
        selector.navigate_month(1);
    }
    assert_eq!(selector.view(), MonthView::new(2029, Month::JANUARY));
}

#[test]
fn typed_text_converges_with_clicks() {
    let mut selector = RangeSelector::new(date("2024-03-13"));
    selector.pick_date(date("2024-03-05"));
    assert_eq!(selector.text().from, "2024-03-05");

    // finishing the pending pick by typing the other endpoint
    let change = selector.set_to_text("2024-03-19").unwrap();
    assert_eq!(change.selected_range, DateRange::new(date("2024-03-05"), date("2024-03-19")).unwrap());
    assert_eq!(selector.grid().unwrap().cells().iter().filter(|c| c.is_selected).count(), 2);
}

#[test]
fn grid_is_pure() {
    let view = MonthView::new(2024, Month::new(6).unwrap());
    let range = DateRange::partial(date("2024-06-12"));
    assert_eq!(build_grid(view, &range).unwrap(), build_grid(view, &range).unwrap());
}
