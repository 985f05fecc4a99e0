use proptest::prelude::*;

use dashboard_rs::dashboard::{CounterValues, Dashboard, DashboardConfig, StatCard};
use dashboard_rs::render::NullRenderer;
use dashboard_rs::RenderChartLibrary;

fn dashboard() -> Dashboard<RenderChartLibrary<NullRenderer>> {
    Dashboard::new(
        DashboardConfig::default(),
        RenderChartLibrary::new(NullRenderer::default()),
    )
    .expect("dashboard init")
}

#[test]
fn counters_start_from_sample_values() {
    let dashboard = dashboard();
    assert_eq!(dashboard.counter(StatCard::TotalUsers), 3_520_000);
    assert_eq!(dashboard.counter(StatCard::ActiveUsers), 3_200_000);
    assert_eq!(dashboard.counter(StatCard::TotalMovies), 3_520_000);
    assert_eq!(dashboard.render_count(), 0);
}

#[test]
fn click_increments_only_its_own_card() {
    let dashboard = dashboard();
    assert_eq!(dashboard.click(StatCard::ActiveUsers), 3_200_001);
    assert_eq!(dashboard.counter(StatCard::TotalUsers), 3_520_000);
    assert_eq!(dashboard.counter(StatCard::ActiveUsers), 3_200_001);
    assert_eq!(dashboard.counter(StatCard::TotalMovies), 3_520_000);
    assert_eq!(dashboard.render_count(), 1);
}

#[test]
fn clicked_value_shows_up_in_markup() {
    let dashboard = dashboard();
    dashboard.click(StatCard::TotalMovies);
    dashboard.click(StatCard::TotalMovies);
    let html = dashboard.render_html();
    assert!(html.contains(r#"data-card="total-movies""#));
    assert!(html.contains(r#"<span class="stat-value">3520002</span>"#));
    assert!(html.contains(r#"<span class="stat-value">3520000</span>"#));
}

#[test]
fn configured_initial_counters_are_used() {
    let config = DashboardConfig::default().with_initial_counters(CounterValues {
        total_users: 10,
        active_users: 5,
        total_movies: 1,
    });
    let dashboard = Dashboard::new(config, RenderChartLibrary::new(NullRenderer::default()))
        .expect("dashboard init");
    assert_eq!(dashboard.click(StatCard::TotalUsers), 11);
    assert_eq!(dashboard.snapshot().counters.total_users, 11);
}

fn card_strategy() -> impl Strategy<Value = StatCard> {
    prop_oneof![
        Just(StatCard::TotalUsers),
        Just(StatCard::ActiveUsers),
        Just(StatCard::TotalMovies),
    ]
}

proptest! {
    #[test]
    fn each_card_counts_exactly_its_clicks(clicks in prop::collection::vec(card_strategy(), 0..64)) {
        let dashboard = dashboard();
        let start = CounterValues::default();
        for card in &clicks {
            dashboard.click(*card);
        }
        for card in StatCard::ALL {
            let expected = clicks.iter().filter(|clicked| **clicked == card).count() as u64;
            prop_assert_eq!(dashboard.counter(card), start.get(card) + expected);
        }
        prop_assert_eq!(dashboard.render_count(), clicks.len() as u64);
    }
}
