mod common;

use dashboard_rs::dashboard::{Lifecycle, StatCard};

use common::{null_dashboard, populated_mounts};

#[tokio::test(start_paused = true)]
async fn dashboard_smoke_flow() {
    let dashboard = null_dashboard();
    assert_eq!(dashboard.lifecycle(), Lifecycle::Idle);

    dashboard.mount().expect("mount");
    assert!(dashboard.is_loading());

    dashboard.settled().await.expect("setup settles");
    let stats = dashboard.chart_stats();
    assert_eq!(stats.constructed, 4);
    assert_eq!(stats.disposed, 0);
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.error(), None);
    assert_eq!(populated_mounts(&dashboard), 4);

    assert_eq!(dashboard.click(StatCard::TotalMovies), 3_520_001);

    assert_eq!(dashboard.unmount(), 4);
    let stats = dashboard.chart_stats();
    assert_eq!(stats.disposed, 4);
    assert_eq!(stats.live(), 0);
    assert_eq!(dashboard.lifecycle(), Lifecycle::Unmounted);
    assert_eq!(populated_mounts(&dashboard), 0);
}
