//! Page markup.

use maud::{DOCTYPE, Markup, html};

use crate::charts::MountRegistry;
use crate::dashboard::legend::GenreLegend;
use crate::dashboard::sample_data::UserRow;
use crate::dashboard::setup::{ChartSlot, GENRE_MOUNT};
use crate::dashboard::{CounterValues, DashboardConfig, StatCard};
use crate::render::frame_to_svg;

pub const LOADING_MESSAGE: &str = "Loading data...";
pub const SETUP_ERROR_MESSAGE: &str = "An error occurred while loading the data.";

/// Everything the page template reads, borrowed from the live dashboard.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a DashboardConfig,
    pub counters: CounterValues,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub slots: &'a [ChartSlot],
    pub mounts: &'a MountRegistry,
    pub legend: &'a GenreLegend,
    pub users: &'a [UserRow],
    pub films: &'a [&'static str],
}

impl PageContext<'_> {
    /// Loading and error banners never show together.
    #[must_use]
    pub fn shows_loading(&self) -> bool {
        self.loading && self.error.is_none()
    }
}

#[must_use]
pub fn render_page(page: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (page.config.title) }
            }
            body {
                main class="dashboard" {
                    (render_header(page.config))
                    (render_stat_cards(page.counters))
                    @if page.shows_loading() {
                        div class="banner loading" role="status" { (LOADING_MESSAGE) }
                    }
                    @if let Some(error) = page.error {
                        div class="banner error" role="alert" { (error) }
                    }
                    (render_chart_grid(page))
                    (render_user_table(page.users))
                    (render_films(page.films))
                }
            }
        }
    }
}

fn render_header(config: &DashboardConfig) -> Markup {
    html! {
        header class="dashboard-header" {
            h1 { (config.title) }
            div class="header-meta" {
                span class="date-range" { (config.date_range_label()) }
                span class="user-name" { (config.user_name) }
            }
        }
    }
}

#[must_use]
pub fn render_stat_cards(counters: CounterValues) -> Markup {
    html! {
        section class="stat-cards" {
            @for card in StatCard::ALL {
                button type="button" class="stat-card" data-card=(card.key()) {
                    span class="stat-label" { (card.label()) }
                    span class="stat-value" { (counters.get(card)) }
                }
            }
        }
    }
}

fn render_chart_grid(page: &PageContext<'_>) -> Markup {
    html! {
        section class="chart-grid" {
            @for slot in page.slots {
                div class="chart-card" {
                    h3 { (slot.title) }
                    @if let Some(headline) = slot.headline {
                        h2 class="chart-headline" { (headline) }
                    }
                    @let content = page.mounts.get(&slot.mount).and_then(|mount| mount.content());
                    div id=(slot.mount.as_str()) class="chart-mount"
                        data-populated=(if content.is_some() { "true" } else { "false" }) {
                        @if let Some(chart) = content {
                            (frame_to_svg(&chart.frame))
                        }
                    }
                    @if slot.mount.as_str() == GENRE_MOUNT {
                        (render_legend(page.legend))
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_legend(legend: &GenreLegend) -> Markup {
    html! {
        div class="genre-legend" {
            @for column in [&legend.left[..], &legend.right[..]] {
                ul class="legend-column" {
                    @for entry in column {
                        li {
                            span class="legend-swatch" style=(format!("background-color: {}", entry.color)) {}
                            span class="legend-name" { (entry.name) }
                        }
                    }
                }
            }
        }
    }
}

fn render_user_table(users: &[UserRow]) -> Markup {
    html! {
        section class="user-table" {
            table {
                thead {
                    tr {
                        th { "#" }
                        th { "Username" }
                        th { "Email" }
                        th { "Subscription Package" }
                        th { "Status" }
                        th { "Last Login" }
                        th { "Phone Number" }
                    }
                }
                tbody {
                    @for user in users {
                        tr {
                            td { (user.index) }
                            td { (user.username) }
                            td { (user.email) }
                            td { (user.package) }
                            td { span class="status" { (user.status) } }
                            td { (user.last_login) }
                            td { (user.phone) }
                        }
                    }
                }
            }
        }
    }
}

fn render_films(films: &[&str]) -> Markup {
    html! {
        section class="popular-films" {
            h3 { "Popular Films" }
            ul {
                @for film in films {
                    li { (film) }
                }
            }
        }
    }
}
