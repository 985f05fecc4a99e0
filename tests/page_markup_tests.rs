mod common;

use dashboard_rs::dashboard::{LOADING_MESSAGE, SETUP_ERROR_MESSAGE, chart_mount_ids};

use common::null_dashboard;

fn legend_column_sizes(html: &str) -> Vec<usize> {
    html.split(r#"class="legend-column""#)
        .skip(1)
        .map(|column| {
            let end = column.find("</ul>").unwrap_or(column.len());
            column[..end].matches("<li>").count()
        })
        .collect()
}

#[test]
fn fresh_page_shows_loading_and_empty_mounts() {
    let dashboard = null_dashboard();
    let html = dashboard.render_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(LOADING_MESSAGE));
    assert!(!html.contains(SETUP_ERROR_MESSAGE));
    for mount in chart_mount_ids() {
        assert!(html.contains(&format!(r#"id="{mount}""#)), "missing mount {mount}");
    }
    assert_eq!(html.matches(r#"data-populated="false""#).count(), 4);
    assert!(!html.contains("<svg"));
}

#[tokio::test(start_paused = true)]
async fn settled_page_inlines_one_svg_per_mount() {
    let dashboard = null_dashboard();
    dashboard.mount().expect("mount");
    dashboard.settled().await.expect("settled");

    let html = dashboard.render_html();
    assert!(!html.contains(LOADING_MESSAGE));
    assert_eq!(html.matches(r#"data-populated="true""#).count(), 4);
    assert_eq!(html.matches("<svg").count(), 4);
    assert!(html.contains("<title>Jan: 50</title>"));

    dashboard.unmount();
    let html = dashboard.render_html();
    assert_eq!(html.matches(r#"data-populated="false""#).count(), 4);
}

#[test]
fn genre_legend_splits_two_and_three() {
    let html = null_dashboard().render_html();
    assert_eq!(legend_column_sizes(&html), vec![2, 3]);
    for name in ["Action", "Comedy", "Drama", "Horror", "Documentary"] {
        assert!(html.contains(&format!(r#"<span class="legend-name">{name}</span>"#)));
    }
    assert!(html.contains("background-color: #455EFF"));
    assert!(html.contains("background-color: #0E00A2"));
    // Names only, no shares.
    assert!(!html.contains("70%"));
}

#[test]
fn header_shows_title_range_and_user() {
    let html = null_dashboard().render_html();
    assert!(html.contains("<h1>ULO REPORT</h1>"));
    assert!(html.contains("02 OKT 2024 - 03 OKT 2024"));
    assert!(html.contains(r#"<span class="user-name">William Andre</span>"#));
}

#[test]
fn chart_cards_carry_headings_and_revenue_headline() {
    let html = null_dashboard().render_html();
    for heading in [
        "Revenue",
        "Movie Genre",
        "Audience Activity",
        "Subscription Packages",
    ] {
        assert!(html.contains(&format!("<h3>{heading}</h3>")), "missing {heading}");
    }
    assert!(html.contains(r#"<h2 class="chart-headline">Rp 15,590,000</h2>"#));
    assert_eq!(html.matches("chart-headline").count(), 1);
}

#[test]
fn user_table_and_film_list_render_sample_rows() {
    let html = null_dashboard().render_html();
    for header in [
        "#",
        "Username",
        "Email",
        "Subscription Package",
        "Status",
        "Last Login",
        "Phone Number",
    ] {
        assert!(html.contains(&format!("<th>{header}</th>")), "missing {header}");
    }
    assert_eq!(html.matches("<th>").count(), 7);
    assert!(html.contains("<td>Sienna00</td>"));
    assert!(html.contains("<td>sienna@gmail.com</td>"));
    assert!(html.contains("<td>Ulo Plus</td>"));
    assert!(html.contains(r#"<span class="status">Active</span>"#));
    assert!(html.contains("<td>Today</td>"));
    assert!(html.contains("<td>-</td>"));

    assert!(html.contains(r#"class="popular-films""#));
    for film in [
        "Titanic",
        "One Piece",
        "Extraction 2",
        "The Angry Birds Movie 2",
        "The Architecture of Love",
    ] {
        assert!(html.contains(&format!("<li>{film}</li>")), "missing {film}");
    }
}

#[test]
fn stat_cards_render_labels_and_values() {
    let html = null_dashboard().render_html();
    for label in ["Total Users", "Active Users", "Total Movies"] {
        assert!(html.contains(label));
    }
    assert!(html.contains(r#"<span class="stat-value">3520000</span>"#));
    assert!(html.contains(r#"<span class="stat-value">3200000</span>"#));
}
