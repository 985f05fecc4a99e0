use std::fs;
use std::path::PathBuf;

use dashboard_rs::dashboard::{Dashboard, DashboardConfig};
use dashboard_rs::render::SvgRenderer;
use dashboard_rs::{DashboardError, DashboardResult, RenderChartLibrary, telemetry};

#[derive(Debug, Default)]
struct CliArgs {
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    #[cfg(feature = "cairo-backend")]
    png_dir: Option<PathBuf>,
}

fn parse_args() -> DashboardResult<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or_else(|| {
                    DashboardError::InvalidConfig("--config expects a path".to_owned())
                })?;
                args.config = Some(PathBuf::from(path));
            }
            #[cfg(feature = "cairo-backend")]
            "--png-dir" => {
                let path = iter.next().ok_or_else(|| {
                    DashboardError::InvalidConfig("--png-dir expects a path".to_owned())
                })?;
                args.png_dir = Some(PathBuf::from(path));
            }
            other if other.starts_with("--") => {
                return Err(DashboardError::InvalidConfig(format!(
                    "unknown flag `{other}`"
                )));
            }
            other => args.output = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> DashboardResult<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let raw = fs::read_to_string(path).map_err(|err| {
        DashboardError::InvalidConfig(format!("failed to read {}: {err}", path.display()))
    })?;
    DashboardConfig::from_json_str(&raw)
}

#[cfg(feature = "cairo-backend")]
fn export_pngs(
    dashboard: &Dashboard<RenderChartLibrary<SvgRenderer>>,
    dir: &std::path::Path,
) -> DashboardResult<()> {
    use dashboard_rs::render::{CairoRenderer, Renderer};

    fs::create_dir_all(dir).map_err(|err| {
        DashboardError::InvalidConfig(format!("failed to create {}: {err}", dir.display()))
    })?;
    dashboard.with_mounts(|mounts| {
        for mount in mounts.iter() {
            let Some(chart) = mount.content() else {
                continue;
            };
            let viewport = mount.viewport();
            let width = i32::try_from(viewport.width).unwrap_or(i32::MAX);
            let height = i32::try_from(viewport.height).unwrap_or(i32::MAX);
            let mut renderer = CairoRenderer::new(width, height)?;
            renderer.render(&chart.frame)?;
            let path = dir.join(format!("{}.png", mount.id()));
            let mut file = fs::File::create(&path).map_err(|err| {
                DashboardError::InvalidConfig(format!(
                    "failed to create {}: {err}",
                    path.display()
                ))
            })?;
            renderer.write_png(&mut file)?;
        }
        Ok(())
    })
}

async fn run(args: CliArgs) -> DashboardResult<()> {
    let config = load_config(args.config.as_ref())?;
    let dashboard = Dashboard::new(config, RenderChartLibrary::new(SvgRenderer::default()))?;
    dashboard.mount()?;
    dashboard.settled().await?;

    if let Some(error) = dashboard.error() {
        return Err(DashboardError::Lifecycle(error));
    }

    #[cfg(feature = "cairo-backend")]
    if let Some(dir) = args.png_dir.as_ref() {
        export_pngs(&dashboard, dir)?;
    }

    let html = dashboard.render_html();
    match args.output {
        Some(path) => fs::write(&path, html).map_err(|err| {
            DashboardError::InvalidConfig(format!("failed to write {}: {err}", path.display()))
        })?,
        None => println!("{html}"),
    }

    let disposed = dashboard.unmount();
    tracing::info!(disposed, "render finished");
    Ok(())
}

fn main() {
    let _ = telemetry::init_default_tracing();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            std::process::exit(1);
        }
    };

    let result = parse_args().and_then(|args| runtime.block_on(run(args)));
    if let Err(err) = result {
        eprintln!("render_dashboard: {err}");
        std::process::exit(1);
    }
}
