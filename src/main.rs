use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use tracing::info;

use fueleu::{
    banking::InMemoryBankingStore,
    cli::parse_args,
    clock::SystemClock,
    compliance::InMemoryComplianceStore,
    config::Config,
    facade::AccountingFacade,
    ids::UuidIdGenerator,
    logging::init_tracing,
    pooling::InMemoryPoolStore,
    routes::{InMemoryRouteStore, Route},
};

fn main() -> Result<()> {
    let args = parse_args()?;
    let mut config = if args.config_path.exists() {
        Config::load(&args.config_path)
            .with_context(|| format!("failed to load config from {}", args.config_path.display()))?
    } else {
        Config::default()
    };
    if args.routes_path.is_some() {
        config.data.routes_path = args.routes_path;
    }

    let logging_guard = init_tracing(&config.logging)?;
    info!(run_id = %logging_guard.run_id(), "fueleu accounting engine starting");

    let routes = match &config.data.routes_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read routes file {}", path.display()))?;
            serde_json::from_str::<Vec<Route>>(&content)
                .with_context(|| format!("failed to parse routes file {}", path.display()))?
        }
        None => demo_routes(),
    };

    let banking = Arc::new(InMemoryBankingStore::new());
    let facade = AccountingFacade::new(
        Arc::new(InMemoryRouteStore::with_routes(routes)),
        Arc::new(InMemoryComplianceStore::new(banking.clone())),
        banking,
        Arc::new(InMemoryPoolStore::new()),
        Arc::new(UuidIdGenerator),
        Arc::new(SystemClock),
    );

    println!("{:<10} {:<14} {:>12} {:>16} {:>14}", "route", "vessel", "gCO2e/MJ", "CB (gCO2e)", "standing");
    for route in facade.routes()? {
        let cb = facade.calculate_cb_for_route(&route.route_id, route.year)?;
        let standing = if cb.cb_gco2eq >= 0.0 { "surplus" } else { "deficit" };
        println!(
            "{:<10} {:<14} {:>12.4} {:>16.1} {:>14}",
            route.route_id, route.vessel_type, route.ghg_intensity, cb.cb_gco2eq, standing
        );
    }

    println!();
    match facade.compare_routes() {
        Ok(comparisons) => {
            for comparison in comparisons {
                println!(
                    "{} vs baseline {}: {:+.2}% ({})",
                    comparison.route_id,
                    comparison.baseline.route_id,
                    comparison.percent_diff,
                    if comparison.compliant { "compliant" } else { "non-compliant" }
                );
            }
        }
        Err(err) => println!("no comparison report: {err}"),
    }

    info!("fueleu accounting engine finished");
    Ok(())
}

fn demo_routes() -> Vec<Route> {
    vec![
        route("R001", "Container", "HFO", 2024, 91.0, 5000.0, 12000.0, 4500.0, true),
        route("R002", "BulkCarrier", "LNG", 2024, 88.0, 4800.0, 11500.0, 4200.0, false),
        route("R003", "Tanker", "MGO", 2024, 93.5, 5100.0, 12500.0, 4700.0, false),
        route("R004", "RoRo", "HFO", 2025, 89.2, 4900.0, 11800.0, 4300.0, false),
        route("R005", "Container", "LNG", 2025, 90.5, 4950.0, 11900.0, 4400.0, false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn route(
    route_id: &str,
    vessel_type: &str,
    fuel_type: &str,
    year: i32,
    ghg_intensity: f64,
    fuel_consumption: f64,
    distance: f64,
    total_emissions: f64,
    is_baseline: bool,
) -> Route {
    Route {
        id: route_id.to_lowercase(),
        route_id: route_id.to_string(),
        vessel_type: vessel_type.to_string(),
        fuel_type: fuel_type.to_string(),
        year,
        ghg_intensity,
        fuel_consumption,
        distance,
        total_emissions,
        is_baseline,
    }
}
