use assembly_line::{AssemblyLine, RegistryError, StationId, StationRegistry};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut line = StationRegistry::new(2)?;
    line.add_station(StationId::new(1), 10)?;
    line.add_station(StationId::new(2), 20)?;

    match line.add_station(StationId::new(3), 5) {
        Err(err @ RegistryError::CapacityExceeded { .. }) => info!("Third station refused: {}", err),
        other => other?,
    }
    info!("Total processing time: {}", line.total_processing_time());

    line.start_assembly(StationId::new(1))?;
    info!("Active stations: {}", line.num_active_stations());

    line.remove_station(StationId::new(1))?;
    info!(
        "After removal: {} station(s), total processing time {}",
        line.num_stations(),
        line.total_processing_time()
    );

    println!("{}", serde_json::to_string_pretty(&line.stats())?);
    Ok(())
}
