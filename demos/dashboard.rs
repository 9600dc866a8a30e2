use solar_dash::{Dashboard, DashboardError, PresetLocation, Selection, PRESET_LOCATIONS};
use std::env;

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::init();

    let name = env::args().nth(1).unwrap_or_else(|| "London".to_string());
    let Some(city) = PresetLocation::by_name(&name) else {
        let names: Vec<_> = PRESET_LOCATIONS.iter().map(|p| p.name).collect();
        eprintln!("Unknown city '{}'. Try one of: {}", name, names.join(", "));
        return Ok(());
    };

    let dashboard = Dashboard::new()?;
    match dashboard.select(city.coordinate).call().await? {
        Selection::Current(snapshot) => {
            println!("{} (data up to {})", city.name, snapshot.latest_date_label());
            for card in snapshot.metric_cards() {
                println!("  {:<12} {}", card.label, card.value);
            }
            println!("{}", serde_json::to_string_pretty(&snapshot.series).unwrap_or_default());
        }
        Selection::Superseded => println!("Selection superseded"),
    }
    Ok(())
}
