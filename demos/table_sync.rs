use drone_sim::io::hud;
use drone_sim::{compute, SpecTable};

fn main() {
    drone_sim::init_logging();

    let mut table = SpecTable::studio_default();
    table.set("Battery", "4S");
    table.set("Weight", "seven hundred");

    match table.to_config().and_then(|hw| compute(&hw)) {
        Ok(stats) => hud::stats_lines(&stats).iter().for_each(|l| println!("{l}")),
        Err(e) => println!("Error: {e}"),
    }

    table.set("Weight", "700g");
    match table.to_config().and_then(|hw| compute(&hw)) {
        Ok(stats) => hud::stats_lines(&stats).iter().for_each(|l| println!("{l}")),
        Err(e) => println!("Error: {e}"),
    }
}
