//! Grid Life CLI - Run a simulation from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::time::Instant;

use grid_life::{
    compute::Simulation,
    render::{RenderSink, TerminalRenderer},
    schema::RunConfig,
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let start = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 || args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration (default: built-in settings)");
        eprintln!();
        eprintln!("Example configuration is printed with --example flag.");
        std::process::exit(1);
    }

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    let config = match args.get(1) {
        Some(path) => RunConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => RunConfig::default(),
    };

    let display = config.display;
    let mut sim = Simulation::from_config(config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let mut renderer = TerminalRenderer::stdout();
    let sink: Option<&mut dyn RenderSink> = if display { Some(&mut renderer) } else { None };

    let summary = sim.run(sink).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    });

    println!();
    println!("Generations: {}", summary.generations);
    println!(
        "Population: {} -> {} ({:.1}% -> {:.1}%)",
        summary.initial_stats.population,
        summary.final_stats.population,
        summary.initial_stats.density * 100.0,
        summary.final_stats.density * 100.0
    );
    println!("Simulation took {:?}", summary.elapsed);
    println!("Whole program took {:?}", start.elapsed());
}

fn print_example_config() {
    let config = RunConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
