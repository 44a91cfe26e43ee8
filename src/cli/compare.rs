use std::io;

use crate::{
    cli::{Args, Prompt},
    core::provider::PriceFetcher,
    prelude::*,
    render::Comparison,
    tables::build_price_table,
};

/// Ask for the trip, look up the prices, print the costs, and save the plot.
#[instrument(skip_all)]
pub fn compare(args: &Args) -> Result {
    println!("Find the cost of travel using either an e-bike or a car.\n");
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout(), !args.trip.no_input);
    let trip = args.trip.resolve(&mut prompt)?;
    info!(
        distance = %trip.distance,
        fuel_efficiency = %trip.fuel_efficiency,
        electric_efficiency = %trip.electric_efficiency,
        "trip",
    );

    info!("scraping gas and electricity prices online…");
    let fetcher = PriceFetcher::new(
        args.sources.fuel_price_url.clone(),
        args.sources.electricity_price_url.clone(),
    );
    let fuel = fetcher.fetch_fuel_price();
    let electricity = fetcher.fetch_electricity_price();
    println!("{}", build_price_table(&fuel, &electricity));

    let fuel_cost = trip.fuel_cost(fuel.price());
    let electricity_cost = trip.electricity_cost(electricity.price());
    println!("The cost of gas for this commute is {fuel_cost},");
    println!("and the cost of electricity for this commute is {electricity_cost}.");

    // The plot keeps its own distance and the default efficiencies.
    Comparison::builder()
        .distance(args.plot.plot_distance)
        .fuel_price(fuel.price())
        .electricity_price(electricity.price())
        .build()
        .save(&args.plot.output)?;
    println!("Plot saved: {}", args.plot.output.display());

    Ok(())
}
