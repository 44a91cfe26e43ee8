mod compare;
mod prompt;

use std::path::PathBuf;

use clap::Parser;

pub use self::{compare::compare, prompt::Prompt};
use crate::{
    api::{global_petrol_prices, vattenfall},
    core::trip::Trip,
    prelude::*,
    quantity::{
        distance::Kilometers,
        efficiency::{KilometersPerKilowattHour, KilometersPerLiter},
    },
};

/// Used when the distance is not entered or cannot be parsed.
///
/// Answers are read as decimals, so `22.5` is taken as is rather than falling back.
const DISTANCE_FALLBACK: Kilometers = Kilometers(15.0);

/// Used when the car efficiency is not entered or cannot be parsed.
///
/// The prompt advertises 9.4 km/L, but the fallback has always been 9.0 km/L.
/// Answers are read as decimals, so typing the advertised `9.4` does get 9.4.
const FUEL_EFFICIENCY_FALLBACK: KilometersPerLiter = KilometersPerLiter(9.0);

/// Used when the e-bike efficiency is not entered or cannot be parsed.
const ELECTRIC_EFFICIENCY_FALLBACK: KilometersPerKilowattHour = KilometersPerKilowattHour(90.0);

/// Find the cost of travel using either an e-bike or a car.
#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub trip: TripArgs,

    #[clap(flatten)]
    pub sources: SourceArgs,

    #[clap(flatten)]
    pub plot: PlotArgs,
}

#[derive(Parser)]
pub struct TripArgs {
    /// Round-trip length of the commute in kilometers. Prompted for when omitted.
    #[clap(long = "distance", env = "COMMUTE_DISTANCE_KM")]
    pub distance: Option<Kilometers>,

    /// Car efficiency in kilometers per liter. Prompted for when omitted.
    #[clap(long = "car-efficiency", env = "CAR_EFFICIENCY_KM_PER_LITER")]
    pub fuel_efficiency: Option<KilometersPerLiter>,

    /// E-bike efficiency in kilometers per kilowatt-hour. Prompted for when omitted.
    #[clap(long = "bike-efficiency", env = "BIKE_EFFICIENCY_KM_PER_KWH")]
    pub electric_efficiency: Option<KilometersPerKilowattHour>,

    /// Do not prompt, use the fallback values for the omitted parameters.
    #[clap(long = "no-input", env = "NO_INPUT")]
    pub no_input: bool,
}

impl TripArgs {
    /// Take the given parameters and ask for the rest.
    pub fn resolve<R: std::io::BufRead, W: std::io::Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Trip> {
        Ok(Trip {
            distance: prompt.ask_unless_given(
                self.distance,
                "Round-trip length of commute (kilometers) (Default: 15): ",
                DISTANCE_FALLBACK,
            )?,
            fuel_efficiency: prompt.ask_unless_given(
                self.fuel_efficiency,
                "Car efficiency (kilometers per liter) (Default: 9.4): ",
                FUEL_EFFICIENCY_FALLBACK,
            )?,
            electric_efficiency: prompt.ask_unless_given(
                self.electric_efficiency,
                "E-bike efficiency (kilometers per kilowatt-hour) (Default: 90): ",
                ELECTRIC_EFFICIENCY_FALLBACK,
            )?,
        })
    }
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Gasoline price page.
    #[clap(
        long = "fuel-price-url",
        env = "FUEL_PRICE_URL",
        default_value = global_petrol_prices::URL
    )]
    pub fuel_price_url: String,

    /// Electricity market price page.
    #[clap(
        long = "electricity-price-url",
        env = "ELECTRICITY_PRICE_URL",
        default_value = vattenfall::URL
    )]
    pub electricity_price_url: String,
}

#[derive(Parser)]
pub struct PlotArgs {
    /// Commute distance the plot is drawn for, regardless of `--distance`.
    #[clap(long = "plot-distance", env = "PLOT_DISTANCE_KM", default_value = "50")]
    pub plot_distance: Kilometers,

    /// Plot file, overwritten if it exists.
    #[clap(long = "output", env = "PLOT_PATH", default_value = "circleplot.png")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_ok() -> Result {
        let args = Args::try_parse_from(["commute-cost"])?;
        assert_eq!(args.plot.plot_distance, Kilometers(50.0));
        assert_eq!(args.plot.output, PathBuf::from("circleplot.png"));
        assert_eq!(args.sources.fuel_price_url, global_petrol_prices::URL);
        assert_eq!(args.sources.electricity_price_url, vattenfall::URL);
        Ok(())
    }

    #[test]
    fn given_parameters_are_not_asked() -> Result {
        let args = Args::try_parse_from([
            "commute-cost",
            "--distance",
            "22.5",
            "--car-efficiency",
            "12",
            "--bike-efficiency",
            "80",
        ])?;
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("1\n2\n3\n"), &mut output, true);
        let trip = args.trip.resolve(&mut prompt)?;
        assert_eq!(
            trip,
            Trip {
                distance: Kilometers(22.5),
                fuel_efficiency: KilometersPerLiter(12.0),
                electric_efficiency: KilometersPerKilowattHour(80.0),
            },
        );
        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn asked_parameters_ok() -> Result {
        let args = Args::try_parse_from(["commute-cost"])?;
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("30\n9.4\n95\n"), &mut output, true);
        let trip = args.trip.resolve(&mut prompt)?;
        assert_eq!(trip.distance, Kilometers(30.0));
        assert_eq!(trip.fuel_efficiency, KilometersPerLiter(9.4));
        assert_eq!(trip.electric_efficiency, KilometersPerKilowattHour(95.0));
        let output = String::from_utf8(output)?;
        assert!(output.contains("(Default: 15)"), "{output}");
        assert!(output.contains("(Default: 9.4)"), "{output}");
        assert!(output.contains("(Default: 90)"), "{output}");
        Ok(())
    }

    #[test]
    fn unparsable_answers_fall_back() -> Result {
        let args = Args::try_parse_from(["commute-cost"])?;
        let mut prompt = Prompt::new(Cursor::new("far\n\n"), Vec::new(), true);
        let trip = args.trip.resolve(&mut prompt)?;
        assert_eq!(
            trip,
            Trip {
                distance: Kilometers(15.0),
                fuel_efficiency: KilometersPerLiter(9.0),
                electric_efficiency: KilometersPerKilowattHour(90.0),
            },
        );
        Ok(())
    }

    #[test]
    fn no_input_falls_back() -> Result {
        let args = Args::try_parse_from(["commute-cost", "--no-input", "--distance", "7"])?;
        let mut output = Vec::new();
        let mut prompt =
            Prompt::new(Cursor::new("30\n9.4\n95\n"), &mut output, !args.trip.no_input);
        let trip = args.trip.resolve(&mut prompt)?;
        assert_eq!(trip.distance, Kilometers(7.0));
        assert_eq!(trip.fuel_efficiency, FUEL_EFFICIENCY_FALLBACK);
        assert_eq!(trip.electric_efficiency, ELECTRIC_EFFICIENCY_FALLBACK);
        assert!(output.is_empty());
        Ok(())
    }
}
