//! Energy Consumption Forecast
//!
//! Fits the five-term model to 20 days of (day, temperature, consumption)
//! observations, then forecasts days 21-26 one at a time with a rolling
//! 20-day window that is refitted after every new observation.

use rollreg::prelude::*;

fn main() -> Result<(), RegressionError> {
    println!("{}", "=".repeat(72));
    println!("Rolling-Window Energy Forecast");
    println!("{}", "=".repeat(72));
    println!();

    // Days 1-20: [day, temperature]
    let x = Matrix::new(
        20,
        2,
        vec![
            1.0, 21.5, 2.0, 21.2, 3.0, 22.1, 4.0, 25.1, 5.0, 26.4, //
            6.0, 22.6, 7.0, 17.7, 8.0, 18.5, 9.0, 21.2, 10.0, 20.3, //
            11.0, 17.0, 12.0, 19.2, 13.0, 19.4, 14.0, 21.9, 15.0, 25.5, //
            16.0, 26.3, 17.0, 26.3, 18.0, 24.7, 19.0, 21.4, 20.0, 21.04,
        ],
    )?;

    // Daily consumption (kWh)
    let y = Matrix::column(vec![
        2357.85, 2669.7, 2669.7, 2998.05, 3512.85, 3542.55, 3248.85, 3341.25, 3453.45, 3598.65,
        3413.85, 4271.85, 4393.95, 3686.1, 3682.8, 3550.8, 4719.0, 3979.35, 4131.6, 4141.5,
    ]);

    // Days 21-26 arrive one at a time
    let new_x = Matrix::new(
        6,
        2,
        vec![
            21.0, 21.3, 22.0, 23.0, 23.0, 23.45, 24.0, 23.8, 25.0, 21.42, 26.0, 23.09,
        ],
    )?;
    let new_y = Matrix::column(vec![4027.65, 3986.4, 3963.3, 4026.0, 3936.9, 3996.3]);

    println!("Regression on the initial 20 days");
    println!("{}", "-".repeat(72));
    let initial = run_regression(&x, &y)?;
    println!("{}", initial);

    println!("Rolling-window forecasts");
    println!("{}", "-".repeat(72));
    let forecaster = Regression::new()
        .window_size(20)
        .confidence_level(0.95)
        .adapter(Rolling)
        .build()?;
    let forecasts = forecaster.predict(&x, &y, &new_x, &new_y)?;
    println!("{}", forecasts);

    Ok(())
}
