use chrono::NaiveDate;
use usbiz::{Calendar, WalkOptions};
/// example to show the public holidays and business-day tally of a region
use std::env::args;
fn main() -> usbiz::Result<()> {
    let args: Vec<String> = args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} region year", args[0]);
        std::process::exit(2);
    }
    let year: i32 = match args[2].parse() {
        Ok(year) => year,
        Err(_) => {
            eprintln!("{} is not a year", args[2]);
            std::process::exit(2);
        }
    };
    let cal = Calendar::new(&args[1])?;
    for holiday in cal.list_holidays(year) {
        println!("{}  {}", holiday.date, holiday.name);
    }
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Ok(());
    };
    let tally = cal.count_days(first, last, WalkOptions::including_initial_date())?;
    println!(
        "{} business days, {} holidays ({} on weekends)",
        tally.business_days, tally.holidays, tally.holidays_on_weekends
    );
    Ok(())
}
