use ipv4_subnet_calc::output::print_report;
use ipv4_subnet_calc::summarize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).ok();
    log::info!("#Start main()");

    let mut json = false;
    let mut cidr: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => cidr = Some(arg),
        }
    }
    let cidr = cidr.ok_or("Usage: ipv4-subnet-calc [--json] <address>/<prefix>")?;

    let report = summarize(&cidr)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
