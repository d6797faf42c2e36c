use std::net::SocketAddr;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seat_booking::client::Client;
use seat_booking::config::{self, CancelPolicy, Config};
use seat_booking::engine::Engine;
use seat_booking::entities::{parse_food_charge, BookingRequest, ReservationDetails};
use seat_booking::error::Error;
use seat_booking::server::serve;

#[derive(Debug, Parser)]
#[command(name = "seat-booking", about = "Airline seat booking service and client")]
struct Args {
    /// Base URL of the booking server, for client commands.
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the booking server on the seeded flight schedule.
    Serve {
        #[arg(long)]
        addr: Option<SocketAddr>,
        /// restore_booked_class or flight_number_as_class
        #[arg(long)]
        cancel_policy: Option<CancelPolicy>,
    },
    /// List all flights with their remaining seats.
    Flights,
    /// Show one flight.
    Flight { flight_number: String },
    /// Book a seat.
    Book {
        passenger_name: String,
        flight_number: String,
        /// Economy, Premium Economy, Business or First Class
        class: String,
        #[arg(long)]
        discount: bool,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        food: String,
    },
    /// Cancel the first reservation held by a passenger.
    Cancel { passenger_name: String },
    /// List all reservations.
    Reservations,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let client = || Client::new(&args.url.clone().unwrap_or_else(config::client_url_from_env));

    match args.command {
        Command::Serve {
            addr,
            cancel_policy,
        } => {
            let mut config = Config::from_env()?;
            if let Some(addr) = addr {
                config.addr = addr;
            }
            if let Some(cancel_policy) = cancel_policy {
                config.cancel_policy = cancel_policy;
            }

            serve(Engine::seeded(config.cancel_policy), config.addr).await?;
        }
        Command::Flights => {
            println!("Available Flights:");
            for flight in client().list_flights().await? {
                println!("{}", flight.summary());
            }
        }
        Command::Flight { ref flight_number } => {
            println!("{}", client().find_flight(flight_number).await?.summary());
        }
        Command::Book {
            ref passenger_name,
            ref flight_number,
            ref class,
            discount,
            ref food,
        } => {
            let request = BookingRequest::new(passenger_name, flight_number, class)
                .with_discount(discount)
                .with_food_charge(parse_food_charge(food)?);

            let details = client().book(&request).await?;
            println!("Reservation successful!");
            print_details(&details);
        }
        Command::Cancel { ref passenger_name } => {
            let details = client().cancel(passenger_name).await?;
            println!(
                "Reservation for {} has been successfully canceled.",
                details.reservation.passenger_name
            );
        }
        Command::Reservations => {
            let reservations = client().list_reservations().await?;

            println!("Reservations:");
            if reservations.is_empty() {
                println!("No reservations found.");
            }
            for details in reservations.iter() {
                print_details(details);
            }
        }
    }

    Ok(())
}

fn print_details(details: &ReservationDetails) {
    println!("{}\n", details.summary);
}
