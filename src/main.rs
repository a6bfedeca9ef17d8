use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use garde::Validate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkeasy::formatting::{format_inr, format_vehicle_number, validate_vehicle_number};
use parkeasy::guard::{self, Access, ProtectedRoute};
use parkeasy::models::booking::{BookingStatus, BookingUpdate};
use parkeasy::models::parking::{LotQuery, SlotStatus};
use parkeasy::services::analytics::DEFAULT_ANALYTICS_DAYS;
use parkeasy::session::{self, SessionContext};
use parkeasy::validation::forms::{LoginForm, NewVehicleForm, RegisterForm};
use parkeasy::{ApiClient, Config};

#[derive(Parser)]
#[command(name = "parkeasy", version, about = "ParkEasy - find and book parking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PARKEASY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign into it
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PARKEASY_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List active parking lots, optionally near a point
    Lots {
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,
        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,
        /// Search radius in kilometres
        #[arg(long)]
        radius: Option<f64>,
    },
    /// List the free slots of a lot
    Slots {
        lot_id: String,
    },
    /// List your bookings
    Bookings {
        #[arg(long)]
        active: bool,
    },
    /// Cancel one of your bookings
    Cancel {
        booking_id: String,
    },
    /// Register a vehicle
    AddVehicle {
        #[arg(long)]
        plate: String,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
    },
    /// Platform statistics (admins only)
    Stats,
}

impl Commands {
    /// The client route whose gate this command is held to.
    fn route(&self) -> Option<ProtectedRoute> {
        match self {
            Commands::Login { .. } | Commands::Register { .. } | Commands::Logout => None,
            Commands::Whoami => Some(ProtectedRoute::Dashboard),
            Commands::Lots { .. } => Some(ProtectedRoute::FindParking),
            Commands::Slots { lot_id } => Some(ProtectedRoute::Booking {
                lot_id: lot_id.clone(),
            }),
            Commands::Bookings { .. } | Commands::Cancel { .. } | Commands::AddVehicle { .. } => {
                Some(ProtectedRoute::MyBookings)
            }
            Commands::Stats => Some(ProtectedRoute::AdminAnalytics),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::debug!("Using backend at {}", config.api_url);

    let api = Arc::new(ApiClient::from_config(&config));
    let session = SessionContext::start(api).await;

    session.scope(run(cli.command)).await
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let session = session::current()?;

    if let Some(route) = command.route() {
        match route.guard().check(&session) {
            Access::Granted => {}
            Access::Pending => anyhow::bail!("Session is still loading, try again"),
            Access::Redirect(to) => match to {
                guard::Redirect::SignIn => anyhow::bail!("Please log in first (parkeasy login)"),
                guard::Redirect::UserHome => {
                    anyhow::bail!("{} is only available to administrators", route.path())
                }
            },
        }
    }

    let api = session.api();

    match command {
        Commands::Login { email, password } => {
            LoginForm {
                email: email.clone(),
                password: password.clone(),
            }
            .validate()
            .context("Invalid login details")?;

            let user = session.sign_in(&email, &password).await?;
            println!("Signed in as {} ({})", user.full_name, user.email);
            println!("Continue at {}", guard::landing_route(&user));
        }

        Commands::Register {
            email,
            password,
            name,
        } => {
            RegisterForm {
                email: email.clone(),
                password: password.clone(),
                full_name: name.clone(),
                phone: None,
            }
            .validate()
            .context("Invalid registration details")?;

            let user = session.sign_up(&email, &password, &name).await?;
            println!("Welcome, {}!", user.full_name);
        }

        Commands::Logout => {
            session.sign_out();
            println!("Signed out");
        }

        Commands::Whoami => {
            if let Some(user) = session.user() {
                println!("{} <{}>", user.full_name, user.email);
                println!("role: {}", user.role.as_str());
                if let Some(phone) = user.phone.as_deref() {
                    println!("phone: {}", parkeasy::formatting::format_phone(phone));
                }
            }
        }

        Commands::Lots {
            latitude,
            longitude,
            radius,
        } => {
            let query = LotQuery {
                latitude,
                longitude,
                max_distance: radius,
            };
            let lots = api.get_parking_lots(query).await?;

            for lot in lots.iter().filter(|lot| lot.is_active) {
                println!(
                    "{}  {}  {}/{} free  {}/hr  {}",
                    lot.id,
                    lot.name,
                    lot.available_slots,
                    lot.total_slots,
                    format_inr(lot.price_per_hour),
                    lot.address
                );
            }
        }

        Commands::Slots { lot_id } => {
            let slots = api
                .get_parking_slots(&lot_id, Some(SlotStatus::Available))
                .await?;
            for slot in slots {
                println!(
                    "{}  floor {}  {}  {}",
                    slot.slot_number,
                    slot.floor_level,
                    slot.slot_type.as_str(),
                    slot.id
                );
            }
        }

        Commands::Bookings { active } => {
            let status = active.then_some(BookingStatus::Active);
            for booking in api.get_bookings(status).await? {
                let lot = booking
                    .parking_lot
                    .as_ref()
                    .map(|lot| lot.name.as_str())
                    .unwrap_or(&booking.lot_id);
                println!(
                    "{}  {}  {} → {}  {}  {}",
                    booking.id,
                    lot,
                    booking.start_time,
                    booking.end_time,
                    booking.status.as_str(),
                    format_inr(booking.total_price)
                );
            }
        }

        Commands::Cancel { booking_id } => {
            let booking = api
                .update_booking(&booking_id, &BookingUpdate::cancel())
                .await?;
            println!("Booking {} is now {}", booking.id, booking.status.as_str());
        }

        Commands::AddVehicle { plate, make, model } => {
            if !validate_vehicle_number(&plate) {
                anyhow::bail!(
                    "{} is not a valid registration number ({})",
                    plate,
                    parkeasy::formatting::VEHICLE_NUMBER_PLACEHOLDER
                );
            }

            let form = NewVehicleForm {
                license_plate: format_vehicle_number(&plate),
                make,
                model,
                color: None,
                vehicle_type: None,
            };
            form.validate().context("Invalid vehicle details")?;

            let vehicle = api.create_vehicle(&form).await?;
            println!("Registered {} ({})", vehicle.license_plate, vehicle.id);
        }

        Commands::Stats => {
            let stats = api.get_realtime_stats().await?;
            println!("users:     {} ({} new today)", stats.users.total, stats.users.new_today);
            println!("lots:      {} ({} active)", stats.parking_lots.total, stats.parking_lots.active);
            println!(
                "slots:     {} available / {} ({:.1}% occupied)",
                stats.slots.available, stats.slots.total, stats.slots.occupancy_rate
            );
            println!("bookings:  {} active, {} today", stats.bookings.active, stats.bookings.today);
            println!(
                "revenue:   {} total, {} today",
                format_inr(stats.revenue.total),
                format_inr(stats.revenue.today)
            );

            let series = api.get_booking_analytics(DEFAULT_ANALYTICS_DAYS).await?;
            let bookings: i64 = series.iter().map(|day| day.bookings).sum();
            println!("last {} days: {} bookings", DEFAULT_ANALYTICS_DAYS, bookings);
        }
    }

    Ok(())
}
