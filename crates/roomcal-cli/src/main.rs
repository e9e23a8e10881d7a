//! Command-line front end for the roomcal engine.
//!
//! Fixture files stand in for the reservation backend: rooms and reservation
//! feeds are JSON in the same shape the booking API serves, and `book`
//! appends the submitted reservation back into the feed file. The `--anchor`
//! flag substitutes a fixed date for "today" so output is reproducible.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use roomcal_engine::error::{EngineError, Result as EngineResult};
use roomcal_engine::{
    quote, DayInterval, FetchOutcome, Horizon, RawRange, RenderedEvent, Reservation,
    ReservationBackend, Room, RoomCalendar, RoomId, SessionContext, DEFAULT_HORIZON_WEEKS,
    MAX_HORIZON_WEEKS,
};

#[derive(Parser)]
#[command(name = "roomcal", version, about = "Room booking calendar toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CalendarArgs {
    /// Path to a room JSON file
    #[arg(long)]
    room: PathBuf,

    /// Path to a reservations JSON file
    #[arg(long)]
    reservations: Option<PathBuf>,

    /// Date standing in for "today"; defaults to the current date
    #[arg(long)]
    anchor: Option<NaiveDate>,

    /// Whole weeks of calendar to generate
    #[arg(long, default_value_t = DEFAULT_HORIZON_WEEKS)]
    weeks: u32,

    /// IANA timezone used to resolve the current week
    #[arg(long, default_value = "UTC")]
    timezone: String,
}

#[derive(Args)]
struct StayArgs {
    /// First day of the requested booking
    #[arg(long)]
    from: NaiveDate,

    /// Last day of the requested booking
    #[arg(long)]
    to: NaiveDate,

    /// Acting user; omit to run anonymously
    #[arg(long)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the calendar events for a room
    Events {
        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Validate a booking interval against the calendar
    Check {
        #[command(flatten)]
        calendar: CalendarArgs,

        #[command(flatten)]
        stay: StayArgs,
    },
    /// Validate a booking and append it to the reservations file
    Book {
        #[command(flatten)]
        calendar: CalendarArgs,

        #[command(flatten)]
        stay: StayArgs,
    },
    /// Price a stay at a room's daily rate
    Quote {
        /// Path to a room JSON file
        #[arg(long)]
        room: PathBuf,

        /// First day of the stay
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the stay
        #[arg(long)]
        to: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Events { calendar } => run_events(&calendar),
        Commands::Check { calendar, stay } => run_check(&calendar, &stay, false),
        Commands::Book { calendar, stay } => run_check(&calendar, &stay, true),
        Commands::Quote { room, from, to } => run_quote(&room, from, to),
    }
}

/// Backend over local JSON fixture files. The room file is the identity, so
/// lookups ignore the id; submissions append to the reservations file.
struct FixtureBackend {
    room: PathBuf,
    reservations: Option<PathBuf>,
}

impl FixtureBackend {
    fn new(room: &Path, reservations: Option<&Path>) -> Self {
        Self {
            room: room.to_path_buf(),
            reservations: reservations.map(Path::to_path_buf),
        }
    }
}

impl ReservationBackend for FixtureBackend {
    fn fetch_room(&self, _room: &RoomId) -> EngineResult<Room> {
        let text = fs::read_to_string(&self.room).map_err(|e| {
            EngineError::Transport(format!("reading {}: {e}", self.room.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            EngineError::Transport(format!("parsing {}: {e}", self.room.display()))
        })
    }

    fn fetch_reservations_preview(&self, _room: &RoomId) -> EngineResult<Vec<Reservation>> {
        let Some(path) = self.reservations.as_deref() else {
            return Ok(Vec::new());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::Transport(format!("reading {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| EngineError::Transport(format!("parsing {}: {e}", path.display())))
    }

    fn submit_reservation(
        &self,
        _room: &RoomId,
        interval: DayInterval,
        _total: i64,
    ) -> EngineResult<()> {
        let Some(path) = self.reservations.as_deref() else {
            return Err(EngineError::Submission(
                "no reservations file to record the booking in".to_owned(),
            ));
        };
        let mut rows: Vec<Reservation> = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                EngineError::Submission(format!("parsing {}: {e}", path.display()))
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(EngineError::Submission(format!(
                    "reading {}: {err}",
                    path.display()
                )));
            }
        };
        rows.push(Reservation {
            start_date: interval.start().and_time(NaiveTime::MIN).and_utc(),
            end_date: interval.end().and_time(NaiveTime::MIN).and_utc(),
            status: "confirmed".to_owned(),
        });
        let text = serde_json::to_string_pretty(&rows)
            .map_err(|e| EngineError::Submission(e.to_string()))?;
        fs::write(path, text)
            .map_err(|e| EngineError::Submission(format!("writing {}: {e}", path.display())))
    }
}

fn build_calendar(args: &CalendarArgs) -> Result<(RoomCalendar, FixtureBackend)> {
    if args.weeks > MAX_HORIZON_WEEKS {
        return Err(anyhow!(
            "--weeks must be at most {MAX_HORIZON_WEEKS}, got {}",
            args.weeks
        ));
    }

    let backend = FixtureBackend::new(&args.room, args.reservations.as_deref());
    let fixture_id = RoomId::new(args.room.display().to_string());
    let room = backend.fetch_room(&fixture_id)?;

    let tz: Tz = args
        .timezone
        .parse()
        .map_err(|_| anyhow!("unknown timezone '{}'", args.timezone))?;
    let today = args
        .anchor
        .unwrap_or_else(|| Utc::now().with_timezone(&tz).date_naive());

    let horizon = Horizon::weeks_ahead(today, args.weeks);
    let mut calendar = RoomCalendar::new(&room, horizon, today)?;

    // A failed feed is tolerated: the calendar still renders its blackouts.
    let ticket = calendar.begin_refresh();
    if let FetchOutcome::Failed { notice } =
        calendar.apply_reservations(ticket, backend.fetch_reservations_preview(&fixture_id))
    {
        eprintln!("warning: {notice}");
    }
    Ok((calendar, backend))
}

fn run_events(args: &CalendarArgs) -> Result<()> {
    let (calendar, _) = build_calendar(args)?;
    let rendered: Vec<RenderedEvent> = calendar
        .visible_events()
        .iter()
        .map(|event| event.render_utc())
        .collect();
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

fn run_check(args: &CalendarArgs, stay: &StayArgs, submit: bool) -> Result<()> {
    let (mut calendar, backend) = build_calendar(args)?;
    let session = match stay.user.as_deref() {
        Some(name) => SessionContext::signed_in(name),
        None => SessionContext::anonymous(),
    };
    let raw = RawRange::new(
        stay.from.and_time(NaiveTime::MIN),
        stay.to.and_time(NaiveTime::MIN),
    );

    // A rejection is a verdict, not a failure: report it and exit cleanly.
    let verdict = match calendar.select(raw, &session) {
        Ok(interval) => {
            let quote = calendar.quote_selection()?;
            if submit {
                calendar
                    .submit(&backend)
                    .context("submitting the reservation")?;
            }
            json!({
                "ok": true,
                "booked": submit,
                "start": interval.start().to_string(),
                "end": interval.end().to_string(),
                "days": quote.days,
                "total": quote.total,
            })
        }
        Err(rejection) => json!({
            "ok": false,
            "reason": rejection.to_string(),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

fn run_quote(room_path: &Path, from: NaiveDate, to: NaiveDate) -> Result<()> {
    let backend = FixtureBackend::new(room_path, None);
    let room = backend.fetch_room(&RoomId::new(room_path.display().to_string()))?;
    let stay = DayInterval::new(from, to)?;
    let priced = quote(room.price_per_day, &stay)?;
    let output = json!({
        "room": room.id.to_string(),
        "days": priced.days,
        "pricePerDay": priced.price_per_day,
        "total": priced.total,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
