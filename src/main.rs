//! swipedeck demo driver
//!
//! Replays a scripted gesture session against a catalog, sleeping out
//! the settle windows on tokio, and reports the final triage.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use swipedeck::{Catalog, Config, Decision, PointerInput, SwipeEngine};

/// Built-in catalog used when no --catalog file is given.
const SAMPLE_CATALOG: &str = r#"[
    {"id": 1, "name": "aurora sneakers", "brand": "northpeak", "price": 89.0,
     "originalPrice": 129.0, "discountPercentage": 31.0, "imageUrl": "/images/sneakers.jpg"},
    {"id": 2, "name": "canvas tote", "brand": "harborline", "price": 24.5},
    {"id": 3, "name": "trail jacket", "brand": "northpeak", "price": 149.0,
     "imageUrl": "/images/jacket.jpg"},
    {"id": 4, "name": "wool beanie", "brand": "drift", "price": 18.0,
     "originalPrice": 25.0, "discountPercentage": 28.0},
    {"id": 5, "name": "field watch", "brand": "meridian", "price": 210.0},
    {"id": 6, "name": "ceramic mug", "brand": "harborline", "price": 14.0},
    {"id": 7, "name": "linen shirt", "brand": "drift", "price": 56.0},
    {"id": 8, "name": "desk lamp", "brand": "meridian", "price": 74.0}
]"#;

/// Command-line arguments for swipedeck
#[derive(Parser, Debug)]
#[command(name = "swipedeck")]
#[command(version, about = "Swipe-to-triage demo driver", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "swipedeck.toml")]
    config: String,

    /// Catalog JSON file (falls back to a built-in sample)
    #[arg(long, env = "SWIPEDECK_CATALOG")]
    catalog: Option<PathBuf>,

    /// Milliseconds between scripted pointer samples
    #[arg(long, default_value = "25")]
    pace_ms: u64,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

/// One scripted gesture: drag to a target delta, then release.
#[derive(Debug, Clone, Copy)]
enum Script {
    SwipeRight,
    SwipeTop,
    SwipeLeft,
    Hesitate,
}

impl Script {
    fn target(self) -> (f64, f64) {
        match self {
            Script::SwipeRight => (240.0, 15.0),
            Script::SwipeTop => (0.0, -330.0),
            Script::SwipeLeft => (-240.0, 15.0),
            Script::Hesitate => (60.0, 20.0),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    info!("════════════════════════════════════════════════════════");
    info!("  swipedeck v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {} {}", env!("BUILD_DATE"), env!("BUILD_TIME"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("════════════════════════════════════════════════════════");

    // Load configuration
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        }
    };

    // Load catalog
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::from_json(SAMPLE_CATALOG).context("built-in sample catalog")?,
    };
    info!("Catalog loaded: {} products", catalog.len());

    let mut engine = SwipeEngine::new(catalog, &config);
    run_session(&mut engine, args.pace_ms).await;
    report(&engine);

    Ok(())
}

/// Replay scripted gestures until the deck is exhausted.
async fn run_session(engine: &mut SwipeEngine, pace_ms: u64) {
    let script = [
        Script::SwipeRight,
        Script::Hesitate,
        Script::SwipeTop,
        Script::SwipeLeft,
    ];
    let pace = Duration::from_millis(pace_ms);
    let mut step = 0usize;

    while !engine.is_exhausted() {
        let gesture = script[step % script.len()];
        step += 1;

        if let Some(card) = engine.active_card() {
            info!(
                "{:?} on #{} {} ({})",
                gesture,
                card.id,
                card.name.as_deref().unwrap_or("unnamed"),
                card.price_label()
            );
        }

        play_gesture(engine, gesture, pace).await;

        // Sleep out the settle window, then apply the commit.
        if let Some(deadline) = engine.next_deadline() {
            let now = Instant::now();
            if deadline > now {
                tokio::time::sleep(deadline - now).await;
            }
            if let Some(event) = engine.poll(Instant::now()) {
                debug!("settled: #{} -> {:?}", event.id, event.outcome);
            }
        }
    }

    info!("Deck exhausted after {} gestures", engine.stats().gestures_begun);
}

/// Drive one gesture as a series of interpolated pointer samples.
async fn play_gesture(engine: &mut SwipeEngine, gesture: Script, pace: Duration) {
    const STEPS: u32 = 6;
    let origin = (180.0, 420.0);
    let (dx, dy) = gesture.target();

    engine.pointer_down(&PointerInput::Mouse { x: origin.0, y: origin.1 });

    for i in 1..=STEPS {
        let t = f64::from(i) / f64::from(STEPS);
        let sample = PointerInput::Mouse {
            x: origin.0 + dx * t,
            y: origin.1 + dy * t,
        };
        let decision = engine.pointer_move(&sample, Instant::now());
        if decision != Decision::None {
            // Early commit: the sequencer froze this gesture already.
            return;
        }
        tokio::time::sleep(pace).await;
    }

    engine.pointer_up(Instant::now());
}

/// Log the final triage summary.
fn report(engine: &SwipeEngine) {
    let pool = engine.store().pool();
    let stats = engine.stats();

    let mut cart: Vec<u64> = pool.cart().iter().map(|id| id.0).collect();
    let mut wishlist: Vec<u64> = pool.wishlist().iter().map(|id| id.0).collect();
    let mut rejected: Vec<u64> = pool.rejected().iter().map(|id| id.0).collect();
    cart.sort_unstable();
    wishlist.sort_unstable();
    rejected.sort_unstable();

    info!("── Session summary ──────────────────────────────────────");
    info!("  Cart:     {:?}", cart);
    info!("  Wishlist: {:?}", wishlist);
    info!("  Rejected: {:?}", rejected);
    info!(
        "  Gestures: {} ({} snap-backs, {} cancelled commits)",
        stats.gestures_begun, stats.snap_backs, stats.cancelled_commits
    );
}

fn init_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("swipedeck={log_level},warn"))
        });

    match args.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    Ok(())
}
