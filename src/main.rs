//! Name-tag firmware: main entry point
//!
//! Two execution contexts share one guarded core:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  esp_timer task (every 500 us)      main task (forever)         │
//! │                                                                │
//! │  TickOutputs                        TagHardware                │
//! │  (Charlieplex + Status)             (IR tx/rx + CoreClock)     │
//! │        │                                  │                    │
//! │        ▼                                  ▼                    │
//! │  ┌──────────── Guarded<TagCore> ─────────────────────────┐     │
//! │  │  TimeBase · PatternEngine · PresenceProtocol (FSM)    │     │
//! │  └───────────────────────────────────────────────────────┘     │
//! │                                           ▲                    │
//! │                                  TagService (listen/tx cycle)  │
//! │                                           │                    │
//! │                                    LogEventSink                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{error, info};

use nametag::adapters::hardware::TagHardware;
use nametag::adapters::log_sink::LogEventSink;
use nametag::adapters::time::CoreClock;
use nametag::app::service::TagService;
use nametag::config::TagConfig;
use nametag::drivers::{hw_init, hw_timer};
use nametag::shared::Guarded;
use nametag::tag::TagCore;

const CONFIG: TagConfig = TagConfig::DEFAULT;

static CORE: Guarded<TagCore> = Guarded::new(TagCore::new(&CONFIG));

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  NameTag v{}                         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    CONFIG
        .validate()
        .map_err(nametag::error::Error::from)
        .context("compiled-in configuration rejected")?;
    info!("Config: {}", serde_json::to_string(&CONFIG)?);

    // ── 3. Peripherals + tick timer ───────────────────────────
    CORE.lock(TagCore::start);
    if let Err(e) = hw_init::init_peripherals(CONFIG.ir_carrier_hz)
        .and_then(|()| hw_timer::start_tick_timer(&CORE, CONFIG.tick_period_us))
    {
        error!("HAL init failed: {}; halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Main loop ──────────────────────────────────────────
    let mut hw = TagHardware::new(CoreClock::new(&CORE));
    let mut sink = LogEventSink::new();
    let mut service = TagService::new(&CONFIG, &hw);
    service.start(&mut sink);
    service.run(&mut hw, &mut sink)
}
