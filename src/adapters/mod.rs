//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements                      | Connects to              |
//! |----------------|---------------------------------|--------------------------|
//! | `hardware`     | CharlieplexPort, StatusPort     | Ring + status GPIO       |
//! |                | IrCarrierPort, IrReceiverPort   | LEDC carrier, IR rx GPIO |
//! | `log_sink`     | EventSink                       | Serial log output        |
//! | `time`         | TockSource, PresenceLink        | Guarded `TagCore`        |

pub mod hardware;
pub mod log_sink;
pub mod time;
