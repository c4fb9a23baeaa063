//! One-shot hardware peripheral initialization and raw pin helpers.
//!
//! Configures GPIO directions and the LEDC carrier timer using raw ESP-IDF
//! sys calls.  Called once from `main()` before the tick timer starts.  The
//! helper functions below are what the drivers call at run time; each has a
//! no-op simulation twin so host builds link.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
    TimerCreateFailed(i32),
    TimerStartFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc)  => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc)    => write!(f, "LEDC carrier config failed (rc={})", rc),
            Self::TimerCreateFailed(rc) => write!(f, "tick timer create failed (rc={})", rc),
            Self::TimerStartFailed(rc)  => write!(f, "tick timer start failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

/// LEDC duty resolution used for the carrier: 8 bits, so half duty is 128.
pub const CARRIER_DUTY_HALF: u32 = 1 << 7;

#[cfg(target_os = "espidf")]
pub fn init_peripherals(carrier_hz: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the tick timer exists;
    // single-threaded.
    unsafe {
        init_charlieplex()?;
        init_ir()?;
        init_status_outputs()?;
        init_ledc(carrier_hz)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_carrier_hz: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
unsafe fn config_pin(pin: i32, mode: gpio_mode_t, pull_up: bool) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode,
        pull_up_en: if pull_up {
            gpio_pullup_t_GPIO_PULLUP_ENABLE
        } else {
            gpio_pullup_t_GPIO_PULLUP_DISABLE
        },
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    Ok(())
}

// ── Charlieplex lines ─────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_charlieplex() -> Result<(), HwInitError> {
    // All lines start floating; the first tick picks one pair.
    for pin in pins::LedPin::ALL {
        unsafe { config_pin(pin.gpio(), gpio_mode_t_GPIO_MODE_INPUT, false)? };
    }
    info!("hw_init: {} charlieplex lines released", pins::LedPin::COUNT);
    Ok(())
}

/// Put `pin` into high-impedance.
#[cfg(target_os = "espidf")]
pub fn gpio_release(pin: i32) {
    // SAFETY: direction change on a pin configured in init_charlieplex();
    // only the tick callback touches these pins after boot.
    unsafe { gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_release(_pin: i32) {}

/// Drive `pin` as a push-pull output at `high`.
#[cfg(target_os = "espidf")]
pub fn gpio_drive(pin: i32, high: bool) {
    // SAFETY: level is set before the direction flips so the pin never
    // glitches to the wrong level.  Tick callback only.
    unsafe {
        gpio_set_level(pin, u32::from(high));
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_drive(_pin: i32, _high: bool) {}

// ── IR link ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_ir() -> Result<(), HwInitError> {
    unsafe {
        config_pin(pins::IR_RX_GPIO, gpio_mode_t_GPIO_MODE_INPUT, true)?;
        config_pin(pins::IR_TX_GPIO, gpio_mode_t_GPIO_MODE_OUTPUT, false)?;
        gpio_set_level(pins::IR_TX_GPIO, 0);
    }
    info!("hw_init: IR rx={} tx={}", pins::IR_RX_GPIO, pins::IR_TX_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}

/// Simulation: an idle (high) line, so an active-low receiver reads quiet.
#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}

// ── Status outputs ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_status_outputs() -> Result<(), HwInitError> {
    for pin in [pins::STATUS_WATCHDOG_GPIO, pins::STATUS_ALERT_GPIO] {
        unsafe {
            config_pin(pin, gpio_mode_t_GPIO_MODE_OUTPUT, false)?;
            gpio_set_level(pin, 0);
        }
    }
    info!("hw_init: status outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC carrier ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_ledc(carrier_hz: u32) -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: pins::LEDC_TIMER_IR,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: carrier_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: Called from single main-task context via init_peripherals().
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 { return Err(HwInitError::LedcInitFailed(ret)); }
    info!("hw_init: LEDC timer {} at {} Hz", pins::LEDC_TIMER_IR, carrier_hz);
    Ok(())
}

/// Attach the IR emitter to the carrier channel at 50 % duty.
#[cfg(target_os = "espidf")]
pub fn ledc_start_carrier(hz: u32) {
    // SAFETY: timer configured in init_ledc(); main loop is the only caller.
    // Re-running channel config re-routes the pin from plain GPIO to LEDC.
    unsafe {
        ledc_set_freq(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_TIMER_IR, hz);
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: pins::LEDC_CH_IR,
            timer_sel: pins::LEDC_TIMER_IR,
            gpio_num: pins::IR_TX_GPIO,
            duty: CARRIER_DUTY_HALF,
            hpoint: 0,
            ..Default::default()
        });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_start_carrier(_hz: u32) {}

/// Stop the carrier with the output idling low.
#[cfg(target_os = "espidf")]
pub fn ledc_stop_carrier() {
    // SAFETY: channel configured by ledc_start_carrier(); main loop only.
    unsafe { ledc_stop(ledc_mode_t_LEDC_LOW_SPEED_MODE, pins::LEDC_CH_IR, 0); }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_stop_carrier() {}

/// Hand `pin` back to plain GPIO and hold it low.
#[cfg(target_os = "espidf")]
pub fn gpio_force_low(pin: i32) {
    // SAFETY: reset detaches the LEDC signal; main loop only.
    unsafe {
        gpio_reset_pin(pin);
        gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT);
        gpio_set_level(pin, 0);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_force_low(_pin: i32) {}
