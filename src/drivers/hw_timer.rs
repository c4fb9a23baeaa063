//! Display tick timer using ESP-IDF's esp_timer API.
//!
//! A single periodic timer runs [`TagCore::on_tick`] every tick period.
//! The callback executes in the ESP timer task context (not ISR), takes the
//! core's lock for the whole tick and builds the tick-side outputs on the
//! stack.

use crate::drivers::hw_init::HwInitError;
use crate::shared::Guarded;
use crate::tag::TagCore;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::adapters::hardware::TickOutputs;

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

/// SAFETY: TICK_TIMER is written once in `start_tick_timer()` before any
/// callback fires.  Only called from the single main task.
#[cfg(target_os = "espidf")]
unsafe fn tick_timer() -> esp_timer_handle_t { unsafe { TICK_TIMER } }

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the `&'static Guarded<TagCore>` registered in
    // start_tick_timer(); it outlives the timer.
    let tag = unsafe { &*(arg as *const Guarded<TagCore>) };
    tag.lock(|c| c.on_tick(&mut TickOutputs::new()));
}

/// Start the periodic display tick.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(tag: &'static Guarded<TagCore>, period_us: u32) -> Result<(), HwInitError> {
    // SAFETY: TICK_TIMER is written here once at boot from the single
    // main-task context before any callback fires.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: tag as *const Guarded<TagCore> as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"tick".as_ptr(),
            skip_unhandled_events: true,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            return Err(HwInitError::TimerCreateFailed(ret));
        }
        let ret = esp_timer_start_periodic(tick_timer(), u64::from(period_us));
        if ret != ESP_OK {
            return Err(HwInitError::TimerStartFailed(ret));
        }
    }
    info!("hw_timer: display tick every {} us", period_us);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(_tag: &'static Guarded<TagCore>, _period_us: u32) -> Result<(), HwInitError> {
    log::info!("hw_timer(sim): tick timer not started (ticks driven by the caller)");
    Ok(())
}
