//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use accel_personality::one_dim::linear::interp;
use accel_personality::tables::{MAX_ACCEL_BP, MAX_ACCEL_SPORT};
use accel_personality::{AccelLimiter, Personality};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let mut limiter = AccelLimiter::new();
    limiter.set_personality(Personality::Sport);
    let _ = limiter.get_accel_limits(12.0, (-3.5, 2.0));

    let _ = interp(12.0, &MAX_ACCEL_BP, MAX_ACCEL_SPORT.values());
    let _ = "eco".parse::<Personality>();

    loop {} // We don't actually run this, just compile it
}
