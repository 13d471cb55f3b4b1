//! Wall-clock scheduling tests.
//!
//! `Console::tick` reads the real clock, so these tests sleep briefly. The
//! strike interval is kept short and the margins generous to stay stable on
//! loaded machines.

use std::thread;
use std::time::Duration;

use ripieno::prelude::*;

/// The strike drops to hold on the real clock.
#[test]
fn test_wall_clock_strike_to_hold() {
    let mut console = Console::builder()
        .solenoids(4)
        .strike_ms(5)
        .build()
        .expect("Failed to build test console");

    console.note_on(0);
    console.tick();
    assert_eq!(console.state(0), Some(DriveState::Strike));

    thread::sleep(Duration::from_millis(25));
    console.tick();
    assert_eq!(console.state(0), Some(DriveState::Hold));
}

/// The console clock starts at build time and only moves forward.
#[test]
fn test_console_clock_advances() {
    let console = Console::builder()
        .solenoids(1)
        .build()
        .expect("Failed to build test console");

    let before = console.now_ms();
    thread::sleep(Duration::from_millis(10));
    let after = console.now_ms();
    assert!(after >= before + 5, "clock went {} -> {}", before, after);
}

/// A release observed between wall-clock ticks still wins over hold.
#[test]
fn test_wall_clock_release_beats_hold() {
    let mut console = Console::builder()
        .solenoids(4)
        .strike_ms(5)
        .build()
        .expect("Failed to build test console");

    console.note_on(2);
    console.tick();

    thread::sleep(Duration::from_millis(25));
    console.note_off(2);
    console.tick();
    assert_eq!(console.state(2), Some(DriveState::Off));
}
