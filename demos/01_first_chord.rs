//! # 01 - First Chord
//!
//! Key a C major chord over raw MIDI bytes and watch the drive duties walk
//! through strike and hold.
//!
//! **Concepts:** Console setup, MIDI intake, the scheduling tick
//!
//! ```bash
//! cargo run --example 01_first_chord
//! ```

use std::time::Duration;

use ripieno::prelude::*;

fn main() -> ripieno::Result<()> {
    let mut console = Console::builder().solenoids(49).strike_ms(50).build()?;

    // C major, straight off the wire.
    for bytes in [[0x90, 60, 100], [0x90, 64, 100], [0x90, 67, 100]] {
        console.handle_midi(&bytes)?;
    }
    println!("Chord down...");

    let mut duties = [0u8; 49];
    for _ in 0..8 {
        console.tick();
        console.write_duties(&mut duties);
        println!(
            "t={:>3}ms  C={:>3}  E={:>3}  G={:>3}",
            console.now_ms(),
            duties[0],
            duties[4],
            duties[7]
        );
        std::thread::sleep(Duration::from_millis(10));
    }

    for bytes in [[0x80, 60, 0], [0x80, 64, 0], [0x80, 67, 0]] {
        console.handle_midi(&bytes)?;
    }
    console.tick();
    console.write_duties(&mut duties);
    println!("Released: C={} E={} G={}", duties[0], duties[4], duties[7]);

    Ok(())
}
