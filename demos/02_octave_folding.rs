//! # 02 - Octave Folding
//!
//! A one-octave rank sounds the whole keyboard: out-of-compass notes fold in
//! by octaves, and notes that land on the same valve overlap.
//!
//! **Concepts:** Compass, octave folding, overlap counting
//!
//! ```bash
//! cargo run --example 02_octave_folding
//! ```

use ripieno::prelude::*;

fn main() -> ripieno::Result<()> {
    // Twelve pipes from middle C.
    let mut console = Console::builder().solenoids(12).build()?;

    println!("Keying across the keyboard:");
    for note in [48u8, 60, 67, 79, 98] {
        if let DispatchResult::Keyed { index, .. } = console.handle_midi(&[0x90, note, 100])? {
            println!("  note {:>2} -> valve {:>2}", note, index);
        }
    }
    console.tick();

    // 48 and 60 share valve 0; it keeps sounding until both are released.
    println!("valve 0 overlap count: {}", console.active_count(0).unwrap_or(0));

    console.handle_midi(&[0x80, 48, 0])?;
    console.tick();
    let sounding = console.state(0) != Some(DriveState::Off);
    println!("released 48: valve 0 {}", if sounding { "still sounding" } else { "silent" });

    console.handle_midi(&[0x80, 60, 0])?;
    console.tick();
    let sounding = console.state(0) != Some(DriveState::Off);
    println!("released 60: valve 0 {}", if sounding { "still sounding" } else { "silent" });

    Ok(())
}
