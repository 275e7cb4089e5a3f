//! Example: Print the primary display's brightness once.
//!
//! Run with: `cargo run --example read_once`

use brightwatch_core::{BrightnessError, DisplayBrightness, format_line, system_display};

fn main() -> Result<(), BrightnessError> {
    // Initialize logging (optional)
    env_logger::init();

    let display = system_display()?;
    println!("Backend: {}", display.name());

    match display.get_current_brightness() {
        Ok(level) => println!("{} ({}%)", format_line(level), level.to_percent()),
        Err(e) => eprintln!("Error reading brightness: {}", e),
    }

    Ok(())
}
