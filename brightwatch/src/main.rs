use brightwatch_core::{BrightnessError, Reporter, system_display};

fn main() -> Result<(), BrightnessError> {
    env_logger::init();

    let display = system_display()?;
    let Err(e) = Reporter::new(display, std::io::stdout()).run_forever();
    Err(e)
}
