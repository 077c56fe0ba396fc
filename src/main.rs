use reversi_cli::{logger, SessionEnd, Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_args();
    logger::init(settings.log_level)?;

    match reversi_cli::run(&settings)? {
        SessionEnd::Finished(_) => {}
        SessionEnd::Quit | SessionEnd::InputClosed => println!("Bye."),
    }
    Ok(())
}
