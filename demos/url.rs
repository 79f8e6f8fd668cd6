use keyarg::{Command, ConfigError, Parameter};

fn main() -> Result<(), ConfigError> {
    let mut command = Command::new();
    command
        .add(
            Parameter::<String>::optional("protocol")
                .short('s')
                .help("The transfer protocol.")
                .default("http".to_string()),
        )?
        .add(
            Parameter::<String>::optional("domain")
                .short('d')
                .help("The domain to connect to.")
                .default("localhost".to_string()),
        )?
        .add(
            Parameter::<u16>::essential("port")
                .short('p')
                .help("The port to connect to.")
                .validate(|port| *port > 0),
        )?;

    // Exits with the errors and usage when the command line is invalid.
    command.parse();

    match (
        command.get::<String>("protocol"),
        command.get::<String>("domain"),
        command.get::<u16>("port"),
    ) {
        (Ok(protocol), Ok(domain), Ok(port)) => println!("{protocol}://{domain}:{port}"),
        _ => unreachable!("all options are bound after a valid parse"),
    }

    Ok(())
}
