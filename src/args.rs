use clap::{value_parser, Arg, ArgMatches, Command};

/// Command-line interface definition
pub fn build_cli() -> Command {
    Command::new("rs8")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon codec over GF(8) for short messages")
        .arg_required_else_help(true)
        .arg(
            Arg::new("code")
                .short('c')
                .long("code")
                .help("Code shape as <code length>x<message length>")
                .value_name("SHAPE")
                .value_parser(["8x2", "4x2"])
                .default_value("8x2")
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Encode a message into a hex transmission")
                .arg(
                    Arg::new("message")
                        .help("Message value")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Decode and error-correct a hex transmission")
                .arg(transmission_arg()),
        )
        .subcommand(
            Command::new("corrupt")
                .about("Overwrite one symbol of a hex transmission")
                .arg(transmission_arg())
                .arg(
                    Arg::new("symbol")
                        .short('s')
                        .long("symbol")
                        .help("Symbol position, 0 is the first symbol")
                        .value_name("INDEX")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("value")
                        .short('v')
                        .long("value")
                        .help("Replacement field element (0-7)")
                        .value_name("VALUE")
                        .required(true)
                        .value_parser(value_parser!(u8).range(0..8)),
                ),
        )
        .subcommand(Command::new("info").about("Show code parameters"))
}

fn transmission_arg() -> Arg {
    Arg::new("transmission")
        .help("Transmission bytes in hex")
        .required(true)
        .value_parser(|input: &str| {
            hex::decode(input.trim()).map_err(|err| format!("Invalid hex transmission: {}", err))
        })
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}
