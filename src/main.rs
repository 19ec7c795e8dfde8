mod cli_parser;

use std::fs;
use std::io;
use std::process;

use clap::Parser;
use cli_parser::CliParser;

use tapevm::errors::ExecutionError;
use tapevm::exec::{Config, DEFAULT_TAPE_SIZE, VM};


fn io_error(err: io::Error) -> ! {
    eprintln!("IO error: {}", err);
    process::exit(1);
}


fn execution_error(err: ExecutionError) -> ! {
    eprintln!("Execution error: {}", err);
    process::exit(1);
}


fn main() {

    let args = CliParser::parse();

    let Some(source_file) = args.source_file else {
        println!("Usage: tapevm <file> [input] [size] [skip_zero_loops]");
        return;
    };

    let program = fs::read_to_string(source_file.as_path())
        .unwrap_or_else(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                eprintln!("File not found: \"{}\"", source_file.display());
                process::exit(1);
            }
            io_error(err)
        });

    let config = Config {
        tape_size: args.tape_size.unwrap_or(DEFAULT_TAPE_SIZE),
        skip_zero_loops: args.skip_zero_loops.unwrap_or(false),
    };

    let vm = VM::new(config)
        .unwrap_or_else(|err| execution_error(err));

    let output = vm.run(&program, args.input.as_deref().unwrap_or(""))
        .unwrap_or_else(|err| execution_error(err));

    println!("{}", output);

}
