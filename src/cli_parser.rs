use std::path::PathBuf;

use clap::Parser;


#[derive(Parser)]
#[clap(author, about, version)]
pub struct CliParser {

    /// The program file to execute.
    #[clap()]
    pub source_file: Option<PathBuf>,

    /// Text supplied to the program as its input stream.
    #[clap()]
    pub input: Option<String>,

    /// Set the tape size in cells.
    #[clap()]
    pub tape_size: Option<usize>,

    /// Skip loop bodies opened on a zero cell with a forward scan.
    #[clap()]
    pub skip_zero_loops: Option<bool>,

}
