use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use clap::error::ErrorKind;
use langgen::convert_files;

/// Convert Robot Framework translations created at Crowdin to Python code.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Convert Robot Framework translations created at Crowdin to Python code.\n\n\
        Input files must be YAML exports from Crowdin, and the last path names\n\
        the Python file to generate. The generated file contains one language\n\
        class per input and can be used with Robot Framework like this:\n\n    \
        robot --language Lang.py tests.robot\n\n\
        To get a language added to Robot Framework itself, submit a pull request\n\
        adding the generated class to the `languages` module."
)]
struct Args {
    /// Input YAML files, followed by the output Python file.
    #[arg(required = true, num_args = 2.., value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Asking for help prints the usage documentation but still exits
        // with the usage status, like the original converter script did.
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            print!("{e}");
            exit(2);
        }
        Err(e) => e.exit(),
    };

    // clap guarantees at least two paths; the trailing one is the output.
    let Some((output, inputs)) = args.files.split_last() else {
        exit(2);
    };

    if let Err(e) = convert_files(inputs, output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("{}", output.display());
}
