//! Batch conversion of translation exports into one generated Python module.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{document::LanguageDef, error::Error, render};

/// Collects language definitions from export files and writes the generated
/// module.
///
/// # Example
///
/// ```rust,no_run
/// use langgen::Converter;
///
/// let mut converter = Converter::new();
/// converter.read_file("Finnish.yml")?;
/// converter.read_file("German.yml")?;
/// converter.write_to_file("languages.py")?;
/// # Ok::<(), langgen::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    definitions: Vec<LanguageDef>,
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            definitions: Vec::new(),
        }
    }

    /// Load and validate one export file, keeping input order.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let def = LanguageDef::read_from(path)?;
        self.definitions.push(def);
        Ok(())
    }

    /// All definitions loaded so far, in input order.
    pub fn definitions(&self) -> &[LanguageDef] {
        &self.definitions
    }

    /// Write the generated module to any writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        render::write_module(&self.definitions, writer)
    }

    /// Write the generated module to a file, truncating any existing content.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}

/// Convert export files into one generated module in a single call.
///
/// All inputs are loaded and validated before the output file is created,
/// so a failing input never leaves a truncated module behind.
pub fn convert_files<I, P, Q>(inputs: I, output: Q) -> Result<(), Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut converter = Converter::new();
    for input in inputs {
        converter.read_file(input)?;
    }
    converter.write_to_file(output)
}
