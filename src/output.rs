//! Output line rendering for the CLI layer.
//!
//! Formatting is a pure function of (path, hash, options): the CLI resolves
//! its flags into one [`OutputOptions`] value up front and threads it through,
//! instead of consulting process-wide flag state.

/// Which hash representations to print, and how to join the columns.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Include the hexadecimal column (lowercase, no `0x` prefix, unpadded).
    pub hex: bool,
    /// Include the binary column.
    pub binary: bool,
    /// Include the decimal column.
    pub decimal: bool,
    /// Prefix each line with the file path as given.
    pub show_filenames: bool,
    /// Separator between columns.
    pub separator: String,
}

impl OutputOptions {
    /// Apply the default-format rule: when neither binary nor decimal is
    /// requested, hexadecimal is printed whether or not it was asked for
    /// explicitly.
    pub fn with_default_format(mut self) -> Self {
        if !self.binary && !self.decimal {
            self.hex = true;
        }
        self
    }
}

/// Render one output line for a hashed file.
///
/// Column order is fixed: filename, hexadecimal, binary, decimal. Columns
/// whose flag is off are omitted entirely, not left empty.
pub fn render_line(path: &str, hash: u64, opts: &OutputOptions) -> String {
    let mut columns: Vec<String> = Vec::new();
    if opts.show_filenames {
        columns.push(path.to_string());
    }
    if opts.hex {
        columns.push(format!("{hash:x}"));
    }
    if opts.binary {
        columns.push(format!("{hash:b}"));
    }
    if opts.decimal {
        columns.push(hash.to_string());
    }
    columns.join(&opts.separator)
}
