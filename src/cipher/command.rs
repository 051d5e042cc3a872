use super::error::CipherError;

/// How `export` renders the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Aligned `Source --> Target` table (default)
    #[default]
    Table,
    /// JSON array of `{"source", "target"}` objects
    Json,
}

/// A typed REPL command
///
/// Parsing only checks the command shape (name and argument count). Letter
/// validation is left to [`CipherEngine`](super::CipherEngine) so that the
/// engine's guarantees hold no matter who calls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `substitute FROM TO` (aliases `sub`, `s`)
    Substitute { from: String, to: String },
    /// `revert LETTERS...` (aliases `rev`, `r`)
    Revert { letters: String },
    /// `export [json]` (alias `x`)
    Export { format: ExportFormat },
    /// `quit` (alias `q`)
    Quit,
}

impl Command {
    /// Parse one line of user input
    ///
    /// Arguments are separated by whitespace. `substitute` ignores anything
    /// after its second argument; `revert` joins all of its arguments, so
    /// `revert A B C` and `revert ABC` are equivalent.
    ///
    /// # Example
    /// ```
    /// use cryptogram::cipher::Command;
    ///
    /// let cmd = Command::parse("sub ABC XYZ").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::Substitute { from: "ABC".into(), to: "XYZ".into() }
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, CipherError> {
        let mut parts = input.split_whitespace();
        let name = parts.next().ok_or(CipherError::EmptyCommand)?;
        let args: Vec<&str> = parts.collect();

        match name {
            "substitute" | "sub" | "s" => match args.as_slice() {
                [from, to, ..] => Ok(Command::Substitute {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                }),
                _ => Err(CipherError::NotEnoughArgs {
                    command: "Substitute",
                }),
            },
            "revert" | "rev" | "r" => {
                if args.is_empty() {
                    return Err(CipherError::NotEnoughArgs { command: "Revert" });
                }
                Ok(Command::Revert {
                    letters: args.concat(),
                })
            }
            "export" | "x" => match args.first() {
                None => Ok(Command::Export {
                    format: ExportFormat::Table,
                }),
                Some(&"json") => Ok(Command::Export {
                    format: ExportFormat::Json,
                }),
                Some(other) => Err(CipherError::UnknownExportFormat((*other).to_string())),
            },
            "quit" | "q" => Ok(Command::Quit),
            other => Err(CipherError::UnknownCommand(other.to_string())),
        }
    }
}
