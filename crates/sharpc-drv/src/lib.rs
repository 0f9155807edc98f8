//! Compiler driver: discovers source files, runs the lexer over each one,
//! and reports the outcome.
//!
//! The pipeline is deliberately shallow — read → lex → report — since this
//! repo carries no parser or later phases yet. `Config` captures the parsed
//! command line; `Session` owns the run.

use std::path::{Path, PathBuf};

use sharpc_lex::{Lexer, Token};
use walkdir::WalkDir;

mod error;

pub use error::DrvError;

/// Parsed command-line configuration for one `sharpcc` invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files or directories to lex. Directories are walked recursively.
    pub input_paths: Vec<PathBuf>,
    /// Print the full token stream per file instead of a summary count.
    pub verbose: bool,
}

/// The result of lexing a single file.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub tokens: Vec<Token>,
}

/// Owns the state of one driver invocation.
pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Discovers `*.cs` files from the configured input paths, lexes each
    /// one, and reports a summary (or, in verbose mode, the full token
    /// stream) to stdout. Returns `Err` on the first file that fails to
    /// read or lex.
    pub fn run(&self) -> Result<(), DrvError> {
        let files = self.discover_files()?;
        if files.is_empty() {
            return Err(DrvError::NoMatchingFiles);
        }

        let mut total_tokens = 0usize;
        for path in &files {
            if self.config.verbose {
                eprintln!("lexing: {}", path.display());
            }

            let result = self.lex_file(path)?;
            total_tokens += result.tokens.len();

            if self.config.verbose {
                for token in &result.tokens {
                    println!("{:?}", token);
                }
            }
        }

        println!(
            "ok: {} file(s), {} token(s)",
            files.len(),
            total_tokens
        );
        Ok(())
    }

    fn lex_file(&self, path: &Path) -> Result<FileResult, DrvError> {
        let source = std::fs::read_to_string(path).map_err(|e| DrvError::Io(path.to_path_buf(), e))?;
        let tokens = Lexer::new(&source)
            .lex()
            .map_err(|e| DrvError::Lex(path.to_path_buf(), e))?;
        Ok(FileResult {
            path: path.to_path_buf(),
            tokens,
        })
    }

    /// Expands the configured input paths into a sorted, deduplicated list
    /// of `*.cs` files: files are taken as-is, directories are walked
    /// recursively via `walkdir`.
    fn discover_files(&self) -> Result<Vec<PathBuf>, DrvError> {
        let mut files = Vec::new();
        for input in &self.config.input_paths {
            if input.is_dir() {
                for entry in WalkDir::new(input).into_iter() {
                    let entry = entry.map_err(DrvError::WalkDir)?;
                    if entry.file_type().is_file() && is_source_file(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
            } else if is_source_file(input) {
                files.push(input.clone());
            } else {
                return Err(DrvError::NotASourceFile(input.clone()));
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("cs")
}
