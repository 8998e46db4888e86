//! Command-line interface and interactive wizard.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::config::PASSWORD_MIN_LENGTH;
use crate::file::{find_eligible_files, get_file_info_list, get_output_path, validate_path};
use crate::processor;
use crate::secret::Password;
use crate::types::ProcessorMode;
use crate::ui::display::{clear_screen, print_banner, show_file_info, show_report, show_source_deleted, show_success};
use crate::ui::progress::Spinner;
use crate::ui::prompt::Prompt;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file into a .csx container.
    Encrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to appending .csx).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Decrypt a .csx container.
    Decrypt {
        /// Input container path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to stripping .csx).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Measure how close an encrypted container is to random noise.
    Analyze {
        /// The original (plaintext) file.
        #[arg(short, long)]
        original: PathBuf,

        /// The encrypted .csx container produced from it.
        #[arg(short, long)]
        encrypted: PathBuf,
    },

    /// Start interactive mode.
    Interactive,
}

#[derive(Parser)]
#[command(name = "cipherscope", version, about = "Encrypt files with AES-256-CBC and measure how random the result looks. Run without arguments for interactive mode.")]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    /// Parses arguments and installs the tracing subscriber.
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub fn execute(self) -> Result<()> {
        let prompt = Prompt::new(PASSWORD_MIN_LENGTH);
        match self.command {
            Some(Commands::Encrypt { input, output, password }) => run_mode(&input, output, password, ProcessorMode::Encrypt, &prompt),
            Some(Commands::Decrypt { input, output, password }) => run_mode(&input, output, password, ProcessorMode::Decrypt, &prompt),
            Some(Commands::Analyze { original, encrypted }) => run_analyze(&original, &encrypted),
            Some(Commands::Interactive) | None => run_interactive(&prompt),
        }
    }
}

fn run_mode(input: &Path, output: Option<PathBuf>, password: Option<String>, mode: ProcessorMode, prompt: &Prompt) -> Result<()> {
    let output = output.unwrap_or_else(|| get_output_path(input, mode));

    let password = match password {
        Some(password) => Password::from_string(password),
        None => get_password(prompt, mode)?,
    };

    process(mode, input, &output, &password)?;
    show_success(mode, &output);

    Ok(())
}

fn run_analyze(original: &Path, encrypted: &Path) -> Result<()> {
    let report = processor::analyze(original, encrypted)
        .with_context(|| format!("failed to analyze {} against {}", encrypted.display(), original.display()))?;

    show_report(&report);
    Ok(())
}

fn run_interactive(prompt: &Prompt) -> Result<()> {
    clear_screen()?;
    print_banner();

    let mode = prompt.select_processing_mode()?;
    let selected_file = select_file(prompt, mode)?;
    let output_path = get_output_path(&selected_file, mode);

    validate_path(&selected_file, true).with_context(|| format!("source validation failed: {}", selected_file.display()))?;
    if validate_path(&output_path, false).is_err() && !prompt.confirm_overwrite(&output_path)? {
        bail!("operation canceled by user");
    }

    let password = get_password(prompt, mode)?;
    process(mode, &selected_file, &output_path, &password)?;
    show_success(mode, &output_path);

    if mode == ProcessorMode::Encrypt && prompt.confirm_analysis()? {
        let report = processor::analyze(&selected_file, &output_path)?;
        show_report(&report);
    }

    cleanup_source(prompt, &selected_file, mode)?;

    Ok(())
}

fn select_file(prompt: &Prompt, mode: ProcessorMode) -> Result<PathBuf> {
    let eligible_files = find_eligible_files(mode)?;

    if eligible_files.is_empty() {
        bail!("no eligible files found for {mode} operation");
    }

    let file_infos = get_file_info_list(&eligible_files)?;
    show_file_info(&file_infos);

    prompt.select_file(&eligible_files)
}

fn get_password(prompt: &Prompt, mode: ProcessorMode) -> Result<Password> {
    let password = match mode {
        ProcessorMode::Encrypt => prompt.encryption_password()?,
        ProcessorMode::Decrypt => prompt.decryption_password()?,
    };
    Ok(Password::from_string(password))
}

fn process(mode: ProcessorMode, input: &Path, output: &Path, password: &Password) -> Result<()> {
    let spinner = Spinner::new(match mode {
        ProcessorMode::Encrypt => "Encrypting...",
        ProcessorMode::Decrypt => "Decrypting...",
    });

    let result = match mode {
        ProcessorMode::Encrypt => processor::encrypt(input, output, password).with_context(|| format!("failed to encrypt {}", input.display())),
        ProcessorMode::Decrypt => processor::decrypt(input, output, password).with_context(|| format!("failed to decrypt {}", input.display())),
    };

    spinner.finish();
    result
}

fn cleanup_source(prompt: &Prompt, path: &Path, mode: ProcessorMode) -> Result<()> {
    let file_type = match mode {
        ProcessorMode::Encrypt => "original",
        ProcessorMode::Decrypt => "encrypted",
    };

    if prompt.confirm_deletion(path, file_type)? {
        std::fs::remove_file(path).with_context(|| format!("failed to delete source file: {}", path.display()))?;
        show_source_deleted(path);
    }

    Ok(())
}
