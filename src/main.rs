use clap::{Parser, Subcommand};
use orcamento::{IssuerProfile, PageLayout, Quote, QuoteDraft, QuoteError, QuoteRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Renders quotes (orçamentos) as A4 PDF documents.
#[derive(Parser, Debug)]
#[command(name = "orcamento", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a quote snapshot (JSON) to `<out>/orcamento-n<id>.pdf`.
    Render {
        quote: PathBuf,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Issuer profile JSON; the built-in profile is used when omitted.
        #[arg(short, long)]
        profile: Option<PathBuf>,
        /// Page size and margins JSON, e.g. {"size": "A4", "margins": "1.5cm 2cm 2cm 2cm"}.
        #[arg(long)]
        page_layout: Option<PathBuf>,
    },
    /// Check a quote draft (JSON) and report the first problem found.
    Validate { draft: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render {
            quote,
            out,
            profile,
            page_layout,
        } => render(&quote, &out, profile.as_deref(), page_layout.as_deref()),
        Command::Validate { draft } => validate(&draft),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(
    quote_path: &Path,
    out_dir: &Path,
    profile_path: Option<&Path>,
    page_path: Option<&Path>,
) -> Result<(), QuoteError> {
    let quote: Quote = serde_json::from_str(&fs::read_to_string(quote_path)?)?;
    let profile = match profile_path {
        Some(path) => IssuerProfile::load(path)?,
        None => IssuerProfile::default(),
    };
    let mut renderer = QuoteRenderer::with_profile(profile);
    if let Some(path) = page_path {
        let page: PageLayout = serde_json::from_str(&fs::read_to_string(path)?)?;
        renderer = renderer.with_page_layout(page);
    }

    let rendered = renderer.render(&quote)?;
    fs::create_dir_all(out_dir)?;
    let target = out_dir.join(&rendered.filename);
    fs::write(&target, &rendered.bytes)?;
    println!("Wrote {} ({} bytes)", target.display(), rendered.bytes.len());
    Ok(())
}

fn validate(draft_path: &Path) -> Result<(), QuoteError> {
    let draft: QuoteDraft = serde_json::from_str(&fs::read_to_string(draft_path)?)?;
    let valid = draft.validate()?;
    println!(
        "Draft '{}' for {} is valid ({} service(s))",
        valid.title,
        valid.client_name,
        valid.services.len()
    );
    Ok(())
}
