extern crate libskybox;

use clap::{Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;
use libskybox::{ExtractionOutcome, FaceLayout, ImageCrateBackend};
use log::LevelFilter;
use miette::{IntoDiagnostic, Result};

mod completion;
mod progress;
mod prompt;

#[derive(Parser, Debug)]
#[command(name = "Skybox CLI")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Print debugging information
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the supported cross layouts
    Layouts,
    /// Slice a skybox texture into six face images
    Split {
        /// Skybox texture file
        #[arg(short, long, value_name = "FILE")]
        source: Option<String>,
        /// Size of a single face (in pixels)
        #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
        size: Option<u32>,
        /// Outbound directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<String>,
        /// Cross layout of the texture
        #[arg(short, long, value_name = "NAME", value_parser = parse_layout)]
        layout: Option<FaceLayout>,
        /// Do not ask for confirmation
        #[arg(short, long, default_value_t = false)]
        yes: bool,
        /// Create the outbound directory if it is missing
        #[arg(long, default_value_t = false)]
        create_dir: bool,
    },
}

/// How an interactive session ended
#[derive(Debug, PartialEq, Eq)]
enum Session {
    Completed,
    Declined,
}

pub fn main() -> Result<()> {
    let stdout = console::Term::stdout();
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Layouts => command_layouts(&stdout)?,
        Commands::Split {
            source,
            size,
            out,
            layout,
            yes,
            create_dir,
        } => {
            let args = prompt::SplitArgs {
                source,
                size,
                out,
                layout,
            };

            if command_split(&stdout, args, yes, create_dir)? == Session::Declined {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter.as_str()),
    );

    if builder.try_init().is_err() {
        log::debug!("logger is already initialized");
    }
}

fn command_layouts(stdout: &console::Term) -> Result<()> {
    for layout in FaceLayout::ALL {
        let title = format!(
            "{} - {}",
            console::style(layout.name()).bold(),
            layout.description()
        );

        stdout.write_line(&title).into_diagnostic()?;
        stdout.write_line(&layout.diagram()).into_diagnostic()?;
        stdout.write_line("").into_diagnostic()?;
    }

    Ok(())
}

fn command_split(
    stdout: &console::Term,
    args: prompt::SplitArgs,
    yes: bool,
    create_dir: bool,
) -> Result<Session> {
    let theme = ColorfulTheme::default();

    stdout.clear_screen().into_diagnostic()?;
    stdout.write_line(&get_banner()).into_diagnostic()?;

    let request = prompt::collect(args, &theme)?;
    stdout
        .write_line(&prompt::summary(&request)?)
        .into_diagnostic()?;

    let confirmed = yes || prompt::confirm(&theme)?;
    run_split(stdout, &request, confirmed, create_dir)
}

fn run_split(
    stdout: &console::Term,
    request: &prompt::SplitRequest,
    confirmed: bool,
    create_dir: bool,
) -> Result<Session> {
    if !confirmed {
        let text = console::style("Aborted, nothing was extracted").red();
        stdout.write_line(&text.to_string()).into_diagnostic()?;
        return Ok(Session::Declined);
    }

    if create_dir {
        std::fs::create_dir_all(&request.out).into_diagnostic()?;
    }

    let regions = libskybox::resolve_regions(request.face_size, request.layout)?;
    let observer = progress::ProgressObserver::new()?;

    let outcome = libskybox::extract_faces_with(
        &ImageCrateBackend,
        &observer,
        &request.source,
        &request.out,
        &regions,
    );

    observer.finish();

    match outcome {
        ExtractionOutcome::Success {
            elapsed_ms,
            saved_directory,
        } => {
            let text = format!(
                "{} Faces saved into \"{}\" in {} ms",
                console::style("Done!").green().bold(),
                saved_directory.display(),
                elapsed_ms
            );
            stdout.write_line(&text).into_diagnostic()?;
        }
        ExtractionOutcome::Failure { cause } => {
            let text = console::style("Something went wrong while extracting the faces").red();
            stdout.write_line(&text.to_string()).into_diagnostic()?;
            eprintln!("{:?}", miette::Report::new(cause));
        }
    }

    Ok(Session::Completed)
}

fn get_banner() -> String {
    let title = console::style(format!(" Skybox CLI v{} ", env!("CARGO_PKG_VERSION")))
        .black()
        .on_cyan()
        .bold();
    let hint = console::style("Slices a cross skybox texture into six cube faces").dim();

    format!("{title}\n{hint}\n")
}

fn parse_layout(value: &str) -> std::result::Result<FaceLayout, String> {
    value.parse::<FaceLayout>().map_err(|_| {
        format!(
            "unknown layout, expected one of: {}",
            FaceLayout::supported_names()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn split_arguments_are_optional() {
        let cli = Cli::try_parse_from(["skybox-cli", "split"]).expect("parse failed");

        match cli.command {
            Commands::Split {
                source,
                size,
                out,
                layout,
                yes,
                create_dir,
            } => {
                assert!(source.is_none() && size.is_none() && out.is_none());
                assert!(layout.is_none());
                assert!(!yes && !create_dir);
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn split_arguments_are_parsed() {
        let cli = Cli::try_parse_from([
            "skybox-cli",
            "-v",
            "split",
            "--source",
            "sky.png",
            "--size",
            "512",
            "--out",
            "faces",
            "--layout",
            "top-right-bottom",
            "--yes",
        ])
        .expect("parse failed");

        assert!(cli.verbose);
        match cli.command {
            Commands::Split {
                source,
                size,
                out,
                layout,
                yes,
                ..
            } => {
                assert_eq!(source.as_deref(), Some("sky.png"));
                assert_eq!(size, Some(512));
                assert_eq!(out.as_deref(), Some("faces"));
                assert_eq!(layout, Some(FaceLayout::TopRightBottom));
                assert!(yes);
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn invalid_split_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["skybox-cli", "split", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["skybox-cli", "split", "--size", "-4"]).is_err());
        assert!(Cli::try_parse_from(["skybox-cli", "split", "--size", "big"]).is_err());
        assert!(Cli::try_parse_from(["skybox-cli", "split", "--layout", "strip"]).is_err());
    }

    fn split_request(root: &std::path::Path) -> prompt::SplitRequest {
        prompt::SplitRequest {
            source: root.join("missing.png"),
            face_size: 4,
            out: root.join("faces"),
            layout: FaceLayout::TopFrontBottom,
        }
    }

    #[test]
    fn declined_split_touches_nothing() {
        let tmp = tempdir::TempDir::new("skybox-cli").expect("failed to create temp dir");
        let request = split_request(tmp.path());

        let session = run_split(&console::Term::stdout(), &request, false, true)
            .expect("declined split failed");

        assert_eq!(session, Session::Declined);
        assert!(!request.out.exists(), "directory created after decline");
    }

    #[test]
    fn failed_extraction_still_completes_session() {
        let tmp = tempdir::TempDir::new("skybox-cli").expect("failed to create temp dir");
        let request = split_request(tmp.path());

        let session = run_split(&console::Term::stdout(), &request, true, true)
            .expect("confirmed split failed");

        assert_eq!(session, Session::Completed);
        assert!(request.out.is_dir());
        assert!(!request.out.join("Left.png").exists());
    }

    #[test]
    fn layout_parser_lists_supported_names() {
        let error = parse_layout("strip").expect_err("strip must be rejected");
        assert!(error.contains("top-front-bottom"));
        assert_eq!(parse_layout("top-front-bottom"), Ok(FaceLayout::TopFrontBottom));
    }
}
