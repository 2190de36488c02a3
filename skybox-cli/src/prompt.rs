use std::path::PathBuf;

use dialoguer::theme::Theme;
use dialoguer::{Confirm, Input, Select};
use libskybox::FaceLayout;
use miette::{IntoDiagnostic, Result};

use crate::completion::PathCompletion;

/// Values given on the command line, missing ones are asked interactively
#[derive(Debug, Default)]
pub struct SplitArgs {
    pub source: Option<String>,
    pub size: Option<u32>,
    pub out: Option<String>,
    pub layout: Option<FaceLayout>,
}

#[derive(Debug)]
pub struct SplitRequest {
    pub source: PathBuf,
    pub face_size: u32,
    pub out: PathBuf,
    pub layout: FaceLayout,
}

/// Collect the inputs in order: texture, face size, directory, layout
pub fn collect(args: SplitArgs, theme: &dyn Theme) -> Result<SplitRequest> {
    let source = match args.source {
        Some(value) => value,
        None => ask_source(theme)?,
    };

    let face_size = match args.size {
        Some(value) => value,
        None => ask_face_size(theme)?,
    };

    let out = match args.out {
        Some(value) => value,
        None => ask_directory(theme)?,
    };

    let layout = match args.layout {
        Some(value) => value,
        None => ask_layout(theme)?,
    };

    Ok(SplitRequest {
        source: PathBuf::from(source),
        face_size,
        out: PathBuf::from(out),
        layout,
    })
}

pub fn confirm(theme: &dyn Theme) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt("Extract the faces with these settings?")
        .default(true)
        .interact()
        .into_diagnostic()
}

/// Text shown before the confirmation
pub fn summary(request: &SplitRequest) -> Result<String> {
    let (width, height) = request.layout.template_size(request.face_size)?;

    Ok(format!(
        "Texture:   {}\nFace size: {} px (texture of {}x{} px expected)\nDirectory: {}\nLayout:    {}\n{}\n",
        request.source.display(),
        request.face_size,
        width,
        height,
        request.out.display(),
        request.layout,
        request.layout.diagram()
    ))
}

fn ask_source(theme: &dyn Theme) -> Result<String> {
    let completion = PathCompletion;

    Input::<String>::with_theme(theme)
        .with_prompt("Skybox texture")
        .completion_with(&completion)
        .validate_with(|input: &String| validate_source(input))
        .interact_text()
        .into_diagnostic()
}

fn ask_face_size(theme: &dyn Theme) -> Result<u32> {
    Input::<u32>::with_theme(theme)
        .with_prompt("Face size (in pixels)")
        .validate_with(|input: &u32| validate_face_size(*input))
        .interact_text()
        .into_diagnostic()
}

fn ask_directory(theme: &dyn Theme) -> Result<String> {
    let completion = PathCompletion;

    Input::<String>::with_theme(theme)
        .with_prompt("Save directory")
        .default(String::from("."))
        .completion_with(&completion)
        .interact_text()
        .into_diagnostic()
}

fn ask_layout(theme: &dyn Theme) -> Result<FaceLayout> {
    let items: Vec<String> = FaceLayout::ALL.iter().map(layout_label).collect();

    let index = Select::with_theme(theme)
        .with_prompt("Texture layout")
        .items(&items)
        .default(0)
        .interact()
        .into_diagnostic()?;

    Ok(FaceLayout::ALL[index])
}

fn layout_label(layout: &FaceLayout) -> String {
    format!("{} ({})", layout.name(), layout.description())
}

fn validate_source(input: &str) -> std::result::Result<(), String> {
    let path = std::path::Path::new(input.trim());

    if input.trim().is_empty() {
        return Err(String::from("path must not be empty"));
    }

    if !path.is_file() {
        return Err(format!("file \"{}\" does not exist", path.display()));
    }

    Ok(())
}

fn validate_face_size(input: u32) -> std::result::Result<(), String> {
    match input {
        0 => Err(String::from("face size must be a positive integer")),
        _ => Ok(()),
    }
}
