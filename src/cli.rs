// src/cli.rs
use std::{error::Error, io::{self, Write}, path::PathBuf};

use crate::{
    board::{self, Board, PredictionsBoard, PropsBoard},
    config::options::{AppOptions, BucketFilter, PageKind},
    csv, file,
    render::{CardList, HtmlPage},
};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Report,
    Html(PathBuf),
    Export(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub page: PageKind,
    pub filter: BucketFilter,
    pub options: AppOptions,
    pub output: Output,
    pub show_help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            page: PageKind::Props,
            filter: BucketFilter::All,
            options: AppOptions::default(),
            output: Output::Report,
            show_help: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.show_help {
        println!("{HELP}");
        return Ok(());
    }
    let stdout = io::stdout();
    execute(&params, &mut stdout.lock())
}

/// Flags shared by both binaries; the GUI only looks at the sources.
pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => params.page = args.next().ok_or("Missing value for --page")?.parse()?,
            "--filter" => params.filter = args.next().ok_or("Missing value for --filter")?.parse()?,
            "--props" => {
                params.options.sources.props = args.next().ok_or("Missing value for --props")?.parse()?;
            }
            "--predictions" => {
                params.options.sources.predictions =
                    args.next().ok_or("Missing value for --predictions")?.parse()?;
            }
            "--html" => {
                params.output = Output::Html(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-o" | "--export" => params.output = Output::Export(args.next().ok_or("Missing output path")?),
            "--format" => {
                params.options.export.format = args.next().ok_or("Missing value for --format")?.parse()?;
            }
            "--no-headers" => params.options.export.include_headers = false,
            "-h" | "--help" => params.show_help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

/// Load the selected board once and write it where `params.output` says.
pub fn execute<W: Write>(params: &Params, out: &mut W) -> Result<(), Box<dyn Error>> {
    match params.page {
        PageKind::Props => show::<PropsBoard, W>(params, params.filter, out),
        PageKind::Predictions => show::<PredictionsBoard, W>(params, (), out),
    }
}

fn show<B: Board, W: Write>(params: &Params, view: B::View, out: &mut W) -> Result<(), Box<dyn Error>> {
    let source = params.options.sources.for_page(B::KIND);
    logf!("CLI: page={:?} source={} view={:?} output={:?}", B::KIND, source, view, params.output);

    match &params.output {
        Output::Report => {
            let mut list = CardList::new();
            let mounted = board::mount::<B>(source, view, &mut list);
            write_report(B::TITLE, &list, out)?;
            if mounted.is_none() {
                return Err(format!("Could not load {source}").into());
            }
        }
        Output::Html(path) => {
            let mut page = HtmlPage::new(B::TITLE);
            let mounted = board::mount::<B>(source, view, &mut page);
            let written = file::write_output(path, &page.finish())?;
            writeln!(out, "Wrote {}", written.display())?;
            if mounted.is_none() {
                return Err(format!("Could not load {source}").into());
            }
        }
        Output::Export(user_o) => {
            let mut list = CardList::new();
            let Some(b) = board::mount::<B>(source, view, &mut list) else {
                return Err(format!("Could not load {source}").into());
            };
            let export = &params.options.export;
            let default_name = export.out_path(B::KIND);
            let default_name = default_name
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| s!(B::KIND.stem()));
            let path = file::resolve_single_out_path(user_o, &default_name)?;
            let contents = csv::to_export_string(b.headers(), list.cards(), export.include_headers, export.delim());
            let written = file::write_output(&path, &contents)?;
            logf!("Export: {} card(s) → {}", list.len(), written.display());
            writeln!(out, "Exported {} card(s) to {}", list.len(), written.display())?;
        }
    }
    Ok(())
}

/// Terminal report: a title rule, then one blank-line-separated block per card.
pub fn write_report<W: Write>(title: &str, list: &CardList, out: &mut W) -> io::Result<()> {
    let heading = format!("{title} Results:");
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "=".repeat(heading.chars().count()))?;

    if let Some(msg) = list.notice_text() {
        writeln!(out, "\n{msg}")?;
        return Ok(());
    }
    if list.is_empty() {
        writeln!(out, "\nNo cards match.")?;
        return Ok(());
    }
    for card in list.cards() {
        write!(out, "\n{card}")?;
    }
    Ok(())
}
