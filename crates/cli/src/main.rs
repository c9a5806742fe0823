//! pagewalk - Inspect the pages of a document
//!
//! Loads a JSON-serialized object graph and, for each selected page, prints
//! its extracted text, its content stream instructions, or its effective
//! attributes after inheritance.

mod loader;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagewalk_core::{
    InstructionLog, MemoryStore, ObjectStore, Page, PageOptions, ResourceCategory,
};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Walk page content streams of a JSON document.
#[derive(Parser, Debug)]
#[command(name = "pagewalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Page numbers to process, 1-based (comma or space separated)
    #[arg(long = "pages", short = 'p', global = true)]
    pages: Option<String>,

    /// Treat operands left at the end of a content stream as an error
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum depth of a page's ancestor chain
    #[arg(long = "max-depth", global = true)]
    max_depth: Option<usize>,

    /// Use debug logging level
    #[arg(long, short = 'd', global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text of each page
    Text {
        /// Path to the JSON document
        file: PathBuf,
    },
    /// Print each instruction as `callback operands...`
    Ops {
        /// Path to the JSON document
        file: PathBuf,
    },
    /// Print effective attributes, resource tables and geometry
    Attrs {
        /// Path to the JSON document
        file: PathBuf,
    },
}

impl Command {
    fn file(&self) -> &Path {
        match self {
            Self::Text { file } | Self::Ops { file } | Self::Attrs { file } => file,
        }
    }
}

/// Parse a page list such as `1,3 5` into 1-based page numbers.
fn parse_page_numbers(list: Option<&str>) -> Option<Vec<usize>> {
    let nums: Vec<usize> = list?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .collect();
    (!nums.is_empty()).then_some(nums)
}

fn page_options(args: &Args) -> PageOptions {
    let mut options = PageOptions::default().strict_operands(args.strict);
    if let Some(depth) = args.max_depth {
        options = options.max_tree_depth(depth);
    }
    options
}

fn write_text<W: Write>(page: &Page<'_>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", page.text()?)?;
    Ok(())
}

fn write_ops<W: Write>(page: &Page<'_>, out: &mut W) -> Result<()> {
    let mut log = InstructionLog::new();
    // Instructions seen before a malformed tail are still printed.
    let walked = page.walk(&mut [&mut log]);
    for ins in &log.instructions {
        write!(out, "{}", ins.operator.callback_name())?;
        for operand in &ins.operands {
            write!(out, " {operand}")?;
        }
        writeln!(out)?;
    }
    walked?;
    Ok(())
}

fn write_attrs<W: Write>(page: &Page<'_>, out: &mut W) -> Result<()> {
    let mut attrs: Vec<_> = page.attributes()?.iter().collect();
    attrs.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in attrs {
        writeln!(out, "/{key} {value}")?;
    }

    for category in ResourceCategory::ALL {
        let names: Vec<String> = if category == ResourceCategory::ProcSet {
            page.procedure_sets()?.iter().map(ToString::to_string).collect()
        } else {
            let mut names: Vec<String> = page.resource_table(category)?.keys().cloned().collect();
            names.sort();
            names
        };
        if !names.is_empty() {
            writeln!(out, "{}: {}", category.key(), names.join(" "))?;
        }
    }

    let [x0, y0, x1, y1] = page.media_box()?;
    writeln!(out, "MediaBox: {x0} {y0} {x1} {y1}")?;
    let [x0, y0, x1, y1] = page.crop_box()?;
    writeln!(out, "CropBox: {x0} {y0} {x1} {y1}")?;
    writeln!(
        out,
        "Size: {} x {} rotate {} {:?}",
        page.width()?,
        page.height()?,
        page.rotate()?,
        page.orientation()?
    )?;
    Ok(())
}

fn process_document<W: Write>(
    store: &MemoryStore,
    args: &Args,
    out: &mut W,
) -> Result<()> {
    let options = page_options(args);
    let numbers = parse_page_numbers(args.pages.as_deref())
        .unwrap_or_else(|| (1..=store.page_references().len()).collect());

    for number in numbers {
        let page = Page::open_with_options(store, number, options.clone())?;
        tracing::debug!(page = number, "processing page");
        match &args.command {
            Command::Text { .. } => write_text(&page, out),
            Command::Ops { .. } => {
                writeln!(out, "% page {number}")?;
                write_ops(&page, out)
            }
            Command::Attrs { .. } => {
                writeln!(out, "% page {number}")?;
                write_attrs(&page, out)
            }
        }
        .with_context(|| format!("page {number}"))?;
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let path = args.command.file();
    let store = loader::load_document(path)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    process_document(&store, &args, &mut out)
        .with_context(|| format!("error processing {}", path.display()))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "trailer": {"Root": {"ref": 1}},
        "objects": {
            "1": {"Type": "/Catalog", "Pages": {"ref": 2}},
            "2": {"Type": "/Pages", "Kids": [{"ref": 3}], "Count": 1,
                  "MediaBox": [0, 0, 595, 842], "Rotate": 90,
                  "Resources": {"Font": {"F1": {"ref": 5}}, "ProcSet": ["/PDF", "/Text"]}},
            "3": {"Type": "/Page", "Parent": {"ref": 2}, "Contents": {"ref": 10}},
            "5": {"Type": "/Font", "Subtype": "/Type1", "Encoding": "/WinAnsiEncoding"},
            "10": {"stream": {}, "data": "BT /F1 12 Tf 72 700 Td (Hello) Tj T* (world) Tj ET"}
        }
    }"#;

    fn run(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let store = loader::parse_document(DOC.as_bytes()).unwrap();
        let mut out = Vec::new();
        process_document(&store, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_page_numbers() {
        assert_eq!(parse_page_numbers(Some("1,3 5")), Some(vec![1, 3, 5]));
        assert_eq!(parse_page_numbers(Some("0, x")), None);
        assert_eq!(parse_page_numbers(None), None);
    }

    #[test]
    fn test_text_command() {
        assert_eq!(run(&["pagewalk", "text", "doc.json"]), "Hello\nworld\n");
    }

    #[test]
    fn test_ops_command() {
        insta::assert_snapshot!(run(&["pagewalk", "ops", "doc.json", "--pages", "1"]), @r"
        % page 1
        begin_text_object
        set_text_font_and_size /F1 12
        move_text_position 72 700
        show_text (Hello)
        move_to_start_of_next_line
        show_text (world)
        end_text_object
        ");
    }

    #[test]
    fn test_attrs_command() {
        insta::assert_snapshot!(run(&["pagewalk", "attrs", "doc.json"]), @r"
        % page 1
        /Contents 10 0 R
        /MediaBox [0 0 595 842]
        /Parent 2 0 R
        /Resources <</Font <</F1 5 0 R>> /ProcSet [/PDF /Text]>>
        /Rotate 90
        /Type /Page
        Font: F1
        ProcSet: /PDF /Text
        MediaBox: 0 0 595 842
        CropBox: 0 0 595 842
        Size: 842 x 595 rotate 90 Landscape
        ");
    }

    #[test]
    fn test_page_out_of_range_fails() {
        let args = Args::try_parse_from(["pagewalk", "text", "doc.json", "-p", "4"]).unwrap();
        let store = loader::parse_document(DOC.as_bytes()).unwrap();
        assert!(process_document(&store, &args, &mut Vec::new()).is_err());
    }
}
