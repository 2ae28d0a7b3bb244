mod append;
mod cat;
mod dump;
mod error;
mod image;
mod list;
mod sector;

#[macro_use]
extern crate log;

use clap::Parser;
use flashfs::{FileID, Geometry};

fn parse_number(value: &str) -> Result<u32, String> {
    let result = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => value.parse(),
    };
    result.map_err(|e| e.to_string())
}

#[derive(Debug, clap::Args)]
struct File {
    /// File number, 0 to 254
    number: u8,
}

#[derive(Debug, clap::Args)]
struct Append {
    /// File number, 0 to 254
    number: u8,
    /// Specify source file to append
    source: String,
}

#[derive(Debug, clap::Args)]
struct Dump {
    /// First directory/FAT row to print
    #[clap(short, long, default_value_t = 0)]
    start: u8,
    /// Number of rows to print
    #[clap(short, long, default_value_t = 256)]
    lines: u16,
}

#[derive(Debug, clap::Args)]
struct Sector {
    /// Sector index, 0 to 255
    index: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Create an erased image
    Mkimage,
    /// Erase all files and data
    Format,
    /// Print the number of a new file
    New,
    /// Append file content, flushing metadata afterwards
    Append(Append),
    /// Concatenate all sectors of a file to standard output
    Cat(File),
    /// Print the number of sectors of a file
    Size(File),
    /// List files holding data
    #[clap(name = "ls")]
    List,
    /// Print directory and FAT
    Dump(Dump),
    /// Hex dump a raw sector
    Sector(Sector),
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Image file holding the flash region
    #[clap(short, long)]
    device: String,
    /// Address of the first byte of the region
    #[clap(long, value_parser = parse_number, default_value = "0x00020000")]
    base: u32,
    /// Address of the last byte of the region
    #[clap(long, value_parser = parse_number, default_value = "0x0003FFFF")]
    end: u32,
    /// Erase block size in bytes
    #[clap(long, value_parser = parse_number, default_value = "1024")]
    erase_block_size: u32,
    #[clap(subcommand)]
    action: Action,
}

fn file_id(number: u8) -> Result<FileID, error::Error> {
    Ok(FileID::try_from(number)?)
}

fn run(args: Args) -> Result<(), error::Error> {
    let geometry = Geometry {
        base_address: args.base,
        end_address: args.end,
        erase_block_size: args.erase_block_size,
        ..Default::default()
    };
    if let Action::Mkimage = args.action {
        return image::create(&args.device, geometry);
    }
    let mut fs = image::open(&args.device, geometry)?;
    match args.action {
        Action::Mkimage => unreachable!(),
        Action::Format => fs.format()?,
        Action::New => println!("{}", fs.new_file()?),
        Action::Append(args) => append::append(&mut fs, file_id(args.number)?, &args.source)?,
        Action::Cat(args) => cat::cat(&mut fs, file_id(args.number)?)?,
        Action::Size(args) => println!("{}", fs.size(file_id(args.number)?)?),
        Action::List => list::list(&mut fs)?,
        Action::Dump(args) => dump::dump(&mut fs, args.start, args.lines)?,
        Action::Sector(args) => sector::sector(&mut fs, args.index)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Some(error) = run(args).err() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
