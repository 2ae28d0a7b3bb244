use flashfs::{FileID, Link, SectorID};

use crate::error::Error;
use crate::image::FS;

fn owner(file: Option<FileID>) -> String {
    file.map_or("-".to_string(), |file| file.to_string())
}

/// Print directory and FAT side by side with the owning file of each sector
pub fn dump(fs: &mut FS, start: u8, lines: u16) -> Result<(), Error> {
    let owners = fs.owners()?;
    let tables = match fs.tables() {
        Some(tables) => tables,
        None => return Ok(()),
    };
    println!("{:>4} {:>4} | {:>4} {:>4} {:>5}", "FILE", "DIR", "SECT", "FAT", "OWNER");
    let end = core::cmp::min((start as u16).saturating_add(lines), 256);
    for index in start as u16..end {
        let index = index as u8;
        let head = match FileID::new(index) {
            Some(file) => tables.head(file).map_or("-".to_string(), |s| s.to_string()),
            None => "".to_string(),
        };
        let sector = SectorID::from(index);
        let link = match tables.link(sector) {
            Link::Next(next) => next.to_string(),
            Link::Last => "-".to_string(),
        };
        let owner = owner(owners[index as usize]);
        println!("{:>4} {:>4} | {:>4} {:>4} {:>5}", index, head, index, link, owner);
    }
    Ok(())
}
