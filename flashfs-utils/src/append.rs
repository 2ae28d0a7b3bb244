use std::fs::File;
use std::io::Read;

use flashfs::{sector_from, FileID, SECTOR_SIZE};

use crate::error::Error;
use crate::image::FS;

/// Append `source` sector by sector, last sector padded with 0xFF
pub fn append(fs: &mut FS, file: FileID, source: &str) -> Result<(), Error> {
    let mut source_file = File::open(source)?;
    let mut buffer = [0u8; SECTOR_SIZE];
    loop {
        let mut size = 0;
        while size < buffer.len() {
            let read = source_file.read(&mut buffer[size..])?;
            if read == 0 {
                break;
            }
            size += read;
        }
        if size == 0 {
            break;
        }
        let sector = fs.append(file, &sector_from(&buffer[..size]))?;
        debug!("Appended {} bytes to file {} at sector {}", size, file, sector);
        if size < buffer.len() {
            break;
        }
    }
    fs.flush()?;
    Ok(())
}
