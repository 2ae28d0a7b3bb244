use std::io;
use std::io::Write;

use flashfs::FileID;

use crate::error::Error;
use crate::image::FS;

pub fn cat(fs: &mut FS, file: FileID) -> Result<(), Error> {
    let mut stdout = io::stdout();
    let mut buf = [0u8; 512];
    for index in 0..fs.size(file)? {
        fs.read(file, index, &mut buf)?;
        stdout.write_all(&buf)?;
    }
    stdout.flush()?;
    Ok(())
}
