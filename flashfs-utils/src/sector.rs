use flashfs::SectorID;
use pretty_hex::PrettyHex;

use crate::error::Error;
use crate::image::FS;

pub fn sector(fs: &mut FS, index: u8) -> Result<(), Error> {
    let mut buf = [0u8; 512];
    fs.disk().read(SectorID::from(index), &mut buf)?;
    println!("{:?}", buf.hex_dump());
    Ok(())
}
