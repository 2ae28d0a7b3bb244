use flashfs::{Disk, FileFlash, FileSystem, Geometry};

use crate::error::Error;

pub type FS = FileSystem<FileFlash>;

pub fn create(device: &str, geometry: Geometry) -> Result<(), Error> {
    if !geometry.is_valid() {
        return Err(flashfs::error::InputError::Geometry.into());
    }
    FileFlash::create(device, &geometry)?;
    info!("Created erased image {} of {} blocks", device, geometry.num_erase_blocks());
    Ok(())
}

pub fn open(device: &str, geometry: Geometry) -> Result<FS, Error> {
    let flash = FileFlash::open(device, &geometry)?;
    let disk = Disk::new(flash, geometry)?;
    Ok(FileSystem::new(disk)?)
}
